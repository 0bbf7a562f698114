use lazy_static::lazy_static;
use regex::Regex;

/// Check a candidate password against the signup rules.
///
/// Every rule is evaluated independently; the returned messages keep the rule
/// order: lowercase, uppercase, trailing digit, minimum length. Empty result
/// means the password is acceptable.
pub fn validate_password(password: &str) -> Vec<&'static str> {
    lazy_static! {
        static ref LOWERCASE_RE: Regex = Regex::new("[a-z]").unwrap();
        static ref UPPERCASE_RE: Regex = Regex::new("[A-Z]").unwrap();
        static ref TRAILING_DIGIT_RE: Regex = Regex::new("[0-9]$").unwrap();
    }

    let mut violations = Vec::new();
    if !LOWERCASE_RE.is_match(password) {
        violations.push("Password must contain a lowercase letter.");
    }
    if !UPPERCASE_RE.is_match(password) {
        violations.push("Password must contain an uppercase letter.");
    }
    if !TRAILING_DIGIT_RE.is_match(password) {
        violations.push("Password must end with a number.");
    }
    if password.chars().count() < 8 {
        violations.push("Password must be at least 8 characters long.");
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_conforming_password() {
        assert!(validate_password("Passw0rd1").is_empty());
        assert!(validate_password("Aband0ned6").is_empty());
    }

    #[test]
    fn rejects_missing_lowercase() {
        let violations = validate_password("PASSWORD1");
        assert_eq!(violations, ["Password must contain a lowercase letter."]);
    }

    #[test]
    fn rejects_missing_uppercase() {
        let violations = validate_password("password1");
        assert_eq!(violations, ["Password must contain an uppercase letter."]);
    }

    #[test]
    fn rejects_missing_trailing_digit() {
        let violations = validate_password("Password");
        assert_eq!(violations, ["Password must end with a number."]);
    }

    #[test]
    fn digit_must_be_last_character() {
        assert_eq!(
            validate_password("Pass1word"),
            ["Password must end with a number."]
        );
        // A digit in the middle does not satisfy the trailing-digit rule.
        assert_eq!(
            validate_password("Passw0rd"),
            ["Password must end with a number."]
        );
    }

    #[test]
    fn rejects_short_password() {
        let violations = validate_password("Pass1");
        assert_eq!(violations, ["Password must be at least 8 characters long."]);
    }

    #[test]
    fn reports_every_violation_in_rule_order() {
        let violations = validate_password("###");
        assert_eq!(
            violations,
            [
                "Password must contain a lowercase letter.",
                "Password must contain an uppercase letter.",
                "Password must end with a number.",
                "Password must be at least 8 characters long.",
            ]
        );
    }
}
