use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginForm, SignupForm},
        password::{hash_password, verify_password},
        policy::validate_password,
        repo::{CreateUserError, User},
        session::{self, Flash},
    },
    pages::views,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(signup_form).post(signup))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}

pub async fn signup_form(jar: SignedCookieJar) -> (SignedCookieJar, Html<String>) {
    let (jar, flash) = session::take_flash(jar);
    (jar, views::signup_page(flash.as_ref()))
}

/// Signup checks short-circuit in a fixed order: confirmation match, email
/// uniqueness, password policy. A new account does not log the visitor in.
#[instrument(skip(state, jar, form))]
pub async fn signup(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<SignupForm>,
) -> Result<(SignedCookieJar, Redirect), (StatusCode, String)> {
    if form.password != form.confirm_password {
        warn!(email = %form.email, "signup passwords do not match");
        let jar = session::push_flash(jar, Flash::danger("Passwords do not match!"));
        return Ok((jar, Redirect::to("/signup")));
    }

    match User::find_by_email(&state.db, &form.email).await {
        Ok(Some(_)) => {
            warn!(email = %form.email, "signup email already registered");
            let jar = session::push_flash(jar, Flash::danger("Email address already exists!"));
            return Ok((jar, Redirect::to("/signup")));
        }
        Ok(None) => {}
        Err(e) => {
            error!(error = %e, "find_by_email failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    }

    let violations = validate_password(&form.password);
    if !violations.is_empty() {
        warn!(email = %form.email, ?violations, "signup password rejected by policy");
        let jar = session::push_flash(jar, Flash::danger("Password didn't meet the requirements"));
        return Ok((jar, Redirect::to("/signup")));
    }

    let hash = match hash_password(&form.password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "hash_password failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let user = match User::create(
        &state.db,
        &form.first_name,
        &form.last_name,
        &form.email,
        &hash,
    )
    .await
    {
        Ok(u) => u,
        Err(CreateUserError::EmailTaken) => {
            // Lost a race with a concurrent signup for the same email.
            warn!(email = %form.email, "signup email already registered");
            let jar = session::push_flash(jar, Flash::danger("Email address already exists!"));
            return Ok((jar, Redirect::to("/signup")));
        }
        Err(CreateUserError::Database(e)) => {
            error!(error = %e, "create user failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    info!(user_id = user.id, email = %user.email, "user signed up");
    Ok((jar, Redirect::to("/thankyou")))
}

pub async fn login_form(jar: SignedCookieJar) -> (SignedCookieJar, Html<String>) {
    let (jar, flash) = session::take_flash(jar);
    (jar, views::login_page(flash.as_ref()))
}

#[instrument(skip(state, jar, form))]
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(SignedCookieJar, Redirect), (StatusCode, String)> {
    let user = match User::find_by_email(&state.db, &form.email).await {
        Ok(found) => found,
        Err(e) => {
            error!(error = %e, "find_by_email failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let verified = match &user {
        Some(user) => match verify_password(&form.password, &user.password_hash) {
            Ok(ok) => ok,
            Err(e) => {
                error!(error = %e, "verify_password failed");
                return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
            }
        },
        None => false,
    };

    match (user, verified) {
        (Some(user), true) => {
            info!(user_id = user.id, email = %user.email, "user logged in");
            Ok((session::log_in(jar, user.id), Redirect::to("/secretPage")))
        }
        _ => {
            warn!(email = %form.email, "login rejected");
            let jar = session::push_flash(jar, Flash::danger("Invalid email or password!"));
            Ok((jar, Redirect::to("/login")))
        }
    }
}

pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    info!("user logged out");
    (session::log_out(jar), Redirect::to("/"))
}
