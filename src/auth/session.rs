//! Typed view of the per-client session and flash cookies.
//!
//! The session holds a single value of interest: the authenticated user's id,
//! absent for anonymous clients. Both cookies go through the signed jar so a
//! client cannot forge either one.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const SESSION_COOKIE: &str = "session";
pub const FLASH_COOKIE: &str = "flash";

/// Severity category attached to a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Danger,
    Success,
}

/// One-time notification queued by a handler and consumed by the next
/// rendered page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    pub message: String,
    pub level: FlashLevel,
}

impl Flash {
    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: FlashLevel::Danger,
        }
    }
}

/// The user id recorded in the session cookie, `None` when anonymous or when
/// the cookie fails signature verification.
pub fn authenticated_user_id(jar: &SignedCookieJar) -> Option<i64> {
    jar.get(SESSION_COOKIE)?.value().parse().ok()
}

pub fn log_in(jar: SignedCookieJar, user_id: i64) -> SignedCookieJar {
    jar.add(
        Cookie::build((SESSION_COOKIE, user_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

pub fn log_out(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/"))
}

pub fn push_flash(jar: SignedCookieJar, flash: Flash) -> SignedCookieJar {
    match serde_json::to_string(&flash) {
        Ok(value) => jar.add(
            Cookie::build((FLASH_COOKIE, value))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax),
        ),
        Err(e) => {
            warn!(error = %e, "failed to encode flash message");
            jar
        }
    }
}

/// Read-once: returns the pending flash, if any, and a jar with it removed.
pub fn take_flash(jar: SignedCookieJar) -> (SignedCookieJar, Option<Flash>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, None);
    };
    let flash = serde_json::from_str(cookie.value()).ok();
    let jar = jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/"));
    (jar, flash)
}
