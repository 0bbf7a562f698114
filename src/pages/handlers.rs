use axum::{
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::SignedCookieJar;
use tracing::{debug, warn};

use crate::auth::session::{self, Flash};
use crate::pages::views;
use crate::state::AppState;

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/secretPage", get(secret_page))
        .route("/thankyou", get(thank_you))
}

pub async fn home(jar: SignedCookieJar) -> (SignedCookieJar, Html<String>) {
    let (jar, flash) = session::take_flash(jar);
    (jar, views::home_page(flash.as_ref()))
}

/// Session-gated: anonymous visitors are bounced to the login form.
pub async fn secret_page(jar: SignedCookieJar) -> Response {
    match session::authenticated_user_id(&jar) {
        Some(user_id) => {
            debug!(user_id, "rendering secret page");
            let (jar, flash) = session::take_flash(jar);
            (jar, views::secret_page(flash.as_ref())).into_response()
        }
        None => {
            warn!("anonymous request to secret page");
            let jar = session::push_flash(jar, Flash::danger("You need to login first!"));
            (jar, Redirect::to("/login")).into_response()
        }
    }
}

pub async fn thank_you(jar: SignedCookieJar) -> (SignedCookieJar, Html<String>) {
    let (jar, flash) = session::take_flash(jar);
    (jar, views::thank_you_page(flash.as_ref()))
}
