use axum::Router;

use crate::state::AppState;

pub mod handlers;
pub mod views;

pub fn router() -> Router<AppState> {
    handlers::page_routes()
}
