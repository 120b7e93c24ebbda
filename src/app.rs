use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/calendar", get(handlers::get_calendar))
        .route(
            "/api/records",
            get(handlers::list_records).post(handlers::post_record),
        )
        .with_state(state)
}
