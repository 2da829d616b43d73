pub mod error;
pub mod films;
pub mod users;
mod views;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::infrastructure::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(films::film_routes())
        .merge(users::user_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
