use super::{dish, order};
use crate::{types::Context, utils::fallback};
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to GrubDash API" })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/dishes", dish::get_router())
        .nest("/orders", order::get_router())
        .fallback(fallback::not_found)
}
