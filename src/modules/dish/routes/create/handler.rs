use super::{service::service, types::request};
use crate::{types::Context, utils::envelope::Data};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, Data(body): Data) -> impl IntoResponse {
    service(ctx, request::Payload { body }).await
}
