use super::types::{request, response};
use crate::{
    modules::order::{guards, repository},
    types::Context,
    utils::{error::ApiError, guard::Exchange},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.orders.write().await;
    let mut exchange = Exchange::new(orders.as_slice()).with_route_id(payload.id);

    guards::delete().run(&mut exchange)?;

    let Exchange { found, .. } = exchange;
    let order = found
        .and_then(|index| repository::delete(&mut orders, index))
        .ok_or_else(|| ApiError::internal("Failed to delete order"))?;

    tracing::debug!("Order deleted: {}", order.id);

    Ok(response::Success::OrderDeleted)
}
