use super::types::{request, response};
use crate::{
    modules::order::{guards, repository},
    types::Context,
    utils::{error::ApiError, guard::Exchange, validation},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.orders.write().await;
    let mut exchange = Exchange::new(orders.as_slice())
        .with_route_id(payload.id)
        .with_data(payload.body);

    guards::update().run(&mut exchange)?;

    let Exchange { data, found, .. } = exchange;
    let body = validation::parse::<request::Body>(repository::ENTITY, data)?;
    let order = match found {
        Some(index) => orders.get_mut(index),
        None => None,
    }
    .ok_or_else(|| ApiError::internal("Failed to update order"))?;

    repository::update(order, body.into());

    tracing::debug!("Order updated: {} is now {:?}", order.id, order.status);

    Ok(response::Success::OrderUpdated(order.clone()))
}
