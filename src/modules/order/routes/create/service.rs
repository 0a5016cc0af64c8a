use super::types::{request, response};
use crate::{
    modules::order::{guards, repository},
    types::Context,
    utils::{guard::Exchange, validation},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.orders.write().await;
    let mut exchange = Exchange::new(orders.as_slice()).with_data(payload.body);

    guards::create().run(&mut exchange)?;

    let Exchange { data, .. } = exchange;
    let body = validation::parse::<request::Body>(repository::ENTITY, data)?;
    let order = repository::create(&mut orders, body.into());

    tracing::debug!("Order created: {}", order.id);

    Ok(response::Success::OrderCreated(order))
}
