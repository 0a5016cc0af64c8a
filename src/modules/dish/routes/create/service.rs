use super::types::{request, response};
use crate::{
    modules::dish::{guards, repository},
    types::Context,
    utils::{guard::Exchange, validation},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut dishes = ctx.dishes.write().await;
    let mut exchange = Exchange::new(dishes.as_slice()).with_data(payload.body);

    guards::create().run(&mut exchange)?;

    let Exchange { data, .. } = exchange;
    let body = validation::parse::<request::Body>(repository::ENTITY, data)?;
    let dish = repository::create(&mut dishes, body.into());

    tracing::debug!("Dish created: {}", dish.id);

    Ok(response::Success::DishCreated(dish))
}
