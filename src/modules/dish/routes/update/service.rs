use super::types::{request, response};
use crate::{
    modules::dish::{guards, repository},
    types::Context,
    utils::{error::ApiError, guard::Exchange, validation},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut dishes = ctx.dishes.write().await;
    let mut exchange = Exchange::new(dishes.as_slice())
        .with_route_id(payload.id)
        .with_data(payload.body);

    guards::update().run(&mut exchange)?;

    let Exchange { data, found, .. } = exchange;
    let body = validation::parse::<request::Body>(repository::ENTITY, data)?;
    let dish = match found {
        Some(index) => dishes.get_mut(index),
        None => None,
    }
    .ok_or_else(|| ApiError::internal("Failed to update dish"))?;

    repository::update(dish, body.into());

    tracing::debug!("Dish updated: {}", dish.id);

    Ok(response::Success::DishUpdated(dish.clone()))
}
