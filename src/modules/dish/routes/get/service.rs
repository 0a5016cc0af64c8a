use super::types::{request, response};
use crate::{
    modules::dish::guards,
    types::Context,
    utils::{error::ApiError, guard::Exchange},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let dishes = ctx.dishes.read().await;
    let mut exchange = Exchange::new(dishes.as_slice()).with_route_id(payload.id);

    guards::read().run(&mut exchange)?;

    exchange
        .found_record()
        .cloned()
        .map(response::Success::Dish)
        .ok_or_else(|| ApiError::internal("Failed to fetch dish"))
}
