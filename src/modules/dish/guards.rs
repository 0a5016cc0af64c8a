//! Guard chains for the dish operations.

pub use super::repository::INVALID_PRICE;
use super::repository::{Dish, ENTITY};
use crate::utils::{
    error::ApiError,
    guard::{id_matches, is_positive_integer, record_exists, Chain, Exchange, Outcome, Schema},
};

pub const SCHEMA: Schema = Schema {
    entity: ENTITY,
    required: &["name", "description", "image_url", "price"],
};

pub type DishChain<'s> = Chain<'s, Exchange<'s, Dish>>;

fn not_found(id: &str) -> String {
    format!("{} does not exist.", id)
}

fn id_mismatch(body_id: &str, route_id: &str) -> String {
    format!(
        "Dish id does not match route id. Dish: {} Route: {}",
        body_id, route_id
    )
}

pub fn price_is_valid(exchange: &mut Exchange<'_, Dish>) -> Outcome {
    match exchange.data.get("price").is_some_and(is_positive_integer) {
        true => Ok(()),
        false => Err(ApiError::bad_request(INVALID_PRICE)),
    }
}

pub fn read<'s>() -> DishChain<'s> {
    DishChain::new().then(record_exists::<Dish>(not_found))
}

pub fn create<'s>() -> DishChain<'s> {
    DishChain::new().require(&SCHEMA).then(price_is_valid)
}

pub fn update<'s>() -> DishChain<'s> {
    DishChain::new()
        .then(record_exists::<Dish>(not_found))
        .then(id_matches::<Dish>(id_mismatch))
        .require(&SCHEMA)
        .then(price_is_valid)
}
