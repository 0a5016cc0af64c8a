use crate::utils::{id, store::Record, validation};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use validator::{Validate, ValidationError};

pub const ENTITY: &str = "Dish";

pub const INVALID_PRICE: &str = "Dish must have a price that is an integer greater than 0";

pub fn valid_price(price: &Number) -> Result<(), ValidationError> {
    validation::positive_integer(price, INVALID_PRICE)
}

/// `price` keeps the number as submitted, so `1e20` or `5.0` come back
/// unchanged.
#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq, Eq)]
pub struct Dish {
    pub id: String,
    #[validate(length(min = 1, message = "Dish must include a name"))]
    pub name: String,
    #[validate(length(min = 1, message = "Dish must include a description"))]
    pub description: String,
    #[validate(length(min = 1, message = "Dish must include a image_url"))]
    pub image_url: String,
    #[validate(custom(function = "valid_price"))]
    pub price: Number,
}

impl Record for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Fields a client may set on a dish. Create and update take the same set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DishPayload {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: Number,
}

pub fn create(dishes: &mut Vec<Dish>, payload: DishPayload) -> Dish {
    let dish = Dish {
        id: id::next_id(),
        name: payload.name,
        description: payload.description,
        image_url: payload.image_url,
        price: payload.price,
    };

    dishes.push(dish.clone());
    dish
}

/// Overwrites the editable fields in place; `id` is left untouched.
pub fn update(dish: &mut Dish, payload: DishPayload) {
    dish.name = payload.name;
    dish.description = payload.description;
    dish.image_url = payload.image_url;
    dish.price = payload.price;
}
