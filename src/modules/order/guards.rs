//! Guard chains for the order operations.

use super::repository::{invalid_quantity, line_label, Order, OrderStatus, ENTITY};
use crate::utils::{
    error::ApiError,
    guard::{id_matches, is_positive_integer, record_exists, Chain, Exchange, Outcome, Schema},
};
use serde_json::Value;

pub const CREATE_SCHEMA: Schema = Schema {
    entity: ENTITY,
    required: &["deliverTo", "mobileNumber", "dishes"],
};

pub const UPDATE_SCHEMA: Schema = Schema {
    entity: ENTITY,
    required: &["deliverTo", "mobileNumber", "status", "dishes"],
};

pub const NO_DISHES: &str = "Order must include at least one dish";
pub const INVALID_STATUS: &str =
    "Order must have a status of pending, preparing, out-for-delivery, or delivered.";
pub const DELIVERED: &str = "A delivered order cannot be changed";
pub const NOT_PENDING: &str = "An order cannot be deleted unless it is pending";

pub type OrderChain<'s> = Chain<'s, Exchange<'s, Order>>;

fn not_found(id: &str) -> String {
    format!("Cannot find order: {}", id)
}

fn id_mismatch(body_id: &str, route_id: &str) -> String {
    format!(
        "Order id does not match route id. Order: {} Route: {}",
        body_id, route_id
    )
}

fn submitted_status(exchange: &Exchange<'_, Order>) -> Option<OrderStatus> {
    exchange
        .data
        .get("status")
        .and_then(Value::as_str)
        .and_then(|status| status.parse().ok())
}

/// `dishes` must be a non-empty array, and every line a positive quantity.
pub fn dishes_are_valid(exchange: &mut Exchange<'_, Order>) -> Outcome {
    let dishes = match exchange.data.get("dishes") {
        Some(Value::Array(dishes)) if !dishes.is_empty() => dishes,
        _ => return Err(ApiError::bad_request(NO_DISHES)),
    };

    for (index, dish) in dishes.iter().enumerate() {
        if !dish.get("quantity").is_some_and(is_positive_integer) {
            return Err(ApiError::bad_request(invalid_quantity(&line_label(
                dish, index,
            ))));
        }
    }

    Ok(())
}

pub fn status_is_valid(exchange: &mut Exchange<'_, Order>) -> Outcome {
    match submitted_status(exchange) {
        Some(_) => Ok(()),
        None => Err(ApiError::bad_request(INVALID_STATUS)),
    }
}

/// Neither the stored nor the submitted status may be `delivered`.
pub fn not_delivered(exchange: &mut Exchange<'_, Order>) -> Outcome {
    let stored = exchange.found_record().and_then(|order| order.status);
    let delivered = [stored, submitted_status(exchange)]
        .into_iter()
        .flatten()
        .any(|status| status.is_terminal());

    if delivered {
        return Err(ApiError::bad_request(DELIVERED));
    }

    Ok(())
}

pub fn is_pending(exchange: &mut Exchange<'_, Order>) -> Outcome {
    match exchange.found_record().and_then(|order| order.status) {
        Some(OrderStatus::Pending) => Ok(()),
        _ => Err(ApiError::bad_request(NOT_PENDING)),
    }
}

pub fn read<'s>() -> OrderChain<'s> {
    OrderChain::new().then(record_exists::<Order>(not_found))
}

pub fn create<'s>() -> OrderChain<'s> {
    OrderChain::new()
        .require(&CREATE_SCHEMA)
        .then(dishes_are_valid)
}

pub fn update<'s>() -> OrderChain<'s> {
    OrderChain::new()
        .then(record_exists::<Order>(not_found))
        .require(&UPDATE_SCHEMA)
        .then(dishes_are_valid)
        .then(id_matches::<Order>(id_mismatch))
        .then(status_is_valid)
        .then(not_delivered)
}

pub fn delete<'s>() -> OrderChain<'s> {
    OrderChain::new()
        .then(record_exists::<Order>(not_found))
        .then(is_pending)
}
