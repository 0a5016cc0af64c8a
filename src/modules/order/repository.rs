use super::guards;
use crate::utils::{
    guard::{display_value, is_truthy},
    id,
    store::Record,
    validation,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::{borrow::Cow, fmt, str::FromStr};
use validator::{Validate, ValidationError};

pub const ENTITY: &str = "Order";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "preparing")]
    Preparing,
    #[serde(rename = "out-for-delivery")]
    OutForDelivery,
    #[serde(rename = "delivered")]
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// A delivered order is never modified again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

/// A freshly created order has no status yet; on the wire that is `""`.
mod status_or_empty {
    use super::OrderStatus;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        status: &Option<OrderStatus>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match status {
            Some(status) => status.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<OrderStatus>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(None);
        }

        raw.parse().map(Some).map_err(de::Error::custom)
    }
}

/// One line of an order. Besides `quantity`, whatever the client sent for the
/// line (id, name, price, ...) is kept as-is.
#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq)]
#[validate(schema(function = "valid_quantity"))]
pub struct OrderDish {
    pub quantity: Number,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl OrderDish {
    pub fn id(&self) -> Option<&str> {
        self.details.get("id").and_then(Value::as_str)
    }
}

/// How a line item is named in failure messages: its id, or its position when
/// it carries none.
pub fn line_label(dish: &Value, index: usize) -> String {
    dish.get("id")
        .filter(|id| is_truthy(id))
        .map(display_value)
        .unwrap_or_else(|| index.to_string())
}

pub fn invalid_quantity(label: &str) -> String {
    format!(
        "Dish {} must have a quantity that is an integer greater than 0",
        label
    )
}

fn valid_quantity(dish: &OrderDish) -> Result<(), ValidationError> {
    if validation::is_positive_integer(&dish.quantity) {
        return Ok(());
    }

    let label = dish.id().unwrap_or("without an id");
    Err(ValidationError::new("INVALID_QUANTITY").with_message(Cow::from(invalid_quantity(label))))
}

/// Only a status other than `delivered` may be submitted.
pub fn changeable_status(status: &OrderStatus) -> Result<(), ValidationError> {
    match status.is_terminal() {
        false => Ok(()),
        true => Err(ValidationError::new("DELIVERED").with_message(Cow::from(guards::DELIVERED))),
    }
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[validate(length(min = 1, message = "Order must include a deliverTo"))]
    pub deliver_to: String,
    #[validate(length(min = 1, message = "Order must include a mobileNumber"))]
    pub mobile_number: String,
    #[serde(default, with = "status_or_empty")]
    pub status: Option<OrderStatus>,
    #[validate(length(min = 1, message = "Order must include at least one dish"), nested)]
    pub dishes: Vec<OrderDish>,
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

pub fn create(orders: &mut Vec<Order>, payload: CreateOrderPayload) -> Order {
    let order = Order {
        id: id::next_id(),
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        status: None,
        dishes: payload.dishes,
    };

    orders.push(order.clone());
    order
}

pub fn update(order: &mut Order, payload: UpdateOrderPayload) {
    order.deliver_to = payload.deliver_to;
    order.mobile_number = payload.mobile_number;
    order.status = Some(payload.status);
    order.dishes = payload.dishes;
}

pub fn delete(orders: &mut Vec<Order>, index: usize) -> Option<Order> {
    (index < orders.len()).then(|| orders.remove(index))
}
