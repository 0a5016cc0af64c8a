//! Guard chains: ordered validation steps run ahead of a terminal handler.
//!
//! Every guard inspects the request [`Exchange`] and either lets the chain
//! continue or fails with an [`ApiError`]. [`Chain::run`] stops at the first
//! failure, so no guard ever observes a request an earlier guard rejected.

use super::{
    error::ApiError,
    store::{self, Record},
    validation,
};
use serde_json::{Map, Value};

pub type Outcome = Result<(), ApiError>;

type BoxedGuard<'a, C> = Box<dyn Fn(&mut C) -> Outcome + Send + Sync + 'a>;

/// Per-request state shared by the guards of one chain.
pub struct Exchange<'s, T> {
    /// The `:id` path parameter, when the route has one.
    pub route_id: Option<String>,
    /// The object found under the body's `data` key.
    pub data: Map<String, Value>,
    pub records: &'s [T],
    /// Position of the record matched by [`record_exists`].
    pub found: Option<usize>,
}

impl<'s, T> Exchange<'s, T> {
    pub fn new(records: &'s [T]) -> Self {
        Self {
            route_id: None,
            data: Map::new(),
            records,
            found: None,
        }
    }

    pub fn with_route_id(mut self, id: impl Into<String>) -> Self {
        self.route_id = Some(id.into());
        self
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    pub fn found_record(&self) -> Option<&'s T> {
        let records = self.records;
        self.found.and_then(|index| records.get(index))
    }

    fn route_id(&self) -> &str {
        self.route_id.as_deref().unwrap_or_default()
    }
}

pub struct Chain<'a, C> {
    guards: Vec<BoxedGuard<'a, C>>,
}

impl<'a, C> Default for Chain<'a, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C> Chain<'a, C> {
    pub fn new() -> Self {
        Self { guards: vec![] }
    }

    pub fn then<G>(mut self, guard: G) -> Self
    where
        G: Fn(&mut C) -> Outcome + Send + Sync + 'a,
    {
        self.guards.push(Box::new(guard));
        self
    }

    pub fn run(&self, ctx: &mut C) -> Outcome {
        for guard in &self.guards {
            guard(ctx)?;
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

impl<'s, T: 's> Chain<'s, Exchange<'s, T>> {
    /// Appends one presence guard per required field, in declaration order.
    pub fn require(mut self, schema: &Schema) -> Self {
        for &field in schema.required {
            self = self.then(body_has(schema.entity, field));
        }

        self
    }
}

/// Required-field set of a resource payload.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Label used in failure messages, e.g. `Dish`.
    pub entity: &'static str,
    pub required: &'static [&'static str],
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy, everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A JSON number that is integral and strictly positive.
pub fn is_positive_integer(value: &Value) -> bool {
    match value {
        Value::Number(number) => validation::is_positive_integer(number),
        _ => false,
    }
}

/// Renders a JSON value for a failure message, strings without quotes.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub fn body_has<'s, T: 's>(
    entity: &'static str,
    field: &'static str,
) -> impl Fn(&mut Exchange<'s, T>) -> Outcome + Send + Sync + 's {
    move |exchange: &mut Exchange<'s, T>| {
        if exchange.data.get(field).is_some_and(is_truthy) {
            return Ok(());
        }

        Err(ApiError::bad_request(format!("{} must include a {}", entity, field)))
    }
}

/// Matches the route id against the store and records the match position.
pub fn record_exists<'s, T: Record + 's>(
    missing: fn(&str) -> String,
) -> impl Fn(&mut Exchange<'s, T>) -> Outcome + Send + Sync + 's {
    move |exchange: &mut Exchange<'s, T>| {
        match store::position(exchange.records, exchange.route_id()) {
            Some(index) => {
                exchange.found = Some(index);
                Ok(())
            }
            None => Err(ApiError::not_found(missing(exchange.route_id()))),
        }
    }
}

/// A truthy body `id` must equal the route id. `mismatch` receives the body id
/// and the route id, in that order.
pub fn id_matches<'s, T: 's>(
    mismatch: fn(&str, &str) -> String,
) -> impl Fn(&mut Exchange<'s, T>) -> Outcome + Send + Sync + 's {
    move |exchange: &mut Exchange<'s, T>| {
        let route_id = exchange.route_id();
        match exchange.data.get("id") {
            Some(id) if is_truthy(id) => match id {
                Value::String(body_id) if body_id == route_id => Ok(()),
                other => Err(ApiError::bad_request(mismatch(
                    &display_value(other),
                    route_id,
                ))),
            },
            _ => Ok(()),
        }
    }
}
