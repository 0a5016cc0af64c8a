use super::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequest, Json, Request},
};
use serde_json::{Map, Value};

/// Extracts the object nested under the `data` key of a JSON request body.
///
/// A body without `data`, or whose `data` is not an object, yields an empty
/// map and is left for the guards to reject.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Data(pub Map<String, Value>);

impl Data {
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut body) => match body.remove("data") {
                Some(Value::Object(data)) => Self(data),
                _ => Self::default(),
            },
            _ => Self::default(),
        }
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for Data {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Error occurred while parsing body: {}", rejection.body_text());
                ApiError::new(rejection.status(), rejection.body_text())
            })?;

        Ok(Self::from_body(body))
    }
}
