use super::error::ApiError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// Integral and strictly positive. `5.0` and `1e20` qualify, `2.5` does not.
pub fn is_positive_integer(number: &Number) -> bool {
    number
        .as_f64()
        .is_some_and(|n| n.is_finite() && n.fract() == 0.0 && n > 0.0)
}

pub fn positive_integer(number: &Number, message: &'static str) -> Result<(), ValidationError> {
    match is_positive_integer(number) {
        true => Ok(()),
        false => Err(ValidationError::new("NOT_POSITIVE_INTEGER").with_message(Cow::from(message))),
    }
}

/// First failure message, walking fields in name order and list items in
/// position order.
pub fn first_message(errors: &ValidationErrors) -> Option<String> {
    let mut kinds = errors.errors().iter().collect::<Vec<_>>();
    kinds.sort_by_key(|(field, _)| field.to_string());

    kinds.into_iter().find_map(|(field, kind)| match kind {
        ValidationErrorsKind::Field(errors) => errors.first().map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => format!("{} is invalid ({})", field, error.code),
        }),
        ValidationErrorsKind::Struct(errors) => first_message(errors),
        ValidationErrorsKind::List(items) => items.values().find_map(|errors| first_message(errors)),
    })
}

pub fn into_api_error(errors: ValidationErrors) -> ApiError {
    tracing::warn!("Failed to validate payload: {errors}");
    ApiError::bad_request(
        first_message(&errors).unwrap_or_else(|| "Failed to validate payload".to_string()),
    )
}

/// Deserializes a body that already went through its guard chain and runs
/// its `validator` rules.
pub fn parse<P>(entity: &str, data: Map<String, Value>) -> Result<P, ApiError>
where
    P: DeserializeOwned + Validate,
{
    let payload = serde_json::from_value::<P>(Value::Object(data)).map_err(|err| {
        tracing::warn!("Failed to deserialize {} payload: {}", entity, err);
        ApiError::bad_request(format!("{} payload is invalid: {}", entity, err))
    })?;

    payload.validate().map_err(into_api_error)?;

    Ok(payload)
}
