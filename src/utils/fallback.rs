use super::error::ApiError;
use axum::{extract::OriginalUri, http::Method};

pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::not_found(format!("Path not found: {}", uri.path()))
}

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::method_not_allowed(format!("{} not allowed for {}", method, uri.path()))
}
