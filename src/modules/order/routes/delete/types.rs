pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::utils::error::ApiError;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        OrderDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub type Response = Result<Success, ApiError>;
}
