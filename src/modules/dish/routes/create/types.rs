pub mod request {
    use crate::modules::dish::repository::{valid_price, DishPayload};
    use serde::Deserialize;
    use serde_json::{Map, Number, Value};
    use validator::Validate;

    pub struct Payload {
        pub body: Map<String, Value>,
    }

    /// The `data` object once its guard chain passed.
    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(min = 1, message = "Dish must include a name"))]
        pub name: String,
        #[validate(length(min = 1, message = "Dish must include a description"))]
        pub description: String,
        #[validate(length(min = 1, message = "Dish must include a image_url"))]
        pub image_url: String,
        #[validate(custom(function = "valid_price"))]
        pub price: Number,
    }

    impl From<Body> for DishPayload {
        fn from(body: Body) -> Self {
            Self {
                name: body.name,
                description: body.description,
                image_url: body.image_url,
                price: body.price,
            }
        }
    }
}

pub mod response {
    use crate::{modules::dish::repository::Dish, utils::error::ApiError};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        DishCreated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => {
                    (StatusCode::CREATED, Json(json!({ "data": dish }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, ApiError>;
}
