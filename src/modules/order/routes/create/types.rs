pub mod request {
    use crate::modules::order::repository::{CreateOrderPayload, OrderDish};
    use serde::Deserialize;
    use serde_json::{Map, Value};
    use validator::Validate;

    pub struct Payload {
        pub body: Map<String, Value>,
    }

    /// The `data` object once its guard chain passed.
    #[derive(Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    pub struct Body {
        #[validate(length(min = 1, message = "Order must include a deliverTo"))]
        pub deliver_to: String,
        #[validate(length(min = 1, message = "Order must include a mobileNumber"))]
        pub mobile_number: String,
        #[validate(length(min = 1, message = "Order must include at least one dish"), nested)]
        pub dishes: Vec<OrderDish>,
    }

    impl From<Body> for CreateOrderPayload {
        fn from(body: Body) -> Self {
            Self {
                deliver_to: body.deliver_to,
                mobile_number: body.mobile_number,
                dishes: body.dishes,
            }
        }
    }
}

pub mod response {
    use crate::{modules::order::repository::Order, utils::error::ApiError};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => {
                    (StatusCode::CREATED, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, ApiError>;
}
