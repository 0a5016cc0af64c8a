use super::types::response;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let orders = ctx.orders.read().await.clone();
    Ok(response::Success::Orders(orders))
}
