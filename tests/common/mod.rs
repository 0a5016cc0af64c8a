#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use grubdash_backend_rs::{
    app::App,
    modules::{
        dish::repository::Dish,
        order::repository::{Order, OrderDish, OrderStatus},
    },
    types::{AppContext, AppEnvironment, Context},
    utils::store::Store,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub fn context(dishes: Vec<Dish>, orders: Vec<Order>) -> Arc<Context> {
    Arc::new(Context::new(
        AppContext {
            host: "127.0.0.1".to_string(),
            environment: AppEnvironment::Development,
            port: 0,
            url: "http://127.0.0.1".to_string(),
        },
        Store::with_records(dishes),
        Store::with_records(orders),
    ))
}

pub fn router(ctx: Arc<Context>) -> Router {
    App::new(ctx).router()
}

pub fn dish(id: &str, name: &str, price: u64) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        image_url: format!("https://images.example/{}.jpg", id),
        price: price.into(),
    }
}

pub fn order(id: &str, status: Option<OrderStatus>) -> Order {
    Order {
        id: id.to_string(),
        deliver_to: "1600 Pennsylvania Avenue NW, Washington, DC 20500".to_string(),
        mobile_number: "(202) 456-1111".to_string(),
        status,
        dishes: vec![OrderDish {
            quantity: 2.into(),
            details: Map::from_iter([("id".to_string(), Value::from("d1"))]),
        }],
    }
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub async fn send_raw(router: &Router, method: Method, uri: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    router.clone().oneshot(request).await.unwrap().status()
}
