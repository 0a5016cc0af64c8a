mod common;

use axum::http::{Method, StatusCode};
use common::{context, dish, router, send, send_raw};
use serde_json::{json, Value};

fn taco() -> Value {
    json!({
        "data": {
            "name": "Taco",
            "description": "Spicy",
            "image_url": "http://x",
            "price": 5
        }
    })
}

fn taco_with(field: &str, value: Value) -> Value {
    let mut body = taco();
    body["data"][field] = value;
    body
}

#[tokio::test]
async fn list_returns_every_dish_in_store_order() {
    let ctx = context(vec![dish("d1", "Dolcelatte", 19), dish("d2", "Falafel", 6)], vec![]);
    let app = router(ctx);

    let (status, first) = send(&app, Method::GET, "/dishes", None).await;
    let (_, second) = send(&app, Method::GET, "/dishes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
    let ids = first["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|dish| dish["id"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["d1", "d2"]);
}

#[tokio::test]
async fn read_unknown_dish_is_not_found() {
    let app = router(context(vec![dish("d1", "Dolcelatte", 19)], vec![]));

    let (status, body) = send(&app, Method::GET, "/dishes/missing-42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "missing-42 does not exist." }));
}

#[tokio::test]
async fn create_read_then_rejected_update_leaves_dish_unchanged() {
    let ctx = context(vec![dish("d1", "Dolcelatte", 19)], vec![]);
    let app = router(ctx.clone());

    let (status, created) = send(&app, Method::POST, "/dishes", Some(taco())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_ne!(id, "d1");
    assert_eq!(created["data"]["price"], json!(5));
    assert_eq!(created["data"]["name"], json!("Taco"));

    let (status, read) = send(&app, Method::GET, &format!("/dishes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read, created);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/dishes/{id}"),
        Some(taco_with("price", json!(-1))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Dish must have a price that is an integer greater than 0")
    );

    let (_, read) = send(&app, Method::GET, &format!("/dishes/{id}"), None).await;
    assert_eq!(read, created);
    assert_eq!(ctx.dishes.len().await, 2);
}

#[tokio::test]
async fn create_rejects_invalid_prices() {
    let app = router(context(vec![], vec![]));

    for price in [json!(0), json!(-1), json!(2.5), json!("5"), json!(null)] {
        let (status, body) =
            send(&app, Method::POST, "/dishes", Some(taco_with("price", price.clone()))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "price {price}");
        assert!(body["error"].as_str().unwrap().contains("price"));
    }

    let (_, list) = send(&app, Method::GET, "/dishes", None).await;
    assert_eq!(list, json!({ "data": [] }));
}

#[tokio::test]
async fn create_keeps_large_and_float_prices() {
    let app = router(context(vec![], vec![]));

    for price in [json!(1e20), json!(5.0)] {
        let (status, created) =
            send(&app, Method::POST, "/dishes", Some(taco_with("price", price.clone()))).await;

        assert_eq!(status, StatusCode::CREATED, "price {price}");
        assert_eq!(created["data"]["price"], price);
    }
}

#[tokio::test]
async fn create_rejects_non_text_fields() {
    let app = router(context(vec![], vec![]));

    let (status, body) =
        send(&app, Method::POST, "/dishes", Some(taco_with("name", json!(42)))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Dish payload is invalid"));
}

#[tokio::test]
async fn create_reports_the_first_missing_field() {
    let app = router(context(vec![], vec![]));

    for field in ["name", "description", "image_url"] {
        let (status, body) =
            send(&app, Method::POST, "/dishes", Some(taco_with(field, json!("")))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!(format!("Dish must include a {field}")));
    }

    let (status, body) = send(&app, Method::POST, "/dishes", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Dish must include a name"));
}

#[tokio::test]
async fn update_requires_matching_id() {
    let app = router(context(vec![dish("d1", "Dolcelatte", 19)], vec![]));

    let (status, body) = send(
        &app,
        Method::PUT,
        "/dishes/d1",
        Some(taco_with("id", json!("d2"))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Dish id does not match route id. Dish: d2 Route: d1")
    );

    let (status, body) = send(
        &app,
        Method::PUT,
        "/dishes/d1",
        Some(taco_with("id", json!("d1"))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": {
                "id": "d1",
                "name": "Taco",
                "description": "Spicy",
                "image_url": "http://x",
                "price": 5
            }
        })
    );

    let (status, body) = send(&app, Method::PUT, "/dishes/d1", Some(taco())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], json!("d1"));
}

#[tokio::test]
async fn update_keeps_store_position() {
    let ctx = context(
        vec![dish("d1", "Dolcelatte", 19), dish("d2", "Falafel", 6)],
        vec![],
    );
    let app = router(ctx.clone());

    let (status, _) = send(&app, Method::PUT, "/dishes/d1", Some(taco())).await;
    assert_eq!(status, StatusCode::OK);

    let dishes = ctx.dishes.read().await;
    assert_eq!(dishes[0].id, "d1");
    assert_eq!(dishes[0].name, "Taco");
    assert_eq!(dishes[1].id, "d2");
}

#[tokio::test]
async fn update_unknown_dish_is_not_found() {
    let app = router(context(vec![], vec![]));

    let (status, body) = send(&app, Method::PUT, "/dishes/nope", Some(taco())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("nope does not exist."));
}

#[tokio::test]
async fn unsupported_methods_and_paths() {
    let app = router(context(vec![dish("d1", "Dolcelatte", 19)], vec![]));

    let (status, body) = send(&app, Method::DELETE, "/dishes/d1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], json!("DELETE not allowed for /dishes/d1"));

    let (status, _) = send(&app, Method::PUT, "/dishes", Some(taco())).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, body) = send(&app, Method::GET, "/desserts", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Path not found: /desserts"));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = router(context(vec![], vec![]));

    let status = send_raw(&app, Method::POST, "/dishes", "{ \"data\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_check_responds() {
    let app = router(context(vec![], vec![]));

    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Welcome to GrubDash API"));
}
