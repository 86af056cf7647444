//! End-to-end tests against a live server.

use item_api::config::ServiceConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_health_and_greet() {
    let server = common::start_default_server().await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(res.json::<Value>().await.unwrap(), json!({ "ok": true }));

    let res = client.get(server.url("/greet")).send().await.unwrap();
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({ "greeting": "Hello, world!" })
    );

    let res = client
        .get(server.url("/greet"))
        .query(&[("name", "Ada Lovelace")])
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({ "greeting": "Hello, Ada Lovelace!" })
    );
}

#[tokio::test]
async fn test_sum_and_double() {
    let server = common::start_default_server().await;
    let client = common::client();

    for (a, b) in [(1.0, 2.0), (-3.25, 0.25), (1e10, 1e-3)] {
        let res = client
            .post(server.url("/sum"))
            .json(&json!({ "a": a, "b": b }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let result = res.json::<Value>().await.unwrap()["result"].as_f64().unwrap();
        assert!((result - (a + b)).abs() < 1e-9);
    }

    for x in [0_i64, 7, -13, 1 << 40] {
        let res = client
            .get(server.url("/double"))
            .query(&[("x", x)])
            .send()
            .await
            .unwrap();
        assert_eq!(res.json::<Value>().await.unwrap(), json!({ "x": x, "double": 2 * x }));
    }

    let res = client.get(server.url("/double")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_item_creation_rules() {
    let server = common::start_default_server().await;
    let client = common::client();

    let res = client
        .post(server.url("/items"))
        .json(&json!({ "name": "  Widget  ", "price": 10, "tax_rate": 0.1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["price"], 10.0);
    assert!((body["price_with_tax"].as_f64().unwrap() - 11.0).abs() < 1e-9);

    let res = client
        .post(server.url("/items"))
        .json(&json!({ "name": "Yacht", "price": 2_000_000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({ "detail": "price too high" })
    );

    let res = client
        .post(server.url("/items"))
        .json(&json!({ "name": "   ", "price": 10 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["detail"][0]["loc"], json!(["body", "name"]));

    // Neither rejection consumed an id.
    let res = client
        .post(server.url("/items"))
        .json(&json!({ "name": "Gizmo", "price": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.json::<Value>().await.unwrap()["id"], 2);
}

#[tokio::test]
async fn test_configured_price_ceiling() {
    let mut config = ServiceConfig::default();
    config.items.max_price = 100.0;
    let server = common::start_server(config).await;

    let res = common::client()
        .post(server.url("/items"))
        .json(&json!({ "name": "Lamp", "price": 150 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_path_parameters() {
    let server = common::start_default_server().await;
    let client = common::client();

    let res = client.get(server.url("/items/17")).send().await.unwrap();
    assert_eq!(res.json::<Value>().await.unwrap(), json!({ "id": 17 }));

    let res = client.get(server.url("/items/seventeen")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client.get(server.url("/safe-items/5")).send().await.unwrap();
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({ "item_id": 5, "limit": 10 })
    );

    let res = client.get(server.url("/safe-items/0")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client
        .get(server.url("/safe-items/5?limit=101"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["detail"][0]["loc"], json!(["query", "limit"]));
}

#[tokio::test]
async fn test_malformed_json_body() {
    let server = common::start_default_server().await;

    let res = common::client()
        .post(server.url("/sum"))
        .header("content-type", "application/json")
        .body("{\"a\": 1,")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["detail"][0]["type"], "json_invalid");
}

#[tokio::test]
async fn test_every_field_problem_is_listed() {
    let server = common::start_default_server().await;
    let client = common::client();

    let res = client
        .post(server.url("/items"))
        .json(&json!({ "name": "   ", "price": "abc", "tax_rate": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<Value>().await.unwrap();
    let locs: Vec<Value> = body["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["loc"].clone())
        .collect();
    assert_eq!(
        locs,
        vec![
            json!(["body", "name"]),
            json!(["body", "price"]),
            json!(["body", "tax_rate"])
        ]
    );

    let res = client.post(server.url("/sum")).json(&json!({})).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["detail"][0]["loc"], json!(["body", "a"]));
    assert_eq!(body["detail"][1]["loc"], json!(["body", "b"]));

    let res = client
        .get(server.url("/safe-items/0?limit=abc"))
        .send()
        .await
        .unwrap();
    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["detail"][0]["loc"], json!(["path", "item_id"]));
    assert_eq!(body["detail"][1]["loc"], json!(["query", "limit"]));

    let res = client
        .get(server.url("/items/99999999999999999999"))
        .send()
        .await
        .unwrap();
    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["detail"][0]["loc"], json!(["path", "item_id"]));

    // None of the rejections consumed an id.
    let res = client
        .post(server.url("/items"))
        .json(&json!({ "name": "Widget", "price": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.json::<Value>().await.unwrap()["id"], 1);
}
