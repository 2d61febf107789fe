use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use sathi_api::build_app;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn health_is_public() {
    let app = build_app().await.expect("app should build");

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn chat_requires_api_key() {
    let app = build_app().await.expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/api/chat/message")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "message": "what is the mandi rate today"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn chat_returns_weather_card_for_city_question() {
    let app = build_app().await.expect("app should build");

    let request = Request::builder()
        .method("POST")
        .uri("/api/chat/message")
        .header("content-type", "application/json")
        .header("x-api-key", "dev-sathi-key")
        .body(Body::from(
            json!({
                "message": "weather in Warangal",
                "language": "en"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(parsed["type"], "weather");
    assert_eq!(parsed["data"]["temp"], 34);
    assert_eq!(parsed["data"]["humidity"], 52);
    assert!(parsed["message"]
        .as_str()
        .unwrap()
        .contains("Warangal, Telangana"));
    assert!(parsed["session_id"].as_str().is_some());
}

#[tokio::test]
async fn chat_history_round_trip_and_clear() {
    let app = build_app().await.expect("app should build");
    let session_id = uuid::Uuid::new_v4().to_string();

    for message in ["hello", "mandi rate"] {
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat/message")
            .header("content-type", "application/json")
            .header("x-api-key", "dev-sathi-key")
            .body(Body::from(
                json!({
                    "message": message,
                    "language": "en",
                    "session_id": session_id
                })
                .to_string(),
            ))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let history_request = Request::builder()
        .uri(format!("/api/chat/history?session_id={session_id}"))
        .header("x-api-key", "dev-sathi-key")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(history_request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["turns"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["turns"][1]["topic"], "market");

    let clear_request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/chat/history?session_id={session_id}"))
        .header("x-api-key", "dev-sathi-key")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(clear_request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["cleared"], true);

    let history_request = Request::builder()
        .uri(format!("/api/chat/history?session_id={session_id}"))
        .header("x-api-key", "dev-sathi-key")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(history_request).await.unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["turns"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn weather_endpoint_serves_gazetteer_reading() {
    let app = build_app().await.expect("app should build");

    let request = Request::builder()
        .uri("/api/weather?city=vizag")
        .header("x-api-key", "dev-sathi-key")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["city"], "Visakhapatnam");
    assert_eq!(parsed["state"], "Andhra Pradesh");
    assert_eq!(parsed["temp"], 30);
}

#[tokio::test]
async fn market_prices_are_static() {
    let app = build_app().await.expect("app should build");

    let request = Request::builder()
        .uri("/api/market-prices")
        .header("x-api-key", "dev-sathi-key")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["min"], 1800);
    assert_eq!(parsed["max"], 2200);
    assert_eq!(parsed["avg"], 2000);
    assert_eq!(parsed["unit"], "quintal");
    assert_eq!(parsed["trend"], "stable");
}
