mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use redirectus::routes::app_router;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_redirect_without_slug_not_found() {
    let (state, _rx) = common::create_seeded_state();

    let response = app_router(state)
        .oneshot(Request::get("/r/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trailing_slash_register_without_slug_unprocessable() {
    let (state, _rx) = common::create_test_state();

    let response = app_router(state)
        .oneshot(
            Request::post("/r/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"default":"https://example.com"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "invalid_slug");
}

#[tokio::test]
async fn test_trailing_slash_after_slug_redirects() {
    let (state, _rx) = common::create_seeded_state();

    let response = app_router(state)
        .oneshot(
            Request::get("/r/app/")
                .header(header::USER_AGENT, common::ANDROID_UA)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://android.example.com/app"
    );
}

#[tokio::test]
async fn test_health_route_mounted() {
    let (state, _rx) = common::create_test_state();

    let response = app_router(state)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let (state, _rx) = common::create_test_state();

    let response = app_router(state)
        .oneshot(Request::get("/links/app").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
