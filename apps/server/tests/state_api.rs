use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use lifeplan_server::api::app_router;
use lifeplan_server::build_state;
use lifeplan_server::config::Config;
use tempfile::TempDir;
use tower::ServiceExt;

const ACCESS_CODE: &str = "test-code-9";

async fn build_test_router() -> (axum::Router, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        db_path: tmp.path().join("test.db").to_string_lossy().into_owned(),
        access_code: ACCESS_CODE.to_string(),
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state), tmp)
}

fn request(method: Method, uri: &str, code: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(code) = code {
        builder = builder.header("x-access-code", code);
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn requests_without_the_code_are_unauthorized() {
    let (app, _tmp) = build_test_router().await;

    for method in [Method::GET, Method::PUT, Method::POST] {
        let response = app
            .clone()
            .oneshot(request(method, "/api/state", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Unauthorized");
    }

    let response = app
        .oneshot(request(Method::GET, "/api/state", Some("wrong-code"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_store_reads_as_empty_state() {
    let (app, _tmp) = build_test_router().await;

    let response = app
        .oneshot(request(Method::GET, "/api/state", Some(ACCESS_CODE), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["state"], serde_json::json!({}));
    assert_eq!(body["updatedAt"], serde_json::Value::Null);
}

#[tokio::test]
async fn push_then_pull_round_trips_the_snapshot() {
    let (app, _tmp) = build_test_router().await;
    let snapshot = serde_json::json!({
        "lifeplan:fallback:ideas": "[{\"id\":\"i1\"}]",
        "lifeplan:settings": "{\"theme\":\"dark\"}",
    });

    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            "/api/state",
            Some(ACCESS_CODE),
            Some(serde_json::json!({ "state": snapshot })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["ok"], true);

    let response = app
        .oneshot(request(Method::GET, "/api/state", Some(ACCESS_CODE), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["state"], snapshot);
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn non_object_state_is_stored_as_empty() {
    let (app, _tmp) = build_test_router().await;

    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            "/api/state",
            Some(ACCESS_CODE),
            Some(serde_json::json!({ "state": [1, 2, 3] })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request(Method::GET, "/api/state", Some(ACCESS_CODE), None))
        .await
        .unwrap();
    assert_eq!(json_body(response).await["state"], serde_json::json!({}));
}

#[tokio::test]
async fn unsupported_methods_answer_405_with_allow() {
    let (app, _tmp) = build_test_router().await;

    let response = app
        .oneshot(request(Method::POST, "/api/state", Some(ACCESS_CODE), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.headers().get(header::ALLOW).unwrap(),
        "GET, PUT"
    );
}

#[tokio::test]
async fn collections_api_round_trips_an_idea() {
    let (app, _tmp) = build_test_router().await;
    let idea = serde_json::json!({
        "id": "idea-1",
        "text": "daily planner",
        "category": "app",
        "linkedBrand": null,
        "createdAt": "2026-04-02T08:00:00Z",
    });

    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/collections/ideas",
            Some(ACCESS_CODE),
            Some(idea.clone()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(request(
            Method::GET,
            "/api/collections/ideas",
            Some(ACCESS_CODE),
            None,
        ))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["text"], "daily planner");

    let response = app
        .oneshot(request(
            Method::DELETE,
            "/api/collections/ideas/idea-1",
            Some(ACCESS_CODE),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn current_brand_document_round_trips() {
    let (app, _tmp) = build_test_router().await;

    let current = serde_json::json!({
        "name": "Zen",
        "phase": 1,
        "phaseData": {},
        "dailyLogs": {},
        "startDate": "2026-04-01",
    });
    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            "/api/collections/brands/current",
            Some(ACCESS_CODE),
            Some(current),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request(
            Method::GET,
            "/api/collections/brands/current",
            Some(ACCESS_CODE),
            None,
        ))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["name"], "Zen");
}

#[tokio::test]
async fn analytics_rejects_malformed_dates_and_accepts_ranges() {
    let (app, _tmp) = build_test_router().await;

    let response = app
        .clone()
        .oneshot(request(
            Method::GET,
            "/api/analytics?start=nope&end=2026-04-03",
            Some(ACCESS_CODE),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(request(
            Method::GET,
            "/api/analytics?start=2026-04-01&end=2026-04-03",
            Some(ACCESS_CODE),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["daily"].as_array().unwrap().len(), 3);
    assert_eq!(body["streaks"]["bestStreak"], 0);
}
