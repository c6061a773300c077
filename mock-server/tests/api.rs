use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, sample_apod, Fixtures, Hits, SearchFixture};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- apod ---

#[tokio::test]
async fn apod_returns_sample_record() {
    let resp = app().oneshot(get("/planetary/apod?api_key=DEMO_KEY")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, sample_apod());
}

#[tokio::test]
async fn apod_without_key_returns_403() {
    let resp = app().oneshot(get("/planetary/apod")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = body_json(resp).await;
    assert_eq!(body["error"]["code"], "API_KEY_MISSING");
}

#[tokio::test]
async fn apod_fixture_status_is_used() {
    let fixtures = Fixtures {
        apod: (StatusCode::SERVICE_UNAVAILABLE, json!({"msg": "down"})),
        ..Fixtures::default()
    };
    let resp = app_with(fixtures, Hits::default())
        .oneshot(get("/planetary/apod?api_key=k"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(resp).await, json!({"msg": "down"}));
}

// --- search ---

#[tokio::test]
async fn search_echoes_query_into_items() {
    let resp = app()
        .oneshot(get("/customsearch/v1?key=k&cx=engine&q=Pillars%20of%20Creation"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Pillars of Creation - result 1");
}

#[tokio::test]
async fn search_missing_param_returns_400() {
    for uri in [
        "/customsearch/v1?cx=engine&q=x",
        "/customsearch/v1?key=k&q=x",
        "/customsearch/v1?key=k&cx=engine",
        "/customsearch/v1?key=k&cx=engine&q=",
    ] {
        let resp = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn search_fixed_fixture_ignores_query() {
    let fixtures = Fixtures {
        search: SearchFixture::Fixed(StatusCode::OK, json!({"items": []})),
        ..Fixtures::default()
    };
    let resp = app_with(fixtures, Hits::default())
        .oneshot(get("/customsearch/v1?key=k&cx=engine&q=anything"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"items": []}));
}

// --- routing / counters ---

#[tokio::test]
async fn unknown_path_returns_404() {
    let resp = app().oneshot(get("/planetary/neo")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn hits_are_counted_per_route() {
    use tower::Service;

    let hits = Hits::default();
    let mut svc = app_with(Fixtures::default(), hits.clone()).into_service();

    for uri in [
        "/planetary/apod?api_key=k",
        "/planetary/apod",
        "/customsearch/v1?key=k&cx=c&q=x",
    ] {
        let resp = ServiceExt::ready(&mut svc).await.unwrap().call(get(uri)).await.unwrap();
        assert_ne!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    assert_eq!(hits.apod(), 2);
    assert_eq!(hits.search(), 1);
}
