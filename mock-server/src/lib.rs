use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub use axum::http::StatusCode;

pub const APOD_PATH: &str = "/planetary/apod";
pub const SEARCH_PATH: &str = "/customsearch/v1";

/// What the search route answers with.
#[derive(Clone, Debug)]
pub enum SearchFixture {
    /// Two items whose titles are derived from the `q` parameter.
    Echo,
    /// A fixed status and body, whatever the query.
    Fixed(StatusCode, Value),
}

#[derive(Clone, Debug)]
pub struct Fixtures {
    pub apod: (StatusCode, Value),
    pub search: SearchFixture,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self {
            apod: (StatusCode::OK, sample_apod()),
            search: SearchFixture::Echo,
        }
    }
}

/// Per-route request counters, shared with the router.
#[derive(Clone, Debug, Default)]
pub struct Hits {
    apod: Arc<AtomicUsize>,
    search: Arc<AtomicUsize>,
}

impl Hits {
    pub fn apod(&self) -> usize {
        self.apod.load(Ordering::SeqCst)
    }

    pub fn search(&self) -> usize {
        self.search.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
struct AppState {
    fixtures: Arc<Fixtures>,
    hits: Hits,
}

pub fn sample_apod() -> Value {
    json!({
        "date": "2023-01-01",
        "explanation": "This scene would be beautiful even without the comet.",
        "hdurl": "https://apod.nasa.gov/apod/image/2301/comet_hd.jpg",
        "media_type": "image",
        "service_version": "v1",
        "title": "Beautiful APOD Picture",
        "url": "https://apod.nasa.gov/apod/image/2301/comet.jpg"
    })
}

pub fn app() -> Router {
    app_with(Fixtures::default(), Hits::default())
}

pub fn app_with(fixtures: Fixtures, hits: Hits) -> Router {
    let state = AppState {
        fixtures: Arc::new(fixtures),
        hits,
    };
    Router::new()
        .route(APOD_PATH, get(apod))
        .route(SEARCH_PATH, get(search))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(
    listener: TcpListener,
    fixtures: Fixtures,
    hits: Hits,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(fixtures, hits)).await
}

fn param<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    params.get(name).map(String::as_str).filter(|v| !v.is_empty())
}

async fn apod(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.hits.apod.fetch_add(1, Ordering::SeqCst);
    if param(&params, "api_key").is_none() {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({
                "error": {"code": "API_KEY_MISSING", "message": "No api_key was supplied."}
            })),
        );
    }
    let (status, body) = state.fixtures.apod.clone();
    (status, Json(body))
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.hits.search.fetch_add(1, Ordering::SeqCst);
    let (Some(_key), Some(_cx), Some(q)) = (
        param(&params, "key"),
        param(&params, "cx"),
        param(&params, "q"),
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"code": 400, "message": "Missing required parameter."}})),
        );
    };

    match &state.fixtures.search {
        SearchFixture::Echo => (StatusCode::OK, Json(echo_results(q))),
        SearchFixture::Fixed(status, body) => (*status, Json(body.clone())),
    }
}

fn echo_results(q: &str) -> Value {
    json!({
        "kind": "customsearch#search",
        "queries": {"request": [{"searchTerms": q, "count": 2}]},
        "items": [
            {"title": format!("{q} - result 1"), "link": "https://example.com/1"},
            {"title": format!("{q} - result 2"), "link": "https://example.com/2"}
        ]
    })
}
