//! A stand-in for a wunderbase GraphQL endpoint.
//!
//! Serves `POST /` with canned GraphQL responses, switchable at runtime so
//! integration tests can exercise the benchmark scenario against a healthy,
//! an unseeded and a failing store. Also records what it saw on the wire:
//! request count, `Content-Type` sightings and every distinct raw body.

use axum::{
    debug_handler,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use lazy_static::lazy_static;
use metrics::counter;
use serde::Deserialize;
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Canned behaviors for the GraphQL endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// 200; the `findManyPost` rows include a post titled "myPost".
    Seeded,
    /// 200; no row mentions "myPost".
    Unseeded,
    /// 500 with an empty body.
    ServerError,
}

/// Handle to a running mock; clones share the underlying mode.
#[derive(Clone)]
pub struct MockWunderbase {
    mode: Arc<RwLock<ResponseMode>>,
}

impl MockWunderbase {
    pub fn new(mode: ResponseMode) -> Self {
        Self {
            mode: Arc::new(RwLock::new(mode)),
        }
    }

    pub fn set_mode(&self, mode: ResponseMode) {
        *self.mode.write().unwrap() = mode;
    }

    pub fn mode(&self) -> ResponseMode {
        *self.mode.read().unwrap()
    }
}

pub async fn run(addr: SocketAddr, mock: MockWunderbase) {
    let app = Router::new()
        .route("/", post(graphql))
        .layer(TraceLayer::new_for_http())
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest {
    query: String,
    #[allow(dead_code)]
    operation_name: Option<String>,
}

const SEEDED_BODY: &str = r#"{"data":{"findManyPost":[{"id":1,"title":"myPost","createdAt":"2022-07-08T10:00:00.000Z"},{"id":2,"title":"second post","createdAt":"2022-07-08T10:05:00.000Z"}]}}"#;
const UNSEEDED_BODY: &str = r#"{"data":{"findManyPost":[]}}"#;

#[debug_handler]
async fn graphql(
    State(mock): State<MockWunderbase>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    REQUESTS.fetch_add(1, Ordering::Relaxed);
    counter!("mock-wunderbase.requests").increment(1);

    if headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
    {
        JSON_CONTENT_TYPE.fetch_add(1, Ordering::Relaxed);
    }

    BODIES.write().unwrap().insert(body.clone());

    let req: GraphqlRequest = match serde_json::from_str(&body) {
        Ok(req) => req,
        Err(err) => {
            debug!(%err, "rejecting malformed graphql document");
            return (StatusCode::BAD_REQUEST, String::new());
        }
    };
    debug!(query = %req.query, "graphql request");

    match mock.mode() {
        ResponseMode::Seeded => (StatusCode::OK, SEEDED_BODY.to_string()),
        ResponseMode::Unseeded => (StatusCode::OK, UNSEEDED_BODY.to_string()),
        ResponseMode::ServerError => (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
    }
}

/** Wire observations **/

static REQUESTS: AtomicU64 = AtomicU64::new(0);
static JSON_CONTENT_TYPE: AtomicU64 = AtomicU64::new(0);

lazy_static! {
    static ref BODIES: Arc<RwLock<HashSet<String>>> = Arc::new(RwLock::new(HashSet::new()));
}

pub fn requests_total() -> u64 {
    REQUESTS.load(Ordering::Relaxed)
}

pub fn json_content_type_total() -> u64 {
    JSON_CONTENT_TYPE.load(Ordering::Relaxed)
}

pub fn distinct_bodies() -> Vec<String> {
    BODIES.read().unwrap().iter().cloned().collect()
}

/** Request-rate printer **/

pub async fn request_rate_task() {
    let mut last = 0;
    loop {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let total = REQUESTS.load(Ordering::Relaxed);
        println!("{} req/s", total - last);
        last = total;
    }
}
