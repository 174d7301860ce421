//! Mock catalog server for exercising the HTTP client and the app.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A canned response for one path.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"error": "{}"}}"#, message),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<String>>>,
    routes: Arc<Mutex<HashMap<String, MockResponse>>>,
}

/// Serves registered paths; anything else is a 404.
pub struct MockCatalog {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockCatalog {
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            routes: Arc::new(Mutex::new(HashMap::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Register the response for `path` (without query string).
    pub async fn respond(&self, path: &str, response: MockResponse) {
        self.state
            .routes
            .lock()
            .await
            .insert(path.to_string(), response);
    }

    /// Paths (with query string) of every request received so far.
    pub async fn requests(&self) -> Vec<String> {
        self.state.requests.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let path = req.uri().path().to_string();
    let full = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| path.clone());
    state.requests.lock().await.push(full);

    let response = state.routes.lock().await.get(&path).cloned();
    let Some(response) = response else {
        return Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Not Found"))
            .unwrap();
    };

    if response.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(response.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(response.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(response.body))
        .unwrap()
}

/// List endpoint body for `(name, id)` pairs, with PokeAPI-style URLs.
pub fn list_body(entries: &[(&str, u64)]) -> String {
    let results: Vec<serde_json::Value> = entries
        .iter()
        .map(|(name, id)| {
            serde_json::json!({
                "name": name,
                "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
            })
        })
        .collect();
    serde_json::json!({
        "count": entries.len(),
        "next": null,
        "previous": null,
        "results": results,
    })
    .to_string()
}

/// Detail endpoint body with a few extra fields the client must ignore.
pub fn detail_body(id: u64, name: &str, height: u64, weight: u64) -> String {
    serde_json::json!({
        "id": id,
        "name": name,
        "height": height,
        "weight": weight,
        "base_experience": 64,
        "types": [{"slot": 1, "type": {"name": "psychic"}}],
    })
    .to_string()
}
