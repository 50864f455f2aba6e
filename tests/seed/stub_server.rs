//! Axum stub of the backend for exercising the REST client.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub target: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    script: Arc<Vec<(u16, &'static str)>>,
}

/// Answers the n-th request with the n-th scripted response, then `201` with
/// an empty body once the script runs out.
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubServer {
    pub async fn start(script: Vec<(u16, &'static str)>) -> Self {
        let state = StubState {
            requests: Arc::new(Mutex::new(Vec::new())),
            script: Arc::new(script),
        };
        let requests = state.requests.clone();

        let app = Router::new().fallback(record_and_reply).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record_and_reply(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let (status, reply) = {
        let mut requests = state.requests.lock().unwrap();
        let index = requests.len();
        requests.push(CapturedRequest {
            method: method.to_string(),
            target,
            headers,
            body: body.to_vec(),
        });
        state.script.get(index).copied().unwrap_or((201, ""))
    };

    let status = StatusCode::from_u16(status).unwrap();
    (status, [(header::CONTENT_TYPE, "application/json")], reply).into_response()
}
