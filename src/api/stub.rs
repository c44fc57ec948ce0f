//! In-process lookalike of the transaction API for exercising the client.

use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};

#[derive(Debug)]
pub struct RecordedInit {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Debug)]
pub struct RecordedVerify {
    pub authorization: Option<String>,
    pub reference: String,
}

struct CannedResponse {
    content_type: &'static str,
    body: String,
}

impl Default for CannedResponse {
    fn default() -> Self {
        Self {
            content_type: "application/json",
            body: "{}".to_string(),
        }
    }
}

#[derive(Default)]
pub struct StubState {
    pub init_requests: Mutex<Vec<RecordedInit>>,
    pub verify_requests: Mutex<Vec<RecordedVerify>>,
    init_response: Mutex<CannedResponse>,
    verify_response: Mutex<CannedResponse>,
    response_delay_ms: AtomicU64,
}

pub struct StubApi {
    pub base_url: String,
    pub state: Arc<StubState>,
}

impl StubApi {
    pub fn set_init_json(&self, body: serde_json::Value) {
        *self.state.init_response.lock().unwrap() = CannedResponse {
            content_type: "application/json",
            body: body.to_string(),
        };
    }

    pub fn set_init_text(&self, body: &str) {
        *self.state.init_response.lock().unwrap() = CannedResponse {
            content_type: "text/plain",
            body: body.to_string(),
        };
    }

    pub fn set_verify_json(&self, body: serde_json::Value) {
        *self.state.verify_response.lock().unwrap() = CannedResponse {
            content_type: "application/json",
            body: body.to_string(),
        };
    }

    pub fn set_response_delay(&self, delay: Duration) {
        self.state
            .response_delay_ms
            .store(delay.as_millis() as u64, Ordering::Relaxed);
    }
}

pub async fn spawn() -> StubApi {
    let state = Arc::new(StubState::default());
    let app = Router::new()
        .route("/transaction/initialize", post(initialize))
        .route("/transaction/verify/{reference}", get(verify))
        .with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    StubApi {
        base_url: format!("http://{addr}"),
        state,
    }
}

fn authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

async fn initialize(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.init_requests.lock().unwrap().push(RecordedInit {
        authorization: authorization(&headers),
        body,
    });
    respond(&state, &state.init_response).await
}

async fn verify(
    State(state): State<Arc<StubState>>,
    Path(reference): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.verify_requests.lock().unwrap().push(RecordedVerify {
        authorization: authorization(&headers),
        reference,
    });
    respond(&state, &state.verify_response).await
}

async fn respond(state: &StubState, canned: &Mutex<CannedResponse>) -> Response {
    let delay = state.response_delay_ms.load(Ordering::Relaxed);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
    let canned = canned.lock().unwrap();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, canned.content_type)],
        canned.body.clone(),
    )
        .into_response()
}
