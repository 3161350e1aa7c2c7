//! Stand-in for the storefront banner endpoint.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const BANNERS_PATH: &str = "/api/banners";

/// One scripted answer of the banner endpoint.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "error": message }).to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

#[derive(Default)]
struct Script {
    responses: VecDeque<MockResponse>,
    accept_headers: Vec<String>,
}

/// Serves `GET /api/banners` from a queue of scripted responses; an empty
/// queue and every other path answer 404.
pub struct MockBannerServer {
    pub addr: SocketAddr,
    script: Arc<Mutex<Script>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockBannerServer {
    pub async fn start() -> Self {
        let script = Arc::new(Mutex::new(Script::default()));
        let app = Router::new()
            .route(BANNERS_PATH, get(serve_banners))
            .with_state(Arc::clone(&script));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock banner server");
        let addr = listener.local_addr().expect("mock server address");
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            script,
            shutdown: Some(shutdown_tx),
        }
    }

    pub fn enqueue(&self, response: MockResponse) {
        self.script.lock().responses.push_back(response);
    }

    /// `Accept` header of every banner request received so far.
    pub fn accept_headers(&self) -> Vec<String> {
        self.script.lock().accept_headers.clone()
    }

    pub fn banners_url(&self) -> String {
        format!("http://{}{}", self.addr, BANNERS_PATH)
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for MockBannerServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve_banners(
    State(script): State<Arc<Mutex<Script>>>,
    headers: HeaderMap,
) -> Response {
    let next = {
        let mut script = script.lock();
        let accept = headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        script.accept_headers.push(accept);
        script.responses.pop_front()
    };

    let Some(response) = next else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}
