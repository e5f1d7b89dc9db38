//! Fake published-sheet server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /export` with whatever body and status the test
//! configured, and counts requests so tests can check a load is one-shot.
//!
//! ```rust,ignore
//! let server = FakeSheetServer::start().await.unwrap();
//! server.set_body("Name\nAcme\n").await;
//! let feed = SheetFeed::new(server.export_url());
//! ```

use axum::{extract::State, http::StatusCode, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

struct SheetState {
    status: StatusCode,
    body: String,
    hits: usize,
}

/// Handle to the running fake sheet server.
pub struct FakeSheetServer {
    addr: SocketAddr,
    state: Arc<Mutex<SheetState>>,
}

impl FakeSheetServer {
    /// Start on a random port. Serves an empty 200 until configured.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(SheetState {
            status: StatusCode::OK,
            body: String::new(),
            hits: 0,
        }));

        let app = Router::new()
            .route("/export", get(export))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    pub fn export_url(&self) -> String {
        format!("http://{}/export", self.addr)
    }

    pub async fn set_body(&self, body: impl Into<String>) {
        self.state.lock().await.body = body.into();
    }

    pub async fn set_status(&self, status: u16) {
        self.state.lock().await.status =
            StatusCode::from_u16(status).expect("valid HTTP status");
    }

    /// Number of export requests served so far.
    pub async fn hits(&self) -> usize {
        self.state.lock().await.hits
    }
}

async fn export(State(state): State<Arc<Mutex<SheetState>>>) -> (StatusCode, String) {
    let mut state = state.lock().await;
    state.hits += 1;
    (state.status, state.body.clone())
}
