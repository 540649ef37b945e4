//! Fake TheMealDB server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `GET /search.php?s=<term>` from canned per-term meals;
//! unknown terms answer `{"meals": null}` like the real API, and terms
//! registered with [`FakeMealDb::fail`] answer with an HTTP error.
//!
//! ```rust,no_run
//! let api = FakeMealDb::start().await.unwrap();
//! api.add_meals("pasta", fixtures::pasta_meals()).await;
//! let client = MealDbClient::new(api.base_url(), Duration::from_secs(5))?;
//! ```

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Default)]
struct ApiState {
    meals: HashMap<String, Vec<Value>>,
    failing: HashMap<String, u16>,
    /// Every term received, in arrival order.
    requests: Vec<String>,
}

/// Handle to the running fake server.
pub struct FakeMealDb {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeMealDb {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/search.php", get(search))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// API root to hand to `MealDbClient` (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn add_meals(&self, term: &str, meals: Vec<Value>) {
        self.state.lock().await.meals.insert(term.to_string(), meals);
    }

    /// Answer `term` with HTTP `status` from now on.
    pub async fn fail(&self, term: &str, status: u16) {
        self.state.lock().await.failing.insert(term.to_string(), status);
    }

    pub async fn requests(&self) -> Vec<String> {
        self.state.lock().await.requests.clone()
    }
}

async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<Mutex<ApiState>>>,
) -> impl IntoResponse {
    let term = params.get("s").cloned().unwrap_or_default();
    let mut state = state.lock().await;
    state.requests.push(term.clone());

    if let Some(status) = state.failing.get(&term) {
        let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, Json(json!({ "error": "unavailable" })));
    }
    let body = match state.meals.get(&term) {
        Some(meals) => json!({ "meals": meals }),
        None => json!({ "meals": null }),
    };
    (StatusCode::OK, Json(body))
}
