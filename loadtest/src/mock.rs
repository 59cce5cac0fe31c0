//! Mock pa-recopilador webhook
//!
//! Accepts the scenario's payload and answers with a fixed status code, so
//! the load test can be exercised without the real service.

use crate::payload::WebhookPayload;
use crate::webhook::WEBHOOK_PATH;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Shared mock state
#[derive(Clone)]
pub struct MockState {
    status: StatusCode,
    received: Arc<AtomicU64>,
    last_payload: Arc<RwLock<Option<WebhookPayload>>>,
}

impl MockState {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            received: Arc::new(AtomicU64::new(0)),
            last_payload: Arc::new(RwLock::new(None)),
        }
    }

    /// Status returned for every accepted webhook
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Number of webhooks accepted so far
    pub fn received(&self) -> u64 {
        self.received.load(Ordering::SeqCst)
    }

    pub async fn last_payload(&self) -> Option<WebhookPayload> {
        self.last_payload.read().await.clone()
    }
}

impl Default for MockState {
    fn default() -> Self {
        Self::new(StatusCode::OK)
    }
}

#[derive(Debug, Serialize)]
struct WebhookResponse {
    received: bool,
    count: u64,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct StatsResponse {
    received: u64,
    response_status: u16,
}

async fn receive_webhook(
    State(state): State<MockState>,
    Json(payload): Json<WebhookPayload>,
) -> (StatusCode, Json<WebhookResponse>) {
    let count = state.received.fetch_add(1, Ordering::SeqCst) + 1;
    debug!(count, user_id = %payload.user_id, "Webhook received");

    metrics::counter!("mock_webhook_received_total").increment(1);
    *state.last_payload.write().await = Some(payload);

    (
        state.status,
        Json(WebhookResponse {
            received: true,
            count,
        }),
    )
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn stats(State(state): State<MockState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        received: state.received(),
        response_status: state.status.as_u16(),
    })
}

/// Router serving the mock webhook, health and stats endpoints
pub fn mock_router(state: MockState) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(receive_webhook))
        .route("/health", get(health))
        .route("/stats", get(stats))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
