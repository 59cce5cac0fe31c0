//! Common Test Utilities for Integration Tests
//!
//! Shared helpers used across integration test modules.

use axum::http::StatusCode;
use goose::config::GooseConfiguration;
use goose::metrics::GooseMetrics;
use goose::prelude::*;
use recopilador_loadtest::Config;
use recopilador_loadtest::mock::{MockState, mock_router};
use std::net::SocketAddr;

/// Mock webhook bound to an ephemeral local port
pub struct MockServer {
    pub addr: SocketAddr,
    pub state: MockState,
}

impl MockServer {
    /// Base URL to hand Goose as its host
    pub fn host(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Start a mock webhook that answers every post with `status`
pub async fn spawn_mock(status: StatusCode) -> MockServer {
    let state = MockState::new(status);
    let app = mock_router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer { addr, state }
}

/// Host on a local port nothing listens on
pub async fn unreachable_host() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Fast-paced configuration aimed at `host`
pub fn test_config(host: String, users: usize) -> Config {
    Config {
        host,
        users,
        hatch_rate: 100.0,
        wait_min_secs: 0.01,
        wait_max_secs: 0.02,
        ..Config::default()
    }
}

/// Run `scenario` under `config` until every user finished `iterations`
/// passes (or the configured run time elapses when `iterations` is None)
pub async fn run_attack(
    config: &Config,
    iterations: Option<usize>,
    scenario: Scenario,
) -> GooseMetrics {
    let attack = GooseAttack::initialize_with_config(GooseConfiguration::default()).unwrap();
    let mut attack = config
        .apply_defaults(attack)
        .unwrap()
        .set_default(GooseDefault::NoPrintMetrics, true)
        .unwrap()
        .set_default(GooseDefault::NoTelnet, true)
        .unwrap()
        .set_default(GooseDefault::NoWebSocket, true)
        .unwrap();
    if let Some(iterations) = iterations {
        attack = attack
            .set_default(GooseDefault::Iterations, iterations)
            .unwrap();
    }

    attack.register_scenario(scenario).execute().await.unwrap()
}

/// Initialize test logging for detailed output
#[allow(dead_code)]
pub fn init_test_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recopilador_loadtest=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
