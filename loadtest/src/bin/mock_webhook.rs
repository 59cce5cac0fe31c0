use axum::{Router, http::StatusCode, routing::get};
use metrics_exporter_prometheus::PrometheusBuilder;
use recopilador_loadtest::mock::{MockState, mock_router};
use recopilador_loadtest::{MockConfig, WEBHOOK_PATH};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recopilador_loadtest=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Must be installed before any metrics are recorded
    let prometheus = PrometheusBuilder::new().install_recorder()?;

    let config = MockConfig::from_env();
    let status = StatusCode::from_u16(config.response_status)?;
    info!("Answering {} with {}", WEBHOOK_PATH, status);

    let app = mock_router(MockState::new(status)).merge(Router::new().route(
        "/metrics/prometheus",
        get(move || {
            let prometheus = prometheus.clone();
            async move { prometheus.render() }
        }),
    ));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Mock webhook listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
