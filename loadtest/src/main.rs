use anyhow::Context;
use goose::prelude::*;
use metrics_exporter_prometheus::PrometheusBuilder;
use recopilador_loadtest::{Config, request_totals, scenario};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the per-request lines and the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recopilador_loadtest=info,goose=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    config.validate()?;
    let (wait_min, wait_max) = config.wait_time()?;
    info!(
        "Loaded configuration: host={}, users={}, hatch_rate={}, wait={:?}..{:?}",
        config.host, config.users, config.hatch_rate, wait_min, wait_max
    );

    if let Some(addr) = config.metrics_addr {
        PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
            .context("Failed to install Prometheus exporter")?;
        info!("Prometheus metrics available on http://{}/metrics", addr);
    }

    // Command line options (see --help) override the environment
    let metrics = config
        .apply_defaults(GooseAttack::initialize()?)?
        .register_scenario(scenario(wait_min, wait_max)?)
        .execute()
        .await?;

    let (succeeded, failed) = request_totals(&metrics);
    info!(succeeded, failed, "Load test finished");

    if failed > 0 {
        warn!("{} of {} requests failed", failed, succeeded + failed);
        std::process::exit(config.exit_code_on_error);
    }
    Ok(())
}
