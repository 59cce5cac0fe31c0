//! Smoke run against a live pa-recopilador webhook
//!
//! ```bash
//! # Start the real service (or the mock: cargo run --bin mock-webhook), then
//! cargo test --test smoke_tests -- --ignored --nocapture
//! ```

use goose::config::GooseConfiguration;
use goose::prelude::*;
use recopilador_loadtest::{Config, request_totals, scenario};
use std::time::Duration;

/// Ten users for 20 seconds at the default 1-3s pacing
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires webhook listening on localhost:32205"]
async fn smoke_default_endpoint() {
    let config = Config {
        users: 10,
        hatch_rate: 5.0,
        run_time: Some(Duration::from_secs(20)),
        ..Config::default()
    };
    config.validate().expect("config should be valid");
    let (wait_min, wait_max) = config.wait_time().unwrap();

    let attack = GooseAttack::initialize_with_config(GooseConfiguration::default()).unwrap();
    let metrics = config
        .apply_defaults(attack)
        .unwrap()
        .register_scenario(scenario(wait_min, wait_max).unwrap())
        .execute()
        .await
        .unwrap();

    let (succeeded, failed) = request_totals(&metrics);
    println!("Requests: {} ok, {} failed", succeeded, failed);

    assert!(succeeded + failed > 0, "Should have sent requests");
    assert_eq!(failed, 0, "Webhook should answer every post");
}
