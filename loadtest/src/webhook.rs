//! The pa-recopilador scenario: POST a fixed payload, report the status
//!
//! Users, hatch rate, run time and request statistics come from Goose. The
//! scenario only builds the body, sends it once per iteration and prints
//! whether the webhook answered 200.

use crate::console::Console;
use crate::outcome::RequestOutcome;
use crate::payload::WebhookPayload;
use goose::goose::{TransactionError, TransactionFunction};
use goose::metrics::GooseMetrics;
use goose::prelude::*;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tracing::debug;

/// Path the scenario posts to, relative to the Goose host
pub const WEBHOOK_PATH: &str = "/webhook/pa-recopilador";

pub const DEFAULT_WAIT_MIN: Duration = Duration::from_secs(1);
pub const DEFAULT_WAIT_MAX: Duration = Duration::from_secs(3);

static STDOUT: LazyLock<Console> = LazyLock::new(Console::stdout);

/// `SimplePostUser`: one POST per iteration, idling between `wait_min` and
/// `wait_max`, result lines on stdout
pub fn scenario(wait_min: Duration, wait_max: Duration) -> Result<Scenario, GooseError> {
    Ok(scenario!("SimplePostUser")
        .set_wait_time(wait_min, wait_max)?
        .register_transaction(transaction!(post_endpoint)))
}

/// Same scenario with result lines written to `console`
pub fn scenario_with_console(
    console: Console,
    wait_min: Duration,
    wait_max: Duration,
) -> Result<Scenario, GooseError> {
    let post: TransactionFunction = Arc::new(move |user| {
        let console = console.clone();
        Box::pin(async move { post_and_report(user, &console).await.map(|_| ()) })
    });

    Ok(scenario!("SimplePostUser")
        .set_wait_time(wait_min, wait_max)?
        .register_transaction(Transaction::new(post).set_name("post_endpoint")))
}

pub async fn post_endpoint(user: &mut GooseUser) -> TransactionResult {
    post_and_report(user, &STDOUT).await?;
    Ok(())
}

/// Send one payload and print the outcome. No retries.
///
/// Goose records every request in its metrics, including ones that never got
/// a response; those carry status 0 and print `❌ Error: 0`.
pub async fn post_and_report(
    user: &mut GooseUser,
    console: &Console,
) -> Result<RequestOutcome, Box<TransactionError>> {
    let payload = WebhookPayload::default();
    let goose = user.post_json(WEBHOOK_PATH, &payload).await?;

    if let Err(e) = &goose.response {
        debug!("POST {} got no response: {}", WEBHOOK_PATH, e);
    }

    let outcome = RequestOutcome::from_status_code(goose.request.status_code);
    let label = if outcome.is_success() { "success" } else { "failure" };
    metrics::counter!("loadtest_outcomes_total", "outcome" => label).increment(1);

    console.line(&outcome.console_line());
    Ok(outcome)
}

/// (successful, failed) request counts across every endpoint of a finished run
pub fn request_totals(metrics: &GooseMetrics) -> (usize, usize) {
    metrics
        .requests
        .values()
        .fold((0, 0), |(ok, failed), request| {
            (ok + request.success_count, failed + request.fail_count)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_waits_one_to_three_seconds() {
        let scenario = scenario(DEFAULT_WAIT_MIN, DEFAULT_WAIT_MAX).unwrap();
        assert_eq!(scenario.name, "SimplePostUser");
        assert_eq!(
            scenario.transaction_wait,
            Some((Duration::from_secs(1), Duration::from_secs(3)))
        );
        assert_eq!(scenario.transactions.len(), 1);
    }

    #[test]
    fn test_inverted_wait_is_rejected() {
        let result = scenario(Duration::from_secs(3), Duration::from_secs(1));
        assert!(result.is_err());
    }

    #[test]
    fn test_console_scenario_names_its_transaction() {
        let (console, _captured) = Console::capture();
        let scenario = scenario_with_console(console, DEFAULT_WAIT_MIN, DEFAULT_WAIT_MAX).unwrap();
        assert_eq!(scenario.transactions.len(), 1);
        assert_eq!(scenario.transactions[0].name, "post_endpoint");
    }

    #[test]
    fn test_request_totals_of_empty_run() {
        assert_eq!(request_totals(&GooseMetrics::default()), (0, 0));
    }
}
