//! Load test for the pa-recopilador webhook
//!
//! Goose drives the simulated users; this crate supplies the one scenario it
//! runs (a user that POSTs a fixed JSON payload to the webhook and reports
//! the status), its configuration and a mock webhook to aim it at.

pub mod config;
pub mod console;
pub mod error;
pub mod mock;
pub mod outcome;
pub mod payload;
pub mod webhook;

// Re-export commonly used types
pub use config::{Config, MockConfig};
pub use console::Console;
pub use error::LoadTestError;
pub use outcome::RequestOutcome;
pub use payload::WebhookPayload;
pub use webhook::{
    WEBHOOK_PATH, post_endpoint, request_totals, scenario, scenario_with_console,
};
