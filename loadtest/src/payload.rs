//! Request body sent to the webhook

use serde::{Deserialize, Serialize};

pub const DEFAULT_MESSAGE: &str = "Hola desde Locust";
pub const DEFAULT_TIMESTAMP: &str = "2024-01-01T12:00:00Z";
pub const DEFAULT_USER_ID: &str = "test_user_123";

/// JSON body posted on every iteration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookPayload {
    /// Free-text message
    pub message: String,
    /// ISO-8601 timestamp
    pub timestamp: String,
    /// Identifier of the sending user
    pub user_id: String,
}

impl Default for WebhookPayload {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            timestamp: DEFAULT_TIMESTAMP.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}
