//! Classification of a webhook response for console reporting

use std::fmt;

pub const SUCCESS_MARKER: &str = "✅ POST exitoso";
pub const FAILURE_MARKER: &str = "❌ Error:";

/// What the scenario observed for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Status was exactly 200
    Success,
    /// Any other status. 0 means no response arrived (connection refused,
    /// timeout, DNS failure).
    Failure { status: u16 },
}

impl RequestOutcome {
    pub fn from_status_code(status: u16) -> Self {
        if status == 200 {
            RequestOutcome::Success
        } else {
            RequestOutcome::Failure { status }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success)
    }

    /// Line printed to the console for this outcome
    pub fn console_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RequestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestOutcome::Success => f.write_str(SUCCESS_MARKER),
            RequestOutcome::Failure { status } => write!(f, "{} {}", FAILURE_MARKER, status),
        }
    }
}
