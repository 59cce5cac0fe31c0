//! Load test configuration
//!
//! Configuration is loaded from environment variables. See `.env.example` for
//! documentation. Unset or unparsable variables leave the default in place.
//! The values become Goose defaults, so the matching command line options
//! (`--host`, `--users`, `--hatch-rate`, `--run-time`) still win.

use crate::error::{LoadTestError, Result};
use goose::prelude::*;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Host the scenario posts to unless `TARGET_HOST` or `--host` overrides it
pub const DEFAULT_HOST: &str = "http://localhost:32205";

/// Main load test configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the webhook service
    pub host: String,
    /// Number of simulated users
    pub users: usize,
    /// Users started per second
    pub hatch_rate: f64,
    /// Stop after this long (None runs until interrupted)
    pub run_time: Option<Duration>,
    /// Lower bound of the wait between iterations, in seconds
    pub wait_min_secs: f64,
    /// Upper bound of the wait between iterations, in seconds
    pub wait_max_secs: f64,
    /// Address for the Prometheus scrape endpoint
    pub metrics_addr: Option<SocketAddr>,
    /// Process exit code when any request failed
    pub exit_code_on_error: i32,
}

/// Mock webhook configuration
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Status code returned for every accepted webhook
    pub response_status: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            users: 1,
            hatch_rate: 1.0,
            run_time: None,
            wait_min_secs: 1.0,
            wait_max_secs: 3.0,
            metrics_addr: None,
            exit_code_on_error: 1,
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 32205,
            response_status: 200,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("TARGET_HOST")
            && !host.is_empty()
        {
            config.host = host;
        }

        // Load shape
        if let Ok(val) = env::var("LOADTEST_USERS")
            && let Ok(v) = val.parse()
        {
            config.users = v;
        }
        if let Ok(val) = env::var("LOADTEST_HATCH_RATE")
            && let Ok(v) = val.parse()
        {
            config.hatch_rate = v;
        }
        if let Ok(val) = env::var("LOADTEST_RUN_TIME_SECS")
            && let Ok(secs) = val.parse::<u64>()
        {
            config.run_time = Some(Duration::from_secs(secs));
        }

        // Wait time
        if let Ok(val) = env::var("LOADTEST_WAIT_MIN_SECS")
            && let Ok(v) = val.parse()
        {
            config.wait_min_secs = v;
        }
        if let Ok(val) = env::var("LOADTEST_WAIT_MAX_SECS")
            && let Ok(v) = val.parse()
        {
            config.wait_max_secs = v;
        }

        // Reporting
        if let Ok(val) = env::var("LOADTEST_METRICS_ADDR")
            && let Ok(addr) = val.parse()
        {
            config.metrics_addr = Some(addr);
        }
        if let Ok(val) = env::var("LOADTEST_EXIT_CODE_ON_ERROR")
            && let Ok(code) = val.parse()
        {
            config.exit_code_on_error = code;
        }

        config
    }

    /// Check that the configuration can drive a run
    pub fn validate(&self) -> Result<()> {
        if self.users == 0 {
            return Err(LoadTestError::InvalidConfig(
                "users must be at least 1".to_string(),
            ));
        }
        if !(self.hatch_rate.is_finite() && self.hatch_rate > 0.0) {
            return Err(LoadTestError::InvalidConfig(format!(
                "hatch rate must be positive, got {}",
                self.hatch_rate
            )));
        }
        self.wait_time()?;
        Ok(())
    }

    /// Bounds of the uniform wait between iterations
    pub fn wait_time(&self) -> Result<(Duration, Duration)> {
        let (min, max) = (self.wait_min_secs, self.wait_max_secs);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
            return Err(LoadTestError::InvalidWaitRange { min, max });
        }
        Ok((Duration::from_secs_f64(min), Duration::from_secs_f64(max)))
    }

    /// Hand host, users, hatch rate and run time to Goose as defaults.
    ///
    /// Metrics are never reset after ramp-up, so the final report covers
    /// the whole run.
    pub fn apply_defaults(&self, attack: GooseAttack) -> Result<GooseAttack> {
        let hatch_rate = self.hatch_rate.to_string();
        let mut attack = attack
            .set_default(GooseDefault::Host, self.host.as_str())?
            .set_default(GooseDefault::Users, self.users)?
            .set_default(GooseDefault::HatchRate, hatch_rate.as_str())?
            .set_default(GooseDefault::NoResetMetrics, true)?;
        if let Some(run_time) = self.run_time {
            attack = attack.set_default(GooseDefault::RunTime, run_time.as_secs() as usize)?;
        }
        Ok(*attack)
    }
}

impl MockConfig {
    /// Load mock configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("MOCK_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("MOCK_PORT")
            && let Ok(p) = port.parse()
        {
            config.port = p;
        }
        if let Ok(val) = env::var("MOCK_STATUS")
            && let Ok(status) = val.parse()
        {
            config.response_status = status;
        }

        config
    }
}
