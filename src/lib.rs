//! bbprobe - ByteBattle API conformance probe
//!
//! Drives a running ByteBattle service through registration, login,
//! questions, room lifecycle and real-time connectivity, reporting one
//! pass/fail line per check and a final tally.

pub mod checks;
pub mod error;
pub mod report;
pub mod session;
pub mod suite;

use std::path::Path;
use std::time::Duration;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub use report::{CheckResult, Reporter, RunSummary};
pub use session::Session;
pub use suite::{CompletedRun, Suite};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "BBPROBE_";

/// Probe configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// REST root, e.g. `http://localhost:3000/api`
    pub api_base: String,
    /// Real-time endpoint, e.g. `ws://localhost:3001`
    pub ws_url: String,
    pub request_timeout_secs: u64,
    pub ws_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:3000/api".to_string(),
            ws_url: "ws://localhost:3001".to_string(),
            request_timeout_secs: 10,
            ws_timeout_secs: 5,
        }
    }
}

/// Command-line values; each one present replaces the loaded setting
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_base: Option<String>,
    pub ws_url: Option<String>,
    pub ws_timeout_secs: Option<u64>,
}

impl Config {
    /// Layer defaults, an optional TOML file, then `BBPROBE_*` env vars
    pub fn load(file: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = file {
            if !path.is_file() {
                return Err(format!("config file not found: {}", path.display()).into());
            }
            figment = figment.merge(Toml::file(path));
        }
        let config: Config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded layers
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, figment::Error> {
        if let Some(api_base) = overrides.api_base {
            self.api_base = api_base;
        }
        if let Some(ws_url) = overrides.ws_url {
            self.ws_url = ws_url;
        }
        if let Some(secs) = overrides.ws_timeout_secs {
            self.ws_timeout_secs = secs;
        }
        self.validate()?;
        Ok(self)
    }

    /// A zero timeout would fail every call before it starts
    fn validate(&self) -> Result<(), figment::Error> {
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be at least 1".to_string().into());
        }
        if self.ws_timeout_secs == 0 {
            return Err("ws_timeout_secs must be at least 1".to_string().into());
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn ws_timeout(&self) -> Duration {
        Duration::from_secs(self.ws_timeout_secs)
    }
}
