//! Probe error taxonomy

use std::time::Duration;

use thiserror::Error;

/// Failures raised while talking to the service under test.
///
/// None of these abort a run; each check turns them into a failed result.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("connection to {url} timed out after {}s", .after.as_secs())]
    Timeout { url: String, after: Duration },

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, ProbeError>;
