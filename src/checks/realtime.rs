//! Real-time endpoint reachability check

use std::io::Write;
use std::time::Duration;

use tokio_tungstenite::connect_async;
use tracing::debug;

use super::{conclude, names, Checked};
use crate::error::{ProbeError, Result};
use crate::report::{CheckResult, Reporter};

/// Open a WebSocket to `url` within `timeout`, then close it.
///
/// No application messages are exchanged; only the handshake is verified.
pub async fn websocket<W: Write>(
    url: &str,
    timeout: Duration,
    reporter: &mut Reporter<W>,
) -> Checked<()> {
    let outcome = connect(url, timeout).await.map(|()| {
        let result = CheckResult::pass(names::WEBSOCKET);
        Checked::bare(result.with_detail(format!("Connected to {}", url)))
    });
    conclude(reporter, names::WEBSOCKET, outcome, ())
}

async fn connect(url: &str, timeout: Duration) -> Result<()> {
    if !url.starts_with("ws://") && !url.starts_with("wss://") {
        return Err(ProbeError::InvalidUrl(url.to_string()));
    }

    let (mut ws, _) = tokio::time::timeout(timeout, connect_async(url))
        .await
        .map_err(|_| ProbeError::Timeout {
            url: url.to_string(),
            after: timeout,
        })??;

    if let Err(e) = ws.close(None).await {
        debug!("WebSocket close after handshake failed: {}", e);
    }
    Ok(())
}
