//! bbprobe - ByteBattle API conformance probe

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use bbprobe::{Config, Overrides, Suite};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Smoke-test a running ByteBattle service
#[derive(Parser, Debug)]
#[command(name = "bbprobe", version, about = "ByteBattle API conformance probe")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// REST root (default http://localhost:3000/api)
    #[arg(long)]
    api_base: Option<String>,

    /// Real-time endpoint (default ws://localhost:3001)
    #[arg(long)]
    ws_url: Option<String>,

    /// Seconds to wait for the WebSocket handshake
    #[arg(long)]
    ws_timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bbprobe=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?.with_overrides(Overrides {
        api_base: args.api_base,
        ws_url: args.ws_url,
        ws_timeout_secs: args.ws_timeout,
    })?;

    let run = Suite::new(config, std::io::stdout())?.run().await;
    Ok(run.summary.exit_code())
}
