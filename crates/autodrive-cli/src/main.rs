//! autodrive - interactive grid driving simulation
//!
//! # Logging
//!
//! Diagnostics go to stderr so stdout carries only the session dialogue.
//! The filter is taken from `--log-level`, falling back to `RUST_LOG`,
//! falling back to `warn`.

use anyhow::{Context, Result};
use autodrive_cli::Session;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// autodrive - interactive grid driving simulation
#[derive(Parser, Debug)]
#[command(name = "autodrive")]
#[command(version, about, long_about = None)]
struct Args {
    /// Log filter directive, e.g. `debug` or `autodrive_engine=trace`
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,
}

fn init_tracing(args: &Args) -> Result<()> {
    let filter = match &args.log_level {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{directive}'"))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;
    info!("starting autodrive session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(stdin.lock(), stdout.lock())
        .with_banner(!args.no_banner)
        .run()
        .context("terminal I/O failed")?;

    info!("session ended");
    Ok(())
}
