use anyhow::Context;
use clap::Parser;
use logchain::{driver, Chain, Config, FailurePolicy};
use std::{io::BufReader, path::PathBuf};

#[derive(Parser)]
#[command(name = "logchain", about = "Route log messages through a severity handler chain")]
struct Cli {
    /// TOML config layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// File that error messages are appended to (overrides config).
    #[arg(long)]
    error_log: Option<PathBuf>,
    /// What to do with the rest of the batch after a failure: abort | continue.
    #[arg(long)]
    policy: Option<FailurePolicy>,
    /// Read `<severity> <text>` lines from FILE (`-` for stdin) instead of the samples.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Emit debug-level diagnostics on stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = Config::load(cli.config.as_deref()).context("loading config")?;
    let error_log = cli.error_log.unwrap_or(config.sinks.error_log);
    let policy = cli.policy.unwrap_or(config.dispatch.on_failure);

    let messages = match cli.input.as_deref() {
        None => driver::sample_messages(),
        Some(path) if path.as_os_str() == "-" => {
            driver::read_messages(std::io::stdin().lock()).context("reading stdin")?
        }
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening input {}", path.display()))?;
            driver::read_messages(BufReader::new(file))
                .with_context(|| format!("reading input {}", path.display()))?
        }
    };

    let chain = Chain::standard(&error_log);
    tracing::debug!(?chain, error_log = %error_log.display(), %policy, "chain built");

    let report = driver::run_batch(&chain, messages, policy);
    tracing::info!(summary = %report.summary(), "batch finished");

    if report.halted {
        if let Some(err) = report.first_failure() {
            anyhow::bail!("{err}");
        }
    }
    for (message, err) in report.failures() {
        eprintln!("logchain: {} message failed: {err}", message.severity());
    }
    Ok(())
}
