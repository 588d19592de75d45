use std::error::Error;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use runner::check::Check;
use system::disk::{DiskProbe, DiskSource};
use system::memory::{MemoryProbe, MemorySource};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alert::report::Reportable;

mod alert;
mod cli;
mod runner;
mod system;

#[tokio::main]
async fn main() -> ExitCode {
    // Stdout only carries the warnings, diagnostics go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "checkmemory=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(atty::is(atty::Stream::Stderr)),
        )
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Starting check");

    let check = Check::new(MemoryProbe::new(), DiskProbe::new());
    match execute(&check, &cli, std::io::stdout().lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, path = %cli.path.display(), "Check failed");
            ExitCode::FAILURE
        }
    }
}

/// Run the check, then write the report when one was asked for
async fn execute<M: MemorySource, D: DiskSource>(
    check: &Check<M, D>,
    cli: &Cli,
    out: impl Write,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let report = check.run(&cli.path, out).await?;

    if let Some(path) = &cli.report {
        report.generate_report(path)?;
    }

    Ok(())
}
