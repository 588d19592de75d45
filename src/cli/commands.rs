use std::path::PathBuf;

use clap::Parser;

use crate::system::disk::DEFAULT_PATH;

/// Check memory and disk usage once and warn when either is at 80% or more
#[derive(Parser, Debug)]
#[command(name = "checkmemory", version, about, long_about = None)]
pub struct Cli {
    /// Path on the filesystem to check
    #[arg(long, default_value = DEFAULT_PATH)]
    pub path: PathBuf,

    /// Also write a JSON report of the check to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}
