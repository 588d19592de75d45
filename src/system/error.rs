use std::path::PathBuf;

use thiserror::Error;

use super::sample::ResourceKind;

/// Failures while reading resource usage from the OS. All of them end the run.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("the OS reported a total of 0 bytes for {0}")]
    EmptyTotal(ResourceKind),

    #[error("cannot access {path}: {source}")]
    PathInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read filesystem statistics for {path}: {source}")]
    Statvfs {
        path: PathBuf,
        #[source]
        source: nix::Error,
    },

    #[error("disk query task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
