use std::path::Path;

use nix::sys::statvfs::statvfs;
use tracing::{debug, trace};

use super::error::ProbeError;
use super::sample::{ResourceKind, UtilizationSample};

/// Mount point the disk probe reads when no path is given
pub const DEFAULT_PATH: &str = "/";

/// Space figures of one filesystem, in bytes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FsSpace {
    pub total: u64,
    /// Free blocks, root-reserved ones included
    pub free: u64,
}

/// Read the raw space figures of the filesystem holding a path
pub trait DiskSource {
    async fn read(&self, path: &Path) -> Result<FsSpace, ProbeError>;
}

/// Disk figures from `statvfs(2)` on the path itself, so any mounted filesystem
/// (tmpfs and network mounts included) reports its own figures.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatvfsDisk;

impl DiskSource for StatvfsDisk {
    async fn read(&self, path: &Path) -> Result<FsSpace, ProbeError> {
        let path = tokio::fs::canonicalize(path)
            .await
            .map_err(|source| ProbeError::PathInaccessible {
                path: path.to_path_buf(),
                source,
            })?;

        tokio::task::spawn_blocking(move || -> Result<FsSpace, ProbeError> {
            let stat = statvfs(path.as_path()).map_err(|source| ProbeError::Statvfs {
                path: path.clone(),
                source,
            })?;
            let fragment_size = stat.fragment_size() as u64;
            trace!(
                blocks = stat.blocks() as u64,
                blocks_free = stat.blocks_free() as u64,
                fragment_size,
                "statvfs"
            );

            Ok(FsSpace {
                total: stat.blocks() as u64 * fragment_size,
                free: stat.blocks_free() as u64 * fragment_size,
            })
        })
        .await?
    }
}

/// Capture the disk utilization of the filesystem holding a path
pub struct DiskProbe<S: DiskSource = StatvfsDisk> {
    source: S,
}

impl DiskProbe {
    pub fn new() -> Self {
        Self::with_source(StatvfsDisk)
    }
}

impl Default for DiskProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DiskSource> DiskProbe<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub async fn sample(&self, path: &Path) -> Result<UtilizationSample, ProbeError> {
        let space = self.source.read(path).await?;
        debug!(
            path = %path.display(),
            total = space.total,
            free = space.free,
            "Disk read"
        );

        UtilizationSample::from_totals(ResourceKind::Disk, space.total, space.free)
    }
}
