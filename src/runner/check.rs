use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::alert::report::CheckReport;
use crate::alert::warning::{emit, evaluate};
use crate::system::disk::{DiskProbe, DiskSource};
use crate::system::memory::{MemoryProbe, MemorySource};

/// One sampling and evaluation cycle
pub struct Check<M: MemorySource, D: DiskSource> {
    memory: MemoryProbe<M>,
    disk: DiskProbe<D>,
}

impl<M: MemorySource, D: DiskSource> Check<M, D> {
    pub fn new(memory: MemoryProbe<M>, disk: DiskProbe<D>) -> Self {
        Self { memory, disk }
    }

    /// Sample memory, then the disk holding `path`, and write the warnings to `out`.
    ///
    /// Evaluation only runs once both samples are in, so a failed probe prints nothing.
    pub async fn run(
        &self,
        path: &Path,
        out: impl Write,
    ) -> Result<CheckReport, Box<dyn std::error::Error + Send + Sync>> {
        let memory = self.memory.sample()?;
        debug!(
            used_percent = memory.used_percent(),
            total = memory.total(),
            free = memory.free(),
            "Memory sampled"
        );

        let disk = self.disk.sample(path).await?;
        debug!(
            used_percent = disk.used_percent(),
            total = disk.total(),
            free = disk.free(),
            "Disk sampled"
        );

        let warnings = evaluate(&memory, &disk);
        for warning in &warnings {
            info!(kind = %warning.kind(), used_percent = warning.used_percent(), "Threshold reached");
        }
        emit(&warnings, out)?;

        Ok(CheckReport::new(memory, disk, warnings))
    }
}
