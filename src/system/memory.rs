use sysinfo::{MemoryRefreshKind, RefreshKind, System};
use tracing::trace;

use super::error::ProbeError;
use super::sample::{ResourceKind, UtilizationSample};

/// Memory figures of the host, in bytes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemorySpace {
    pub total: u64,
    pub free: u64,
}

/// Read the raw memory figures of the host
pub trait MemorySource {
    fn read(&self) -> MemorySpace;
}

/// Memory figures from [`sysinfo`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoMemory;

impl MemorySource for SysinfoMemory {
    fn read(&self) -> MemorySpace {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
        );

        // Available includes reclaimable caches
        MemorySpace {
            total: sys.total_memory(),
            free: sys.available_memory(),
        }
    }
}

/// Capture the memory utilization of the host
pub struct MemoryProbe<S: MemorySource = SysinfoMemory> {
    source: S,
}

impl MemoryProbe {
    pub fn new() -> Self {
        Self::with_source(SysinfoMemory)
    }
}

impl Default for MemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MemorySource> MemoryProbe<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn sample(&self) -> Result<UtilizationSample, ProbeError> {
        let space = self.source.read();
        trace!(total = space.total, free = space.free, "Memory read");

        UtilizationSample::from_totals(ResourceKind::Memory, space.total, space.free)
    }
}
