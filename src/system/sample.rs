use std::fmt;

use serde::Serialize;

use super::error::ProbeError;

/// Resource a [`UtilizationSample`] was taken from
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Memory,
    Disk,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Memory => write!(f, "memory"),
            ResourceKind::Disk => write!(f, "disk"),
        }
    }
}

/// A single read of a resource usage, taken once and dropped after evaluation
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UtilizationSample {
    kind: ResourceKind,
    /// Used % of the total, two decimal places
    used_percent: f64,
    /// Total bytes
    total: u64,
    /// Free bytes
    free: u64,
}

impl UtilizationSample {
    /// Build a sample from raw byte counts as reported by the OS
    pub fn from_totals(kind: ResourceKind, total: u64, free: u64) -> Result<Self, ProbeError> {
        if total == 0 {
            return Err(ProbeError::EmptyTotal(kind));
        }

        Ok(Self {
            kind,
            used_percent: used_percent(total, free),
            total,
            free,
        })
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn used_percent(&self) -> f64 {
        self.used_percent
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn free(&self) -> u64 {
        self.free
    }
}

/// `(total - free) * 100 / total` rounded to two decimals. `total` must be non zero.
fn used_percent(total: u64, free: u64) -> f64 {
    // A free value above the total is an inconsistent read, treat it as nothing used
    let used = total.saturating_sub(free);
    let percent = used as f64 * 100.0 / total as f64;
    (percent * 100.0).round() / 100.0
}
