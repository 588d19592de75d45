use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::system::sample::{ResourceKind, UtilizationSample};

/// Used % at or above which a resource is reported
pub const THRESHOLD: f64 = 80.0;

/// A resource over the threshold.
///
/// The message always reads "80%", whatever the real usage is. The real value is kept
/// in `used_percent` for the report.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Warning {
    kind: ResourceKind,
    used_percent: f64,
}

impl Warning {
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn used_percent(&self) -> f64 {
        self.used_percent
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You are currently using 80% of your available {}", self.kind)
    }
}

/// Compare both samples to [`THRESHOLD`], memory first
pub fn evaluate(memory: &UtilizationSample, disk: &UtilizationSample) -> Vec<Warning> {
    [memory, disk]
        .into_iter()
        .filter(|sample| sample.used_percent() >= THRESHOLD)
        .map(|sample| Warning {
            kind: sample.kind(),
            used_percent: sample.used_percent(),
        })
        .collect()
}

/// Write one line per warning
pub fn emit(warnings: &[Warning], mut writer: impl Write) -> io::Result<()> {
    for warning in warnings {
        writeln!(writer, "{warning}")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMORY_WARNING: &str = "You are currently using 80% of your available memory";
    const DISK_WARNING: &str = "You are currently using 80% of your available disk";

    /// Build a sample with the exact used % (total of 10_000 keeps two decimals exact)
    fn sample(kind: ResourceKind, used_percent: f64) -> UtilizationSample {
        let total = 10_000;
        let used = (used_percent * 100.0).round() as u64;
        UtilizationSample::from_totals(kind, total, total - used).unwrap()
    }

    fn messages(memory: f64, disk: f64) -> Vec<String> {
        let memory = sample(ResourceKind::Memory, memory);
        let disk = sample(ResourceKind::Disk, disk);
        evaluate(&memory, &disk).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_memory_only_at_threshold() {
        assert_eq!(messages(80.0, 0.0), vec![MEMORY_WARNING]);
    }

    #[test]
    fn test_disk_only() {
        assert_eq!(messages(12.5, 93.1), vec![DISK_WARNING]);
    }

    #[test]
    fn test_below_threshold() {
        assert!(messages(79.99, 79.99).is_empty());
    }

    #[test]
    fn test_full_usage_keeps_order() {
        assert_eq!(messages(100.0, 100.0), vec![MEMORY_WARNING, DISK_WARNING]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(messages(80.0, 80.0), vec![MEMORY_WARNING, DISK_WARNING]);
    }

    #[test]
    fn test_message_ignores_actual_percent() {
        let memory = sample(ResourceKind::Memory, 97.25);
        let disk = sample(ResourceKind::Disk, 0.0);
        let warnings = evaluate(&memory, &disk);

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind(), ResourceKind::Memory);
        assert_eq!(warnings[0].used_percent(), 97.25);
        assert_eq!(warnings[0].to_string(), MEMORY_WARNING);
    }

    #[test]
    fn test_emit_lines() {
        let memory = sample(ResourceKind::Memory, 85.0);
        let disk = sample(ResourceKind::Disk, 90.0);
        let mut out = Vec::new();

        emit(&evaluate(&memory, &disk), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{MEMORY_WARNING}\n{DISK_WARNING}\n")
        );
    }

    #[test]
    fn test_emit_nothing() {
        let mut out = Vec::new();
        emit(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
