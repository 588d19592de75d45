use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::warning::{THRESHOLD, Warning};
use crate::system::sample::UtilizationSample;

pub trait Reportable {
    fn report_data(&self) -> Result<String, serde_json::Error>;

    fn generate_report(&self, path: &Path) -> std::io::Result<()> {
        let data = self.report_data().map_err(std::io::Error::other)?;

        let mut file = File::create(path)?;
        file.write_all(data.as_bytes())?;
        info!(report_path = %path.display(), "Check report written");

        Ok(())
    }
}

/// Outcome of one check run, with the real percentages behind the warnings
#[derive(Serialize, Debug, Clone)]
pub struct CheckReport {
    pub checked_at: DateTime<Utc>,
    pub threshold: f64,
    pub memory: UtilizationSample,
    pub disk: UtilizationSample,
    pub warnings: Vec<Warning>,
}

impl CheckReport {
    pub fn new(memory: UtilizationSample, disk: UtilizationSample, warnings: Vec<Warning>) -> Self {
        Self {
            checked_at: Utc::now(),
            threshold: THRESHOLD,
            memory,
            disk,
            warnings,
        }
    }
}

impl Reportable for CheckReport {
    fn report_data(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
