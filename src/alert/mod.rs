pub mod report;
pub mod warning;
