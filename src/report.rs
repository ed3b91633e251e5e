use crate::policies::PolicyStats;
use crate::simulation::ResultSet;

use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trajectory of one completed run, ready for an external plotting consumer.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub agent: String,
    pub num_rounds: u64,
    pub stats: PolicyStats,
    pub results: ResultSet,
}

impl RunReport {
    pub fn new(agent: &str, num_rounds: u64, stats: PolicyStats, results: ResultSet) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            agent: agent.to_string(),
            num_rounds,
            stats,
            results,
        }
    }
}

pub fn write_json(reports: &[RunReport], path: &Path) -> Result<(), ReportError> {
    let payload = serde_json::to_string_pretty(reports)?;
    fs::write(path, payload)?;
    Ok(())
}

pub fn log_summary(reports: &[RunReport]) {
    for report in reports {
        info!(
            agent = %report.agent,
            run_id = %report.run_id,
            cumulative_reward = report.results.final_cumulative_reward(),
            cumulative_regret = report.results.final_cumulative_regret(),
            "final totals"
        );
    }
}
