use crate::Stage;
use std::path::PathBuf;
use tally_core::OwnerProgress;

/// Result of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub progress: Vec<OwnerProgress>,
    pub written: Vec<PathBuf>,
    pub stages: Vec<Stage>,
}

impl RunOutcome {
    /// Console report for every owner in the run.
    pub fn report_lines(&self) -> Vec<String> {
        self.progress
            .iter()
            .flat_map(OwnerProgress::report_lines)
            .collect()
    }

    pub fn total_tasks(&self) -> usize {
        self.progress.iter().map(|p| p.total_tasks).sum()
    }
}
