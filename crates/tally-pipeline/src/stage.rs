/// Steps of a pipeline run. A run only ever moves forward; `Failed` is
/// absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    FetchOwners,
    FetchTasks,
    Correlate,
    Aggregate,
    Export,
    Report,
    Done,
    Failed,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::FetchOwners => "fetch-owners",
            Stage::FetchTasks => "fetch-tasks",
            Stage::Correlate => "correlate",
            Stage::Aggregate => "aggregate",
            Stage::Export => "export",
            Stage::Report => "report",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Records the stages a run has passed through.
#[derive(Debug, Clone)]
pub struct StageTracker {
    visited: Vec<Stage>,
}

impl StageTracker {
    pub fn new() -> Self {
        Self {
            visited: vec![Stage::Start],
        }
    }

    pub fn current(&self) -> Stage {
        self.visited.last().copied().unwrap_or(Stage::Start)
    }

    /// Move to `next`. Backward moves and moves out of `Failed` are ignored.
    pub fn advance(&mut self, next: Stage) {
        let current = self.current();
        if current == Stage::Failed || next <= current {
            tracing::warn!("Ignoring stage transition {} -> {}", current, next);
            return;
        }

        tracing::debug!("Stage {} -> {}", current, next);
        self.visited.push(next);
    }

    pub fn fail(&mut self, reason: &dyn std::fmt::Display) {
        tracing::error!("Run failed during {}: {}", self.current(), reason);
        self.visited.push(Stage::Failed);
    }

    pub fn visited(&self) -> &[Stage] {
        &self.visited
    }

    pub fn into_visited(self) -> Vec<Stage> {
        self.visited
    }
}

impl Default for StageTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_moves_forward() {
        let mut tracker = StageTracker::new();
        tracker.advance(Stage::FetchOwners);
        tracker.advance(Stage::FetchTasks);
        tracker.advance(Stage::Correlate);

        assert_eq!(tracker.current(), Stage::Correlate);
        assert_eq!(tracker.visited().len(), 4);
    }

    #[test]
    fn test_tracker_ignores_backward_moves() {
        let mut tracker = StageTracker::new();
        tracker.advance(Stage::Export);
        tracker.advance(Stage::FetchTasks);

        assert_eq!(tracker.current(), Stage::Export);
    }

    #[test]
    fn test_failed_is_absorbing() {
        let mut tracker = StageTracker::new();
        tracker.advance(Stage::FetchOwners);
        tracker.fail(&"owner missing");
        tracker.advance(Stage::Done);

        assert_eq!(tracker.current(), Stage::Failed);
        assert_eq!(
            tracker.into_visited(),
            vec![Stage::Start, Stage::FetchOwners, Stage::Failed]
        );
    }
}
