use crate::{Error, Result, RunOutcome, Stage, StageTracker};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tally_client::{OwnerLookup, RecordFetcher};
use tally_core::{aggregate, aggregate_all, correlate, ExportBundle, OwnerIndex};

/// Artifact produced by a single-owner run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleOwnerExport {
    /// Console report only, no file.
    ReportOnly,
    Csv,
    Json,
}

/// Fetch → correlate → aggregate → export → report, run sequentially.
pub struct Pipeline {
    fetcher: Arc<dyn RecordFetcher>,
    output_dir: PathBuf,
}

impl Pipeline {
    pub fn new(fetcher: Arc<dyn RecordFetcher>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Process one owner. Fails with [`Error::OwnerNotFound`] before any task
    /// is fetched if the owner does not exist.
    pub async fn run_single(&self, owner_id: i64, export: SingleOwnerExport) -> Result<RunOutcome> {
        let mut tracker = StageTracker::new();
        let result = self.single(owner_id, export, &mut tracker).await;
        Self::finish(result, tracker)
    }

    /// Process every owner and write the all-owners JSON document.
    pub async fn run_all(&self) -> Result<RunOutcome> {
        let mut tracker = StageTracker::new();
        let result = self.all(&mut tracker).await;
        Self::finish(result, tracker)
    }

    async fn single(
        &self,
        owner_id: i64,
        export: SingleOwnerExport,
        tracker: &mut StageTracker,
    ) -> Result<RunOutcome> {
        if owner_id < 1 {
            return Err(Error::InvalidInput(format!(
                "owner id must be a positive integer, got {}",
                owner_id
            )));
        }

        tracing::info!("Processing owner {} ({:?})", owner_id, export);

        tracker.advance(Stage::FetchOwners);
        let owner = match self.fetcher.fetch_owner(owner_id).await? {
            OwnerLookup::Found(owner) => owner,
            OwnerLookup::NotFound => return Err(Error::OwnerNotFound(owner_id)),
        };

        tracker.advance(Stage::FetchTasks);
        let tasks = self.fetcher.fetch_tasks(Some(owner_id)).await?;

        tracker.advance(Stage::Correlate);
        let correlated = correlate(&tasks, &OwnerIndex::single(owner.clone()))?;

        tracker.advance(Stage::Aggregate);
        let progress = aggregate(&owner, &correlated);

        let mut written = Vec::new();
        match export {
            SingleOwnerExport::ReportOnly => {}
            SingleOwnerExport::Csv => {
                tracker.advance(Stage::Export);
                written.push(tally_export::write_csv(&self.output_dir, owner_id, &correlated)?);
            }
            SingleOwnerExport::Json => {
                tracker.advance(Stage::Export);
                written.push(tally_export::write_single_owner_json(
                    &self.output_dir,
                    owner_id,
                    &correlated,
                )?);
            }
        }

        tracker.advance(Stage::Report);
        tracing::info!(
            "{}: {}/{} tasks done",
            owner,
            progress.completed_tasks,
            progress.total_tasks
        );

        Ok(RunOutcome {
            progress: vec![progress],
            written,
            stages: Vec::new(),
        })
    }

    async fn all(&self, tracker: &mut StageTracker) -> Result<RunOutcome> {
        tracing::info!("Processing all owners");

        tracker.advance(Stage::FetchOwners);
        let owners = OwnerIndex::from_owners(self.fetcher.fetch_all_owners().await?)?;

        tracker.advance(Stage::FetchTasks);
        let tasks = self.fetcher.fetch_all_tasks().await?;

        tracker.advance(Stage::Correlate);
        let correlated = correlate(&tasks, &owners)?;

        tracker.advance(Stage::Aggregate);
        let progress = aggregate_all(&correlated, &owners)?;

        tracker.advance(Stage::Export);
        let bundle = ExportBundle::from_tasks(correlated);
        let path = tally_export::write_all_owners_json(&self.output_dir, &bundle)?;

        tracker.advance(Stage::Report);
        tracing::info!(
            "{} owners known, {} with tasks, {} tasks exported",
            owners.len(),
            bundle.len(),
            bundle.task_count()
        );

        Ok(RunOutcome {
            progress,
            written: vec![path],
            stages: Vec::new(),
        })
    }

    fn finish(result: Result<RunOutcome>, mut tracker: StageTracker) -> Result<RunOutcome> {
        match result {
            Ok(mut outcome) => {
                tracker.advance(Stage::Done);
                outcome.stages = tracker.into_visited();
                Ok(outcome)
            }
            Err(e) => {
                tracker.fail(&e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tally_core::{Owner, Task};

    struct FixedFetcher {
        owner: Owner,
        tasks: Vec<Task>,
    }

    #[async_trait]
    impl RecordFetcher for FixedFetcher {
        async fn fetch_owner(&self, id: i64) -> tally_client::Result<OwnerLookup> {
            Ok(if id == self.owner.id {
                OwnerLookup::Found(self.owner.clone())
            } else {
                OwnerLookup::NotFound
            })
        }

        async fn fetch_tasks(&self, owner_id: Option<i64>) -> tally_client::Result<Vec<Task>> {
            Ok(self
                .tasks
                .iter()
                .filter(|t| owner_id.map_or(true, |id| t.owner_id == id))
                .cloned()
                .collect())
        }

        async fn fetch_all_owners(&self) -> tally_client::Result<Vec<Owner>> {
            Ok(vec![self.owner.clone()])
        }
    }

    fn pipeline(dir: &Path) -> Pipeline {
        let fetcher = FixedFetcher {
            owner: Owner::new(2, "Ervin Howell", "Antonette"),
            tasks: vec![Task::new(2, "a", true), Task::new(2, "b", false)],
        };
        Pipeline::new(Arc::new(fetcher), dir)
    }

    #[tokio::test]
    async fn test_report_only_visits_every_stage_but_export() {
        let dir = tempfile::tempdir().unwrap();

        let outcome = pipeline(dir.path())
            .run_single(2, SingleOwnerExport::ReportOnly)
            .await
            .unwrap();

        assert_eq!(
            outcome.stages,
            vec![
                Stage::Start,
                Stage::FetchOwners,
                Stage::FetchTasks,
                Stage::Correlate,
                Stage::Aggregate,
                Stage::Report,
                Stage::Done,
            ]
        );
        assert!(outcome.written.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_non_positive_id_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();

        let err = pipeline(dir.path())
            .run_single(0, SingleOwnerExport::Csv)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
