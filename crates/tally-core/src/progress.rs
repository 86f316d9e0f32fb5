use crate::{CorrelatedTask, Error, Owner, OwnerIndex, Result};
use indexmap::IndexMap;

/// Completion statistics for one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerProgress {
    pub owner_id: i64,
    pub display_name: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub completed_titles: Vec<String>,
}

impl OwnerProgress {
    /// Header line of the console report.
    pub fn headline(&self) -> String {
        format!(
            "Employee {} is done with tasks({}/{}):",
            self.display_name, self.completed_tasks, self.total_tasks
        )
    }

    /// Full console report: the headline, then one indented line per
    /// completed title.
    pub fn report_lines(&self) -> Vec<String> {
        std::iter::once(self.headline())
            .chain(self.completed_titles.iter().map(|title| format!("\t {}", title)))
            .collect()
    }
}

/// Count done vs. total for the tasks of a single owner.
pub fn aggregate(owner: &Owner, tasks: &[CorrelatedTask]) -> OwnerProgress {
    let completed_titles: Vec<String> = tasks
        .iter()
        .filter(|t| t.completed)
        .map(|t| t.title.clone())
        .collect();

    OwnerProgress {
        owner_id: owner.id,
        display_name: owner.display_name.clone(),
        total_tasks: tasks.len(),
        completed_tasks: completed_titles.len(),
        completed_titles,
    }
}

/// Progress for every owner present in a correlated stream, in the order
/// owners are first encountered. A group whose owner is not in `owners` is an
/// error, never skipped.
pub fn aggregate_all(tasks: &[CorrelatedTask], owners: &OwnerIndex) -> Result<Vec<OwnerProgress>> {
    let mut grouped: IndexMap<i64, Vec<CorrelatedTask>> = IndexMap::new();
    for task in tasks {
        grouped.entry(task.owner_id).or_default().push(task.clone());
    }

    grouped
        .iter()
        .map(|(id, owned)| -> Result<OwnerProgress> {
            let owner = owners
                .get(*id)
                .ok_or(Error::UnresolvedOwnerReference(*id))?;
            Ok(aggregate(owner, owned))
        })
        .collect()
}
