use crate::CorrelatedTask;
use indexmap::IndexMap;

/// Correlated tasks keyed by owner id (as a string), in the order owners
/// first appear in the task stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportBundle {
    entries: IndexMap<String, Vec<CorrelatedTask>>,
}

impl ExportBundle {
    pub fn from_tasks(tasks: impl IntoIterator<Item = CorrelatedTask>) -> Self {
        let mut entries: IndexMap<String, Vec<CorrelatedTask>> = IndexMap::new();
        for task in tasks {
            entries
                .entry(task.owner_id.to_string())
                .or_default()
                .push(task);
        }

        Self { entries }
    }

    /// Single-key projection. The key is present even when `tasks` is empty.
    pub fn single(owner_id: i64, tasks: Vec<CorrelatedTask>) -> Self {
        let mut entries = IndexMap::with_capacity(1);
        entries.insert(owner_id.to_string(), tasks);
        Self { entries }
    }

    pub fn get(&self, owner_id: i64) -> Option<&[CorrelatedTask]> {
        self.entries.get(&owner_id.to_string()).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CorrelatedTask])> {
        self.entries
            .iter()
            .map(|(key, tasks)| (key.as_str(), tasks.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of owners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn task_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
