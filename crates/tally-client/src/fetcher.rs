use crate::Result;
use async_trait::async_trait;
use tally_core::{Owner, Task};

/// Outcome of a single-owner lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerLookup {
    Found(Owner),
    NotFound,
}

impl OwnerLookup {
    pub fn into_option(self) -> Option<Owner> {
        match self {
            OwnerLookup::Found(owner) => Some(owner),
            OwnerLookup::NotFound => None,
        }
    }
}

/// Read-only access to the remote owner and task collections.
///
/// Every call issues exactly one request. A failed owner lookup is reported
/// as [`OwnerLookup::NotFound`]; a failed collection fetch is an error.
#[async_trait]
pub trait RecordFetcher: Send + Sync {
    async fn fetch_owner(&self, id: i64) -> Result<OwnerLookup>;

    /// Tasks of one owner, or every task when `owner_id` is `None`.
    async fn fetch_tasks(&self, owner_id: Option<i64>) -> Result<Vec<Task>>;

    async fn fetch_all_owners(&self) -> Result<Vec<Owner>>;

    async fn fetch_all_tasks(&self) -> Result<Vec<Task>> {
        self.fetch_tasks(None).await
    }
}
