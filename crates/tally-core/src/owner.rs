use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A user that tasks belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: i64,
    #[serde(rename = "name")]
    pub display_name: String,
    pub username: String,
}

impl Owner {
    pub fn new(id: i64, display_name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            username: username.into(),
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id)
    }
}

/// Owners keyed by id for the duration of one run.
#[derive(Debug, Clone, Default)]
pub struct OwnerIndex {
    owners: HashMap<i64, Owner>,
}

impl OwnerIndex {
    /// Build an index, rejecting a collection that repeats an owner id.
    pub fn from_owners(owners: impl IntoIterator<Item = Owner>) -> Result<Self> {
        let mut index = HashMap::new();
        for owner in owners {
            let id = owner.id;
            if index.insert(id, owner).is_some() {
                return Err(Error::DuplicateOwner(id));
            }
        }

        Ok(Self { owners: index })
    }

    pub fn single(owner: Owner) -> Self {
        let mut owners = HashMap::with_capacity(1);
        owners.insert(owner.id, owner);
        Self { owners }
    }

    pub fn get(&self, id: i64) -> Option<&Owner> {
        self.owners.get(&id)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
