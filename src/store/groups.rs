use crate::core::group::Group;
use crate::store::kv::{KeyValueStore, StoreError};

/// Key prefix namespacing group records within a shared store.
const GROUP_PREFIX: &str = "group:";

/// Typed group persistence over any [`KeyValueStore`].
///
/// Groups serialize as JSON blobs keyed by name. Balances and settlement
/// plans are derived state and are never stored.
pub struct GroupStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> GroupStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a group under its name, replacing any previous version.
    pub fn save(&mut self, group: &Group) -> Result<(), StoreError> {
        let key = format!("{GROUP_PREFIX}{}", group.name());
        let json = serde_json::to_string(group)?;
        self.store.set(&key, &json)
    }

    /// Load a group by name, if present.
    pub fn load(&self, name: &str) -> Result<Option<Group>, StoreError> {
        let key = format!("{GROUP_PREFIX}{name}");
        match self.store.get(&key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Delete a group by name. Deleting a missing group is not an error.
    pub fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        let key = format!("{GROUP_PREFIX}{name}");
        self.store.remove(&key)
    }

    /// Names of all stored groups, sorted.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names: Vec<String> = self
            .store
            .keys()?
            .into_iter()
            .filter_map(|k| k.strip_prefix(GROUP_PREFIX).map(str::to_string))
            .collect();
        names.sort();
        Ok(names)
    }

    /// The underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }
}
