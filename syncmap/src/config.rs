use serde::{Deserialize, Serialize};

/// How [`Store::update`](crate::Store::update) treats a key that is not present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Insert the entry. Updating never fails on absence.
    #[default]
    Upsert,
    /// Fail with [`Error::NotFound`](crate::Error::NotFound) and leave the store unchanged.
    Strict,
}

/// Construction options for [`SyncMap`](crate::SyncMap). Missing fields deserialize to defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Fixed for the lifetime of the store.
    pub update_policy: UpdatePolicy,
    /// Initial capacity hint, capped at [`MAX_CAPACITY_HINT`](crate::store::sharded::MAX_CAPACITY_HINT).
    pub capacity: Option<usize>,
    /// Number of internally locked shards. Must be a power of two greater than 1.
    pub shard_amount: Option<usize>,
}

impl StoreConfig {
    pub(crate) fn is_valid(&self) -> bool {
        self.shard_amount.map_or(true, |n| n > 1 && n.is_power_of_two())
    }
}
