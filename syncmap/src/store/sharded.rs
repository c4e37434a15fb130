use super::Store;
use crate::config::{StoreConfig, UpdatePolicy};
use crate::error::{Error, Result};
use crate::nullable::Nullable;
use dashmap::{DashMap, Entry};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Upper bound applied to [`StoreConfig::capacity`] before preallocating.
pub const MAX_CAPACITY_HINT: usize = 1 << 20;

/// A [`Store`] backed by a lock-sharded [`DashMap`].
///
/// Cloning is cheap and the clones share the same entries.
#[derive(Clone)]
pub struct SyncMap<K, V> {
    map: Arc<DashMap<K, V>>,
    config: StoreConfig,
}

impl<K, V> SyncMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty store with the default configuration.
    pub fn new() -> Self {
        Self::from_map(DashMap::new(), StoreConfig::default())
    }
    /// Creates an empty store from `config`.
    ///
    /// Fails with [`Error::InvalidArgument`] if `config.shard_amount` is not a power of two
    /// greater than 1. `config.capacity` is a hint and is capped at [`MAX_CAPACITY_HINT`].
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        if !config.is_valid() {
            return Err(Error::InvalidArgument);
        }
        let capacity = config.capacity.unwrap_or_default().min(MAX_CAPACITY_HINT);
        let map = match config.shard_amount {
            Some(shard_amount) => DashMap::with_capacity_and_shard_amount(capacity, shard_amount),
            None => DashMap::with_capacity(capacity),
        };
        Ok(Self::from_map(map, config))
    }
    fn from_map(map: DashMap<K, V>, config: StoreConfig) -> Self {
        tracing::debug!(?config, "created store");
        Self { map: Arc::new(map), config }
    }
    /// The configuration this store was created with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
    /// Number of entries at the moment of the call.
    pub fn len(&self) -> usize {
        self.map.len()
    }
    /// Whether the store holds no entries at the moment of the call.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
    /// Whether `key` is present. Unlike [`Store::get`], a null key is simply absent.
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}

impl<K, V> Default for SyncMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for SyncMap<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncMap")
            .field("len", &self.map.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn ensure_not_null<T>(arg: &T) -> Result<()>
where
    T: Nullable + ?Sized,
{
    if arg.is_null() {
        Err(Error::InvalidArgument)
    } else {
        Ok(())
    }
}

impl<K, V> Store<K, V> for SyncMap<K, V>
where
    K: Nullable + Eq + Hash + Clone,
    V: Nullable + Clone,
{
    fn create(&self, key: K, value: V) -> Result<()> {
        ensure_not_null(&key)?;
        ensure_not_null(&value)?;
        match self.map.entry(key) {
            Entry::Occupied(_) => Err(Error::AlreadyExists),
            Entry::Vacant(vacant) => {
                vacant.insert(value);
                tracing::trace!("created entry");
                Ok(())
            }
        }
    }
    fn get(&self, key: &K) -> Result<V> {
        ensure_not_null(key)?;
        self.map.get(key).map(|entry| entry.value().clone()).ok_or(Error::NotFound)
    }
    fn update(&self, key: K, value: V) -> Result<()> {
        ensure_not_null(&key)?;
        ensure_not_null(&value)?;
        match self.config.update_policy {
            UpdatePolicy::Upsert => {
                self.map.insert(key, value);
            }
            UpdatePolicy::Strict => {
                // existence check and store under one shard lock
                let mut entry = self.map.get_mut(&key).ok_or(Error::NotFound)?;
                *entry = value;
            }
        }
        tracing::trace!(policy = ?self.config.update_policy, "updated entry");
        Ok(())
    }
    fn delete(&self, key: &K) -> Result<()> {
        ensure_not_null(key)?;
        if self.map.remove(key).is_some() {
            tracing::trace!("deleted entry");
        }
        Ok(())
    }
}
