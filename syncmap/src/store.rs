pub mod sharded;

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// CRUD access to a key-value mapping that is safe to share between threads.
///
/// Every single-key operation is linearizable per key. [`Store::get_multi`] is not a
/// snapshot: each key is looked up independently.
pub trait Store<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Inserts the entry only if `key` is absent.
    ///
    /// Returns [`Error::AlreadyExists`] without touching the stored value otherwise.
    fn create(&self, key: K, value: V) -> Result<()>;
    /// Returns a clone of the value stored at `key`, or [`Error::NotFound`].
    fn get(&self, key: &K) -> Result<V>;
    /// Stores `value` at `key`. Whether an absent key is an error depends on the implementation.
    fn update(&self, key: K, value: V) -> Result<()>;
    /// Removes the entry at `key`. Removing an absent key succeeds.
    fn delete(&self, key: &K) -> Result<()>;

    /// Looks up every key and returns the ones that are present.
    ///
    /// Missing keys are omitted rather than reported. A null key can never be present,
    /// so it is omitted as well. Any other error from [`Store::get`] aborts the whole call.
    fn get_multi<'a, I>(&self, keys: I) -> Result<HashMap<K, V>>
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let mut found = HashMap::new();
        for key in keys {
            match self.get(key) {
                Ok(value) => {
                    found.insert(key.clone(), value);
                }
                Err(Error::NotFound | Error::InvalidArgument) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(found)
    }
    /// Alias of [`Store::get`].
    fn read(&self, key: &K) -> Result<V> {
        self.get(key)
    }
}
