//! A concurrency-safe associative store with CRUD semantics.
//!
//! [`SyncMap`] wraps a lock-sharded hash map and exposes the [`Store`] operations:
//! `create` inserts only if the key is absent, `get` fails on absence, `update` upserts
//! (or, with [`UpdatePolicy::Strict`], fails on absence), `delete` is idempotent, and
//! `get_multi` returns whichever of the requested keys are present.
//!
//! ```
//! use syncmap::{Error, Store, SyncMap, Value};
//!
//! let store = SyncMap::<Value, Value>::new();
//! let key = Value::from(1);
//! store.create(key.clone(), "test".into())?;
//! assert_eq!(store.create(key.clone(), "other".into()), Err(Error::AlreadyExists));
//! assert_eq!(store.get(&key)?, Value::from("test"));
//!
//! store.delete(&key)?;
//! store.delete(&key)?;
//! assert_eq!(store.get(&key), Err(Error::NotFound));
//! # Ok::<(), syncmap::Error>(())
//! ```
pub mod config;
pub mod error;
pub mod nullable;
pub mod store;
pub mod value;

pub use crate::config::{StoreConfig, UpdatePolicy};
pub use crate::error::{Error, Result};
pub use crate::nullable::Nullable;
pub use crate::store::sharded::SyncMap;
pub use crate::store::Store;
pub use crate::value::Value;
