//! Durable key-value storage and the recent-search list built on top of it.
//!
//! [`PersistedStore`] is the key-value seam, with string keys and values.
//! [`MemoryStore`] keeps everything in process, [`JsonFileStore`] writes a
//! single JSON object to disk. [`RecentSearchStore`] is the bounded,
//! most-recent-first list of professor names persisted through either.

mod file;
mod memory;
mod recent;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use recent::{RECENT_SEARCHES_KEY, RECENT_SEARCH_CAPACITY, RecentSearchStore};

use anyhow::Result;

/// A durable string key-value backend.
pub trait PersistedStore: Send {
    /// Returns the value stored under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
