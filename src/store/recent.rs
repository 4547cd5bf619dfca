use anyhow::Result;
use std::collections::VecDeque;
use tracing::{debug, warn};

use super::PersistedStore;

/// Key the recent-search list is saved under.
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";

/// Maximum number of names kept.
pub const RECENT_SEARCH_CAPACITY: usize = 10;

/// Professor names most recently resolved by a search, newest first.
///
/// Each name appears at most once; recording a name that is already
/// present moves it to the front. The list is loaded from the backing
/// store on open and written back on every [`record`](Self::record).
pub struct RecentSearchStore<S> {
    names: VecDeque<String>,
    store: S,
}

impl<S: PersistedStore> RecentSearchStore<S> {
    /// Loads the saved list from `store`.
    ///
    /// Missing or unreadable data yields an empty list.
    pub fn open(store: S) -> Self {
        let names = match store.get(RECENT_SEARCHES_KEY) {
            Ok(Some(raw)) => parse_names(&raw),
            Ok(None) => VecDeque::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read recent searches, starting empty");
                VecDeque::new()
            }
        };

        debug!(count = names.len(), "Recent searches loaded");
        Self { names, store }
    }

    /// Moves `name` to the front of the list and persists the result.
    ///
    /// The in-memory list is updated even if saving fails.
    pub fn record(&mut self, name: &str) -> Result<()> {
        self.names.retain(|existing| existing != name);
        self.names.push_front(name.to_string());
        self.names.truncate(RECENT_SEARCH_CAPACITY);

        let encoded = serde_json::to_string(&self.names)?;
        self.store.set(RECENT_SEARCHES_KEY, &encoded)
    }

    pub fn list(&self) -> &VecDeque<String> {
        &self.names
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

/// Decodes a saved list, restoring the no-duplicates and capacity
/// invariants in case the stored value was edited by hand.
fn parse_names(raw: &str) -> VecDeque<String> {
    let decoded: Vec<String> = match serde_json::from_str(raw) {
        Ok(names) => names,
        Err(e) => {
            warn!(error = %e, "Recent searches are corrupt, starting empty");
            return VecDeque::new();
        }
    };

    let mut names = VecDeque::with_capacity(RECENT_SEARCH_CAPACITY);
    for name in decoded {
        if names.len() == RECENT_SEARCH_CAPACITY {
            break;
        }
        if !names.contains(&name) {
            names.push_back(name);
        }
    }
    names
}
