//! Durable preference set — the wishlist's backing component.
//!
//! DESIGN
//! ======
//! A [`PreferenceSet`] is an ordered, duplicate-free list of identifier
//! strings persisted as a JSON array under one store key. Every effective
//! mutation flushes immediately, so the stored value always matches what
//! callers observe; there is no dirty window. Membership and removal are
//! linear scans: the set is bounded by what one shopper marks in a session,
//! so an index would buy nothing.
//!
//! Two instances (browser tabs in the original) sharing one store are
//! last-write-wins with no cross-instance invalidation. That is a documented
//! property of the surface, not an oversight; [`PreferenceSet::reload`] is
//! the explicit refresh hook.
//!
//! ERROR HANDLING
//! ==============
//! Loading never raises: absent or malformed stored values decode to an
//! empty set. A failed persist degrades that mutation to in-memory-only,
//! with a warning logged, and the caller keeps its synchronous boolean
//! answer. A preference write must never be able to break a click handler.

use crate::storage::KeyValueStore;

/// Store key for the wishlist preference set.
pub const WISHLIST_KEY: &str = "shopfront_wishlist";

/// Ordered, duplicate-free set of identifiers persisted in a key-value store.
#[derive(Debug)]
pub struct PreferenceSet<S> {
    store: S,
    key: String,
    items: Vec<String>,
}

impl<S: KeyValueStore> PreferenceSet<S> {
    /// Open the set stored under `key`, loading current contents.
    ///
    /// Absent or unparsable stored values yield an empty set. A stored array
    /// carrying duplicates (external tampering) is exposed de-duplicated;
    /// the healed form is written back on the next mutation.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = decode(store.get(&key).as_deref());
        Self { store, key, items }
    }

    /// Re-read the set from the store, discarding in-memory state.
    ///
    /// Useful after another instance sharing the store may have written.
    pub fn reload(&mut self) {
        self.items = decode(self.store.get(&self.key).as_deref());
    }

    /// Current identifiers in insertion order. The order carries no meaning.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Whether `id` is currently in the set.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item == id)
    }

    /// Number of identifiers in the set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Append `id` if absent. Returns whether the set changed.
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.items.push(id.to_owned());
        self.persist();
        true
    }

    /// Remove `id` if present. Returns whether the set changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.items.iter().position(|item| item == id) else {
            return false;
        };
        self.items.remove(index);
        self.persist();
        true
    }

    /// Remove `id` if present, otherwise add it. Returns resulting membership
    /// (`true` = now present). This is the operation interactive callers use;
    /// `add`/`remove` are the primitives it composes.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id);
            true
        }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        let encoded = match serde_json::to_string(&self.items) {
            Ok(encoded) => encoded,
            Err(error) => {
                tracing::warn!(key = %self.key, %error, "preference set not encodable, kept in memory only");
                return;
            }
        };
        if let Err(error) = self.store.set(&self.key, &encoded) {
            tracing::warn!(key = %self.key, %error, "preference write failed, kept in memory only");
        }
    }
}

/// Decode a stored value into a de-duplicated identifier list.
///
/// Anything that is not a JSON array of strings decodes to empty.
fn decode(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let parsed: Vec<String> = serde_json::from_str(raw).unwrap_or_default();

    let mut items = Vec::with_capacity(parsed.len());
    for id in parsed {
        if !items.contains(&id) {
            items.push(id);
        }
    }
    items
}

#[cfg(test)]
#[path = "prefs_test.rs"]
mod tests;
