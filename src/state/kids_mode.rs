//! Kids-mode display toggle.
//!
//! Reads the shopper's preference from the key-value store and tracks it as
//! a boolean. Toggling writes back so the mode survives reloads. The
//! renderer maps the flag to a body class; this component only owns the
//! durable state.

use crate::storage::KeyValueStore;

/// Store key for the kids-mode flag.
pub const KIDS_MODE_KEY: &str = "shopfront_kids_mode";

/// Persisted kids-mode display preference.
#[derive(Debug)]
pub struct KidsMode<S> {
    store: S,
    active: bool,
}

impl<S: KeyValueStore> KidsMode<S> {
    /// Restore the mode from the store. Anything but the stored string
    /// `"true"` (including absence or junk) reads as off.
    pub fn open(store: S) -> Self {
        let active = store.get(KIDS_MODE_KEY).as_deref() == Some("true");
        Self { store, active }
    }

    /// Whether kids mode is currently on.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip the mode, persist it, and return the new state.
    ///
    /// A failed write degrades to in-memory for this session; the flip still
    /// happens so the visible UI and the returned state stay in agreement.
    pub fn toggle(&mut self) -> bool {
        self.set_active(!self.active);
        self.active
    }

    /// Set the mode explicitly and persist it.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        let value = if active { "true" } else { "false" };
        if let Err(error) = self.store.set(KIDS_MODE_KEY, value) {
            tracing::warn!(%error, "kids-mode write failed, kept in memory only");
        }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
#[path = "kids_mode_test.rs"]
mod tests;
