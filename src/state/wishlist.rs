//! Wishlist command handlers.
//!
//! DESIGN
//! ======
//! The controller owns the durable [`PreferenceSet`] and is the single entry
//! point for wishlist interaction. The DOM layer normalizes whatever field
//! its buttons carry into a [`ProductId`] before calling in (the duck-typed
//! fallback chain lives out there, not here) and applies the returned
//! [`ToggleOutcome`] to the page. The controller never subscribes to
//! events; it is called.

use crate::prefs::{PreferenceSet, WISHLIST_KEY};
use crate::state::toast::ToastLevel;
use crate::storage::KeyValueStore;

/// Canonical product identifier, as the commerce platform issues it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the renderer applies after a toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Resulting membership: `true` means the product is now favorited.
    pub favorited: bool,
    /// Badge state after the change.
    pub badge: Badge,
    /// Toast copy for the change.
    pub toast_level: ToastLevel,
    pub toast_message: &'static str,
}

/// Wishlist counter badge: hidden while the list is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub count: usize,
    pub visible: bool,
}

/// Command handler over the durable wishlist.
#[derive(Debug)]
pub struct WishlistController<S> {
    prefs: PreferenceSet<S>,
}

impl<S: KeyValueStore> WishlistController<S> {
    /// Open the wishlist stored under the standard key.
    pub fn open(store: S) -> Self {
        Self {
            prefs: PreferenceSet::open(store, WISHLIST_KEY),
        }
    }

    /// Wrap an already-opened preference set.
    pub fn new(prefs: PreferenceSet<S>) -> Self {
        Self { prefs }
    }

    /// Toggle `id` and describe what the UI should now show.
    pub fn toggle(&mut self, id: &ProductId) -> ToggleOutcome {
        let favorited = self.prefs.toggle(id.as_str());
        let (toast_level, toast_message) = if favorited {
            (ToastLevel::Success, "Added to favorites")
        } else {
            (ToastLevel::Info, "Removed from favorites")
        };
        ToggleOutcome {
            favorited,
            badge: self.badge(),
            toast_level,
            toast_message,
        }
    }

    /// Whether `id` is currently favorited.
    #[must_use]
    pub fn is_favorited(&self, id: &ProductId) -> bool {
        self.prefs.contains(id.as_str())
    }

    /// Current badge state.
    #[must_use]
    pub fn badge(&self) -> Badge {
        let count = self.prefs.count();
        Badge {
            count,
            visible: count > 0,
        }
    }

    /// Favorited identifiers in insertion order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        self.prefs.items()
    }

    /// Borrow the underlying preference set.
    pub fn prefs(&self) -> &PreferenceSet<S> {
        &self.prefs
    }
}

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod tests;
