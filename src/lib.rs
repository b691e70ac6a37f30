//! Client-side state engine for a storefront theme.
//!
//! This crate owns everything the theme's DOM layer delegates: durable user
//! preferences (wishlist, kids mode), the commerce platform's fixed HTTP
//! surface (cart mutations, predictive search), and the pure state models
//! behind cosmetic behavior (toasts, sticky header, gallery, countdown,
//! analytics, debounce/throttle). The DOM layer renders from returned values
//! and feeds events in; nothing here touches a document.

pub mod analytics;
pub mod countdown;
pub mod money;
pub mod net;
pub mod prefs;
pub mod state;
pub mod storage;
pub mod util;

pub use prefs::PreferenceSet;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
