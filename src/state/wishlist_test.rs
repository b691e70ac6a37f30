use super::*;
use crate::storage::MemoryStore;

fn controller() -> WishlistController<MemoryStore> {
    WishlistController::open(MemoryStore::new())
}

#[test]
fn toggle_of_new_product_favorites_it() {
    let mut wishlist = controller();
    let id = ProductId::new("1001");

    let outcome = wishlist.toggle(&id);

    assert!(outcome.favorited);
    assert_eq!(outcome.toast_level, ToastLevel::Success);
    assert_eq!(outcome.toast_message, "Added to favorites");
    assert!(wishlist.is_favorited(&id));
}

#[test]
fn toggle_of_favorited_product_removes_it() {
    let mut wishlist = controller();
    let id = ProductId::new("1001");
    wishlist.toggle(&id);

    let outcome = wishlist.toggle(&id);

    assert!(!outcome.favorited);
    assert_eq!(outcome.toast_level, ToastLevel::Info);
    assert_eq!(outcome.toast_message, "Removed from favorites");
    assert!(!wishlist.is_favorited(&id));
}

#[test]
fn badge_is_hidden_while_empty() {
    let wishlist = controller();
    assert_eq!(
        wishlist.badge(),
        Badge {
            count: 0,
            visible: false
        }
    );
}

#[test]
fn badge_counts_favorites_and_becomes_visible() {
    let mut wishlist = controller();
    wishlist.toggle(&ProductId::new("1001"));
    wishlist.toggle(&ProductId::new("2002"));

    assert_eq!(
        wishlist.badge(),
        Badge {
            count: 2,
            visible: true
        }
    );
}

#[test]
fn toggle_outcome_carries_updated_badge() {
    let mut wishlist = controller();
    let outcome = wishlist.toggle(&ProductId::new("1001"));
    assert_eq!(outcome.badge.count, 1);
    assert!(outcome.badge.visible);

    let outcome = wishlist.toggle(&ProductId::new("1001"));
    assert_eq!(outcome.badge.count, 0);
    assert!(!outcome.badge.visible);
}

#[test]
fn items_preserve_toggle_order() {
    let mut wishlist = controller();
    wishlist.toggle(&ProductId::new("b"));
    wishlist.toggle(&ProductId::new("a"));
    assert_eq!(wishlist.items(), ["b", "a"]);
}

#[test]
fn controller_persists_through_the_preference_set() {
    let mut wishlist = controller();
    wishlist.toggle(&ProductId::new("1001"));

    let store = wishlist.prefs().store().clone();
    let reopened = WishlistController::open(store);
    assert!(reopened.is_favorited(&ProductId::new("1001")));
}
