//! # Reducer
//!
//! `reduce(&mut ClientState, Action) -> Vec<Effect>`: the whole client-state
//! logic of the storefront.
//!
//! ## Functional Core, Imperative Shell
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Dispatch Cycle                                  │
//! │                                                                         │
//! │  UI event ──► Action ──► reduce(state, action)  ◄── THIS MODULE        │
//! │                               │                                         │
//! │                               ├── mutates ClientState in place          │
//! │                               │                                         │
//! │                               └── returns Vec<Effect> (descriptions)   │
//! │                                        │                                │
//! │                                        ▼                                │
//! │  Store (storefront app) runs each effect:                               │
//! │    PersistCart            → write cartItems + cartAmount                │
//! │    ForgetCart             → remove cartItems + cartAmount               │
//! │    PersistFavoritesCount  → write favoritesCount                        │
//! │    Notify                 → notification port                           │
//! │    MissedLineItem         → debug-build warning                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Matching
//! Lines are always matched on `(id, is_pack)`. A product and a pack that
//! share an id are separate lines.
//!
//! ## Misses
//! Increase/decrease on a key that is not in the cart leaves the state
//! untouched and reports [`Effect::MissedLineItem`]; it is never an error.

use crate::action::Action;
use crate::notification::Notification;
use crate::state::{ClientState, Selection};
use crate::types::{CartLineItem, CatalogItem, ItemKey};

/// A side effect requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the current line items and their count to storage.
    PersistCart,

    /// Delete the cart keys from storage entirely.
    ForgetCart,

    /// Write the favorites counter to storage.
    PersistFavoritesCount(u32),

    /// Show a toast.
    Notify(Notification),

    /// An increase/decrease targeted a line that does not exist.
    MissedLineItem {
        key: ItemKey,
        action: &'static str,
    },
}

/// Applies `action` to `state` and returns the effects to run.
pub fn reduce(state: &mut ClientState, action: Action) -> Vec<Effect> {
    match action {
        Action::AddToCart(item) => add_to_cart(state, item),
        Action::IncreaseQuantity(key) => increase_quantity(state, key),
        Action::DecreaseQuantity(key) => decrease_quantity(state, key),
        Action::RemoveFromCart(key) => {
            state.cart_items.retain(|line| line.key() != key);
            vec![Effect::PersistCart]
        }
        Action::ClearCart => {
            state.cart_items.clear();
            vec![Effect::ForgetCart]
        }
        Action::ShowProductDetails(product) => {
            state.selection = Selection::Product(product);
            Vec::new()
        }
        Action::HideProductDetails => {
            if matches!(state.selection, Selection::Product(_)) {
                state.selection = Selection::None;
            }
            Vec::new()
        }
        Action::ShowPackDetails(pack) => {
            state.selection = Selection::Pack(pack);
            Vec::new()
        }
        Action::HidePackDetails => {
            if matches!(state.selection, Selection::Pack(_)) {
                state.selection = Selection::None;
            }
            Vec::new()
        }
        Action::SetFavoritesCount { count } => {
            state.favorites_count = count;
            vec![Effect::PersistFavoritesCount(count)]
        }
    }
}

fn add_to_cart(state: &mut ClientState, item: CatalogItem) -> Vec<Effect> {
    let notification = match state.line_mut(item.key()) {
        Some(line) => {
            line.quantity = line.quantity.saturating_add(1);
            Notification::increased(line.name())
        }
        None => {
            let notification = Notification::added(&item.name);
            state.cart_items.push(CartLineItem::new(item));
            notification
        }
    };

    vec![Effect::PersistCart, Effect::Notify(notification)]
}

fn increase_quantity(state: &mut ClientState, key: ItemKey) -> Vec<Effect> {
    let Some(line) = state.line_mut(key) else {
        return vec![Effect::MissedLineItem {
            key,
            action: "INCREASE_QUANTITY",
        }];
    };

    line.quantity = line.quantity.saturating_add(1);
    let notification = Notification::increased(line.name());

    vec![Effect::PersistCart, Effect::Notify(notification)]
}

fn decrease_quantity(state: &mut ClientState, key: ItemKey) -> Vec<Effect> {
    let Some(line) = state.line_mut(key) else {
        return vec![Effect::MissedLineItem {
            key,
            action: "DECREASE_QUANTITY",
        }];
    };

    // Name is taken before the line can disappear.
    let notification = Notification::decreased(line.name());
    line.quantity = line.quantity.saturating_sub(1);
    state.cart_items.retain(|line| line.quantity > 0);

    vec![Effect::PersistCart, Effect::Notify(notification)]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, is_pack: bool, name: &str) -> CatalogItem {
        CatalogItem {
            id,
            is_pack,
            name: name.to_string(),
            price_cents: 500,
            image: None,
            brand: None,
            description: None,
            extra: Default::default(),
        }
    }

    fn vitamin_c() -> CatalogItem {
        item(5, false, "Vitamin C")
    }

    fn notifications(effects: &[Effect]) -> Vec<&Notification> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_repeated_add_counts_calls_on_one_line() {
        let mut state = ClientState::new();

        for _ in 0..7 {
            reduce(&mut state, Action::AddToCart(vitamin_c()));
        }

        assert_eq!(state.cart_amount(), 1);
        assert_eq!(state.cart_items()[0].quantity, 7);
    }

    #[test]
    fn test_add_same_id_different_pack_flag_gives_two_lines() {
        let mut state = ClientState::new();

        reduce(&mut state, Action::AddToCart(item(5, false, "Gel")));
        reduce(&mut state, Action::AddToCart(item(5, true, "Gel pack")));

        assert_eq!(state.cart_amount(), 2);
        assert_eq!(state.line(ItemKey::product(5)).unwrap().quantity, 1);
        assert_eq!(state.line(ItemKey::pack(5)).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_notifies_added_then_increased() {
        let mut state = ClientState::new();

        let first = reduce(&mut state, Action::AddToCart(vitamin_c()));
        assert_eq!(first[0], Effect::PersistCart);
        assert_eq!(notifications(&first)[0].message, "Vitamin C added to cart");

        let second = reduce(&mut state, Action::AddToCart(vitamin_c()));
        assert_eq!(
            notifications(&second)[0].message,
            "Vitamin C quantity increased"
        );
    }

    #[test]
    fn test_add_keeps_first_snapshot_of_display_fields() {
        let mut state = ClientState::new();
        reduce(&mut state, Action::AddToCart(vitamin_c()));

        let mut repriced = vitamin_c();
        repriced.price_cents = 9999;
        reduce(&mut state, Action::AddToCart(repriced));

        let line = state.line(ItemKey::product(5)).unwrap();
        assert_eq!(line.item.price_cents, 500);
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_increase_existing_line() {
        let mut state = ClientState::new();
        reduce(&mut state, Action::AddToCart(vitamin_c()));

        let effects = reduce(&mut state, Action::IncreaseQuantity(ItemKey::product(5)));

        assert_eq!(state.cart_items()[0].quantity, 2);
        assert!(effects.contains(&Effect::PersistCart));
        assert_eq!(notifications(&effects).len(), 1);
    }

    #[test]
    fn test_quantity_saturates_at_u32_max() {
        let mut state = ClientState::new();
        state.cart_items.push(CartLineItem {
            item: vitamin_c(),
            quantity: u32::MAX,
        });

        let added = reduce(&mut state, Action::AddToCart(vitamin_c()));
        let increased = reduce(&mut state, Action::IncreaseQuantity(ItemKey::product(5)));

        assert_eq!(state.cart_amount(), 1);
        assert_eq!(state.cart_items()[0].quantity, u32::MAX);
        assert!(added.contains(&Effect::PersistCart));
        assert!(increased.contains(&Effect::PersistCart));

        reduce(&mut state, Action::DecreaseQuantity(ItemKey::product(5)));
        assert_eq!(state.cart_items()[0].quantity, u32::MAX - 1);
    }

    #[test]
    fn test_increase_and_decrease_on_missing_key_are_no_ops() {
        let mut state = ClientState::new();
        reduce(&mut state, Action::AddToCart(vitamin_c()));
        let before = state.clone();

        let effects = reduce(&mut state, Action::IncreaseQuantity(ItemKey::pack(5)));
        assert_eq!(state, before);
        assert_eq!(
            effects,
            vec![Effect::MissedLineItem {
                key: ItemKey::pack(5),
                action: "INCREASE_QUANTITY",
            }]
        );

        let effects = reduce(&mut state, Action::DecreaseQuantity(ItemKey::product(99)));
        assert_eq!(state, before);
        assert!(matches!(effects[..], [Effect::MissedLineItem { .. }]));
    }

    #[test]
    fn test_decrease_to_zero_removes_line_and_uses_old_name() {
        let mut state = ClientState::new();
        reduce(&mut state, Action::AddToCart(vitamin_c()));

        let effects = reduce(&mut state, Action::DecreaseQuantity(ItemKey::product(5)));

        assert!(state.is_cart_empty());
        assert!(state.cart_items().iter().all(|line| line.quantity > 0));
        assert_eq!(
            notifications(&effects)[0].message,
            "Vitamin C quantity decreased"
        );
    }

    #[test]
    fn test_remove_drops_only_matching_line() {
        let mut state = ClientState::new();
        reduce(&mut state, Action::AddToCart(item(1, false, "A")));
        reduce(&mut state, Action::AddToCart(item(1, true, "A pack")));
        reduce(&mut state, Action::AddToCart(item(2, false, "B")));
        reduce(&mut state, Action::AddToCart(item(2, false, "B")));
        let untouched: Vec<CartLineItem> = state
            .cart_items()
            .iter()
            .filter(|line| line.key() != ItemKey::pack(1))
            .cloned()
            .collect();

        let effects = reduce(&mut state, Action::RemoveFromCart(ItemKey::pack(1)));

        assert_eq!(effects, vec![Effect::PersistCart]);
        assert_eq!(state.cart_items(), &untouched[..]);
    }

    #[test]
    fn test_remove_ignores_quantity() {
        let mut state = ClientState::new();
        for _ in 0..4 {
            reduce(&mut state, Action::AddToCart(vitamin_c()));
        }

        reduce(&mut state, Action::RemoveFromCart(ItemKey::product(5)));
        assert!(state.is_cart_empty());
    }

    #[test]
    fn test_clear_cart_forgets_storage() {
        let mut state = ClientState::new();
        reduce(&mut state, Action::AddToCart(vitamin_c()));
        reduce(&mut state, Action::AddToCart(item(9, true, "Pack")));

        let effects = reduce(&mut state, Action::ClearCart);

        assert!(state.is_cart_empty());
        assert_eq!(state.cart_amount(), 0);
        assert_eq!(effects, vec![Effect::ForgetCart]);
    }

    #[test]
    fn test_show_pack_after_product_clears_product() {
        let mut state = ClientState::new();
        let product = item(1, false, "Serum");
        let pack = item(2, true, "Routine pack");

        reduce(&mut state, Action::ShowProductDetails(product));
        reduce(&mut state, Action::ShowPackDetails(pack.clone()));

        assert!(state.selected_product().is_none());
        assert!(!state.show_product_details());
        assert_eq!(state.selected_pack(), Some(&pack));
        assert!(state.show_pack_details());
    }

    #[test]
    fn test_hide_only_clears_its_own_selection() {
        let mut state = ClientState::new();
        reduce(&mut state, Action::ShowPackDetails(item(2, true, "Pack")));

        reduce(&mut state, Action::HideProductDetails);
        assert!(state.show_pack_details());

        reduce(&mut state, Action::HidePackDetails);
        assert_eq!(state.selection(), &Selection::None);
    }

    #[test]
    fn test_selection_has_no_effects() {
        let mut state = ClientState::new();
        assert!(reduce(&mut state, Action::ShowProductDetails(vitamin_c())).is_empty());
        assert!(reduce(&mut state, Action::HideProductDetails).is_empty());
    }

    #[test]
    fn test_set_favorites_count() {
        let mut state = ClientState::new();

        let effects = reduce(&mut state, Action::SetFavoritesCount { count: 6 });

        assert_eq!(state.favorites_count(), 6);
        assert_eq!(effects, vec![Effect::PersistFavoritesCount(6)]);
    }

    #[test]
    fn test_vitamin_c_scenario() {
        let mut state = ClientState::new();

        reduce(&mut state, Action::AddToCart(vitamin_c()));
        assert_eq!(state.cart_items().len(), 1);
        assert_eq!(state.cart_items()[0].quantity, 1);

        reduce(&mut state, Action::AddToCart(vitamin_c()));
        assert_eq!(state.cart_items()[0].quantity, 2);

        reduce(&mut state, Action::DecreaseQuantity(ItemKey::product(5)));
        assert_eq!(state.cart_items()[0].quantity, 1);

        reduce(&mut state, Action::DecreaseQuantity(ItemKey::product(5)));
        assert!(state.cart_items().is_empty());
    }
}
