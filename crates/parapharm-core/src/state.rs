//! # Client State
//!
//! The state container the reducer operates on.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ClientState                                      │
//! │                                                                         │
//! │  cart_items: Vec<CartLineItem>   ordered, unique by (id, is_pack)      │
//! │  selection:  Selection           None | Product(item) | Pack(item)     │
//! │  favorites_count: u32            independent counter                    │
//! │                                                                         │
//! │  cart_amount() == cart_items.len()   (derived, never stored apart)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields are crate-private: only the reducer and hydration mutate them, so
//! the invariants cannot be broken from outside. The SPA reads the flat
//! [`ClientStateView`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartLineItem, CatalogItem, ItemKey};

// =============================================================================
// Selection
// =============================================================================

/// Which detail panel is open, if any.
///
/// A closed enum keeps "at most one of product/pack is selected" and
/// "the flag is true iff its selection is set" true by construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    None,
    Product(CatalogItem),
    Pack(CatalogItem),
}

// =============================================================================
// Client State
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientState {
    pub(crate) cart_items: Vec<CartLineItem>,
    pub(crate) selection: Selection,
    pub(crate) favorites_count: u32,
}

impl ClientState {
    /// Empty cart, nothing selected, zero favorites.
    pub fn new() -> Self {
        ClientState::default()
    }

    /// Line items in insertion order.
    pub fn cart_items(&self) -> &[CartLineItem] {
        &self.cart_items
    }

    /// Number of lines (not units) in the cart; the header badge value.
    pub fn cart_amount(&self) -> usize {
        self.cart_items.len()
    }

    pub fn is_cart_empty(&self) -> bool {
        self.cart_items.is_empty()
    }

    /// Finds the line for `key`.
    pub fn line(&self, key: ItemKey) -> Option<&CartLineItem> {
        self.cart_items.iter().find(|line| line.key() == key)
    }

    pub(crate) fn line_mut(&mut self, key: ItemKey) -> Option<&mut CartLineItem> {
        self.cart_items.iter_mut().find(|line| line.key() == key)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_product(&self) -> Option<&CatalogItem> {
        match &self.selection {
            Selection::Product(item) => Some(item),
            _ => None,
        }
    }

    pub fn selected_pack(&self) -> Option<&CatalogItem> {
        match &self.selection {
            Selection::Pack(item) => Some(item),
            _ => None,
        }
    }

    pub fn show_product_details(&self) -> bool {
        matches!(self.selection, Selection::Product(_))
    }

    pub fn show_pack_details(&self) -> bool {
        matches!(self.selection, Selection::Pack(_))
    }

    pub fn favorites_count(&self) -> u32 {
        self.favorites_count
    }

    /// Computes the cart summary.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart summary rendered by the cart page and header badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Distinct lines (same value as `cartAmount`).
    pub item_count: usize,
    /// Sum of quantities.
    pub total_quantity: u64,
    pub subtotal_cents: i64,
}

impl From<&ClientState> for CartTotals {
    fn from(state: &ClientState) -> Self {
        let subtotal: Money = state.cart_items.iter().map(CartLineItem::line_total).sum();
        CartTotals {
            item_count: state.cart_amount(),
            total_quantity: state
                .cart_items
                .iter()
                .map(|line| u64::from(line.quantity))
                .sum(),
            subtotal_cents: subtotal.cents(),
        }
    }
}

// =============================================================================
// Client State View
// =============================================================================

/// Flat, serializable view of [`ClientState`] using the SPA's field names.
///
/// ```json
/// {
///   "cartItems": [...], "cartAmount": 2,
///   "selectedProduct": null, "showProductDetails": false,
///   "selectedPack": {...},   "showPackDetails": true,
///   "favoritesCount": 4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClientStateView {
    pub cart_items: Vec<CartLineItem>,
    pub cart_amount: usize,
    pub selected_product: Option<CatalogItem>,
    pub show_product_details: bool,
    pub selected_pack: Option<CatalogItem>,
    pub show_pack_details: bool,
    pub favorites_count: u32,
}

impl From<&ClientState> for ClientStateView {
    fn from(state: &ClientState) -> Self {
        ClientStateView {
            cart_items: state.cart_items.clone(),
            cart_amount: state.cart_amount(),
            selected_product: state.selected_product().cloned(),
            show_product_details: state.show_product_details(),
            selected_pack: state.selected_pack().cloned(),
            show_pack_details: state.show_pack_details(),
            favorites_count: state.favorites_count,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, is_pack: bool, price_cents: i64) -> CatalogItem {
        CatalogItem {
            id,
            is_pack,
            name: format!("Item {}", id),
            price_cents,
            image: None,
            brand: None,
            description: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = ClientState::new();
        assert!(state.is_cart_empty());
        assert_eq!(state.cart_amount(), 0);
        assert_eq!(state.favorites_count(), 0);
        assert_eq!(state.selection(), &Selection::None);
        assert!(!state.show_product_details());
        assert!(!state.show_pack_details());
    }

    #[test]
    fn test_selection_accessors() {
        let mut state = ClientState::new();
        state.selection = Selection::Pack(item(3, true, 0));

        assert!(state.show_pack_details());
        assert!(!state.show_product_details());
        assert_eq!(state.selected_pack().map(|p| p.id), Some(3));
        assert!(state.selected_product().is_none());
    }

    #[test]
    fn test_totals() {
        let mut state = ClientState::new();
        let mut a = CartLineItem::new(item(1, false, 450));
        a.quantity = 2;
        let b = CartLineItem::new(item(1, true, 1999));
        state.cart_items = vec![a, b];

        let totals = state.totals();
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal_cents, 2899);
    }

    #[test]
    fn test_view_uses_spa_field_names() {
        let mut state = ClientState::new();
        state.selection = Selection::Product(item(8, false, 100));
        state.favorites_count = 4;

        let json = serde_json::to_value(ClientStateView::from(&state)).unwrap();
        assert_eq!(json["cartAmount"], 0);
        assert_eq!(json["showProductDetails"], true);
        assert_eq!(json["selectedProduct"]["id"], 8);
        assert!(json["selectedPack"].is_null());
        assert_eq!(json["favoritesCount"], 4);
    }
}
