//! # Hydration
//!
//! Builds the initial [`ClientState`] from the raw strings found in storage.
//!
//! ## Degradation Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Key              Missing        Malformed       Suspicious content     │
//! │  ───────────────  ─────────────  ──────────────  ─────────────────────  │
//! │  cartItems        []             []              qty 0 → dropped        │
//! │                                                  dup key → merged       │
//! │  cartAmount       derived        derived         ≠ len → len wins       │
//! │  favoritesCount   0              0               -                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Hydration never fails. Everything it had to discard is returned as a list
//! of [`HydrationIssue`] so the shell can log it.

use serde::de::DeserializeOwned;

use crate::error::HydrationIssue;
use crate::state::{ClientState, Selection};
use crate::types::CartLineItem;
use crate::{CART_AMOUNT_KEY, CART_ITEMS_KEY, FAVORITES_COUNT_KEY};

/// Raw persisted values, as read from the key-value store.
#[derive(Debug, Clone, Default)]
pub struct PersistedState {
    pub cart_items: Option<String>,
    pub cart_amount: Option<String>,
    pub favorites_count: Option<String>,
}

/// Result of hydration: the state plus what had to be thrown away.
#[derive(Debug, Clone, Default)]
pub struct Hydrated {
    pub state: ClientState,
    pub issues: Vec<HydrationIssue>,
}

/// Parses persisted values into a fresh [`ClientState`].
pub fn hydrate(persisted: &PersistedState) -> Hydrated {
    let mut issues = Vec::new();

    let lines: Vec<CartLineItem> =
        parse_or_default(CART_ITEMS_KEY, persisted.cart_items.as_deref(), &mut issues);
    let cart_items = sanitize_lines(lines, &mut issues);

    if let Some(raw) = persisted.cart_amount.as_deref() {
        match serde_json::from_str::<u64>(raw) {
            Ok(persisted_amount) if persisted_amount != cart_items.len() as u64 => {
                issues.push(HydrationIssue::AmountMismatch {
                    persisted: persisted_amount,
                    actual: cart_items.len(),
                });
            }
            Ok(_) => {}
            Err(e) => issues.push(HydrationIssue::Malformed {
                key: CART_AMOUNT_KEY,
                reason: e.to_string(),
            }),
        }
    }

    let favorites_count: u32 = parse_or_default(
        FAVORITES_COUNT_KEY,
        persisted.favorites_count.as_deref(),
        &mut issues,
    );

    Hydrated {
        state: ClientState {
            cart_items,
            selection: Selection::None,
            favorites_count,
        },
        issues,
    }
}

fn parse_or_default<T: DeserializeOwned + Default>(
    key: &'static str,
    raw: Option<&str>,
    issues: &mut Vec<HydrationIssue>,
) -> T {
    let Some(raw) = raw else {
        return T::default();
    };

    serde_json::from_str(raw).unwrap_or_else(|e| {
        issues.push(HydrationIssue::Malformed {
            key,
            reason: e.to_string(),
        });
        T::default()
    })
}

/// Re-establishes the cart invariants on stored lines.
///
/// Zero-quantity lines are dropped. Duplicate keys are merged into the first
/// occurrence by summing quantities, capped at `u32::MAX`.
fn sanitize_lines(
    lines: Vec<CartLineItem>,
    issues: &mut Vec<HydrationIssue>,
) -> Vec<CartLineItem> {
    let mut clean: Vec<CartLineItem> = Vec::with_capacity(lines.len());

    for line in lines {
        if line.quantity == 0 {
            issues.push(HydrationIssue::ZeroQuantity(line.key()));
            continue;
        }

        match clean.iter_mut().find(|kept| kept.key() == line.key()) {
            Some(kept) => {
                issues.push(HydrationIssue::DuplicateLine(line.key()));
                kept.quantity = kept.quantity.saturating_add(line.quantity);
            }
            None => clean.push(line),
        }
    }

    clean
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemKey;

    fn persisted(items: Option<&str>, amount: Option<&str>, fav: Option<&str>) -> PersistedState {
        PersistedState {
            cart_items: items.map(str::to_string),
            cart_amount: amount.map(str::to_string),
            favorites_count: fav.map(str::to_string),
        }
    }

    #[test]
    fn test_nothing_persisted_gives_defaults() {
        let hydrated = hydrate(&PersistedState::default());
        assert_eq!(hydrated.state, ClientState::new());
        assert!(hydrated.issues.is_empty());
    }

    #[test]
    fn test_valid_values_are_loaded() {
        let hydrated = hydrate(&persisted(
            Some(r#"[{"id":5,"isPack":false,"name":"Vitamin C","priceCents":899,"quantity":2}]"#),
            Some("1"),
            Some("3"),
        ));

        assert!(hydrated.issues.is_empty());
        let state = hydrated.state;
        assert_eq!(state.cart_amount(), 1);
        assert_eq!(state.line(ItemKey::product(5)).unwrap().quantity, 2);
        assert_eq!(state.favorites_count(), 3);
        assert_eq!(state.selection(), &Selection::None);
    }

    #[test]
    fn test_malformed_values_degrade_to_defaults() {
        let hydrated = hydrate(&persisted(Some("{not json"), Some("\"two\""), Some("-4")));

        assert_eq!(hydrated.state, ClientState::new());
        assert_eq!(hydrated.issues.len(), 3);
        assert!(hydrated
            .issues
            .iter()
            .all(|issue| matches!(issue, HydrationIssue::Malformed { .. })));
    }

    #[test]
    fn test_zero_quantity_and_duplicates_are_repaired() {
        let hydrated = hydrate(&persisted(
            Some(
                r#"[
                {"id":1,"isPack":false,"name":"A","quantity":2},
                {"id":2,"isPack":false,"name":"B","quantity":0},
                {"id":1,"isPack":true,"name":"A pack","quantity":1},
                {"id":1,"isPack":false,"name":"A again","quantity":3}
            ]"#,
            ),
            Some("4"),
            None,
        ));

        let state = hydrated.state;
        assert_eq!(state.cart_amount(), 2);
        let first = &state.cart_items()[0];
        assert_eq!(first.key(), ItemKey::product(1));
        assert_eq!(first.quantity, 5);
        assert_eq!(first.name(), "A");

        assert!(hydrated
            .issues
            .contains(&HydrationIssue::ZeroQuantity(ItemKey::product(2))));
        assert!(hydrated
            .issues
            .contains(&HydrationIssue::DuplicateLine(ItemKey::product(1))));
        assert!(hydrated.issues.contains(&HydrationIssue::AmountMismatch {
            persisted: 4,
            actual: 2,
        }));
    }

    #[test]
    fn test_duplicate_merge_caps_quantity() {
        let hydrated = hydrate(&persisted(
            Some(
                r#"[
                {"id":5,"isPack":false,"name":"Vitamin C","quantity":4294967295},
                {"id":5,"isPack":false,"name":"Vitamin C","quantity":7}
            ]"#,
            ),
            None,
            None,
        ));

        let mut state = hydrated.state;
        assert_eq!(state.cart_items()[0].quantity, u32::MAX);

        crate::reduce(
            &mut state,
            crate::Action::IncreaseQuantity(ItemKey::product(5)),
        );
        assert_eq!(state.cart_amount(), 1);
        assert_eq!(state.cart_items()[0].quantity, u32::MAX);
    }
}
