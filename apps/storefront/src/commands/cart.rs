//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐                               │
//! │  │  Empty   │───────────────►│ In Cart  │◄──┐ increase_quantity         │
//! │  │  Cart    │                │          │───┘ decrease_quantity         │
//! │  └──────────┘                └──────────┘     add_to_cart (again)       │
//! │       ▲                           │                                     │
//! │       │   clear_cart              │                                     │
//! │       │   remove_from_cart (last) │                                     │
//! │       │   decrease to 0 (last)    │                                     │
//! │       └───────────────────────────┘                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use parapharm_core::validation::validate_catalog_item;
use parapharm_core::{
    Action, CartLineItem, CartTotals, CatalogItem, ClientState, CoreError, ItemKey,
};
use parapharm_db::KeyValueStore;

use crate::error::ApiError;
use crate::state::{Notifier, Store};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl From<&ClientState> for CartResponse {
    fn from(state: &ClientState) -> Self {
        CartResponse {
            items: state.cart_items().to_vec(),
            totals: state.totals(),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals
pub async fn get_cart<S: KeyValueStore, N: Notifier>(store: &Store<S, N>) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(&store.snapshot().await)
}

/// Adds a catalog item to the cart.
///
/// ## Behavior
/// - Item already in cart (same id and kind): quantity increases
/// - Item not in cart: appended with quantity 1
/// - Price is "frozen" at time of adding
///
/// ## Errors
/// `VALIDATION_ERROR` if the name is empty or too long, or the price is
/// negative. The cart is not touched.
pub async fn add_to_cart<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
    item: CatalogItem,
) -> Result<CartResponse, ApiError> {
    debug!(item = %item.key(), "add_to_cart command");

    validate_catalog_item(&item).map_err(CoreError::from)?;

    let state = store.dispatch(Action::AddToCart(item)).await;
    Ok(CartResponse::from(&state))
}

/// Adds one to an existing line. Unknown lines are ignored.
pub async fn increase_quantity<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
    id: i64,
    is_pack: bool,
) -> CartResponse {
    let key = ItemKey { id, is_pack };
    debug!(item = %key, "increase_quantity command");

    let state = store.dispatch(Action::IncreaseQuantity(key)).await;
    CartResponse::from(&state)
}

/// Takes one from an existing line, removing it at zero. Unknown lines are
/// ignored.
pub async fn decrease_quantity<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
    id: i64,
    is_pack: bool,
) -> CartResponse {
    let key = ItemKey { id, is_pack };
    debug!(item = %key, "decrease_quantity command");

    let state = store.dispatch(Action::DecreaseQuantity(key)).await;
    CartResponse::from(&state)
}

/// Removes a line whatever its quantity.
pub async fn remove_from_cart<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
    id: i64,
    is_pack: bool,
) -> CartResponse {
    let key = ItemKey { id, is_pack };
    debug!(item = %key, "remove_from_cart command");

    let state = store.dispatch(Action::RemoveFromCart(key)).await;
    CartResponse::from(&state)
}

/// Clears all items from the cart and forgets the stored cart.
pub async fn clear_cart<S: KeyValueStore, N: Notifier>(store: &Store<S, N>) -> CartResponse {
    debug!("clear_cart command");

    let state = store.dispatch(Action::ClearCart).await;
    CartResponse::from(&state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{pack, product, store};
    use crate::error::ErrorCode;

    #[tokio::test]
    async fn test_add_then_totals() {
        let store = store();

        add_to_cart(&store, product(1, "Sunscreen SPF50", 1599))
            .await
            .unwrap();
        let cart = add_to_cart(&store, pack(1, "Summer pack", 3000))
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.totals.item_count, 2);
        assert_eq!(cart.totals.subtotal_cents, 4599);
    }

    #[tokio::test]
    async fn test_add_rejects_invalid_item() {
        let store = store();

        let err = add_to_cart(&store, product(1, "   ", 100))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_to_cart(&store, product(1, "Cream", -1))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert!(get_cart(&store).await.items.is_empty());
        assert!(store.notifier().notifications().is_empty());
    }

    #[tokio::test]
    async fn test_quantity_commands_match_kind() {
        let store = store();
        add_to_cart(&store, product(5, "Shampoo", 700)).await.unwrap();
        add_to_cart(&store, pack(5, "Hair pack", 2000)).await.unwrap();

        increase_quantity(&store, 5, true).await;
        let cart = decrease_quantity(&store, 5, false).await;

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].key(), ItemKey::pack(5));
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.totals.total_quantity, 2);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let store = store();
        add_to_cart(&store, product(1, "A", 100)).await.unwrap();
        add_to_cart(&store, product(1, "A", 100)).await.unwrap();
        add_to_cart(&store, product(2, "B", 100)).await.unwrap();

        let cart = remove_from_cart(&store, 1, false).await;
        assert_eq!(cart.items.len(), 1);

        // Absent line: nothing changes.
        let cart = remove_from_cart(&store, 1, false).await;
        assert_eq!(cart.items.len(), 1);

        let cart = clear_cart(&store).await;
        assert!(cart.items.is_empty());
        assert_eq!(cart.totals.subtotal_cents, 0);
    }
}
