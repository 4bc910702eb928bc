//! # parapharm-core: Client-State Logic for the Parapharm Storefront
//!
//! The cart, favorites counter and detail-panel selection of the storefront,
//! as a pure reducer with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Parapharm Storefront                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SPA (catalog, cart, favorites)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch(Action)                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Store + commands (apps/storefront)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ parapharm-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────┐     │   │
//! │  │   │  action  │ │ reducer  │ │  state   │ │   hydrate    │     │   │
//! │  │   │  Action  │ │ reduce() │ │ Client-  │ │ raw strings  │     │   │
//! │  │   │  (wire)  │ │ Effect   │ │ State    │ │ → state      │     │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────┘     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO LOGGING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ effects                                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              parapharm-db (key-value persistence)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog items, line items, the `(id, is_pack)` key
//! - [`action`] - The action vocabulary and its wire format
//! - [`reducer`] - `reduce()` and the [`Effect`] it returns
//! - [`state`] - `ClientState`, selection, totals, SPA view
//! - [`hydrate`] - Initial state from persisted strings
//! - [`notification`] - Toast descriptions
//! - [`money`] - Integer-cent money
//! - [`validation`] - Catalog payload checks
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use parapharm_core::{reduce, Action, CatalogItem, ClientState, Effect, ItemKey};
//!
//! let mut state = ClientState::new();
//! let item = CatalogItem {
//!     id: 5,
//!     is_pack: false,
//!     name: "Vitamin C".to_string(),
//!     price_cents: 899,
//!     image: None,
//!     brand: None,
//!     description: None,
//!     extra: Default::default(),
//! };
//!
//! let effects = reduce(&mut state, Action::AddToCart(item));
//! assert_eq!(effects[0], Effect::PersistCart);
//! assert_eq!(state.line(ItemKey::product(5)).unwrap().quantity, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod error;
pub mod hydrate;
pub mod money;
pub mod notification;
pub mod reducer;
pub mod state;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use action::Action;
pub use error::{CoreError, CoreResult, HydrationIssue, ValidationError};
pub use hydrate::{hydrate, Hydrated, PersistedState};
pub use money::Money;
pub use notification::{Notification, Severity, ToastPosition};
pub use reducer::{reduce, Effect};
pub use state::{CartTotals, ClientState, ClientStateView, Selection};
pub use types::*;

// =============================================================================
// Storage Keys
// =============================================================================
// These are an external contract: existing browsers already hold data under
// these names.

/// Persisted JSON array of [`CartLineItem`].
pub const CART_ITEMS_KEY: &str = "cartItems";

/// Persisted number of lines in the cart.
pub const CART_AMOUNT_KEY: &str = "cartAmount";

/// Persisted favorites counter.
pub const FAVORITES_COUNT_KEY: &str = "favoritesCount";

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest catalog item name accepted at the command boundary.
pub const MAX_ITEM_NAME_LEN: usize = 200;
