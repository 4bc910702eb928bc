//! # Commands Module
//!
//! Typed entry points over the store, one per thing the front end can ask.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── action.rs     ◄─── Raw {type, payload} actions (stdin session)
//! ├── cart.rs       ◄─── Cart manipulation
//! ├── details.rs    ◄─── Product/pack detail panels
//! ├── favorites.rs  ◄─── Favorites counter
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_to_cart(&store, item)                                             │
//! │         │                                                               │
//! │         ├── validate item at the boundary ──► Err(ApiError)            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  store.dispatch(Action::AddToCart(item))   (never fails)               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CartResponse { items, totals }  ──► serde_json ──► front end          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands are generic over the storage and notifier, so tests run them
//! against `MemoryStore` and `RecordingNotifier`.

pub mod action;
pub mod cart;
pub mod config;
pub mod details;
pub mod favorites;
