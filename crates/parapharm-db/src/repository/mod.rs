//! # Repository Module
//!
//! SQLite repositories for the storefront.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Store (storefront app)                                                │
//! │       │                                                                 │
//! │       │  db.kv().write("cartItems", json)                              │
//! │       ▼                                                                 │
//! │  KvRepository  (implements KeyValueStore)                              │
//! │  ├── read(&self, key)                                                  │
//! │  ├── write(&self, key, value)                                          │
//! │  └── remove(&self, key)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite kv_store table                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod kv;
