//! # parapharm-db: Key-Value Persistence for the Storefront
//!
//! The storage side of the client state's write-through persistence.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Data Flow                                │
//! │                                                                         │
//! │  Store::dispatch(action)                                               │
//! │       │  effects: PersistCart / ForgetCart / PersistFavoritesCount     │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   parapharm-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌──────────────┐     │   │
//! │  │   │ KeyValueStore │   │ KvRepository  │   │ MemoryStore  │     │   │
//! │  │   │   (kv.rs)     │◄──│ (SQLite)      │   │ (HashMap)    │     │   │
//! │  │   │ read/write/   │◄──┼───────────────┼───│              │     │   │
//! │  │   │ remove        │   │ Database/pool │   │              │     │   │
//! │  │   └───────────────┘   └───────────────┘   └──────────────┘     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  storefront.db  (kv_store table)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - The `KeyValueStore` port and `load_persisted`
//! - [`memory`] - In-memory implementation
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`repository`] - SQLite implementation
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use parapharm_db::{Database, DbConfig, KeyValueStore};
//!
//! let db = Database::new(DbConfig::new("storefront.db")).await?;
//! db.kv().write("favoritesCount", "3").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use kv::{load_persisted, KeyValueStore};
pub use memory::MemoryStore;
pub use pool::{Database, DbConfig};
pub use repository::kv::KvRepository;
