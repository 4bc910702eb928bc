//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐  ┌──────────────────┐  ┌──────────────────┐  │
//! │  │  Store<S, N>         │  │  Notifier        │  │  ConfigState     │  │
//! │  │                      │  │                  │  │                  │  │
//! │  │  Mutex<ClientState>  │  │  TracingNotifier │  │  store_name      │  │
//! │  │  storage: S (kv)     │  │  Recording...    │  │  quiet_below_px  │  │
//! │  │  policy              │  │                  │  │  toast_position  │  │
//! │  └──────────────────────┘  └──────────────────┘  └──────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Store: one dispatch at a time, lock held through its effects        │
//! │  • Notifier: Send + Sync, called under the store lock                  │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod notifier;
mod store;

pub use config::{ConfigState, ENV_DB_PATH};
pub use notifier::{
    NotificationPolicy, Notifier, RecordingNotifier, TracingNotifier, DEFAULT_QUIET_BELOW_PX,
};
pub use store::Store;
