//! # Parapharm Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Parapharm Storefront                             │
//! │                                                                         │
//! │  front end ──► stdin (one JSON action per line)                        │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  main.rs ────► tokio runtime, exit code                          │  │
//! │  │  lib.rs ─────► logging, config, database, store, session loop    │  │
//! │  │  commands/ ──► validation + dispatch                             │  │
//! │  │  state/ ─────► Store, Notifier, ConfigState                      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                    │                                                    │
//! │                    ├──► stdout (state after each action)               │
//! │                    └──► storefront.db (cartItems, cartAmount, ...)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match parapharm_storefront::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Storefront stopped");
            ExitCode::FAILURE
        }
    }
}
