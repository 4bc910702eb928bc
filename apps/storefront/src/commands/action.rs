//! # Raw Action Commands
//!
//! Accepts actions in their wire form, `{"type": ..., "payload": ...}`, as
//! the storefront's front end sends them. Catalog payloads get the same
//! boundary checks as the typed commands.

use tracing::debug;

use parapharm_core::validation::validate_catalog_item;
use parapharm_core::{Action, ClientStateView, CoreError};
use parapharm_db::KeyValueStore;

use crate::error::ApiError;
use crate::state::{Notifier, Store};

/// Validates and dispatches a decoded action, returning the full state.
pub async fn dispatch_action<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
    action: Action,
) -> Result<ClientStateView, ApiError> {
    debug!(action = action.tag(), "dispatch_action command");

    match &action {
        Action::AddToCart(item) | Action::ShowProductDetails(item) | Action::ShowPackDetails(item) => {
            validate_catalog_item(item).map_err(CoreError::from)?;
        }
        _ => {}
    }

    let state = store.dispatch(action).await;
    Ok(ClientStateView::from(&state))
}

/// Decodes one JSON action and dispatches it.
pub async fn dispatch_json<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
    json: &str,
) -> Result<ClientStateView, ApiError> {
    let action = Action::from_json(json)?;
    dispatch_action(store, action).await
}
