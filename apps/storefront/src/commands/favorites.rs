//! # Favorites Commands
//!
//! The header badge counter. The favorites list itself lives elsewhere; only
//! its size is kept here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use parapharm_core::Action;
use parapharm_db::KeyValueStore;

use crate::state::{Notifier, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesResponse {
    pub count: u32,
}

pub async fn get_favorites_count<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
) -> FavoritesResponse {
    FavoritesResponse {
        count: store.snapshot().await.favorites_count(),
    }
}

/// Overwrites the counter and persists it.
pub async fn set_favorites_count<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
    count: u32,
) -> FavoritesResponse {
    debug!(count, "set_favorites_count command");

    let state = store.dispatch(Action::SetFavoritesCount { count }).await;
    FavoritesResponse {
        count: state.favorites_count(),
    }
}
