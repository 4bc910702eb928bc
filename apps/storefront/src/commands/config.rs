//! # Config Commands
//!
//! Configuration retrieval and the viewport report that drives quiet
//! notifications.

use serde::{Deserialize, Serialize};
use tracing::debug;

use parapharm_db::KeyValueStore;

use crate::state::{ConfigState, Notifier, Store};

/// Gets the current application configuration.
///
/// ## When Used
/// - App startup (to configure UI)
/// - Toast placement and the quiet-notification breakpoint
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportResponse {
    pub width: u32,
    pub quiet: bool,
}

/// Records the front end's viewport width. Called on load and on resize.
pub async fn set_viewport_width<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
    width: u32,
) -> ViewportResponse {
    store.set_viewport_width(width).await;
    ViewportResponse {
        width,
        quiet: store.policy().await.is_quiet(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::store;

    #[test]
    fn test_get_config_returns_copy() {
        let config = ConfigState::default();
        assert_eq!(get_config(&config), config);
    }

    #[tokio::test]
    async fn test_viewport_report() {
        let store = store();

        assert!(set_viewport_width(&store, 390).await.quiet);
        assert!(!set_viewport_width(&store, 1280).await.quiet);
    }
}
