//! # Detail Panel Commands
//!
//! At most one detail panel is open: opening the product panel closes the
//! pack panel and vice versa. Hiding only closes the named kind.

use serde::{Deserialize, Serialize};
use tracing::debug;

use parapharm_core::validation::validate_catalog_item;
use parapharm_core::{Action, CatalogItem, ClientState, CoreError};
use parapharm_db::KeyValueStore;

use crate::error::ApiError;
use crate::state::{Notifier, Store};

/// Which detail panel is open, and for what.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsResponse {
    pub selected_product: Option<CatalogItem>,
    pub show_product_details: bool,
    pub selected_pack: Option<CatalogItem>,
    pub show_pack_details: bool,
}

impl From<&ClientState> for DetailsResponse {
    fn from(state: &ClientState) -> Self {
        DetailsResponse {
            selected_product: state.selected_product().cloned(),
            show_product_details: state.show_product_details(),
            selected_pack: state.selected_pack().cloned(),
            show_pack_details: state.show_pack_details(),
        }
    }
}

pub async fn get_details<S: KeyValueStore, N: Notifier>(store: &Store<S, N>) -> DetailsResponse {
    debug!("get_details command");
    DetailsResponse::from(&store.snapshot().await)
}

/// Opens the product panel for `product`.
pub async fn show_product_details<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
    product: CatalogItem,
) -> Result<DetailsResponse, ApiError> {
    debug!(item = %product.key(), "show_product_details command");

    validate_catalog_item(&product).map_err(CoreError::from)?;

    let state = store.dispatch(Action::ShowProductDetails(product)).await;
    Ok(DetailsResponse::from(&state))
}

pub async fn hide_product_details<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
) -> DetailsResponse {
    debug!("hide_product_details command");

    let state = store.dispatch(Action::HideProductDetails).await;
    DetailsResponse::from(&state)
}

/// Opens the pack panel for `pack`.
pub async fn show_pack_details<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
    pack: CatalogItem,
) -> Result<DetailsResponse, ApiError> {
    debug!(item = %pack.key(), "show_pack_details command");

    validate_catalog_item(&pack).map_err(CoreError::from)?;

    let state = store.dispatch(Action::ShowPackDetails(pack)).await;
    Ok(DetailsResponse::from(&state))
}

pub async fn hide_pack_details<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
) -> DetailsResponse {
    debug!("hide_pack_details command");

    let state = store.dispatch(Action::HidePackDetails).await;
    DetailsResponse::from(&state)
}
