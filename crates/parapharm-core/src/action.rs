//! # Actions
//!
//! The closed set of inputs the reducer accepts.
//!
//! ## Wire Format
//! The SPA dispatches Redux-style objects: a `type` tag plus a `payload`.
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  type                    payload                                        │
//! │  ──────────────────────  ─────────────────────────────────────────      │
//! │  ADD_TO_CART             CatalogItem                                    │
//! │  INCREASE_QUANTITY       { id, isPack }                                 │
//! │  DECREASE_QUANTITY       { id, isPack }                                 │
//! │  REMOVE_FROM_CART        { id, isPack }                                 │
//! │  CLEAR_CART              (none or {})                                   │
//! │  SHOW_PRODUCT_DETAILS    CatalogItem                                    │
//! │  HIDE_PRODUCT_DETAILS    (none or {})                                   │
//! │  SHOW_PACK_DETAILS       CatalogItem                                    │
//! │  HIDE_PACK_DETAILS       (none or {})                                   │
//! │  setFvoritesCount        { count } or a bare number                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The `setFvoritesCount` tag
//! Existing callers dispatch the misspelled tag, so it stays the canonical
//! one and is what serialization emits. `SET_FAVORITES_COUNT` is accepted
//! on input as an alias.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::{CatalogItem, ItemKey};

/// Canonical wire tag of [`Action::SetFavoritesCount`].
pub const SET_FAVORITES_COUNT_TAG: &str = "setFvoritesCount";

/// Accepted spelling of the favorites tag.
pub const SET_FAVORITES_COUNT_ALIAS: &str = "SET_FAVORITES_COUNT";

/// Every state transition of the storefront client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", try_from = "RawAction")]
pub enum Action {
    #[serde(rename = "ADD_TO_CART")]
    AddToCart(CatalogItem),

    #[serde(rename = "INCREASE_QUANTITY")]
    IncreaseQuantity(ItemKey),

    #[serde(rename = "DECREASE_QUANTITY")]
    DecreaseQuantity(ItemKey),

    #[serde(rename = "REMOVE_FROM_CART")]
    RemoveFromCart(ItemKey),

    #[serde(rename = "CLEAR_CART")]
    ClearCart,

    #[serde(rename = "SHOW_PRODUCT_DETAILS")]
    ShowProductDetails(CatalogItem),

    #[serde(rename = "HIDE_PRODUCT_DETAILS")]
    HideProductDetails,

    #[serde(rename = "SHOW_PACK_DETAILS")]
    ShowPackDetails(CatalogItem),

    #[serde(rename = "HIDE_PACK_DETAILS")]
    HidePackDetails,

    #[serde(rename = "setFvoritesCount")]
    SetFavoritesCount { count: u32 },
}

impl Action {
    /// Parses one action from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::MalformedAction(e.to_string()))
    }

    /// The wire tag, for logs.
    pub fn tag(&self) -> &'static str {
        match self {
            Action::AddToCart(_) => "ADD_TO_CART",
            Action::IncreaseQuantity(_) => "INCREASE_QUANTITY",
            Action::DecreaseQuantity(_) => "DECREASE_QUANTITY",
            Action::RemoveFromCart(_) => "REMOVE_FROM_CART",
            Action::ClearCart => "CLEAR_CART",
            Action::ShowProductDetails(_) => "SHOW_PRODUCT_DETAILS",
            Action::HideProductDetails => "HIDE_PRODUCT_DETAILS",
            Action::ShowPackDetails(_) => "SHOW_PACK_DETAILS",
            Action::HidePackDetails => "HIDE_PACK_DETAILS",
            Action::SetFavoritesCount { .. } => SET_FAVORITES_COUNT_TAG,
        }
    }
}

// =============================================================================
// Lenient Decoding
// =============================================================================

/// Untyped `{ type, payload }` envelope.
///
/// Decoding goes through this so that payload-less actions accept both a
/// missing payload and `{}`, and so the favorites alias is explicit.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountPayload {
    Wrapped { count: u32 },
    Bare(u32),
}

impl TryFrom<RawAction> for Action {
    type Error = CoreError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let RawAction { kind, payload } = raw;
        let action = match kind.as_str() {
            "ADD_TO_CART" => Action::AddToCart(decode(&kind, payload)?),
            "INCREASE_QUANTITY" => Action::IncreaseQuantity(decode(&kind, payload)?),
            "DECREASE_QUANTITY" => Action::DecreaseQuantity(decode(&kind, payload)?),
            "REMOVE_FROM_CART" => Action::RemoveFromCart(decode(&kind, payload)?),
            "CLEAR_CART" => Action::ClearCart,
            "SHOW_PRODUCT_DETAILS" => Action::ShowProductDetails(decode(&kind, payload)?),
            "HIDE_PRODUCT_DETAILS" => Action::HideProductDetails,
            "SHOW_PACK_DETAILS" => Action::ShowPackDetails(decode(&kind, payload)?),
            "HIDE_PACK_DETAILS" => Action::HidePackDetails,
            SET_FAVORITES_COUNT_TAG | SET_FAVORITES_COUNT_ALIAS => {
                let count = match decode::<CountPayload>(&kind, payload)? {
                    CountPayload::Wrapped { count } | CountPayload::Bare(count) => count,
                };
                Action::SetFavoritesCount { count }
            }
            other => {
                return Err(CoreError::MalformedAction(format!(
                    "unknown action type '{}'",
                    other
                )))
            }
        };
        Ok(action)
    }
}

fn decode<T: serde::de::DeserializeOwned>(kind: &str, payload: Value) -> CoreResult<T> {
    serde_json::from_value(payload)
        .map_err(|e| CoreError::MalformedAction(format!("{} payload: {}", kind, e)))
}

// =============================================================================
// Unit Tests
// =============================================================================
