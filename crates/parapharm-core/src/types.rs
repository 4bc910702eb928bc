//! # Domain Types
//!
//! Catalog and cart types shared by the reducer, storage and command layers.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    ItemKey      │   │  CatalogItem    │   │  CartLineItem   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id, is_pack    │   │  (CatalogItem)  │       │
//! │  │  is_pack        │   │  name           │   │  quantity ≥ 1   │       │
//! │  │                 │   │  price_cents    │   │                 │       │
//! │  └─────────────────┘   │  image, brand   │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Products and Packs
//! Packs are bundled offerings that share the product id namespace. A product
//! with id 5 and a pack with id 5 are two different line items, so every
//! lookup goes through [`ItemKey`], never through the bare id.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Item Key
// =============================================================================

/// Composite identity of a cart line: `(id, is_pack)`.
///
/// Serialized as `{ "id": 5, "isPack": false }`, which is also the payload of
/// the quantity and removal actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItemKey {
    pub id: i64,
    pub is_pack: bool,
}

impl ItemKey {
    /// Key of a single product.
    #[inline]
    pub const fn product(id: i64) -> Self {
        ItemKey { id, is_pack: false }
    }

    /// Key of a pack.
    #[inline]
    pub const fn pack(id: i64) -> Self {
        ItemKey { id, is_pack: true }
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_pack { "pack" } else { "product" };
        write!(f, "{}#{}", kind, self.id)
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

const PRICE_KEY: &str = "price";
const QUANTITY_KEY: &str = "quantity";

/// A product or pack as the catalog API returns it.
///
/// The cart keeps a frozen copy of these display attributes, so a price
/// change in the catalog does not change what is already in the cart.
/// Attributes without a typed field (`stock`, `category`, a decimal `price`)
/// are carried in [`extra`](Self::extra) and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogItem {
    /// Catalog identifier (shared namespace for products and packs).
    pub id: i64,

    /// True when this is a bundled pack rather than a single product.
    #[serde(default)]
    pub is_pack: bool,

    /// Display name, also used in notification messages.
    pub name: String,

    /// Unit price in cents.
    #[serde(default)]
    pub price_cents: i64,

    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Brand name shown in carousels and on the detail panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Any other catalog attribute, kept verbatim.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl CatalogItem {
    /// Returns the `(id, is_pack)` key of this item.
    #[inline]
    pub fn key(&self) -> ItemKey {
        ItemKey {
            id: self.id,
            is_pack: self.is_pack,
        }
    }

    /// Returns the unit price as Money.
    ///
    /// Items that only carry a decimal `price` (major units, as the catalog
    /// API sends it) are priced from that when `price_cents` is 0.
    pub fn price(&self) -> Money {
        if self.price_cents == 0 {
            if let Some(major) = self.extra.get(PRICE_KEY).and_then(Value::as_f64) {
                return Money::from_major(major);
            }
        }
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One entry of the cart sequence.
///
/// ## Invariants
/// - `(id, is_pack)` is unique within the cart
/// - `quantity >= 1`; a line that reaches 0 is removed, never kept
///
/// The catalog fields are flattened so the persisted JSON reads
/// `{ "id": 5, "isPack": false, "name": "...", "quantity": 2 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub item: CatalogItem,

    pub quantity: u32,
}

impl CartLineItem {
    /// Starts a new line with quantity 1 from a catalog item.
    ///
    /// A stray `quantity` attribute on the item is dropped so it cannot
    /// shadow the line's own count when serialized.
    pub fn new(mut item: CatalogItem) -> Self {
        item.extra.remove(QUANTITY_KEY);
        CartLineItem { item, quantity: 1 }
    }

    #[inline]
    pub fn key(&self) -> ItemKey {
        self.item.key()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.item.price() * self.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
