//! # Catalog Gateway
//!
//! The catalog is an external collaborator: given a text query it returns a
//! flat list of items, each with an ordered list of variations. This module
//! owns the domain shape of that answer and the [`CatalogGateway`] seam that
//! the session drives.
//!
//! ## Wire shape
//!
//! ```text
//! [{ "name": "Milk",
//!    "variations": [{ "name": "1L", "price": 250, "barcode": "0123456789012" }] }]
//! ```
//!
//! `price` is an integer in minor currency units (cents) or `null`.
//!
//! ## Implementations
//!
//! | Gateway | Source |
//! |---------|--------|
//! | [`HttpGateway`] | Another server speaking the wire shape above |
//! | [`SquareGateway`] | Square Catalog API (`search-catalog-items`) |
//! | [`StaticGateway`] | In-memory catalog, loaded from a JSON file |

mod fixed;
mod http;
mod square;

pub use fixed::StaticGateway;
pub use http::HttpGateway;
pub use square::{SquareEnvironment, SquareGateway};

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// User agent sent by every HTTP-backed gateway.
pub(crate) const USER_AGENT: &str = "shelfrig/0.1";

/// A single sellable variation of a catalog item. One variation prints as one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    pub name: String,
    /// Price in cents. `null` on the wire reads as zero.
    #[serde(rename = "price", default, deserialize_with = "null_as_default")]
    pub price_cents: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub barcode: String,
}

impl Variation {
    pub fn new(name: impl Into<String>, price_cents: u64, barcode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_cents,
            barcode: barcode.into(),
        }
    }
}

/// A catalog item as returned by a gateway.
///
/// The item's `name` is its identity for queue membership. `id` is carried
/// when the upstream catalog provides one but is never used as a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variations: Vec<Variation>,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, variations: Vec<Variation>) -> Self {
        Self {
            id: None,
            name: name.into(),
            variations,
        }
    }

    /// Attach the upstream catalog identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Number of labels this item occupies on a sheet.
    #[inline]
    pub fn label_count(&self) -> usize {
        self.variations.len()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a wire-shape item list.
pub fn parse_items(json: &str) -> Result<Vec<CatalogItem>, GatewayError> {
    serde_json::from_str(json).map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Failure talking to a catalog. Callers treat every variant as
/// "gateway unavailable"; the variants only exist for logging.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed catalog response: {0}")]
    Decode(String),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Text search over a product catalog.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Search the catalog. Results are ordered as the upstream ranks them.
    async fn search(&self, query: &str) -> Result<Vec<CatalogItem>, GatewayError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}
