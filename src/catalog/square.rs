//! Square Catalog API gateway.
//!
//! Uses `POST /v2/catalog/search-catalog-items` with a text filter and maps
//! the returned `ITEM` objects onto [`CatalogItem`]. The variation barcode is
//! the UPC when present, else the SKU.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{CatalogGateway, CatalogItem, GatewayError, USER_AGENT, Variation};

/// Pinned API version header.
const SQUARE_VERSION: &str = "2024-07-17";

/// Which Square environment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareEnvironment {
    Production,
    Sandbox,
}

impl SquareEnvironment {
    /// `"production"` (any case) selects production; everything else is sandbox.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Sandbox
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => "https://connect.squareup.com",
            Self::Sandbox => "https://connect.squareupsandbox.com",
        }
    }
}

pub struct SquareGateway {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl SquareGateway {
    pub fn new(token: impl Into<String>, environment: SquareEnvironment) -> Result<Self, GatewayError> {
        Self::with_base_url(token, environment.base_url())
    }

    /// Point the gateway at a non-standard host (proxies, test servers).
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CatalogGateway for SquareGateway {
    async fn search(&self, query: &str) -> Result<Vec<CatalogItem>, GatewayError> {
        let url = format!("{}/v2/catalog/search-catalog-items", self.base_url);
        debug!(%url, query, "square catalog search");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Square-Version", SQUARE_VERSION)
            .json(&json!({ "text_filter": query }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: SearchItemsResponse =
            serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))?;
        Ok(parsed.into_items())
    }

    fn name(&self) -> &str {
        "square"
    }
}

// ============================================================================
// RESPONSE SCHEMA
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct SearchItemsResponse {
    #[serde(default)]
    items: Vec<SquareObject>,
}

#[derive(Debug, Deserialize)]
struct SquareObject {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    item_data: Option<SquareItemData>,
}

#[derive(Debug, Deserialize)]
struct SquareItemData {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    variations: Vec<SquareVariationObject>,
}

#[derive(Debug, Deserialize)]
struct SquareVariationObject {
    #[serde(default)]
    item_variation_data: Option<SquareVariationData>,
}

#[derive(Debug, Deserialize)]
struct SquareVariationData {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    price_money: Option<SquareMoney>,
    #[serde(default)]
    upc: Option<String>,
    #[serde(default)]
    sku: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SquareMoney {
    #[serde(default)]
    amount: Option<i64>,
}

impl SearchItemsResponse {
    fn into_items(self) -> Vec<CatalogItem> {
        self.items
            .into_iter()
            .filter_map(|object| {
                let data = object.item_data?;
                let variations = data
                    .variations
                    .into_iter()
                    .filter_map(|v| v.item_variation_data)
                    .map(|v| {
                        let price = v.price_money.and_then(|m| m.amount).unwrap_or(0).max(0);
                        let barcode = v
                            .upc
                            .filter(|s| !s.is_empty())
                            .or(v.sku)
                            .unwrap_or_default();
                        Variation::new(v.name.unwrap_or_default(), price as u64, barcode)
                    })
                    .collect();
                let mut item = CatalogItem::new(data.name.unwrap_or_default(), variations);
                item.id = object.id;
                Some(item)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_environment_parse() {
        assert_eq!(SquareEnvironment::parse("production"), SquareEnvironment::Production);
        assert_eq!(SquareEnvironment::parse("PRODUCTION"), SquareEnvironment::Production);
        assert_eq!(SquareEnvironment::parse("sandbox"), SquareEnvironment::Sandbox);
        assert_eq!(SquareEnvironment::parse(""), SquareEnvironment::Sandbox);
    }

    #[test]
    fn test_maps_search_response() {
        let body = r#"{
            "items": [{
                "type": "ITEM",
                "id": "ITEM1",
                "item_data": {
                    "name": "Milk",
                    "description": "Fresh",
                    "variations": [
                        {"id": "V1", "item_variation_data": {
                            "name": "1L", "upc": "0123456789012",
                            "price_money": {"amount": 250, "currency": "USD"}}},
                        {"id": "V2", "item_variation_data": {
                            "name": "2L", "sku": "MILK-2L"}}
                    ]
                }
            }],
            "cursor": ""
        }"#;
        let parsed: SearchItemsResponse = serde_json::from_str(body).unwrap();
        let items = parsed.into_items();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_deref(), Some("ITEM1"));
        assert_eq!(items[0].name, "Milk");
        assert_eq!(
            items[0].variations,
            vec![
                Variation::new("1L", 250, "0123456789012"),
                Variation::new("2L", 0, "MILK-2L"),
            ]
        );
    }

    #[test]
    fn test_empty_response_has_no_items() {
        let parsed: SearchItemsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.into_items().is_empty());
    }
}
