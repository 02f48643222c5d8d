//! In-memory catalog.

use async_trait::async_trait;
use std::path::Path;

use super::{CatalogGateway, CatalogItem, GatewayError};

/// A fixed catalog answering searches locally.
///
/// A query that equals some variation's barcode returns the items carrying
/// that barcode; otherwise items whose name contains the query
/// (case-insensitive) are returned. An empty query returns everything.
#[derive(Debug, Clone, Default)]
pub struct StaticGateway {
    items: Vec<CatalogItem>,
}

impl StaticGateway {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Load a wire-shape JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GatewayError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            GatewayError::Unavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(Self::new(super::parse_items(&json)?))
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    fn matches(&self, query: &str) -> Vec<CatalogItem> {
        let query = query.trim();
        if query.is_empty() {
            return self.items.clone();
        }

        let by_barcode: Vec<CatalogItem> = self
            .items
            .iter()
            .filter(|item| item.variations.iter().any(|v| v.barcode == query))
            .cloned()
            .collect();
        if !by_barcode.is_empty() {
            return by_barcode;
        }

        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CatalogGateway for StaticGateway {
    async fn search(&self, query: &str) -> Result<Vec<CatalogItem>, GatewayError> {
        Ok(self.matches(query))
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variation;

    fn catalog() -> StaticGateway {
        StaticGateway::new(vec![
            CatalogItem::new("Whole Milk", vec![Variation::new("1L", 250, "11112222")]),
            CatalogItem::new("Oat Milk", vec![Variation::new("1L", 399, "33334444")]),
            CatalogItem::new("Bread", vec![Variation::new("Loaf", 300, "55556666")]),
        ])
    }

    #[test]
    fn test_name_search_is_case_insensitive() {
        let found = catalog().matches("MILK");
        let names: Vec<_> = found.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Whole Milk", "Oat Milk"]);
    }

    #[test]
    fn test_barcode_search_is_exact() {
        let found = catalog().matches("33334444");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Oat Milk");
        assert!(catalog().matches("3333444").is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(catalog().matches("  ").len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = StaticGateway::load("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, GatewayError::Unavailable(_)));
    }
}
