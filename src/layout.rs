//! # Print Layout
//!
//! Flattens the queue into the fixed label grid.
//!
//! ## Grid
//!
//! ```text
//! ┌──────┬──────┬──────┬──────┐
//! │  0   │  1   │  2   │  3   │   4 columns × 8 rows = 32 slots
//! ├──────┼──────┼──────┼──────┤
//! │  4   │  5   │ ...  │      │   filled labels first, in queue order,
//! ├──────┼──────┼──────┼──────┤   then blank filler up to 32
//! ```
//!
//! One filled label per variation, item order then variation order.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogItem;
use crate::overrides::NameOverrideStore;
use crate::queue::CAPACITY;

/// Labels per row on the printed sheet.
pub const COLUMNS: usize = 4;

/// Rows per printed sheet.
pub const ROWS: usize = CAPACITY / COLUMNS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("{count} labels do not fit on a {capacity}-slot sheet")]
    Overflow { count: usize, capacity: usize },
}

/// One slot on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrintLabel {
    Filled {
        display_name: String,
        price_cents: u64,
        barcode: String,
    },
    Blank,
}

impl PrintLabel {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Formatted price, `None` for blank slots.
    pub fn price(&self) -> Option<String> {
        match self {
            Self::Filled { price_cents, .. } => Some(format_price(*price_cents)),
            Self::Blank => None,
        }
    }
}

/// Exactly [`CAPACITY`] slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSheet {
    slots: Vec<PrintLabel>,
}

impl LabelSheet {
    pub fn slots(&self) -> &[PrintLabel] {
        &self.slots
    }

    /// Number of filled slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_blank()).count()
    }

    /// Slots grouped into printed rows of [`COLUMNS`].
    pub fn rows(&self) -> impl Iterator<Item = &[PrintLabel]> {
        self.slots.chunks(COLUMNS)
    }
}

/// Lay out `items` with their display overrides.
///
/// Fails instead of truncating when the items hold more than [`CAPACITY`]
/// labels; the queue never lets that happen.
pub fn build(items: &[CatalogItem], overrides: &NameOverrideStore) -> Result<LabelSheet, LayoutError> {
    let count: usize = items.iter().map(CatalogItem::label_count).sum();
    if count > CAPACITY {
        return Err(LayoutError::Overflow {
            count,
            capacity: CAPACITY,
        });
    }

    let mut slots = Vec::with_capacity(CAPACITY);
    for item in items {
        let display_name = overrides.display_name(&item.name);
        for variation in &item.variations {
            slots.push(PrintLabel::Filled {
                display_name: display_name.to_string(),
                price_cents: variation.price_cents,
                barcode: variation.barcode.clone(),
            });
        }
    }
    slots.resize(CAPACITY, PrintLabel::Blank);

    Ok(LabelSheet { slots })
}

/// Render cents as a decimal amount with two places: `250` → `"2.50"`.
pub fn format_price(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
