//! # Label Queue
//!
//! The batch of catalog items staged for printing, bounded by the number of
//! labels on one sheet.
//!
//! ## Capacity
//!
//! Each variation prints as one label, so an item occupies
//! `item.variations.len()` slots. The queue never holds more than
//! [`CAPACITY`] labels; every insert path re-checks this.
//!
//! ## Identity
//!
//! Items are matched by `name`. Duplicates by name only enter through
//! [`LabelQueue::insert`] (the scan path's "add again").
//!
//! The queue does not know about display overrides. Removal methods return
//! what they removed so the owning session can drop the matching overrides.

use serde::Serialize;

use crate::catalog::CatalogItem;
use crate::error::ShelfError;

/// Labels per printed sheet.
pub const CAPACITY: usize = 32;

/// Result of [`LabelQueue::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Appended; carries the number of labels added.
    Added { labels: usize },
    /// An item with the same name was present and has been removed.
    Removed(CatalogItem),
    /// Appending would exceed [`CAPACITY`]; the queue is unchanged.
    Rejected { requested: usize, remaining: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelQueue {
    items: Vec<CatalogItem>,
}

impl LabelQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total labels across all queued items.
    pub fn label_count(&self) -> usize {
        self.items.iter().map(CatalogItem::label_count).sum()
    }

    /// Free label slots.
    pub fn remaining(&self) -> usize {
        CAPACITY.saturating_sub(self.label_count())
    }

    /// Whether `item` would fit without exceeding capacity.
    pub fn fits(&self, item: &CatalogItem) -> bool {
        item.label_count() <= self.remaining()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    /// Remove the item if one with the same name is queued, otherwise append it
    /// when it fits.
    pub fn toggle(&mut self, item: CatalogItem) -> ToggleOutcome {
        if let Some(removed) = self.remove(&item.name) {
            return ToggleOutcome::Removed(removed);
        }
        let requested = item.label_count();
        match self.insert(item) {
            Ok(labels) => ToggleOutcome::Added { labels },
            Err(_) => ToggleOutcome::Rejected {
                requested,
                remaining: self.remaining(),
            },
        }
    }

    /// Append without the duplicate check. Returns the number of labels added.
    pub fn insert(&mut self, item: CatalogItem) -> Result<usize, ShelfError> {
        let requested = item.label_count();
        let remaining = self.remaining();
        if requested > remaining {
            return Err(ShelfError::CapacityExceeded {
                requested,
                remaining,
            });
        }
        self.items.push(item);
        Ok(requested)
    }

    /// Remove the first item with this name.
    pub fn remove(&mut self, name: &str) -> Option<CatalogItem> {
        let index = self.items.iter().position(|item| item.name == name)?;
        Some(self.items.remove(index))
    }

    /// Empty the queue, returning everything that was in it.
    pub fn clear(&mut self) -> Vec<CatalogItem> {
        std::mem::take(&mut self.items)
    }
}
