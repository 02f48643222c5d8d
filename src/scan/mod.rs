//! # Scan Ingestor
//!
//! Scan mode treats the text box as a barcode stream. Hardware scanners type
//! the code as keystrokes, so the input is classified by shape alone:
//!
//! ```text
//!            set_enabled(true)            submitted entry is a barcode
//!   Idle  ───────────────────▶  Armed  ─────────────────────────────▶  Lookup
//!         ◀───────────────────         ◀─────────────────────────────
//!            set_enabled(false)            every pending lookup resolved
//! ```
//!
//! A barcode is at least [`MIN_BARCODE_LEN`] ASCII digits. This is a
//! heuristic, not a checksum validator. Only a completed entry is classified;
//! keystrokes before the terminating Enter just fill the buffer.
//!
//! Input is not locked during a lookup. A second scan before the first
//! resolves starts a second lookup; both apply their result independently.

mod cue;
mod feedback;

pub use cue::{AudioCue, Tone};
pub use feedback::{Feedback, FeedbackBanner, Severity};

use serde::Serialize;

use crate::catalog::{CatalogItem, GatewayError};
use crate::queue::LabelQueue;

/// Shortest input treated as a barcode.
pub const MIN_BARCODE_LEN: usize = 8;

pub const MSG_NOT_FOUND: &str = "item not found";
pub const MSG_QUEUE_FULL: &str = "queue full";
pub const MSG_SEARCH_FAILED: &str = "search failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanState {
    Idle,
    Armed,
    Lookup,
}

/// Does `input` have the shape of a scanned barcode?
pub fn is_barcode(input: &str) -> bool {
    input.len() >= MIN_BARCODE_LEN && input.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Default)]
pub struct ScanIngestor {
    enabled: bool,
    buffer: String,
    in_flight: usize,
}

impl ScanIngestor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScanState {
        match (self.enabled, self.in_flight) {
            (false, _) => ScanState::Idle,
            (true, 0) => ScanState::Armed,
            (true, _) => ScanState::Lookup,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current contents of the scan input field.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Lookups issued and not yet resolved.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Switch scan mode. Returns `true` when this call armed the ingestor.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let armed = enabled && !self.enabled;
        self.enabled = enabled;
        if !enabled {
            self.buffer.clear();
        }
        armed
    }

    /// Record the current text of the input field. Never starts a lookup:
    /// a scanner types one digit at a time, so partial codes stay here.
    pub fn input(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    /// The entry is complete (scanners terminate it with Enter).
    ///
    /// Consumes the buffer. When armed and the submitted text (minus
    /// surrounding whitespace) is a barcode, returns the code to look up and
    /// counts the lookup as in flight.
    pub fn submit(&mut self, text: &str) -> Option<String> {
        self.buffer.clear();
        if !self.enabled {
            return None;
        }
        let code = text.trim();
        if !is_barcode(code) {
            return None;
        }
        self.in_flight += 1;
        Some(code.to_string())
    }

    /// A lookup finished. The buffer may already hold the next scan.
    pub fn resolve(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

/// What a finished scan lookup means for the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanVerdict {
    /// The gateway returned nothing.
    NotFound,
    /// Insert the first result. `again` is set when the name is already queued.
    Add { item: CatalogItem, again: bool },
    /// The first result does not fit.
    QueueFull { item: CatalogItem },
    /// The gateway call failed.
    Failed,
}

impl ScanVerdict {
    /// First match wins; there is no disambiguation in scan mode.
    pub fn judge(queue: &LabelQueue, result: Result<Vec<CatalogItem>, &GatewayError>) -> Self {
        let items = match result {
            Ok(items) => items,
            Err(_) => return Self::Failed,
        };
        let Some(item) = items.into_iter().next() else {
            return Self::NotFound;
        };
        if !queue.fits(&item) {
            return Self::QueueFull { item };
        }
        let again = queue.contains(&item.name);
        Self::Add { item, again }
    }
}

/// Success banner text for an accepted scan.
pub fn added_message(item: &CatalogItem, again: bool) -> String {
    let labels = item.label_count();
    let plural = if labels == 1 { "label" } else { "labels" };
    if again {
        format!("{} added again ({} {})", item.name, labels, plural)
    } else {
        format!("{} added ({} {})", item.name, labels, plural)
    }
}
