//! # Shelfrig - Shelf Label Queue Library
//!
//! Shelfrig lets a store clerk search a product catalog, stage up to one
//! sheet of shelf labels, rename items for display, and print the sheet.
//! It provides:
//!
//! - **Label queue**: capacity-bounded batch of catalog items (32 labels)
//! - **Scan mode**: barcode-shaped input auto-adds the first catalog match
//! - **Display overrides**: per-item names printed instead of the catalog name
//! - **Layout**: deterministic 4 × 8 grid with blank filler labels
//! - **Server**: HTTP API and UI, printing through the browser's dialog
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Instant;
//! use shelfrig::{
//!     catalog::{CatalogItem, Variation},
//!     layout::PrintLabel,
//!     session::{Command, LabelQueueSession},
//! };
//!
//! let mut session = LabelQueueSession::new();
//! let now = Instant::now();
//!
//! let milk = CatalogItem::new("Milk", vec![Variation::new("1L", 250, "123")]);
//! session.apply(Command::Toggle(milk), now);
//! session.apply(
//!     Command::SetOverride { name: "Milk".into(), text: "Whole Milk".into() },
//!     now,
//! );
//!
//! let sheet = session.layout()?;
//! assert_eq!(sheet.slots().len(), 32);
//! assert!(matches!(
//!     &sheet.slots()[0],
//!     PrintLabel::Filled { display_name, price_cents: 250, .. } if display_name == "Whole Milk"
//! ));
//!
//! # Ok::<(), shelfrig::error::ShelfError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Catalog data model and gateways |
//! | [`queue`] | Capacity-bounded label queue |
//! | [`overrides`] | Display-name overrides |
//! | [`scan`] | Barcode classifier, feedback banner, audio cues |
//! | [`layout`] | 32-slot print layout |
//! | [`session`] | Command-driven session tying it all together |
//! | [`render`] | HTML label sheet and barcodes |
//! | [`server`] | HTTP server |
//! | [`config`] | Gateway selection |
//! | [`error`] | Error types |

pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod overrides;
pub mod queue;
pub mod render;
pub mod scan;
pub mod server;
pub mod session;

// Re-exports for convenience
pub use error::ShelfError;
pub use queue::{CAPACITY, LabelQueue};
pub use session::LabelQueueSession;
