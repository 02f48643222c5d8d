//! # Rendering Module
//!
//! Turns a [`LabelSheet`](crate::layout::LabelSheet) into something a
//! printer can take.
//!
//! ## Modules
//!
//! - [`barcode`]: EAN-13 / Code 128 encoding to inline SVG
//! - [`sheet`]: HTML page with the 4 × 8 label grid
//!
//! Printing itself goes through the browser's print dialog.

pub mod barcode;
pub mod sheet;

pub use sheet::render_html;
