//! # Error Types
//!
//! This module defines error types used throughout the shelfrig library.
//!
//! Module-local errors ([`GatewayError`], [`LayoutError`]) convert into
//! [`ShelfError`] so callers can propagate with `?`.

use thiserror::Error;

pub use crate::catalog::GatewayError;
pub use crate::layout::LayoutError;

/// Main error type for shelfrig operations
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Catalog gateway failure (network, HTTP status, malformed body)
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// A lookup returned zero items
    #[error("Not found: {0}")]
    NotFound(String),

    /// Insertion would push the queue past its label capacity
    #[error("Capacity exceeded: {requested} labels requested, {remaining} remaining")]
    CapacityExceeded { requested: usize, remaining: usize },

    /// Print layout contract violation
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Missing or inconsistent configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server-level errors (bind, serve)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
