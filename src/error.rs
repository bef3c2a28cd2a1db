//! Error type for icon composition and font loading.

use thiserror::Error;

/// Errors produced while composing markup or loading the caption font.
#[derive(Debug, Error)]
pub enum IconError {
    /// Settings could not be serialized or parsed.
    #[error("invalid icon settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Markup could not be read.
    #[error("malformed markup: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Markup could not be written.
    #[error("failed to write markup: {0}")]
    Io(#[from] std::io::Error),

    /// The font source failed before any bytes were returned.
    #[error("failed to fetch font from {location}")]
    FontFetch {
        location: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The font server answered with a non-success status.
    #[error("font request to {url} failed with status {status}")]
    FontStatus { url: String, status: u16 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IconError>;
