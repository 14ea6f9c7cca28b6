//! Error types

mod url;
mod widget;

pub use self::url::*;
pub use widget::*;

/// Top-level error for everything that can fail in this crate.
///
/// Builders never fail; errors only surface when constructing a URL
/// generator or serializing a configured widget.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The widget itself is not in a serializable state.
    #[error(transparent)]
    Widget(#[from] WidgetError),

    /// URL generation could not be set up.
    #[error(transparent)]
    Url(#[from] UrlError),

    /// Failed to convert settings or bound data to JSON.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
