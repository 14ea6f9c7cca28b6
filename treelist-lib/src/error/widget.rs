//! Widget error types

/// Errors raised when a widget descriptor cannot be serialized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The widget was never given a name.
    #[error("Widget name is required")]
    MissingName,

    /// The widget name cannot be used as an element id.
    #[error("Invalid widget name '{name}': names cannot contain whitespace")]
    InvalidName { name: String },
}

impl WidgetError {
    /// Creates a new invalid name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }
}
