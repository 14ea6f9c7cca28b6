//! URL generation error types

/// Errors that can occur while setting up URL generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    /// The base URL could not be parsed.
    #[error("Invalid base URL '{url}': {source}")]
    Parse {
        url: String,
        #[source]
        source: ::url::ParseError,
    },

    /// The base URL has no hierarchical path (e.g. `mailto:`).
    #[error("Base URL '{url}' cannot have path segments")]
    CannotBeBase { url: String },
}

impl UrlError {
    /// Creates a new parse error.
    pub fn parse(url: impl Into<String>, source: ::url::ParseError) -> Self {
        Self::Parse {
            url: url.into(),
            source,
        }
    }

    /// Creates a new cannot-be-a-base error.
    pub fn cannot_be_base(url: impl Into<String>) -> Self {
        Self::CannotBeBase { url: url.into() }
    }
}
