//! Serializer configuration

use crate::data_source::HttpMethod;

/// Controls how a configured widget is turned into its initialization payload.
///
/// # Example
///
/// ```
/// use treelist_lib::{HttpMethod, SerializerConfig};
///
/// let config = SerializerConfig::default()
///     .with_pretty(true)
///     .with_default_method(HttpMethod::Get);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SerializerConfig {
    /// Value of the data source `type` key.
    ///
    /// Default: `aspnetmvc-ajax`
    pub data_source_type: String,

    /// Pretty-print JSON text output.
    ///
    /// Default: `false`
    pub pretty: bool,

    /// HTTP method for transport operations that don't set one.
    ///
    /// Default: `POST`
    pub default_method: HttpMethod,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            data_source_type: "aspnetmvc-ajax".to_string(),
            pretty: false,
            default_method: HttpMethod::Post,
        }
    }
}

impl SerializerConfig {
    /// Creates a new serializer config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data source type.
    pub fn with_data_source_type(mut self, data_source_type: impl Into<String>) -> Self {
        self.data_source_type = data_source_type.into();
        self
    }

    /// Enables or disables pretty-printed output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the fallback HTTP method for transport operations.
    pub fn with_default_method(mut self, method: HttpMethod) -> Self {
        self.default_method = method;
        self
    }
}
