//! Filter menu settings.

use serde::Serialize;

/// Filter menu options of a tree list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterableSettings {
    #[serde(skip)]
    pub enabled: bool,
    /// Show a second filter expression in the menu.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<FilterableMessages>,
}

/// Localized texts of the filter menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterableMessages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub and: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub or: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_true: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_false: Option<String>,
}

/// Configures [`FilterableSettings`].
pub struct FilterableSettingsBuilder<'a> {
    settings: &'a mut FilterableSettings,
}

impl<'a> FilterableSettingsBuilder<'a> {
    pub(crate) fn new(settings: &'a mut FilterableSettings) -> Self {
        Self { settings }
    }

    /// Enables or disables filtering.
    pub fn enabled(&mut self, enabled: bool) -> &mut Self {
        self.settings.enabled = enabled;
        self
    }

    /// Shows or hides the second filter expression.
    pub fn extra(&mut self, extra: bool) -> &mut Self {
        self.settings.extra = Some(extra);
        self
    }

    /// Configures the filter menu texts.
    pub fn messages<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut FilterableMessagesBuilder<'_>),
    {
        let messages = self.settings.messages.get_or_insert_with(Default::default);
        configure(&mut FilterableMessagesBuilder { messages });
        self
    }
}

/// Configures [`FilterableMessages`].
pub struct FilterableMessagesBuilder<'a> {
    messages: &'a mut FilterableMessages,
}

impl FilterableMessagesBuilder<'_> {
    pub fn and(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.and = Some(text.into());
        self
    }

    pub fn or(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.or = Some(text.into());
        self
    }

    pub fn filter(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.filter = Some(text.into());
        self
    }

    pub fn clear(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.clear = Some(text.into());
        self
    }

    /// Text shown above the filter expressions.
    pub fn info(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.info = Some(text.into());
        self
    }

    pub fn is_true(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.is_true = Some(text.into());
        self
    }

    pub fn is_false(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.is_false = Some(text.into());
        self
    }
}
