//! Sorting settings.

use serde::Serialize;

/// How many columns can be sorted at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Sorting a column clears the sort of every other column.
    Single,
    /// Sort descriptors accumulate across columns.
    Multiple,
}

/// Sorting options of a tree list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortableSettings {
    #[serde(skip)]
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SortMode>,
    /// Allow a third click to remove the sort.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_unsort: Option<bool>,
}

/// Configures [`SortableSettings`].
pub struct SortableSettingsBuilder<'a> {
    settings: &'a mut SortableSettings,
}

impl<'a> SortableSettingsBuilder<'a> {
    pub(crate) fn new(settings: &'a mut SortableSettings) -> Self {
        Self { settings }
    }

    /// Enables or disables sorting.
    pub fn enabled(&mut self, enabled: bool) -> &mut Self {
        self.settings.enabled = enabled;
        self
    }

    /// Sets the sort mode.
    pub fn mode(&mut self, mode: SortMode) -> &mut Self {
        self.settings.mode = Some(mode);
        self
    }

    pub fn allow_unsort(&mut self, allow: bool) -> &mut Self {
        self.settings.allow_unsort = Some(allow);
        self
    }
}
