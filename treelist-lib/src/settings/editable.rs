//! Editing settings.

use serde::Serialize;

/// Where edited rows are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Edit the whole row in place.
    Inline,
    /// Edit in a popup window.
    Popup,
    /// Edit one cell at a time.
    InCell,
}

/// Editing options of a tree list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableSettings {
    #[serde(skip)]
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<EditMode>,
    /// Allow reparenting rows with drag and drop.
    #[serde(rename = "move", skip_serializing_if = "Option::is_none")]
    pub move_rows: Option<bool>,
    /// Client template of the popup editor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Configures [`EditableSettings`].
pub struct EditableSettingsBuilder<'a> {
    settings: &'a mut EditableSettings,
}

impl<'a> EditableSettingsBuilder<'a> {
    pub(crate) fn new(settings: &'a mut EditableSettings) -> Self {
        Self { settings }
    }

    /// Enables or disables editing.
    pub fn enabled(&mut self, enabled: bool) -> &mut Self {
        self.settings.enabled = enabled;
        self
    }

    pub fn mode(&mut self, mode: EditMode) -> &mut Self {
        self.settings.mode = Some(mode);
        self
    }

    /// Enables drag-and-drop reparenting.
    pub fn move_rows(&mut self, enabled: bool) -> &mut Self {
        self.settings.move_rows = Some(enabled);
        self
    }

    pub fn template(&mut self, template: impl Into<String>) -> &mut Self {
        self.settings.template = Some(template.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_mode_names() {
        assert_eq!(serde_json::to_value(EditMode::InCell).unwrap(), json!("incell"));
        assert_eq!(serde_json::to_value(EditMode::Popup).unwrap(), json!("popup"));
    }

    #[test]
    fn test_move_key() {
        let mut settings = EditableSettings::default();
        EditableSettingsBuilder::new(&mut settings).move_rows(true);
        assert_eq!(serde_json::to_value(&settings).unwrap(), json!({ "move": true }));
    }
}
