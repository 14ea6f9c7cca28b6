//! Toolbar commands.

use serde::Serialize;

/// A button in the tree list toolbar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarCommand {
    /// Built-in (`create`, `save`, `cancel`, `excel`, `pdf`) or custom name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Appends commands to the toolbar.
pub struct ToolbarFactory<'a> {
    commands: &'a mut Vec<ToolbarCommand>,
}

impl<'a> ToolbarFactory<'a> {
    pub(crate) fn new(commands: &'a mut Vec<ToolbarCommand>) -> Self {
        Self { commands }
    }

    /// Adds an empty root row.
    pub fn create(&mut self) -> ToolbarCommandBuilder<'_> {
        self.custom("create")
    }

    /// Saves pending changes in batch mode.
    pub fn save(&mut self) -> ToolbarCommandBuilder<'_> {
        self.custom("save")
    }

    /// Discards pending changes.
    pub fn cancel(&mut self) -> ToolbarCommandBuilder<'_> {
        self.custom("cancel")
    }

    /// Exports to MS Excel.
    pub fn excel(&mut self) -> ToolbarCommandBuilder<'_> {
        self.custom("excel")
    }

    /// Exports to PDF.
    pub fn pdf(&mut self) -> ToolbarCommandBuilder<'_> {
        self.custom("pdf")
    }

    pub fn custom(&mut self, name: impl Into<String>) -> ToolbarCommandBuilder<'_> {
        let index = self.commands.len();
        self.commands.push(ToolbarCommand {
            name: name.into(),
            text: None,
            class_name: None,
        });
        ToolbarCommandBuilder {
            command: &mut self.commands[index],
        }
    }
}

/// Configures one toolbar command.
pub struct ToolbarCommandBuilder<'a> {
    command: &'a mut ToolbarCommand,
}

impl ToolbarCommandBuilder<'_> {
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.command.text = Some(text.into());
        self
    }

    pub fn class_name(&mut self, class_name: impl Into<String>) -> &mut Self {
        self.command.class_name = Some(class_name.into());
        self
    }
}
