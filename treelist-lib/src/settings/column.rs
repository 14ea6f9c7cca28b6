//! Column settings and the column factory.

use std::collections::BTreeMap;

use serde::Serialize;

/// Configuration of one tree list column.
///
/// Every option is optional; unset options are left to the client library's
/// defaults and are omitted from the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Data item field the column is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Header text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Display format, e.g. `{0:c}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Client template for the cell content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// HTML-encode the cell value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded: Option<bool>,
    /// Render the expand/collapse arrows in this column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expandable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filterable: Option<bool>,
    /// Hide the column below this viewport width, in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_screen_width: Option<u32>,
    /// HTML attributes of the cells.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// HTML attributes of the header cell.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub header_attributes: BTreeMap<String, String>,
    /// Command buttons rendered in the column.
    #[serde(rename = "command", skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<ColumnCommand>,
}

/// A command button rendered inside a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnCommand {
    /// Built-in command name (`edit`, `destroy`, `createchild`) or a custom one.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Client handler invoked on click.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click: Option<String>,
}

impl ColumnCommand {
    /// Creates a command with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            class_name: None,
            click: None,
        }
    }
}

/// Appends columns to a tree list.
///
/// # Example
///
/// ```ignore
/// tree_list.builder().columns(|columns| {
///     columns.bound("FirstName").title("First name").expandable(true);
///     columns.bound("Position");
///     columns.add().command(|c| {
///         c.edit();
///         c.destroy();
///     });
/// });
/// ```
pub struct ColumnFactory<'a> {
    columns: &'a mut Vec<Column>,
}

impl<'a> ColumnFactory<'a> {
    pub(crate) fn new(columns: &'a mut Vec<Column>) -> Self {
        Self { columns }
    }

    /// Appends an empty column and returns a builder for it.
    pub fn add(&mut self) -> ColumnBuilder<'_> {
        let index = self.columns.len();
        self.columns.push(Column::default());
        ColumnBuilder::new(&mut self.columns[index])
    }

    /// Appends a column bound to `field`.
    pub fn bound(&mut self, field: impl Into<String>) -> ColumnBuilder<'_> {
        let mut builder = self.add();
        builder.field(field);
        builder
    }
}

/// Configures one column.
pub struct ColumnBuilder<'a> {
    column: &'a mut Column,
}

impl<'a> ColumnBuilder<'a> {
    pub(crate) fn new(column: &'a mut Column) -> Self {
        Self { column }
    }

    /// Sets the bound field.
    pub fn field(&mut self, field: impl Into<String>) -> &mut Self {
        self.column.field = Some(field.into());
        self
    }

    /// Sets the header text.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.column.title = Some(title.into());
        self
    }

    /// Sets the width in pixels.
    pub fn width(&mut self, width: f64) -> &mut Self {
        self.column.width = Some(width);
        self
    }

    /// Sets the display format.
    pub fn format(&mut self, format: impl Into<String>) -> &mut Self {
        self.column.format = Some(format.into());
        self
    }

    /// Sets the cell template.
    pub fn template(&mut self, template: impl Into<String>) -> &mut Self {
        self.column.template = Some(template.into());
        self
    }

    pub fn header_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.column.header_template = Some(template.into());
        self
    }

    pub fn footer_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.column.footer_template = Some(template.into());
        self
    }

    pub fn hidden(&mut self, hidden: bool) -> &mut Self {
        self.column.hidden = Some(hidden);
        self
    }

    pub fn encoded(&mut self, encoded: bool) -> &mut Self {
        self.column.encoded = Some(encoded);
        self
    }

    /// Shows the expand arrows of hierarchical rows in this column.
    pub fn expandable(&mut self, expandable: bool) -> &mut Self {
        self.column.expandable = Some(expandable);
        self
    }

    pub fn sortable(&mut self, sortable: bool) -> &mut Self {
        self.column.sortable = Some(sortable);
        self
    }

    pub fn filterable(&mut self, filterable: bool) -> &mut Self {
        self.column.filterable = Some(filterable);
        self
    }

    /// Hides the column on viewports narrower than `width` pixels.
    pub fn min_screen_width(&mut self, width: u32) -> &mut Self {
        self.column.min_screen_width = Some(width);
        self
    }

    /// Adds HTML attributes to the column cells.
    pub fn attributes<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.column
            .attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Adds HTML attributes to the header cell.
    pub fn header_attributes<K, V>(
        &mut self,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.column
            .header_attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Configures the command buttons of this column.
    pub fn command<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ColumnCommandFactory<'_>),
    {
        configure(&mut ColumnCommandFactory::new(&mut self.column.commands));
        self
    }
}

/// Appends command buttons to a column.
pub struct ColumnCommandFactory<'a> {
    commands: &'a mut Vec<ColumnCommand>,
}

impl<'a> ColumnCommandFactory<'a> {
    fn new(commands: &'a mut Vec<ColumnCommand>) -> Self {
        Self { commands }
    }

    /// Puts the row in edit mode.
    pub fn edit(&mut self) -> CommandBuilder<'_> {
        self.custom("edit")
    }

    /// Removes the row.
    pub fn destroy(&mut self) -> CommandBuilder<'_> {
        self.custom("destroy")
    }

    /// Adds a child row below this one.
    pub fn create_child(&mut self) -> CommandBuilder<'_> {
        self.custom("createchild")
    }

    /// Adds a command with a custom name.
    pub fn custom(&mut self, name: impl Into<String>) -> CommandBuilder<'_> {
        let index = self.commands.len();
        self.commands.push(ColumnCommand::new(name));
        CommandBuilder {
            command: &mut self.commands[index],
        }
    }
}

/// Configures one column command.
pub struct CommandBuilder<'a> {
    command: &'a mut ColumnCommand,
}

impl CommandBuilder<'_> {
    /// Sets the button text.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.command.text = Some(text.into());
        self
    }

    /// Sets the CSS class of the button.
    pub fn class_name(&mut self, class_name: impl Into<String>) -> &mut Self {
        self.command.class_name = Some(class_name.into());
        self
    }

    /// Sets the client click handler.
    pub fn click(&mut self, handler: impl Into<String>) -> &mut Self {
        self.command.click = Some(handler.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_bound_column() {
        let mut columns = Vec::new();
        ColumnFactory::new(&mut columns)
            .bound("Name")
            .title("Full name")
            .width(200.0);

        assert_eq!(columns.len(), 1);
        assert_eq!(
            serde_json::to_value(&columns[0]).unwrap(),
            json!({ "field": "Name", "title": "Full name", "width": 200.0 })
        );
    }

    #[test]
    fn test_command_column() {
        let mut columns = Vec::new();
        ColumnFactory::new(&mut columns).add().command(|c| {
            c.edit();
            c.create_child().text("Add");
            c.custom("details").click("showDetails").class_name("k-primary");
        });

        assert_eq!(
            serde_json::to_value(&columns[0]).unwrap(),
            json!({
                "command": [
                    { "name": "edit" },
                    { "name": "createchild", "text": "Add" },
                    { "name": "details", "className": "k-primary", "click": "showDetails" }
                ]
            })
        );
    }

    #[test]
    fn test_attributes_merge() {
        let mut columns = Vec::new();
        ColumnFactory::new(&mut columns)
            .add()
            .attributes([("class", "a")])
            .attributes([("class", "b"), ("style", "x")]);

        assert_eq!(columns[0].attributes.get("class").map(String::as_str), Some("b"));
        assert_eq!(columns[0].attributes.len(), 2);
    }
}
