//! Client-side event bindings.

use std::collections::BTreeMap;

use serde::Serialize;

/// Client handlers keyed by event name.
///
/// Handlers are names of JavaScript functions defined on the page. Binding an
/// event twice keeps the last handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Events {
    handlers: BTreeMap<&'static str, String>,
}

impl Events {
    /// Creates an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bind(&mut self, event: &'static str, handler: impl Into<String>) {
        self.handlers.insert(event, handler.into());
    }

    /// Returns the handler bound to `event`.
    pub fn handler(&self, event: &str) -> Option<&str> {
        self.handlers.get(event).map(String::as_str)
    }

    /// Number of bound events.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Binds client handlers to tree list events.
///
/// # Example
///
/// ```ignore
/// builder.events(|events| {
///     events.data_bound("onDataBound").expand("onExpand");
/// });
/// ```
pub struct EventBuilder<'a> {
    events: &'a mut Events,
}

impl<'a> EventBuilder<'a> {
    pub(crate) fn new(events: &'a mut Events) -> Self {
        Self { events }
    }

    /// Fired when the user cancels editing.
    pub fn cancel(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("cancel", handler);
        self
    }

    /// Fired when the selection changes.
    pub fn change(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("change", handler);
        self
    }

    /// Fired before a row is collapsed.
    pub fn collapse(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("collapse", handler);
        self
    }

    /// Fired before the widget binds to its data source.
    pub fn data_binding(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("dataBinding", handler);
        self
    }

    /// Fired after the widget is bound to its data source.
    pub fn data_bound(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("dataBound", handler);
        self
    }

    /// Fired when a row enters edit mode.
    pub fn edit(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("edit", handler);
        self
    }

    pub fn excel_export(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("excelExport", handler);
        self
    }

    /// Fired before a row is expanded.
    pub fn expand(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("expand", handler);
        self
    }

    pub fn filter_menu_init(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("filterMenuInit", handler);
        self
    }

    pub fn pdf_export(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("pdfExport", handler);
        self
    }

    /// Fired before a row is removed.
    pub fn remove(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("remove", handler);
        self
    }

    /// Fired before an edited row is saved.
    pub fn save(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("save", handler);
        self
    }

    /// Fired before pending batch changes are saved.
    pub fn save_changes(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("saveChanges", handler);
        self
    }

    pub fn column_show(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("columnShow", handler);
        self
    }

    pub fn column_hide(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("columnHide", handler);
        self
    }

    pub fn column_reorder(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("columnReorder", handler);
        self
    }

    pub fn column_resize(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("columnResize", handler);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_rebinding_replaces_handler() {
        let mut events = Events::new();
        EventBuilder::new(&mut events)
            .data_bound("first")
            .data_bound("second");

        assert_eq!(events.len(), 1);
        assert_eq!(events.handler("dataBound"), Some("second"));
    }

    #[test]
    fn test_event_names() {
        let mut events = Events::new();
        EventBuilder::new(&mut events)
            .save_changes("onSaveChanges")
            .filter_menu_init("onFilterMenuInit");

        assert_eq!(
            serde_json::to_value(&events).unwrap(),
            json!({ "filterMenuInit": "onFilterMenuInit", "saveChanges": "onSaveChanges" })
        );
    }
}
