//! Fluent configuration of a [`TreeList`].

use crate::data_source::AjaxDataSourceBuilder;
use crate::settings::ColumnFactory;
use crate::settings::EditableSettingsBuilder;
use crate::settings::EventBuilder;
use crate::settings::FilterableSettingsBuilder;
use crate::settings::SortableSettingsBuilder;
use crate::settings::ToolbarFactory;

use super::TreeList;

/// Fluent builder over a borrowed [`TreeList`].
///
/// Every method mutates the tree list in place and returns the same builder,
/// so calls can be chained. Methods taking a closure call it exactly once,
/// before returning, with a builder scoped to one settings area; that builder
/// is dropped when the closure returns.
///
/// No value is validated here. Out-of-range values (a negative height, say)
/// are passed through to the client library unchanged.
///
/// # Example
///
/// ```ignore
/// TreeListBuilder::new(&mut tree_list)
///     .auto_bind(false)
///     .sortable(|s| { s.mode(SortMode::Multiple); })
///     .toolbar(|t| { t.create().text("New employee"); })
///     .events(|e| { e.data_bound("onDataBound"); });
/// ```
pub struct TreeListBuilder<'a, T> {
    component: &'a mut TreeList<T>,
}

impl<'a, T> TreeListBuilder<'a, T> {
    /// Wraps `component` for configuration.
    pub fn new(component: &'a mut TreeList<T>) -> Self {
        Self { component }
    }

    /// Sets the widget name, i.e. the id of the element it is initialized on.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.component.name = name.into();
        self
    }

    /// Configures the columns.
    pub fn columns<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ColumnFactory<'_>),
    {
        configure(&mut ColumnFactory::new(&mut self.component.columns));
        self
    }

    /// If `false`, the widget does not bind to its data source on
    /// initialization.
    pub fn auto_bind(&mut self, value: bool) -> &mut Self {
        self.component.auto_bind = Some(value);
        self
    }

    /// Shows scrollbars when rows exceed the widget size.
    pub fn scrollable(&mut self, value: bool) -> &mut Self {
        self.component.scrollable = Some(value);
        self
    }

    /// Lets the user select rows.
    pub fn selectable(&mut self, value: bool) -> &mut Self {
        self.component.selectable = Some(value);
        self
    }

    /// Enables and configures sorting by column header.
    pub fn sortable<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut SortableSettingsBuilder<'_>),
    {
        let settings = self.component.sortable.get_or_insert_with(|| {
            log::trace!("[tree_list] allocating sortable settings");
            Default::default()
        });
        settings.enabled = true;
        configure(&mut SortableSettingsBuilder::new(settings));
        self
    }

    /// Configures the toolbar commands.
    pub fn toolbar<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ToolbarFactory<'_>),
    {
        configure(&mut ToolbarFactory::new(&mut self.component.toolbar));
        self
    }

    /// Sets the height in pixels.
    pub fn height(&mut self, value: f64) -> &mut Self {
        self.component.height = Some(value);
        self
    }

    /// Enables and configures the filter menu.
    pub fn filterable<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut FilterableSettingsBuilder<'_>),
    {
        let settings = self.component.filterable.get_or_insert_with(|| {
            log::trace!("[tree_list] allocating filterable settings");
            Default::default()
        });
        settings.enabled = true;
        configure(&mut FilterableSettingsBuilder::new(settings));
        self
    }

    /// Enables and configures editing.
    pub fn editable<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut EditableSettingsBuilder<'_>),
    {
        let settings = self.component.editable.get_or_insert_with(|| {
            log::trace!("[tree_list] allocating editable settings");
            Default::default()
        });
        settings.enabled = true;
        configure(&mut EditableSettingsBuilder::new(settings));
        self
    }

    /// Configures the data source.
    ///
    /// The data source builder also receives the view context and URL
    /// generator of the tree list, for resolving transport URLs.
    pub fn data_source<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut AjaxDataSourceBuilder<'_, T>),
    {
        let component = &mut *self.component;
        configure(&mut AjaxDataSourceBuilder::new(
            &mut component.data_source,
            &component.view_context,
            component.url_generator.as_ref(),
        ));
        self
    }

    /// Binds client-side event handlers.
    pub fn events<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut EventBuilder<'_>),
    {
        configure(&mut EventBuilder::new(&mut self.component.events));
        self
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Arc;

    use super::*;
    use crate::context::ViewContext;
    use crate::routing::RelativeUrlGenerator;

    fn tree_list() -> TreeList<()> {
        TreeList::new(
            "tree",
            ViewContext::new("Home", "Index"),
            Arc::new(RelativeUrlGenerator),
        )
    }

    #[test]
    fn test_chaining_returns_same_builder() {
        let mut list = tree_list();
        let mut builder = list.builder();

        let first = builder.auto_bind(true) as *const TreeListBuilder<'_, ()>;
        let second = builder.height(10.0).selectable(true) as *const TreeListBuilder<'_, ()>;
        let third = builder.columns(|_| {}) as *const TreeListBuilder<'_, ()>;

        assert_eq!(first, second);
        assert_eq!(second, third);
        assert!(std::ptr::eq(first, &builder));
    }

    #[test]
    fn test_closure_called_once_before_return() {
        let mut list = tree_list();
        let calls = Cell::new(0);
        // Each closure must run after the previous setter returned.
        let tick = |expected: u32| {
            assert_eq!(calls.get(), expected, "closure {} out of order", expected);
            calls.set(expected + 1);
        };

        list.builder()
            .columns(|_| tick(0))
            .sortable(|_| tick(1))
            .filterable(|_| tick(2))
            .editable(|_| tick(3))
            .toolbar(|_| tick(4))
            .data_source(|_| tick(5))
            .events(|_| tick(6));
        assert_eq!(calls.get(), 7);
    }

    #[test]
    fn test_delegation_enables_settings() {
        let mut list = tree_list();
        list.builder()
            .sortable(|_| {})
            .filterable(|f| {
                f.enabled(false);
            });

        assert!(list.sortable().unwrap().enabled);
        assert!(!list.filterable().unwrap().enabled);
        assert!(list.editable().is_none());
    }

    #[test]
    fn test_repeated_delegation_keeps_settings() {
        let mut list = tree_list();
        list.builder()
            .sortable(|s| {
                s.allow_unsort(true);
            })
            .sortable(|s| {
                s.mode(crate::settings::SortMode::Single);
            });

        let sortable = list.sortable().unwrap();
        assert_eq!(sortable.allow_unsort, Some(true));
        assert_eq!(sortable.mode, Some(crate::settings::SortMode::Single));
    }

    #[test]
    fn test_name_last_write_wins() {
        let mut list = tree_list();
        list.builder().name("a").name("b");
        assert_eq!(list.name(), "b");
    }
}
