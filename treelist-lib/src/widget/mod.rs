//! The tree list widget descriptor.

mod builder;
mod serialize;

pub use builder::*;

use std::fmt;
use std::sync::Arc;

use crate::context::ViewContext;
use crate::data_source::DataSource;
use crate::routing::UrlGenerator;
use crate::settings::Column;
use crate::settings::EditableSettings;
use crate::settings::Events;
use crate::settings::FilterableSettings;
use crate::settings::SortableSettings;
use crate::settings::ToolbarCommand;

/// Server-side descriptor of one hierarchical data grid.
///
/// Owns every setting of the widget exclusively. Configure it through
/// [`TreeList::builder`], then serialize it with [`TreeList::to_json`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use treelist_lib::{RelativeUrlGenerator, TreeList, ViewContext};
///
/// #[derive(serde::Serialize)]
/// struct Employee {
///     id: u32,
///     reports_to: Option<u32>,
///     name: String,
/// }
///
/// let mut tree_list: TreeList<Employee> = TreeList::new(
///     "employees",
///     ViewContext::new("Employees", "Index"),
///     Arc::new(RelativeUrlGenerator),
/// );
///
/// tree_list
///     .builder()
///     .height(540.0)
///     .columns(|c| {
///         c.bound("name").expandable(true);
///     })
///     .data_source(|ds| {
///         ds.read(|r| {
///             r.action("All", "Employees");
///         });
///     });
///
/// let payload = tree_list.to_json().unwrap();
/// assert_eq!(payload["height"], 540.0);
/// ```
pub struct TreeList<T> {
    pub(crate) name: String,
    pub(crate) auto_bind: Option<bool>,
    pub(crate) scrollable: Option<bool>,
    pub(crate) selectable: Option<bool>,
    pub(crate) height: Option<f64>,
    pub(crate) columns: Vec<Column>,
    pub(crate) sortable: Option<SortableSettings>,
    pub(crate) filterable: Option<FilterableSettings>,
    pub(crate) editable: Option<EditableSettings>,
    pub(crate) toolbar: Vec<ToolbarCommand>,
    pub(crate) data_source: DataSource<T>,
    pub(crate) events: Events,
    pub(crate) view_context: ViewContext,
    pub(crate) url_generator: Arc<dyn UrlGenerator>,
}

impl<T> TreeList<T> {
    /// Creates an unconfigured tree list.
    ///
    /// `name` becomes the id of the element the widget is initialized on.
    pub fn new(
        name: impl Into<String>,
        view_context: ViewContext,
        url_generator: Arc<dyn UrlGenerator>,
    ) -> Self {
        Self {
            name: name.into(),
            auto_bind: None,
            scrollable: None,
            selectable: None,
            height: None,
            columns: Vec::new(),
            sortable: None,
            filterable: None,
            editable: None,
            toolbar: Vec::new(),
            data_source: DataSource::default(),
            events: Events::new(),
            view_context,
            url_generator,
        }
    }

    /// Returns a fluent builder over this tree list.
    pub fn builder(&mut self) -> TreeListBuilder<'_, T> {
        TreeListBuilder::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn auto_bind(&self) -> Option<bool> {
        self.auto_bind
    }

    pub fn scrollable(&self) -> Option<bool> {
        self.scrollable
    }

    pub fn selectable(&self) -> Option<bool> {
        self.selectable
    }

    /// Height in pixels.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn sortable(&self) -> Option<&SortableSettings> {
        self.sortable.as_ref()
    }

    pub fn filterable(&self) -> Option<&FilterableSettings> {
        self.filterable.as_ref()
    }

    pub fn editable(&self) -> Option<&EditableSettings> {
        self.editable.as_ref()
    }

    pub fn toolbar(&self) -> &[ToolbarCommand] {
        &self.toolbar
    }

    pub fn data_source(&self) -> &DataSource<T> {
        &self.data_source
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// The request this widget is rendered for.
    pub fn view_context(&self) -> &ViewContext {
        &self.view_context
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeList")
            .field("name", &self.name)
            .field("auto_bind", &self.auto_bind)
            .field("scrollable", &self.scrollable)
            .field("selectable", &self.selectable)
            .field("height", &self.height)
            .field("columns", &self.columns)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("editable", &self.editable)
            .field("toolbar", &self.toolbar)
            .field("data_source", &self.data_source)
            .field("events", &self.events)
            .field("view_context", &self.view_context)
            .finish_non_exhaustive()
    }
}
