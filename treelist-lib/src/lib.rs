//! Server-side configuration of a hierarchical data grid ("tree list").
//!
//! A [`TreeList`] owns every option of one widget instance. Configure it with
//! the fluent [`TreeListBuilder`], whose closure-taking methods hand out
//! builders scoped to one settings area (columns, sorting, filtering,
//! editing, toolbar, data source, events). Once configured, the tree list
//! serializes into the JSON options object the client-side widget is
//! initialized with.

pub mod config;
pub mod context;
pub mod data_source;
pub mod error;
pub mod routing;
pub mod settings;
pub mod widget;

pub use config::SerializerConfig;
pub use context::RouteValues;
pub use context::ViewContext;
pub use data_source::HttpMethod;
pub use error::Error;
pub use routing::RelativeUrlGenerator;
pub use routing::RouteUrlGenerator;
pub use routing::UrlGenerator;
pub use widget::TreeList;
pub use widget::TreeListBuilder;
