//! Remote data source of a tree list.
//!
//! The data source describes where rows come from (the transport), how rows
//! relate to each other (the schema model) and the initial sort and filter.

mod builder;
mod model;
mod query;

pub use builder::*;
pub use model::*;
pub use query::*;

use crate::context::RouteValues;
use crate::settings::Events;

/// HTTP method of a transport operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One remote endpoint of the data source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrudOperation {
    /// Resolved endpoint URL.
    pub url: Option<String>,
    /// Route values the URL was resolved from, if it targets an action.
    pub route_values: RouteValues,
    pub method: Option<HttpMethod>,
    /// Client function returning extra request parameters.
    pub data: Option<String>,
}

/// The CRUD endpoints of the data source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transport {
    pub read: Option<CrudOperation>,
    pub create: Option<CrudOperation>,
    pub update: Option<CrudOperation>,
    pub destroy: Option<CrudOperation>,
}

impl Transport {
    /// Iterates over the configured operations with their payload keys.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &CrudOperation)> {
        [
            ("read", &self.read),
            ("create", &self.create),
            ("update", &self.update),
            ("destroy", &self.destroy),
        ]
        .into_iter()
        .filter_map(|(name, op)| op.as_ref().map(|op| (name, op)))
    }

    /// Returns `true` if no operation is configured.
    pub fn is_empty(&self) -> bool {
        self.operations().next().is_none()
    }
}

/// Data source settings of a tree list whose rows are of type `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource<T> {
    pub transport: Transport,
    pub model: Option<ModelDescriptor>,
    pub events: Events,
    /// Send changes in batches instead of one request per row.
    pub batch: Option<bool>,
    /// Let the server sort and filter.
    pub server_operation: Option<bool>,
    pub page_size: Option<u32>,
    /// Rows bound locally instead of read through the transport.
    pub data: Option<Vec<T>>,
    pub sort: Vec<SortDescriptor>,
    pub filter: Vec<FilterDescriptor>,
}

impl<T> Default for DataSource<T> {
    fn default() -> Self {
        Self {
            transport: Transport::default(),
            model: None,
            events: Events::new(),
            batch: None,
            server_operation: None,
            page_size: None,
            data: None,
            sort: Vec::new(),
            filter: Vec::new(),
        }
    }
}

impl<T> DataSource<T> {
    /// Returns `true` if nothing was configured.
    pub fn is_empty(&self) -> bool {
        self.transport.is_empty()
            && self.model.is_none()
            && self.events.is_empty()
            && self.batch.is_none()
            && self.server_operation.is_none()
            && self.page_size.is_none()
            && self.data.is_none()
            && self.sort.is_empty()
            && self.filter.is_empty()
    }
}
