//! Builders for the Ajax data source.

use crate::context::RouteValues;
use crate::context::ViewContext;
use crate::routing::UrlGenerator;
use crate::settings::Events;

use super::CrudOperation;
use super::DataSource;
use super::FilterDescriptor;
use super::FilterOperator;
use super::HttpMethod;
use super::ModelDescriptorBuilder;
use super::SortDescriptor;
use super::Direction;

/// Configures a data source that talks to controller actions of the hosting
/// application.
///
/// Unlike the other sub-builders it also borrows the request context and the
/// URL generator, so transport operations can point at actions by name.
///
/// # Example
///
/// ```ignore
/// builder.data_source(|ds| {
///     ds.read(|r| { r.action("All", "Employees"); })
///         .update(|u| { u.action("Update", "Employees"); })
///         .model(|m| { m.id("EmployeeId").parent_id("ReportsTo"); });
/// });
/// ```
pub struct AjaxDataSourceBuilder<'a, T> {
    data_source: &'a mut DataSource<T>,
    ctx: &'a ViewContext,
    urls: &'a dyn UrlGenerator,
}

impl<'a, T> AjaxDataSourceBuilder<'a, T> {
    /// Creates a builder over `data_source`.
    pub fn new(
        data_source: &'a mut DataSource<T>,
        ctx: &'a ViewContext,
        urls: &'a dyn UrlGenerator,
    ) -> Self {
        Self {
            data_source,
            ctx,
            urls,
        }
    }

    /// Configures the operation reading rows.
    pub fn read<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut CrudOperationBuilder<'_>),
    {
        let operation = self.data_source.transport.read.get_or_insert_with(Default::default);
        configure(&mut CrudOperationBuilder::new(operation, self.ctx, self.urls));
        self
    }

    /// Configures the operation creating rows.
    pub fn create<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut CrudOperationBuilder<'_>),
    {
        let operation = self.data_source.transport.create.get_or_insert_with(Default::default);
        configure(&mut CrudOperationBuilder::new(operation, self.ctx, self.urls));
        self
    }

    /// Configures the operation updating rows.
    pub fn update<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut CrudOperationBuilder<'_>),
    {
        let operation = self.data_source.transport.update.get_or_insert_with(Default::default);
        configure(&mut CrudOperationBuilder::new(operation, self.ctx, self.urls));
        self
    }

    /// Configures the operation deleting rows.
    pub fn destroy<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut CrudOperationBuilder<'_>),
    {
        let operation = self.data_source.transport.destroy.get_or_insert_with(Default::default);
        configure(&mut CrudOperationBuilder::new(operation, self.ctx, self.urls));
        self
    }

    /// Configures the schema model.
    pub fn model<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ModelDescriptorBuilder<'_>),
    {
        let model = self.data_source.model.get_or_insert_with(Default::default);
        configure(&mut ModelDescriptorBuilder::new(model));
        self
    }

    /// Binds client handlers to data source events.
    pub fn events<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut DataSourceEventBuilder<'_>),
    {
        configure(&mut DataSourceEventBuilder::new(&mut self.data_source.events));
        self
    }

    /// Sends changes in batches.
    pub fn batch(&mut self, batch: bool) -> &mut Self {
        self.data_source.batch = Some(batch);
        self
    }

    /// Sorts and filters on the server instead of the client.
    pub fn server_operation(&mut self, enabled: bool) -> &mut Self {
        self.data_source.server_operation = Some(enabled);
        self
    }

    pub fn page_size(&mut self, size: u32) -> &mut Self {
        self.data_source.page_size = Some(size);
        self
    }

    /// Binds rows locally, replacing earlier bound rows.
    pub fn data(&mut self, rows: impl IntoIterator<Item = T>) -> &mut Self {
        self.data_source.data = Some(rows.into_iter().collect());
        self
    }

    /// Appends an initial sort descriptor.
    pub fn sort(&mut self, field: impl Into<String>, dir: Direction) -> &mut Self {
        self.data_source.sort.push(SortDescriptor {
            field: field.into(),
            dir,
        });
        self
    }

    /// Appends an initial filter condition.
    pub fn filter(
        &mut self,
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<serde_json::Value>,
    ) -> &mut Self {
        self.data_source
            .filter
            .push(FilterDescriptor::new(field, operator, value));
        self
    }
}

/// Configures one transport operation.
pub struct CrudOperationBuilder<'a> {
    operation: &'a mut CrudOperation,
    ctx: &'a ViewContext,
    urls: &'a dyn UrlGenerator,
}

impl<'a> CrudOperationBuilder<'a> {
    fn new(operation: &'a mut CrudOperation, ctx: &'a ViewContext, urls: &'a dyn UrlGenerator) -> Self {
        Self {
            operation,
            ctx,
            urls,
        }
    }

    /// Targets `action` on `controller`.
    pub fn action(&mut self, action: impl Into<String>, controller: impl Into<String>) -> &mut Self {
        self.action_with(action, controller, RouteValues::new())
    }

    /// Targets `action` on `controller` with extra route values.
    ///
    /// Retargeting drops the values of the previous target. Values added with
    /// [`route`](Self::route) before any action was targeted are kept.
    pub fn action_with(
        &mut self,
        action: impl Into<String>,
        controller: impl Into<String>,
        route_values: RouteValues,
    ) -> &mut Self {
        if self.operation.route_values.action_name().is_some() {
            self.operation.route_values = RouteValues::new();
        }
        self.operation.route_values.merge(&route_values);
        self.operation
            .route_values
            .insert(RouteValues::ACTION, action);
        self.operation
            .route_values
            .insert(RouteValues::CONTROLLER, controller);
        self.resolve();
        self
    }

    /// Targets `action` on the controller handling the current request.
    pub fn action_name(&mut self, action: impl Into<String>) -> &mut Self {
        let controller = self.ctx.controller().to_string();
        self.action(action, controller)
    }

    /// Adds a route value, re-resolving the URL if an action is targeted.
    pub fn route(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.operation.route_values.insert(key, value);
        self.resolve();
        self
    }

    /// Uses a raw URL, dropping any targeted action.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.operation.route_values = RouteValues::new();
        self.operation.url = Some(url.into());
        self
    }

    /// Names a client function returning extra request parameters.
    pub fn data(&mut self, handler: impl Into<String>) -> &mut Self {
        self.operation.data = Some(handler.into());
        self
    }

    pub fn method(&mut self, method: HttpMethod) -> &mut Self {
        self.operation.method = Some(method);
        self
    }

    fn resolve(&mut self) {
        if self.operation.route_values.action_name().is_none() {
            return;
        }
        let url = self.urls.url_for(self.ctx, &self.operation.route_values);
        log::debug!("[data_source] resolved transport url {}", url);
        self.operation.url = Some(url);
    }
}

/// Binds client handlers to data source events.
pub struct DataSourceEventBuilder<'a> {
    events: &'a mut Events,
}

impl<'a> DataSourceEventBuilder<'a> {
    fn new(events: &'a mut Events) -> Self {
        Self { events }
    }

    /// Fired when the data changes.
    pub fn change(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("change", handler);
        self
    }

    /// Fired when a request fails.
    pub fn error(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("error", handler);
        self
    }

    pub fn request_start(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("requestStart", handler);
        self
    }

    pub fn request_end(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("requestEnd", handler);
        self
    }

    /// Fired after pending changes are synced.
    pub fn sync(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("sync", handler);
        self
    }

    pub fn push(&mut self, handler: impl Into<String>) -> &mut Self {
        self.events.bind("push", handler);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::routing::RelativeUrlGenerator;

    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<RouteValues>>,
    }

    impl UrlGenerator for Recording {
        fn url_for(&self, _ctx: &ViewContext, route: &RouteValues) -> String {
            let mut calls = self.calls.lock().unwrap();
            calls.push(route.clone());
            format!("/generated/{}", calls.len())
        }
    }

    #[test]
    fn test_action_resolves_url() {
        let ctx = ViewContext::new("Home", "Index");
        let mut ds: DataSource<()> = DataSource::default();
        AjaxDataSourceBuilder::new(&mut ds, &ctx, &RelativeUrlGenerator)
            .read(|r| {
                r.action("All", "Employees").method(HttpMethod::Get);
            })
            .destroy(|d| {
                d.action_name("Remove").route("soft", "true");
            });

        let read = ds.transport.read.as_ref().unwrap();
        assert_eq!(read.url.as_deref(), Some("/Employees/All"));
        assert_eq!(read.method, Some(HttpMethod::Get));

        let destroy = ds.transport.destroy.as_ref().unwrap();
        assert_eq!(destroy.url.as_deref(), Some("/Home/Remove?soft=true"));
        assert!(ds.transport.create.is_none());
    }

    #[test]
    fn test_route_before_action_is_kept() {
        let ctx = ViewContext::new("Home", "Index");
        let mut ds: DataSource<()> = DataSource::default();
        AjaxDataSourceBuilder::new(&mut ds, &ctx, &RelativeUrlGenerator).read(|r| {
            r.route("id", "3").action("Children", "Nodes");
        });

        let read = ds.transport.read.as_ref().unwrap();
        assert_eq!(read.url.as_deref(), Some("/Nodes/Children?id=3"));
    }

    #[test]
    fn test_retargeting_drops_previous_route() {
        let ctx = ViewContext::new("Home", "Index");
        let mut ds: DataSource<()> = DataSource::default();
        AjaxDataSourceBuilder::new(&mut ds, &ctx, &RelativeUrlGenerator).read(|r| {
            r.action_with("Children", "Nodes", RouteValues::new().with("id", "3"))
                .route("depth", "2")
                .action("All", "Employees");
        });

        let read = ds.transport.read.as_ref().unwrap();
        assert_eq!(read.url.as_deref(), Some("/Employees/All"));
        assert_eq!(read.route_values.get("id"), None);
        assert_eq!(read.route_values.get("depth"), None);
    }

    #[test]
    fn test_ambient_route_values_reach_url() {
        let ctx = ViewContext::new("Employees", "Index").with_route_value("tenant", "acme");
        let mut ds: DataSource<()> = DataSource::default();
        AjaxDataSourceBuilder::new(&mut ds, &ctx, &RelativeUrlGenerator)
            .read(|r| {
                r.action_name("All");
            })
            .update(|u| {
                u.action_with("Update", "Employees", RouteValues::new().with("tenant", "globex"));
            });

        let read = ds.transport.read.as_ref().unwrap();
        assert_eq!(read.url.as_deref(), Some("/Employees/All?tenant=acme"));
        let update = ds.transport.update.as_ref().unwrap();
        assert_eq!(update.url.as_deref(), Some("/Employees/Update?tenant=globex"));
    }

    #[test]
    fn test_route_without_action_does_not_generate() {
        let ctx = ViewContext::new("Home", "Index");
        let urls = Recording::default();
        let mut ds: DataSource<()> = DataSource::default();
        AjaxDataSourceBuilder::new(&mut ds, &ctx, &urls).read(|r| {
            r.route("id", "3");
        });

        assert!(urls.calls.lock().unwrap().is_empty());
        assert_eq!(ds.transport.read.as_ref().unwrap().url, None);
    }

    #[test]
    fn test_raw_url_drops_route() {
        let ctx = ViewContext::new("Home", "Index");
        let mut ds: DataSource<()> = DataSource::default();
        AjaxDataSourceBuilder::new(&mut ds, &ctx, &RelativeUrlGenerator).update(|u| {
            u.action("Update", "Employees").url("https://api.example.com/employees");
        });

        let update = ds.transport.update.as_ref().unwrap();
        assert_eq!(update.url.as_deref(), Some("https://api.example.com/employees"));
        assert!(update.route_values.is_empty());
    }

    #[test]
    fn test_generator_receives_context() {
        let ctx = ViewContext::new("Reports", "Index");
        let urls = Recording::default();
        let mut ds: DataSource<()> = DataSource::default();
        AjaxDataSourceBuilder::new(&mut ds, &ctx, &urls).read(|r| {
            r.action_with("Tree", "Reports", RouteValues::new().with("year", "2024"));
        });

        let calls = urls.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].get("year"), Some("2024"));
        assert_eq!(calls[0].controller(), Some("Reports"));
    }

    #[test]
    fn test_data_source_events_and_options() {
        let ctx = ViewContext::default();
        let mut ds: DataSource<()> = DataSource::default();
        AjaxDataSourceBuilder::new(&mut ds, &ctx, &RelativeUrlGenerator)
            .events(|e| {
                e.error("onError").request_end("onRequestEnd");
            })
            .batch(true)
            .page_size(50)
            .sort("Name", Direction::Asc)
            .filter("Active", FilterOperator::Eq, true);

        assert_eq!(ds.events.handler("error"), Some("onError"));
        assert_eq!(ds.events.handler("requestEnd"), Some("onRequestEnd"));
        assert_eq!(ds.batch, Some(true));
        assert_eq!(ds.page_size, Some(50));
        assert_eq!(ds.sort, vec![SortDescriptor::asc("Name")]);
        assert_eq!(ds.filter.len(), 1);
    }
}
