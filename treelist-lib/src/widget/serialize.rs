//! Conversion of a configured tree list into its initialization payload.

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::config::SerializerConfig;
use crate::data_source::CrudOperation;
use crate::data_source::DataSource;
use crate::error::Error;
use crate::error::WidgetError;

use super::TreeList;

impl<T: Serialize> TreeList<T> {
    /// Serializes the widget options with the default configuration.
    pub fn to_json(&self) -> Result<Value, Error> {
        self.to_json_with(&SerializerConfig::default())
    }

    /// Serializes the widget options.
    ///
    /// Unset options are omitted so the client library applies its own
    /// defaults.
    pub fn to_json_with(&self, config: &SerializerConfig) -> Result<Value, Error> {
        self.verify_name()?;

        let mut options = Map::new();

        if !self.columns.is_empty() {
            options.insert("columns".into(), serde_json::to_value(&self.columns)?);
        }
        insert_opt(&mut options, "autoBind", self.auto_bind);
        insert_opt(&mut options, "scrollable", self.scrollable);
        insert_opt(&mut options, "selectable", self.selectable);
        if let Some(sortable) = &self.sortable {
            options.insert("sortable".into(), toggle(sortable.enabled, sortable)?);
        }
        if !self.toolbar.is_empty() {
            options.insert("toolbar".into(), serde_json::to_value(&self.toolbar)?);
        }
        insert_opt(&mut options, "height", self.height);
        if let Some(filterable) = &self.filterable {
            options.insert("filterable".into(), toggle(filterable.enabled, filterable)?);
        }
        if let Some(editable) = &self.editable {
            options.insert("editable".into(), toggle(editable.enabled, editable)?);
        }
        if !self.data_source.is_empty() {
            options.insert(
                "dataSource".into(),
                data_source_to_json(&self.data_source, config)?,
            );
        }
        for (event, handler) in serialize_object(&self.events)? {
            options.insert(event, handler);
        }

        log::debug!(
            "[tree_list] serialized '{}' with {} option(s)",
            self.name,
            options.len()
        );
        Ok(Value::Object(options))
    }

    /// Serializes the widget options to JSON text.
    pub fn to_json_string(&self) -> Result<String, Error> {
        self.to_json_string_with(&SerializerConfig::default())
    }

    /// Serializes the widget options to JSON text, pretty-printed if the
    /// config asks for it.
    pub fn to_json_string_with(&self, config: &SerializerConfig) -> Result<String, Error> {
        let value = self.to_json_with(config)?;
        let text = if config.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    fn verify_name(&self) -> Result<(), WidgetError> {
        if self.name.is_empty() {
            return Err(WidgetError::MissingName);
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(WidgetError::invalid_name(&self.name));
        }
        Ok(())
    }
}

fn insert_opt<V: Into<Value>>(options: &mut Map<String, Value>, key: &str, value: Option<V>) {
    if let Some(value) = value {
        options.insert(key.to_string(), value.into());
    }
}

/// Options that are either a flag or an object: `false` when disabled,
/// `true` when enabled without options, otherwise the options object.
fn toggle<S: Serialize>(enabled: bool, settings: &S) -> Result<Value, Error> {
    if !enabled {
        return Ok(Value::Bool(false));
    }
    let options = serialize_object(settings)?;
    if options.is_empty() {
        Ok(Value::Bool(true))
    } else {
        Ok(Value::Object(options))
    }
}

fn serialize_object<S: Serialize>(value: &S) -> Result<Map<String, Value>, Error> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

fn data_source_to_json<T: Serialize>(
    data_source: &DataSource<T>,
    config: &SerializerConfig,
) -> Result<Value, Error> {
    let mut ds = Map::new();
    ds.insert("type".into(), Value::String(config.data_source_type.clone()));

    if !data_source.transport.is_empty() {
        let mut transport = Map::new();
        for (name, operation) in data_source.transport.operations() {
            transport.insert(name.into(), operation_to_json(operation, config));
        }
        ds.insert("transport".into(), Value::Object(transport));
    }

    if let Some(model) = &data_source.model {
        let mut schema = Map::new();
        schema.insert("model".into(), serde_json::to_value(model)?);
        ds.insert("schema".into(), Value::Object(schema));
    }
    insert_opt(&mut ds, "batch", data_source.batch);
    insert_opt(&mut ds, "serverOperation", data_source.server_operation);
    insert_opt(&mut ds, "pageSize", data_source.page_size);
    if !data_source.sort.is_empty() {
        ds.insert("sort".into(), serde_json::to_value(&data_source.sort)?);
    }
    if !data_source.filter.is_empty() {
        let mut filter = Map::new();
        filter.insert("logic".into(), Value::String("and".into()));
        filter.insert("filters".into(), serde_json::to_value(&data_source.filter)?);
        ds.insert("filter".into(), Value::Object(filter));
    }
    if let Some(data) = &data_source.data {
        ds.insert("data".into(), serde_json::to_value(data)?);
    }
    for (event, handler) in serialize_object(&data_source.events)? {
        ds.insert(event, handler);
    }

    Ok(Value::Object(ds))
}

fn operation_to_json(operation: &CrudOperation, config: &SerializerConfig) -> Value {
    let mut op = Map::new();
    if let Some(url) = &operation.url {
        op.insert("url".into(), Value::String(url.clone()));
    }
    let method = operation.method.unwrap_or(config.default_method);
    op.insert("type".into(), Value::String(method.as_str().into()));
    if let Some(data) = &operation.data {
        op.insert("data".into(), Value::String(data.clone()));
    }
    Value::Object(op)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::context::ViewContext;
    use crate::data_source::HttpMethod;
    use crate::routing::RelativeUrlGenerator;

    fn tree_list(name: &str) -> TreeList<()> {
        TreeList::new(name, ViewContext::new("Home", "Index"), Arc::new(RelativeUrlGenerator))
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(tree_list("tree").to_json().unwrap(), json!({}));
    }

    #[test]
    fn test_missing_name() {
        let err = tree_list("").to_json().unwrap_err();
        assert!(matches!(err, Error::Widget(WidgetError::MissingName)));
    }

    #[test]
    fn test_invalid_name() {
        let err = tree_list("my tree").to_json().unwrap_err();
        assert!(matches!(err, Error::Widget(WidgetError::InvalidName { .. })));
    }

    #[test]
    fn test_toggle_forms() {
        let mut list = tree_list("tree");
        list.builder()
            .sortable(|_| {})
            .filterable(|f| {
                f.enabled(false).extra(true);
            })
            .editable(|e| {
                e.mode(crate::settings::EditMode::Popup);
            });

        let payload = list.to_json().unwrap();
        assert_eq!(payload["sortable"], json!(true));
        assert_eq!(payload["filterable"], json!(false));
        assert_eq!(payload["editable"], json!({ "mode": "popup" }));
    }

    #[test]
    fn test_default_method_from_config() {
        let mut list = tree_list("tree");
        list.builder().data_source(|ds| {
            ds.read(|r| {
                r.url("/read");
            })
            .update(|u| {
                u.url("/update").method(HttpMethod::Put);
            })
            .destroy(|d| {
                d.url("/destroy");
            });
        });

        let config = SerializerConfig::new()
            .with_default_method(HttpMethod::Get)
            .with_data_source_type("custom");
        let payload = list.to_json_with(&config).unwrap();
        assert_eq!(
            payload["dataSource"],
            json!({
                "type": "custom",
                "transport": {
                    "read": { "url": "/read", "type": "GET" },
                    "update": { "url": "/update", "type": "PUT" },
                    "destroy": { "url": "/destroy", "type": "GET" }
                }
            })
        );
    }

    #[test]
    fn test_pretty_output() {
        let mut list = tree_list("tree");
        list.builder().height(100.0);

        let compact = list.to_json_string().unwrap();
        let pretty = list
            .to_json_string_with(&SerializerConfig::new().with_pretty(true))
            .unwrap();
        assert_eq!(compact, r#"{"height":100.0}"#);
        assert!(pretty.contains('\n'));
    }
}
