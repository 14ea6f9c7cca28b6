//! Schema model of a hierarchical data source.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::Serialize;

/// Client-side type of a model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Object,
}

/// Describes a field of the row model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelField {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    /// Name of the server field this one is read from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl ModelField {
    /// Creates a field of the given type.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            editable: None,
            nullable: None,
            default_value: None,
            from: None,
        }
    }
}

/// Identity and hierarchy of the rows.
///
/// `id` and `parent_id` name the fields linking a row to its parent; rows
/// whose parent id is null are roots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Whether rows start expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, ModelField>,
}

/// Configures a [`ModelDescriptor`].
///
/// # Example
///
/// ```ignore
/// data_source.model(|m| {
///     m.id("EmployeeId").parent_id("ReportsTo").expanded(true);
///     m.field("HireDate", FieldType::Date).editable(false);
/// });
/// ```
pub struct ModelDescriptorBuilder<'a> {
    model: &'a mut ModelDescriptor,
}

impl<'a> ModelDescriptorBuilder<'a> {
    pub(crate) fn new(model: &'a mut ModelDescriptor) -> Self {
        Self { model }
    }

    /// Sets the identity field.
    pub fn id(&mut self, field: impl Into<String>) -> &mut Self {
        self.model.id = Some(field.into());
        self
    }

    /// Sets the field holding the parent's id.
    pub fn parent_id(&mut self, field: impl Into<String>) -> &mut Self {
        self.model.parent_id = Some(field.into());
        self
    }

    pub fn expanded(&mut self, expanded: bool) -> &mut Self {
        self.model.expanded = Some(expanded);
        self
    }

    /// Declares a field, replacing an earlier declaration of the same name.
    pub fn field(&mut self, name: impl Into<String>, field_type: FieldType) -> ModelFieldBuilder<'_> {
        let field = match self.model.fields.entry(name.into()) {
            Entry::Occupied(mut entry) => {
                entry.insert(ModelField::new(field_type));
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(ModelField::new(field_type)),
        };
        ModelFieldBuilder { field }
    }
}

/// Configures one [`ModelField`].
pub struct ModelFieldBuilder<'a> {
    field: &'a mut ModelField,
}

impl ModelFieldBuilder<'_> {
    pub fn editable(&mut self, editable: bool) -> &mut Self {
        self.field.editable = Some(editable);
        self
    }

    pub fn nullable(&mut self, nullable: bool) -> &mut Self {
        self.field.nullable = Some(nullable);
        self
    }

    /// Value used for new rows.
    pub fn default_value(&mut self, value: impl Into<serde_json::Value>) -> &mut Self {
        self.field.default_value = Some(value.into());
        self
    }

    /// Reads the field from a differently named server field.
    pub fn from(&mut self, field: impl Into<String>) -> &mut Self {
        self.field.from = Some(field.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_model() {
        let mut model = ModelDescriptor::default();
        let mut builder = ModelDescriptorBuilder::new(&mut model);
        builder.id("EmployeeId").parent_id("ReportsTo");
        builder.field("ReportsTo", FieldType::Number).nullable(true);
        builder
            .field("Position", FieldType::String)
            .default_value("Engineer")
            .editable(false);

        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            json!({
                "id": "EmployeeId",
                "parentId": "ReportsTo",
                "fields": {
                    "Position": { "type": "string", "editable": false, "defaultValue": "Engineer" },
                    "ReportsTo": { "type": "number", "nullable": true }
                }
            })
        );
    }

    #[test]
    fn test_field_redeclaration_resets() {
        let mut model = ModelDescriptor::default();
        let mut builder = ModelDescriptorBuilder::new(&mut model);
        builder.field("Age", FieldType::String).nullable(true);
        builder.field("Age", FieldType::Number);

        assert_eq!(model.fields["Age"], ModelField::new(FieldType::Number));
    }
}
