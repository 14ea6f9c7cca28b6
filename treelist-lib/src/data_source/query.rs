//! Initial sort and filter descriptors of a data source.

use serde::Serialize;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// Sorts the data by one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortDescriptor {
    pub field: String,
    pub dir: Direction,
}

impl SortDescriptor {
    /// Creates an ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            dir: Direction::Asc,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            dir: Direction::Desc,
        }
    }
}

/// Comparison applied by a filter descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    /// Equality: `field == value`
    Eq,
    /// Not equal: `field != value`
    Neq,
    /// Less than: `field < value`
    Lt,
    /// Less than or equal: `field <= value`
    Lte,
    /// Greater than: `field > value`
    Gt,
    /// Greater than or equal: `field >= value`
    Gte,
    Contains,
    DoesNotContain,
    StartsWith,
    EndsWith,
    /// Field is null; takes no value.
    IsNull,
    /// Field is not null; takes no value.
    IsNotNull,
}

impl FilterOperator {
    /// Returns `true` if the operator compares against a value.
    pub fn takes_value(self) -> bool {
        !matches!(self, FilterOperator::IsNull | FilterOperator::IsNotNull)
    }
}

/// A single filter condition. Conditions of one data source are combined
/// with logical AND.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterDescriptor {
    pub field: String,
    pub operator: FilterOperator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl FilterDescriptor {
    /// Creates a filter condition.
    ///
    /// The value is dropped for operators that don't take one.
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: operator.takes_value().then(|| value.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_operator_names() {
        assert_eq!(serde_json::to_value(FilterOperator::Neq).unwrap(), json!("neq"));
        assert_eq!(
            serde_json::to_value(FilterOperator::DoesNotContain).unwrap(),
            json!("doesnotcontain")
        );
        assert_eq!(
            serde_json::to_value(FilterOperator::IsNotNull).unwrap(),
            json!("isnotnull")
        );
    }

    #[test]
    fn test_null_operators_drop_value() {
        let filter = FilterDescriptor::new("ReportsTo", FilterOperator::IsNull, 5);
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({ "field": "ReportsTo", "operator": "isnull" })
        );
    }

    #[test]
    fn test_sort_descriptor() {
        assert_eq!(
            serde_json::to_value(SortDescriptor::desc("HireDate")).unwrap(),
            json!({ "field": "HireDate", "dir": "desc" })
        );
    }
}
