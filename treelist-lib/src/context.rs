//! Request context for URL generation.

use std::collections::BTreeMap;

/// Key-value pairs used to build URLs back into the hosting application.
///
/// Keys are kept in sorted order so generated query strings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteValues {
    values: BTreeMap<String, String>,
}

impl RouteValues {
    /// Route key naming the controller.
    pub const CONTROLLER: &'static str = "controller";
    /// Route key naming the action.
    pub const ACTION: &'static str = "action";

    /// Creates an empty set of route values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates route values targeting a controller action.
    pub fn action(action: impl Into<String>, controller: impl Into<String>) -> Self {
        let mut values = Self::new();
        values.insert(Self::ACTION, action);
        values.insert(Self::CONTROLLER, controller);
        values
    }

    /// Adds a value, returning the updated set.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Copies every value from `other` into this set.
    ///
    /// Values in `other` win over existing ones.
    pub fn merge(&mut self, other: &RouteValues) {
        for (key, value) in other.iter() {
            self.values.insert(key.to_string(), value.to_string());
        }
    }

    /// Returns the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the controller, if set.
    pub fn controller(&self) -> Option<&str> {
        self.get(Self::CONTROLLER)
    }

    /// Returns the action, if set.
    pub fn action_name(&self) -> Option<&str> {
        self.get(Self::ACTION)
    }

    /// Iterates over all values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over every value except controller and action.
    pub fn extras(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter(|(k, _)| *k != Self::CONTROLLER && *k != Self::ACTION)
    }

    /// Returns `true` if no values are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RouteValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (k, v) in iter {
            values.insert(k, v);
        }
        values
    }
}

/// The request currently being handled by the hosting application.
///
/// Supplies ambient route values (the current controller in particular) to
/// the data source builder when it resolves transport URLs.
///
/// # Example
///
/// ```
/// use treelist_lib::ViewContext;
///
/// let ctx = ViewContext::new("Employees", "Index").with_route_value("tenant", "acme");
/// assert_eq!(ctx.controller(), "Employees");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewContext {
    controller: String,
    action: String,
    route_values: RouteValues,
}

impl ViewContext {
    /// Creates a context for the given controller and action.
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
            route_values: RouteValues::new(),
        }
    }

    /// Adds an ambient route value.
    pub fn with_route_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.route_values.insert(key, value);
        self
    }

    /// The controller handling the current request.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// The action handling the current request.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Ambient route values of the current request.
    pub fn route_values(&self) -> &RouteValues {
        &self.route_values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_route_values() {
        let values = RouteValues::action("Read", "Employees");
        assert_eq!(values.action_name(), Some("Read"));
        assert_eq!(values.controller(), Some("Employees"));
        assert_eq!(values.extras().count(), 0);
    }

    #[test]
    fn test_merge_overrides() {
        let mut values = RouteValues::new().with("id", "1").with("page", "2");
        values.merge(&RouteValues::new().with("id", "7"));
        assert_eq!(values.get("id"), Some("7"));
        assert_eq!(values.get("page"), Some("2"));
    }

    #[test]
    fn test_extras_sorted() {
        let values: RouteValues = [("z", "1"), ("action", "Read"), ("a", "2")]
            .into_iter()
            .collect();
        let extras: Vec<_> = values.extras().collect();
        assert_eq!(extras, vec![("a", "2"), ("z", "1")]);
    }
}
