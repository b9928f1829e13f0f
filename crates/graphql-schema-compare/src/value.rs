use async_graphql_value::ConstValue;
use std::fmt;

/// A literal value, such as the default value of an argument. Values are compared through their
/// GraphQL rendering, so `[1, 2]` and `[1,2]` are the same value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Value(String);

impl Value {
    /// A value from its GraphQL rendering.
    pub fn new(rendered: impl Into<String>) -> Self {
        Value(rendered.into())
    }

    /// The GraphQL rendering of the value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&ConstValue> for Value {
    fn from(value: &ConstValue) -> Self {
        Value(value.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Absent values are only equal to each other.
pub fn value_equals(source: Option<&Value>, target: Option<&Value>) -> bool {
    match (source, target) {
        (None, None) => true,
        (Some(source), Some(target)) => source == target,
        _ => false,
    }
}

/// Render an optional value for messages.
pub(crate) fn render(value: Option<&Value>) -> &str {
    value.map(Value::as_str).unwrap_or("null")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_through_graphql_syntax() {
        let list = ConstValue::List(vec![ConstValue::Boolean(true)]);
        let string = ConstValue::String("a".into());

        assert_eq!(Value::from(&list).as_str(), "[true]");
        assert_eq!(Value::from(&string).as_str(), r#""a""#);
    }

    #[test]
    fn equality() {
        assert!(value_equals(None, None));
        assert!(value_equals(Some(&Value::new("1")), Some(&Value::new("1"))));
        assert!(!value_equals(Some(&Value::new("1")), Some(&Value::new("2"))));
        assert!(!value_equals(Some(&Value::new("1")), None));
        assert!(!value_equals(None, Some(&Value::new("1"))));
    }
}
