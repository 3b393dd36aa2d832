use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The single, global variable store of one interpreter run.
///
/// There is no nesting and no shadowing: every assignment, `input` and
/// `file_read` writes here, and every variable read looks here. The
/// expression evaluator is implemented on this type (see
/// [`crate::interpreter::evaluator`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns the value bound to `name`, or numeric zero when it is unbound.
    ///
    /// Reading an unset variable is not an error.
    ///
    /// # Example
    /// ```
    /// use keylang::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.lookup("missing"), Value::Number(0.0));
    ///
    /// env.assign("x", Value::from("hi"));
    /// assert_eq!(env.lookup("x"), Value::from("hi"));
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Value {
        self.variables.get(name).cloned().unwrap_or_default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn assign(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }
}
