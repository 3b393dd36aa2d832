/// Represents a runtime value in the interpreter.
///
/// Variables hold numbers and strings; booleans come out of comparisons and
/// logical operators and are what `if` and `while` guards usually produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(String),
    /// A boolean value (`true` or `false`).
    Bool(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl Default for Value {
    /// Unbound variables read as numeric zero.
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl Value {
    /// Returns the truth value used by guards and logical operators.
    ///
    /// Numbers are true when non-zero, strings when non-empty.
    ///
    /// # Example
    /// ```
    /// use keylang::interpreter::value::Value;
    ///
    /// assert!(Value::Number(2.0).is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::from("no").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
        }
    }

    /// Returns the name of the value's kind, for error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "a number",
            Self::Str(_) => "a string",
            Self::Bool(_) => "a boolean",
        }
    }
}

impl std::fmt::Display for Value {
    /// Numbers always show a fractional part, so `1` prints as `1.0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n:?}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
