use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        value::Value,
    },
};

impl Environment {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any two values; values of different kinds are
    /// never equal. The ordering operators accept two numbers or two strings
    /// (compared lexicographically).
    ///
    /// # Returns
    /// A `Value::Bool`.
    ///
    /// # Example
    /// ```
    /// use keylang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Environment, value::Value},
    /// };
    ///
    /// let less = Environment::eval_comparison(BinaryOperator::Less,
    ///                                         &Value::Number(3.0),
    ///                                         &Value::Number(5.0),
    ///                                         1);
    /// assert_eq!(less.unwrap(), Value::Bool(true));
    ///
    /// let mixed = Environment::eval_comparison(BinaryOperator::Equal,
    ///                                          &Value::Number(1.0),
    ///                                          &Value::from("1"),
    ///                                          1);
    /// assert_eq!(mixed.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        match op {
            BinaryOperator::Equal => return Ok(Value::Bool(left == right)),
            BinaryOperator::NotEqual => return Ok(Value::Bool(left != right)),
            _ => {},
        }

        let ordering = match (left, right) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            _ => {
                return Err(RuntimeError::TypeMismatch { operator: op.to_string(),
                                                        left: left.kind_name(),
                                                        right: right.kind_name(),
                                                        line });
            },
        };

        let result = match (op, ordering) {
            // NaN compares false with everything
            (_, None) => false,
            (BinaryOperator::Less, Some(ordering)) => ordering == Ordering::Less,
            (BinaryOperator::Greater, Some(ordering)) => ordering == Ordering::Greater,
            (BinaryOperator::LessEqual, Some(ordering)) => ordering != Ordering::Greater,
            (BinaryOperator::GreaterEqual, Some(ordering)) => ordering != Ordering::Less,
            _ => unreachable!("eval_comparison used with non comparison operator"),
        };

        Ok(Value::Bool(result))
    }
}
