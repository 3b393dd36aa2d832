use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        value::Value,
    },
};

impl Environment {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation; anything but a number is an error.
    /// - `Not`: boolean negation of the value's truthiness.
    ///
    /// # Example
    /// ```
    /// use keylang::{
    ///     ast::UnaryOperator,
    ///     interpreter::{environment::Environment, value::Value},
    /// };
    ///
    /// let v = Environment::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Environment::eval_unary(UnaryOperator::Not, &Value::from(""), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::InvalidOperand { operator: op.to_string(),
                                                        operand: value.kind_name(),
                                                        line }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}
