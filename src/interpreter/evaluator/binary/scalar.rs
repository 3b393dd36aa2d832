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
    /// Evaluates `+`, `-`, `*`, `/` and `%`.
    ///
    /// All five work on two numbers. `+` also concatenates two strings.
    /// Any other combination is a type mismatch.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` with a zero right operand.
    /// - `TypeMismatch` for unsupported operand kinds.
    ///
    /// # Example
    /// ```
    /// use keylang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Environment, value::Value},
    /// };
    ///
    /// let seven = Environment::eval_arithmetic(BinaryOperator::Mod,
    ///                                          &Value::Number(17.0),
    ///                                          &Value::Number(10.0),
    ///                                          1).unwrap();
    /// assert_eq!(seven, Value::Number(7.0));
    ///
    /// assert!(Environment::eval_arithmetic(BinaryOperator::Div,
    ///                                      &Value::Number(1.0),
    ///                                      &Value::Number(0.0),
    ///                                      1).is_err());
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => {
                let result = match op {
                    BinaryOperator::Add => a + b,
                    BinaryOperator::Sub => a - b,
                    BinaryOperator::Mul => a * b,
                    BinaryOperator::Div | BinaryOperator::Mod if *b == 0.0 => {
                        return Err(RuntimeError::DivisionByZero { line });
                    },
                    BinaryOperator::Div => a / b,
                    BinaryOperator::Mod => a % b,
                    _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
                };
                Ok(Value::Number(result))
            },
            (Value::Str(a), Value::Str(b)) if op == BinaryOperator::Add => {
                Ok(Value::Str(format!("{a}{b}")))
            },
            _ => Err(RuntimeError::TypeMismatch { operator: op.to_string(),
                                                  left: left.kind_name(),
                                                  right: right.kind_name(),
                                                  line }),
        }
    }
}
