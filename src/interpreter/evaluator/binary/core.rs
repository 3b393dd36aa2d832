use crate::{
    ast::BinaryOperator,
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        value::Value,
    },
};

impl Environment {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_arithmetic`, equality and ordering
    /// operators to `eval_comparison`. Logical operators are also accepted
    /// here for already evaluated operands, although `eval` routes them
    /// through the short-circuiting path.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use keylang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Environment, value::Value},
    /// };
    ///
    /// let result = Environment::eval_binary(BinaryOperator::Add,
    ///                                       &Value::from("ab"),
    ///                                       &Value::from("cd"),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::from("abcd"));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_arithmetic(op, left, right, line),
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
            Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        }
    }
}
