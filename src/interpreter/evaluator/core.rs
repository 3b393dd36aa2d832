use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Environment {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// Literals evaluate to themselves, variables resolve through the
    /// environment (unbound ones read as `0.0`), and operators are applied
    /// to their evaluated operands. `and` and `or` only evaluate their right
    /// operand when the left one does not decide the result.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use keylang::{
    ///     ast::{BinaryOperator, Expr, LiteralValue},
    ///     interpreter::{environment::Environment, value::Value},
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", Value::Number(4.0));
    ///
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Variable { name: "x".into(),
    ///                                                              line: 1, }),
    ///                             op:    BinaryOperator::Mul,
    ///                             right: Box::new(Expr::Literal { value: 2.5.into(),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(env.eval(&expr).unwrap(), Value::Number(10.0));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Variable { name, .. } => Ok(self.lookup(name)),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left, op, right, line } => match op {
                BinaryOperator::And | BinaryOperator::Or => {
                    self.eval_short_circuit(*op, left, right)
                },
                _ => {
                    let left = self.eval(left)?;
                    let right = self.eval(right)?;
                    Self::eval_binary(*op, &left, &right, *line)
                },
            },
        }
    }
}
