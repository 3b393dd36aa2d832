use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        value::Value,
    },
};

impl Environment {
    /// Evaluates `and` / `or`, skipping the right operand when the left one
    /// already decides the result.
    ///
    /// Both operands are judged by truthiness and the result is always a
    /// boolean.
    ///
    /// # Example
    /// ```
    /// use keylang::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{environment::Environment, value::Value},
    /// };
    ///
    /// let env = Environment::new();
    /// let zero = Expr::Literal { value: 0.0.into(),
    ///                            line:  1, };
    /// // the right operand would fail if it were evaluated
    /// let broken = Expr::BinaryOp { left:  Box::new(zero.clone()),
    ///                               op:    BinaryOperator::Sub,
    ///                               right: Box::new(Expr::Literal { value: "x".into(),
    ///                                                               line:  1, }),
    ///                               line:  1, };
    ///
    /// let result = env.eval_short_circuit(BinaryOperator::And, &zero, &broken);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_short_circuit(&self,
                              op: BinaryOperator,
                              left: &Expr,
                              right: &Expr)
                              -> EvalResult<Value> {
        let left = self.eval(left)?.is_truthy();

        let result = match op {
            BinaryOperator::And => left && self.eval(right)?.is_truthy(),
            BinaryOperator::Or => left || self.eval(right)?.is_truthy(),
            _ => unreachable!("eval_short_circuit used with non logical operator"),
        };

        Ok(Value::Bool(result))
    }
}
