use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::core::Environment,
};

impl Environment {
    /// Evaluates a binary operation.
    ///
    /// The left operand is evaluated before the right one and both are always
    /// evaluated. The operator itself is applied by [`BinaryOperator::apply`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use calc::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Environment,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let v = env.eval_binary_op(BinaryOperator::Sub, &Expr::Number(3.0), &Expr::Number(4.0));
    /// assert_eq!(v, -1.0);
    /// ```
    pub fn eval_binary_op(&mut self, op: BinaryOperator, left: &Expr, right: &Expr) -> f64 {
        let left = self.eval(left);
        let right = self.eval(right);
        op.apply(left, right)
    }
}
