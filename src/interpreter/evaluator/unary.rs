use crate::{ast::Expr, interpreter::evaluator::core::Environment};

impl Environment {
    /// Evaluates `-operand`.
    ///
    /// # Example
    /// ```
    /// use calc::{ast::Expr, interpreter::evaluator::core::Environment};
    ///
    /// let mut env = Environment::new();
    /// let v = env.eval_unary_minus(&Expr::Number(5.0));
    /// assert_eq!(v, -5.0);
    /// ```
    pub fn eval_unary_minus(&mut self, operand: &Expr) -> f64 {
        -self.eval(operand)
    }
}
