use std::collections::{HashMap, hash_map};

use log::trace;

use crate::ast::{BinaryOperator, Expr};

/// Name of the reserved variable holding the previous line's result.
pub const LAST: &str = "last";

/// Stores variable bindings across evaluated lines.
///
/// An `Environment` is created once per session and passed by reference into
/// every evaluation. Looking up a name that was never bound yields `0.0`
/// rather than an error.
///
/// ## Usage
/// ```
/// use calc::interpreter::evaluator::core::{Environment, LAST};
///
/// let mut env = Environment::new();
/// assert_eq!(env.get(LAST), 0.0);
/// assert_eq!(env.get("undefined"), 0.0);
///
/// env.set("x", 2.5);
/// assert_eq!(env.get("x"), 2.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment where only [`LAST`] is bound, to `0.0`.
    #[must_use]
    pub fn new() -> Self {
        let mut variables = HashMap::new();
        variables.insert(LAST.to_string(), 0.0);
        Self { variables }
    }

    /// Returns the value bound to `name`, or `0.0` if it is unbound.
    #[must_use]
    pub fn get(&self, name: &str) -> f64 {
        self.variables.get(name).copied().unwrap_or(0.0)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: f64) {
        trace!("binding {name} = {value}");
        self.variables.insert(name.to_string(), value);
    }

    /// Returns `true` if `name` has a binding.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables, including [`LAST`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing is bound. Never the case for a fresh
    /// environment, which always holds [`LAST`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, f64> {
        self.variables.iter()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Evaluation cannot fail: unbound variables read as `0.0` and division
    /// by zero produces an IEEE-754 infinity or `NaN`. Only
    /// [`Expr::Assignment`] modifies the environment.
    ///
    /// The tree is walked with an explicit work stack rather than native
    /// recursion, so arbitrarily long operator chains such as `1+1+...+1`
    /// cannot exhaust the call stack. Left operands are still evaluated
    /// before right operands.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use calc::{ast::Expr, interpreter::evaluator::core::Environment};
    ///
    /// let mut env = Environment::new();
    /// let assign = Expr::Assignment { name:  "x".to_string(),
    ///                                 value: Box::new(Expr::Number(5.0)), };
    ///
    /// assert_eq!(env.eval(&assign), 5.0);
    /// assert_eq!(env.eval(&Expr::Variable("x".to_string())), 5.0);
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> f64 {
        let mut steps = vec![Step::Visit(expr)];
        let mut values: Vec<f64> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Expr::Number(value)) => values.push(*value),
                Step::Visit(Expr::Variable(name)) => values.push(self.get(name)),
                Step::Visit(Expr::UnaryMinus(operand)) => {
                    steps.push(Step::Negate);
                    steps.push(Step::Visit(operand));
                },
                Step::Visit(Expr::Binary { op, left, right }) => {
                    steps.push(Step::Apply(*op));
                    steps.push(Step::Visit(right));
                    steps.push(Step::Visit(left));
                },
                Step::Visit(Expr::Assignment { name, value }) => {
                    steps.push(Step::Bind(name));
                    steps.push(Step::Visit(value));
                },
                Step::Negate => {
                    let operand = values.pop().unwrap_or_default();
                    values.push(-operand);
                },
                Step::Apply(op) => {
                    let right = values.pop().unwrap_or_default();
                    let left = values.pop().unwrap_or_default();
                    values.push(op.apply(left, right));
                },
                Step::Bind(name) => {
                    let value = values.last().copied().unwrap_or_default();
                    self.set(name, value);
                },
            }
        }

        values.pop().unwrap_or_default()
    }
}

/// Pending work for [`Environment::eval`].
enum Step<'e> {
    /// Evaluate a node and push its value.
    Visit(&'e Expr),
    /// Replace the top value with its negation.
    Negate,
    /// Pop right then left, push `left op right`.
    Apply(BinaryOperator),
    /// Bind the top value to a name, leaving it on the stack.
    Bind(&'e str),
}
