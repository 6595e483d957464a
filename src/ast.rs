use std::{fmt, mem};

/// An abstract syntax tree (AST) node for one calculator line.
///
/// The set of variants is closed. Every node owns its children, so a parsed
/// line is a plain tree that is dropped once it has been evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// Reference to a variable by name. Unbound names evaluate to `0.0`.
    Variable(String),
    /// Negation of a single operand.
    UnaryMinus(Box<Self>),
    /// A binary arithmetic operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `name = value`. Only ever produced as the root of a line.
    Assignment {
        /// Name of the variable being bound.
        name:  String,
        /// Right-hand side expression.
        value: Box<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::Binary`] node from its parts.
    ///
    /// ## Example
    /// ```
    /// use calc::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Sub, Expr::Number(4.0), Expr::Number(1.5));
    ///
    /// assert_eq!(expr.to_string(), "(4 - 1.5)");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Returns `true` if this node binds a variable.
    #[must_use]
    pub const fn is_assignment(&self) -> bool {
        matches!(self, Self::Assignment { .. })
    }

    /// Counts the nodes in the tree, this one included.
    ///
    /// ## Example
    /// ```
    /// use calc::{interpreter::lexer::tokenize, interpreter::parser::statement::parse_line};
    ///
    /// let expr = parse_line(&tokenize("x = -(1 + y)")).unwrap();
    /// assert_eq!(expr.node_count(), 5);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut pending = vec![self];
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            match node {
                Self::Number(_) | Self::Variable(_) => {},
                Self::UnaryMinus(operand) | Self::Assignment { value: operand, .. } => {
                    pending.push(operand);
                },
                Self::Binary { left, right, .. } => {
                    pending.push(left);
                    pending.push(right);
                },
            }
        }
        count
    }

    const fn has_children(&self) -> bool {
        !matches!(self, Self::Number(_) | Self::Variable(_))
    }

    /// Moves every child that has children of its own into `out`, leaving a
    /// leaf in its place.
    fn detach_children(&mut self, out: &mut Vec<Box<Self>>) {
        let mut detach = |child: &mut Box<Self>| {
            if child.has_children() {
                out.push(mem::replace(child, Box::new(Self::Number(0.0))));
            }
        };
        match self {
            Self::Number(_) | Self::Variable(_) => {},
            Self::UnaryMinus(operand) | Self::Assignment { value: operand, .. } => detach(operand),
            Self::Binary { left, right, .. } => {
                detach(left);
                detach(right);
            },
        }
    }
}

// Long operator chains build trees as deep as the line is long, so the
// default recursive drop could overflow the stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::UnaryMinus(expr) => write!(f, "-{expr}"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Assignment { name, value } => write!(f, "{name} = {value}"),
        }
    }
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Applies the operator to two operands.
    ///
    /// Division follows IEEE-754, so dividing by zero yields an infinity or
    /// `NaN` instead of an error.
    ///
    /// ## Example
    /// ```
    /// use calc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mul.apply(3.0, 4.0), 12.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{s}")
    }
}
