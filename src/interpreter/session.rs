use log::debug;

use crate::{
    error::ParseError,
    evaluate,
    interpreter::evaluator::core::{Environment, LAST},
};

/// A sequence of evaluated lines sharing one [`Environment`].
///
/// After every successfully evaluated line the result is stored under
/// [`LAST`], so the next line can refer to it. Lines that fail leave the
/// environment exactly as it was.
///
/// ## Example
/// ```
/// use calc::interpreter::session::Session;
///
/// let mut session = Session::new();
/// assert_eq!(session.eval_line("x = 5").unwrap(), Some(5.0));
/// assert_eq!(session.eval_line("x + 1").unwrap(), Some(6.0));
/// assert_eq!(session.eval_line("last * 2").unwrap(), Some(12.0));
///
/// assert!(session.eval_line("x = = (").is_err());
/// assert_eq!(session.eval_line("x").unwrap(), Some(5.0));
///
/// // Blank lines are skipped entirely.
/// assert_eq!(session.eval_line("   ").unwrap(), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Session {
    environment: Environment,
}

impl Session {
    /// Creates a session with a fresh environment.
    #[must_use]
    pub fn new() -> Self {
        Self { environment: Environment::new() }
    }

    /// Creates a session on top of an existing environment.
    #[must_use]
    pub const fn with_environment(environment: Environment) -> Self {
        Self { environment }
    }

    /// Evaluates one line of input.
    ///
    /// # Returns
    /// - `Ok(None)` if the line is blank. Nothing is evaluated and `last` is
    ///   untouched.
    /// - `Ok(Some(value))` otherwise; `value` is also stored under `last`.
    ///
    /// # Errors
    /// Returns the [`ParseError`] that rejected the line. The environment is
    /// left unchanged.
    pub fn eval_line(&mut self, line: &str) -> Result<Option<f64>, ParseError> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        match evaluate(line, &mut self.environment) {
            Ok(value) => {
                self.environment.set(LAST, value);
                Ok(Some(value))
            },
            Err(e) => {
                debug!("rejected line {line:?}: {e} ({:?})", e.kind());
                Err(e)
            },
        }
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Mutable access to the variables, e.g. to predefine constants.
    pub const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Drops every binding and resets `last` to `0.0`.
    pub fn reset(&mut self) {
        self.environment = Environment::new();
    }
}
