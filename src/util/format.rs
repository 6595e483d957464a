/// Number of digits printed after the decimal point.
pub const PRECISION: usize = 5;

/// Text printed in place of a result when a line is rejected.
pub const ERROR_MARKER: &str = "ERROR";

/// Formats a result with [`PRECISION`] digits after the decimal point.
///
/// ## Example
/// ```
/// use calc::util::format::format_result;
///
/// assert_eq!(format_result(14.0), "14.00000");
/// assert_eq!(format_result(-1.0 / 3.0), "-0.33333");
/// assert_eq!(format_result(f64::INFINITY), "inf");
/// assert_eq!(format_result(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    format!("{value:.prec$}", prec = PRECISION)
}

/// Formats the outcome of one line: the value, or [`ERROR_MARKER`].
#[must_use]
pub fn format_outcome<E>(outcome: &Result<f64, E>) -> String {
    match outcome {
        Ok(value) => format_result(*value),
        Err(_) => ERROR_MARKER.to_string(),
    }
}
