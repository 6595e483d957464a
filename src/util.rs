/// Result formatting helpers.
///
/// Renders evaluated values the way the command line prints them: a fixed
/// number of digits after the decimal point, with IEEE-754 special values
/// passed through as `inf`, `-inf` and `NaN`.
pub mod format;
