mod error;
mod grammar;

pub use error::ParseError;

use crate::Condition;

/// Parse a condition string strictly.
///
/// Accepts the literal `true` or `<field> <op> <integer>`, where `field` is
/// `freshness` (alias `expiresIn`) or `value` (alias `benefit`) and `op` is
/// one of `== != < > <= >=`. Whitespace around tokens is ignored.
///
/// # Errors
///
/// Returns [`ParseError`] if the input does not fit the grammar.
pub fn parse_condition(input: &str) -> Result<Condition, ParseError> {
    use winnow::Parser;
    grammar::condition
        .parse(input)
        .map_err(|e| ParseError::new(input, e.to_string()))
}
