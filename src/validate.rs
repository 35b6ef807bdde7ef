use crate::parse::parse_expression;

/// Check that an expression can be parsed.
///
/// Never fails: an invalid expression gives ```false``` and the error message.
pub fn validate(expression: &str) -> (bool, Option<String>) {
    match parse_expression(expression) {
        Ok(_) => (true, None),
        Err(e) => (false, Some(e.to_string())),
    }
}
