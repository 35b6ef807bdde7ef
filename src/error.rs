use thiserror::Error;

/// An unexpected character found while splitting an expression into tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid character '{character}' at position {position}")]
pub struct LexError {
    /// The offending character
    pub character: char,
    /// 1-based character offset in the source text
    pub position: usize,
}

/// A token stream which does not follow the expression grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Expected {expected} but received {actual} at position {position}")]
pub struct ParseError {
    /// What the parser was looking for
    pub expected: String,
    /// The kind of token actually found
    pub actual: String,
    /// 1-based index of the offending token
    pub position: usize,
}

/// Errors raised while building or analysing Boolean functions.
#[derive(Error, Debug)]
pub enum BoolFnError {
    /// The expression contains a character outside of the grammar
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The tokens do not form a valid expression
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The variable is not part of the function
    #[error("The variable {variable} is not part of the function")]
    InvalidArgument { variable: String },

    /// The assignment does not give a value to a variable used by the expression
    #[error("No value assigned to variable '{0}'")]
    UnboundVariable(String),

    /// The text is not a valid minimized expression
    #[error("Not a valid minimized expression: {0}")]
    InvalidExpression(String),

    /// Export of the serialization view failed
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
