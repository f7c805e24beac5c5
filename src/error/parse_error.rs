#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// The parser collects these non-fatally: a statement that fails to parse
/// records its error and parsing resumes at the next statement boundary.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// What the parser expected at this point.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No expression can start with the encountered token.
    NoPrefixRule {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal did not fit into a 64-bit signed integer.
    InvalidInteger {
        /// The raw literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The lexer produced an illegal character sequence.
    IllegalToken {
        /// The offending source text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },

            Self::NoPrefixRule { token, line } => {
                write!(f, "Error on line {line}: No expression may start with {token}.")
            },

            Self::InvalidInteger { literal, line } => {
                write!(f, "Error on line {line}: could not parse {literal} as integer.")
            },

            Self::IllegalToken { literal, line } => {
                write!(f, "Error on line {line}: Illegal character sequence '{literal}'.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
