use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
///
/// The parser never aborts: it records one of these per problem and keeps
/// going, so a single pass can report several mistakes. Every variant carries
/// the line and column of the offending token.
pub enum ParseError {
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// The kind the parser expected.
        expected: TokenKind,
        /// The kind it found instead.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// No expression can start with this token.
    NoPrefixFn {
        /// The kind that cannot begin an expression.
        found:  TokenKind,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A numeric literal without `.` that does not fit in an integer.
    InvalidInteger {
        /// The offending lexeme.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// A numeric literal with `.` that is not a valid decimal.
    InvalidFloat {
        /// The offending lexeme.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    column, } => {
                write!(f,
                       "línea {line}, columna {column}: se esperaba token {expected}, se obtuvo {found}")
            },
            Self::NoPrefixFn { found, line, column } => {
                write!(f,
                       "línea {line}, columna {column}: no hay función de análisis de prefijo para {found}")
            },
            Self::InvalidInteger { literal, line, column } => {
                write!(f,
                       "línea {line}, columna {column}: no se pudo analizar \"{literal}\" como entero")
            },
            Self::InvalidFloat { literal, line, column } => {
                write!(f,
                       "línea {line}, columna {column}: no se pudo analizar \"{literal}\" como número decimal")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// The full list of problems found in one parse, as a single error value.
///
/// Useful at API boundaries where one `Err` must stand for the whole batch;
/// the driver prints the individual entries instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
