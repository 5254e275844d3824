//! Error types for JSON parsing.

use std::fmt;

use thiserror::Error;

/// Result type for jpar parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Classification of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The grammar required one token kind and found another.
    UnexpectedToken,
    /// A string, object, or array never reached its closing delimiter.
    UnterminatedLiteral,
    /// A number, boolean, null, or string span is malformed.
    InvalidLiteral,
    /// A byte matched no tokenizer rule.
    UnexpectedCharacter,
    /// A member or element list ended with a dangling comma.
    TrailingComma,
    /// Containers nested deeper than the configured limit.
    NestingTooDeep,
}

impl ErrorKind {
    /// Short stable name, used in logs and fixture listings.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::UnexpectedToken => "unexpected token",
            ErrorKind::UnterminatedLiteral => "unterminated literal",
            ErrorKind::InvalidLiteral => "invalid literal",
            ErrorKind::UnexpectedCharacter => "unexpected character",
            ErrorKind::TrailingComma => "trailing comma",
            ErrorKind::NestingTooDeep => "nesting too deep",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for JSON parsing.
///
/// Every error carries the zero-based byte offset into the input where the
/// offending token or character starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("JSON parse error at position {position}: {message}")]
pub struct ParseError {
    kind: ErrorKind,
    message: String,
    position: usize,
}

impl ParseError {
    /// Create an error of the given kind at a byte position.
    pub fn new(kind: ErrorKind, message: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
        }
    }

    pub(crate) fn unexpected_token(message: impl Into<String>, position: usize) -> Self {
        Self::new(ErrorKind::UnexpectedToken, message, position)
    }

    pub(crate) fn unterminated(message: impl Into<String>, position: usize) -> Self {
        Self::new(ErrorKind::UnterminatedLiteral, message, position)
    }

    pub(crate) fn invalid_literal(message: impl Into<String>, position: usize) -> Self {
        Self::new(ErrorKind::InvalidLiteral, message, position)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let err = ParseError::new(ErrorKind::UnexpectedToken, "Expected ':'", 7);
        assert_eq!(
            err.to_string(),
            "JSON parse error at position 7: Expected ':'"
        );
    }

    #[test]
    fn test_accessors() {
        let err = ParseError::unterminated("Unterminated string", 3);
        assert_eq!(err.kind(), ErrorKind::UnterminatedLiteral);
        assert_eq!(err.message(), "Unterminated string");
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::TrailingComma.to_string(), "trailing comma");
        assert_eq!(ErrorKind::NestingTooDeep.to_string(), "nesting too deep");
    }
}
