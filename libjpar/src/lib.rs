//! Strict JSON object parser.
//!
//! Converts raw JSON text into a [`Value`] tree, reporting the first error
//! with its byte offset. The document root must be an object.
//!
//! # Parsing Pipeline
//!
//! The parser operates in two phases, interleaved token by token:
//!
//! 1. **Tokenizer**: Scans raw bytes into positioned tokens, validating
//!    number, boolean, and null spellings and catching unterminated strings.
//!
//! 2. **Value Parser**: Pulls tokens one at a time and builds the value tree
//!    by recursive descent, enforcing the grammar, the trailing-comma policy,
//!    and the nesting depth limit.
//!
//! Strings are kept as written: quotes are stripped, escape sequences are
//! not decoded. Object members keep document order, duplicates included.

mod encode;
mod error;
mod lexer;
mod options;
mod parser;
mod value;

use tracing::debug;

pub use encode::{encode, Format};
pub use error::{ErrorKind, ParseError, Result};
pub use lexer::{Token, TokenType, Tokenizer};
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use parser::Parser;
pub use value::Value;

/// Parse a JSON document with the default options.
///
/// # Example
///
/// ```
/// use libjpar::{parse, Value};
///
/// let value = parse(br#"{"answer": 42}"#).unwrap();
/// assert_eq!(value.get("answer"), Some(&Value::Int(42)));
/// ```
pub fn parse(input: &[u8]) -> Result<Value> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parse a JSON document with explicit options.
pub fn parse_with_options(input: &[u8], options: &ParseOptions) -> Result<Value> {
    debug!(len = input.len(), max_depth = options.max_depth, "parsing");

    let result = Parser::new(input, *options).and_then(|mut parser| parser.parse());

    match &result {
        Ok(_) => debug!("parsed"),
        Err(e) => debug!(kind = %e.kind(), position = e.position(), "parse failed"),
    }
    result
}
