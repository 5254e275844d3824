//! Phase 2: Value Parser
//!
//! The value parser pulls tokens from the tokenizer one at a time and builds
//! the value tree by recursive descent over the grammar:
//!
//! ```text
//! document := object EOF
//! object   := '{' ( member (',' member)* )? '}'
//! member   := STRING ':' value
//! value    := STRING | INT | FLOAT | BOOLEAN | NULL | array | object
//! array    := '[' ( value (',' value)* )? ']'
//! ```
//!
//! Every rule leaves the last token of what it parsed as the current token;
//! the caller advances past it. The first error aborts the parse.

use tracing::trace;

use crate::error::{ErrorKind, ParseError, Result};
use crate::lexer::{Token, TokenType, Tokenizer};
use crate::options::ParseOptions;
use crate::value::Value;

/// Recursive-descent parser with a single token of lookahead.
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token<'a>,
    trailing_comma: bool,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Create a parser and pull the first token.
    ///
    /// Fails if the very first token is malformed.
    pub fn new(input: &'a [u8], options: ParseOptions) -> Result<Self> {
        let mut tokenizer = Tokenizer::new(input);
        let current = pull(&mut tokenizer)?;
        Ok(Self {
            tokenizer,
            current,
            trailing_comma: false,
            depth: 0,
            options,
        })
    }

    /// Parse a whole document. The root must be an object followed only by
    /// white space.
    pub fn parse(&mut self) -> Result<Value> {
        if self.current.typ != TokenType::LeftBrace {
            return Err(self.unexpected("Expected '{' at the start of the json"));
        }
        let value = self.parse_object()?;

        self.advance()?;
        if self.current.typ != TokenType::EndOfInput {
            return Err(self.unexpected("Unexpected content after document"));
        }
        Ok(value)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = pull(&mut self.tokenizer)?;
        Ok(())
    }

    fn unexpected(&self, message: &str) -> ParseError {
        ParseError::unexpected_token(message, self.current.pos)
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ParseError::new(
                ErrorKind::NestingTooDeep,
                format!("nesting depth exceeds {}", self.options.max_depth),
                self.current.pos,
            ));
        }
        Ok(())
    }

    /// Close a member or element list. The current token is its closing
    /// delimiter.
    fn leave(&mut self) -> Result<()> {
        if self.trailing_comma {
            return Err(ParseError::new(
                ErrorKind::TrailingComma,
                "trailing commas are not supported",
                self.current.pos,
            ));
        }
        self.depth -= 1;
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.advance()?;

        let mut pairs = Vec::new();
        loop {
            match self.current.typ {
                TokenType::RightBrace => break,
                TokenType::EndOfInput => {
                    return Err(ParseError::unterminated(
                        "unterminated object",
                        self.current.pos,
                    ))
                }
                TokenType::String => {}
                _ => return Err(self.unexpected("Expected string for key")),
            }
            self.trailing_comma = false;
            let key = strip_quotes(&self.current.text);

            self.advance()?;
            if self.current.typ != TokenType::Colon {
                return Err(self.unexpected("Expected ':'"));
            }

            self.advance()?;
            let value = self.parse_value()?;
            pairs.push((key, value));

            self.advance()?;
            match self.current.typ {
                TokenType::Comma => {
                    self.advance()?;
                    self.trailing_comma = true;
                }
                TokenType::RightBrace => {}
                TokenType::EndOfInput => {
                    return Err(ParseError::unterminated(
                        "unterminated object",
                        self.current.pos,
                    ))
                }
                _ => return Err(self.unexpected("Expected } or ,")),
            }
        }

        self.leave()?;
        Ok(Value::Object(pairs))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.advance()?;

        let mut items = Vec::new();
        loop {
            match self.current.typ {
                TokenType::RightBracket => break,
                TokenType::EndOfInput => {
                    return Err(ParseError::unterminated(
                        "unterminated array",
                        self.current.pos,
                    ))
                }
                _ => {}
            }
            self.trailing_comma = false;
            items.push(self.parse_value()?);

            self.advance()?;
            match self.current.typ {
                TokenType::Comma => {
                    self.advance()?;
                    self.trailing_comma = true;
                }
                TokenType::RightBracket => {}
                TokenType::EndOfInput => {
                    return Err(ParseError::unterminated(
                        "unterminated array",
                        self.current.pos,
                    ))
                }
                _ => return Err(self.unexpected("Expected ] or ,")),
            }
        }

        self.leave()?;
        Ok(Value::Array(items))
    }

    fn parse_value(&mut self) -> Result<Value> {
        let pos = self.current.pos;
        match self.current.typ {
            TokenType::String => Ok(Value::Str(strip_quotes(&self.current.text))),
            TokenType::IntNumber => self
                .current
                .text
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| ParseError::invalid_literal("expected a number", pos)),
            TokenType::FloatNumber => self
                .current
                .text
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| ParseError::invalid_literal("Expected a number", pos)),
            TokenType::Boolean => match self.current.text.as_ref() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(ParseError::invalid_literal("Expected a boolean", pos)),
            },
            TokenType::Null => match self.current.text.as_ref() {
                "null" => Ok(Value::Null),
                _ => Err(ParseError::invalid_literal("Expected null", pos)),
            },
            TokenType::LeftBracket => self.parse_array(),
            TokenType::LeftBrace => self.parse_object(),
            _ => Err(self.unexpected("Expected value")),
        }
    }
}

/// Pull the next token, turning tokenizer diagnostics into errors.
fn pull<'a>(tokenizer: &mut Tokenizer<'a>) -> Result<Token<'a>> {
    let token = tokenizer.next_token();
    trace!(typ = ?token.typ, pos = token.pos, "token");
    match token.typ {
        TokenType::Invalid(kind) => Err(ParseError::new(kind, token.text, token.pos)),
        _ => Ok(token),
    }
}

/// Drop the enclosing quote bytes of a string token.
fn strip_quotes(text: &str) -> String {
    text[1..text.len() - 1].to_string()
}
