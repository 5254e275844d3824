//! Phase 1: Tokenizer
//!
//! The tokenizer segments raw input bytes into positioned tokens, one per
//! call to [`Tokenizer::next_token`]. It performs:
//! - Whitespace skipping (any Unicode white space)
//! - Punctuation recognition (`{ } [ ] : ,`)
//! - String span capture (quotes kept, no escape decoding)
//! - Number, boolean, and null spelling validation
//!
//! Malformed input never aborts the scan. It produces a
//! [`TokenType::Invalid`] token carrying the diagnostic and the kind of
//! error the parser should report.

use std::borrow::Cow;

use crate::error::ErrorKind;

/// Token type in the tokenizer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
    /// Quoted string, delimiters included in the text.
    String,
    IntNumber,
    /// Number containing a fraction or exponent.
    FloatNumber,
    Boolean,
    Null,
    /// Input exhausted. Returned repeatedly once reached.
    EndOfInput,
    /// Malformed input; the token text holds the diagnostic.
    Invalid(ErrorKind),
}

/// A single token in the token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub typ: TokenType,
    pub text: Cow<'a, str>,
    /// Byte offset of the first character, or the input length for
    /// `EndOfInput`.
    pub pos: usize,
}

impl<'a> Token<'a> {
    fn new(typ: TokenType, text: impl Into<Cow<'a, str>>, pos: usize) -> Self {
        Self {
            typ,
            text: text.into(),
            pos,
        }
    }

    fn invalid(kind: ErrorKind, message: impl Into<Cow<'a, str>>, pos: usize) -> Self {
        Self::new(TokenType::Invalid(kind), message, pos)
    }

    /// Returns `true` for `EndOfInput` and `Invalid` tokens.
    pub fn is_terminal(&self) -> bool {
        matches!(self.typ, TokenType::EndOfInput | TokenType::Invalid(_))
    }
}

/// Pull-based tokenizer over a fully materialized byte buffer.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            finished: false,
        }
    }

    /// Current cursor offset into the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Scan and return the next token.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        let Some(&byte) = self.input.get(self.pos) else {
            return Token::new(TokenType::EndOfInput, "", self.input.len());
        };

        match byte {
            b'{' => self.punctuation(TokenType::LeftBrace, "{"),
            b'}' => self.punctuation(TokenType::RightBrace, "}"),
            b'[' => self.punctuation(TokenType::LeftBracket, "["),
            b']' => self.punctuation(TokenType::RightBracket, "]"),
            b':' => self.punctuation(TokenType::Colon, ":"),
            b',' => self.punctuation(TokenType::Comma, ","),
            b'"' => self.read_string(),
            b'0'..=b'9' | b'-' => self.read_number(),
            b't' | b'f' => self.read_boolean(),
            b'n' => self.read_null(),
            _ => self.unexpected_char(),
        }
    }

    fn punctuation(&mut self, typ: TokenType, text: &'static str) -> Token<'a> {
        let start = self.pos;
        self.pos += 1;
        Token::new(typ, text, start)
    }

    fn skip_whitespace(&mut self) {
        while let Some(len) = whitespace_len(&self.input[self.pos..]) {
            self.pos += len;
        }
    }

    /// Advance past a number or keyword span, stopping at the first
    /// delimiter or at end of input.
    fn scan_literal(&mut self) -> &'a [u8] {
        let start = self.pos;
        while self.pos < self.input.len() && !is_delimiter(&self.input[self.pos..]) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn read_string(&mut self) -> Token<'a> {
        let start = self.pos;
        let body = &self.input[start + 1..];

        let Some(offset) = body.iter().position(|&b| b == b'"') else {
            self.pos = self.input.len();
            return Token::invalid(ErrorKind::UnterminatedLiteral, "Unterminated string", start);
        };

        // Opening quote, body, closing quote.
        self.pos = start + offset + 2;
        match std::str::from_utf8(&self.input[start..self.pos]) {
            Ok(text) => Token::new(TokenType::String, text, start),
            Err(_) => Token::invalid(ErrorKind::InvalidLiteral, "Invalid UTF-8 in string", start),
        }
    }

    fn read_number(&mut self) -> Token<'a> {
        let start = self.pos;
        let span = self.scan_literal();

        let typ = if span.iter().any(|b| matches!(b, b'.' | b'e' | b'E')) {
            TokenType::FloatNumber
        } else {
            TokenType::IntNumber
        };

        match std::str::from_utf8(span) {
            Ok(text) if is_number_text(text) => Token::new(typ, text, start),
            _ => Token::invalid(ErrorKind::InvalidLiteral, "Invalid number", start),
        }
    }

    fn read_boolean(&mut self) -> Token<'a> {
        let start = self.pos;
        match self.scan_literal() {
            b"true" => Token::new(TokenType::Boolean, "true", start),
            b"false" => Token::new(TokenType::Boolean, "false", start),
            _ => Token::invalid(ErrorKind::InvalidLiteral, "Expected boolean", start),
        }
    }

    fn read_null(&mut self) -> Token<'a> {
        let start = self.pos;
        match self.scan_literal() {
            b"null" => Token::new(TokenType::Null, "null", start),
            _ => Token::invalid(ErrorKind::InvalidLiteral, "Expected null", start),
        }
    }

    fn unexpected_char(&mut self) -> Token<'a> {
        let start = self.pos;
        let rest = &self.input[start..];
        let message = match decode_char(rest) {
            Some(ch) => {
                self.pos += ch.len_utf8();
                if ch.is_control() {
                    format!("Unexpected char: \\x{:02X}", ch as u32)
                } else {
                    format!("Unexpected char: {}", ch)
                }
            }
            None => {
                self.pos += 1;
                format!("Unexpected char: \\x{:02X}", rest[0])
            }
        };
        Token::invalid(ErrorKind::UnexpectedCharacter, message, start)
    }
}

/// Yields every token up to and including the first `EndOfInput` or
/// `Invalid` token.
impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_terminal();
        Some(token)
    }
}

/// Decode the first UTF-8 character of `rest`, if it is well formed.
fn decode_char(rest: &[u8]) -> Option<char> {
    let prefix = &rest[..rest.len().min(4)];
    let valid = match std::str::from_utf8(prefix) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&prefix[..e.valid_up_to()]).ok()?,
    };
    valid.chars().next()
}

/// Byte length of the white space character at the start of `rest`.
fn whitespace_len(rest: &[u8]) -> Option<usize> {
    let &first = rest.first()?;
    if first.is_ascii() {
        return (first as char).is_whitespace().then_some(1);
    }
    let ch = decode_char(rest)?;
    ch.is_whitespace().then(|| ch.len_utf8())
}

/// Whether the byte at the start of `rest` ends a number or keyword.
fn is_delimiter(rest: &[u8]) -> bool {
    match rest.first() {
        Some(b'{' | b'}' | b'[' | b']' | b':' | b',' | b'"') => true,
        Some(_) => whitespace_len(rest).is_some(),
        None => true,
    }
}

/// Number spans may only use JSON number characters; this keeps spellings
/// like `-inf` or `-nan` that `f64::from_str` accepts out of the grammar.
fn is_number_text(text: &str) -> bool {
    text.bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E'))
        && text.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenType> {
        Tokenizer::new(input.as_bytes()).map(|t| t.typ).collect()
    }

    fn single(input: &str) -> Token<'_> {
        Tokenizer::new(input.as_bytes()).next_token()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("{}[]:,"),
            vec![
                TokenType::LeftBrace,
                TokenType::RightBrace,
                TokenType::LeftBracket,
                TokenType::RightBracket,
                TokenType::Colon,
                TokenType::Comma,
                TokenType::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens: Vec<Token> = Tokenizer::new(b"  { \"a\" : 1 }").collect();
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![2, 4, 8, 10, 12, 13]);
    }

    #[test]
    fn test_end_of_input_is_repeated() {
        let mut tokenizer = Tokenizer::new(b"{");
        assert_eq!(tokenizer.next_token().typ, TokenType::LeftBrace);
        for _ in 0..3 {
            let token = tokenizer.next_token();
            assert_eq!(token.typ, TokenType::EndOfInput);
            assert_eq!(token.pos, 1);
        }
    }

    #[test]
    fn test_empty_input() {
        let token = single("");
        assert_eq!(token.typ, TokenType::EndOfInput);
        assert_eq!(token.pos, 0);
    }

    #[test]
    fn test_string_keeps_quotes() {
        let token = single("\"hello world\"");
        assert_eq!(token.typ, TokenType::String);
        assert_eq!(token.text, "\"hello world\"");
        assert_eq!(token.pos, 0);
    }

    #[test]
    fn test_string_escapes_are_raw() {
        let token = single(r#""a\nb""#);
        assert_eq!(token.text, r#""a\nb""#);
    }

    #[test]
    fn test_unterminated_string() {
        let token = single("  \"abc");
        assert_eq!(
            token.typ,
            TokenType::Invalid(ErrorKind::UnterminatedLiteral)
        );
        assert_eq!(token.text, "Unterminated string");
        assert_eq!(token.pos, 2);
    }

    #[test]
    fn test_string_invalid_utf8() {
        let token = Tokenizer::new(b"\"\xff\"").next_token();
        assert_eq!(token.typ, TokenType::Invalid(ErrorKind::InvalidLiteral));
        assert_eq!(token.pos, 0);
    }

    #[test]
    fn test_integer_and_float() {
        let token = single("-42");
        assert_eq!(token.typ, TokenType::IntNumber);
        assert_eq!(token.text, "-42");

        let token = single("1.5");
        assert_eq!(token.typ, TokenType::FloatNumber);
        assert_eq!(token.text, "1.5");

        let token = single("2e10");
        assert_eq!(token.typ, TokenType::FloatNumber);
    }

    #[test]
    fn test_number_stops_at_bracket_and_space() {
        assert_eq!(
            kinds("[1, 2]"),
            vec![
                TokenType::LeftBracket,
                TokenType::IntNumber,
                TokenType::Comma,
                TokenType::IntNumber,
                TokenType::RightBracket,
                TokenType::EndOfInput,
            ]
        );
        let tokens: Vec<Token> = Tokenizer::new(b"1 }").collect();
        assert_eq!(tokens[0].text, "1");
        assert_eq!(tokens[1].typ, TokenType::RightBrace);
    }

    #[test]
    fn test_invalid_number() {
        for input in ["1.2.3", "-", "12abc", "-inf", "1-"] {
            let token = single(input);
            assert_eq!(
                token.typ,
                TokenType::Invalid(ErrorKind::InvalidLiteral),
                "input {:?}",
                input
            );
            assert_eq!(token.text, "Invalid number");
            assert_eq!(token.pos, 0);
        }
    }

    #[test]
    fn test_keywords() {
        assert_eq!(single("true").typ, TokenType::Boolean);
        assert_eq!(single("false").typ, TokenType::Boolean);
        assert_eq!(single("null").typ, TokenType::Null);
        assert_eq!(single("null\n").text, "null");
    }

    #[test]
    fn test_invalid_keywords() {
        let token = single("tru");
        assert_eq!(token.typ, TokenType::Invalid(ErrorKind::InvalidLiteral));
        assert_eq!(token.text, "Expected boolean");

        let token = single("falsey");
        assert_eq!(token.text, "Expected boolean");

        let token = single("nil");
        assert_eq!(token.text, "Expected null");
    }

    #[test]
    fn test_keyword_before_bracket() {
        assert_eq!(
            kinds("[true]"),
            vec![
                TokenType::LeftBracket,
                TokenType::Boolean,
                TokenType::RightBracket,
                TokenType::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_unexpected_char() {
        let token = single("  @");
        assert_eq!(
            token.typ,
            TokenType::Invalid(ErrorKind::UnexpectedCharacter)
        );
        assert_eq!(token.text, "Unexpected char: @");
        assert_eq!(token.pos, 2);
    }

    #[test]
    fn test_unexpected_multibyte_char() {
        let token = single("é");
        assert_eq!(token.text, "Unexpected char: é");

        let token = Tokenizer::new(b"\xff").next_token();
        assert_eq!(token.text, "Unexpected char: \\xFF");
    }

    #[test]
    fn test_unexpected_control_char_is_escaped() {
        let mut tokenizer = Tokenizer::new(b"{}\0");
        tokenizer.next_token();
        tokenizer.next_token();
        assert_eq!(tokenizer.position(), 2);

        let token = tokenizer.next_token();
        assert_eq!(token.typ, TokenType::Invalid(ErrorKind::UnexpectedCharacter));
        assert_eq!(token.text, "Unexpected char: \\x00");
        assert_eq!(token.pos, 2);
        assert_eq!(tokenizer.position(), 3);
    }

    #[test]
    fn test_unicode_whitespace_is_skipped() {
        // NO-BREAK SPACE and IDEOGRAPHIC SPACE
        let token = single("\u{a0}\u{3000}{");
        assert_eq!(token.typ, TokenType::LeftBrace);
        assert_eq!(token.pos, 5);
    }

    #[test]
    fn test_iterator_stops_after_invalid() {
        let tokens: Vec<Token> = Tokenizer::new(b"{ @ }").collect();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].is_terminal());
    }
}
