//! Scans raw JSON text into tokens on demand.
//
//  The lexer holds the whole input and a monotonically advancing byte
//  cursor; it never rewinds. String and number payloads are decoded
//  eagerly, so a token is self-contained once returned.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::error::LexError;

/// One lexical unit, tagged with its kind and carrying any decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    ObjectOpen,
    ObjectClose,
    ArrayOpen,
    ArrayClose,
    Colon,
    Comma,
    Str(String),
    Integer(BigInt),
    Decimal(BigDecimal),
    Boolean(bool),
    Null,
    Eof,
}

impl Token {
    /// Human-readable rendering for syntax error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::ObjectOpen => "'{'".to_string(),
            Token::ObjectClose => "'}'".to_string(),
            Token::ArrayOpen => "'['".to_string(),
            Token::ArrayClose => "']'".to_string(),
            Token::Colon => "':'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Str(s) => format!("string \"{s}\""),
            Token::Integer(n) => format!("number {n}"),
            Token::Decimal(n) => format!("number {n}"),
            Token::Boolean(b) => format!("'{b}'"),
            Token::Null => "'null'".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize, // byte offset of the next unconsumed input
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    /// True iff a token other than `Eof` remains.
    pub fn has_next(&mut self) -> bool {
        self.skip_whitespace();
        self.pos < self.bytes.len()
    }

    /// Advance past the next token and return it.
    pub fn next(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let Some(&b) = self.bytes.get(self.pos) else {
            return Err(LexError::EndOfInput);
        };
        match b {
            b'{' => self.single(Token::ObjectOpen),
            b'}' => self.single(Token::ObjectClose),
            b'[' => self.single(Token::ArrayOpen),
            b']' => self.single(Token::ArrayClose),
            b':' => self.single(Token::Colon),
            b',' => self.single(Token::Comma),
            b'"' => self.lex_string(),
            b'-' | b'0'..=b'9' => self.lex_number(),
            b't' | b'f' | b'n' => self.lex_keyword(),
            _ => {
                // Report the whole character, not just its first byte.
                let ch = self.src[self.pos..].chars().next().unwrap_or('\u{FFFD}');
                Err(LexError::UnexpectedCharacter(ch, self.pos))
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(
            self.bytes.get(self.pos),
            Some(b' ' | b'\t' | b'\n' | b'\r')
        ) {
            self.pos += 1;
        }
    }

    #[inline]
    fn single(&mut self, tok: Token) -> Result<Token, LexError> {
        self.pos += 1;
        Ok(tok)
    }

    /// Decode a string literal, resolving escapes. Unescaped bytes are
    /// copied over in chunks; `"` and `\` are ASCII, so scanning bytewise
    /// never splits a multi-byte character.
    fn lex_string(&mut self) -> Result<Token, LexError> {
        self.pos += 1; // opening quote
        let mut out = String::new();
        let mut chunk = self.pos;
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'"' => {
                    out.push_str(&self.src[chunk..self.pos]);
                    self.pos += 1;
                    return Ok(Token::Str(out));
                }
                b'\\' => {
                    out.push_str(&self.src[chunk..self.pos]);
                    self.pos += 1;
                    if self.pos >= self.bytes.len() {
                        return Err(LexError::UnterminatedString(out));
                    }
                    out.push(self.decode_escape()?);
                    chunk = self.pos;
                }
                _ => self.pos += 1,
            }
        }
        out.push_str(&self.src[chunk..self.pos]);
        Err(LexError::UnterminatedString(out))
    }

    /// Cursor sits on the byte after `\`.
    fn decode_escape(&mut self) -> Result<char, LexError> {
        let b = self.bytes[self.pos];
        self.pos += 1;
        Ok(match b {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{0008}',
            b'f' => '\u{000C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => return self.decode_unicode_escape(),
            other => return Err(LexError::InvalidEscape(format!("\\{}", other as char))),
        })
    }

    /// `\uXXXX`, combining surrogate pairs into a single code point.
    fn decode_unicode_escape(&mut self) -> Result<char, LexError> {
        let hi = self.hex4()?;
        if (0xDC00..=0xDFFF).contains(&hi) {
            // low surrogate with no preceding high surrogate
            return Err(LexError::InvalidEscape(format!("\\u{hi:04X}")));
        }
        if (0xD800..=0xDBFF).contains(&hi) {
            if self.bytes.get(self.pos) != Some(&b'\\') || self.bytes.get(self.pos + 1) != Some(&b'u')
            {
                return Err(LexError::InvalidEscape(format!("\\u{hi:04X}")));
            }
            self.pos += 2;
            let lo = self.hex4()?;
            if !(0xDC00..=0xDFFF).contains(&lo) {
                return Err(LexError::InvalidEscape(format!("\\u{hi:04X}\\u{lo:04X}")));
            }
            let cp = 0x10000 + ((u32::from(hi) - 0xD800) << 10) + (u32::from(lo) - 0xDC00);
            return char::from_u32(cp)
                .ok_or_else(|| LexError::InvalidEscape(format!("\\u{hi:04X}\\u{lo:04X}")));
        }
        char::from_u32(u32::from(hi)).ok_or_else(|| LexError::InvalidEscape(format!("\\u{hi:04X}")))
    }

    fn hex4(&mut self) -> Result<u16, LexError> {
        let digits = self
            .src
            .get(self.pos..self.pos + 4)
            .ok_or_else(|| LexError::InvalidEscape("\\u".to_string()))?;
        // from_str_radix tolerates a leading '+'; the grammar does not
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(LexError::InvalidEscape(format!("\\u{digits}")));
        }
        let unit = u16::from_str_radix(digits, 16)
            .map_err(|_| LexError::InvalidEscape(format!("\\u{digits}")))?;
        self.pos += 4;
        Ok(unit)
    }

    /// Integer part, optional fraction, optional exponent. The payload is
    /// built from the literal text so no precision is lost on the way in.
    fn lex_number(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        if self.bytes.get(self.pos) == Some(&b'-') {
            self.pos += 1;
        }
        match self.bytes.get(self.pos) {
            Some(b'0') => {
                self.pos += 1;
                if matches!(self.bytes.get(self.pos), Some(b'0'..=b'9')) {
                    // leading zero; consume the rest for the error message
                    self.take_digits();
                    return Err(LexError::InvalidNumber(self.src[start..self.pos].to_string()));
                }
            }
            Some(b'1'..=b'9') => {
                self.take_digits();
            }
            _ => return Err(LexError::InvalidNumber(self.src[start..self.pos].to_string())),
        }

        let mut is_decimal = false;
        if self.bytes.get(self.pos) == Some(&b'.') {
            is_decimal = true;
            self.pos += 1;
            if !self.take_digits() {
                return Err(LexError::InvalidNumber(self.src[start..self.pos].to_string()));
            }
        }
        if matches!(self.bytes.get(self.pos), Some(b'e' | b'E')) {
            is_decimal = true;
            self.pos += 1;
            if matches!(self.bytes.get(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if !self.take_digits() {
                return Err(LexError::InvalidNumber(self.src[start..self.pos].to_string()));
            }
        }

        let text = &self.src[start..self.pos];
        if is_decimal {
            BigDecimal::from_str(text)
                .map(Token::Decimal)
                .map_err(|_| LexError::InvalidNumber(text.to_string()))
        } else {
            text.parse::<BigInt>()
                .map(Token::Integer)
                .map_err(|_| LexError::InvalidNumber(text.to_string()))
        }
    }

    fn take_digits(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.bytes.get(self.pos), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn lex_keyword(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        while matches!(self.bytes.get(self.pos), Some(b'a'..=b'z' | b'A'..=b'Z')) {
            self.pos += 1;
        }
        match &self.src[start..self.pos] {
            "true" => Ok(Token::Boolean(true)),
            "false" => Ok(Token::Boolean(false)),
            "null" => Ok(Token::Null),
            other => Err(LexError::InvalidLiteral(other.to_string())),
        }
    }
}
