//! Predictive recursive-descent parser over the token stream.
//
//  One production per grammar rule, driven by a single token of lookahead.
//  No backtracking: every JSON value is identified by its first token.

use indexmap::IndexMap;
use log::trace;

use crate::error::SyntaxError;
use crate::lexer::{Lexer, Token};
use crate::value::JsonValue;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    lookahead: Token,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            lookahead: Token::Eof,
        }
    }

    /// Consume the whole token stream and build exactly one root value.
    /// Non-whitespace input after the root is rejected.
    pub fn parse(mut self) -> Result<JsonValue, SyntaxError> {
        self.advance()?;
        let value = self.parse_value()?;
        if self.lookahead != Token::Eof {
            return Err(SyntaxError::TrailingContent(self.lookahead.describe()));
        }
        Ok(value)
    }

    /// Pull the next token into the lookahead slot, `Eof` once exhausted.
    fn advance(&mut self) -> Result<(), SyntaxError> {
        self.lookahead = if self.lexer.has_next() {
            self.lexer.next()?
        } else {
            Token::Eof
        };
        trace!("lookahead: {}", self.lookahead.describe());
        Ok(())
    }

    /// `value := object | array | string | number | boolean | null`
    fn parse_value(&mut self) -> Result<JsonValue, SyntaxError> {
        match std::mem::replace(&mut self.lookahead, Token::Eof) {
            Token::ObjectOpen => self.parse_object(),
            Token::ArrayOpen => self.parse_array(),
            Token::Str(s) => {
                self.advance()?;
                Ok(JsonValue::String(s))
            }
            Token::Integer(n) => {
                self.advance()?;
                Ok(JsonValue::Integer(n))
            }
            Token::Decimal(n) => {
                self.advance()?;
                Ok(JsonValue::Decimal(n))
            }
            Token::Boolean(b) => {
                self.advance()?;
                Ok(JsonValue::Boolean(b))
            }
            Token::Null => {
                self.advance()?;
                Ok(JsonValue::Null)
            }
            tok => Err(SyntaxError::UnexpectedToken {
                expected: "a JSON value",
                found: tok.describe(),
            }),
        }
    }

    /// `object := '{' ( member (',' member)* )? '}'`, `member := string ':' value`
    fn parse_object(&mut self) -> Result<JsonValue, SyntaxError> {
        self.advance()?; // past '{'
        let mut members = IndexMap::new();
        if self.lookahead == Token::ObjectClose {
            self.advance()?;
            return Ok(JsonValue::Object(members));
        }
        loop {
            let key = match std::mem::replace(&mut self.lookahead, Token::Eof) {
                Token::Str(s) => s,
                // only reachable directly after a comma
                Token::ObjectClose => return Err(SyntaxError::TrailingComma),
                Token::Eof => return Err(SyntaxError::UnterminatedObject),
                tok => {
                    return Err(SyntaxError::UnexpectedToken {
                        expected: "a string key",
                        found: tok.describe(),
                    })
                }
            };
            if members.contains_key(&key) {
                return Err(SyntaxError::DuplicateKey(key));
            }
            self.advance()?;

            match &self.lookahead {
                Token::Colon => self.advance()?,
                Token::Eof => return Err(SyntaxError::UnterminatedObject),
                tok => {
                    return Err(SyntaxError::UnexpectedToken {
                        expected: "':'",
                        found: tok.describe(),
                    })
                }
            }

            let value = self.parse_value()?;
            members.insert(key, value);

            match &self.lookahead {
                Token::Comma => self.advance()?,
                Token::ObjectClose => {
                    self.advance()?;
                    return Ok(JsonValue::Object(members));
                }
                Token::Eof => return Err(SyntaxError::UnterminatedObject),
                tok => {
                    return Err(SyntaxError::UnexpectedToken {
                        expected: "',' or '}'",
                        found: tok.describe(),
                    })
                }
            }
        }
    }

    /// `array := '[' ( value (',' value)* )? ']'`
    fn parse_array(&mut self) -> Result<JsonValue, SyntaxError> {
        self.advance()?; // past '['
        let mut elements = Vec::new();
        if self.lookahead == Token::ArrayClose {
            self.advance()?;
            return Ok(JsonValue::Array(elements));
        }
        loop {
            match &self.lookahead {
                // only reachable directly after a comma
                Token::ArrayClose => return Err(SyntaxError::TrailingComma),
                Token::Eof => return Err(SyntaxError::UnterminatedArray),
                _ => {}
            }
            elements.push(self.parse_value()?);

            match &self.lookahead {
                Token::Comma => self.advance()?,
                Token::ArrayClose => {
                    self.advance()?;
                    return Ok(JsonValue::Array(elements));
                }
                Token::Eof => return Err(SyntaxError::UnterminatedArray),
                tok => {
                    return Err(SyntaxError::UnexpectedToken {
                        expected: "',' or ']'",
                        found: tok.describe(),
                    })
                }
            }
        }
    }
}
