//! Reads UTF-8 JSON text into a fully materialized, strongly typed tree.
//!
//! The pipeline is `Lexer` → `Parser` → [`JsonValue`], consumed through the
//! [`JsonVisitor`] contract; [`PrettyPrinter`] is the bundled reference
//! visitor. Numbers keep arbitrary precision: integer literals become
//! `BigInt`, literals with a fraction or exponent become `BigDecimal` parsed
//! straight from the source text.

mod error;
mod lexer;
mod parser;
mod value;
mod visitor;

pub use error::{LexError, SyntaxError};
pub use lexer::{Lexer, Token};
pub use parser::Parser;
pub use value::{JsonKey, JsonValue};
pub use visitor::{JsonVisitor, PrettyPrinter};

/// Parse one JSON document into a [`JsonValue`], or fail with the first
/// lexical or structural error.
///
/// ```
/// let tree = jsonast::parse(r#"{"ok": true}"#).unwrap();
/// assert_eq!(tree["ok"].as_bool(), Some(true));
/// ```
pub fn parse(input: &str) -> Result<JsonValue, SyntaxError> {
    Parser::new(Lexer::new(input)).parse()
}
