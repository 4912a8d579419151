use std::fmt;

/// Failure while turning raw text into tokens. Every variant aborts the
/// current parse; there is no resynchronization.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// Input ended before the closing quote. Carries the decoded prefix.
    UnterminatedString(String),
    /// A keyword-looking run that is not exactly `true`, `false` or `null`.
    InvalidLiteral(String),
    /// A malformed `\` escape or an unpaired `\uXXXX` surrogate.
    InvalidEscape(String),
    /// A number literal violating the JSON grammar (leading zero, bare `-`,
    /// missing digits after `.` or an exponent marker).
    InvalidNumber(String),
    /// A byte no token can start with.
    UnexpectedCharacter(char, usize),
    /// `next()` called after the input was exhausted.
    EndOfInput,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnterminatedString(s) => write!(f, "unterminated string: {s}"),
            LexError::InvalidLiteral(s) => write!(f, "invalid literal: '{s}'"),
            LexError::InvalidEscape(s) => write!(f, "invalid escape sequence: '{s}'"),
            LexError::InvalidNumber(s) => write!(f, "invalid number: '{s}'"),
            LexError::UnexpectedCharacter(c, pos) => {
                write!(f, "unexpected character '{c}' at byte {pos}")
            }
            LexError::EndOfInput => f.write_str("unexpected end of input"),
        }
    }
}

impl std::error::Error for LexError {}

/// Structural grammar violation found by the parser, or a lexing failure
/// surfaced through it. Fatal to the `parse()` call that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxError {
    /// The lookahead token does not fit the production being parsed.
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    /// Input ended while an object was still open.
    UnterminatedObject,
    /// Input ended while an array was still open.
    UnterminatedArray,
    /// A comma directly before `}` or `]`.
    TrailingComma,
    /// Non-whitespace input after the root value.
    TrailingContent(String),
    /// The same member key twice within one object.
    DuplicateKey(String),
    Lex(LexError),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            SyntaxError::UnterminatedObject => f.write_str("unterminated object, expected '}'"),
            SyntaxError::UnterminatedArray => f.write_str("unterminated array, expected ']'"),
            SyntaxError::TrailingComma => f.write_str("trailing comma before closing delimiter"),
            SyntaxError::TrailingContent(found) => {
                write!(f, "unexpected trailing content after value: {found}")
            }
            SyntaxError::DuplicateKey(key) => write!(f, "duplicate object key: \"{key}\""),
            SyntaxError::Lex(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyntaxError::Lex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for SyntaxError {
    fn from(e: LexError) -> Self {
        SyntaxError::Lex(e)
    }
}
