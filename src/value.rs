use std::fmt;
use std::ops::Index;

use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use num_bigint::BigInt;

use crate::visitor::JsonVisitor;

/// A parsed JSON value. Object members keep their source order; every child
/// is exclusively owned by its container, so a tree is freed when its root
/// goes out of scope.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Object(IndexMap<String, JsonValue>),
    Array(Vec<JsonValue>),
    String(String),
    Integer(BigInt),
    Decimal(BigDecimal),
    Boolean(bool),
    Null,
}

impl JsonValue {
    /// Dispatch to the visitor method matching this value's variant.
    /// Container visitors drive recursion through `accept` on each child,
    /// yielding a pre-order, depth-first traversal.
    pub fn accept<V: JsonVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            JsonValue::Object(members) => visitor.visit_object(members),
            JsonValue::Array(elements) => visitor.visit_array(elements),
            JsonValue::String(s) => visitor.visit_string(s),
            JsonValue::Integer(n) => visitor.visit_integer(n),
            JsonValue::Decimal(n) => visitor.visit_decimal(n),
            JsonValue::Boolean(b) => visitor.visit_boolean(*b),
            JsonValue::Null => visitor.visit_null(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, JsonValue>> {
        match self {
            JsonValue::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            JsonValue::Integer(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<&BigDecimal> {
        match self {
            JsonValue::Decimal(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }
}

/// Re-encode a decoded string as a JSON literal: the inverse of the lexer's
/// escape resolution. Quotes, backslashes and control characters are escaped;
/// everything else passes through as UTF-8.
pub(crate) fn push_escaped(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Compact single-line rendering.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Object(members) => {
                f.write_str("{")?;
                let mut first = true;
                for (key, value) in members {
                    if !first {
                        f.write_str(", ")?;
                    }
                    let mut quoted = String::new();
                    push_escaped(&mut quoted, key);
                    write!(f, "{quoted}: {value}")?;
                    first = false;
                }
                f.write_str("}")
            }
            JsonValue::Array(elements) => {
                f.write_str("[")?;
                let mut first = true;
                for value in elements {
                    if !first {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                    first = false;
                }
                f.write_str("]")
            }
            JsonValue::String(s) => {
                let mut quoted = String::new();
                push_escaped(&mut quoted, s);
                f.write_str(&quoted)
            }
            JsonValue::Integer(n) => write!(f, "{n}"),
            JsonValue::Decimal(n) => write!(f, "{n}"),
            JsonValue::Boolean(b) => write!(f, "{b}"),
            JsonValue::Null => f.write_str("null"),
        }
    }
}

/// Anything that can address a child inside a `JsonValue`.
///
/// * `&str`  → object key
/// * `usize` → array index
pub trait JsonKey {
    fn at(self, parent: &JsonValue) -> Option<&JsonValue>;
}

impl JsonKey for &str {
    fn at(self, parent: &JsonValue) -> Option<&JsonValue> {
        match parent {
            JsonValue::Object(members) => members.get(self),
            _ => None,
        }
    }
}

impl JsonKey for usize {
    fn at(self, parent: &JsonValue) -> Option<&JsonValue> {
        match parent {
            JsonValue::Array(elements) => elements.get(self),
            _ => None,
        }
    }
}

impl JsonValue {
    /// Borrow a child value by object key or array index.
    pub fn get<K: JsonKey>(&self, key: K) -> Option<&JsonValue> {
        key.at(self)
    }
}

impl Index<&str> for JsonValue {
    type Output = JsonValue;
    fn index(&self, key: &str) -> &Self::Output {
        self.get(key).expect("object key not found")
    }
}

impl Index<usize> for JsonValue {
    type Output = JsonValue;
    fn index(&self, idx: usize) -> &Self::Output {
        self.get(idx).expect("array index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    #[test]
    fn keyed_and_indexed_access() {
        let value = JsonValue::Object(indexmap! {
            "items".to_string() => JsonValue::Array(vec![
                JsonValue::Integer(BigInt::from(1)),
                JsonValue::Boolean(true),
            ]),
        });
        assert_eq!(value["items"][1].as_bool(), Some(true));
        assert_eq!(value.get("missing"), None);
        assert_eq!(value.get(0), None);
    }

    #[test]
    fn display_is_compact() {
        let value = JsonValue::Object(indexmap! {
            "a".to_string() => JsonValue::Integer(BigInt::from(1)),
            "b".to_string() => JsonValue::Array(vec![
                JsonValue::String("x\"y".to_string()),
                JsonValue::Null,
            ]),
        });
        assert_eq!(value.to_string(), r#"{"a": 1, "b": ["x\"y", null]}"#);
    }

    #[test]
    fn object_members_keep_insertion_order() {
        let value = JsonValue::Object(indexmap! {
            "zebra".to_string() => JsonValue::Null,
            "apple".to_string() => JsonValue::Null,
            "mango".to_string() => JsonValue::Null,
        });
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }
}
