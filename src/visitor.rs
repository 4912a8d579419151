//! Traversal contract for consuming a parsed tree, and the pretty-printer
//! that is its reference implementation.

use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use num_bigint::BigInt;

use crate::value::{push_escaped, JsonValue};

/// One method per `JsonValue` variant. Container methods receive the children
/// in natural order (object members in insertion order, array elements by
/// index) and recurse through [`JsonValue::accept`], so a conforming visitor
/// observes a pre-order, depth-first traversal.
pub trait JsonVisitor {
    fn visit_object(&mut self, members: &IndexMap<String, JsonValue>);
    fn visit_array(&mut self, elements: &[JsonValue]);
    fn visit_string(&mut self, value: &str);
    fn visit_integer(&mut self, value: &BigInt);
    fn visit_decimal(&mut self, value: &BigDecimal);
    fn visit_boolean(&mut self, value: bool);
    fn visit_null(&mut self);
}

/// Renders a tree as indented JSON text, one member or element per line.
/// Numbers are written in their exact textual form; strings are re-escaped
/// with the inverse of the lexer's decoding.
#[derive(Debug)]
pub struct PrettyPrinter {
    indent_width: usize,
    depth: usize,
    out: String,
}

impl PrettyPrinter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent_width,
            depth: 0,
            out: String::new(),
        }
    }

    /// Consume the printer and return everything rendered so far.
    pub fn into_string(self) -> String {
        self.out
    }

    fn newline_indent(&mut self) {
        self.out.push('\n');
        for _ in 0..self.depth * self.indent_width {
            self.out.push(' ');
        }
    }
}

impl JsonVisitor for PrettyPrinter {
    fn visit_object(&mut self, members: &IndexMap<String, JsonValue>) {
        if members.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push('{');
        self.depth += 1;
        for (i, (key, value)) in members.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline_indent();
            push_escaped(&mut self.out, key);
            self.out.push_str(": ");
            value.accept(self);
        }
        self.depth -= 1;
        self.newline_indent();
        self.out.push('}');
    }

    fn visit_array(&mut self, elements: &[JsonValue]) {
        if elements.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push('[');
        self.depth += 1;
        for (i, value) in elements.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.newline_indent();
            value.accept(self);
        }
        self.depth -= 1;
        self.newline_indent();
        self.out.push(']');
    }

    fn visit_string(&mut self, value: &str) {
        push_escaped(&mut self.out, value);
    }

    fn visit_integer(&mut self, value: &BigInt) {
        self.out.push_str(&value.to_string());
    }

    fn visit_decimal(&mut self, value: &BigDecimal) {
        self.out.push_str(&value.to_string());
    }

    fn visit_boolean(&mut self, value: bool) {
        self.out.push_str(if value { "true" } else { "false" });
    }

    fn visit_null(&mut self) {
        self.out.push_str("null");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;

    fn render(value: &JsonValue, indent: usize) -> String {
        let mut printer = PrettyPrinter::new(indent);
        value.accept(&mut printer);
        printer.into_string()
    }

    #[test]
    fn nested_object_with_indent_4() {
        let value = JsonValue::Object(indexmap! {
            "person".to_string() => JsonValue::Object(indexmap! {
                "name".to_string() => JsonValue::String("John".to_string()),
                "age".to_string() => JsonValue::Integer(BigInt::from(30)),
            }),
            "car".to_string() => JsonValue::Null,
        });
        let expected = "\
{
    \"person\": {
        \"name\": \"John\",
        \"age\": 30
    },
    \"car\": null
}";
        assert_eq!(render(&value, 4), expected);
    }

    #[test]
    fn array_with_indent_2() {
        let value = JsonValue::Array(vec![
            JsonValue::Integer(BigInt::from(1)),
            JsonValue::Array(vec![JsonValue::Boolean(false)]),
        ]);
        let expected = "\
[
  1,
  [
    false
  ]
]";
        assert_eq!(render(&value, 2), expected);
    }

    #[test]
    fn empty_containers_stay_compact() {
        let value = JsonValue::Object(indexmap! {
            "o".to_string() => JsonValue::Object(IndexMap::new()),
            "a".to_string() => JsonValue::Array(Vec::new()),
        });
        let expected = "\
{
    \"o\": {},
    \"a\": []
}";
        assert_eq!(render(&value, 4), expected);
    }

    #[test]
    fn strings_are_reescaped() {
        let value = JsonValue::String("He said, \"Hi\"\n\tC:\\dir\u{0001}".to_string());
        assert_eq!(
            render(&value, 4),
            r#""He said, \"Hi\"\n\tC:\\dir\u0001""#
        );
    }

    #[test]
    fn numbers_render_exactly() {
        let value = JsonValue::Array(vec![
            JsonValue::Integer("123456789012345678901234567890".parse().unwrap()),
            JsonValue::Decimal("0.1".parse().unwrap()),
            JsonValue::Decimal("-12.250".parse().unwrap()),
        ]);
        let expected = "\
[
    123456789012345678901234567890,
    0.1,
    -12.250
]";
        assert_eq!(render(&value, 4), expected);
    }
}
