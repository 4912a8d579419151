use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use jsonast::{JsonValue, PrettyPrinter};
use num_bigint::BigInt;
use proptest::collection::vec;
use proptest::prelude::*;

/// Arbitrary trees. Decimal payloads always carry a positive scale so their
/// rendered form keeps a fractional part and re-lexes as a decimal, not an
/// integer.
fn arb_json() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::Boolean),
        any::<i128>().prop_map(|n| JsonValue::Integer(BigInt::from(n))),
        (any::<i64>(), 1i64..=6).prop_map(|(digits, scale)| {
            JsonValue::Decimal(BigDecimal::new(BigInt::from(digits), scale))
        }),
        ".*".prop_map(JsonValue::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..6).prop_map(JsonValue::Array),
            vec(("[a-z]{0,8}", inner), 0..6).prop_map(|members| {
                let mut map = IndexMap::new();
                for (key, value) in members {
                    map.insert(key, value);
                }
                JsonValue::Object(map)
            }),
        ]
    })
}

fn render(value: &JsonValue, indent: usize) -> String {
    let mut printer = PrettyPrinter::new(indent);
    value.accept(&mut printer);
    printer.into_string()
}

proptest! {
    #[test]
    fn pretty_print_round_trips(value in arb_json(), indent in 0usize..8) {
        let rendered = render(&value, indent);
        let reparsed = jsonast::parse(&rendered).expect("rendered output must reparse");
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn compact_display_round_trips(value in arb_json()) {
        let reparsed = jsonast::parse(&value.to_string()).expect("compact output must reparse");
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn parsing_is_deterministic(value in arb_json()) {
        let rendered = render(&value, 4);
        prop_assert_eq!(jsonast::parse(&rendered), jsonast::parse(&rendered));
    }
}

/// The pretty-printer's output is ordinary JSON other parsers accept.
#[test]
fn rendered_output_is_valid_json_elsewhere() {
    let tree = jsonast::parse(
        r#"{"person": {"name": "Jörg", "tags": ["a", "b"]}, "active": true, "score": 99.5}"#,
    )
    .unwrap();
    let rendered = render(&tree, 4);

    let external: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(external["person"]["name"], "Jörg");
    assert_eq!(external["person"]["tags"][1], "b");
    assert_eq!(external["active"], true);
    assert_eq!(external["score"], 99.5);
}

/// Parse, print at width 4, compare byte-for-byte.
#[test]
fn known_document_prints_expectedly() {
    let tree = jsonast::parse(r#"{"person":{"name":"John","age":30},"car":null}"#).unwrap();
    let expected = "\
{
    \"person\": {
        \"name\": \"John\",
        \"age\": 30
    },
    \"car\": null
}";
    assert_eq!(render(&tree, 4), expected);
}
