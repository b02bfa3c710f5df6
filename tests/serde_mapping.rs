//! Serialization tests for mappings and records (requires `serde`).

#![cfg(feature = "serde")]

use uri_parts::{parse_from_mapping, parse_from_string, RawParts, Value};

#[test]
fn json_object_deserializes_into_mapping() {
    let json = r#"{"scheme":"HTTPS","host":"example.com","port":"8443","path":null,"extra":[1,2]}"#;
    let mapping: RawParts = serde_json::from_str(json).unwrap();

    assert_eq!(mapping.get("scheme"), Some(&Value::from("HTTPS")));
    assert_eq!(mapping.get("path"), Some(&Value::Null));
    assert_eq!(mapping.get("extra"), Some(&Value::Null));

    let parts = parse_from_mapping(&mapping);
    assert_eq!(parts.scheme(), "https");
    assert_eq!(parts.port(), Some(8443));
    assert_eq!(parts.path(), "");
}

#[test]
fn json_numbers_become_int_or_float() {
    let mapping: RawParts =
        serde_json::from_str(r#"{"port":80,"query":1.5,"big":18446744073709551615}"#).unwrap();
    assert_eq!(mapping.get("port"), Some(&Value::Int(80)));
    assert_eq!(mapping.get("query"), Some(&Value::Float(1.5)));
    assert!(matches!(mapping.get("big"), Some(Value::Float(_))));
}

#[test]
fn wrong_types_are_absorbed() {
    let mapping: RawParts =
        serde_json::from_str(r#"{"host":{"a":1},"user":true,"port":70000}"#).unwrap();
    let parts = parse_from_mapping(&mapping);
    assert_eq!(parts.host(), "");
    assert_eq!(parts.user(), "");
    assert_eq!(parts.port(), None);
}

#[test]
fn mapping_serializes_transparently() {
    let mapping = RawParts::new().with("host", "a.test").with("port", Value::Null);
    let json = serde_json::to_string(&mapping).unwrap();
    assert_eq!(json, r#"{"host":"a.test","port":null}"#);
}

#[test]
fn parts_serialize_all_fields() {
    let parts = parse_from_string("http://[::1]:8080/p").unwrap();
    let json = serde_json::to_value(&parts).unwrap();

    assert_eq!(json["scheme"], "http");
    assert_eq!(json["host"], "::1");
    assert_eq!(json["port"], 8080);
    assert_eq!(json["user"], "");
    assert_eq!(json["fragment"], "");
}

#[test]
fn serialized_record_reassembles() {
    let parts = parse_from_string("https://u:p@example.com/a?b=c#d").unwrap();
    let mapping: RawParts = serde_json::from_value(serde_json::to_value(&parts).unwrap()).unwrap();
    assert_eq!(parse_from_mapping(&mapping), parts);
}
