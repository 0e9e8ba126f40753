//! Tests for the converter registry and built-in scalar converters.

use crate::error::LoadError;
use crate::parser::converters::{ConverterRegistry, parse_text};
use crate::parser::value::{TimeValue, Value, ValueKind};

#[test]
fn test_builtins_cover_every_kind() {
    let registry = ConverterRegistry::default();
    let kinds = [
        ValueKind::Text,
        ValueKind::Bool,
        ValueKind::I8,
        ValueKind::I16,
        ValueKind::I32,
        ValueKind::I64,
        ValueKind::F32,
        ValueKind::F64,
        ValueKind::Time,
        ValueKind::TextMap,
        ValueKind::IntMap,
        ValueKind::FloatMap,
    ];

    for kind in kinds {
        assert!(registry.lookup(kind).is_ok(), "no converter for {kind}");
    }
}

#[test]
fn test_lookup_unregistered_kind() {
    let registry = ConverterRegistry::new();

    let err = registry.lookup(ValueKind::I32).unwrap_err();
    assert!(matches!(
        err,
        LoadError::ConverterNotFound {
            kind: ValueKind::I32
        }
    ));
}

#[test]
fn test_reregistration_last_write_wins() {
    fn shouting_text(text: &str) -> crate::error::Result<Value> {
        Ok(Value::Text(text.to_uppercase()))
    }

    let mut registry = ConverterRegistry::new();
    registry.register(ValueKind::Text, parse_text);
    registry.register(ValueKind::Text, shouting_text);

    let value = registry.convert(ValueKind::Text, "hall").unwrap();
    assert_eq!(value, Value::Text("HALL".to_string()));
}

#[test]
fn test_bool_grammar() {
    let registry = ConverterRegistry::default();

    assert_eq!(
        registry.convert(ValueKind::Bool, "0").unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        registry.convert(ValueKind::Bool, "false").unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        registry.convert(ValueKind::Bool, "1").unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        registry.convert(ValueKind::Bool, "true").unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn test_bool_rejects_other_tokens() {
    let registry = ConverterRegistry::default();

    for text in ["2", "TRUE", "yes", "", " 1"] {
        let err = registry.convert(ValueKind::Bool, text).unwrap_err();
        match err {
            LoadError::Conversion { kind, text: t, .. } => {
                assert_eq!(kind, ValueKind::Bool);
                assert_eq!(t, text);
            }
            other => panic!("expected Conversion, got {other:?}"),
        }
    }
}

#[test]
fn test_integer_widths() {
    let registry = ConverterRegistry::default();

    assert_eq!(
        registry.convert(ValueKind::I8, "-128").unwrap(),
        Value::I8(-128)
    );
    assert_eq!(
        registry.convert(ValueKind::I16, "32767").unwrap(),
        Value::I16(32767)
    );
    assert_eq!(
        registry.convert(ValueKind::I32, "-5").unwrap(),
        Value::I32(-5)
    );
    assert_eq!(
        registry.convert(ValueKind::I64, "9000000000").unwrap(),
        Value::I64(9_000_000_000)
    );

    // out of range for the narrow type
    assert!(registry.convert(ValueKind::I8, "200").is_err());
    assert!(registry.convert(ValueKind::I32, "4.5").is_err());
}

#[test]
fn test_floats() {
    let registry = ConverterRegistry::default();

    assert_eq!(
        registry.convert(ValueKind::F32, "5.5").unwrap(),
        Value::F32(5.5)
    );
    assert_eq!(
        registry.convert(ValueKind::F64, "-0.25").unwrap(),
        Value::F64(-0.25)
    );
    assert!(registry.convert(ValueKind::F32, "fast").is_err());
}

#[test]
fn test_time_is_a_tagged_int64() {
    let registry = ConverterRegistry::default();

    assert_eq!(
        registry.convert(ValueKind::Time, "3600").unwrap(),
        Value::Time(TimeValue(3600))
    );
    assert!(registry.convert(ValueKind::Time, "soon").is_err());
}
