//! Converter registry and built-in scalar converters.
//!
//! Maps each target [`ValueKind`] to the function that parses a text
//! cell into that kind. The registry holds at most one converter per
//! kind; registering again overwrites the previous entry.

use std::collections::HashMap;
use tracing::debug;

use super::kv_map::{parse_float_map, parse_int_map, parse_text_map};
use super::value::{TimeValue, Value, ValueKind};
use crate::error::{LoadError, Result};

/// A converter parses one cell of text into one target kind
pub type Converter = fn(&str) -> Result<Value>;

/// Registry of converters keyed by target kind
#[derive(Debug, Clone)]
pub struct ConverterRegistry {
    converters: HashMap<ValueKind, Converter>,
}

impl ConverterRegistry {
    /// Create an empty registry with no converters
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Store a converter for a kind, replacing any previous one
    pub fn register(&mut self, kind: ValueKind, converter: Converter) {
        if self.converters.insert(kind, converter).is_some() {
            debug!("converter for {} values replaced", kind);
        }
    }

    /// Look up the converter for a kind
    pub fn lookup(&self, kind: ValueKind) -> Result<Converter> {
        self.converters
            .get(&kind)
            .copied()
            .ok_or(LoadError::ConverterNotFound { kind })
    }

    /// Whether a converter is registered for a kind
    pub fn supports(&self, kind: ValueKind) -> bool {
        self.converters.contains_key(&kind)
    }

    /// Convert one cell of text to the given kind
    pub fn convert(&self, kind: ValueKind, text: &str) -> Result<Value> {
        (self.lookup(kind)?)(text)
    }
}

impl Default for ConverterRegistry {
    /// Registry pre-loaded with every built-in converter
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(ValueKind::Text, parse_text);
        registry.register(ValueKind::Bool, parse_bool);
        registry.register(ValueKind::I8, parse_i8);
        registry.register(ValueKind::I16, parse_i16);
        registry.register(ValueKind::I32, parse_i32);
        registry.register(ValueKind::I64, parse_i64);
        registry.register(ValueKind::F32, parse_f32);
        registry.register(ValueKind::F64, parse_f64);
        registry.register(ValueKind::Time, parse_time);
        registry.register(ValueKind::TextMap, parse_text_map);
        registry.register(ValueKind::IntMap, parse_int_map);
        registry.register(ValueKind::FloatMap, parse_float_map);
        registry
    }
}

pub fn parse_text(text: &str) -> Result<Value> {
    Ok(Value::Text(text.to_string()))
}

/// Accepts exactly `0`, `1`, `false`, `true`
pub fn parse_bool(text: &str) -> Result<Value> {
    match text {
        "0" | "false" => Ok(Value::Bool(false)),
        "1" | "true" => Ok(Value::Bool(true)),
        _ => Err(LoadError::conversion(
            ValueKind::Bool,
            text,
            "expected 0, 1, false or true",
        )),
    }
}

macro_rules! int_converter {
    ($name:ident, $ty:ty, $variant:ident, $kind:expr) => {
        pub fn $name(text: &str) -> Result<Value> {
            text.parse::<$ty>()
                .map(Value::$variant)
                .map_err(|e| LoadError::conversion($kind, text, e.to_string()))
        }
    };
}

int_converter!(parse_i8, i8, I8, ValueKind::I8);
int_converter!(parse_i16, i16, I16, ValueKind::I16);
int_converter!(parse_i32, i32, I32, ValueKind::I32);
int_converter!(parse_i64, i64, I64, ValueKind::I64);

pub fn parse_f32(text: &str) -> Result<Value> {
    text.parse::<f32>()
        .map(Value::F32)
        .map_err(|e| LoadError::conversion(ValueKind::F32, text, e.to_string()))
}

pub fn parse_f64(text: &str) -> Result<Value> {
    text.parse::<f64>()
        .map(Value::F64)
        .map_err(|e| LoadError::conversion(ValueKind::F64, text, e.to_string()))
}

pub fn parse_time(text: &str) -> Result<Value> {
    text.parse::<i64>()
        .map(|secs| Value::Time(TimeValue(secs)))
        .map_err(|e| LoadError::conversion(ValueKind::Time, text, e.to_string()))
}
