//! Typed cell values and their kind identities.
//!
//! `Value` is the closed union of every target type a converter can
//! produce; `ValueKind` is the identity that keys the converter registry
//! and names types in error messages. Field bindings extract their typed
//! payload through the `into_*` accessors.

use std::collections::HashMap;
use std::fmt;

/// Domain time, a tagged 64-bit second count
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue(pub i64);

impl TimeValue {
    /// The raw second count
    pub fn as_secs(self) -> i64 {
        self.0
    }
}

impl From<i64> for TimeValue {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

/// Identity of a converter's target type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Time,
    TextMap,
    IntMap,
    FloatMap,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Text => "text",
            ValueKind::Bool => "bool",
            ValueKind::I8 => "int8",
            ValueKind::I16 => "int16",
            ValueKind::I32 => "int32",
            ValueKind::I64 => "int64",
            ValueKind::F32 => "float32",
            ValueKind::F64 => "float64",
            ValueKind::Time => "time",
            ValueKind::TextMap => "text map",
            ValueKind::IntMap => "int map",
            ValueKind::FloatMap => "float map",
        };
        f.write_str(name)
    }
}

/// A parsed cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Time(TimeValue),
    TextMap(HashMap<String, String>),
    IntMap(HashMap<String, i64>),
    FloatMap(HashMap<String, f32>),
}

/// A binding asked a value for a payload of the wrong kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMismatch {
    pub expected: ValueKind,
    pub found: ValueKind,
}

macro_rules! value_accessor {
    ($name:ident, $variant:ident, $ty:ty) => {
        pub fn $name(self) -> Result<$ty, ShapeMismatch> {
            match self {
                Value::$variant(v) => Ok(v),
                other => Err(ShapeMismatch {
                    expected: ValueKind::$variant,
                    found: other.kind(),
                }),
            }
        }
    };
}

impl Value {
    /// The kind identity of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Bool(_) => ValueKind::Bool,
            Value::I8(_) => ValueKind::I8,
            Value::I16(_) => ValueKind::I16,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::Time(_) => ValueKind::Time,
            Value::TextMap(_) => ValueKind::TextMap,
            Value::IntMap(_) => ValueKind::IntMap,
            Value::FloatMap(_) => ValueKind::FloatMap,
        }
    }

    value_accessor!(into_text, Text, String);
    value_accessor!(into_bool, Bool, bool);
    value_accessor!(into_i8, I8, i8);
    value_accessor!(into_i16, I16, i16);
    value_accessor!(into_i32, I32, i32);
    value_accessor!(into_i64, I64, i64);
    value_accessor!(into_f32, F32, f32);
    value_accessor!(into_f64, F64, f64);
    value_accessor!(into_time, Time, TimeValue);
    value_accessor!(into_text_map, TextMap, HashMap<String, String>);
    value_accessor!(into_int_map, IntMap, HashMap<String, i64>);
    value_accessor!(into_float_map, FloatMap, HashMap<String, f32>);
}
