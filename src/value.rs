use std::{
    fmt::{self, Write as _},
    ops::{Index, IndexMut},
    str::FromStr,
};

use indexmap::IndexMap;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Serialize, Serializer};

use crate::num::number::{format_float, format_integer};
use crate::options::ParseOptions;
use crate::Error;

pub type Object = IndexMap<String, JsonValue>;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Decimal(Decimal),
    Float(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(Object),
}

impl JsonValue {
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    pub const fn is_integer(&self) -> bool {
        matches!(self, JsonValue::Integer(_))
    }

    pub const fn is_decimal(&self) -> bool {
        matches!(self, JsonValue::Decimal(_))
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, JsonValue::Float(_))
    }

    pub const fn is_number(&self) -> bool {
        matches!(
            self,
            JsonValue::Integer(_) | JsonValue::Decimal(_) | JsonValue::Float(_)
        )
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            JsonValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    // Reads any of the three numeric variants out as f64; lossy for wide
    // integers and high-precision decimals.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Integer(value) => Some(*value as f64),
            JsonValue::Decimal(value) => value.to_f64(),
            JsonValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            JsonValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            JsonValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(entries) => entries.get(key),
            _ => None,
        }
    }

    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(items) => items.get(index),
            _ => None,
        }
    }

    pub fn take(&mut self) -> JsonValue {
        std::mem::replace(self, JsonValue::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Integer(_) | JsonValue::Decimal(_) | JsonValue::Float(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in value.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            ch if (ch as u32) < 0x20 => write!(f, "\\u{:04x}", ch as u32)?,
            ch => f.write_char(ch)?,
        }
    }
    f.write_char('"')
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Null => f.write_str("null"),
            JsonValue::Bool(value) => write!(f, "{value}"),
            JsonValue::Integer(value) => f.write_str(&format_integer(*value)),
            JsonValue::Decimal(value) => write!(f, "{value}"),
            JsonValue::Float(value) => f.write_str(&format_float(*value)),
            JsonValue::String(value) => write_escaped(f, value),
            JsonValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            JsonValue::Object(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_escaped(f, key)?;
                    write!(f, ": {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Index<usize> for JsonValue {
    type Output = JsonValue;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            JsonValue::Array(items) => items.get(index).unwrap_or_else(|| {
                panic!(
                    "index {index} out of bounds for array of length {}",
                    items.len()
                )
            }),
            _ => panic!(
                "cannot index into non-array value of type {}",
                self.type_name()
            ),
        }
    }
}

impl IndexMut<usize> for JsonValue {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self {
            JsonValue::Array(items) => {
                let len = items.len();
                items.get_mut(index).unwrap_or_else(|| {
                    panic!("index {index} out of bounds for array of length {len}")
                })
            }
            _ => panic!(
                "cannot index into non-array value of type {}",
                self.type_name()
            ),
        }
    }
}

impl Index<&str> for JsonValue {
    type Output = JsonValue;

    fn index(&self, key: &str) -> &Self::Output {
        match self {
            JsonValue::Object(entries) => entries.get(key).unwrap_or_else(|| {
                panic!(
                    "key '{key}' not found in object with {} entries",
                    entries.len()
                )
            }),
            _ => panic!(
                "cannot index into non-object value of type {}",
                self.type_name()
            ),
        }
    }
}

impl IndexMut<&str> for JsonValue {
    fn index_mut(&mut self, key: &str) -> &mut Self::Output {
        match self {
            JsonValue::Object(entries) => {
                let len = entries.len();
                entries
                    .get_mut(key)
                    .unwrap_or_else(|| panic!("key '{key}' not found in object with {len} entries"))
            }
            _ => panic!(
                "cannot index into non-object value of type {}",
                self.type_name()
            ),
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Integer(i64::from(value))
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Integer(value)
    }
}

impl From<u32> for JsonValue {
    fn from(value: u32) -> Self {
        JsonValue::Integer(i64::from(value))
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Float(value)
    }
}

impl From<Decimal> for JsonValue {
    fn from(value: Decimal) -> Self {
        JsonValue::Decimal(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(items: Vec<JsonValue>) -> Self {
        JsonValue::Array(items)
    }
}

impl From<Object> for JsonValue {
    fn from(entries: Object) -> Self {
        JsonValue::Object(entries)
    }
}

impl FromStr for JsonValue {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        crate::decode::from_str(input, &ParseOptions::default())
    }
}

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(value) => serializer.serialize_bool(*value),
            JsonValue::Integer(value) => serializer.serialize_i64(*value),
            JsonValue::Decimal(value) => {
                serializer.serialize_f64(value.to_f64().unwrap_or(f64::NAN))
            }
            JsonValue::Float(value) => serializer.serialize_f64(*value),
            JsonValue::String(value) => serializer.serialize_str(value),
            JsonValue::Array(items) => serializer.collect_seq(items),
            JsonValue::Object(entries) => serializer.collect_map(entries),
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(value) => JsonValue::Bool(value),
            serde_json::Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    JsonValue::Integer(value)
                } else if let Some(value) = number.as_u64() {
                    JsonValue::Decimal(Decimal::from(value))
                } else if let Some(value) = number.as_f64() {
                    JsonValue::Float(value)
                } else {
                    JsonValue::Null
                }
            }
            serde_json::Value::String(value) => JsonValue::String(value),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(entries) => {
                let mut object = Object::new();
                for (key, value) in entries {
                    object.insert(key, JsonValue::from(value));
                }
                JsonValue::Object(object)
            }
        }
    }
}

impl From<JsonValue> for serde_json::Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(value) => serde_json::Value::Bool(value),
            JsonValue::Integer(value) => serde_json::Value::Number(value.into()),
            JsonValue::Decimal(value) => value
                .to_f64()
                .and_then(serde_json::Number::from_f64)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            JsonValue::Float(value) => serde_json::Number::from_f64(value)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            JsonValue::String(value) => serde_json::Value::String(value),
            JsonValue::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            JsonValue::Object(entries) => {
                let mut object = serde_json::Map::new();
                for (key, value) in entries {
                    object.insert(key, value.into());
                }
                serde_json::Value::Object(object)
            }
        }
    }
}
