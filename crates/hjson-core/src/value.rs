//! The [`Value`] sum type: one JSON node.
//!
//! A value is exactly one of six kinds. The kind is fixed at construction;
//! containers ([`Object`], [`Array`]) may have their contents edited through
//! [`Value::as_object_mut`] / [`Value::as_array_mut`], but those views never
//! change what kind the value is.
//!
//! # Narrowing
//!
//! Accessors such as [`Value::as_int`] return [`ValueError::TypeMismatch`] when
//! the value is of another kind, and [`ValueError::RangeOrFormat`] when a
//! number does not fit the requested width:
//!
//! ```rust
//! use hjson_core::{Value, ValueError};
//!
//! assert_eq!(Value::number("42").unwrap().as_int(), Ok(42));
//! assert!(matches!(
//!     Value::number("3.5").unwrap().as_int(),
//!     Err(ValueError::RangeOrFormat { .. })
//! ));
//! assert!(matches!(
//!     Value::from("42").as_int(),
//!     Err(ValueError::TypeMismatch { .. })
//! ));
//! ```

use crate::array::Array;
use crate::error::{Result, ValueError};
use crate::number::Number;
use crate::object::Object;
use std::fmt;

/// The JSON literal `null`.
pub const NULL: Value = Value::Null;
/// The JSON literal `true`.
pub const TRUE: Value = Value::Boolean(true);
/// The JSON literal `false`.
pub const FALSE: Value = Value::Boolean(false);

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Boolean,
    String,
    Number,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

/// A JSON document node.
///
/// Equality is structural and order-sensitive for containers; `Hash` agrees
/// with it. The leaf kinds `Null` and `Boolean` carry no interior state, which
/// is what lets [`NULL`], [`TRUE`] and [`FALSE`] be shared constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Null,
    Boolean(bool),
    String(String),
    Number(Number),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Build a number from a JSON literal such as `"-12.5e3"`.
    pub fn number(literal: &str) -> Result<Self> {
        Number::parse(literal).map(Value::Number)
    }

    /// Build a number from a finite `f64`.
    pub fn from_f64(value: f64) -> Result<Self> {
        Number::from_f64(value).map(Value::Number)
    }

    /// Build a number from a finite `f32`.
    pub fn from_f32(value: f32) -> Result<Self> {
        Number::from_f32(value).map(Value::Number)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::String(_) => Kind::String,
            Value::Number(_) => Kind::Number,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Value::Boolean(true))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Value::Boolean(false))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_boolean(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(Kind::Boolean)),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(Kind::String)),
        }
    }

    pub fn as_number(&self) -> Result<&Number> {
        match self {
            Value::Number(n) => Ok(n),
            other => Err(other.mismatch(Kind::Number)),
        }
    }

    pub fn as_int(&self) -> Result<i32> {
        self.as_number()?.to_i32()
    }

    pub fn as_long(&self) -> Result<i64> {
        self.as_number()?.to_i64()
    }

    pub fn as_float(&self) -> Result<f32> {
        self.as_number()?.to_f32()
    }

    pub fn as_double(&self) -> Result<f64> {
        self.as_number()?.to_f64()
    }

    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Value::Object(o) => Ok(o),
            other => Err(other.mismatch(Kind::Object)),
        }
    }

    /// Mutable access to the members of an object value.
    pub fn as_object_mut(&mut self) -> Result<&mut Object> {
        match self {
            Value::Object(o) => Ok(o),
            other => Err(other.mismatch(Kind::Object)),
        }
    }

    pub fn as_array(&self) -> Result<&Array> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(other.mismatch(Kind::Array)),
        }
    }

    /// Mutable access to the elements of an array value.
    pub fn as_array_mut(&mut self) -> Result<&mut Array> {
        match self {
            Value::Array(a) => Ok(a),
            other => Err(other.mismatch(Kind::Array)),
        }
    }

    fn mismatch(&self, expected: Kind) -> ValueError {
        ValueError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl TryFrom<f64> for Value {
    type Error = ValueError;

    /// Fails with [`ValueError::RangeOrFormat`] for NaN and infinities.
    fn try_from(value: f64) -> Result<Self> {
        Value::from_f64(value)
    }
}

impl TryFrom<f32> for Value {
    type Error = ValueError;

    fn try_from(value: f32) -> Result<Self> {
        Value::from_f32(value)
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);
