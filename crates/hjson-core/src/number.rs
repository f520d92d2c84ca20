//! Numeric payload of [`Value::Number`](crate::Value::Number).
//!
//! A number is kept as its validated JSON literal text rather than as a
//! machine number. Narrowing into `i32`/`i64`/`f32`/`f64` happens on demand and
//! fails with [`ValueError::RangeOrFormat`] when the literal does not fit, so a
//! literal such as `3.5` survives unchanged until someone asks for an integer.
//!
//! Equality and hashing are textual: `1.0` and `1` are different numbers.
//! Numbers built from floats always keep a fraction or exponent, so a whole
//! `f64` such as `1.0` stays `1.0` rather than turning into the integer `1`.

use crate::error::{Result, ValueError};
use std::fmt;
use std::str::FromStr;

/// A JSON number literal, e.g. `42`, `-0.5`, `6.02e23`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    literal: String,
}

impl Number {
    /// Validate `literal` against the JSON number grammar
    /// (`-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`).
    pub fn parse(literal: &str) -> Result<Self> {
        if is_json_number(literal.as_bytes()) {
            Ok(Self {
                literal: literal.to_string(),
            })
        } else {
            Err(range_or_format(literal, "a JSON number"))
        }
    }

    /// Build a number from a finite `f64`. NaN and infinities have no JSON form.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(range_or_format(&value.to_string(), "a JSON number"));
        }
        Ok(Self {
            literal: float_literal(value.to_string()),
        })
    }

    /// Build a number from a finite `f32`, keeping the shortest `f32` digits.
    pub fn from_f32(value: f32) -> Result<Self> {
        if !value.is_finite() {
            return Err(range_or_format(&value.to_string(), "a JSON number"));
        }
        Ok(Self {
            literal: float_literal(value.to_string()),
        })
    }

    /// The literal text exactly as stored.
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// True when the literal has neither a fraction nor an exponent.
    pub fn is_integral(&self) -> bool {
        !self.literal.contains(['.', 'e', 'E'])
    }

    pub fn to_i32(&self) -> Result<i32> {
        self.narrow("i32")
    }

    pub fn to_i64(&self) -> Result<i64> {
        self.narrow("i64")
    }

    pub fn to_u64(&self) -> Result<u64> {
        self.narrow("u64")
    }

    /// Fails on overflow to infinity and on a non-zero literal that
    /// underflows to zero.
    pub fn to_f32(&self) -> Result<f32> {
        let f: f32 = self.narrow("f32")?;
        if !f.is_finite() || (f == 0.0 && self.has_nonzero_digit()) {
            return Err(range_or_format(&self.literal, "f32"));
        }
        Ok(f)
    }

    /// Fails on overflow to infinity and on a non-zero literal that
    /// underflows to zero.
    pub fn to_f64(&self) -> Result<f64> {
        let f: f64 = self.narrow("f64")?;
        if !f.is_finite() || (f == 0.0 && self.has_nonzero_digit()) {
            return Err(range_or_format(&self.literal, "f64"));
        }
        Ok(f)
    }

    /// True when the mantissa (the part before any exponent) is not all zeros.
    fn has_nonzero_digit(&self) -> bool {
        self.literal
            .split(['e', 'E'])
            .next()
            .is_some_and(|mantissa| mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')))
    }

    fn narrow<T: FromStr>(&self, target: &'static str) -> Result<T> {
        self.literal
            .parse::<T>()
            .map_err(|_| range_or_format(&self.literal, target))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Self {
                        literal: value.to_string(),
                    }
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Give a float's display text a fraction when it has neither a `.` nor an
/// exponent, so `1` from `1.0_f64` becomes `1.0`.
fn float_literal(mut text: String) -> String {
    if !text.contains(['.', 'e', 'E']) {
        text.push_str(".0");
    }
    text
}

fn range_or_format(literal: &str, target: &'static str) -> ValueError {
    ValueError::RangeOrFormat {
        literal: literal.to_string(),
        target,
    }
}

/// Byte-level check of the JSON number grammar.
fn is_json_number(bytes: &[u8]) -> bool {
    let mut i = 0;
    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }

    // Integer part: a lone zero or a non-zero digit followed by digits.
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => {
            i += 1;
            i += count_digits(&bytes[i..]);
        }
        _ => return false,
    }

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let n = count_digits(&bytes[i..]);
        if n == 0 {
            return false;
        }
        i += n;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let n = count_digits(&bytes[i..]);
        if n == 0 {
            return false;
        }
        i += n;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
