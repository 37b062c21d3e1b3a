//! Tag value types
//!
//! This module defines the `TagValue` enum that represents every value a
//! TIFF/EXIF tag can hold after decoding, along with the conversion
//! helpers the higher layers and callers lean on.
//!
//! Rationals keep both fields verbatim; they are never normalised. Arrays
//! with a single element are collapsed to scalars by the decoder before a
//! value ever reaches a directory.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// A decoded tag value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    /// Unsigned 8-bit integer
    U8(u8),
    /// Unsigned 16-bit integer
    U16(u16),
    /// Unsigned 32-bit integer
    U32(u32),
    /// Unsigned 64-bit integer (BigTIFF)
    U64(u64),
    /// Signed 8-bit integer
    I8(i8),
    /// Signed 16-bit integer
    I16(i16),
    /// Signed 32-bit integer
    I32(i32),
    /// Signed 64-bit integer (BigTIFF)
    I64(i64),
    /// 32-bit floating point
    F32(f32),
    /// 64-bit floating point
    F64(f64),
    /// Unsigned rational as a (numerator, denominator) pair
    Rational(u32, u32),
    /// Signed rational as a (numerator, denominator) pair
    SRational(i32, i32),
    /// Text, already decoded from its wire encoding
    String(String),
    /// Raw bytes (UNDEFINED and other opaque payloads)
    Bytes(Vec<u8>),
    U8Array(Vec<u8>),
    U16Array(Vec<u16>),
    U32Array(Vec<u32>),
    U64Array(Vec<u64>),
    I8Array(Vec<i8>),
    I16Array(Vec<i16>),
    I32Array(Vec<i32>),
    I64Array(Vec<i64>),
    F32Array(Vec<f32>),
    F64Array(Vec<f64>),
    RationalArray(Vec<(u32, u32)>),
    SRationalArray(Vec<(i32, i32)>),
    /// Composite date/time (vendor fixed-layout decoders)
    DateTime(NaiveDateTime),
    /// Version triple or quad (vendor firmware fields)
    Version(Vec<u32>),
}

impl TagValue {
    /// Convert to u16 if the value is an unsigned integer that fits.
    pub fn as_u16(&self) -> Option<u16> {
        match self {
            TagValue::U8(v) => Some(u16::from(*v)),
            TagValue::U16(v) => Some(*v),
            TagValue::U32(v) => u16::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Convert to u32 if the value is an unsigned integer that fits.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            TagValue::U8(v) => Some(u32::from(*v)),
            TagValue::U16(v) => Some(u32::from(*v)),
            TagValue::U32(v) => Some(*v),
            TagValue::U64(v) => u32::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Convert to i32, widening smaller integers.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            TagValue::U8(v) => Some(i32::from(*v)),
            TagValue::U16(v) => Some(i32::from(*v)),
            TagValue::U32(v) => i32::try_from(*v).ok(),
            TagValue::I8(v) => Some(i32::from(*v)),
            TagValue::I16(v) => Some(i32::from(*v)),
            TagValue::I32(v) => Some(*v),
            _ => None,
        }
    }

    /// Convert to f64. Integers widen; rationals divide (a zero
    /// denominator yields None rather than an infinity).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TagValue::U8(v) => Some(f64::from(*v)),
            TagValue::U16(v) => Some(f64::from(*v)),
            TagValue::U32(v) => Some(f64::from(*v)),
            TagValue::U64(v) => Some(*v as f64),
            TagValue::I8(v) => Some(f64::from(*v)),
            TagValue::I16(v) => Some(f64::from(*v)),
            TagValue::I32(v) => Some(f64::from(*v)),
            TagValue::I64(v) => Some(*v as f64),
            TagValue::F32(v) => Some(f64::from(*v)),
            TagValue::F64(v) => Some(*v),
            TagValue::Rational(n, d) if *d != 0 => Some(f64::from(*n) / f64::from(*d)),
            TagValue::SRational(n, d) if *d != 0 => Some(f64::from(*n) / f64::from(*d)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TagValue::Bytes(b) | TagValue::U8Array(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_u16_array(&self) -> Option<&[u16]> {
        match self {
            TagValue::U16Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_rational_array(&self) -> Option<&[(u32, u32)]> {
        match self {
            TagValue::RationalArray(a) => Some(a),
            _ => None,
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::U8(v) => write!(f, "{v}"),
            TagValue::U16(v) => write!(f, "{v}"),
            TagValue::U32(v) => write!(f, "{v}"),
            TagValue::U64(v) => write!(f, "{v}"),
            TagValue::I8(v) => write!(f, "{v}"),
            TagValue::I16(v) => write!(f, "{v}"),
            TagValue::I32(v) => write!(f, "{v}"),
            TagValue::I64(v) => write!(f, "{v}"),
            TagValue::F32(v) => write!(f, "{v}"),
            TagValue::F64(v) => write!(f, "{v}"),
            TagValue::Rational(n, d) => write!(f, "{n}/{d}"),
            TagValue::SRational(n, d) => write!(f, "{n}/{d}"),
            TagValue::String(s) => f.write_str(s),
            // long payloads are elided; callers wanting bytes use as_bytes()
            TagValue::Bytes(b) => write!(f, "({} bytes)", b.len()),
            TagValue::U8Array(a) => write_list(f, a),
            TagValue::U16Array(a) => write_list(f, a),
            TagValue::U32Array(a) => write_list(f, a),
            TagValue::U64Array(a) => write_list(f, a),
            TagValue::I8Array(a) => write_list(f, a),
            TagValue::I16Array(a) => write_list(f, a),
            TagValue::I32Array(a) => write_list(f, a),
            TagValue::I64Array(a) => write_list(f, a),
            TagValue::F32Array(a) => write_list(f, a),
            TagValue::F64Array(a) => write_list(f, a),
            TagValue::RationalArray(a) => {
                write!(f, "[")?;
                for (i, (n, d)) in a.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{n}/{d}")?;
                }
                write!(f, "]")
            }
            TagValue::SRationalArray(a) => {
                write!(f, "[")?;
                for (i, (n, d)) in a.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{n}/{d}")?;
                }
                write!(f, "]")
            }
            TagValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            TagValue::Version(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{part}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::String(value.to_owned())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::String(value)
    }
}
