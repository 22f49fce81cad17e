/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::escape;

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Float(f64),
    Integer(i64),
    Unsigned(u64),
    String(String),
    Boolean(bool),
}

impl FieldValue {
    pub(crate) fn is_finite(&self) -> bool {
        match self {
            FieldValue::Float(v) => v.is_finite(),
            _ => true,
        }
    }

    pub(crate) fn append_to(&self, buf: &mut Vec<u8>) {
        match self {
            FieldValue::Float(v) => {
                let mut buffer = ryu::Buffer::new();
                buf.extend_from_slice(buffer.format(*v).as_bytes());
            }
            FieldValue::Integer(v) => {
                let mut buffer = itoa::Buffer::new();
                buf.extend_from_slice(buffer.format(*v).as_bytes());
                buf.push(b'i');
            }
            FieldValue::Unsigned(v) => {
                let mut buffer = itoa::Buffer::new();
                buf.extend_from_slice(buffer.format(*v).as_bytes());
                buf.push(b'u');
            }
            FieldValue::String(s) => escape::append_string_value(buf, s),
            FieldValue::Boolean(true) => buf.extend_from_slice(b"true"),
            FieldValue::Boolean(false) => buf.extend_from_slice(b"false"),
        }
    }
}

macro_rules! impl_from {
    ($t:ty, $variant:ident, $as:ty) => {
        impl From<$t> for FieldValue {
            fn from(v: $t) -> Self {
                FieldValue::$variant(<$as>::from(v))
            }
        }
    };
}

impl_from!(f64, Float, f64);
impl_from!(f32, Float, f64);
impl_from!(i64, Integer, i64);
impl_from!(i32, Integer, i64);
impl_from!(i16, Integer, i64);
impl_from!(i8, Integer, i64);
impl_from!(u64, Unsigned, u64);
impl_from!(u32, Unsigned, u64);
impl_from!(u16, Unsigned, u64);
impl_from!(u8, Unsigned, u64);
impl_from!(bool, Boolean, bool);
impl_from!(String, String, String);

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(v: FieldValue) -> String {
        let mut buf = Vec::new();
        v.append_to(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn numbers() {
        assert_eq!(encode(FieldValue::from(1.5f64)), "1.5");
        assert_eq!(encode(FieldValue::from(2.0f32)), "2.0");
        assert_eq!(encode(FieldValue::from(-42i64)), "-42i");
        assert_eq!(encode(FieldValue::from(7i8)), "7i");
        assert_eq!(encode(FieldValue::from(u64::MAX)), "18446744073709551615u");
    }

    #[test]
    fn others() {
        assert_eq!(encode(FieldValue::from(true)), "true");
        assert_eq!(encode(FieldValue::from(false)), "false");
        assert_eq!(encode(FieldValue::from("a \"b\"")), "\"a \\\"b\\\"\"");
    }

    #[test]
    fn finite() {
        assert!(FieldValue::from(1.0f64).is_finite());
        assert!(!FieldValue::from(f64::NAN).is_finite());
        assert!(!FieldValue::from(f64::INFINITY).is_finite());
        assert!(FieldValue::from(1i64).is_finite());
    }
}
