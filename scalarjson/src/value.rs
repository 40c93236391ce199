// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;

use crate::parse_error::TypeMismatch;

/// The type tag of a parsed JSON value.
///
/// `Array` and `Object` are reserved: no grammar produces them yet, so
/// [`Value::get_type`] never returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

impl ValueType {
    /// Lowercase name of the type, as used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::False => "false",
            ValueType::True => "true",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed JSON value.
///
/// Only numbers and strings carry a payload, so the payload can never
/// disagree with the type tag.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// `null`, also the state of a freshly constructed value.
    #[default]
    Null,
    /// `false`
    False,
    /// `true`
    True,
    /// A number, held at `f64` precision.
    Number(f64),
    /// A string with all escapes already decoded.
    String(String),
}

impl Value {
    /// Returns the type tag of this value. Always succeeds.
    pub fn get_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::False => ValueType::False,
            Value::True => ValueType::True,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
        }
    }

    /// Returns the numeric payload, or [`TypeMismatch`] if this is not a number.
    pub fn get_number(&self) -> Result<f64, TypeMismatch> {
        match self {
            Value::Number(n) => Ok(*n),
            other => Err(other.mismatch("number")),
        }
    }

    /// Returns the decoded string payload, or [`TypeMismatch`] if this is not a string.
    pub fn get_string(&self) -> Result<&str, TypeMismatch> {
        match self {
            Value::String(s) => Ok(s.as_str()),
            other => Err(other.mismatch("string")),
        }
    }

    /// Returns `true` or `false` for the two boolean literals, [`TypeMismatch`] otherwise.
    pub fn get_boolean(&self) -> Result<bool, TypeMismatch> {
        match self {
            Value::True => Ok(true),
            Value::False => Ok(false),
            other => Err(other.mismatch("boolean")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> TypeMismatch {
        TypeMismatch {
            expected,
            found: self.get_type(),
        }
    }
}
