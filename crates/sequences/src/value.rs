//! # Values and Hashability
//!
//! In Rust, whether a type can key a `HashMap` is settled at compile time by
//! `T: Hash + Eq`. A tuple is hashable exactly when its element types are.
//! The interesting case is dynamic data, where the answer depends on what a
//! tuple happens to *contain*, so this module models a small dynamic value
//! and answers the question at runtime.
//!
//! A tuple is immutable, but only shallowly: it may hold a list, and a list
//! can change after the tuple was hashed. Hashing therefore refuses any value
//! with a list anywhere inside it.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::SequenceError;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Immutable sequence; hashable when every element is.
    Tuple(Vec<Value>),
    /// Mutable sequence; never hashable.
    List(Vec<Value>),
}

impl Value {
    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(items.into_iter().collect())
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    /// Name of the variant as it appears in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
        }
    }

    /// Hash the value, or fail with [`SequenceError::Unhashable`] naming the
    /// first mutable container found.
    ///
    /// Numbers hash by value: `Int(1)`, `Float(1.0)` and `Bool(true)` hash
    /// the same.
    pub fn hash_value(&self) -> Result<u64, SequenceError> {
        let mut hasher = DefaultHasher::new();
        self.feed(&mut hasher)?;
        Ok(hasher.finish())
    }

    fn feed<H: Hasher>(&self, state: &mut H) -> Result<(), SequenceError> {
        match self {
            Value::None => 0u8.hash(state),
            Value::Bool(b) => hash_int(i64::from(*b), state),
            Value::Int(i) => hash_int(*i, state),
            Value::Float(f) => hash_float(*f, state),
            Value::Str(s) => {
                3u8.hash(state);
                s.hash(state);
            }
            Value::Tuple(items) => {
                4u8.hash(state);
                items.len().hash(state);
                for item in items {
                    item.feed(state)?;
                }
            }
            Value::List(_) => {
                return Err(SequenceError::Unhashable {
                    type_name: self.type_name(),
                })
            }
        }
        Ok(())
    }
}

fn hash_int<H: Hasher>(i: i64, state: &mut H) {
    1u8.hash(state);
    i.hash(state);
}

fn hash_float<H: Hasher>(f: f64, state: &mut H) {
    // Integral floats share the integer's hash.
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        hash_int(f as i64, state);
    } else {
        2u8.hash(state);
        // -0.0 is integral, so only one zero reaches this branch.
        f.to_bits().hash(state);
    }
}

/// Whether `value` can be hashed. The unhashable error is handled here and
/// becomes `false`.
pub fn is_fixed(value: &Value) -> bool {
    match value.hash_value() {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(%value, %err, "value is not hashable");
            false
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Python-style literal syntax: `(10, 's', [4, 5])`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::List(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            }
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
