//! A dynamically typed scalar for stores that mix key and value types.
use crate::nullable::Nullable;
use std::fmt;

/// A dynamically typed scalar.
///
/// `SyncMap<Value, Value>` can hold entries like `{1: "test", "abc": 'x'}` in a single store.
/// [`Value::Nil`] is the null-sentinel and is rejected by every store operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Char(char),
    Str(String),
}

impl Value {
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl Nullable for Value {
    fn is_null(&self) -> bool {
        self.is_nil()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

macro_rules! from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::Int(value.into())
            }
        })*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        for (value, expected) in [
            (Value::from(1), Value::Int(1)),
            (Value::from(u32::MAX), Value::Int(i64::from(u32::MAX))),
            (Value::from(true), Value::Bool(true)),
            (Value::from('a'), Value::Char('a')),
            (Value::from("🫠"), Value::Str(String::from("🫠"))),
            (Value::from(String::from("abc")), Value::Str(String::from("abc"))),
            (Value::from(Some(100)), Value::Int(100)),
            (Value::from(None::<&str>), Value::Nil),
        ] {
            assert_eq!(value, expected);
        }
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::from("test").as_str(), Some("test"));
        assert_eq!(Value::from(100).as_int(), Some(100));
        assert_eq!(Value::from('x').as_char(), Some('x'));
        assert_eq!(Value::from(false).as_bool(), Some(false));
        assert_eq!(Value::from(1).as_str(), None);
        assert_eq!(Value::Nil.as_int(), None);
    }

    #[test]
    fn nil_is_null() {
        assert!(Value::Nil.is_null());
        assert!(Value::default().is_null());
        assert!(!Value::from(0).is_null());
        assert!(!Value::from("").is_null());
    }

    #[test]
    fn distinct_variants_are_distinct_keys() {
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::from('a'), Value::from("a"));
    }

    #[test]
    fn display() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::from(100).to_string(), "100");
        assert_eq!(Value::from('x').to_string(), "x");
        assert_eq!(Value::from("🥺").to_string(), "🥺");
    }
}
