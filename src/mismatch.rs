use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Mismatch<'a> {
    #[error("expect {0}, but {1}")]
    MismatchedInteger(i128, i128),
    #[error("expect {0}, but {1}")]
    MismatchedString(&'a str, &'a str),
    #[error("expect {0}, but {1}")]
    MismatchedBool(bool, bool),
    #[error("different length : expect {0}, but {1}")]
    DifferentLength(usize, usize),
    #[error("different item at {0} : expect {1}, but {2}")]
    DifferentItem(usize, &'a str, &'a str),
    #[error("type mismatch : expect {0}, but {1}")]
    MismatchedTypes(Kind, Kind),
    #[error("Assert Not Implements! {0}")]
    NotImplemented(&'a Value),
    #[error("expect not nil but nil")]
    UnexpectedNil,
}

/// Runtime kind of a dynamic value, as far as comparisons are concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Integer,
    String,
    Bool,
    StringSequence,
    Unsupported,
}

impl Kind {
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Kind::Integer,
            Value::String(_) => Kind::String,
            Value::Bool(_) => Kind::Bool,
            Value::Array(items) if items.iter().all(Value::is_string) => Kind::StringSequence,
            _ => Kind::Unsupported,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Integer => write!(f, "integer"),
            Kind::String => write!(f, "string"),
            Kind::Bool => write!(f, "boolean"),
            Kind::StringSequence => write!(f, "string sequence"),
            Kind::Unsupported => write!(f, "unsupported"),
        }
    }
}
