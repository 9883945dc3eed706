use std::rc::Rc;

use ibig::IBig;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;

/// A tagged property value.
///
/// Reflected properties of any supported type are carried in this single
/// variant type, so a property bag can hold a mix of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Decimal(Decimal),
    Integer(IBig),
    Double(OrderedFloat<f64>),
    String(Rc<String>),
}

impl Value {
    /// Textual representation of the value, for diagnostics.
    ///
    /// Strings are quoted with double quotes, falling back to single
    /// quotes when the value contains a double quote, and doubling the
    /// double quotes when it contains both kinds.
    pub fn representation(&self) -> String {
        match self {
            Value::Boolean(v) => v.to_string(),
            Value::Decimal(v) => v.to_string(),
            Value::Integer(v) => v.to_string(),
            Value::Double(v) => v.to_string(),
            Value::String(v) => {
                if v.contains('\"') {
                    if v.contains('\'') {
                        let v = v.replace('\"', r#""""#);
                        format!(r#""{}""#, v)
                    } else {
                        format!(r#"'{}'"#, v)
                    }
                } else {
                    format!(r#""{}""#, v)
                }
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<IBig> for Value {
    fn from(v: IBig) -> Self {
        Value::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v.into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(Rc::new(v.to_string()))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(Rc::new(v))
    }
}
