//! Value: live data samples published by the host's data frames.
//! Numbers are f64 to match what dashboard queries deliver.

use serde::{Deserialize, Serialize};

/// Coarse kind of a [`Value`], used in diagnostics and error reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Float,
    Bool,
    Vec2,
    Vec3,
    Vector,
    Text,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Value {
    /// Scalar reading
    Float(f64),

    /// Boolean state (e.g. a running flag)
    Bool(bool),

    /// 2D sample
    Vec2([f64; 2]),

    /// 3D sample
    Vec3([f64; 3]),

    /// Variable-length numeric series (latest sample first)
    Vector(Vec<f64>),

    /// Text / string field
    Text(String),
}

impl Value {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Vec3(_) => ValueKind::Vec3,
            Value::Vector(_) => ValueKind::Vector,
            Value::Text(_) => ValueKind::Text,
        }
    }

    pub fn f(v: f64) -> Self {
        Value::Float(v)
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_json_shape() {
        let v = Value::Float(2.5);
        let s = serde_json::to_value(&v).unwrap();
        assert_eq!(s, serde_json::json!({ "type": "float", "data": 2.5 }));
        let back: Value = serde_json::from_value(s).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn kinds() {
        assert_eq!(Value::f(1.0).kind(), ValueKind::Float);
        assert_eq!(Value::text("x").kind(), ValueKind::Text);
        assert_eq!(Value::Vector(vec![]).kind(), ValueKind::Vector);
    }
}
