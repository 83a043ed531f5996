//! Coercion of live values into the scalars consumed by element bindings.

use crate::Value;

/// Attempt to coerce a Value into a scalar.
/// Rules:
/// - Float -> its value
/// - Bool -> 1.0 / 0.0
/// - Vec2/Vec3 -> first component
/// - Vector -> first element, `None` when empty
/// - Text -> parsed number when the text is numeric, otherwise `None`
pub fn to_scalar(v: &Value) -> Option<f64> {
    match v {
        Value::Float(f) => Some(*f),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Vec2(a) => Some(a[0]),
        Value::Vec3(a) => Some(a[0]),
        Value::Vector(vec) => vec.first().copied(),
        Value::Text(s) => s.trim().parse::<f64>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_rules() {
        assert_eq!(to_scalar(&Value::Float(3.5)), Some(3.5));
        assert_eq!(to_scalar(&Value::Bool(true)), Some(1.0));
        assert_eq!(to_scalar(&Value::Vec3([7.0, 8.0, 9.0])), Some(7.0));
        assert_eq!(to_scalar(&Value::Vector(vec![])), None);
        assert_eq!(to_scalar(&Value::Text(" 4.25 ".into())), Some(4.25));
        assert_eq!(to_scalar(&Value::Text("idle".into())), None);
    }
}
