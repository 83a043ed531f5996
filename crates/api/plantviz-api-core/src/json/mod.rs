use serde_json::{json, Value as JsonValue};

use crate::Value;

/// Normalize shorthand `Value` JSON into the canonical `{ "type": ..., "data": ... }`
/// representation understood by the serde derives on [`Value`]. Accepts
/// primitives (`2.5`, `true`, `"idle"`), numeric arrays (`[1, 2]` becomes
/// `vec2`, `[1, 2, 3]` becomes `vec3`, anything else `vector`) and tagged
/// shorthands such as `{ "float": 2.5 }` or `{ "vector": [..] }`.
pub fn normalize_value_json(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::Number(n) => json!({ "type": "float", "data": n }),
        JsonValue::Bool(b) => json!({ "type": "bool", "data": b }),
        JsonValue::String(s) => json!({ "type": "text", "data": s }),
        JsonValue::Array(arr) if arr.iter().all(|x| x.is_number()) => match arr.len() {
            2 => json!({ "type": "vec2", "data": arr }),
            3 => json!({ "type": "vec3", "data": arr }),
            _ => json!({ "type": "vector", "data": arr }),
        },
        JsonValue::Object(obj) => {
            if obj.contains_key("type") && obj.contains_key("data") {
                return JsonValue::Object(obj);
            }
            for tag in ["float", "bool", "text", "vec2", "vec3", "vector"] {
                if let Some(data) = obj.get(tag) {
                    return json!({ "type": tag, "data": data });
                }
            }
            JsonValue::Object(obj)
        }
        other => other,
    }
}

/// Normalize then deserialize into a strongly typed [`Value`]. Keeps JSON
/// shorthands consistent across call-sites (blackboard, wasm wrapper, fixtures).
pub fn parse_value(value: JsonValue) -> Result<Value, serde_json::Error> {
    serde_json::from_value(normalize_value_json(value))
}
