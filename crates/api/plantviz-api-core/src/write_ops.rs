//! Data refresh batches: the host publishes the latest readings of a query
//! as a batch of typed-path writes.
//!
//! WriteOp serializes to JSON as:
//!   { "path": "line1/Conveyor.speed", "value": 2.5 }
//! and accepts the shorthand value forms handled by [`crate::json`].

use crate::{json, typed_path::TypedPath, Value};
use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteOp {
    pub path: TypedPath,
    pub value: Value,
}

impl WriteOp {
    pub fn new(path: TypedPath, value: Value) -> Self {
        Self { path, value }
    }
}

impl<'de> Deserialize<'de> for WriteOp {
    fn deserialize<D>(deserializer: D) -> Result<WriteOp, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            path: TypedPath,
            value: serde_json::Value,
        }

        let raw = Raw::deserialize(deserializer)?;
        let value = json::parse_value(raw.value).map_err(de::Error::custom)?;
        Ok(WriteOp {
            path: raw.path,
            value,
        })
    }
}

/// A batch of write operations, applied in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteBatch(pub Vec<WriteOp>);

impl WriteBatch {
    pub fn new() -> Self {
        WriteBatch(Vec::new())
    }

    pub fn push(&mut self, op: WriteOp) {
        self.0.push(op);
    }

    pub fn into_vec(self) -> Vec<WriteOp> {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &WriteOp> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<WriteOp> for WriteBatch {
    fn from_iter<I: IntoIterator<Item = WriteOp>>(iter: I) -> Self {
        WriteBatch(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writeop_roundtrip_json() {
        let tp = TypedPath::parse("line1/Conveyor.speed").unwrap();
        let op = WriteOp::new(tp, Value::Float(2.5));
        let s = serde_json::to_string(&op).unwrap();
        let parsed: WriteOp = serde_json::from_str(&s).unwrap();
        assert_eq!(op, parsed);
    }

    #[test]
    fn writebatch_accepts_shorthand_values() {
        let raw = r#"[
            { "path": "line1/Conveyor.speed", "value": 2.5 },
            { "path": "line1/Conveyor.state", "value": "running" }
        ]"#;
        let batch: WriteBatch = serde_json::from_str(raw).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.0[0].value, Value::Float(2.5));
        assert_eq!(batch.0[1].value, Value::text("running"));
    }
}
