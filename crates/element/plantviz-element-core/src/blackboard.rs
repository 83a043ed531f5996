//! In-memory data context for hosts that push values instead of answering
//! lookups.

use hashbrown::HashMap;
use plantviz_api_core::{coercion, json, TypedPath, Value, WriteBatch};
use serde::{Deserialize, Serialize};

use crate::binding::ScalarContext;
use crate::error::{BlackboardError, ResolveError};

/// Single blackboard entry with provenance information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlackboardEntry {
    pub value: Value,
    pub epoch: u64,
    pub source: String,
}

impl BlackboardEntry {
    pub fn new(value: Value, epoch: u64, source: impl Into<String>) -> Self {
        Self {
            value,
            epoch,
            source: source.into(),
        }
    }
}

/// Produced when a batch write replaced an existing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overwrite {
    pub path: TypedPath,
    pub previous: BlackboardEntry,
    pub epoch: u64,
    pub source: String,
}

#[derive(Debug, Default, Clone)]
pub struct Blackboard {
    inner: HashMap<TypedPath, BlackboardEntry>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value from JSON. Shorthand forms (`2.5`, `[1, 2]`,
    /// `{"float": 2.5}`) are accepted.
    pub fn set(
        &mut self,
        path: &str,
        value_json: serde_json::Value,
        epoch: u64,
        source: impl Into<String>,
    ) -> Result<(), BlackboardError> {
        let tp = TypedPath::parse(path)?;
        let value = json::parse_value(value_json).map_err(|err| BlackboardError::Value {
            path: path.to_string(),
            source: err,
        })?;
        self.inner
            .insert(tp, BlackboardEntry::new(value, epoch, source));
        Ok(())
    }

    pub fn set_value(
        &mut self,
        path: TypedPath,
        value: Value,
        epoch: u64,
        source: impl Into<String>,
    ) -> Option<BlackboardEntry> {
        self.inner
            .insert(path, BlackboardEntry::new(value, epoch, source))
    }

    /// Entry at `path`. `None` if absent or the path does not parse.
    pub fn get(&self, path: &str) -> Option<&BlackboardEntry> {
        let tp = TypedPath::parse(path).ok()?;
        self.inner.get(&tp)
    }

    pub fn remove(&mut self, path: &str) -> Option<BlackboardEntry> {
        let tp = TypedPath::parse(path).ok()?;
        self.inner.remove(&tp)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypedPath, &BlackboardEntry)> {
        self.inner.iter()
    }

    /// Apply a refresh batch, last writer wins. Returns the entries that
    /// were replaced.
    pub fn apply_writebatch(
        &mut self,
        batch: WriteBatch,
        epoch: u64,
        source: &str,
    ) -> Vec<Overwrite> {
        let mut overwrites = Vec::new();
        for op in batch.into_vec() {
            let entry = BlackboardEntry::new(op.value, epoch, source);
            if let Some(previous) = self.inner.insert(op.path.clone(), entry) {
                overwrites.push(Overwrite {
                    path: op.path,
                    previous,
                    epoch,
                    source: source.to_string(),
                });
            }
        }
        if !overwrites.is_empty() {
            log::debug!(
                "epoch {epoch}: {} overwrite(s) from '{source}'",
                overwrites.len()
            );
        }
        overwrites
    }
}

impl ScalarContext for Blackboard {
    fn resolve_scalar(&self, reference: &TypedPath) -> Result<f64, ResolveError> {
        let entry = self.inner.get(reference).ok_or_else(|| ResolveError::Missing {
            reference: reference.clone(),
        })?;
        coercion::to_scalar(&entry.value).ok_or_else(|| ResolveError::NotNumeric {
            reference: reference.clone(),
            kind: entry.value.kind(),
        })
    }
}
