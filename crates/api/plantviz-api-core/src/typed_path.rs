//! TypedPath parsing and formatting.
//!
//! Grammar:
//!   namespace/.../target.field.subfield
//! - '/' separates namespace segments
//! - the last segment holds the `target` and optional '.'-separated fields
//!
//! Examples:
//!   "line1/Conveyor.speed" -> namespaces=["line1"], target="Conveyor", fields=["speed"]
//!   "config.boxCount"      -> namespaces=[], target="config", fields=["boxCount"]
//!   "plant/press"          -> namespaces=["plant"], target="press", fields=[]
//!
//! Dynamic bindings reference live data through a TypedPath, and the options
//! editor addresses configuration entries (`config.<field>`) with the same type.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("empty path")]
    Empty,
    #[error("invalid typed path '{path}': empty {segment} segment")]
    EmptySegment { path: String, segment: &'static str },
    #[error("invalid typed path '{path}': {segment} contains whitespace")]
    Whitespace { path: String, segment: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypedPath {
    /// Namespace segments preceding the target (may be empty)
    pub namespaces: Vec<String>,
    /// Target name
    pub target: String,
    /// Ordered field selectors on the target (may be empty)
    pub fields: Vec<String>,
}

impl TypedPath {
    pub fn new(namespaces: Vec<String>, target: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            namespaces,
            target: target.into(),
            fields,
        }
    }

    /// Path of a configuration entry as addressed by the options editor,
    /// e.g. `config.speed`.
    pub fn config_field(field: &str) -> Self {
        Self::new(Vec::new(), "config", vec![field.to_string()])
    }

    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }
        let check = |seg: &str, segment: &'static str| -> Result<(), PathError> {
            if seg.is_empty() {
                return Err(PathError::EmptySegment {
                    path: s.to_string(),
                    segment,
                });
            }
            if seg.chars().any(char::is_whitespace) {
                return Err(PathError::Whitespace {
                    path: s.to_string(),
                    segment,
                });
            }
            Ok(())
        };

        let (head, last) = match s.rsplit_once('/') {
            Some((head, last)) => (Some(head), last),
            None => (None, s),
        };

        let mut namespaces = Vec::new();
        if let Some(head) = head {
            for seg in head.split('/') {
                check(seg, "namespace")?;
                namespaces.push(seg.to_string());
            }
        }

        let mut parts = last.split('.');
        let target = parts.next().unwrap_or_default();
        check(target, "target")?;
        let mut fields = Vec::new();
        for seg in parts {
            check(seg, "field")?;
            fields.push(seg.to_string());
        }

        Ok(TypedPath {
            namespaces,
            target: target.to_string(),
            fields,
        })
    }

    pub fn target_name(&self) -> &str {
        &self.target
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.iter().map(|s| s.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|s| s.as_str())
    }

    /// Last field selector, or the target when the path has no fields.
    pub fn leaf(&self) -> &str {
        self.fields.last().map(String::as_str).unwrap_or(&self.target)
    }
}

impl fmt::Display for TypedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ns in &self.namespaces {
            write!(f, "{ns}/")?;
        }
        f.write_str(&self.target)?;
        for field in &self.fields {
            write!(f, ".{field}")?;
        }
        Ok(())
    }
}

impl FromStr for TypedPath {
    type Err = PathError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypedPath::parse(s)
    }
}

impl Serialize for TypedPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypedPath {
    fn deserialize<D>(deserializer: D) -> Result<TypedPath, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TypedPath::parse(&s).map_err(de::Error::custom)
    }
}
