//! Error types for binding resolution, data preparation and registration.

use std::borrow::Cow;

use plantviz_api_core::typed_path::PathError;
use plantviz_api_core::{TypedPath, ValueKind};
use thiserror::Error;

/// Raised by a [`crate::ScalarContext`] when a dynamic reference cannot be
/// turned into a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("no value published at '{reference}'")]
    Missing { reference: TypedPath },

    #[error("value at '{reference}' is {kind:?}, not a number")]
    NotNumeric {
        reference: TypedPath,
        kind: ValueKind,
    },

    #[error("host failed to resolve '{reference}': {reason}")]
    Host {
        reference: TypedPath,
        reason: String,
    },

    #[error("'{reference}' is not a valid data reference")]
    InvalidReference {
        reference: String,
        #[source]
        source: PathError,
    },
}

impl ResolveError {
    /// The reference as written in the options.
    pub fn reference(&self) -> Cow<'_, str> {
        match self {
            ResolveError::Missing { reference }
            | ResolveError::NotNumeric { reference, .. }
            | ResolveError::Host { reference, .. } => Cow::Owned(reference.to_string()),
            ResolveError::InvalidReference { reference, .. } => Cow::Borrowed(reference),
        }
    }
}

/// Failure surfaced by `prepare_data`. The host decides whether to skip the
/// refresh, keep stale data or show an error badge.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElementError {
    #[error("{element}.{field}: {source}")]
    Resolution {
        element: String,
        field: String,
        #[source]
        source: ResolveError,
    },

    #[error("{element}.{field}: unreadable binding {raw}")]
    UnreadableBinding {
        element: String,
        field: String,
        raw: String,
    },

    #[error("{element}.{field}: invalid value {value} ({reason})")]
    InvalidConfig {
        element: String,
        field: String,
        value: f64,
        reason: &'static str,
    },
}

/// Registry misuse. Fatal at configuration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("element id '{0}' is already registered")]
    DuplicateId(String),

    #[error("no element registered with id '{0}'")]
    NotFound(String),

    #[error("element '{id}' rejected: {reason}")]
    InvalidDescriptor { id: String, reason: &'static str },
}

/// Malformed input handed to a [`crate::Blackboard`].
#[derive(Debug, Error)]
pub enum BlackboardError {
    #[error("invalid path: {0}")]
    Path(#[from] PathError),

    #[error("invalid value for '{path}': {source}")]
    Value {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
