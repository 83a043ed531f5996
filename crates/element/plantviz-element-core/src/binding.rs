//! Scalar bindings and the context seam used to resolve them.
//!
//! A configuration field is either a fixed literal or a reference into the
//! host's live data. Persisted form follows the host's dimension config:
//! `{ "fixed": 1 }` or `{ "field": "line1/Conveyor.speed" }`. Any non-empty
//! `field` makes the binding dynamic, even one that is not a valid path; the
//! bad path is reported when the binding is resolved. A bare number is read
//! as fixed. Keys the editor stores next to these (`min`, `max`, `mode`, a
//! shadowed `fixed`) are carried through untouched.

use plantviz_api_core::TypedPath;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::ResolveError;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarBinding {
    /// Resolved through a [`ScalarContext`] on every refresh.
    Dynamic {
        field: String,
        /// Literal kept from an earlier edit; never consulted while `field`
        /// is set.
        #[serde(skip_serializing_if = "Option::is_none")]
        fixed: Option<f64>,
        #[serde(flatten)]
        extra: Map<String, JsonValue>,
    },
    /// Constant value captured when the options were edited.
    Fixed {
        fixed: f64,
        #[serde(flatten)]
        extra: Map<String, JsonValue>,
    },
    /// Plain number persisted without a record around it.
    Bare(f64),
}

impl ScalarBinding {
    pub fn fixed(value: f64) -> Self {
        ScalarBinding::Fixed {
            fixed: value,
            extra: Map::new(),
        }
    }

    pub fn dynamic(field: TypedPath) -> Self {
        ScalarBinding::Dynamic {
            field: field.to_string(),
            fixed: None,
            extra: Map::new(),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, ScalarBinding::Dynamic { .. })
    }
}

impl<'de> Deserialize<'de> for ScalarBinding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bare(f64),
            Record {
                #[serde(default)]
                field: Option<String>,
                #[serde(default)]
                fixed: Option<f64>,
                #[serde(flatten)]
                extra: Map<String, JsonValue>,
            },
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bare(value) => Ok(ScalarBinding::Bare(value)),
            Raw::Record {
                field: Some(field),
                fixed,
                extra,
            } if !field.is_empty() => Ok(ScalarBinding::Dynamic {
                field,
                fixed,
                extra,
            }),
            Raw::Record {
                field,
                fixed: Some(fixed),
                mut extra,
            } => {
                // A cleared editor field is written back as it was read.
                if let Some(field) = field {
                    extra.insert("field".into(), JsonValue::String(field));
                }
                Ok(ScalarBinding::Fixed { fixed, extra })
            }
            Raw::Record { .. } => Err(D::Error::custom(
                "binding needs a non-empty 'field' or a numeric 'fixed'",
            )),
        }
    }
}

/// Host data context. Adapters (blackboard, wasm callback) implement this
/// and pass it into `prepare_data`. Failure and retry policy belong to the
/// implementation.
pub trait ScalarContext {
    fn resolve_scalar(&self, reference: &TypedPath) -> Result<f64, ResolveError>;
}

impl<C: ScalarContext + ?Sized> ScalarContext for &C {
    fn resolve_scalar(&self, reference: &TypedPath) -> Result<f64, ResolveError> {
        (**self).resolve_scalar(reference)
    }
}

/// Context with no published data; every dynamic lookup is `Missing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyContext;

impl ScalarContext for EmptyContext {
    fn resolve_scalar(&self, reference: &TypedPath) -> Result<f64, ResolveError> {
        Err(ResolveError::Missing {
            reference: reference.clone(),
        })
    }
}

/// Context backed by a closure. See [`from_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FnContext<F>(F);

/// Wrap a closure as a [`ScalarContext`].
pub fn from_fn<F>(f: F) -> FnContext<F>
where
    F: Fn(&TypedPath) -> Result<f64, ResolveError>,
{
    FnContext(f)
}

impl<F> ScalarContext for FnContext<F>
where
    F: Fn(&TypedPath) -> Result<f64, ResolveError>,
{
    fn resolve_scalar(&self, reference: &TypedPath) -> Result<f64, ResolveError> {
        (self.0)(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn persisted_forms() {
        let fixed: ScalarBinding = serde_json::from_value(json!({ "fixed": 3 })).unwrap();
        assert_eq!(fixed, ScalarBinding::fixed(3.0));

        let dynamic: ScalarBinding =
            serde_json::from_value(json!({ "field": "line1/Conveyor.speed" })).unwrap();
        assert!(dynamic.is_dynamic());

        // Field wins over fixed when both are present; the literal is kept.
        let both: ScalarBinding =
            serde_json::from_value(json!({ "fixed": 1, "field": "line1/Mixer.rpm" })).unwrap();
        assert_eq!(
            both,
            ScalarBinding::Dynamic {
                field: "line1/Mixer.rpm".into(),
                fixed: Some(1.0),
                extra: Map::new(),
            }
        );

        // An editor that cleared the field leaves an empty string behind.
        let cleared: ScalarBinding =
            serde_json::from_value(json!({ "fixed": 2, "field": "" })).unwrap();
        assert!(!cleared.is_dynamic());
        assert_eq!(serde_json::to_value(&cleared).unwrap(), json!({ "fixed": 2.0, "field": "" }));

        let bare: ScalarBinding = serde_json::from_value(json!(1.5)).unwrap();
        assert_eq!(bare, ScalarBinding::Bare(1.5));
    }

    #[test]
    fn malformed_paths_stay_dynamic() {
        let spaced: ScalarBinding =
            serde_json::from_value(json!({ "field": "Mixer rpm" })).unwrap();
        assert!(spaced.is_dynamic());

        let shadowed: ScalarBinding =
            serde_json::from_value(json!({ "fixed": 1, "field": "Mixer rpm" })).unwrap();
        assert!(shadowed.is_dynamic());
    }

    #[test]
    fn records_without_a_value_are_refused() {
        for raw in [json!({}), json!({ "field": "" }), json!({ "field": 5 }), json!("1")] {
            assert!(serde_json::from_value::<ScalarBinding>(raw.clone()).is_err(), "{raw}");
        }
    }

    #[test]
    fn editor_keys_survive_a_round_trip() {
        let raw = json!({
            "fixed": 1.0,
            "field": "line1/Mixer.rpm",
            "min": 0.0,
            "max": 10.0,
            "mode": "dimension"
        });
        let binding: ScalarBinding = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&binding).unwrap(), raw);

        let fixed = json!({ "fixed": 4.0, "min": 1.0 });
        let binding: ScalarBinding = serde_json::from_value(fixed.clone()).unwrap();
        assert_eq!(serde_json::to_value(&binding).unwrap(), fixed);
    }

    #[test]
    fn serializes_back_to_host_shape() {
        assert_eq!(
            serde_json::to_value(ScalarBinding::fixed(0.5)).unwrap(),
            json!({ "fixed": 0.5 })
        );
        assert_eq!(
            serde_json::to_value(ScalarBinding::dynamic(TypedPath::parse("a/b.c").unwrap()))
                .unwrap(),
            json!({ "field": "a/b.c" })
        );
        assert_eq!(serde_json::to_value(ScalarBinding::Bare(2.0)).unwrap(), json!(2.0));
    }

    #[test]
    fn fn_context_delegates() {
        let ctx = from_fn(|p: &TypedPath| {
            if p.leaf() == "speed" {
                Ok(2.5)
            } else {
                Err(ResolveError::Missing {
                    reference: p.clone(),
                })
            }
        });
        let speed = TypedPath::parse("line1/Conveyor.speed").unwrap();
        let other = TypedPath::parse("line1/Conveyor.load").unwrap();
        assert_eq!(ctx.resolve_scalar(&speed), Ok(2.5));
        assert!(ctx.resolve_scalar(&other).is_err());
        assert!(EmptyContext.resolve_scalar(&speed).is_err());
    }
}
