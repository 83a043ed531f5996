//! Persisted per-instance element options.
//!
//! The host owns this record and stores it verbatim. Only the parts an
//! element cares about are typed; every other key survives a round trip
//! through `extra`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::binding::ScalarBinding;
use crate::descriptor::Size;
use crate::schema::FieldSpec;

pub const TRANSPARENT: &str = "transparent";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementOptions {
    /// Element id this instance was created from.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub config: IndexMap<String, ConfigEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_click_mode: Option<OneClickMode>,
    #[serde(default)]
    pub links: Vec<DataLink>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// A `config` entry. Entries that do not look like a binding are kept
/// as raw JSON so unknown host settings are not lost.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigEntry {
    Binding(ScalarBinding),
    Other(JsonValue),
}

impl ElementOptions {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Binding for `key`, if the entry exists and is a binding. A non-binding
    /// entry that still carries a `field` or `fixed` key is handed back as an
    /// error instead of being skipped.
    pub fn binding(&self, key: &str) -> Result<Option<&ScalarBinding>, &JsonValue> {
        match self.config.get(key) {
            None => Ok(None),
            Some(ConfigEntry::Binding(b)) => Ok(Some(b)),
            Some(ConfigEntry::Other(raw)) if looks_like_binding(raw) => Err(raw),
            Some(ConfigEntry::Other(raw)) => {
                log::debug!("config.{key} is not a scalar binding: {raw}");
                Ok(None)
            }
        }
    }

    pub fn set_binding(&mut self, key: impl Into<String>, binding: ScalarBinding) {
        self.config.insert(key.into(), ConfigEntry::Binding(binding));
    }

    pub fn with_binding(mut self, key: impl Into<String>, binding: ScalarBinding) -> Self {
        self.set_binding(key, binding);
        self
    }

    /// Fill whatever the element owns and the record lacks. Present values
    /// are never touched, so applying this twice is the same as once.
    pub(crate) fn fill_defaults(&mut self, id: &str, size: Size, fields: &[FieldSpec]) {
        if self.kind != id {
            if !self.kind.is_empty() {
                log::debug!("options typed '{}' adopted by '{}'", self.kind, id);
            }
            self.kind = id.to_string();
        }
        for spec in fields {
            if !self.config.contains_key(spec.key) {
                self.set_binding(spec.key, ScalarBinding::fixed(spec.default));
            }
        }

        let background = self.background.get_or_insert_with(Background::default);
        if background.color.is_none() {
            background.color = Some(ColorBinding::fixed(TRANSPARENT));
        }

        let placement = self.placement.get_or_insert_with(Placement::default);
        placement.width.get_or_insert(size.width);
        placement.height.get_or_insert(size.height);
        placement.rotation.get_or_insert(0.0);

        self.one_click_mode.get_or_insert(OneClickMode::Off);
    }
}

fn looks_like_binding(raw: &JsonValue) -> bool {
    let set = |key: &str| match raw.get(key) {
        None | Some(JsonValue::Null) => false,
        Some(JsonValue::String(s)) => !s.is_empty(),
        Some(_) => true,
    };
    set("field") || set("fixed")
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Background {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorBinding>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Colour dimension: a fixed CSS colour or a field reference the host
/// maps through its own colour scheme.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorBinding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ColorBinding {
    pub fn fixed(color: impl Into<String>) -> Self {
        Self {
            fixed: Some(color.into()),
            field: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OneClickMode {
    #[default]
    Off,
    Link,
    Action,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataLink {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::rate("speed", "Speed", 1.0),
        FieldSpec::count("boxCount", "Boxes", 3.0),
    ];
    const SIZE: Size = Size {
        width: 400.0,
        height: 200.0,
    };

    #[test]
    fn defaults_fill_only_missing_parts() {
        let mut opts: ElementOptions = serde_json::from_value(json!({
            "config": { "speed": { "field": "line1/Conveyor.speed" } },
            "placement": { "width": 320, "top": 10 },
            "constraint": { "vertical": "top" }
        }))
        .unwrap();
        opts.fill_defaults("conveyorBeltNewUnique", SIZE, FIELDS);

        assert_eq!(opts.kind, "conveyorBeltNewUnique");
        assert!(opts.binding("speed").unwrap().unwrap().is_dynamic());
        assert_eq!(opts.binding("boxCount"), Ok(Some(&ScalarBinding::fixed(3.0))));
        let placement = opts.placement.as_ref().unwrap();
        assert_eq!(placement.width, Some(320.0));
        assert_eq!(placement.height, Some(200.0));
        assert_eq!(placement.top, Some(10.0));
        assert_eq!(placement.rotation, Some(0.0));
        assert_eq!(opts.one_click_mode, Some(OneClickMode::Off));
        assert_eq!(opts.extra["constraint"], json!({ "vertical": "top" }));

        let once = opts.clone();
        opts.fill_defaults("conveyorBeltNewUnique", SIZE, FIELDS);
        assert_eq!(opts, once);
    }

    #[test]
    fn serialized_shape_matches_host() {
        let mut opts = ElementOptions::default();
        opts.fill_defaults("conveyorBeltNewUnique", SIZE, FIELDS);
        let v = serde_json::to_value(&opts).unwrap();
        assert_eq!(v["type"], "conveyorBeltNewUnique");
        assert_eq!(v["config"]["speed"], json!({ "fixed": 1.0 }));
        assert_eq!(v["background"], json!({ "color": { "fixed": "transparent" } }));
        assert_eq!(v["oneClickMode"], "off");
        assert_eq!(v["links"], json!([]));
    }

    #[test]
    fn foreign_config_entries_survive() {
        let opts: ElementOptions = serde_json::from_value(json!({
            "type": "drillMachine",
            "config": { "animationSpeed": 2, "theme": "dark" }
        }))
        .unwrap();
        assert_eq!(opts.binding("animationSpeed"), Ok(Some(&ScalarBinding::Bare(2.0))));
        assert_eq!(opts.binding("theme"), Ok(None));
        let v = serde_json::to_value(&opts).unwrap();
        assert_eq!(v["config"]["theme"], "dark");
    }

    #[test]
    fn unreadable_bindings_are_reported() {
        let opts: ElementOptions = serde_json::from_value(json!({
            "config": {
                "speed": { "field": 5 },
                "boxCount": { "fixed": "three" },
                "unset": { "field": "" },
                "rpm": { "field": "Mixer rpm" }
            }
        }))
        .unwrap();
        assert_eq!(opts.binding("speed"), Err(&json!({ "field": 5 })));
        assert!(opts.binding("boxCount").is_err());
        assert_eq!(opts.binding("unset"), Ok(None));
        assert!(opts.binding("rpm").unwrap().unwrap().is_dynamic());
        assert_eq!(opts.binding("missing"), Ok(None));
    }

    #[test]
    fn editor_keys_beside_a_binding_survive_defaulting() {
        let raw = json!({ "fixed": 1.0, "field": "line1/Mixer.rpm", "min": 0.0, "max": 10.0 });
        let mut opts: ElementOptions =
            serde_json::from_value(json!({ "config": { "speed": raw.clone() } })).unwrap();
        opts.fill_defaults("conveyorBeltNewUnique", SIZE, FIELDS);
        let v = serde_json::to_value(&opts).unwrap();
        assert_eq!(v["config"]["speed"], raw);
    }
}
