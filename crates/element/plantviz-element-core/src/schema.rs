//! Declared configuration fields and the editor metadata derived from them.

use plantviz_api_core::TypedPath;
use serde::{Deserialize, Serialize};

/// Semantic kind of a configuration field. Decides how a resolved value is
/// settled before it reaches the render path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Units per second, larger is faster. Sign is direction only.
    Rate,
    /// Seconds per cycle. Must not be negative.
    Period,
    /// Number of repeated items. Rounded and clamped at zero.
    Count,
    /// Displayed reading (temperature, pressure). Passed through.
    Measure,
}

/// Widget the options editor should use for a field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EditorKind {
    /// Fixed-or-field dimension editor.
    ScalarDimension,
    /// Plain numeric input with bounds.
    NumberInput { min: f64, max: f64, step: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub description: &'static str,
    pub kind: FieldKind,
    pub default: f64,
    pub editor: EditorKind,
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind, default: f64) -> Self {
        Self {
            key,
            label,
            description: "",
            kind,
            default,
            editor: EditorKind::ScalarDimension,
        }
    }

    pub const fn rate(key: &'static str, label: &'static str, default: f64) -> Self {
        Self::new(key, label, FieldKind::Rate, default)
    }

    pub const fn period(key: &'static str, label: &'static str, default: f64) -> Self {
        Self::new(key, label, FieldKind::Period, default)
    }

    pub const fn count(key: &'static str, label: &'static str, default: f64) -> Self {
        Self::new(key, label, FieldKind::Count, default)
    }

    pub const fn measure(key: &'static str, label: &'static str, default: f64) -> Self {
        Self::new(key, label, FieldKind::Measure, default)
    }

    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub const fn number_input(mut self, min: f64, max: f64, step: f64) -> Self {
        self.editor = EditorKind::NumberInput { min, max, step };
        self
    }

    /// Bring a resolved value into its render-ready form. Well-defined clamps
    /// happen here; anything without a safe clamp is reported back.
    pub fn settle(&self, raw: f64) -> Result<f64, &'static str> {
        if !raw.is_finite() {
            return Err("not a finite number");
        }
        match self.kind {
            FieldKind::Count => {
                let count = crate::timing::round_and_clamp(raw);
                if f64::from(count) != raw {
                    log::debug!("{}: count {} settled to {}", self.key, raw, count);
                }
                Ok(f64::from(count))
            }
            FieldKind::Period if raw < 0.0 => Err("negative period"),
            FieldKind::Period | FieldKind::Rate | FieldKind::Measure => Ok(raw),
        }
    }

    pub fn editor_path(&self) -> TypedPath {
        TypedPath::config_field(self.key)
    }
}

/// One entry of the options editor, as consumed by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorField {
    pub category: Vec<String>,
    pub id: String,
    pub path: TypedPath,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub editor: EditorKind,
    pub default_value: f64,
}

/// Collects editor entries declared by `register_options_ui`.
#[derive(Clone, Debug, Default)]
pub struct OptionsBuilder {
    fields: Vec<EditorField>,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: EditorField) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Editor entry for a declared field under `category`.
    pub fn add_field(&mut self, category: &str, spec: &FieldSpec) -> &mut Self {
        self.add(EditorField {
            category: vec![category.to_string()],
            id: spec.key.to_string(),
            path: spec.editor_path(),
            name: spec.label.to_string(),
            description: (!spec.description.is_empty()).then(|| spec.description.to_string()),
            editor: spec.editor,
            default_value: spec.default,
        })
    }

    pub fn fields(&self) -> &[EditorField] {
        &self.fields
    }

    pub fn build(self) -> Vec<EditorField> {
        self.fields
    }
}
