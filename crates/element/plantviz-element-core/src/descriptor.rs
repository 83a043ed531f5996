//! The element contract the host drives: defaults, preparation, options UI
//! and rendering.

use serde::{Deserialize, Serialize};

use crate::binding::ScalarContext;
use crate::data::ResolvedData;
use crate::error::ElementError;
use crate::options::ElementOptions;
use crate::resolve::resolve;
use crate::schema::{FieldSpec, OptionsBuilder};
use crate::timing::{AnimationParams, TimingRule};
use crate::visual::{ViewBox, Visual};

/// Upper bound on the items drawn for a repeat field. Counts above it are
/// drawn and staggered as `MAX_REPEAT` items; the resolved record keeps the
/// host's number.
pub const MAX_REPEAT: u32 = 256;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Identity and default geometry of an element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub default_size: Size,
}

/// A pluggable canvas element.
///
/// Implementors describe themselves (`info`, `fields`, `timing`) and draw
/// (`draw`); the provided methods compose those into the host-facing
/// operations. Descriptors are registered once and shared, so they hold no
/// per-instance state.
pub trait ElementDescriptor: Send + Sync {
    fn info(&self) -> &ElementInfo;

    /// Coordinate system the geometry is authored in.
    fn view_box(&self) -> ViewBox;

    /// Declared configuration fields, in editor order.
    fn fields(&self) -> &'static [FieldSpec] {
        &[]
    }

    /// How the main loop duration is derived. `None` for static elements.
    fn timing(&self) -> Option<TimingRule> {
        None
    }

    /// Count field whose items are staggered across one loop.
    fn repeat_field(&self) -> Option<&'static str> {
        None
    }

    /// Items to draw for the repeat field, capped at [`MAX_REPEAT`]. Zero when
    /// the element has no repeat field.
    fn repeat_count(&self, data: &ResolvedData) -> u32 {
        let Some(spec) = self.repeat_field().and_then(|key| self.field(key)) else {
            return 0;
        };
        let count = data.count_or(spec);
        if count > MAX_REPEAT {
            log::debug!("{}: {} count {count} capped at {MAX_REPEAT}", self.id(), spec.key);
        }
        count.min(MAX_REPEAT)
    }

    /// Append shapes, labels and tracks for one frame. `params` is present
    /// whenever [`ElementDescriptor::timing`] is.
    fn draw(&self, data: &ResolvedData, params: Option<&AnimationParams>, out: &mut Visual);

    fn id(&self) -> &'static str {
        self.info().id
    }

    fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.key == key)
    }

    /// Default options merged under `existing`. Present values win and the
    /// merge is idempotent.
    fn new_options(&self, existing: ElementOptions) -> ElementOptions {
        let info = self.info();
        let mut options = existing;
        options.fill_defaults(info.id, info.default_size, self.fields());
        options
    }

    /// Resolve every declared field into a fully populated record.
    ///
    /// Absent bindings take the field default. A dynamic binding the context
    /// cannot satisfy, or an entry that names a field or literal it cannot
    /// read, is an error, never the default.
    fn prepare_data(
        &self,
        ctx: &dyn ScalarContext,
        options: &ElementOptions,
    ) -> Result<ResolvedData, ElementError> {
        let id = self.id();
        let fields = self.fields();
        let mut data = ResolvedData::with_capacity(fields.len());
        for spec in fields {
            let binding = options.binding(spec.key).map_err(|raw| {
                log::warn!("{id}: unreadable binding for '{}': {raw}", spec.key);
                ElementError::UnreadableBinding {
                    element: id.to_string(),
                    field: spec.key.to_string(),
                    raw: raw.to_string(),
                }
            })?;
            let raw = resolve(binding, ctx, spec.default).map_err(|source| {
                log::warn!("{id}: could not resolve '{}': {source}", spec.key);
                ElementError::Resolution {
                    element: id.to_string(),
                    field: spec.key.to_string(),
                    source,
                }
            })?;
            let value = spec
                .settle(raw)
                .map_err(|reason| ElementError::InvalidConfig {
                    element: id.to_string(),
                    field: spec.key.to_string(),
                    value: raw,
                    reason,
                })?;
            data.insert(spec.key, value);
        }
        log::debug!("{id}: prepared {} field(s)", data.len());
        Ok(data)
    }

    fn register_options_ui(&self, builder: &mut OptionsBuilder) {
        let category = self.info().name;
        for spec in self.fields() {
            builder.add_field(category, spec);
        }
    }

    /// Timing for this frame, derived fresh from `data`.
    fn animation(&self, data: &ResolvedData) -> Option<AnimationParams> {
        let rule = self.timing()?;
        let driver = self.field(rule.field())?;
        let duration = rule.duration(data.value_or(driver), driver.default);
        let params = match self.repeat_field() {
            Some(_) => AnimationParams::staggered(duration, self.repeat_count(data)),
            None => AnimationParams::steady(duration),
        };
        Some(params)
    }

    /// Deterministic: equal `data` yields an equal `Visual`.
    fn render(&self, data: &ResolvedData) -> Visual {
        let params = self.animation(data);
        let mut visual = Visual::new(self.id(), self.view_box());
        self.draw(data, params.as_ref(), &mut visual);
        visual
    }
}
