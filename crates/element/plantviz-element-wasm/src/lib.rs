use js_sys::{Function, JSON};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use plantviz_api_core::{coercion, json, TypedPath, WriteBatch};
use plantviz_element_core::{
    Blackboard, ElementDescriptor, ElementOptions, ElementRegistry, OptionsBuilder, ResolveError,
    ResolvedData, ScalarContext,
};

const DEFAULT_SOURCE: &str = "host";

/// Construction options. `strict` makes `render` refuse records that lack a
/// declared field instead of drawing the field default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    strict: bool,
}

#[wasm_bindgen]
pub struct PlantvizElements {
    registry: ElementRegistry,
    staged: Blackboard,
    epoch: u64,
    strict: bool,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// JS object -> serde type, through JSON so shorthand and flattened host keys
/// behave exactly as they do for persisted options.
fn from_js<T: DeserializeOwned>(what: &str, value: &JsValue) -> Result<T, JsError> {
    let text = JSON::stringify(value)
        .map_err(|e| JsError::new(&format!("{what} stringify error: {e:?}")))?
        .as_string()
        .ok_or_else(|| JsError::new(&format!("{what}: stringify produced non-string")))?;
    serde_json::from_str(&text).map_err(|e| JsError::new(&format!("{what} parse error: {e}")))
}

/// Plain objects out, never JS `Map`s.
fn to_js<T: Serialize + ?Sized>(what: &str, value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("{what} output error: {e}")))
}

/// Adapts a JS callback `resolver(path: string) -> number | string | boolean |
/// array | null/undefined` to the scalar context the element core expects.
struct JsResolver {
    f: Function,
}

impl ScalarContext for JsResolver {
    fn resolve_scalar(&self, reference: &TypedPath) -> Result<f64, ResolveError> {
        let host = |reason: String| ResolveError::Host {
            reference: reference.clone(),
            reason,
        };
        let arg = JsValue::from_str(&reference.to_string());
        let val = self
            .f
            .call1(&JsValue::UNDEFINED, &arg)
            .map_err(|e| host(format!("resolver threw: {e:?}")))?;
        if jsvalue_is_undefined_or_null(&val) {
            return Err(ResolveError::Missing {
                reference: reference.clone(),
            });
        }
        if let Some(n) = val.as_f64() {
            return Ok(n);
        }
        let raw: serde_json::Value =
            from_js("resolver result", &val).map_err(|_| host("unreadable result".into()))?;
        let value = json::parse_value(raw).map_err(|e| host(e.to_string()))?;
        coercion::to_scalar(&value).ok_or_else(|| ResolveError::NotNumeric {
            reference: reference.clone(),
            kind: value.kind(),
        })
    }
}

impl PlantvizElements {
    fn descriptor(&self, id: &str) -> Result<&dyn ElementDescriptor, JsError> {
        self.registry
            .lookup(id)
            .map(|d| &**d)
            .map_err(|e| JsError::new(&format!("lookup error: {e}")))
    }

    fn options(&self, id: &str, options: &JsValue) -> Result<ElementOptions, JsError> {
        let descriptor = self.descriptor(id)?;
        let existing = if jsvalue_is_undefined_or_null(options) {
            ElementOptions::default()
        } else {
            from_js("options", options)?
        };
        Ok(descriptor.new_options(existing))
    }

    fn prepare_with(
        &self,
        id: &str,
        options: &JsValue,
        ctx: &dyn ScalarContext,
    ) -> Result<JsValue, JsError> {
        let descriptor = self.descriptor(id)?;
        let options = self.options(id, options)?;
        let data = descriptor
            .prepare_data(ctx, &options)
            .map_err(|e| JsError::new(&format!("prepare error: {e}")))?;
        to_js("prepare", &data)
    }
}

#[wasm_bindgen]
impl PlantvizElements {
    /// Create a registry holding every built-in element. Pass `{ strict: true }`
    /// or undefined/null for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PlantvizElements, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        let registry =
            ElementRegistry::builtin().map_err(|e| JsError::new(&format!("registry error: {e}")))?;

        Ok(PlantvizElements {
            registry,
            staged: Blackboard::new(),
            epoch: 0,
            strict: cfg.strict,
        })
    }

    /// Element identities in registration order.
    #[wasm_bindgen]
    pub fn list(&self) -> Result<JsValue, JsError> {
        let infos: Vec<_> = self.registry.iter().map(|d| d.info()).collect();
        to_js("list", &infos)
    }

    #[wasm_bindgen]
    pub fn catalog(&self) -> Result<JsValue, JsError> {
        to_js("catalog", &self.registry.catalog())
    }

    /// Defaults merged under the host's persisted options (undefined for a
    /// freshly dropped element).
    #[wasm_bindgen(js_name = newOptions)]
    pub fn new_options(&self, id: &str, existing: JsValue) -> Result<JsValue, JsError> {
        let options = self.options(id, &existing)?;
        to_js("newOptions", &options)
    }

    /// Editor entries for the options panel.
    #[wasm_bindgen(js_name = optionsUi)]
    pub fn options_ui(&self, id: &str) -> Result<JsValue, JsError> {
        let mut builder = OptionsBuilder::new();
        self.descriptor(id)?.register_options_ui(&mut builder);
        to_js("optionsUi", &builder.build())
    }

    /// Resolve `options` by calling `resolver(path)` for every dynamic field.
    #[wasm_bindgen]
    pub fn prepare(
        &self,
        id: &str,
        options: JsValue,
        resolver: Function,
    ) -> Result<JsValue, JsError> {
        let ctx = JsResolver { f: resolver };
        self.prepare_with(id, &options, &ctx)
    }

    /// Resolve `options` against values staged with `setValue`/`applyFrame`.
    #[wasm_bindgen(js_name = prepareStaged)]
    pub fn prepare_staged(&self, id: &str, options: JsValue) -> Result<JsValue, JsError> {
        self.prepare_with(id, &options, &self.staged)
    }

    /// Stage a single value. Accepts shorthand (`2.5`, `true`, `[1, 2]`,
    /// `{ float: 2.5 }`).
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(
        &mut self,
        path: &str,
        value: JsValue,
        source: Option<String>,
    ) -> Result<(), JsError> {
        let raw: serde_json::Value = from_js("setValue", &value)?;
        let source = source.unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        self.staged
            .set(path, raw, self.epoch, source)
            .map_err(|e| JsError::new(&format!("setValue error: {e}")))
    }

    /// Apply a refresh batch `[{ path, value }]` as one epoch. Returns the
    /// overwritten entries.
    #[wasm_bindgen(js_name = applyFrame)]
    pub fn apply_frame(
        &mut self,
        batch: JsValue,
        source: Option<String>,
    ) -> Result<JsValue, JsError> {
        let batch: WriteBatch = from_js("applyFrame", &batch)?;
        self.epoch += 1;
        let source = source.as_deref().unwrap_or(DEFAULT_SOURCE);
        let overwrites = self.staged.apply_writebatch(batch, self.epoch, source);
        to_js("applyFrame", &overwrites)
    }

    #[wasm_bindgen(js_name = clearStaged)]
    pub fn clear_staged(&mut self) {
        self.staged.clear();
    }

    /// Draw a prepared record. Returns the Visual JSON.
    #[wasm_bindgen]
    pub fn render(&self, id: &str, data: JsValue) -> Result<JsValue, JsError> {
        let descriptor = self.descriptor(id)?;
        let data: ResolvedData = if jsvalue_is_undefined_or_null(&data) {
            ResolvedData::new()
        } else {
            from_js("render data", &data)?
        };
        if self.strict {
            if let Some(missing) = descriptor.fields().iter().find(|f| !data.contains(f.key)) {
                return Err(JsError::new(&format!(
                    "render error: {id} record lacks '{}'",
                    missing.key
                )));
            }
        }
        to_js("render", &descriptor.render(&data))
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
