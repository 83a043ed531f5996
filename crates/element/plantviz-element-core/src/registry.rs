//! Element registry and the serializable catalog built from it.

use std::sync::Arc;

use hashbrown::HashSet;
use indexmap::IndexMap;
use serde::Serialize;

use crate::descriptor::{ElementDescriptor, Size};
use crate::error::RegistryError;
use crate::schema::{EditorField, FieldKind, FieldSpec, OptionsBuilder};
use crate::timing::TimingRule;

pub const CATALOG_VERSION: &str = "1.0.0";

/// Descriptors keyed by id, enumerated in registration order.
#[derive(Clone, Default)]
pub struct ElementRegistry {
    elements: IndexMap<&'static str, Arc<dyn ElementDescriptor>>,
}

impl std::fmt::Debug for ElementRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.elements.keys()).finish()
    }
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in element. Fails on the first built-in
    /// the registry refuses.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for descriptor in crate::elements::builtin() {
            registry.register_arc(descriptor)?;
        }
        Ok(registry)
    }

    pub fn register<D>(&mut self, descriptor: D) -> Result<(), RegistryError>
    where
        D: ElementDescriptor + 'static,
    {
        self.register_arc(Arc::new(descriptor))
    }

    /// Add a descriptor. A second registration under the same id is refused
    /// and the first one stays in place.
    pub fn register_arc(
        &mut self,
        descriptor: Arc<dyn ElementDescriptor>,
    ) -> Result<(), RegistryError> {
        validate(descriptor.as_ref())?;
        let id = descriptor.id();
        if self.elements.contains_key(id) {
            log::warn!("duplicate element id '{id}' ignored");
            return Err(RegistryError::DuplicateId(id.to_string()));
        }
        log::debug!("registered element '{id}'");
        self.elements.insert(id, descriptor);
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Result<&Arc<dyn ElementDescriptor>, RegistryError> {
        self.elements
            .get(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.elements.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ElementDescriptor>> {
        self.elements.values()
    }

    pub fn catalog(&self) -> Catalog {
        Catalog {
            version: CATALOG_VERSION,
            elements: self.iter().map(|d| CatalogEntry::of(d.as_ref())).collect(),
        }
    }
}

fn validate(descriptor: &dyn ElementDescriptor) -> Result<(), RegistryError> {
    let info = descriptor.info();
    let reject = |reason: &'static str| RegistryError::InvalidDescriptor {
        id: info.id.to_string(),
        reason,
    };
    if info.id.is_empty() {
        return Err(reject("empty id"));
    }
    if !info.default_size.is_valid() {
        return Err(reject("default size must be positive and finite"));
    }

    let mut seen = HashSet::new();
    for spec in descriptor.fields() {
        if !seen.insert(spec.key) {
            return Err(reject("duplicate field key"));
        }
        if !spec.default.is_finite() {
            return Err(reject("field default is not finite"));
        }
        if spec.kind == FieldKind::Rate && spec.default <= 0.0 {
            return Err(reject("rate default must be positive"));
        }
    }
    if let Some(rule) = descriptor.timing() {
        if descriptor.field(rule.field()).is_none() {
            return Err(reject("timing field is not declared"));
        }
    }
    if let Some(key) = descriptor.repeat_field() {
        match descriptor.field(key) {
            Some(spec) if spec.kind == FieldKind::Count => {}
            _ => return Err(reject("repeat field must be a declared count")),
        }
    }
    Ok(())
}

/// Snapshot of the registry for host tooling.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Catalog {
    pub version: &'static str,
    pub elements: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.elements.iter().find(|e| e.id == id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub default_size: Size,
    pub fields: Vec<FieldSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<TimingRule>,
    pub editor: Vec<EditorField>,
}

impl CatalogEntry {
    fn of(descriptor: &dyn ElementDescriptor) -> Self {
        let info = descriptor.info();
        let mut builder = OptionsBuilder::new();
        descriptor.register_options_ui(&mut builder);
        Self {
            id: info.id,
            name: info.name,
            description: info.description,
            default_size: info.default_size,
            fields: descriptor.fields().to_vec(),
            timing: descriptor.timing(),
            editor: builder.build(),
        }
    }
}
