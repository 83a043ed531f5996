//! plantviz-element-core: industrial canvas elements for a pluggable
//! visualization host.
//!
//! A host creates an element's options once ([`ElementDescriptor::new_options`]),
//! then on every data refresh resolves them against a live data context
//! ([`ElementDescriptor::prepare_data`]) and renders the result
//! ([`ElementDescriptor::render`]) into a declarative [`Visual`]. Nothing in
//! here keeps state between refreshes.

pub mod binding;
pub mod blackboard;
pub mod data;
pub mod descriptor;
pub mod elements;
pub mod error;
pub mod options;
pub mod registry;
pub mod resolve;
pub mod schema;
pub mod timing;
pub mod visual;

pub use binding::{from_fn, EmptyContext, FnContext, ScalarBinding, ScalarContext};
pub use blackboard::{Blackboard, BlackboardEntry, Overwrite};
pub use data::ResolvedData;
pub use descriptor::{ElementDescriptor, ElementInfo, Size, MAX_REPEAT};
pub use error::{BlackboardError, ElementError, RegistryError, ResolveError};
pub use options::{ConfigEntry, ElementOptions, OneClickMode};
pub use registry::{Catalog, CatalogEntry, ElementRegistry, CATALOG_VERSION};
pub use resolve::{resolve, resolve_count};
pub use schema::{EditorField, EditorKind, FieldKind, FieldSpec, OptionsBuilder};
pub use timing::{AnimationParams, TimingRule, MIN_RATE};
pub use visual::Visual;

pub use plantviz_api_core::TypedPath;
