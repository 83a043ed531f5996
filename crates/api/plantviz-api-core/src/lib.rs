//! plantviz-api-core: value model shared by the element core, its data
//! contexts and the wasm surface.

pub mod coercion;
pub mod json;
pub mod typed_path;
pub mod value;
pub mod write_ops;

pub use typed_path::TypedPath;
pub use value::{Value, ValueKind};
pub use write_ops::{WriteBatch, WriteOp};
