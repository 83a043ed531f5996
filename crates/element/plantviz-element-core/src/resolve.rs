//! Dimension resolver: binding + context + fallback -> number.

use plantviz_api_core::TypedPath;

use crate::binding::{ScalarBinding, ScalarContext};
use crate::error::ResolveError;
use crate::timing::round_and_clamp;

/// Resolve a binding into a concrete number.
///
/// - no binding: `fallback`, the context is not consulted
/// - `Fixed` or a bare number: the captured value
/// - `Dynamic`: whatever the context reports; a failed lookup or a field that
///   is not a valid path is returned to the caller and is never replaced by
///   `fallback`
///
/// Raw numbers are returned as-is; rounding of count fields is up to the caller
/// (see [`resolve_count`]).
pub fn resolve<C>(
    binding: Option<&ScalarBinding>,
    ctx: &C,
    fallback: f64,
) -> Result<f64, ResolveError>
where
    C: ScalarContext + ?Sized,
{
    match binding {
        None => Ok(fallback),
        Some(ScalarBinding::Fixed { fixed, .. } | ScalarBinding::Bare(fixed)) => Ok(*fixed),
        Some(ScalarBinding::Dynamic { field, .. }) => {
            let reference =
                TypedPath::parse(field).map_err(|source| ResolveError::InvalidReference {
                    reference: field.clone(),
                    source,
                })?;
            ctx.resolve_scalar(&reference)
        }
    }
}

/// Resolve a quantity: round half away from zero, negatives clamp to zero.
pub fn resolve_count<C>(
    binding: Option<&ScalarBinding>,
    ctx: &C,
    fallback: u32,
) -> Result<u32, ResolveError>
where
    C: ScalarContext + ?Sized,
{
    resolve(binding, ctx, f64::from(fallback)).map(round_and_clamp)
}
