//! Entity reference resolution
//!
//! A reference resolves through the manager's `LocatableContent` trait to a
//! URL, which must use the `file://` scheme. The URL is turned into a path
//! by stripping the scheme and decoding `%20` escapes. No other escapes are
//! decoded.

use flint_asset::ResolvedPath;
use flint_core::{FlintError, Result};
use flint_manager::{Access, Context, EntityReference, LocatableContent, Manager, TraitValue};

/// The only URL scheme that resolves to a path
pub const FILE_SCHEME: &str = "file://";

/// Resolve `reference` to a filesystem path.
///
/// Errors raised by the manager are returned unchanged.
pub fn resolve_to_path(
    manager: &dyn Manager,
    reference: &EntityReference,
    context: &Context,
) -> Result<ResolvedPath> {
    let data = manager.resolve(reference, &[LocatableContent::ID], Access::Read, context)?;

    match LocatableContent::new(&data).location() {
        None => Err(FlintError::NoLocation(reference.to_string())),
        Some(TraitValue::String(url)) => url_to_path(url),
        Some(other) => Err(FlintError::UnsupportedScheme(other.to_string())),
    }
}

/// Convert a `file://` URL into a path string
pub fn url_to_path(url: &str) -> Result<ResolvedPath> {
    let rest = url
        .strip_prefix(FILE_SCHEME)
        .ok_or_else(|| FlintError::UnsupportedScheme(url.to_string()))?;
    Ok(ResolvedPath::new(rest.replace("%20", " ")))
}
