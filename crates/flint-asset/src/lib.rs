//! Flint Asset - Resolver contract for the asset-loading pipeline
//!
//! This crate defines the interface the pipeline calls to turn asset
//! identifiers into openable locations, the host-native value types that
//! cross it, and the plain filesystem resolver used for ordinary paths.

mod asset;
mod filesystem;
mod resolver;
mod types;

pub use asset::{Asset, FileAsset, FileWritableAsset, WritableAsset};
pub use filesystem::{normalize_path, DefaultResolver};
pub use resolver::AssetResolver;
pub use types::{AssetInfo, ResolvedPath, Timestamp, WriteMode, WritePermission};
