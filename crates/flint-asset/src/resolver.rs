//! The resolver contract the asset-loading pipeline calls into

use std::sync::Arc;

use crate::asset::{Asset, WritableAsset};
use crate::types::{AssetInfo, ResolvedPath, Timestamp, WriteMode, WritePermission};

/// Resolver interface used by the asset-loading pipeline.
///
/// Implementations are called from many threads at once and must not
/// panic or fail across this boundary: each method reports "nothing" by
/// returning the default value of its result type.
pub trait AssetResolver: Send + Sync {
    /// Produce the identifier the pipeline uses to refer to `asset_path`,
    /// anchored to the asset that referenced it
    fn create_identifier(&self, asset_path: &str, anchor: &ResolvedPath) -> String;

    /// Produce an identifier for an asset that is about to be created
    fn create_identifier_for_new_asset(&self, asset_path: &str, anchor: &ResolvedPath) -> String;

    /// Resolve an identifier to an existing, openable location
    fn resolve(&self, asset_path: &str) -> ResolvedPath;

    /// Resolve an identifier to the location a new asset should be written to
    fn resolve_for_new_asset(&self, asset_path: &str) -> ResolvedPath;

    /// File extension of the identifier, without the dot
    fn get_extension(&self, asset_path: &str) -> String;

    fn get_asset_info(&self, asset_path: &str, resolved: &ResolvedPath) -> AssetInfo;

    fn get_modification_timestamp(&self, asset_path: &str, resolved: &ResolvedPath) -> Timestamp;

    fn open_asset(&self, resolved: &ResolvedPath) -> Option<Arc<dyn Asset>>;

    fn can_write_asset_to_path(&self, resolved: &ResolvedPath) -> WritePermission;

    fn open_asset_for_write(
        &self,
        resolved: &ResolvedPath,
        mode: WriteMode,
    ) -> Option<Arc<dyn WritableAsset>>;
}
