//! Managed asset resolver
//!
//! Routes entity references to the asset manager and everything else to
//! the filesystem resolver. Every host-facing operation runs inside
//! [`guard`], so the host only ever sees default values on failure.

use flint_asset::{
    Asset, AssetInfo, AssetResolver, DefaultResolver, ResolvedPath, Timestamp, WritableAsset,
    WriteMode, WritePermission,
};
use flint_core::{FlintError, Result};
use flint_manager::{Manager, ManagerFactory, ManagerRegistry, RegistryManagerFactory};
use std::sync::Arc;

use crate::classifier::{self, Locator};
use crate::config::ResolverConfig;
use crate::diagnostics::{DiagnosticBridge, HostDiagnostics, LogDiagnostics};
use crate::engine;
use crate::guard::guard;
use crate::negotiator::{self, BackendHandle};

/// Asset resolver that understands entity references.
///
/// Plain paths go to `D` untouched. References are resolved through the
/// negotiated manager; writing to a reference is not supported.
#[derive(Debug)]
pub struct ManagedResolver<D: AssetResolver = DefaultResolver> {
    backend: BackendHandle,
    fallback: D,
    diagnostics: DiagnosticBridge,
}

impl ManagedResolver<DefaultResolver> {
    /// Build a resolver from configuration using the built-in manager plugins
    pub fn from_config(config: &ResolverConfig) -> Result<Self> {
        Self::from_config_with(config, ManagerRegistry::with_builtins(), Arc::new(LogDiagnostics))
    }

    /// Build a resolver from configuration with a custom plugin registry and
    /// diagnostics sink
    pub fn from_config_with(
        config: &ResolverConfig,
        registry: ManagerRegistry,
        sink: Arc<dyn HostDiagnostics>,
    ) -> Result<Self> {
        let diagnostics = DiagnosticBridge::new(sink, config.log_level);
        let factory = RegistryManagerFactory::new(registry, config.manager.clone());
        let fallback = DefaultResolver::with_search_paths(config.search_paths.iter().cloned());
        Self::new(&factory, fallback, diagnostics)
    }
}

impl<D: AssetResolver> ManagedResolver<D> {
    /// Negotiate a manager through `factory`.
    ///
    /// Fails when no manager is configured or the manager cannot resolve.
    pub fn new(factory: &dyn ManagerFactory, fallback: D, diagnostics: DiagnosticBridge) -> Result<Self> {
        let backend = negotiator::initialize(factory, &diagnostics)?;
        Ok(Self {
            backend,
            fallback,
            diagnostics,
        })
    }

    pub fn manager(&self) -> &dyn Manager {
        self.backend.manager()
    }

    pub fn fallback(&self) -> &D {
        &self.fallback
    }

    pub fn diagnostics(&self) -> &DiagnosticBridge {
        &self.diagnostics
    }

    /// Whether the manager recognises `asset_path` as one of its references
    pub fn is_reference(&self, asset_path: &str) -> bool {
        self.run("is_reference", || {
            Ok(classifier::is_reference(self.manager(), asset_path))
        })
    }

    fn classify(&self, asset_path: &str) -> Locator {
        classifier::classify(self.manager(), asset_path)
    }

    fn run<T, F>(&self, operation: &str, f: F) -> T
    where
        T: Default,
        F: FnOnce() -> Result<T>,
    {
        guard(&self.diagnostics, operation, || {
            self.diagnostics.debug(&format!("Flint resolver: {}", operation));
            f()
        })
    }
}

impl<D: AssetResolver> AssetResolver for ManagedResolver<D> {
    fn create_identifier(&self, asset_path: &str, anchor: &ResolvedPath) -> String {
        self.run("create_identifier", || match self.classify(asset_path) {
            // References are never anchored
            Locator::Reference(_) => Ok(asset_path.to_string()),
            Locator::PlainPath => Ok(self.fallback.create_identifier(asset_path, anchor)),
        })
    }

    fn create_identifier_for_new_asset(&self, asset_path: &str, anchor: &ResolvedPath) -> String {
        self.run("create_identifier_for_new_asset", || match self.classify(asset_path) {
            Locator::Reference(reference) => Err(FlintError::WriteNotSupported(reference.to_string())),
            Locator::PlainPath => Ok(self
                .fallback
                .create_identifier_for_new_asset(asset_path, anchor)),
        })
    }

    fn resolve(&self, asset_path: &str) -> ResolvedPath {
        self.run("resolve", || match self.classify(asset_path) {
            Locator::Reference(reference) => {
                engine::resolve_to_path(self.manager(), &reference, self.backend.context())
            }
            Locator::PlainPath => Ok(self.fallback.resolve(asset_path)),
        })
    }

    fn resolve_for_new_asset(&self, asset_path: &str) -> ResolvedPath {
        self.run("resolve_for_new_asset", || match self.classify(asset_path) {
            Locator::Reference(reference) => Err(FlintError::WriteNotSupported(reference.to_string())),
            Locator::PlainPath => Ok(self.fallback.resolve_for_new_asset(asset_path)),
        })
    }

    // The remaining queries go straight to the filesystem resolver, even for
    // references; they are not worth a manager round trip.

    fn get_extension(&self, asset_path: &str) -> String {
        self.run("get_extension", || Ok(self.fallback.get_extension(asset_path)))
    }

    fn get_asset_info(&self, asset_path: &str, resolved: &ResolvedPath) -> AssetInfo {
        self.run("get_asset_info", || {
            Ok(self.fallback.get_asset_info(asset_path, resolved))
        })
    }

    fn get_modification_timestamp(&self, asset_path: &str, resolved: &ResolvedPath) -> Timestamp {
        self.run("get_modification_timestamp", || {
            Ok(self.fallback.get_modification_timestamp(asset_path, resolved))
        })
    }

    fn open_asset(&self, resolved: &ResolvedPath) -> Option<Arc<dyn Asset>> {
        self.run("open_asset", || Ok(self.fallback.open_asset(resolved)))
    }

    fn can_write_asset_to_path(&self, resolved: &ResolvedPath) -> WritePermission {
        self.run("can_write_asset_to_path", || {
            Ok(self.fallback.can_write_asset_to_path(resolved))
        })
    }

    fn open_asset_for_write(
        &self,
        resolved: &ResolvedPath,
        mode: WriteMode,
    ) -> Option<Arc<dyn WritableAsset>> {
        self.run("open_asset_for_write", || {
            Ok(self.fallback.open_asset_for_write(resolved, mode))
        })
    }
}
