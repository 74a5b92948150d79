//! Manager plugin registry
//!
//! Maps plugin identifiers to constructors, and picks the configured
//! default manager for a host.

use flint_core::{FlintError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::library::{LibraryManager, LIBRARY_IDENTIFIER};
use crate::manager::{Manager, ManagerFactory};
use crate::types::HostInterface;

/// Which manager to use and how to set it up
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagerSettings {
    pub identifier: String,
    #[serde(default)]
    pub settings: HashMap<String, toml::Value>,
}

impl ManagerSettings {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            settings: HashMap::new(),
        }
    }

    pub fn with_setting(mut self, key: &str, value: impl Into<toml::Value>) -> Self {
        self.settings.insert(key.to_string(), value.into());
        self
    }

    /// String-valued setting
    pub fn setting_str(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(|v| v.as_str())
    }
}

/// Constructor registered for a manager plugin
pub type ManagerConstructor = fn(&ManagerSettings, &HostInterface) -> Result<Box<dyn Manager>>;

/// Registry of available manager plugins
#[derive(Default)]
pub struct ManagerRegistry {
    plugins: BTreeMap<String, ManagerConstructor>,
}

impl ManagerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every manager shipped in this crate
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(LIBRARY_IDENTIFIER, create_library_manager);
        registry
    }

    /// Register a plugin, replacing any previous one with the same identifier
    pub fn register(&mut self, identifier: &str, constructor: ManagerConstructor) {
        self.plugins.insert(identifier.to_string(), constructor);
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.plugins.contains_key(identifier)
    }

    /// All registered identifiers, sorted
    pub fn identifiers(&self) -> Vec<&str> {
        self.plugins.keys().map(|s| s.as_str()).collect()
    }

    /// Instantiate the plugin named by `settings`
    pub fn create(&self, settings: &ManagerSettings, host: &HostInterface) -> Result<Box<dyn Manager>> {
        match self.plugins.get(&settings.identifier) {
            Some(constructor) => constructor(settings, host),
            None => Err(FlintError::ConfigError(format!(
                "Unknown manager '{}'. Available: {}",
                settings.identifier,
                self.identifiers().join(", ")
            ))),
        }
    }
}

fn create_library_manager(settings: &ManagerSettings, host: &HostInterface) -> Result<Box<dyn Manager>> {
    let path = settings.setting_str("library_path").ok_or_else(|| {
        FlintError::ConfigError(format!(
            "Manager '{}' requires a 'library_path' setting",
            LIBRARY_IDENTIFIER
        ))
    })?;
    log::debug!("Loading library {} for {}", path, host.display_name);
    Ok(Box::new(LibraryManager::load_from_file(path)?))
}

/// Factory that instantiates the configured default plugin from a registry
pub struct RegistryManagerFactory {
    registry: ManagerRegistry,
    default: Option<ManagerSettings>,
}

impl RegistryManagerFactory {
    pub fn new(registry: ManagerRegistry, default: Option<ManagerSettings>) -> Self {
        Self { registry, default }
    }
}

impl ManagerFactory for RegistryManagerFactory {
    fn default_manager(&self, host: &HostInterface) -> Result<Option<Box<dyn Manager>>> {
        match &self.default {
            Some(settings) => self.registry.create(settings, host).map(Some),
            None => Ok(None),
        }
    }
}
