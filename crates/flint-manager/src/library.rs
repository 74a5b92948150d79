//! Built-in manager backed by a TOML entity library
//!
//! References look like `flint:///<entity>`. A library file lists the
//! traits of each entity:
//!
//! ```toml
//! [entities.chair.traits."content.LocatableContent"]
//! location = "${library_dir_url}/props/chair.usda"
//! ```

use flint_core::{FlintError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::manager::Manager;
use crate::traits::TraitsData;
use crate::types::{Access, Capability, Context, EntityReference};

/// Plugin identifier of the library manager
pub const LIBRARY_IDENTIFIER: &str = "flint.manager.library";

/// Prefix every library reference starts with
pub const REFERENCE_PREFIX: &str = "flint:///";

/// Placeholder substituted with the library directory as a `file://` URL
pub const LIBRARY_DIR_URL_VAR: &str = "${library_dir_url}";

#[derive(Debug, Default, Deserialize)]
struct LibraryFile {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    entities: HashMap<String, LibraryEntity>,
}

#[derive(Debug, Default, Deserialize)]
struct LibraryEntity {
    #[serde(default)]
    traits: TraitsData,
}

/// Read-only manager that serves entities from an in-memory library
#[derive(Debug)]
pub struct LibraryManager {
    display_name: String,
    entities: HashMap<String, TraitsData>,
}

impl Default for LibraryManager {
    fn default() -> Self {
        Self {
            display_name: "Flint Library".to_string(),
            entities: HashMap::new(),
        }
    }
}

impl LibraryManager {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a library file, substituting `${library_dir_url}` in string values
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FlintError::ConfigError(format!("Failed to read library {}: {}", path.display(), e))
        })?;
        let file: LibraryFile = toml::from_str(&content).map_err(|e| {
            FlintError::TomlParseError(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        let dir_url = library_dir_url(path);
        let mut library = Self::new();
        if let Some(name) = file.display_name {
            library.display_name = name;
        }
        for (name, entity) in file.entities {
            let mut traits = entity.traits;
            traits.map_strings(|s| s.replace(LIBRARY_DIR_URL_VAR, &dir_url));
            library.insert(name, traits);
        }

        log::debug!(
            "Loaded {} entities from library {}",
            library.len(),
            path.display()
        );
        Ok(library)
    }

    /// Register an entity, replacing any previous entry with the same name
    pub fn insert(&mut self, name: impl Into<String>, traits: TraitsData) {
        self.entities.insert(name.into(), traits);
    }

    pub fn get(&self, name: &str) -> Option<&TraitsData> {
        self.entities.get(name)
    }

    /// Reference string for an entity name
    pub fn reference_for(name: &str) -> String {
        format!("{}{}", REFERENCE_PREFIX, name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

fn library_dir_url(path: &Path) -> String {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let dir = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    let dir = dir.to_string_lossy().replace('\\', "/");
    let dir = dir.replace(' ', "%20");
    if dir.starts_with('/') {
        format!("file://{}", dir)
    } else {
        format!("file:///{}", dir)
    }
}

impl Manager for LibraryManager {
    fn identifier(&self) -> &str {
        LIBRARY_IDENTIFIER
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn has_capability(&self, capability: Capability) -> bool {
        matches!(
            capability,
            Capability::EntityReferenceIdentification | Capability::Resolution
        )
    }

    fn is_entity_reference_string(&self, s: &str) -> bool {
        s.starts_with(REFERENCE_PREFIX)
    }

    fn resolve(
        &self,
        reference: &EntityReference,
        trait_set: &[&str],
        access: Access,
        _context: &Context,
    ) -> Result<TraitsData> {
        if access != Access::Read {
            return Err(FlintError::BackendError(format!(
                "{} is read-only, cannot resolve {} for write",
                self.display_name, reference
            )));
        }

        let name = reference
            .as_str()
            .strip_prefix(REFERENCE_PREFIX)
            .unwrap_or(reference.as_str());
        let traits = self.entities.get(name).ok_or_else(|| {
            FlintError::BackendError(format!("Entity '{}' not found", reference))
        })?;
        Ok(traits.subset(trait_set))
    }
}
