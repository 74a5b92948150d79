//! Layered resolver configuration
//!
//! Config is loaded with four layers of precedence (highest wins):
//! 1. Environment variables: `FLINT_RESOLVER_MANAGER`, `FLINT_RESOLVER_LOG_LEVEL`
//! 2. The file named by `FLINT_RESOLVER_CONFIG`
//! 3. Project-local: `.flint/resolver.toml`
//! 4. Global: `~/.flint/resolver.toml`

use flint_core::{FlintError, Result};
use flint_manager::ManagerSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::diagnostics::Severity;

pub const CONFIG_ENV: &str = "FLINT_RESOLVER_CONFIG";
pub const MANAGER_ENV: &str = "FLINT_RESOLVER_MANAGER";
pub const LOG_LEVEL_ENV: &str = "FLINT_RESOLVER_LOG_LEVEL";

/// Manager settings whose values are paths relative to the config file
const PATH_SETTINGS: &[&str] = &["library_path"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default)]
    pub level: Option<Severity>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSection {
    #[serde(default)]
    pub paths: Option<Vec<PathBuf>>,
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfigFile {
    #[serde(default)]
    pub manager: Option<ManagerSettings>,
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub search: SearchSection,
}

/// Resolved configuration with all layers applied
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Default manager, if one is configured
    pub manager: Option<ManagerSettings>,
    /// Least severe diagnostic still delivered to the host
    pub log_level: Severity,
    /// Extra directories searched for relative plain paths
    pub search_paths: Vec<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            manager: None,
            log_level: Severity::Warning,
            search_paths: Vec::new(),
        }
    }
}

impl ResolverConfig {
    /// Load config with layered precedence: global < project < env file < env vars
    pub fn load() -> Result<Self> {
        let mut config = ResolverConfigFile::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        let local_path = PathBuf::from(".flint/resolver.toml");
        if local_path.exists() {
            let local = Self::load_file(&local_path)?;
            Self::merge_into(&mut config, local);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV) {
            let explicit = Self::load_file(Path::new(&env_path))?;
            Self::merge_into(&mut config, explicit);
        }

        Self::apply_env_overrides(&mut config)?;
        Ok(Self::from_file(config))
    }

    /// Load config from a specific file path only, plus env var overrides
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        Self::apply_env_overrides(&mut config)?;
        Ok(Self::from_file(config))
    }

    /// Identifier of the configured default manager
    pub fn manager_identifier(&self) -> Option<&str> {
        self.manager.as_ref().map(|m| m.identifier.as_str())
    }

    fn from_file(file: ResolverConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            manager: file.manager,
            log_level: file.logging.level.unwrap_or(defaults.log_level),
            search_paths: file.search.paths.unwrap_or_default(),
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".flint").join("resolver.toml"))
    }

    fn load_file(path: &Path) -> Result<ResolverConfigFile> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FlintError::ConfigError(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        let mut config: ResolverConfigFile = toml::from_str(&content).map_err(|e| {
            FlintError::TomlParseError(format!("Failed to parse config {}: {}", path.display(), e))
        })?;

        if let Some(base) = path.parent() {
            Self::anchor_paths(&mut config, base);
        }
        Ok(config)
    }

    /// Make relative paths in a config file relative to the file's directory
    fn anchor_paths(config: &mut ResolverConfigFile, base: &Path) {
        if let Some(manager) = config.manager.as_mut() {
            for key in PATH_SETTINGS {
                let Some(value) = manager.settings.get_mut(*key) else {
                    continue;
                };
                let relative = value
                    .as_str()
                    .map(PathBuf::from)
                    .filter(|path| path.is_relative());
                if let Some(path) = relative {
                    *value = toml::Value::String(base.join(path).to_string_lossy().into_owned());
                }
            }
        }

        if let Some(paths) = config.search.paths.as_mut() {
            for path in paths.iter_mut() {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }

    fn merge_into(base: &mut ResolverConfigFile, overlay: ResolverConfigFile) {
        if let Some(manager) = overlay.manager {
            match &mut base.manager {
                Some(existing) if existing.identifier == manager.identifier => {
                    existing.settings.extend(manager.settings);
                }
                slot => *slot = Some(manager),
            }
        }

        if overlay.logging.level.is_some() {
            base.logging.level = overlay.logging.level;
        }
        if overlay.search.paths.is_some() {
            base.search.paths = overlay.search.paths;
        }
    }

    fn apply_env_overrides(config: &mut ResolverConfigFile) -> Result<()> {
        if let Ok(identifier) = std::env::var(MANAGER_ENV) {
            match &mut config.manager {
                Some(existing) if existing.identifier == identifier => {}
                slot => *slot = Some(ManagerSettings::new(identifier)),
            }
        }

        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            let level = level.parse::<Severity>().map_err(|e| {
                FlintError::ConfigError(format!("Invalid {}: {}", LOG_LEVEL_ENV, e))
            })?;
            config.logging.level = Some(level);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Tests touching process environment run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn temp_config(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("flint_config_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("resolver.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        std::fs::remove_file(path).ok();
        std::fs::remove_dir(path.parent().unwrap()).ok();
    }

    fn clear_env() {
        std::env::remove_var(MANAGER_ENV);
        std::env::remove_var(LOG_LEVEL_ENV);
        std::env::remove_var(CONFIG_ENV);
    }

    #[test]
    fn test_load_config_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let config_str = r#"
[manager]
identifier = "flint.manager.library"

[manager.settings]
library_path = "library.toml"

[logging]
level = "debug"

[search]
paths = ["assets", "/shared/assets"]
"#;
        let path = temp_config(config_str);
        let config = ResolverConfig::load_from_file(&path).unwrap();
        let dir = path.parent().unwrap();

        assert_eq!(config.manager_identifier(), Some("flint.manager.library"));
        assert_eq!(config.log_level, Severity::Debug);
        assert_eq!(
            config.manager.as_ref().unwrap().setting_str("library_path"),
            Some(&*dir.join("library.toml").to_string_lossy())
        );
        assert_eq!(
            config.search_paths,
            vec![dir.join("assets"), PathBuf::from("/shared/assets")]
        );

        cleanup(&path);
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let path = temp_config("");
        let config = ResolverConfig::load_from_file(&path).unwrap();
        assert!(config.manager.is_none());
        assert_eq!(config.log_level, Severity::Warning);
        assert!(config.search_paths.is_empty());

        cleanup(&path);
    }

    #[test]
    fn test_env_var_override() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let path = temp_config(
            r#"
[manager]
identifier = "flint.manager.library"

[logging]
level = "error"
"#,
        );

        std::env::set_var(MANAGER_ENV, "acme.manager");
        std::env::set_var(LOG_LEVEL_ENV, "info");

        let config = ResolverConfig::load_from_file(&path).unwrap();
        assert_eq!(config.manager_identifier(), Some("acme.manager"));
        assert_eq!(config.log_level, Severity::Info);

        std::env::set_var(LOG_LEVEL_ENV, "loud");
        let result = ResolverConfig::load_from_file(&path);
        assert!(matches!(result, Err(FlintError::ConfigError(_))));

        clear_env();
        cleanup(&path);
    }

    #[test]
    fn test_level_accepts_warn_alias() {
        let file: ResolverConfigFile = toml::from_str("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(file.logging.level, Some(Severity::Warning));
    }

    #[test]
    fn test_parse_error_names_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let path = temp_config("[logging]\nlevel = \"shouting\"\n");
        let err = ResolverConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, FlintError::TomlParseError(_)));
        assert!(err.to_string().contains("resolver.toml"));

        cleanup(&path);
    }

    #[test]
    fn test_load_applies_layers_in_order() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let home = std::env::temp_dir().join(format!("flint_home_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(home.join(".flint")).unwrap();
        std::fs::write(
            home.join(".flint").join("resolver.toml"),
            r#"
[manager]
identifier = "flint.manager.library"
[manager.settings]
library_path = "/global/library.toml"
display = "global"

[logging]
level = "error"

[search]
paths = ["/global/assets"]
"#,
        )
        .unwrap();

        let explicit = temp_config(
            r#"
[manager]
identifier = "flint.manager.library"
[manager.settings]
library_path = "lib.toml"

[logging]
level = "info"
"#,
        );

        let saved_home = std::env::var_os("HOME");
        std::env::set_var("HOME", &home);
        std::env::set_var(CONFIG_ENV, &explicit);

        let layered = ResolverConfig::load();
        std::env::set_var(LOG_LEVEL_ENV, "debug");
        let overridden = ResolverConfig::load();

        match saved_home {
            Some(value) => std::env::set_var("HOME", value),
            None => std::env::remove_var("HOME"),
        }
        clear_env();

        let config = layered.unwrap();
        let manager = config.manager.as_ref().unwrap();
        let explicit_dir = explicit.parent().unwrap();

        assert_eq!(config.log_level, Severity::Info);
        assert_eq!(
            manager.setting_str("library_path"),
            Some(&*explicit_dir.join("lib.toml").to_string_lossy())
        );
        assert_eq!(manager.setting_str("display"), Some("global"));
        assert_eq!(config.search_paths, vec![PathBuf::from("/global/assets")]);

        assert_eq!(overridden.unwrap().log_level, Severity::Debug);

        cleanup(&explicit);
        std::fs::remove_dir_all(&home).ok();
    }

    #[test]
    fn test_merge_precedence() {
        let mut base: ResolverConfigFile = toml::from_str(
            r#"
[manager]
identifier = "flint.manager.library"
[manager.settings]
library_path = "/global/library.toml"
display = "global"

[logging]
level = "error"
"#,
        )
        .unwrap();

        let overlay: ResolverConfigFile = toml::from_str(
            r#"
[manager]
identifier = "flint.manager.library"
[manager.settings]
library_path = "/project/library.toml"

[search]
paths = ["/project/assets"]
"#,
        )
        .unwrap();

        ResolverConfig::merge_into(&mut base, overlay);
        let config = ResolverConfig::from_file(base);
        let manager = config.manager.unwrap();

        assert_eq!(manager.setting_str("library_path"), Some("/project/library.toml"));
        assert_eq!(manager.setting_str("display"), Some("global"));
        assert_eq!(config.log_level, Severity::Error);
        assert_eq!(config.search_paths, vec![PathBuf::from("/project/assets")]);
    }

    #[test]
    fn test_overlay_with_other_manager_replaces() {
        let mut base = ResolverConfigFile {
            manager: Some(
                ManagerSettings::new("flint.manager.library").with_setting("library_path", "/a"),
            ),
            ..Default::default()
        };
        let overlay = ResolverConfigFile {
            manager: Some(ManagerSettings::new("acme.manager")),
            ..Default::default()
        };

        ResolverConfig::merge_into(&mut base, overlay);
        let manager = base.manager.unwrap();
        assert_eq!(manager.identifier, "acme.manager");
        assert!(manager.settings.is_empty());
    }
}
