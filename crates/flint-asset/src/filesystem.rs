//! Filesystem resolver used for plain paths

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::asset::{Asset, FileAsset, FileWritableAsset, WritableAsset};
use crate::resolver::AssetResolver;
use crate::types::{AssetInfo, ResolvedPath, Timestamp, WriteMode, WritePermission};

/// Resolver with plain filesystem semantics.
///
/// Relative paths are anchored to the directory of the referencing asset.
/// Paths that are not explicitly file-relative (`./`, `../`) fall back to
/// the working directory and then to the configured search paths.
#[derive(Debug, Clone, Default)]
pub struct DefaultResolver {
    search_paths: Vec<PathBuf>,
}

impl DefaultResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    fn candidates(&self, path: &Path) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(path));
        }
        if !is_file_relative(path) {
            candidates.extend(self.search_paths.iter().map(|dir| dir.join(path)));
        }
        candidates
    }
}

/// Lexically normalise a path, folding `.` and `..` components
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn is_file_relative(path: &Path) -> bool {
    matches!(
        path.components().next(),
        Some(Component::CurDir) | Some(Component::ParentDir)
    )
}

fn anchor_dir(anchor: &ResolvedPath) -> Option<&Path> {
    if anchor.is_empty() {
        return None;
    }
    anchor.as_path().parent()
}

fn path_string(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}

impl AssetResolver for DefaultResolver {
    fn create_identifier(&self, asset_path: &str, anchor: &ResolvedPath) -> String {
        if asset_path.is_empty() {
            return String::new();
        }

        let path = Path::new(asset_path);
        if path.is_absolute() {
            return path_string(normalize_path(path));
        }

        match anchor_dir(anchor) {
            Some(dir) => {
                let anchored = normalize_path(&dir.join(path));
                // Search-relative paths stay unanchored unless the anchored file exists
                if is_file_relative(path) || anchored.exists() {
                    path_string(anchored)
                } else {
                    path_string(normalize_path(path))
                }
            }
            None => path_string(normalize_path(path)),
        }
    }

    fn create_identifier_for_new_asset(&self, asset_path: &str, anchor: &ResolvedPath) -> String {
        if asset_path.is_empty() {
            return String::new();
        }

        let path = Path::new(asset_path);
        if path.is_absolute() {
            return path_string(normalize_path(path));
        }

        let base = match anchor_dir(anchor) {
            Some(dir) => dir.to_path_buf(),
            None => match std::env::current_dir() {
                Ok(cwd) => cwd,
                Err(_) => return path_string(normalize_path(path)),
            },
        };
        path_string(normalize_path(&base.join(path)))
    }

    fn resolve(&self, asset_path: &str) -> ResolvedPath {
        if asset_path.is_empty() {
            return ResolvedPath::default();
        }

        let path = Path::new(asset_path);
        if path.is_absolute() {
            return if path.exists() {
                ResolvedPath::from(normalize_path(path))
            } else {
                ResolvedPath::default()
            };
        }

        self.candidates(path)
            .into_iter()
            .find(|candidate| candidate.exists())
            .map(|found| ResolvedPath::from(normalize_path(&found)))
            .unwrap_or_default()
    }

    fn resolve_for_new_asset(&self, asset_path: &str) -> ResolvedPath {
        if asset_path.is_empty() {
            return ResolvedPath::default();
        }

        let path = Path::new(asset_path);
        if path.is_absolute() {
            return ResolvedPath::from(normalize_path(path));
        }
        match std::env::current_dir() {
            Ok(cwd) => ResolvedPath::from(normalize_path(&cwd.join(path))),
            Err(_) => ResolvedPath::from(normalize_path(path)),
        }
    }

    fn get_extension(&self, asset_path: &str) -> String {
        Path::new(asset_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string()
    }

    fn get_asset_info(&self, _asset_path: &str, _resolved: &ResolvedPath) -> AssetInfo {
        AssetInfo::default()
    }

    fn get_modification_timestamp(&self, _asset_path: &str, resolved: &ResolvedPath) -> Timestamp {
        if resolved.is_empty() {
            return Timestamp::invalid();
        }
        fs::metadata(resolved.as_path())
            .and_then(|meta| meta.modified())
            .map(Timestamp::new)
            .unwrap_or_default()
    }

    fn open_asset(&self, resolved: &ResolvedPath) -> Option<Arc<dyn Asset>> {
        if resolved.is_empty() {
            return None;
        }
        let asset = FileAsset::open(resolved.as_path()).ok()?;
        Some(Arc::new(asset))
    }

    fn can_write_asset_to_path(&self, resolved: &ResolvedPath) -> WritePermission {
        if resolved.is_empty() {
            return WritePermission::Denied("empty path".to_string());
        }
        match fs::metadata(resolved.as_path()) {
            Ok(meta) if meta.is_dir() => {
                WritePermission::Denied(format!("{} is a directory", resolved))
            }
            Ok(meta) if meta.permissions().readonly() => {
                WritePermission::Denied(format!("{} is read-only", resolved))
            }
            Ok(_) => WritePermission::Allowed,
            Err(e) if e.kind() == io::ErrorKind::NotFound => WritePermission::Allowed,
            Err(e) => WritePermission::Denied(e.to_string()),
        }
    }

    fn open_asset_for_write(
        &self,
        resolved: &ResolvedPath,
        mode: WriteMode,
    ) -> Option<Arc<dyn WritableAsset>> {
        if resolved.is_empty() {
            return None;
        }
        let asset = FileWritableAsset::create(resolved.as_path(), mode).ok()?;
        Some(Arc::new(asset))
    }
}
