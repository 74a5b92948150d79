//! Host-native value types exchanged with asset resolvers
//!
//! Every type returned across the resolver contract implements `Default`,
//! and the default value always means "nothing resolved".

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A concrete filesystem location produced by a resolver. Empty when the
/// input did not resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ResolvedPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&str> for ResolvedPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<PathBuf> for ResolvedPath {
    fn from(path: PathBuf) -> Self {
        Self(path.to_string_lossy().into_owned())
    }
}

/// Additional information a resolver may attach to an asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub asset_name: Option<String>,
    #[serde(default)]
    pub resolver_info: HashMap<String, String>,
}

/// Modification time of a resolved asset. The default is invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamp(Option<SystemTime>);

impl Timestamp {
    pub fn new(time: SystemTime) -> Self {
        Self(Some(time))
    }

    pub fn invalid() -> Self {
        Self(None)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }
}

/// How an asset opened for writing treats existing content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Keep existing content and write over it in place
    Update,
    /// Discard existing content
    Replace,
}

/// Answer to "may this resolved path be written to?"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WritePermission {
    Allowed,
    Denied(String),
}

impl WritePermission {
    pub fn is_allowed(&self) -> bool {
        matches!(self, WritePermission::Allowed)
    }

    /// Reason given for a denial, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            WritePermission::Allowed => None,
            WritePermission::Denied(reason) => Some(reason),
        }
    }
}

impl Default for WritePermission {
    fn default() -> Self {
        WritePermission::Denied(String::new())
    }
}
