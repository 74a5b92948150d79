//! Value types shared between hosts and asset managers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A string a manager has confirmed to be one of its entity references.
///
/// Only managers should construct these; hosts obtain them through
/// `Manager::create_entity_reference_if_valid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityReference(String);

impl EntityReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional feature sets a manager may implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Can tell entity references apart from other strings
    EntityReferenceIdentification,
    /// Can resolve traits for an entity
    Resolution,
    /// Can register new data for an entity
    Publishing,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::EntityReferenceIdentification => write!(f, "entity reference identification"),
            Capability::Resolution => write!(f, "resolution"),
            Capability::Publishing => write!(f, "publishing"),
        }
    }
}

/// Intent of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Read,
    Write,
}

/// How long a manager may hold on to results computed for a context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retention {
    /// Not kept beyond the current call chain
    Transient,
    /// Kept for the lifetime of the host session
    Session,
    /// May be persisted across sessions
    Permanent,
}

/// Calling context passed along with manager requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub access: Access,
    pub retention: Retention,
}

impl Context {
    pub fn new(access: Access, retention: Retention) -> Self {
        Self { access, retention }
    }

    /// Read access, transient retention
    pub fn read_transient() -> Self {
        Self::new(Access::Read, Retention::Transient)
    }
}

/// Identity of the host a manager is serving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInterface {
    pub identifier: String,
    pub display_name: String,
}

impl HostInterface {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }
}
