//! Error types for Flint

use thiserror::Error;

/// The main error type for Flint resolver operations
#[derive(Debug, Error)]
pub enum FlintError {
    #[error("No default asset manager is configured")]
    NoBackendConfigured,

    #[error("Asset manager '{0}' does not support resolution")]
    UnsupportedBackend(String),

    #[error("Entity '{0}' has no content location")]
    NoLocation(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Writes to entity references are not supported: {0}")]
    WriteNotSupported(String),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("unknown error")]
    Unknown,
}

/// Broad family an error belongs to, used when deciding whether it may
/// escape the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised while building a resolver; allowed to abort construction
    Construction,
    /// Raised by the resolution protocol itself
    Resolution,
    /// Raised inside an asset manager
    Backend,
    /// Anything untyped
    Unknown,
}

impl FlintError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlintError::NoBackendConfigured
            | FlintError::UnsupportedBackend(_)
            | FlintError::ConfigError(_)
            | FlintError::TomlParseError(_) => ErrorKind::Construction,
            FlintError::NoLocation(_)
            | FlintError::UnsupportedScheme(_)
            | FlintError::WriteNotSupported(_) => ErrorKind::Resolution,
            FlintError::BackendError(_) => ErrorKind::Backend,
            FlintError::Unknown => ErrorKind::Unknown,
        }
    }
}

/// Result type alias for Flint operations
pub type Result<T> = std::result::Result<T, FlintError>;
