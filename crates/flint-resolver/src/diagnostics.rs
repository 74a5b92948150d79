//! Diagnostic bridge between resolver severities and the host
//!
//! The resolver reports at five severities. Hosts receive them as one of
//! five diagnostic actions through `HostDiagnostics`; the default sink
//! forwards everything to the `log` facade.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Log target used by the default sink
pub const LOG_TARGET: &str = "flint_resolver";

/// Severity of a resolver diagnostic, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Error,
    #[serde(alias = "warn")]
    Warning,
    Info,
    Debug,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
            Severity::Debug => write!(f, "debug"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(format!(
                "unknown severity '{}'; valid values: critical, error, warning, info, debug",
                s
            )),
        }
    }
}

/// Diagnostic actions offered by the host
pub trait HostDiagnostics: Send + Sync {
    /// Report a failure the host should treat as fatal to the operation
    fn fatal(&self, message: &str);
    fn error(&self, message: &str);
    fn warning(&self, message: &str);
    fn status(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Sink that forwards host diagnostics to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl HostDiagnostics for LogDiagnostics {
    fn fatal(&self, message: &str) {
        log::error!(target: LOG_TARGET, "FATAL: {}", message);
    }

    fn error(&self, message: &str) {
        log::error!(target: LOG_TARGET, "{}", message);
    }

    fn warning(&self, message: &str) {
        log::warn!(target: LOG_TARGET, "{}", message);
    }

    fn status(&self, message: &str) {
        log::info!(target: LOG_TARGET, "{}", message);
    }

    fn debug(&self, message: &str) {
        log::debug!(target: LOG_TARGET, "{}", message);
    }
}

/// Maps resolver severities onto host diagnostic actions, dropping
/// anything below the configured minimum severity
#[derive(Clone)]
pub struct DiagnosticBridge {
    sink: Arc<dyn HostDiagnostics>,
    max_severity: Severity,
}

impl DiagnosticBridge {
    /// `max_severity` is the least severe level still delivered
    pub fn new(sink: Arc<dyn HostDiagnostics>, max_severity: Severity) -> Self {
        Self { sink, max_severity }
    }

    pub fn is_logged(&self, severity: Severity) -> bool {
        severity <= self.max_severity
    }

    pub fn log(&self, severity: Severity, message: &str) {
        if !self.is_logged(severity) {
            return;
        }
        match severity {
            Severity::Critical => self.sink.fatal(message),
            Severity::Error => self.sink.error(message),
            Severity::Warning => self.sink.warning(message),
            Severity::Info => self.sink.status(message),
            Severity::Debug => self.sink.debug(message),
        }
    }

    pub fn critical(&self, message: &str) {
        self.log(Severity::Critical, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }
}

impl Default for DiagnosticBridge {
    fn default() -> Self {
        Self::new(Arc::new(LogDiagnostics), Severity::Warning)
    }
}

impl fmt::Debug for DiagnosticBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticBridge")
            .field("max_severity", &self.max_severity)
            .finish_non_exhaustive()
    }
}
