//! Diagnostics sink that writes to stderr

use flint_resolver::HostDiagnostics;

#[derive(Debug, Default, Clone, Copy)]
pub struct StderrDiagnostics;

impl HostDiagnostics for StderrDiagnostics {
    fn fatal(&self, message: &str) {
        eprintln!("fatal: {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("error: {}", message);
    }

    fn warning(&self, message: &str) {
        eprintln!("warning: {}", message);
    }

    fn status(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn debug(&self, message: &str) {
        eprintln!("debug: {}", message);
    }
}
