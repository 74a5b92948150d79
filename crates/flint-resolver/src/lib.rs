//! Flint Resolver - Entity reference aware asset resolution
//!
//! Wraps a filesystem [`AssetResolver`](flint_asset::AssetResolver) so that
//! strings recognised by the configured asset manager are resolved through
//! it, while plain paths behave exactly as before.

pub mod classifier;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod guard;
pub mod negotiator;
mod resolver;

#[cfg(test)]
mod testing;

pub use classifier::Locator;
pub use config::ResolverConfig;
pub use diagnostics::{DiagnosticBridge, HostDiagnostics, LogDiagnostics, Severity};
pub use negotiator::{host_interface, BackendHandle, HOST_DISPLAY_NAME, HOST_IDENTIFIER};
pub use resolver::ManagedResolver;
