//! CLI command implementations

pub mod check;
pub mod identify;
pub mod resolve;

use anyhow::Result;
use flint_core::ErrorKind;
use flint_manager::ManagerRegistry;
use flint_resolver::{ManagedResolver, ResolverConfig};
use std::sync::Arc;

use crate::sink::StderrDiagnostics;

/// Build the resolver every command works against
pub fn build_resolver(config: &ResolverConfig) -> Result<ManagedResolver> {
    ManagedResolver::from_config_with(
        config,
        ManagerRegistry::with_builtins(),
        Arc::new(StderrDiagnostics),
    )
    .map_err(|err| {
        let hint = match err.kind() {
            ErrorKind::Construction => " (check the [manager] section of resolver.toml)",
            _ => "",
        };
        anyhow::anyhow!("Failed to construct the asset resolver{}: {}", hint, err)
    })
}
