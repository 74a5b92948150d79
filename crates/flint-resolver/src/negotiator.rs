//! Backend negotiation at resolver construction
//!
//! This is the one place where failure is allowed to escape the resolver:
//! a resolver without a capable manager is rejected when it is built.

use flint_core::{FlintError, Result};
use flint_manager::{Capability, Context, HostInterface, Manager, ManagerFactory};
use std::fmt;

use crate::diagnostics::DiagnosticBridge;

/// Identifier this resolver presents to managers
pub const HOST_IDENTIFIER: &str = "org.flint.resolver";

/// Display name this resolver presents to managers
pub const HOST_DISPLAY_NAME: &str = "Flint Asset Resolver";

pub fn host_interface() -> HostInterface {
    HostInterface::new(HOST_IDENTIFIER, HOST_DISPLAY_NAME)
}

/// The negotiated manager and the context shared by every resolution
pub struct BackendHandle {
    manager: Box<dyn Manager>,
    context: Context,
}

impl BackendHandle {
    pub fn manager(&self) -> &dyn Manager {
        self.manager.as_ref()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }
}

impl fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendHandle")
            .field("manager", &self.manager.identifier())
            .field("context", &self.context)
            .finish()
    }
}

/// Find the default manager and check it can resolve
pub fn initialize(factory: &dyn ManagerFactory, diagnostics: &DiagnosticBridge) -> Result<BackendHandle> {
    let manager = factory
        .default_manager(&host_interface())?
        .ok_or(FlintError::NoBackendConfigured)?;

    if !manager.has_capability(Capability::Resolution) {
        return Err(FlintError::UnsupportedBackend(manager.display_name().to_string()));
    }

    diagnostics.info(&format!(
        "Using asset manager '{}' ({})",
        manager.display_name(),
        manager.identifier()
    ));

    Ok(BackendHandle {
        manager,
        context: Context::read_transient(),
    })
}
