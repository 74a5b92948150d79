//! Asset manager trait

use flint_core::Result;

use crate::traits::TraitsData;
use crate::types::{Access, Capability, Context, EntityReference, HostInterface};

/// Trait implemented by each asset manager backend.
///
/// Managers are shared between threads once constructed and must answer
/// every query without mutating themselves.
pub trait Manager: Send + Sync {
    /// Stable plugin identifier (e.g. "flint.manager.library")
    fn identifier(&self) -> &str;

    /// Human-readable name
    fn display_name(&self) -> &str;

    /// Whether the manager implements the given feature set
    fn has_capability(&self, capability: Capability) -> bool;

    /// Syntax check only: does `s` look like one of this manager's references?
    fn is_entity_reference_string(&self, s: &str) -> bool;

    /// Wrap `s` as a reference if it passes the syntax check
    fn create_entity_reference_if_valid(&self, s: &str) -> Option<EntityReference> {
        if self.is_entity_reference_string(s) {
            Some(EntityReference::new(s))
        } else {
            None
        }
    }

    /// Resolve the requested traits for an entity.
    ///
    /// Traits or properties the entity does not have are simply absent from
    /// the result; failures of the lookup itself are errors.
    fn resolve(
        &self,
        reference: &EntityReference,
        trait_set: &[&str],
        access: Access,
        context: &Context,
    ) -> Result<TraitsData>;
}

/// Locates the manager a host should use by default
pub trait ManagerFactory {
    /// `Ok(None)` when no default manager is configured
    fn default_manager(&self, host: &HostInterface) -> Result<Option<Box<dyn Manager>>>;
}
