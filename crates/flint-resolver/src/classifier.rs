//! Plain path versus entity reference classification
//!
//! Reference syntax belongs to the manager; these helpers only ask it.

use flint_manager::{EntityReference, Manager};

/// How an incoming asset locator is handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Ordinary path, handled by the filesystem resolver
    PlainPath,
    /// Managed entity, handled by the asset manager
    Reference(EntityReference),
}

/// Classify `s` with a single query to the manager
pub fn classify(manager: &dyn Manager, s: &str) -> Locator {
    match manager.create_entity_reference_if_valid(s) {
        Some(reference) => Locator::Reference(reference),
        None => Locator::PlainPath,
    }
}

pub fn is_reference(manager: &dyn Manager, s: &str) -> bool {
    manager.is_entity_reference_string(s)
}

pub fn as_reference(manager: &dyn Manager, s: &str) -> Option<EntityReference> {
    manager.create_entity_reference_if_valid(s)
}
