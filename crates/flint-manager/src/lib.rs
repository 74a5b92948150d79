//! Flint Manager - Asset manager contract and plugins
//!
//! An asset manager owns entities and answers questions about them through
//! the `Manager` trait. This crate provides that trait, the trait-data
//! model it returns, a plugin registry used to find the default manager,
//! and a built-in library manager backed by a TOML file.

pub mod library;
mod manager;
mod registry;
mod traits;
mod types;

pub use library::LibraryManager;
pub use manager::{Manager, ManagerFactory};
pub use registry::{ManagerConstructor, ManagerRegistry, ManagerSettings, RegistryManagerFactory};
pub use traits::{LocatableContent, TraitValue, TraitsData};
pub use types::{Access, Capability, Context, EntityReference, HostInterface, Retention};
