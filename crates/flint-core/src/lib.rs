//! Flint Core - Foundational types shared by the Flint resolver crates
//!
//! Currently this is the error taxonomy: `FlintError`, its `ErrorKind`
//! families and the `Result` alias.

mod error;

pub use error::{ErrorKind, FlintError, Result};
