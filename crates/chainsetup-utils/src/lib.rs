//! Shared plumbing for the chainsetup crates.
//!
//! Holds the error type every workflow step reports through and the
//! logging bootstrap used by the binary.

pub mod error;
pub mod logging;

pub use error::{SetupError, SetupResult};
