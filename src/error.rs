//! Error types for the simulation crate.
//!
//! The core is a deterministic batch computation: any failure aborts the
//! whole call, there is no retry or partial output.

use thiserror::Error;

/// Result alias for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// The integrator dispatcher got a name it does not know.
    #[error("unknown integration method '{name}'")]
    UnknownIntegrator { name: String },

    /// Precession was requested but the state has no body with this role.
    #[error("precession requires a body named '{role}'")]
    MissingBody { role: String },
}
