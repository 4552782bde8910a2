//! Numerical and physical parameters for a simulation run.
//!
//! `Parameters` is an explicit value handed to whoever needs it, rather than
//! a process-wide constants object, so alternate unit systems can be tested
//! in isolation.

/// Defaults follow the normalized unit system: G = 1, masses relative to the
/// central star, six planetary orbits of ten time units each.
#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // total integration time
    pub h0: f64, // fixed step size
    pub g: f64, // gravitational constant
    pub alignment_threshold: f64, // alignment detection threshold, radians
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: 60.0,
            h0: 0.01,
            g: 1.0,
            alignment_threshold: crate::simulation::events::DEFAULT_ALIGNMENT_THRESHOLD,
        }
    }
}
