//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`PrecessionConfig`] – optional artificial moon precession term
//! - [`EventsConfig`]     – optional event-detection settings
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! integrator: "leapfrog"    # or "verlet" / "rk4"
//!
//! parameters:
//!   t_end: 60.0             # total simulation time
//!   h0: 0.01                # fixed step size
//!   g: 1.0                  # gravitational constant
//!
//! precession:
//!   moon_precession_strength: 4.0e-4
//!
//! events:
//!   alignment_threshold_deg: 1.5
//!
//! bodies:
//!   - name: "Star"
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.0
//!     color: "orange"
//!   - name: "Planet"
//!     x: [ 1.2, 0.0 ]
//!     v: [ 0.0, 0.75 ]
//!     m: 2.5e-3
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation via `Scenario::build`.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // total integration time
    pub h0: f64,    // fixed step size
    #[serde(default = "default_g")]
    pub g: f64, // gravitational constant, 1.0 in normalized units
}

fn default_g() -> f64 {
    1.0
}

/// Artificial moon precession term. Requires bodies named "Planet" and
/// "Moon" in the body list; scenario building fails otherwise.
#[derive(Deserialize, Debug, Clone)]
pub struct PrecessionConfig {
    pub moon_precession_strength: f64,
}

/// Event-detection settings.
#[derive(Deserialize, Debug, Clone)]
pub struct EventsConfig {
    pub alignment_threshold_deg: f64, // near-collinearity threshold, degrees
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,         // identity, also used as a role
    pub x: Vec<f64>,          // initial position in simulation units
    pub v: Vec<f64>,          // initial velocity in simulation units per time unit
    pub m: f64,               // mass, relative to the central star
    pub color: Option<String>, // display color, physics-irrelevant
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    // The integrator is a free string on purpose: validation happens at
    // dispatch time so an unknown name surfaces as an invalid-argument error
    pub integrator: String,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub precession: Option<PrecessionConfig>,
    #[serde(default)]
    pub events: Option<EventsConfig>,
    pub bodies: Vec<BodyConfig>,
}
