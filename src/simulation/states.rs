//! Core state types for the star-planet-moon simulation.
//!
//! Defines the entity model:
//! - `Body` with identity, mass, and 2D phase-space coordinates
//! - `SystemState` holding the ordered body list and the clock `t`
//! - `Trajectory`, the stacked snapshot history an integrator returns

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // identity, also used as a role ("Planet", "Moon")
    pub m: f64, // mass
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub color: String, // display color, physics-irrelevant
}

/// Ordered collection of bodies at one instant.
///
/// Body order is significant: every stacked view and bulk update uses it, and
/// the body count and identity set are fixed for one integration run.
#[derive(Debug, Clone)]
pub struct SystemState {
    pub bodies: Vec<Body>,
    pub t: f64, // time
}

impl SystemState {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Stacked positions, one entry per body in system order.
    pub fn positions(&self) -> Vec<NVec2> {
        self.bodies.iter().map(|b| b.x).collect()
    }

    /// Stacked velocities, one entry per body in system order.
    pub fn velocities(&self) -> Vec<NVec2> {
        self.bodies.iter().map(|b| b.v).collect()
    }

    /// Masses, one entry per body in system order.
    pub fn masses(&self) -> Vec<f64> {
        self.bodies.iter().map(|b| b.m).collect()
    }

    /// Overwrite every body from stacked arrays given in the same order the
    /// views were derived.
    pub fn update(&mut self, positions: &[NVec2], velocities: &[NVec2]) {
        for (body, (x, v)) in self
            .bodies
            .iter_mut()
            .zip(positions.iter().zip(velocities.iter()))
        {
            body.x = *x;
            body.v = *v;
        }
    }

    /// Index of the first body with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }
}

/// Integrator output: `steps + 1` snapshots of every body.
///
/// Snapshot 0 is the initial condition, snapshot k the state after k steps.
/// Immutable once produced.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub times: Vec<f64>,
    pub positions: Vec<Vec<NVec2>>, // (steps+1) x N
    pub velocities: Vec<Vec<NVec2>>, // (steps+1) x N
}

impl Trajectory {
    /// Number of snapshots, including the initial condition.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn n_bodies(&self) -> usize {
        self.positions.first().map_or(0, Vec::len)
    }

    /// One body's position series across all snapshots.
    pub fn body_positions(&self, body: usize) -> Vec<NVec2> {
        self.positions.iter().map(|snap| snap[body]).collect()
    }
}
