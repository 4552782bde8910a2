//! Acceleration contributors for the three-body engine.
//!
//! Defines the acceleration strategy trait, direct pairwise Newtonian
//! gravity, and the artificial moon precession term. Each term implements
//! [`Acceleration`] and their contributions are summed by [`AccelSet`] into a
//! single acceleration vector per body, keeping the integrators independent
//! of the force model.

use crate::error::{SimError, SimResult};
use crate::simulation::states::{NVec2, SystemState};

/// Collection of acceleration terms (gravity, precession, synthetic fields).
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl std::fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl AccelSet {
    /// Create an empty acceleration set.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term.
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`.
    /// `out[i]` is set to the sum of contributions from all terms.
    pub fn accumulate_accels(&self, t: f64, sys: &SystemState, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`SystemState`].
/// Implementations add their contribution into `out[i]` for each body.
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &SystemState, out: &mut [NVec2]);
}

/// Direct pairwise Newtonian gravity (n^2 sum over unordered pairs).
///
/// Works in the normalized unit system: `g` is typically 1 and masses are
/// relative to the central star. A pair at exactly zero separation
/// contributes nothing; this is a defined case, not a division error.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &SystemState, out: &mut [NVec2]) {
        let n = sys.bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = sys.bodies[i].x;
            let mi = sys.bodies[i].m;

            for j in (i + 1)..n {
                // r points from i to j: i feels a pull along +r, j along -r
                let r = sys.bodies[j].x - xi;
                let r2 = r.dot(&r);

                // Coincident bodies exert no force on each other
                if r2 == 0.0 {
                    continue;
                }

                // coef = G / |r|^3, the factor in a = G m r / |r|^3
                let inv_r = r2.sqrt().recip();
                let coef = self.g * inv_r * inv_r * inv_r;

                // Equal and opposite:
                // a_i +=  G * m_j * r / |r|^3
                // a_j += -G * m_i * r / |r|^3
                out[i] += coef * sys.bodies[j].m * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}

/// Artificial precession term acting on the moon.
///
/// Adds a distance-independent acceleration perpendicular (+90° rotation) to
/// the planet-to-moon vector, slowly rotating the lunar periapsis into a
/// rosette over successive orbits. Deliberately non-physical: no bound is
/// enforced on the strength, and an excessive value is the caller's problem.
///
/// The "Planet"/"Moon" roles are resolved to body indices once, when the term
/// is constructed, so force evaluations never search by name.
#[derive(Debug)]
pub struct MoonPrecession {
    planet: usize,
    moon: usize,
    strength: f64,
}

impl MoonPrecession {
    pub const PLANET_ROLE: &'static str = "Planet";
    pub const MOON_ROLE: &'static str = "Moon";

    /// Descriptor from already-known body indices.
    pub fn new(planet: usize, moon: usize, strength: f64) -> Self {
        Self {
            planet,
            moon,
            strength,
        }
    }

    /// Resolve the planet and moon roles by name, failing fast when either
    /// body is missing from the state.
    pub fn resolve(sys: &SystemState, strength: f64) -> SimResult<Self> {
        let planet = sys.index_of(Self::PLANET_ROLE).ok_or_else(|| SimError::MissingBody {
            role: Self::PLANET_ROLE.into(),
        })?;
        let moon = sys.index_of(Self::MOON_ROLE).ok_or_else(|| SimError::MissingBody {
            role: Self::MOON_ROLE.into(),
        })?;
        Ok(Self::new(planet, moon, strength))
    }
}

impl Acceleration for MoonPrecession {
    fn acceleration(&self, _t: f64, sys: &SystemState, out: &mut [NVec2]) {
        let rel = sys.bodies[self.moon].x - sys.bodies[self.planet].x;
        let radius = rel.norm();

        // Degenerate geometry: coincident planet and moon, skip the term
        if radius == 0.0 {
            return;
        }

        // Unit vector rotated +90° from planet->moon
        let tangential = NVec2::new(-rel.y, rel.x) / radius;
        out[self.moon] += self.strength * tangential;
    }
}

/// Accelerations for every body of `sys`: pairwise gravity plus the optional
/// precession term when `moon_precession_strength` is nonzero.
///
/// Fails when precession is requested but the state has no bodies named
/// "Planet" and "Moon".
pub fn compute_accelerations(
    sys: &SystemState,
    g: f64,
    moon_precession_strength: f64,
) -> SimResult<Vec<NVec2>> {
    let mut forces = AccelSet::new().with(NewtonianGravity { g });
    if moon_precession_strength != 0.0 {
        forces = forces.with(MoonPrecession::resolve(sys, moon_precession_strength)?);
    }

    let mut out = vec![NVec2::zeros(); sys.bodies.len()];
    forces.accumulate_accels(sys.t, sys, &mut out);
    Ok(out)
}
