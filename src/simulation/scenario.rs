//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - system state (`SystemState` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - the requested integration method name

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimResult;
use crate::simulation::events::DEFAULT_ALIGNMENT_THRESHOLD;
use crate::simulation::forces::{AccelSet, MoonPrecession, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, SystemState};

/// Runtime bundle for one simulation run.
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: SystemState,
    pub forces: AccelSet,
    pub method: String,
}

impl Scenario {
    /// Map a deserialized [`ScenarioConfig`] into the runtime representation.
    ///
    /// Fails when precession is configured but the body list has no
    /// "Planet"/"Moon" entries; the method name is validated later, at
    /// dispatch time.
    pub fn build(cfg: ScenarioConfig) -> SimResult<Self> {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| Body {
                name: bc.name.clone(),
                m: bc.m,
                x: NVec2::new(bc.x[0], bc.x[1]),
                v: NVec2::new(bc.v[0], bc.v[1]),
                color: bc.color.clone().unwrap_or_else(|| "white".to_string()),
            })
            .collect();

        // Initial system state: bodies at t = 0
        let system = SystemState::new(bodies);

        let parameters = Parameters {
            t_end: cfg.parameters.t_end,
            h0: cfg.parameters.h0,
            g: cfg.parameters.g,
            alignment_threshold: cfg
                .events
                .as_ref()
                .map_or(DEFAULT_ALIGNMENT_THRESHOLD, |e| {
                    e.alignment_threshold_deg.to_radians()
                }),
        };

        // Forces: Newtonian gravity always, precession only when configured
        // with a nonzero strength. Role resolution happens here, once.
        let mut forces = AccelSet::new().with(NewtonianGravity { g: parameters.g });
        let strength = cfg
            .precession
            .as_ref()
            .map_or(0.0, |p| p.moon_precession_strength);
        if strength != 0.0 {
            forces = forces.with(MoonPrecession::resolve(&system, strength)?);
        }

        Ok(Self {
            parameters,
            system,
            forces,
            method: cfg.integrator,
        })
    }

    /// Built-in red dwarf scenario: a star, a planet on a mildly elliptical
    /// orbit, and a moon started near pericentre of an eccentric orbit.
    ///
    /// The tiny precession term rotates the lunar periapsis into a
    /// five-petal rosette in the planet-centric frame; parameters were tuned
    /// for roughly one star-planet-moon alignment every five lunar
    /// revolutions.
    pub fn red_dwarf() -> Self {
        let g: f64 = 1.0;
        let star_mass: f64 = 1.0;
        let planet_mass = 2.5e-3;
        let moon_mass = 3.0e-5;

        let star_x = NVec2::zeros();
        let star_v = NVec2::zeros();

        // Vis-viva at r = 1.2 on an a = 1.5 ellipse, slowed to 75%
        let planet_distance = 1.2;
        let planet_speed = (g * star_mass * (2.0 / planet_distance - 1.0 / 1.5)).sqrt();
        let planet_x = NVec2::new(planet_distance, 0.0);
        let planet_v = NVec2::new(0.0, 0.75 * planet_speed);

        // Vis-viva around the planet at r = 0.18 on an a = 0.26 ellipse
        let moon_distance = 0.18;
        let moon_speed = (g * planet_mass * (2.0 / moon_distance - 1.0 / 0.26)).sqrt();
        let moon_x = planet_x + NVec2::new(moon_distance, 0.0);
        let moon_v = planet_v + NVec2::new(0.0, 1.35 * moon_speed);

        // Work in the barycentric frame so the system does not drift
        let total_mass = star_mass + planet_mass + moon_mass;
        let barycentre_v =
            (star_mass * star_v + planet_mass * planet_v + moon_mass * moon_v) / total_mass;

        let bodies = vec![
            Body {
                name: "Star".to_string(),
                m: star_mass,
                x: star_x,
                v: star_v - barycentre_v,
                color: "orange".to_string(),
            },
            Body {
                name: "Planet".to_string(),
                m: planet_mass,
                x: planet_x,
                v: planet_v - barycentre_v,
                color: "#4080ff".to_string(),
            },
            Body {
                name: "Moon".to_string(),
                m: moon_mass,
                x: moon_x,
                v: moon_v - barycentre_v,
                color: "#dddddd".to_string(),
            },
        ];

        let system = SystemState::new(bodies);

        let parameters = Parameters::default();
        let forces = AccelSet::new()
            .with(NewtonianGravity { g: parameters.g })
            .with(MoonPrecession::new(1, 2, 4.0e-4));

        Self {
            parameters,
            system,
            forces,
            method: "leapfrog".to_string(),
        }
    }
}
