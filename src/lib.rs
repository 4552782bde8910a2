pub mod configuration;
pub mod error;
pub mod simulation;

pub use error::{SimError, SimResult};

pub use simulation::energy::total_energy;
pub use simulation::events::{
    detect_alignments, detect_pericentre_passages, mean_orbits_between, pericentre_indices,
    summarise_metrics, OrbitalMetrics, DEFAULT_ALIGNMENT_THRESHOLD,
};
pub use simulation::forces::{
    compute_accelerations, AccelSet, Acceleration, MoonPrecession, NewtonianGravity,
};
pub use simulation::integrator::{integrate, leapfrog, rk4};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::states::{Body, NVec2, SystemState, Trajectory};

pub use configuration::config::{
    BodyConfig, EventsConfig, ParametersConfig, PrecessionConfig, ScenarioConfig,
};
