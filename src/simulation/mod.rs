pub mod energy;
pub mod events;
pub mod forces;
pub mod integrator;
pub mod params;
pub mod scenario;
pub mod states;
