pub mod engine;
pub mod event;
pub mod integrator;
pub mod landing;
pub mod runner;
pub mod snapshot;

pub use engine::PhysicsEngine;
pub use integrator::{euler_step, MAX_STEP};
pub use landing::{LandingDetector, LandingQuality};
pub use runner::{simulate_jump, AltitudeTrigger, DeployStrategy, NeverDeploy, SimConfig};
pub use snapshot::PhysicsData;
