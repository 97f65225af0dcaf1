pub mod dynamics;
pub mod error;
pub mod io;
pub mod physics;
pub mod presets;
pub mod sim;

pub use dynamics::{Parameter, SimulationParameters, SimulationState};
pub use error::{SimError, SimResult};
pub use physics::ForceSet;
pub use sim::{LandingQuality, PhysicsData, PhysicsEngine};
