pub mod params;
pub mod state;

pub use params::{Parameter, SimulationParameters};
pub use state::{SimulationState, INITIAL_ALTITUDE};
