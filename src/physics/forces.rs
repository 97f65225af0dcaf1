use nalgebra::Vector3;

use crate::dynamics::params::SimulationParameters;
use crate::dynamics::state::SimulationState;
use crate::physics::aerodynamics::{self, DragProfile};

// ---------------------------------------------------------------------------
// Named force record
// ---------------------------------------------------------------------------

/// The six contributions computed for one step, in newtons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceSet {
    pub gravity: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub buoyancy: Vector3<f64>,
    pub tension: Vector3<f64>,
    pub lift: Vector3<f64>,
    pub wind: Vector3<f64>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self {
            gravity: Vector3::zeros(),
            drag: Vector3::zeros(),
            buoyancy: Vector3::zeros(),
            tension: Vector3::zeros(),
            lift: Vector3::zeros(),
            wind: Vector3::zeros(),
        }
    }
}

impl ForceSet {
    /// Unweighted vector sum of all contributions.
    pub fn total(&self) -> Vector3<f64> {
        self.gravity + self.drag + self.buoyancy + self.tension + self.lift + self.wind
    }

    /// Contributions paired with their names, for telemetry.
    pub fn named(&self) -> [(&'static str, Vector3<f64>); 6] {
        [
            ("gravity", self.gravity),
            ("drag", self.drag),
            ("buoyancy", self.buoyancy),
            ("tension", self.tension),
            ("lift", self.lift),
            ("wind", self.wind),
        ]
    }
}

// ---------------------------------------------------------------------------
// Body forces
// ---------------------------------------------------------------------------

/// Weight: (0, -m g, 0).
pub fn gravity_force(mass: f64, gravity: f64) -> Vector3<f64> {
    Vector3::new(0.0, -mass * gravity, 0.0)
}

/// Archimedes buoyancy of the displaced air, always up.
pub fn buoyancy_force(body_volume: f64, density: f64, gravity: f64) -> Vector3<f64> {
    Vector3::new(0.0, body_volume * density * gravity, 0.0)
}

/// Line tension with the canopy open: whatever part of the weight drag does
/// not carry, pulling straight up.
pub fn tension_force(deployed: bool, mass: f64, gravity: f64, drag_mag: f64) -> Vector3<f64> {
    if !deployed {
        return Vector3::zeros();
    }
    Vector3::new(0.0, (mass * gravity - drag_mag).max(0.0), 0.0)
}

// ---------------------------------------------------------------------------
// Full force model
// ---------------------------------------------------------------------------

/// Compute every contribution from the current state and parameters.
///
/// Drag is evaluated before tension, which depends on its magnitude.
pub fn compute(state: &SimulationState, params: &SimulationParameters) -> ForceSet {
    let rho = params.air_density;
    let g = params.gravity;
    let deployed = params.parachute_deployed;

    let drag = aerodynamics::drag_force(&state.velocity, rho, DragProfile::for_params(params));

    ForceSet {
        gravity: gravity_force(params.mass, g),
        drag,
        buoyancy: buoyancy_force(params.body_volume, rho, g),
        tension: tension_force(deployed, params.mass, g, drag.norm()),
        lift: aerodynamics::lift_force(
            &state.velocity,
            rho,
            params.parachute_area,
            deployed,
            state.time,
        ),
        wind: aerodynamics::wind_force(params.wind_speed, &state.velocity, rho, params.body_area),
    }
}
