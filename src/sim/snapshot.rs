use nalgebra::Vector3;

/// Read-only telemetry snapshot for displays.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsData {
    pub speed: f64,             // m/s
    pub altitude: f64,          // m, floored at 0
    pub acceleration: f64,      // m/s^2
    pub drag_force: f64,        // N
    pub gravity_force: f64,     // N
    pub wind_force: f64,        // N
    pub terminal_velocity: f64, // m/s, for the current drag configuration
    pub kinetic_energy: f64,    // J
    pub position: Vector3<f64>,
    pub parachute_deployed: bool,
    pub time: f64,              // s
}
