use nalgebra::Vector3;

use crate::physics::forces::ForceSet;

// ---------------------------------------------------------------------------
// Initial condition
// ---------------------------------------------------------------------------

pub const INITIAL_ALTITUDE: f64 = 1_500.0; // m

// ---------------------------------------------------------------------------
// Simulation state: position, velocity, acceleration, time, force record
// ---------------------------------------------------------------------------

/// Kinematic state of the jumper.
/// Frame: Y up, wind blows along +X, origin on the ground below the exit point.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub position: Vector3<f64>,     // m
    pub velocity: Vector3<f64>,     // m/s
    pub acceleration: Vector3<f64>, // m/s^2, derived from the last step
    pub time: f64,                  // s
    pub forces: ForceSet,           // last computed contributions, telemetry only
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, INITIAL_ALTITUDE, 0.0),
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            time: 0.0,
            forces: ForceSet::default(),
        }
    }
}

impl SimulationState {
    /// Height above ground, never negative.
    pub fn altitude(&self) -> f64 {
        self.position.y.max(0.0)
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_exit_altitude_at_rest() {
        let s = SimulationState::default();
        assert_eq!(s.position, Vector3::new(0.0, 1_500.0, 0.0));
        assert_eq!(s.speed(), 0.0);
        assert_eq!(s.time, 0.0);
        assert_eq!(s.forces.total(), Vector3::zeros());
    }

    #[test]
    fn altitude_is_floored() {
        let mut s = SimulationState::default();
        s.position.y = -3.0;
        assert_eq!(s.altitude(), 0.0);
    }
}
