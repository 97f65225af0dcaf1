use nalgebra::Vector3;

use crate::dynamics::params::SimulationParameters;
use crate::physics::atmosphere::{KINEMATIC_VISCOSITY, SPEED_OF_SOUND};

/// Drag coefficient of a jumper in free fall (belly-to-earth).
pub const BODY_DRAG_COEFFICIENT: f64 = 0.6;

// ---------------------------------------------------------------------------
// Drag configuration (body vs. canopy)
// ---------------------------------------------------------------------------

/// Drag coefficient and reference area of the current configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragProfile {
    pub cd: f64,
    pub area: f64, // m^2
}

impl DragProfile {
    /// Canopy when deployed, bare body otherwise.
    pub fn for_params(params: &SimulationParameters) -> Self {
        if params.parachute_deployed {
            Self { cd: params.drag_coefficient, area: params.parachute_area }
        } else {
            Self { cd: BODY_DRAG_COEFFICIENT, area: params.body_area }
        }
    }
}

// ---------------------------------------------------------------------------
// Aerodynamic forces
// ---------------------------------------------------------------------------

/// Quadratic drag, opposing velocity: 1/2 Cd rho A v^2.
pub fn drag_force(vel: &Vector3<f64>, density: f64, profile: DragProfile) -> Vector3<f64> {
    let speed = vel.norm();
    if speed == 0.0 {
        return Vector3::zeros();
    }
    let drag_mag = 0.5 * profile.cd * density * profile.area * speed * speed;
    -vel.normalize() * drag_mag
}

/// Canopy "lift": a horizontal push whose heading rotates with simulation
/// time at 0.5 rad/s. Not a physical lift vector; it only makes the canopy
/// drift and swing.
pub fn lift_force(
    vel: &Vector3<f64>,
    density: f64,
    parachute_area: f64,
    deployed: bool,
    time: f64,
) -> Vector3<f64> {
    if !deployed {
        return Vector3::zeros();
    }
    let speed = vel.norm();
    if speed == 0.0 {
        return Vector3::zeros();
    }
    let lift_mag = 0.1 * density * parachute_area * speed * speed;
    let heading = time * 0.5;
    Vector3::new(heading.sin() * lift_mag * 0.1, 0.0, heading.cos() * lift_mag * 0.1)
}

/// Force from the horizontal wind relative to the jumper.
pub fn wind_force(
    wind_speed: f64,
    vel: &Vector3<f64>,
    density: f64,
    body_area: f64,
) -> Vector3<f64> {
    let relative = Vector3::new(wind_speed - vel.x, 0.0, -vel.z);
    let rel_speed = relative.norm();
    if rel_speed == 0.0 {
        return Vector3::zeros();
    }
    let wind_mag = 0.5 * density * body_area * rel_speed * rel_speed;
    relative.normalize() * wind_mag
}

// ---------------------------------------------------------------------------
// Derived quantities
// ---------------------------------------------------------------------------

/// Analytic terminal velocity: sqrt(2 m g / (rho Cd A)).
pub fn terminal_velocity(mass: f64, gravity: f64, density: f64, profile: DragProfile) -> f64 {
    (2.0 * mass * gravity / (density * profile.cd * profile.area)).sqrt()
}

/// Reynolds number of the body, using the diameter of a disc with the body's area.
pub fn reynolds_number(speed: f64, body_area: f64) -> f64 {
    let diameter = (body_area / std::f64::consts::PI).sqrt() * 2.0;
    speed * diameter / KINEMATIC_VISCOSITY
}

pub fn mach_number(speed: f64) -> f64 {
    speed / SPEED_OF_SOUND
}
