use crate::dynamics::params::SimulationParameters;
use crate::dynamics::state::SimulationState;
use crate::physics::{atmosphere, forces};

/// Largest step the integrator will take, s.
pub const MAX_STEP: f64 = 1.0 / 60.0;

// ---------------------------------------------------------------------------
// Explicit Euler step with ground contact
// ---------------------------------------------------------------------------

/// Clamp a caller-supplied frame time to `[0, MAX_STEP]`.
/// Negative or NaN input becomes a zero-length step.
pub fn clamp_step(dt: f64) -> f64 {
    if dt > 0.0 {
        dt.min(MAX_STEP)
    } else {
        0.0
    }
}

/// Advance `state` by one step of at most `MAX_STEP` seconds.
///
/// Acceleration is taken from the forces at the start of the step; position
/// uses the already-updated velocity plus the 1/2 a dt^2 term. Air density is
/// refreshed from the new altitude on the way out.
///
/// Returns the speed just before ground clamping when the step ended at or
/// below ground level, `None` while airborne.
pub fn euler_step(
    state: &mut SimulationState,
    params: &mut SimulationParameters,
    dt: f64,
) -> Option<f64> {
    let dt = clamp_step(dt);

    let forces = forces::compute(state, params);
    let total = forces.total();
    state.forces = forces;

    state.acceleration = total / params.mass;
    state.velocity += state.acceleration * dt;
    state.position += state.velocity * dt + state.acceleration * (0.5 * dt * dt);
    state.time += dt;

    let impact_speed = if state.position.y <= 0.0 {
        let speed = state.velocity.norm();
        state.position.y = 0.0;
        state.velocity.y = state.velocity.y.max(0.0);
        Some(speed)
    } else {
        None
    };

    params.air_density = atmosphere::density(state.position.y);
    impact_speed
}
