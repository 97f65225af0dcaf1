use log::{debug, info, warn};
use nalgebra::Vector3;

use crate::dynamics::params::{Parameter, SimulationParameters};
use crate::dynamics::state::SimulationState;
use crate::error::SimResult;
use crate::physics::aerodynamics::{self, DragProfile};
use crate::physics::atmosphere::SEA_LEVEL_DENSITY;
use crate::physics::forces::ForceSet;

use super::event::Callbacks;
use super::integrator;
use super::landing::LandingDetector;
use super::snapshot::PhysicsData;

/// Deployment is refused at or below this height, m.
pub const MIN_DEPLOY_ALTITUDE: f64 = 50.0;
/// Fraction of the current speed shed when the canopy opens.
pub const DEPLOYMENT_SHOCK_FACTOR: f64 = 0.3;
/// Upper bound on the speed shed when the canopy opens, m/s.
pub const MAX_DEPLOYMENT_SHOCK: f64 = 20.0;

// ---------------------------------------------------------------------------
// Physics engine
// ---------------------------------------------------------------------------

/// Single-jumper simulation: parameters, state and event slots.
///
/// Every mutator takes `&mut self`, so a host that shares the engine across
/// threads has to serialize `update` and `update_parameter` itself.
#[derive(Debug)]
pub struct PhysicsEngine {
    params: SimulationParameters,
    state: SimulationState,
    callbacks: Callbacks,
    landing: LandingDetector,
}

impl Default for PhysicsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsEngine {
    pub fn new() -> Self {
        Self::with_parameters(SimulationParameters::default())
    }

    /// Start from custom parameters. The canopy always starts packed.
    pub fn with_parameters(mut params: SimulationParameters) -> Self {
        params.parachute_deployed = false;
        Self {
            params,
            state: SimulationState::default(),
            callbacks: Callbacks::default(),
            landing: LandingDetector::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Parameters
    // -----------------------------------------------------------------------

    /// Set a parameter by name from raw control input.
    ///
    /// Unknown names are ignored. Values that do not parse as a finite number
    /// are rejected with a warning and leave the parameter unchanged. Returns
    /// whether the value was applied.
    pub fn update_parameter(&mut self, name: &str, value: &str) -> bool {
        match self.try_update_parameter(name, value) {
            Ok(applied) => applied,
            Err(e) => {
                warn!("{e}; keeping previous value");
                false
            }
        }
    }

    /// Like [`update_parameter`](Self::update_parameter) but reports rejected
    /// input. `Ok(false)` means the name was not recognised.
    pub fn try_update_parameter(&mut self, name: &str, value: &str) -> SimResult<bool> {
        let Some(param) = Parameter::from_name(name) else {
            debug!("ignoring unknown parameter `{name}`");
            return Ok(false);
        };
        let parsed = param.parse_value(value)?;
        self.params.set(param, parsed);
        debug!("parameter {param} = {parsed}");
        self.callbacks.parameter_changed(name, value);
        Ok(true)
    }

    /// Typed setter; fires the change callback like a control edit would.
    pub fn set_parameter(&mut self, param: Parameter, value: f64) {
        self.params.set(param, value);
        debug!("parameter {param} = {value}");
        self.callbacks.parameter_changed(param.name(), &value.to_string());
    }

    pub fn parameter(&self, name: &str) -> Option<f64> {
        Parameter::from_name(name).map(|p| self.params.get(p))
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn forces(&self) -> &ForceSet {
        &self.state.forces
    }

    // -----------------------------------------------------------------------
    // Stepping and actions
    // -----------------------------------------------------------------------

    /// Advance by one frame. `delta_time` is clamped to 1/60 s.
    ///
    /// The ground-hit callback fires on every step that ends on the ground,
    /// not only the first, and receives the speed after the vertical
    /// component has been clamped. The touchdown speed before clamping is
    /// latched separately, see [`landing_speed`](Self::landing_speed).
    pub fn update(&mut self, delta_time: f64) {
        let touchdown = integrator::euler_step(&mut self.state, &mut self.params, delta_time);
        if let Some(impact_speed) = touchdown {
            if let Some(impact) = self.landing.observe(impact_speed) {
                info!(
                    "touchdown at t={:.2}s, impact speed {:.2} m/s",
                    self.state.time, impact
                );
            }
            self.callbacks.ground_hit(self.state.speed());
        }
    }

    /// Open the canopy.
    ///
    /// Refused (returns `false`, no effect) when already open or at or below
    /// `MIN_DEPLOY_ALTITUDE`. On success the speed drops by
    /// min(0.3 v, 20) m/s along the direction of motion.
    pub fn deploy_parachute(&mut self) -> bool {
        if self.params.parachute_deployed {
            debug!("deploy refused: canopy already open");
            return false;
        }
        if self.state.position.y <= MIN_DEPLOY_ALTITUDE {
            debug!("deploy refused: altitude {:.1} m too low", self.state.position.y);
            return false;
        }

        self.params.parachute_deployed = true;

        let speed = self.state.speed();
        let shock = (speed * DEPLOYMENT_SHOCK_FACTOR).min(MAX_DEPLOYMENT_SHOCK);
        if speed > 0.0 {
            self.state.velocity -= self.state.velocity.normalize() * shock;
        }
        info!(
            "canopy open at {:.0} m, speed {:.1} -> {:.1} m/s",
            self.state.position.y,
            speed,
            self.state.speed()
        );
        true
    }

    /// Back to the exit point at rest with the canopy packed. Other
    /// parameters keep their current values.
    pub fn reset(&mut self) {
        self.state = SimulationState::default();
        self.params.parachute_deployed = false;
        self.params.air_density = SEA_LEVEL_DENSITY;
        self.landing.reset();
        debug!("simulation reset");
    }

    // -----------------------------------------------------------------------
    // Callbacks
    // -----------------------------------------------------------------------

    pub fn on_ground_hit<F>(&mut self, handler: F)
    where
        F: FnMut(f64) + 'static,
    {
        self.callbacks.set_ground_hit(Box::new(handler));
    }

    pub fn on_parameter_change<F>(&mut self, handler: F)
    where
        F: FnMut(&str, &str) + 'static,
    {
        self.callbacks.set_parameter_change(Box::new(handler));
    }

    // -----------------------------------------------------------------------
    // Readouts (no mutation)
    // -----------------------------------------------------------------------

    pub fn terminal_velocity(&self) -> f64 {
        aerodynamics::terminal_velocity(
            self.params.mass,
            self.params.gravity,
            self.params.air_density,
            DragProfile::for_params(&self.params),
        )
    }

    pub fn kinetic_energy(&self) -> f64 {
        let speed = self.state.speed();
        0.5 * self.params.mass * speed * speed
    }

    pub fn reynolds_number(&self) -> f64 {
        aerodynamics::reynolds_number(self.state.speed(), self.params.body_area)
    }

    pub fn mach_number(&self) -> f64 {
        aerodynamics::mach_number(self.state.speed())
    }

    /// Decorative torque of the canopy drag about the harness:
    /// r x F with r = (0, -rope_length, 0). Zero while packed.
    pub fn torque(&self) -> Vector3<f64> {
        if !self.params.parachute_deployed {
            return Vector3::zeros();
        }
        let r = Vector3::new(0.0, -self.params.rope_length, 0.0);
        r.cross(&self.state.forces.drag)
    }

    /// Impact speed of the first ground contact since the last reset,
    /// measured before the ground clamp.
    pub fn landing_speed(&self) -> Option<f64> {
        self.landing.impact_speed()
    }

    pub fn physics_data(&self) -> PhysicsData {
        PhysicsData {
            speed: self.state.speed(),
            altitude: self.state.altitude(),
            acceleration: self.state.acceleration.norm(),
            drag_force: self.state.forces.drag.norm(),
            gravity_force: self.state.forces.gravity.norm(),
            wind_force: self.state.forces.wind.norm(),
            terminal_velocity: self.terminal_velocity(),
            kinetic_energy: self.kinetic_energy(),
            position: self.state.position,
            parachute_deployed: self.params.parachute_deployed,
            time: self.state.time,
        }
    }
}
