use log::info;
use nalgebra::Vector3;

use super::engine::PhysicsEngine;
use super::snapshot::PhysicsData;

// ---------------------------------------------------------------------------
// Headless driver configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,       // fixed frame time, s (the engine clamps it to 1/60 s)
    pub max_time: f64, // hard stop, s
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.016,       // ~60 Hz render loop
            max_time: 600.0, // 10 min
        }
    }
}

// ---------------------------------------------------------------------------
// Deployment strategies
// ---------------------------------------------------------------------------

/// Stand-in for the user's hand on the ripcord.
///
/// Asked once per step before the engine advances, until the canopy is open.
pub trait DeployStrategy {
    fn should_deploy(&mut self, data: &PhysicsData) -> bool;

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Pull at or below a fixed altitude.
#[derive(Debug, Clone, Copy)]
pub struct AltitudeTrigger {
    pub altitude: f64, // m
}

impl AltitudeTrigger {
    pub fn new(altitude: f64) -> Self {
        Self { altitude }
    }
}

impl DeployStrategy for AltitudeTrigger {
    fn should_deploy(&mut self, data: &PhysicsData) -> bool {
        data.altitude <= self.altitude
    }

    fn name(&self) -> &str {
        "altitude trigger"
    }
}

/// Never pull.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverDeploy;

impl DeployStrategy for NeverDeploy {
    fn should_deploy(&mut self, _data: &PhysicsData) -> bool {
        false
    }

    fn name(&self) -> &str {
        "no deployment"
    }
}

// ---------------------------------------------------------------------------
// Trajectory samples and outcome
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Sample {
    pub time: f64,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub air_density: f64,
    pub deployed: bool,
}

impl Sample {
    fn capture(engine: &PhysicsEngine) -> Self {
        let state = engine.state();
        let params = engine.parameters();
        Sample {
            time: state.time,
            position: state.position,
            velocity: state.velocity,
            air_density: params.air_density,
            deployed: params.parachute_deployed,
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

#[derive(Debug, Clone)]
pub struct JumpOutcome {
    pub trajectory: Vec<Sample>,
    /// Touchdown speed, `None` if `max_time` ran out first.
    pub landing_speed: Option<f64>,
    /// Altitude at which the canopy opened.
    pub deployed_at: Option<f64>,
}

impl JumpOutcome {
    pub fn flight_time(&self) -> f64 {
        self.trajectory.last().map_or(0.0, |s| s.time)
    }

    pub fn max_speed(&self) -> f64 {
        self.trajectory.iter().map(Sample::speed).fold(0.0_f64, f64::max)
    }

    /// Horizontal distance from the exit point to the landing spot.
    pub fn drift(&self) -> f64 {
        self.trajectory
            .last()
            .map_or(0.0, |s| (s.position.x.powi(2) + s.position.z.powi(2)).sqrt())
    }
}

// ---------------------------------------------------------------------------
// Full jump
// ---------------------------------------------------------------------------

/// Drive `engine` at a fixed step until touchdown or `max_time`.
///
/// The engine is used as-is: call `reset` first for a jump from the exit
/// point. Registered callbacks keep firing while the runner steps.
pub fn simulate_jump(
    engine: &mut PhysicsEngine,
    config: &SimConfig,
    strategy: &mut dyn DeployStrategy,
) -> JumpOutcome {
    let capacity = ((config.max_time / config.dt.max(1e-6)) as usize + 1).min(200_000);
    let mut trajectory = Vec::with_capacity(capacity);
    trajectory.push(Sample::capture(engine));

    let mut deployed_at = None;

    while engine.state().time < config.max_time {
        if !engine.parameters().parachute_deployed
            && strategy.should_deploy(&engine.physics_data())
            && engine.deploy_parachute()
        {
            info!(
                "{} opened the canopy at {:.0} m",
                strategy.name(),
                engine.state().position.y
            );
            deployed_at = Some(engine.state().position.y);
        }

        let before = engine.state().time;
        engine.update(config.dt);
        trajectory.push(Sample::capture(engine));

        if engine.landing_speed().is_some() {
            break;
        }
        // zero-length steps would never reach max_time
        if engine.state().time <= before {
            break;
        }
    }

    JumpOutcome {
        trajectory,
        landing_speed: engine.landing_speed(),
        deployed_at,
    }
}
