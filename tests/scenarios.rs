use std::cell::RefCell;
use std::rc::Rc;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use nalgebra::Vector3;

use parachute_sim::physics::{aerodynamics, atmosphere, forces};
use parachute_sim::sim::{self, AltitudeTrigger, NeverDeploy, SimConfig};
use parachute_sim::{PhysicsEngine, SimulationParameters, SimulationState};

const DT: f64 = 0.016;

fn fall_to(engine: &mut PhysicsEngine, altitude: f64) {
    while engine.state().position.y > altitude {
        engine.update(DT);
    }
}

// ---------------------------------------------------------------------------
// Integrator invariants
// ---------------------------------------------------------------------------

#[test]
fn altitude_never_negative() {
    let mut engine = PhysicsEngine::new();
    engine.update_parameter("windSpeed", "-8");
    let mut trigger = AltitudeTrigger::new(300.0);
    let config = SimConfig { dt: 0.25, max_time: 600.0 }; // oversized, clamped per step

    let out = sim::simulate_jump(&mut engine, &config, &mut trigger);
    assert!(out.landing_speed.is_some());
    assert!(out.trajectory.iter().all(|s| s.position.y >= 0.0));

    for _ in 0..200 {
        engine.update(1.0);
        assert!(engine.state().position.y >= 0.0);
    }
}

#[test]
fn ground_hit_fires_exactly_on_contact_steps() {
    let hits = Rc::new(RefCell::new(0usize));
    let count = Rc::clone(&hits);
    let mut engine = PhysicsEngine::new();
    engine.on_ground_hit(move |_| *count.borrow_mut() += 1);

    let mut contact_steps = 0;
    for _ in 0..3_000 {
        let before = *hits.borrow();
        engine.update(DT);
        let fired = *hits.borrow() - before;
        let on_ground = engine.state().position.y == 0.0;

        assert_eq!(fired, usize::from(on_ground));
        if on_ground {
            contact_steps += 1;
        }
        if contact_steps == 5 {
            break;
        }
    }
    assert_eq!(contact_steps, 5, "jumper should have landed and stayed down");
}

#[test]
fn zero_velocity_forces_are_exactly_zero() {
    let mut state = SimulationState::default();
    let mut params = SimulationParameters::default();
    params.parachute_deployed = true;
    state.time = 7.3;

    let f = forces::compute(&state, &params);
    assert_eq!(f.drag, Vector3::zeros());
    assert_eq!(f.lift, Vector3::zeros());
    assert_eq!(f.wind, Vector3::zeros());
    assert!(f.total().iter().all(|c| c.is_finite()));

    // moving with the wind: relative wind is zero, nothing is normalised
    state.velocity = Vector3::new(6.0, -3.0, 0.0);
    params.wind_speed = 6.0;
    let f = forces::compute(&state, &params);
    assert_eq!(f.wind, Vector3::zeros());
}

// ---------------------------------------------------------------------------
// Deployment
// ---------------------------------------------------------------------------

#[test]
fn deployment_shock_at_1000m() {
    let mut engine = PhysicsEngine::new();
    fall_to(&mut engine, 1_000.0);

    let before = engine.state().velocity;
    let speed = before.norm();
    assert!(before.y < 0.0);

    assert!(engine.deploy_parachute());
    assert!(engine.parameters().parachute_deployed);

    let expected = speed - (0.3 * speed).min(20.0);
    assert_relative_eq!(engine.state().speed(), expected, epsilon = 1e-9);
    // direction unchanged
    assert_relative_eq!(
        engine.state().velocity.normalize(),
        before.normalize(),
        epsilon = 1e-12
    );

    assert!(!engine.deploy_parachute());
    assert_relative_eq!(engine.state().speed(), expected, epsilon = 1e-9);
}

#[test]
fn deployment_refused_below_50m() {
    let mut engine = PhysicsEngine::new();
    fall_to(&mut engine, 50.0);
    let state = engine.state().clone();
    assert!(!engine.deploy_parachute());
    assert_eq!(*engine.state(), state);
    assert!(!engine.parameters().parachute_deployed);
}

#[test]
fn deployment_never_sheds_more_than_20() {
    let mut engine = PhysicsEngine::new();
    fall_to(&mut engine, 600.0);
    let speed = engine.state().speed();
    assert!(speed > 50.0);
    engine.deploy_parachute();
    let shed = speed - engine.state().speed();
    assert!(shed > 0.0 && shed <= 20.0 + 1e-9);
}

// ---------------------------------------------------------------------------
// Reset
// ---------------------------------------------------------------------------

#[test]
fn reset_matches_fresh_engine() {
    let fresh = PhysicsEngine::new();
    let mut engine = PhysicsEngine::new();

    fall_to(&mut engine, 900.0);
    engine.deploy_parachute();
    for _ in 0..100 {
        engine.update(DT);
    }
    engine.reset();
    assert_eq!(engine.state(), fresh.state());
    assert_eq!(engine.parameters(), fresh.parameters());

    engine.reset();
    assert_eq!(engine.state(), fresh.state());
}

#[test]
fn reset_leaves_configuration_alone() {
    let mut engine = PhysicsEngine::new();
    engine.update_parameter("mass", "70");
    engine.update_parameter("ropeLength", "9.5");
    fall_to(&mut engine, 1_200.0);
    engine.reset();

    assert_eq!(engine.parameters().mass, 70.0);
    assert_eq!(engine.parameters().rope_length, 9.5);
    assert_eq!(engine.parameters().air_density, 1.225);
}

// ---------------------------------------------------------------------------
// Terminal velocity
// ---------------------------------------------------------------------------

#[test]
fn terminal_velocity_monotonicity() {
    let mut engine = PhysicsEngine::new();
    let base = engine.terminal_velocity();
    engine.update_parameter("mass", "60");
    assert!(engine.terminal_velocity() < base);

    engine.update_parameter("mass", "80");
    fall_to(&mut engine, 1_300.0);
    engine.deploy_parachute();
    let canopy = engine.terminal_velocity();
    engine.update_parameter("parachuteArea", "70");
    assert!(engine.terminal_velocity() < canopy);
}

#[test]
fn free_fall_approaches_terminal_velocity() {
    let mut engine = PhysicsEngine::new();
    let mut peak: f64 = 0.0;

    while engine.state().position.y > 0.0 {
        engine.update(DT);
        if engine.state().position.y == 0.0 {
            break;
        }
        let vy = engine.state().velocity.y.abs();
        let vt = engine.terminal_velocity();
        assert!(
            vy <= vt * 1.02,
            "|vy| {vy:.2} exceeds terminal {vt:.2} at {:.0} m",
            engine.state().position.y
        );
        peak = peak.max(vy);
    }

    // packed terminal velocity spans roughly 60 m/s at exit down to 55 m/s at sea level
    let body = aerodynamics::DragProfile::for_params(engine.parameters());
    let exit_vt = aerodynamics::terminal_velocity(80.0, 9.81, atmosphere::density(1_500.0), body);
    assert!(exit_vt > 59.5 && exit_vt < 61.0, "exit terminal {exit_vt}");

    let ground_vt = engine.terminal_velocity();
    assert_relative_eq!(ground_vt, (2.0_f64 * 80.0 * 9.81 / (1.225 * 0.6 * 0.7)).sqrt(), epsilon = 1e-9);
    assert!(peak > 54.0 && peak < exit_vt, "peak {peak}");
}

#[test]
fn mass_update_reaches_calculations() {
    let mut engine = PhysicsEngine::new();
    engine.update_parameter("mass", "100");
    let data = engine.physics_data();

    let profile = aerodynamics::DragProfile::for_params(engine.parameters());
    let expected = aerodynamics::terminal_velocity(100.0, 9.81, 1.225, profile);
    assert_abs_diff_eq!(data.terminal_velocity, expected, epsilon = 1e-12);

    engine.update(DT);
    assert_abs_diff_eq!(engine.physics_data().gravity_force, 981.0, epsilon = 1e-9);
}

// ---------------------------------------------------------------------------
// Whole jumps
// ---------------------------------------------------------------------------

#[test]
fn wind_drifts_the_canopy_downwind() {
    let mut engine = PhysicsEngine::new();
    engine.update_parameter("windSpeed", "10");
    let out = sim::simulate_jump(&mut engine, &SimConfig::default(), &mut AltitudeTrigger::new(1_000.0));

    assert!(out.landing_speed.is_some());
    assert!(engine.state().position.x > 0.0);
    assert!(out.drift() > 10.0);
}

#[test]
fn no_deploy_vs_canopy_landing() {
    let mut engine = PhysicsEngine::new();
    let free = sim::simulate_jump(&mut engine, &SimConfig::default(), &mut NeverDeploy);
    engine.reset();
    let canopy = sim::simulate_jump(&mut engine, &SimConfig::default(), &mut AltitudeTrigger::new(1_000.0));

    assert!(free.landing_speed.unwrap() > canopy.landing_speed.unwrap() * 5.0);
    assert!(canopy.flight_time() > free.flight_time());
}
