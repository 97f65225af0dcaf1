use parachute_sim::io::json::{LandingLog, LandingRecord};
use parachute_sim::presets;
use parachute_sim::sim::{self, AltitudeTrigger, SimConfig};
use parachute_sim::{LandingQuality, PhysicsEngine};

const USAGE: &str = "usage: parachute-sim [preset] [deploy-altitude-m] [landing-log.json]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let preset_name = args.next().unwrap_or_else(|| "realistic".into());
    if preset_name == "-h" || preset_name == "--help" {
        println!("{USAGE}");
        println!("presets: {}", preset_names());
        return Ok(());
    }
    let preset = presets::find(&preset_name)?;
    let deploy_altitude: f64 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 800.0,
    };
    let log_path = args.next();

    // -----------------------------------------------------------------------
    // Run jump
    // -----------------------------------------------------------------------
    let mut engine = PhysicsEngine::new();
    preset.apply(&mut engine);

    let config = SimConfig::default();
    let mut trigger = AltitudeTrigger::new(deploy_altitude);
    let outcome = sim::simulate_jump(&mut engine, &config, &mut trigger);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    let params = engine.parameters();
    println!();
    println!("====================================================================");
    println!("  PARACHUTE JUMP — {} preset", preset.name);
    println!("====================================================================");
    println!();
    println!("  Jumper & Conditions");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Mass:          {:>8.1} kg    Gravity:      {:>8.2} m/s^2",
        params.mass, params.gravity
    );
    println!(
        "  Canopy area:   {:>8.1} m^2   Canopy Cd:    {:>8.2}",
        params.parachute_area, params.drag_coefficient
    );
    println!(
        "  Wind:          {:>8.1} m/s   Deploy at:    {:>8.0} m",
        params.wind_speed, deploy_altitude
    );
    println!();

    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    match outcome.deployed_at {
        Some(alt) => println!("  DEPLOY    alt={:>8.0}m", alt),
        None => println!("  DEPLOY    canopy never opened"),
    }
    match outcome.landing_speed {
        Some(v) => println!(
            "  LANDING   t={:>6.1}s   vel={:>7.2}m/s   {}",
            outcome.flight_time(),
            v,
            LandingQuality::from_speed(v)
        ),
        None => println!("  LANDING   not reached within {:.0} s", config.max_time),
    }
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Max speed:     {:>8.1} m/s", outcome.max_speed());
    println!("  Flight time:   {:>8.1} s", outcome.flight_time());
    println!("  Drift:         {:>8.1} m", outcome.drift());
    println!("  Samples:       {:>8}", outcome.trajectory.len());
    println!();

    // -----------------------------------------------------------------------
    // Landing log
    // -----------------------------------------------------------------------
    if let (Some(path), Some(speed)) = (log_path, outcome.landing_speed) {
        let mut log = LandingLog::load(&path)?;
        log.push(LandingRecord::from_engine(&engine, speed));
        log.save(&path)?;
        if let Some(best) = log.best() {
            println!(
                "  Logged to {path} ({} jumps, best {:.2} m/s {})",
                log.len(),
                best.velocity,
                best.quality
            );
        }
    }

    Ok(())
}

fn preset_names() -> String {
    presets::ALL
        .iter()
        .map(|p| p.name)
        .collect::<Vec<_>>()
        .join(", ")
}
