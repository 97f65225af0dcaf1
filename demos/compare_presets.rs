use parachute_sim::io::csv;
use parachute_sim::presets;
use parachute_sim::sim::{self, AltitudeTrigger, SimConfig};
use parachute_sim::{LandingQuality, PhysicsEngine};

fn main() {
    env_logger::init();

    let config = SimConfig::default();
    let deploy_altitude = 1_000.0;

    println!("Deploying at {deploy_altitude:.0} m, max {:.0} s per jump", config.max_time);
    println!();
    println!("  {:<14} {:>10} {:>10} {:>10}  quality", "preset", "impact", "time", "drift");

    for preset in presets::ALL {
        let mut engine = PhysicsEngine::new();
        preset.apply(&mut engine);
        let out = sim::simulate_jump(&mut engine, &config, &mut AltitudeTrigger::new(deploy_altitude));

        match out.landing_speed {
            Some(v) => println!(
                "  {:<14} {:>8.2}m/s {:>9.1}s {:>9.1}m  {}",
                preset.name,
                v,
                out.flight_time(),
                out.drift(),
                LandingQuality::from_speed(v)
            ),
            None => println!("  {:<14} still airborne after {:.0} s", preset.name, out.flight_time()),
        }

        if preset.name == "windy" {
            csv::write_trajectory_file("windy_trajectory.csv", &out.trajectory)
                .expect("Failed to write CSV");
        }
    }

    println!();
    println!("Exported: windy_trajectory.csv");
}
