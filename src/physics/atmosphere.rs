// ---------------------------------------------------------------------------
// Exponential atmosphere (single scale height)
// ---------------------------------------------------------------------------

pub const SEA_LEVEL_DENSITY: f64 = 1.225;   // kg/m^3
pub const SCALE_HEIGHT: f64 = 8_400.0;      // m
pub const SPEED_OF_SOUND: f64 = 343.0;      // m/s, dry air at 20 °C
pub const KINEMATIC_VISCOSITY: f64 = 1.5e-5; // m^2/s, air at 20 °C

/// Air density at a given altitude: rho0 * exp(-h / H).
///
/// Negative altitudes are treated as sea level.
pub fn density(altitude_m: f64) -> f64 {
    let h = altitude_m.max(0.0);
    SEA_LEVEL_DENSITY * (-h / SCALE_HEIGHT).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_density() {
        assert!((density(0.0) - SEA_LEVEL_DENSITY).abs() < 1e-12);
    }

    #[test]
    fn one_scale_height_is_one_e_fold() {
        let rho = density(SCALE_HEIGHT);
        assert!((rho - SEA_LEVEL_DENSITY / std::f64::consts::E).abs() < 1e-12);
    }

    #[test]
    fn density_monotonically_decreases() {
        assert!(density(0.0) > density(500.0));
        assert!(density(500.0) > density(1_500.0));
        assert!(density(1_500.0) > 0.0);
    }

    #[test]
    fn negative_altitude_clamps_to_sea_level() {
        assert_eq!(density(-200.0), density(0.0));
    }
}
