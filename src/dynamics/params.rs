use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::physics::atmosphere::SEA_LEVEL_DENSITY;

// ---------------------------------------------------------------------------
// Simulation parameters (user-tunable configuration)
// ---------------------------------------------------------------------------

/// Physical configuration of the jump.
///
/// Field names serialize in camelCase so stored parameter sets keep the
/// names users see on the control panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    pub gravity: f64,            // m/s^2
    pub mass: f64,               // kg
    pub drag_coefficient: f64,   // canopy Cd, dimensionless
    pub air_density: f64,        // kg/m^3, rewritten every step from altitude
    pub parachute_area: f64,     // m^2
    pub body_area: f64,          // m^2, jumper cross-section
    pub wind_speed: f64,         // m/s along +X, signed
    pub parachute_deployed: bool,
    pub rope_length: f64,        // m, suspension line length
    pub body_volume: f64,        // m^3
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            mass: 80.0,
            drag_coefficient: 1.3,
            air_density: SEA_LEVEL_DENSITY,
            parachute_area: 50.0,
            body_area: 0.7,
            wind_speed: 0.0,
            parachute_deployed: false,
            rope_length: 8.0,
            body_volume: 0.07,
        }
    }
}

impl SimulationParameters {
    /// Numeric value of a parameter. The deployment flag reads as 1.0 / 0.0.
    pub fn get(&self, param: Parameter) -> f64 {
        match param {
            Parameter::Gravity => self.gravity,
            Parameter::Mass => self.mass,
            Parameter::DragCoefficient => self.drag_coefficient,
            Parameter::AirDensity => self.air_density,
            Parameter::ParachuteArea => self.parachute_area,
            Parameter::BodyArea => self.body_area,
            Parameter::WindSpeed => self.wind_speed,
            Parameter::ParachuteDeployed => {
                if self.parachute_deployed {
                    1.0
                } else {
                    0.0
                }
            }
            Parameter::RopeLength => self.rope_length,
            Parameter::BodyVolume => self.body_volume,
        }
    }

    /// Overwrite a parameter.
    ///
    /// The deployment flag only latches: any non-zero value sets it, while
    /// zero leaves it untouched. Clearing it is the job of a full reset.
    pub fn set(&mut self, param: Parameter, value: f64) {
        match param {
            Parameter::Gravity => self.gravity = value,
            Parameter::Mass => self.mass = value,
            Parameter::DragCoefficient => self.drag_coefficient = value,
            Parameter::AirDensity => self.air_density = value,
            Parameter::ParachuteArea => self.parachute_area = value,
            Parameter::BodyArea => self.body_area = value,
            Parameter::WindSpeed => self.wind_speed = value,
            Parameter::ParachuteDeployed => {
                if value != 0.0 {
                    self.parachute_deployed = true;
                }
            }
            Parameter::RopeLength => self.rope_length = value,
            Parameter::BodyVolume => self.body_volume = value,
        }
    }
}

// ---------------------------------------------------------------------------
// Parameter names
// ---------------------------------------------------------------------------

/// The ten recognised configuration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Gravity,
    Mass,
    DragCoefficient,
    AirDensity,
    ParachuteArea,
    BodyArea,
    WindSpeed,
    ParachuteDeployed,
    RopeLength,
    BodyVolume,
}

impl Parameter {
    pub const ALL: [Parameter; 10] = [
        Parameter::Gravity,
        Parameter::Mass,
        Parameter::DragCoefficient,
        Parameter::AirDensity,
        Parameter::ParachuteArea,
        Parameter::BodyArea,
        Parameter::WindSpeed,
        Parameter::ParachuteDeployed,
        Parameter::RopeLength,
        Parameter::BodyVolume,
    ];

    /// Control-panel name (camelCase).
    pub fn name(self) -> &'static str {
        match self {
            Parameter::Gravity => "gravity",
            Parameter::Mass => "mass",
            Parameter::DragCoefficient => "dragCoefficient",
            Parameter::AirDensity => "airDensity",
            Parameter::ParachuteArea => "parachuteArea",
            Parameter::BodyArea => "bodyArea",
            Parameter::WindSpeed => "windSpeed",
            Parameter::ParachuteDeployed => "parachuteDeployed",
            Parameter::RopeLength => "ropeLength",
            Parameter::BodyVolume => "bodyVolume",
        }
    }

    /// Look up a parameter by its control-panel name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Parameter> {
        Parameter::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Parse raw control input for this parameter.
    ///
    /// Non-numeric and non-finite input is rejected rather than stored.
    /// The deployment flag additionally accepts `true` / `false`.
    pub fn parse_value(self, raw: &str) -> SimResult<f64> {
        let text = raw.trim();
        if self == Parameter::ParachuteDeployed {
            match text {
                "true" => return Ok(1.0),
                "false" => return Ok(0.0),
                _ => {}
            }
        }
        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(SimError::InvalidValue {
                name: self.name().to_string(),
                value: raw.to_string(),
            }),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        Parameter::from_name(s).ok_or_else(|| SimError::UnknownParameter(s.to_string()))
    }
}
