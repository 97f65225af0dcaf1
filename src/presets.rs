use crate::dynamics::params::Parameter;
use crate::error::{SimError, SimResult};
use crate::sim::engine::PhysicsEngine;

// ---------------------------------------------------------------------------
// Preset jumper / weather configurations
// ---------------------------------------------------------------------------

/// Values for the six slider-controlled parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub gravity: f64,
    pub mass: f64,
    pub drag_coefficient: f64,
    pub air_density: f64,
    pub parachute_area: f64,
    pub wind_speed: f64,
}

impl Preset {
    pub fn values(&self) -> [(Parameter, f64); 6] {
        [
            (Parameter::Gravity, self.gravity),
            (Parameter::Mass, self.mass),
            (Parameter::DragCoefficient, self.drag_coefficient),
            (Parameter::AirDensity, self.air_density),
            (Parameter::ParachuteArea, self.parachute_area),
            (Parameter::WindSpeed, self.wind_speed),
        ]
    }

    /// Push every value through the engine's setter so change callbacks fire.
    pub fn apply(&self, engine: &mut PhysicsEngine) {
        for (param, value) in self.values() {
            engine.set_parameter(param, value);
        }
        log::info!("applied {} preset", self.name);
    }
}

pub const REALISTIC: Preset = Preset {
    name: "realistic",
    gravity: 9.81,
    mass: 80.0,
    drag_coefficient: 1.3,
    air_density: 1.225,
    parachute_area: 50.0,
    wind_speed: 0.0,
};

pub const LIGHTWEIGHT: Preset = Preset {
    name: "lightweight",
    mass: 60.0,
    parachute_area: 60.0,
    ..REALISTIC
};

pub const HEAVYWEIGHT: Preset = Preset {
    name: "heavyweight",
    mass: 120.0,
    parachute_area: 45.0,
    ..REALISTIC
};

pub const WINDY: Preset = Preset {
    name: "windy",
    wind_speed: 10.0,
    ..REALISTIC
};

pub const HIGH_ALTITUDE: Preset = Preset {
    name: "highAltitude",
    air_density: 0.9,
    ..REALISTIC
};

pub const ALL: [Preset; 5] = [REALISTIC, LIGHTWEIGHT, HEAVYWEIGHT, WINDY, HIGH_ALTITUDE];

/// Find a preset by name (`highAltitude` also answers to `high_altitude`).
pub fn find(name: &str) -> SimResult<Preset> {
    let key = if name == "high_altitude" { "highAltitude" } else { name };
    ALL.iter()
        .find(|p| p.name == key)
        .copied()
        .ok_or_else(|| SimError::UnknownPreset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn lookup_by_name() {
        assert_eq!(find("windy").unwrap().wind_speed, 10.0);
        assert_eq!(find("high_altitude").unwrap(), HIGH_ALTITUDE);
        assert!(matches!(find("moon"), Err(SimError::UnknownPreset(_))));
    }

    #[test]
    fn apply_sets_values_and_notifies() {
        let changed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changed);
        let mut engine = PhysicsEngine::new();
        engine.on_parameter_change(move |name, _| sink.borrow_mut().push(name.to_string()));

        HEAVYWEIGHT.apply(&mut engine);
        assert_eq!(engine.parameters().mass, 120.0);
        assert_eq!(engine.parameters().parachute_area, 45.0);
        assert_eq!(changed.borrow().len(), 6);
        assert!(changed.borrow().iter().any(|n| n == "parachuteArea"));
    }
}
