use std::fmt;

// ---------------------------------------------------------------------------
// Engine callbacks
// ---------------------------------------------------------------------------

/// Called with the current speed on every step that ends on the ground.
pub type GroundHitHandler = Box<dyn FnMut(f64)>;

/// Called with the parameter name and the raw value it was set from.
pub type ParameterChangeHandler = Box<dyn FnMut(&str, &str)>;

/// One handler slot per event. Registering replaces the previous handler.
#[derive(Default)]
pub struct Callbacks {
    ground_hit: Option<GroundHitHandler>,
    parameter_change: Option<ParameterChangeHandler>,
}

impl Callbacks {
    pub fn set_ground_hit(&mut self, handler: GroundHitHandler) {
        self.ground_hit = Some(handler);
    }

    pub fn set_parameter_change(&mut self, handler: ParameterChangeHandler) {
        self.parameter_change = Some(handler);
    }

    pub fn ground_hit(&mut self, speed: f64) {
        if let Some(handler) = self.ground_hit.as_mut() {
            handler(speed);
        }
    }

    pub fn parameter_changed(&mut self, name: &str, value: &str) {
        if let Some(handler) = self.parameter_change.as_mut() {
            handler(name, value);
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("ground_hit", &self.ground_hit.is_some())
            .field("parameter_change", &self.parameter_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn empty_slots_are_no_ops() {
        let mut cb = Callbacks::default();
        cb.ground_hit(3.0);
        cb.parameter_changed("mass", "90");
    }

    #[test]
    fn registering_replaces_previous_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut cb = Callbacks::default();

        let first = Rc::clone(&seen);
        cb.set_ground_hit(Box::new(move |v| first.borrow_mut().push(("first", v))));
        let second = Rc::clone(&seen);
        cb.set_ground_hit(Box::new(move |v| second.borrow_mut().push(("second", v))));

        cb.ground_hit(4.5);
        assert_eq!(*seen.borrow(), vec![("second", 4.5)]);
    }

    #[test]
    fn parameter_handler_receives_raw_value() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let mut cb = Callbacks::default();
        cb.set_parameter_change(Box::new(move |name: &str, value: &str| {
            *sink.borrow_mut() = Some((name.to_string(), value.to_string()));
        }));
        cb.parameter_changed("windSpeed", "7.5");
        assert_eq!(*seen.borrow(), Some(("windSpeed".to_string(), "7.5".to_string())));
    }
}
