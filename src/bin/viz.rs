use std::cell::{Cell, RefCell};
use std::ops::RangeInclusive;
use std::rc::Rc;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use parachute_sim::presets;
use parachute_sim::{LandingQuality, Parameter, PhysicsData, PhysicsEngine};

/// Telemetry readouts refresh at 10 Hz, independent of the frame rate.
const DISPLAY_INTERVAL: f64 = 0.1;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Parachute Landing Simulator",
        options,
        Box::new(|_| Ok(Box::new(JumpViz::new()))),
    )
}

struct SliderState {
    param: Parameter,
    label: &'static str,
    range: RangeInclusive<f64>,
    value: f64,
}

struct JumpViz {
    engine: PhysicsEngine,
    sliders: Vec<SliderState>,
    running: bool,
    display: PhysicsData,
    since_display: f64,
    history: Vec<[f64; 3]>, // time, altitude, speed
    grounded: Rc<Cell<bool>>,
    notices: Rc<RefCell<Vec<String>>>,
    result: Option<(f64, LandingQuality, f64)>, // impact speed, quality, flight time
}

impl JumpViz {
    fn new() -> Self {
        let mut engine = PhysicsEngine::new();

        let grounded = Rc::new(Cell::new(false));
        let flag = Rc::clone(&grounded);
        engine.on_ground_hit(move |_| flag.set(true));

        let notices = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notices);
        engine.on_parameter_change(move |name, value| {
            if name != Parameter::Gravity.name() {
                return;
            }
            if let Ok(g) = value.parse::<f64>() {
                if !(5.0..=15.0).contains(&g) {
                    let kind = if g < 5.0 { "Low" } else { "High" };
                    sink.borrow_mut()
                        .push(format!("Gravity set to {g} m/s^2 ({kind} gravity environment)"));
                }
            }
        });

        let slider = |param: Parameter, label: &'static str, range: RangeInclusive<f64>| SliderState {
            param,
            label,
            range,
            value: engine.parameters().get(param),
        };
        let sliders = vec![
            slider(Parameter::Gravity, "Gravity (m/s^2)", 1.0..=20.0),
            slider(Parameter::Mass, "Mass (kg)", 40.0..=150.0),
            slider(Parameter::DragCoefficient, "Drag coefficient", 0.5..=2.5),
            slider(Parameter::AirDensity, "Air density (kg/m^3)", 0.5..=1.5),
            slider(Parameter::ParachuteArea, "Parachute area (m^2)", 10.0..=100.0),
            slider(Parameter::WindSpeed, "Wind speed (m/s)", -20.0..=20.0),
        ];

        let display = engine.physics_data();
        Self {
            engine,
            sliders,
            running: false,
            display,
            since_display: 0.0,
            history: Vec::new(),
            grounded,
            notices,
            result: None,
        }
    }

    fn sync_sliders(&mut self) {
        for s in &mut self.sliders {
            s.value = self.engine.parameters().get(s.param);
        }
    }

    fn start(&mut self) {
        if self.result.is_none() {
            self.running = true;
        }
    }

    fn deploy(&mut self) {
        if !self.running {
            return;
        }
        if !self.engine.deploy_parachute() {
            let reason = if self.engine.parameters().parachute_deployed {
                "Parachute already deployed"
            } else {
                "Too low to deploy safely"
            };
            self.notices.borrow_mut().push(reason.to_string());
        }
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.running = false;
        self.grounded.set(false);
        self.history.clear();
        self.result = None;
        self.display = self.engine.physics_data();
        self.sync_sliders();
    }

    fn step(&mut self, dt: f64) {
        if self.running {
            self.engine.update(dt);
            let s = self.engine.state();
            self.history.push([s.time, s.altitude(), s.speed()]);
        }

        if self.grounded.get() && self.result.is_none() {
            self.running = false;
            if let Some(speed) = self.engine.landing_speed() {
                let quality = LandingQuality::from_speed(speed);
                self.result = Some((speed, quality, self.engine.state().time));
            }
        }

        self.since_display += dt;
        if self.since_display >= DISPLAY_INTERVAL {
            self.display = self.engine.physics_data();
            self.since_display = 0.0;
        }
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Parameters");
        for s in &mut self.sliders {
            let response = ui.add(egui::Slider::new(&mut s.value, s.range.clone()).text(s.label));
            if response.changed() {
                self.engine.update_parameter(s.param.name(), &s.value.to_string());
            }
        }

        ui.separator();
        ui.label("Presets");
        let mut chosen = None;
        ui.horizontal_wrapped(|ui| {
            for p in presets::ALL {
                if ui.button(p.name).clicked() {
                    chosen = Some(p);
                }
            }
        });
        if let Some(p) = chosen {
            p.apply(&mut self.engine);
            self.sync_sliders();
            self.notices.borrow_mut().push(format!("Applied {} preset", p.name));
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Start (S)").clicked() {
                self.start();
            }
            if ui.button("Deploy (Space)").clicked() {
                self.deploy();
            }
            if ui.button("Reset (R)").clicked() {
                self.reset();
            }
        });

        ui.separator();
        ui.heading("Telemetry");
        let d = &self.display;
        ui.label(format!("Velocity:          {:>8.1} m/s", d.speed));
        ui.label(format!("Altitude:          {:>8.0} m", d.altitude));
        ui.label(format!("Acceleration:      {:>8.2} m/s^2", d.acceleration));
        ui.label(format!("Drag force:        {:>8.0} N", d.drag_force));
        ui.label(format!("Wind force:        {:>8.1} N", d.wind_force));
        ui.label(format!("Terminal velocity: {:>8.1} m/s", d.terminal_velocity));
        ui.label(format!("Kinetic energy:    {:>8.0} J", d.kinetic_energy));
        ui.label(format!("Mach:              {:>8.3}", self.engine.mach_number()));
        ui.label(format!(
            "Canopy:            {}",
            if d.parachute_deployed { "open" } else { "packed" }
        ));

        let notices = self.notices.borrow();
        if !notices.is_empty() {
            ui.separator();
            for n in notices.iter().rev().take(4) {
                ui.small(n.as_str());
            }
        }
    }
}

impl eframe::App for JumpViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (dt, start, deploy, reset) = ctx.input(|i| {
            (
                f64::from(i.stable_dt),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::R),
            )
        });
        if start {
            self.start();
        }
        if deploy {
            self.deploy();
        }
        if reset {
            self.reset();
        }
        self.step(dt);

        egui::SidePanel::left("controls")
            .min_width(300.0)
            .show(ctx, |ui| self.controls_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_h = available.y / 2.0 - 8.0;

            let step = (self.history.len() / 2000).max(1);
            let altitude: PlotPoints = self.history.iter()
                .step_by(step)
                .map(|h| [h[0], h[1]])
                .collect();
            let speed: PlotPoints = self.history.iter()
                .step_by(step)
                .map(|h| [h[0], h[2]])
                .collect();

            ui.label("Altitude (m)");
            Plot::new("altitude")
                .height(half_h)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Altitude", altitude));
                });

            ui.label("Speed (m/s)");
            Plot::new("speed")
                .height(half_h)
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Speed", speed));
                });
        });

        let mut try_again = false;
        if let Some((speed, quality, flight_time)) = self.result {
            egui::Window::new("Landing Complete!")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(format!("Impact velocity: {speed:.2} m/s"));
                    ui.label(format!("Landing quality: {quality}"));
                    ui.label(format!("Flight time: {flight_time:.1} s"));
                    if ui.button("Try Again").clicked() {
                        try_again = true;
                    }
                });
        }
        if try_again {
            self.reset();
        }

        ctx.request_repaint();
    }
}
