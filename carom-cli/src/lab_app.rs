//! Interactive collision lab
//!
//! This module provides the egui front-end around the core simulation:
//! play/pause/step controls, Idle-only parameter editing, a painted track
//! view, telemetry charts and the collision report, with live reload of
//! the scenario file.

use carom_core::diagnostics::format_scenario_error;
use carom_core::engine::Body;
use carom_core::runtime::Simulation;
use carom_core::scenario::{parse_scenario, Scenario};
use carom_core::telemetry::{sample, TelemetrySample};
use carom_core::validate_scenario;
use eframe::egui;
use notify::{Event, RecommendedWatcher, Watcher};
use std::path::PathBuf;
use std::sync::mpsc;

use crate::report;

/// Interactive lab application
pub struct LabApp {
    scenario_path: Option<PathBuf>,
    scenario: Scenario,
    sim: Simulation,
    restitution: f32,
    speed_multiplier: f32,
    initial_sample: TelemetrySample,
    last_load_error: Option<String>,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
    needs_reload: bool,
}

impl LabApp {
    pub fn new(scenario_path: Option<PathBuf>, _cc: &eframe::CreationContext<'_>) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut file_watcher = None;

        if let Some(path) = &scenario_path {
            let mut watcher = notify::recommended_watcher(move |res| {
                // Silently ignore send failures - they can happen during shutdown
                let _ = tx.send(res);
            })
            .ok();

            // File watching is optional for lab functionality
            if let Some(ref mut w) = watcher {
                let _ = w.watch(path, notify::RecursiveMode::NonRecursive);
            }
            file_watcher = watcher;
        }

        let scenario = Scenario::elastic_exchange();
        let (left, right) = scenario.to_bodies();
        let sim = Simulation::new(scenario.track, left, right);
        let initial_sample = sample(&sim.world());
        let restitution = scenario.restitution;

        let mut app = Self {
            scenario_path,
            scenario,
            sim,
            restitution,
            speed_multiplier: 1.0,
            initial_sample,
            last_load_error: None,
            file_watcher,
            file_receiver: rx,
            needs_reload: false,
        };

        // Initial load replaces the built-in preset when a file was given
        app.reload_scenario();

        app
    }

    fn reload_scenario(&mut self) {
        let path = match self.scenario_path.clone() {
            Some(path) => path,
            None => return,
        };

        let source = match std::fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) => {
                self.last_load_error = Some(format!("error reading {}: {}", path.display(), e));
                return;
            }
        };

        match parse_scenario(&source) {
            Ok(scenario) => {
                let diagnostics = validate_scenario(&scenario);
                if diagnostics.has_errors() {
                    let lines: Vec<String> =
                        diagnostics.iter().map(|d| d.to_string()).collect();
                    self.last_load_error = Some(lines.join("\n"));
                    return;
                }
                for diagnostic in diagnostics.iter() {
                    eprintln!("{}", diagnostic);
                }
                self.restitution = scenario.restitution;
                self.scenario = scenario;
                self.last_load_error = None;
                self.rebuild_simulation();
            }
            Err(e) => {
                self.last_load_error = Some(format_scenario_error(&e, &source));
            }
        }
    }

    /// Rebuild from scratch; used on (re)load where the track may change
    fn rebuild_simulation(&mut self) {
        let (left, right) = self.scenario.to_bodies();
        self.sim = Simulation::new(self.scenario.track, left, right);
        self.initial_sample = sample(&self.sim.world());
    }

    /// Put the current initial conditions back; track stays as loaded
    fn reset_run(&mut self) {
        let (left, right) = self.scenario.to_bodies();
        self.sim.reset(left, right);
        self.initial_sample = sample(&self.sim.world());
    }

    fn check_file_changes(&mut self) {
        // Drain file change events; only the scenario file is watched
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_),
                    ..
                }) => {
                    self.needs_reload = true;
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("File watcher error: {}", e);
                }
            }
        }

        if self.needs_reload {
            self.reload_scenario();
            self.needs_reload = false;
        }
    }

    fn draw_track(&self, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let painter = ui.painter();

        let world = self.sim.world();
        let length = self.scenario.track.length;

        let margin = 40.0;
        let x0 = rect.left() + margin;
        let x1 = rect.right() - margin;
        let scale = (x1 - x0) / length;
        let track_y = rect.center().y;

        // Track line with a wall tick at each end
        painter.line_segment(
            [egui::pos2(x0, track_y), egui::pos2(x1, track_y)],
            egui::Stroke::new(2.0, egui::Color32::GRAY),
        );
        for x in [x0, x1] {
            painter.line_segment(
                [egui::pos2(x, track_y - 18.0), egui::pos2(x, track_y + 18.0)],
                egui::Stroke::new(3.0, egui::Color32::DARK_GRAY),
            );
        }

        let bodies = [
            (world.left, egui::Color32::LIGHT_BLUE, egui::Color32::BLUE, "left"),
            (world.right, egui::Color32::LIGHT_RED, egui::Color32::RED, "right"),
        ];
        for (body, fill, outline, name) in bodies {
            let center = egui::pos2(x0 + body.position * scale, track_y);

            // Body radius based on mass (with reasonable bounds)
            let radius = (body.mass.sqrt() * 9.0).max(5.0).min(32.0);

            painter.circle_filled(center, radius, fill);
            painter.circle_stroke(center, radius, egui::Stroke::new(1.5, outline));

            // Velocity arrow, capped to stay readable
            if body.velocity.abs() > f32::EPSILON {
                let arrow_len = (body.velocity * scale * 0.25).max(-120.0).min(120.0);
                painter.arrow(
                    center,
                    egui::vec2(arrow_len, 0.0),
                    egui::Stroke::new(2.0, outline),
                );
            }

            painter.text(
                center + egui::vec2(0.0, radius + 12.0),
                egui::Align2::CENTER_TOP,
                format!("{} {:.1} kg", name, body.mass),
                egui::FontId::default(),
                egui::Color32::WHITE,
            );
        }
    }

    fn draw_charts(&self, ui: &mut egui::Ui) {
        let samples: Vec<TelemetrySample> = self.sim.history().iter().copied().collect();
        if samples.len() < 2 {
            ui.label("telemetry appears after the first step");
            return;
        }

        let rect = ui.max_rect();
        let painter = ui.painter();

        let t0 = samples[0].time;
        let span = (samples[samples.len() - 1].time - t0).max(f32::EPSILON);

        // One shared vertical range so conserved quantities read flat
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for s in &samples {
            lo = lo.min(s.total_momentum).min(s.total_kinetic_energy);
            hi = hi.max(s.total_momentum).max(s.total_kinetic_energy);
        }
        let pad = (hi - lo) * 0.1 + 0.1;
        let lo = lo - pad;
        let hi = hi + pad;

        let to_screen = |t: f32, v: f32| {
            egui::pos2(
                rect.left() + (t - t0) / span * rect.width(),
                rect.bottom() - (v - lo) / (hi - lo) * rect.height(),
            )
        };

        for pair in samples.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            painter.line_segment(
                [
                    to_screen(a.time, a.total_momentum),
                    to_screen(b.time, b.total_momentum),
                ],
                egui::Stroke::new(1.5, egui::Color32::LIGHT_GREEN),
            );
            painter.line_segment(
                [
                    to_screen(a.time, a.total_kinetic_energy),
                    to_screen(b.time, b.total_kinetic_energy),
                ],
                egui::Stroke::new(1.5, egui::Color32::GOLD),
            );
        }

        painter.text(
            rect.left_top() + egui::vec2(8.0, 4.0),
            egui::Align2::LEFT_TOP,
            "momentum (kg m/s)",
            egui::FontId::default(),
            egui::Color32::LIGHT_GREEN,
        );
        painter.text(
            rect.left_top() + egui::vec2(8.0, 22.0),
            egui::Align2::LEFT_TOP,
            "kinetic energy (J)",
            egui::FontId::default(),
            egui::Color32::GOLD,
        );
    }
}

/// One row of drag values for a body; returns true on any edit
fn body_editor(ui: &mut egui::Ui, label: &str, body: &mut Body, track_length: f32) -> bool {
    let mut changed = false;

    ui.label(label);
    ui.horizontal(|ui| {
        ui.label("mass (kg)");
        changed |= ui
            .add(egui::DragValue::new(&mut body.mass).speed(0.1).range(0.1..=100.0))
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label("velocity (m/s)");
        changed |= ui
            .add(egui::DragValue::new(&mut body.velocity).speed(0.1).range(-20.0..=20.0))
            .changed();
    });
    ui.horizontal(|ui| {
        ui.label("position (m)");
        changed |= ui
            .add(
                egui::DragValue::new(&mut body.position)
                    .speed(0.05)
                    .range(0.0..=track_length),
            )
            .changed();
    });

    changed
}

impl eframe::App for LabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for file changes
        self.check_file_changes();

        // Top bar with controls
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let running = self.sim.is_running();

                // Play/Pause button
                if ui.button(if running { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    if running {
                        self.sim.pause();
                    } else {
                        self.sim.play();
                    }
                }

                // Reset button
                if ui.button("⏮ Reset").clicked() {
                    self.reset_run();
                }

                // Single step while paused
                if ui.button("⏭ Step").clicked() && !self.sim.is_running() {
                    self.sim.step(self.scenario.schedule.dt, self.restitution);
                }

                ui.separator();

                // Speed control
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.speed_multiplier, 0.1..=10.0));

                ui.separator();

                // Restitution is live: it applies to the next contact
                ui.label("Restitution:");
                ui.add(egui::Slider::new(&mut self.restitution, 0.0..=1.0));

                ui.separator();

                ui.label(format!("t = {:.2} s", self.sim.world().elapsed));

                if let Some(path) = &self.scenario_path {
                    ui.separator();
                    ui.label(format!("watching {}", path.display()));
                }
            });
        });

        // Parameter panel; body edits apply while Idle and redefine the
        // initial conditions Reset restores
        egui::SidePanel::left("parameters")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Initial conditions");
                let idle = !self.sim.is_running();
                let mut changed = false;

                ui.add_enabled_ui(idle, |ui| {
                    let track_length = self.scenario.track.length;
                    changed |= body_editor(ui, "Left body", &mut self.scenario.left, track_length);
                    ui.separator();
                    changed |=
                        body_editor(ui, "Right body", &mut self.scenario.right, track_length);
                });
                if !idle {
                    ui.label(egui::RichText::new("Pause to edit").weak());
                }
                if changed {
                    self.reset_run();
                }

                ui.separator();
                ui.heading("Report");
                let latest = self
                    .sim
                    .history()
                    .latest()
                    .copied()
                    .unwrap_or(self.initial_sample);
                ui.label(
                    egui::RichText::new(report::collision_report(
                        &self.initial_sample,
                        &latest,
                        self.restitution,
                    ))
                    .monospace(),
                );
            });

        // Bottom panel for load errors
        if self.last_load_error.is_some() {
            egui::TopBottomPanel::bottom("errors").show(ctx, |ui| {
                ui.set_max_height(100.0);
                if let Some(ref error) = self.last_load_error {
                    ui.label(
                        egui::RichText::new(format!("Error: {}", error))
                            .color(egui::Color32::RED),
                    );
                }
            });
        }

        // Telemetry strip
        egui::TopBottomPanel::bottom("telemetry")
            .exact_height(160.0)
            .show(ctx, |ui| {
                self.draw_charts(ui);
            });

        // Main canvas area
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_track(ui);
        });

        // Simulation stepping; the engine clamps oversized deltas
        if self.sim.is_running() {
            let dt = ctx.input(|i| i.stable_dt) * self.speed_multiplier;
            self.sim.step(dt, self.restitution);
        }

        // Request repaint for animation
        if self.sim.is_running() {
            ctx.request_repaint();
        }
    }
}
