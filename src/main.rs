//! Golf Shot Tracker.
//!
//! Desktop-Viewer für Schlag-Erfassung, Schläger-Projektion und
//! Distanzmessung auf einem Golfloch. egui/eframe mit lokalem Karten-Host.

use std::path::PathBuf;

use eframe::egui;
use glam::Vec2;
use golf_shot_tracker::{
    app::{GestureController, GestureEvent, GesturePhase, HoleSession, SessionCommand},
    core::{location_channel, Course, HoleKey, JsonShotStore, LocationPublisher, ShotStore},
    render::{build_scene, LocalMapHost},
    ui, TrackerOptions,
};

/// Standard-Platzdatei, falls kein Pfad als Argument übergeben wird.
const DEFAULT_COURSE_PATH: &str = "assets/sample_course.json";

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Golf Shot Tracker v{} startet...", env!("CARGO_PKG_VERSION"));

        let course_path = std::env::args()
            .nth(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COURSE_PATH));
        let course = Course::load_from_file(&course_path)?;
        let config_path = TrackerOptions::config_path();
        let options = TrackerOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Vorlage zum Anpassen neben der Binary ablegen
            if let Err(e) = options.save_to_file(&config_path) {
                log::warn!("Standard-Optionen konnten nicht geschrieben werden: {:#}", e);
            }
        }
        let store = JsonShotStore::new(TrackerOptions::shots_path());

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Golf Shot Tracker"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Golf Shot Tracker",
            native_options,
            Box::new(|_cc| Ok(Box::new(TrackerApp::new(course, options, store)))),
        )
        .map_err(|e| anyhow::anyhow!("eframe beendet mit Fehler: {e}"))
    }
}

/// Haupt-Anwendungsstruktur
struct TrackerApp {
    course: Course,
    hole_index: usize,
    round_id: String,
    session: HoleSession,
    controller: GestureController,
    store: JsonShotStore,
    location: LocationPublisher,
    host: Option<LocalMapHost>,
    input: ui::MapInput,
    panel: ui::PanelState,
    status_message: Option<String>,
}

impl TrackerApp {
    fn new(course: Course, options: TrackerOptions, store: JsonShotStore) -> Self {
        let (location, reader) = location_channel();
        let round_id = chrono::Local::now().format("%Y-%m-%d").to_string();
        let hole = course.holes[0];
        let key = HoleKey::new(round_id.clone(), hole.number);
        let shots = load_shots_logged(&store, &key);

        Self {
            session: HoleSession::with_shots(hole, key, options, reader, shots),
            course,
            hole_index: 0,
            round_id,
            controller: GestureController::new(),
            store,
            location,
            host: None,
            input: ui::MapInput::new(),
            panel: ui::PanelState::default(),
            status_message: None,
        }
    }
}

/// Lädt Schläge; Fehler werden geloggt und als leere Liste behandelt.
fn load_shots_logged(store: &dyn ShotStore, key: &HoleKey) -> Vec<golf_shot_tracker::core::Shot> {
    match store.load_shots(key) {
        Ok(shots) => shots,
        Err(e) => {
            log::error!("Schläge für {} konnten nicht geladen werden: {:#}", key, e);
            Vec::new()
        }
    }
}

impl eframe::App for TrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::render_status_bar(
            ctx,
            &self.session,
            self.host.as_ref(),
            self.controller.state(),
            self.status_message.as_deref(),
        );

        let actions = ui::render_side_panel(
            ctx,
            &mut self.panel,
            &self.course,
            self.hole_index,
            &self.session,
        );
        for action in actions {
            self.handle_panel_action(action);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(28, 64, 32)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                let viewport_size = Vec2::new(rect.width(), rect.height());

                let host = self.host.get_or_insert_with(|| {
                    LocalMapHost::from_region_and_camera(
                        &self.session.region(),
                        &self.session.camera(),
                        viewport_size,
                    )
                });
                host.set_viewport_size(viewport_size);

                for event in self.input.collect_viewport_events(ui, &response) {
                    match event {
                        ui::ViewportEvent::Gesture(gesture) => {
                            let outcome =
                                self.controller
                                    .handle_gesture(&mut self.session, &mut *host, gesture);
                            if let GestureEvent::Pan {
                                phase: GesturePhase::Began,
                                ..
                            } = gesture
                            {
                                self.input.on_pan_began(outcome);
                            }
                        }
                        ui::ViewportEvent::CameraPan { delta } => host.pan_by_pixels(delta),
                        ui::ViewportEvent::CameraZoom { factor } => host.zoom_by(factor),
                    }
                }

                if self.session.location().is_tracking() {
                    self.location.publish(Some(host.center()));
                }

                if !host.take_invalidated().is_empty() {
                    ctx.request_repaint();
                }

                let painter = ui.painter_at(rect);
                ui::paint_hole(&painter, rect, host, self.session.hole());
                ui::paint_scene(&painter, rect, &build_scene(&self.session, host));
            });
    }
}

impl TrackerApp {
    fn handle_panel_action(&mut self, action: ui::PanelAction) {
        let command = match action {
            ui::PanelAction::SelectHole { index } => {
                self.change_hole(index);
                return;
            }
            ui::PanelAction::ResetCamera => {
                self.host = None;
                return;
            }
            ui::PanelAction::Save => {
                self.save_shots();
                return;
            }
            ui::PanelAction::SetTracking { enabled } => {
                self.location.set_tracking(enabled);
                return;
            }
            ui::PanelAction::SetMode { mode } => SessionCommand::SetMode { mode },
            ui::PanelAction::ProjectClub { club, carry_m } => {
                log::info!("Projektion mit {} ({:.0} m)", club.label(), carry_m);
                SessionCommand::ProjectClub { carry_m }
            }
            ui::PanelAction::ClearProjection => SessionCommand::ClearProjection,
            ui::PanelAction::ClearMeasurement => SessionCommand::ClearMeasurement,
            ui::PanelAction::TruncateShots { index } => SessionCommand::SelectShot { index },
        };

        match self.host.as_mut() {
            Some(host) => {
                self.controller
                    .handle_command(&mut self.session, host, command);
            }
            None => {
                self.session.apply(command);
            }
        }
    }

    fn change_hole(&mut self, index: usize) {
        let Some(hole) = self.course.holes.get(index).copied() else {
            return;
        };
        if self.session.is_dirty() {
            self.save_shots();
        }
        if let Some(ui::ViewportEvent::Gesture(cancel)) = self.input.cancel_drag() {
            if let Some(host) = self.host.as_mut() {
                self.controller
                    .handle_gesture(&mut self.session, host, cancel);
            }
        }

        let key = HoleKey::new(self.round_id.clone(), hole.number);
        let shots = load_shots_logged(&self.store, &key);
        self.session.change_hole(hole, key, shots);
        self.controller.reset();
        self.hole_index = index;
        self.host = None;
    }

    fn save_shots(&mut self) {
        match self.session.save(&mut self.store) {
            Ok(()) => {
                log::info!(
                    "{} Schläge gespeichert für {}",
                    self.session.stroke_count(),
                    self.session.key()
                );
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Speichern fehlgeschlagen: {:#}", e);
                self.status_message = Some(format!("Speichern fehlgeschlagen: {e}"));
            }
        }
    }
}
