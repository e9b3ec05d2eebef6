//! Seitenpanel: Loch-Navigation, Modus, Schläger-Projektion, Speichern.

use crate::app::{HoleSession, InteractionMode};
use crate::core::{Club, Course};

/// Vom Panel ausgelöste Aktion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    /// Zum Loch mit Index in `Course::holes` wechseln
    SelectHole { index: usize },
    SetMode { mode: InteractionMode },
    /// Projektion mit Carry-Distanz starten
    ProjectClub { club: Club, carry_m: f64 },
    ClearProjection,
    ClearMeasurement,
    /// Schläge ab Index entfernen
    TruncateShots { index: usize },
    /// Standort-Tracking umschalten
    SetTracking { enabled: bool },
    /// Kamera auf das Loch zurücksetzen
    ResetCamera,
    Save,
}

/// Zustand der Panel-Eingaben zwischen Frames.
pub struct PanelState {
    pub club: Club,
    pub carry_m: f64,
}

impl Default for PanelState {
    fn default() -> Self {
        let club = Club::Iron7;
        Self {
            club,
            carry_m: club.default_carry_m(),
        }
    }
}

/// Rendert das Seitenpanel und gibt erzeugte Aktionen zurück.
pub fn render_side_panel(
    ctx: &egui::Context,
    panel: &mut PanelState,
    course: &Course,
    hole_index: usize,
    session: &HoleSession,
) -> Vec<PanelAction> {
    let mut actions = Vec::new();

    egui::SidePanel::left("tracker_panel")
        .resizable(false)
        .default_width(230.0)
        .show(ctx, |ui| {
            ui.heading(&course.name);
            ui.separator();

            // ── Loch ────────────────────────────────────────────
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(hole_index > 0, egui::Button::new("◀"))
                    .clicked()
                {
                    actions.push(PanelAction::SelectHole {
                        index: hole_index - 1,
                    });
                }
                let hole = session.hole();
                ui.label(format!("Loch {} · Par {}", hole.number, hole.par));
                if ui
                    .add_enabled(hole_index + 1 < course.holes.len(), egui::Button::new("▶"))
                    .clicked()
                {
                    actions.push(PanelAction::SelectHole {
                        index: hole_index + 1,
                    });
                }
            });
            ui.label(format!("Länge: {:.0} m", session.hole().length_m()));
            if ui.button("Kamera zurücksetzen").clicked() {
                actions.push(PanelAction::ResetCamera);
            }
            ui.separator();

            // ── Modus ───────────────────────────────────────────
            ui.label("Tap auf der Karte:");
            for mode in [
                InteractionMode::Browse,
                InteractionMode::ShotRecording,
                InteractionMode::DistanceMeasurement,
            ] {
                if ui
                    .radio(session.mode() == mode, mode.label())
                    .clicked()
                {
                    actions.push(PanelAction::SetMode { mode });
                }
            }
            ui.separator();

            // ── Schläger-Projektion ─────────────────────────────
            ui.label("Schläger projizieren:");
            egui::ComboBox::from_id_salt("club_select")
                .selected_text(panel.club.label())
                .show_ui(ui, |ui| {
                    for club in Club::ALL {
                        if ui
                            .selectable_value(&mut panel.club, club, club.label())
                            .clicked()
                        {
                            panel.carry_m = club.default_carry_m();
                        }
                    }
                });
            ui.add(
                egui::Slider::new(&mut panel.carry_m, 20.0..=300.0)
                    .suffix(" m")
                    .text("Carry"),
            );
            ui.horizontal(|ui| {
                if ui.button("Projizieren").clicked() {
                    actions.push(PanelAction::ProjectClub {
                        club: panel.club,
                        carry_m: panel.carry_m,
                    });
                }
                if ui
                    .add_enabled(session.projection().is_some(), egui::Button::new("Verwerfen"))
                    .clicked()
                {
                    actions.push(PanelAction::ClearProjection);
                }
            });
            if ui
                .add_enabled(
                    session.measurement().is_some(),
                    egui::Button::new("Messung entfernen"),
                )
                .clicked()
            {
                actions.push(PanelAction::ClearMeasurement);
            }
            ui.separator();

            // ── Schläge ─────────────────────────────────────────
            ui.label(format!(
                "Schläge: {} / {} · Putts: {}",
                session.stroke_count(),
                session.options().max_shots_per_hole,
                session.putt_count()
            ));
            egui::ScrollArea::vertical()
                .max_height(180.0)
                .show(ui, |ui| {
                    for (index, shot) in session.shots().iter().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(format!(
                                "{}. {} · {:.0} m zur Fahne",
                                index + 1,
                                shot.timestamp.format("%H:%M:%S"),
                                shot.pin_distance_or_default()
                            ));
                            if ui
                                .small_button("✂")
                                .on_hover_text("Ab hier löschen")
                                .clicked()
                            {
                                actions.push(PanelAction::TruncateShots { index });
                            }
                        });
                    }
                });
            ui.separator();

            // ── Standort & Speichern ────────────────────────────
            let mut tracking = session.location().is_tracking();
            if ui
                .checkbox(&mut tracking, "Standort (Kartenmitte)")
                .changed()
            {
                actions.push(PanelAction::SetTracking { enabled: tracking });
            }
            let save_label = if session.is_dirty() {
                "Speichern *"
            } else {
                "Speichern"
            };
            if ui.button(save_label).clicked() {
                actions.push(PanelAction::Save);
            }
        });

    actions
}
