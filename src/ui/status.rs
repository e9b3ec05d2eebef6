//! Status-Bar am unteren Bildschirmrand.

use crate::app::{GestureState, HoleSession};
use crate::render::{LocalMapHost, MapHost};

/// Rendert die Status-Bar
pub fn render_status_bar(
    ctx: &egui::Context,
    session: &HoleSession,
    host: Option<&LocalMapHost>,
    gesture: GestureState,
    status_message: Option<&str>,
) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Loch {} ({}) | Schläge: {} | Putts: {}",
                session.hole().number,
                session.key(),
                session.stroke_count(),
                session.putt_count()
            ));

            ui.separator();
            ui.label(format!("Modus: {}", session.mode().label()));

            if let Some(host) = host {
                ui.separator();
                let center = host.center();
                ui.label(format!(
                    "Zoom: {:.2}x | Zentrum: ({:.5}, {:.5}) | Blick: {:.0}°",
                    host.zoom_scale(),
                    center.latitude,
                    center.longitude,
                    host.heading()
                ));
            }

            if let GestureState::DraggingOverlayAnchor { .. } = gesture {
                ui.separator();
                ui.label("Projektion wird ausgerichtet");
            }

            if let Some(location) = session.location().current() {
                ui.separator();
                ui.label(format!(
                    "Standort: ({:.5}, {:.5})",
                    location.latitude, location.longitude
                ));
            }

            if let Some(msg) = status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
