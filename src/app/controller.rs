//! Gesten-Controller: übersetzt Karten-Gesten in Session-Commands.
//!
//! Zustandsmaschine mit zwei Zuständen. Im Leerlauf entscheiden Tap,
//! Long-Press und Pan-Beginn, was passiert; während eines Anker-Drags
//! gehen alle Pan-Updates an das gegriffene Overlay, Taps und
//! Long-Presses werden ignoriert.

use super::events::{GestureEvent, GestureOutcome, GesturePhase};
use super::overlays::OverlayId;
use super::state::{CommandEffect, InteractionMode};
use super::{CommandLog, HoleSession, SessionCommand};
use crate::core::AnnotationKind;
use crate::render::{hit_test, MapHost};
use glam::Vec2;

/// Zustand des Gesten-Controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Anker des Overlays `overlay` wird gezogen
    DraggingOverlayAnchor { overlay: OverlayId },
}

/// Orchestriert Gesten und Commands auf einer Loch-Session.
#[derive(Default)]
pub struct GestureController {
    state: GestureState,
    command_log: CommandLog,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Alle ausgeführten Commands.
    pub fn command_log(&self) -> &CommandLog {
        &self.command_log
    }

    /// Verwirft Gesten-Zustand und Log (Lochwechsel).
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.command_log.clear();
    }

    /// Verarbeitet eine Geste vom Karten-Host.
    pub fn handle_gesture(
        &mut self,
        session: &mut HoleSession,
        host: &mut dyn MapHost,
        event: GestureEvent,
    ) -> GestureOutcome {
        match (self.state, event) {
            (GestureState::Idle, GestureEvent::LongPress { screen, phase }) => {
                if phase != GesturePhase::Began {
                    return GestureOutcome::Ignored;
                }
                let point = host.unproject(screen);
                self.handle_command(session, host, SessionCommand::PlacePin { point });
                GestureOutcome::Handled
            }
            (GestureState::Idle, GestureEvent::Tap { screen }) => self.on_tap(session, host, screen),
            (GestureState::Idle, GestureEvent::Pan { screen, phase }) => {
                if phase == GesturePhase::Began {
                    self.on_pan_began(session, host, screen)
                } else {
                    GestureOutcome::PassThrough
                }
            }
            (GestureState::DraggingOverlayAnchor { overlay }, GestureEvent::Pan { screen, phase }) => {
                self.on_drag(session, host, overlay, screen, phase)
            }
            (GestureState::DraggingOverlayAnchor { .. }, _) => GestureOutcome::Ignored,
        }
    }

    /// Führt einen Command aus, loggt ihn und invalidiert den betroffenen Bereich.
    pub fn handle_command(
        &mut self,
        session: &mut HoleSession,
        host: &mut dyn MapHost,
        command: SessionCommand,
    ) -> CommandEffect {
        self.command_log.record(&command);
        let effect = session.apply(command);
        if let Some(region) = effect.dirty_region {
            host.invalidate(region);
        }
        effect
    }

    fn on_tap(
        &mut self,
        session: &mut HoleSession,
        host: &mut dyn MapHost,
        screen: Vec2,
    ) -> GestureOutcome {
        let point = host.unproject(screen);
        let pick_radius_m =
            session.options().annotation_pick_radius_px as f64 * host.meters_per_pixel(point.latitude);

        let command = match session.pick_annotation(point, pick_radius_m) {
            Some(annotation) => match annotation.kind {
                AnnotationKind::ShotMarker { index } => SessionCommand::SelectShot { index },
                AnnotationKind::MeasurementPin => SessionCommand::RemovePin { id: annotation.id },
            },
            None => match session.mode() {
                InteractionMode::ShotRecording => SessionCommand::RecordShot { point },
                InteractionMode::DistanceMeasurement => SessionCommand::MeasureTo { point },
                InteractionMode::Browse => return GestureOutcome::Ignored,
            },
        };

        if self.handle_command(session, host, command).changed() {
            GestureOutcome::Handled
        } else {
            GestureOutcome::Ignored
        }
    }

    fn on_pan_began(
        &mut self,
        session: &HoleSession,
        host: &dyn MapHost,
        screen: Vec2,
    ) -> GestureOutcome {
        let Some(entry) = session.active_overlay() else {
            return GestureOutcome::PassThrough;
        };
        if !hit_test(Some(&entry.overlay), screen, host) {
            return GestureOutcome::PassThrough;
        }

        log::debug!("Anker-Drag gestartet ({:?})", entry.id);
        self.state = GestureState::DraggingOverlayAnchor { overlay: entry.id };
        GestureOutcome::Handled
    }

    fn on_drag(
        &mut self,
        session: &mut HoleSession,
        host: &mut dyn MapHost,
        overlay: OverlayId,
        screen: Vec2,
        phase: GesturePhase,
    ) -> GestureOutcome {
        match phase {
            GesturePhase::Began | GesturePhase::Changed => {
                if session.overlay(overlay).is_none() {
                    log::debug!("Gezogenes Overlay {:?} existiert nicht mehr", overlay);
                    self.state = GestureState::Idle;
                    return GestureOutcome::Ignored;
                }
                let point = host.unproject(screen);
                self.handle_command(session, host, SessionCommand::DragProjection { overlay, point });
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                if let Some(shape) = session.overlay(overlay) {
                    host.invalidate(shape.bounding_region());
                }
                log::debug!("Anker-Drag beendet ({:?})", overlay);
                self.state = GestureState::Idle;
            }
        }
        GestureOutcome::Handled
    }
}
