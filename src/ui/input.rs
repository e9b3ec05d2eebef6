//! Viewport-Input: egui-Response → Karten-Gesten.
//!
//! Mausbedienung am Desktop:
//! - Linksklick = Tap
//! - Rechtsklick bzw. langes Touch-Drücken = Long-Press
//! - Linkes Ziehen = Pan (Anker-Drag oder Kamera-Pan, entscheidet der Controller)
//! - Scrollen = Zoom

use glam::Vec2;

use crate::app::{GestureEvent, GestureOutcome, GesturePhase};

/// Zoom-Faktor pro Scroll-Schritt.
const SCROLL_ZOOM_STEP: f64 = 1.1;

/// Vom Viewport gesammeltes Ereignis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// Geste für den Gesten-Controller
    Gesture(GestureEvent),
    /// Karte um Pixel-Delta verschieben
    CameraPan { delta: Vec2 },
    /// Karte zoomen
    CameraZoom { factor: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PrimaryDragMode {
    #[default]
    None,
    /// Pan wird an den Controller gereicht (Anker-Drag läuft)
    AnchorDrag,
    /// Pan verschiebt die Karte
    CameraPan,
}

/// Input-Zustand des Karten-Viewports.
#[derive(Default)]
pub struct MapInput {
    primary_drag_mode: PrimaryDragMode,
}

impl MapInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<ViewportEvent> {
        let mut events = Vec::new();
        let origin = response.rect.min;
        let to_local = |pos: egui::Pos2| Vec2::new(pos.x - origin.x, pos.y - origin.y);

        if response.drag_started_by(egui::PointerButton::Primary) {
            let press = ui
                .input(|i| i.pointer.press_origin())
                .or(response.interact_pointer_pos());
            if let Some(pos) = press {
                events.push(ViewportEvent::Gesture(GestureEvent::Pan {
                    screen: to_local(pos),
                    phase: GesturePhase::Began,
                }));
            }
        } else if response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::AnchorDrag => {
                    if let Some(pos) = response.interact_pointer_pos() {
                        events.push(ViewportEvent::Gesture(GestureEvent::Pan {
                            screen: to_local(pos),
                            phase: GesturePhase::Changed,
                        }));
                    }
                }
                PrimaryDragMode::CameraPan => {
                    let delta = response.drag_delta();
                    if delta != egui::Vec2::ZERO {
                        events.push(ViewportEvent::CameraPan {
                            delta: Vec2::new(delta.x, delta.y),
                        });
                    }
                }
                PrimaryDragMode::None => {}
            }
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) {
            if self.primary_drag_mode == PrimaryDragMode::AnchorDrag {
                let pos = response.interact_pointer_pos().map(to_local).unwrap_or_default();
                events.push(ViewportEvent::Gesture(GestureEvent::Pan {
                    screen: pos,
                    phase: GesturePhase::Ended,
                }));
            }
            self.primary_drag_mode = PrimaryDragMode::None;
        }

        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(ViewportEvent::Gesture(GestureEvent::Tap {
                    screen: to_local(pos),
                }));
            }
        }

        if response.secondary_clicked() || response.long_touched() {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(ViewportEvent::Gesture(GestureEvent::LongPress {
                    screen: to_local(pos),
                    phase: GesturePhase::Began,
                }));
            }
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                let factor = if scroll > 0.0 {
                    SCROLL_ZOOM_STEP
                } else {
                    1.0 / SCROLL_ZOOM_STEP
                };
                events.push(ViewportEvent::CameraZoom { factor });
            }
        }

        events
    }

    /// Übernimmt die Controller-Entscheidung für einen begonnenen Pan.
    pub fn on_pan_began(&mut self, outcome: GestureOutcome) {
        self.primary_drag_mode = match outcome {
            GestureOutcome::Handled => PrimaryDragMode::AnchorDrag,
            GestureOutcome::PassThrough => PrimaryDragMode::CameraPan,
            GestureOutcome::Ignored => PrimaryDragMode::None,
        };
    }

    /// Bricht einen laufenden Drag ab (z.B. Lochwechsel).
    pub fn cancel_drag(&mut self) -> Option<ViewportEvent> {
        let was_anchor_drag = self.primary_drag_mode == PrimaryDragMode::AnchorDrag;
        self.primary_drag_mode = PrimaryDragMode::None;
        was_anchor_drag.then_some(ViewportEvent::Gesture(GestureEvent::Pan {
            screen: Vec2::ZERO,
            phase: GesturePhase::Cancelled,
        }))
    }
}
