//! Application-Layer: Gesten-Controller, Session, Events und Overlays.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod overlays;
/// Loch-Session und Interaktions-Modus
pub mod state;

pub use command_log::CommandLog;
pub use controller::{GestureController, GestureState};
pub use events::{GestureEvent, GestureOutcome, GesturePhase, SessionCommand};
pub use overlays::{OverlayEntry, OverlayId, ShotOverlay};
pub use state::{CommandEffect, HoleSession, InteractionMode};
