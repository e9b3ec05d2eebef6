//! Application State — Loch-Session und Interaktions-Modus.

mod session;

pub use session::{CommandEffect, HoleSession};

/// Was ein Tap auf freie Kartenfläche auslöst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Nur ansehen: Taps löschen höchstens Annotationen
    #[default]
    Browse,
    /// Tap erfasst einen neuen Schlag
    ShotRecording,
    /// Tap baut eine Distanzmessung zum Tap-Punkt auf
    DistanceMeasurement,
}

impl InteractionMode {
    /// Anzeigename.
    pub fn label(&self) -> &'static str {
        match self {
            InteractionMode::Browse => "Ansehen",
            InteractionMode::ShotRecording => "Schläge erfassen",
            InteractionMode::DistanceMeasurement => "Distanz messen",
        }
    }
}
