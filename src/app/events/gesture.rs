use glam::Vec2;

/// Phase einer kontinuierlichen Geste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// Rohe Gesten vom Karten-Host, Position in Screen-Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Langes Drücken (nur `Began` löst etwas aus)
    LongPress { screen: Vec2, phase: GesturePhase },
    /// Ziehen; `screen` ist bei `Began` der Aufsetzpunkt
    Pan { screen: Vec2, phase: GesturePhase },
    /// Einfacher Tap
    Tap { screen: Vec2 },
}

/// Ergebnis der Gesten-Verarbeitung für den Host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Geste wurde verarbeitet, Host soll sie nicht weiterreichen
    Handled,
    /// Geste betrifft kein Overlay, Host verschiebt die Karte
    PassThrough,
    /// Geste hatte im aktuellen Zustand keine Wirkung
    Ignored,
}
