//! Overlay-Szene als expliziter Übergabevertrag zwischen Renderer und Host.
//!
//! Lebt im shared-Modul, da `render` sie baut und der Karten-Host
//! (egui oder Test-Host) sie konsumiert. Alle Koordinaten in Screen-Pixeln.

use glam::Vec2;

/// Ein Zeichen-Primitive in Screen-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// Gerade Linie
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: [f32; 4],
    },
    /// Offener Linienzug (z.B. abgetastete Bézier-Kurve)
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: [f32; 4],
    },
    /// Kreis-Umriss
    Circle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: [f32; 4],
    },
    /// Gefüllter Punkt-Marker
    Marker {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Text-Label, zentriert auf `position`
    Label {
        position: Vec2,
        text: String,
        size: f32,
        color: [f32; 4],
    },
}

/// Read-only Zeichendaten für einen Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayScene {
    /// Primitives in Zeichenreihenfolge (später = oben)
    pub primitives: Vec<DrawPrimitive>,
}

impl OverlayScene {
    /// Gibt zurück, ob etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Hängt Primitives an.
    pub fn extend(&mut self, primitives: impl IntoIterator<Item = DrawPrimitive>) {
        self.primitives.extend(primitives);
    }

    /// Alle Labels der Szene (Reihenfolge wie gezeichnet).
    pub fn labels(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
