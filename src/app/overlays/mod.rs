//! Overlay-Modell: gezeichnete Geometrie auf der Karte.
//!
//! Drei Varianten als geschlossenes Enum, damit Renderer und Hit-Test
//! exhaustiv matchen:
//! - `Straight` — Schläger-Projektion, per Drag drehbar
//! - `Curved` — Schlagpfad zwischen zwei Schlägen, unveränderlich
//! - `Measurement` — Distanzmessung, wird pro Tap komplett ersetzt

mod curved;
mod measurement;
mod straight;

pub use curved::CurvedShotOverlay;
pub use measurement::{DistanceMeasurementOverlay, MeasurementLeg};
pub use straight::StraightShotOverlay;

use crate::core::{GeoBounds, GeoPoint};

/// Handle eines Overlays innerhalb einer Loch-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

/// Verschiebbarer Anker eines Overlays samt Greif-Radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub point: GeoPoint,
    /// Greif-Radius in Metern (Streukreis)
    pub radius_m: f64,
}

/// Alle Overlay-Varianten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotOverlay {
    Straight(StraightShotOverlay),
    Curved(CurvedShotOverlay),
    Measurement(DistanceMeasurementOverlay),
}

impl ShotOverlay {
    /// Bereich, der die gesamte Darstellung des Overlays enthält.
    pub fn bounding_region(&self) -> GeoBounds {
        match self {
            ShotOverlay::Straight(o) => o.bounding_region(),
            ShotOverlay::Curved(o) => o.bounding_region(),
            ShotOverlay::Measurement(o) => o.bounding_region(),
        }
    }

    /// Verschiebbarer Anker (nur die gerade Projektion hat einen).
    pub fn draggable_anchor(&self) -> Option<DragAnchor> {
        match self {
            ShotOverlay::Straight(o) => Some(DragAnchor {
                point: o.end(),
                radius_m: o.dispersion_radius(),
            }),
            ShotOverlay::Curved(_) | ShotOverlay::Measurement(_) => None,
        }
    }

    /// Bewegt den verschiebbaren Anker. `false` wenn nichts verändert wurde.
    pub fn update(&mut self, new_point: GeoPoint) -> bool {
        match self {
            ShotOverlay::Straight(o) => o.update(new_point),
            ShotOverlay::Curved(_) | ShotOverlay::Measurement(_) => false,
        }
    }

    /// Geo-Punkte, die ein Renderer für die Darstellung braucht.
    pub fn geometry(&self) -> Vec<GeoPoint> {
        match self {
            ShotOverlay::Straight(o) => vec![o.start(), o.end()],
            ShotOverlay::Curved(o) => vec![o.start(), o.control(), o.end()],
            ShotOverlay::Measurement(o) => {
                let mut points = vec![o.probe()];
                for leg in o.legs() {
                    points.push(leg.anchor);
                    if let Some([_, rim]) = leg.line {
                        points.push(rim);
                    }
                }
                points
            }
        }
    }
}

/// Overlay mit seinem Handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayEntry {
    pub id: OverlayId,
    pub overlay: ShotOverlay,
}

/// Distanz-Label zwischen zwei aufeinanderfolgenden Schlägen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceLabel {
    pub point: GeoPoint,
    pub meters: f64,
}

impl DistanceLabel {
    /// Label-Text in ganzen Metern.
    pub fn text(&self) -> String {
        format!("{}m", self.meters.round() as i64)
    }
}
