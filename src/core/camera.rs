//! Region- und Kamera-Fit für ein Loch (Tee → Grün "das Fairway hinauf").

use super::geodesy::{bearing, distance, midpoint};
use super::GeoPoint;

/// Basis-Span in Grad für sehr kurze Löcher.
pub const REGION_BASE_SPAN: f64 = 0.0005;
/// Maximaler Span in Grad (weiter wird nie herausgezoomt).
pub const REGION_MAX_SPAN: f64 = 0.003;
/// Maximale Kamerahöhe über Grund in Metern.
pub const CAMERA_MAX_DISTANCE_M: f64 = 1100.0;
/// Kamerahöhe pro Meter Lochlänge.
pub const CAMERA_DISTANCE_FACTOR: f64 = 2.7;

/// Darzustellender Kartenbereich (Zentrum + Span in Grad).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    /// Zentrum des Bereichs
    pub center: GeoPoint,
    /// Breite und Höhe des Bereichs in Grad
    pub span: f64,
}

/// Kamera über dem Loch, Blick vom Tee zum Grün.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleCamera {
    /// Blickzentrum
    pub center: GeoPoint,
    /// Abstand der Kamera über Grund in Metern
    pub distance_from_ground: f64,
    /// Kompass-Richtung der Kamera in Grad (Tee → Grün zeigt nach oben)
    pub heading: f64,
    /// Neigung in Grad (immer 0 = Draufsicht)
    pub pitch: f64,
}

/// Berechnet den Kartenbereich, der Tee und Grün einrahmt.
///
/// `span = clamp(base · distanz / 100, base, max)`: wächst linear mit der
/// Lochlänge, aber nie außerhalb von `[REGION_BASE_SPAN, REGION_MAX_SPAN]`.
pub fn fit_region(tee: GeoPoint, green: GeoPoint) -> MapRegion {
    let hole_distance = distance(tee, green);
    let span = (REGION_BASE_SPAN * hole_distance / 100.0).clamp(REGION_BASE_SPAN, REGION_MAX_SPAN);

    MapRegion {
        center: midpoint(tee, green),
        span,
    }
}

/// Berechnet die Kamera für ein Loch.
pub fn set_camera(tee: GeoPoint, green: GeoPoint) -> HoleCamera {
    let hole_distance = distance(tee, green);

    HoleCamera {
        center: midpoint(tee, green),
        distance_from_ground: (hole_distance * CAMERA_DISTANCE_FACTOR).min(CAMERA_MAX_DISTANCE_M),
        heading: bearing(tee, green),
        pitch: 0.0,
    }
}
