//! Gerade Schlag-Projektion mit Streukreis ("Schläger projizieren").

use crate::core::geodesy::{bearing, destination, distance, DEGENERATE_DISTANCE_M};
use crate::core::{GeoBounds, GeoPoint};

/// Gerader Schlagvektor fester Länge mit Streukreis am Ende.
///
/// Invariante: `end` liegt immer exakt `shot_distance` Meter von `start`
/// entfernt. Per Drag ändert sich nur die Richtung, nie die Länge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightShotOverlay {
    start: GeoPoint,
    end: GeoPoint,
    shot_distance: f64,
    dispersion_factor: f64,
}

impl StraightShotOverlay {
    /// Erstellt die Projektion in Richtung `bearing_deg`.
    pub fn new(start: GeoPoint, shot_distance: f64, bearing_deg: f64, dispersion_factor: f64) -> Self {
        let shot_distance = shot_distance.max(0.0);
        Self {
            start,
            end: destination(start, shot_distance, bearing_deg),
            shot_distance,
            dispersion_factor,
        }
    }

    /// Erstellt die Projektion in Richtung eines Zielpunkts (z.B. Grün).
    pub fn toward(
        start: GeoPoint,
        target: GeoPoint,
        shot_distance: f64,
        dispersion_factor: f64,
    ) -> Self {
        Self::new(start, shot_distance, bearing(start, target), dispersion_factor)
    }

    pub fn start(&self) -> GeoPoint {
        self.start
    }

    pub fn end(&self) -> GeoPoint {
        self.end
    }

    pub fn shot_distance(&self) -> f64 {
        self.shot_distance
    }

    pub fn dispersion_factor(&self) -> f64 {
        self.dispersion_factor
    }

    /// Aktuelle Richtung Start → Ende in Grad.
    pub fn bearing(&self) -> f64 {
        bearing(self.start, self.end)
    }

    /// Radius des Streukreises in Metern.
    pub fn dispersion_radius(&self) -> f64 {
        self.shot_distance * self.dispersion_factor
    }

    /// Richtet die Projektion auf `new_end` aus.
    ///
    /// Peilung start → new_end neu berechnen, dann Ende = Start + Schlagdistanz
    /// entlang dieser Peilung. Liegt `new_end` auf dem Start, bleibt das Ende
    /// unverändert (Rückgabe `false`).
    pub fn update(&mut self, new_end: GeoPoint) -> bool {
        if distance(self.start, new_end) < DEGENERATE_DISTANCE_M {
            return false;
        }
        self.end = destination(self.start, self.shot_distance, bearing(self.start, new_end));
        true
    }

    /// Bereich, der Linie und Streukreis vollständig enthält.
    pub fn bounding_region(&self) -> GeoBounds {
        let circle = GeoBounds::around(self.end).expanded_by_meters(self.dispersion_radius());
        GeoBounds::around(self.start).union(&circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TEE: GeoPoint = GeoPoint::new(-37.8402, 145.0999);
    const GREEN: GeoPoint = GeoPoint::new(-37.8384, 145.1001);

    #[test]
    fn dispersion_radius_is_distance_times_factor() {
        let overlay = StraightShotOverlay::toward(TEE, GREEN, 150.0, 0.1);
        assert_eq!(overlay.dispersion_radius(), 15.0);
    }

    #[test]
    fn end_keeps_shot_distance_after_drag() {
        let mut overlay = StraightShotOverlay::toward(TEE, GREEN, 150.0, 0.1);
        let far_east = destination(TEE, 400.0, 80.0);

        assert!(overlay.update(far_east));
        assert_relative_eq!(distance(TEE, overlay.end()), 150.0, epsilon = 1e-6);
        assert_relative_eq!(overlay.bearing(), 80.0, epsilon = 1e-6);
    }

    #[test]
    fn update_is_idempotent() {
        let target = destination(TEE, 90.0, 300.0);
        let mut once = StraightShotOverlay::toward(TEE, GREEN, 180.0, 0.1);
        once.update(target);
        let mut twice = once;
        twice.update(target);

        assert_eq!(once.end(), twice.end());
    }

    #[test]
    fn update_onto_start_keeps_end() {
        let mut overlay = StraightShotOverlay::toward(TEE, GREEN, 120.0, 0.1);
        let before = overlay.end();

        assert!(!overlay.update(TEE));
        assert_eq!(overlay.end(), before);
    }

    #[test]
    fn bounding_region_contains_dispersion_circle() {
        let overlay = StraightShotOverlay::new(TEE, 150.0, 0.0, 0.1);
        let bounds = overlay.bounding_region();

        assert!(bounds.contains(TEE));
        assert!(bounds.contains(destination(overlay.end(), 14.9, 0.0)));
        assert!(bounds.contains(destination(overlay.end(), 14.9, 90.0)));
        assert!(bounds.contains(destination(overlay.end(), 14.9, 270.0)));
    }
}
