//! Gekrümmter Schlagpfad zwischen zwei erfassten Schlägen.

use crate::core::geodesy::{
    bearing, distance, quadratic_bezier_point, quadratic_control_point, sample_quadratic_path,
};
use crate::core::{GeoBounds, GeoPoint};

/// Quadratische Bézier-Kurve zwischen zwei Schlagpositionen.
///
/// Der Steuerpunkt wird einmalig aus Start, Ende und der Richtung zum Grün
/// berechnet; danach ist das Overlay unveränderlich.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvedShotOverlay {
    start: GeoPoint,
    end: GeoPoint,
    control: GeoPoint,
}

impl CurvedShotOverlay {
    /// Erstellt den Pfad; Versatz = `offset_fraction` · Sehnenlänge Richtung Grün.
    pub fn new(start: GeoPoint, end: GeoPoint, green: GeoPoint, offset_fraction: f64) -> Self {
        let offset = distance(start, end) * offset_fraction;
        let control = quadratic_control_point(start, end, bearing(start, green), offset);
        Self {
            start,
            end,
            control,
        }
    }

    pub fn start(&self) -> GeoPoint {
        self.start
    }

    pub fn end(&self) -> GeoPoint {
        self.end
    }

    pub fn control(&self) -> GeoPoint {
        self.control
    }

    /// Kurvenpunkt bei t ∈ [0, 1].
    pub fn point_at(&self, t: f64) -> GeoPoint {
        quadratic_bezier_point(self.start, self.control, self.end, t)
    }

    /// Gleichmäßig in t abgetastete Kurve (inkl. Endpunkte).
    pub fn sample(&self, samples: usize) -> Vec<GeoPoint> {
        sample_quadratic_path(self.start, self.control, self.end, samples)
    }

    /// Sehnenlänge Start → Ende in Metern.
    pub fn chord_length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Bereich des Kontrollpolygons (enthält die Kurve vollständig).
    pub fn bounding_region(&self) -> GeoBounds {
        GeoBounds::around(self.start)
            .union(&GeoBounds::around(self.control))
            .union(&GeoBounds::around(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geodesy::{destination, midpoint};
    use approx::assert_relative_eq;

    const TEE: GeoPoint = GeoPoint::new(-37.8402, 145.0999);

    #[test]
    fn control_point_is_offset_by_fraction_of_chord() {
        let end = destination(TEE, 200.0, 0.0);
        let green = destination(TEE, 400.0, 20.0);
        let curve = CurvedShotOverlay::new(TEE, end, green, 0.15);

        assert_relative_eq!(
            distance(midpoint(TEE, end), curve.control()),
            30.0,
            epsilon = 1e-6
        );
        // Grün liegt rechts der Sehne → Steuerpunkt östlich
        assert!(curve.control().longitude > TEE.longitude);
    }

    #[test]
    fn repeated_construction_does_not_flip_side() {
        let end = destination(TEE, 150.0, 45.0);
        let green = destination(TEE, 300.0, 30.0);
        let a = CurvedShotOverlay::new(TEE, end, green, 0.15);
        let b = CurvedShotOverlay::new(TEE, end, green, 0.15);
        assert_eq!(a.control(), b.control());
    }

    #[test]
    fn samples_start_and_end_on_shots() {
        let end = destination(TEE, 120.0, 10.0);
        let curve = CurvedShotOverlay::new(TEE, end, end, 0.15);
        let points = curve.sample(8);

        assert_eq!(points.first().copied(), Some(TEE));
        assert_eq!(points.last().copied(), Some(end));
        for p in &points {
            assert!(curve.bounding_region().contains(*p));
        }
    }

    #[test]
    fn degenerate_curve_collapses_to_start() {
        let curve = CurvedShotOverlay::new(TEE, TEE, TEE, 0.15);
        assert_eq!(curve.control(), TEE);
        assert_eq!(curve.chord_length(), 0.0);
    }
}
