//! Zwei-Segment-Distanzmessung mit kreisförmigem Hub am Messpunkt.

use crate::core::geodesy::{bearing, destination, distance, midpoint};
use crate::core::{GeoBounds, GeoPoint};

/// Ein Schenkel der Messung: fester Anker ↔ Messpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementLeg {
    /// Fester Anker (Standort/Tee bzw. Grün)
    pub anchor: GeoPoint,
    /// Gezeichnete Linie `[anker, hub-rand]`; `None` wenn der Anker im Hub liegt
    pub line: Option<[GeoPoint; 2]>,
    /// Position des Distanz-Labels (Mitte der gezeichneten Linie)
    pub label_point: GeoPoint,
    /// Volle Distanz Anker ↔ Messpunkt in Metern
    pub distance_m: f64,
}

impl MeasurementLeg {
    fn new(anchor: GeoPoint, probe: GeoPoint, hub_radius_m: f64) -> Self {
        let distance_m = distance(anchor, probe);
        let line = (distance_m > hub_radius_m).then(|| {
            let rim = destination(probe, hub_radius_m, bearing(probe, anchor));
            [anchor, rim]
        });
        let label_point = match line {
            Some([a, b]) => midpoint(a, b),
            None => probe,
        };
        Self {
            anchor,
            line,
            label_point,
            distance_m,
        }
    }

    /// Gerundete Distanz in ganzen Metern für das Label.
    pub fn label_meters(&self) -> i64 {
        self.distance_m.round() as i64
    }
}

/// Distanzmessung: erster Anker → Messpunkt → zweiter Anker (Grün).
///
/// Wird bei jedem Tap komplett neu berechnet, nie teilweise verändert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceMeasurementOverlay {
    probe: GeoPoint,
    hub_radius_m: f64,
    first: MeasurementLeg,
    second: MeasurementLeg,
}

impl DistanceMeasurementOverlay {
    /// Erstellt die Messung um den Messpunkt `probe`.
    pub fn new(
        probe: GeoPoint,
        first_anchor: GeoPoint,
        second_anchor: GeoPoint,
        hub_radius_m: f64,
    ) -> Self {
        let hub_radius_m = hub_radius_m.max(0.0);
        Self {
            probe,
            hub_radius_m,
            first: MeasurementLeg::new(first_anchor, probe, hub_radius_m),
            second: MeasurementLeg::new(second_anchor, probe, hub_radius_m),
        }
    }

    pub fn probe(&self) -> GeoPoint {
        self.probe
    }

    pub fn hub_radius_m(&self) -> f64 {
        self.hub_radius_m
    }

    /// Beide Schenkel (erster Anker, zweiter Anker).
    pub fn legs(&self) -> [&MeasurementLeg; 2] {
        [&self.first, &self.second]
    }

    /// Bereich über Anker und Hub-Kreis.
    pub fn bounding_region(&self) -> GeoBounds {
        GeoBounds::around(self.probe)
            .expanded_by_meters(self.hub_radius_m)
            .union(&GeoBounds::around(self.first.anchor))
            .union(&GeoBounds::around(self.second.anchor))
    }
}
