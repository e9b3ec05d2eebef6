//! Geographische Koordinaten (WGS84) und achsenparallele Geo-Bounds.

use serde::{Deserialize, Serialize};

use super::geodesy::{unwrap_longitude, METERS_PER_DEGREE_LAT};

/// Geographischer Punkt in Grad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad in Grad (Nord positiv)
    pub latitude: f64,
    /// Längengrad in Grad (Ost positiv)
    pub longitude: f64,
}

impl GeoPoint {
    /// Erstellt einen neuen Punkt aus Breiten- und Längengrad.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Breitengrad in Radiant.
    pub fn lat_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Längengrad in Radiant.
    pub fn lon_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}

/// Achsenparalleler Bereich in Grad (min/max Breite und Länge).
///
/// Wird für Invalidierung und Sichtbarkeits-Culling der Overlays genutzt.
/// Längengrade werden relativ zueinander entfaltet gespeichert: ein Loch
/// über der Datumsgrenze hat z. B. `min_lon = 179.99`, `max_lon = 180.01`.
/// Vergleiche verschieben die Gegenseite um Vielfache von 360°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Bereich ohne Ausdehnung um genau einen Punkt.
    pub fn around(point: GeoPoint) -> Self {
        Self {
            min_lat: point.latitude,
            min_lon: point.longitude,
            max_lat: point.latitude,
            max_lon: point.longitude,
        }
    }

    /// Kleinster Bereich, der alle übergebenen Punkte umschließt.
    ///
    /// Gibt `None` zurück, wenn keine Punkte übergeben werden.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::around(first);
        for p in iter {
            let lon = unwrap_longitude(p.longitude, first.longitude);
            bounds.min_lat = bounds.min_lat.min(p.latitude);
            bounds.min_lon = bounds.min_lon.min(lon);
            bounds.max_lat = bounds.max_lat.max(p.latitude);
            bounds.max_lon = bounds.max_lon.max(lon);
        }
        Some(bounds)
    }

    /// Vereinigung zweier Bereiche.
    pub fn union(&self, other: &GeoBounds) -> GeoBounds {
        let other = other.aligned_to(self);
        GeoBounds {
            min_lat: self.min_lat.min(other.min_lat),
            min_lon: self.min_lon.min(other.min_lon),
            max_lat: self.max_lat.max(other.max_lat),
            max_lon: self.max_lon.max(other.max_lon),
        }
    }

    /// True wenn sich die Bereiche überlappen (Ränder zählen als Überlappung).
    pub fn intersects(&self, other: &GeoBounds) -> bool {
        let other = other.aligned_to(self);
        self.min_lat <= other.max_lat
            && self.max_lat >= other.min_lat
            && self.min_lon <= other.max_lon
            && self.max_lon >= other.min_lon
    }

    /// True wenn der Punkt im Bereich liegt.
    pub fn contains(&self, point: GeoPoint) -> bool {
        let lon = unwrap_longitude(point.longitude, self.center_lon());
        point.latitude >= self.min_lat
            && point.latitude <= self.max_lat
            && lon >= self.min_lon
            && lon <= self.max_lon
    }

    /// Erweitert den Bereich in alle Richtungen um `meters`.
    ///
    /// Die Längengrad-Erweiterung nutzt den Breitengrad mit dem größten
    /// Betrag, damit der Kreis auch am polnahen Rand vollständig drin liegt.
    pub fn expanded_by_meters(&self, meters: f64) -> GeoBounds {
        let dlat = meters / METERS_PER_DEGREE_LAT;
        let widest_lat = self.min_lat.abs().max(self.max_lat.abs()).min(89.0);
        let dlon = meters / (METERS_PER_DEGREE_LAT * widest_lat.to_radians().cos());
        GeoBounds {
            min_lat: self.min_lat - dlat,
            min_lon: self.min_lon - dlon,
            max_lat: self.max_lat + dlat,
            max_lon: self.max_lon + dlon,
        }
    }

    fn center_lon(&self) -> f64 {
        (self.min_lon + self.max_lon) * 0.5
    }

    /// Verschiebt die Längengrade um ein Vielfaches von 360° neben `reference`.
    fn aligned_to(&self, reference: &GeoBounds) -> GeoBounds {
        let center = self.center_lon();
        let shift = unwrap_longitude(center, reference.center_lon()) - center;
        if shift == 0.0 {
            return *self;
        }
        GeoBounds {
            min_lon: self.min_lon + shift,
            max_lon: self.max_lon + shift,
            ..*self
        }
    }
}
