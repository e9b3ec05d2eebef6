//! Geodäsie-Primitive auf der Kugel: Distanz, Peilung, Zielpunkt, Bézier.
//!
//! Alle Funktionen sind rein und zustandslos. Degenerierte Eingaben
//! (Start == Ziel) werden lokal abgefangen statt als Fehler propagiert.

use glam::DVec2;

use super::GeoPoint;

/// Mittlerer Erdradius in Metern.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
/// Meter pro Grad Breite auf der Referenzkugel.
pub const METERS_PER_DEGREE_LAT: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
/// Unterhalb dieser Distanz gelten zwei Punkte als identisch.
pub const DEGENERATE_DISTANCE_M: f64 = 1e-6;

/// Großkreis-Distanz in Metern (Haversine).
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat_rad();
    let lat2 = b.lat_rad();
    let dlat = lat2 - lat1;
    let dlon = b.lon_rad() - a.lon_rad();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

/// Anfangs-Peilung in Grad [0, 360) entlang des Großkreises von `from` nach `to`.
///
/// Bei identischen Punkten ist die Richtung undefiniert; es wird 0° geliefert.
pub fn bearing(from: GeoPoint, to: GeoPoint) -> f64 {
    if distance(from, to) < DEGENERATE_DISTANCE_M {
        return 0.0;
    }
    let lat1 = from.lat_rad();
    let lat2 = to.lat_rad();
    let dlon = to.lon_rad() - from.lon_rad();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Zielpunkt nach `meters` Metern in Richtung `bearing_deg` (Vorwärts-Geodäte).
pub fn destination(from: GeoPoint, meters: f64, bearing_deg: f64) -> GeoPoint {
    let delta = meters / EARTH_RADIUS_M;
    let theta = bearing_deg.to_radians();
    let lat1 = from.lat_rad();
    let lon1 = from.lon_rad();

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    GeoPoint::new(lat2.to_degrees(), normalize_longitude(lon2.to_degrees()))
}

/// Großkreis-Mittelpunkt zwischen zwei Punkten.
pub fn midpoint(a: GeoPoint, b: GeoPoint) -> GeoPoint {
    let lat1 = a.lat_rad();
    let lat2 = b.lat_rad();
    let lon1 = a.lon_rad();
    let dlon = b.lon_rad() - lon1;

    let bx = lat2.cos() * dlon.cos();
    let by = lat2.cos() * dlon.sin();
    let lat = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by * by).sqrt());
    let lon = lon1 + by.atan2(lat1.cos() + bx);

    GeoPoint::new(lat.to_degrees(), normalize_longitude(lon.to_degrees()))
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·C + t²·P1, komponentenweise in Grad.
pub fn quadratic_bezier_point(p0: GeoPoint, control: GeoPoint, p1: GeoPoint, t: f64) -> GeoPoint {
    if t <= 0.0 {
        return p0;
    }
    if t >= 1.0 {
        return p1;
    }
    let inv = 1.0 - t;
    let a = inv * inv;
    let b = 2.0 * inv * t;
    let c = t * t;
    // Längengrade relativ zu P0 entfalten, sonst läuft die Kurve über ±180° um den Globus
    let control_lon = unwrap_longitude(control.longitude, p0.longitude);
    let p1_lon = unwrap_longitude(p1.longitude, p0.longitude);
    GeoPoint::new(
        a * p0.latitude + b * control.latitude + c * p1.latitude,
        wrap_longitude(a * p0.longitude + b * control_lon + c * p1_lon),
    )
}

/// Steuerpunkt einer quadratischen Bézier-Kurve zwischen `start` und `end`.
///
/// Der Mittelpunkt der Sehne wird senkrecht zur Sehnen-Peilung um
/// `curve_offset_m` verschoben, und zwar auf die Seite, auf der
/// `initial_bearing` (Richtung Grün) relativ zur Sehne liegt:
/// Differenz `initial_bearing - sehne` in (-180, 180]; `>= 0` → im
/// Uhrzeigersinn (+90°), sonst gegen den Uhrzeigersinn (-90°).
/// Liegt das Grün genau voraus, biegt die Kurve damit immer nach rechts.
pub fn quadratic_control_point(
    start: GeoPoint,
    end: GeoPoint,
    initial_bearing: f64,
    curve_offset_m: f64,
) -> GeoPoint {
    if distance(start, end) < DEGENERATE_DISTANCE_M {
        return start;
    }
    let chord_bearing = bearing(start, end);
    let side = signed_angle_delta(chord_bearing, initial_bearing);
    let perpendicular = if side >= 0.0 {
        chord_bearing + 90.0
    } else {
        chord_bearing - 90.0
    };
    destination(
        midpoint(start, end),
        curve_offset_m,
        normalize_degrees(perpendicular),
    )
}

/// Tastet die quadratische Kurve gleichmäßig in t ab (inkl. Start und Ende).
pub fn sample_quadratic_path(
    start: GeoPoint,
    control: GeoPoint,
    end: GeoPoint,
    samples: usize,
) -> Vec<GeoPoint> {
    let segments = samples.max(1);
    (0..=segments)
        .map(|i| quadratic_bezier_point(start, control, end, i as f64 / segments as f64))
        .collect()
}

/// Normalisiert einen Winkel in Grad auf [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid kann bei -0.0 + Rundung exakt 360.0 liefern
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

/// Vorzeichenbehaftete Differenz `to - from` in Grad, normalisiert auf (-180, 180].
pub fn signed_angle_delta(from: f64, to: f64) -> f64 {
    let d = normalize_degrees(to - from);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

fn normalize_longitude(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}

/// Längengrad so verschieben, dass er höchstens 180° von `reference` entfernt liegt.
///
/// Ergebnis kann außerhalb von [-180, 180] liegen (entfaltete Darstellung).
/// Innerhalb von 180° wird der Wert unverändert zurückgegeben.
pub fn unwrap_longitude(longitude: f64, reference: f64) -> f64 {
    if (longitude - reference).abs() <= 180.0 {
        longitude
    } else {
        reference + signed_angle_delta(reference, longitude)
    }
}

/// Bringt einen entfalteten Längengrad zurück nach [-180, 180].
pub fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        normalize_longitude(longitude)
    }
}

/// Lokales metrisches Bezugssystem (equirektangular) um einen Ursprung.
///
/// x = Meter nach Osten, y = Meter nach Norden. Für Loch-Größenordnungen
/// (wenige hundert Meter) liegt der Fehler weit unter der Darstellungsgenauigkeit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    origin: GeoPoint,
    meters_per_degree_lon: f64,
}

impl LocalFrame {
    /// Erstellt ein Bezugssystem mit Ursprung `origin`.
    pub fn new(origin: GeoPoint) -> Self {
        let meters_per_degree_lon = METERS_PER_DEGREE_LAT * origin.lat_rad().cos().max(1e-9);
        Self {
            origin,
            meters_per_degree_lon,
        }
    }

    /// Ursprung des Bezugssystems.
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// Geo-Punkt → lokale Meter (Ost, Nord).
    pub fn to_local(&self, point: GeoPoint) -> DVec2 {
        DVec2::new(
            (unwrap_longitude(point.longitude, self.origin.longitude) - self.origin.longitude)
                * self.meters_per_degree_lon,
            (point.latitude - self.origin.latitude) * METERS_PER_DEGREE_LAT,
        )
    }

    /// Lokale Meter (Ost, Nord) → Geo-Punkt.
    pub fn to_geo(&self, local: DVec2) -> GeoPoint {
        GeoPoint::new(
            self.origin.latitude + local.y / METERS_PER_DEGREE_LAT,
            wrap_longitude(self.origin.longitude + local.x / self.meters_per_degree_lon),
        )
    }
}
