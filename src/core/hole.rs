//! Platz-Daten: Löcher, Schläge und Schläger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Ersatzwert für fehlende Pin-Distanz (kein Putt).
pub const MISSING_PIN_DISTANCE_M: f64 = 11.0;
/// Schläge mit höchstens dieser Pin-Distanz gelten als Putt.
pub const PUTT_THRESHOLD_M: f64 = 10.0;

/// Ein Loch mit Tee, Grün, Nummer und Par. Unveränderlich.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub number: u8,
    pub par: u8,
    pub tee: GeoPoint,
    pub green: GeoPoint,
}

impl Hole {
    /// Erstellt ein neues Loch.
    pub fn new(number: u8, par: u8, tee: GeoPoint, green: GeoPoint) -> Self {
        Self {
            number,
            par,
            tee,
            green,
        }
    }

    /// Lochlänge Tee → Grün in Metern.
    pub fn length_m(&self) -> f64 {
        super::geodesy::distance(self.tee, self.green)
    }
}

/// Ein Golfplatz als geordnete Liste von Löchern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub holes: Vec<Hole>,
}

impl Course {
    /// Lädt einen Platz aus einer JSON-Datei.
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let course = Self::from_json(&content)?;
        log::info!(
            "Platz '{}' mit {} Löchern geladen aus: {}",
            course.name,
            course.holes.len(),
            path.display()
        );
        Ok(course)
    }

    /// Parst einen Platz aus JSON.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let course: Course = serde_json::from_str(content)?;
        if course.holes.is_empty() {
            anyhow::bail!("Platz '{}' enthält keine Löcher", course.name);
        }
        Ok(course)
    }

    /// Sucht ein Loch über seine Nummer.
    pub fn hole(&self, number: u8) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }
}

/// Ein erfasster Schlag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    /// Distanz zur Fahne in Metern (optional, ältere Daten haben keine)
    pub distance_to_pin: Option<f64>,
    /// Zeitpunkt der Erfassung
    pub timestamp: DateTime<Utc>,
    /// Ausgangspunkt des Schlags
    pub location: GeoPoint,
}

impl Shot {
    /// Erstellt einen Schlag mit aktuellem Zeitstempel.
    pub fn new(location: GeoPoint, distance_to_pin: Option<f64>) -> Self {
        Self {
            distance_to_pin,
            timestamp: Utc::now(),
            location,
        }
    }

    /// Pin-Distanz oder der Ersatzwert 11 m.
    pub fn pin_distance_or_default(&self) -> f64 {
        self.distance_to_pin.unwrap_or(MISSING_PIN_DISTANCE_M)
    }

    /// True wenn der Schlag als Putt zählt.
    pub fn is_putt(&self) -> bool {
        self.pin_distance_or_default() <= PUTT_THRESHOLD_M
    }
}

/// Schlüssel für gespeicherte Schlaglisten (Runde + Loch).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HoleKey {
    pub round_id: String,
    pub hole_number: u8,
}

impl HoleKey {
    pub fn new(round_id: impl Into<String>, hole_number: u8) -> Self {
        Self {
            round_id: round_id.into(),
            hole_number,
        }
    }
}

impl std::fmt::Display for HoleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.round_id, self.hole_number)
    }
}

/// Schläger mit typischer Carry-Distanz für die Schlag-Projektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Club {
    Driver,
    Wood3,
    Hybrid,
    Iron5,
    Iron7,
    Iron9,
    PitchingWedge,
    SandWedge,
}

impl Club {
    /// Alle Schläger in Taschen-Reihenfolge.
    pub const ALL: [Club; 8] = [
        Club::Driver,
        Club::Wood3,
        Club::Hybrid,
        Club::Iron5,
        Club::Iron7,
        Club::Iron9,
        Club::PitchingWedge,
        Club::SandWedge,
    ];

    /// Anzeigename.
    pub fn label(&self) -> &'static str {
        match self {
            Club::Driver => "Driver",
            Club::Wood3 => "3-Holz",
            Club::Hybrid => "Hybrid",
            Club::Iron5 => "Eisen 5",
            Club::Iron7 => "Eisen 7",
            Club::Iron9 => "Eisen 9",
            Club::PitchingWedge => "Pitching Wedge",
            Club::SandWedge => "Sand Wedge",
        }
    }

    /// Standard-Carry in Metern.
    pub fn default_carry_m(&self) -> f64 {
        match self {
            Club::Driver => 230.0,
            Club::Wood3 => 210.0,
            Club::Hybrid => 190.0,
            Club::Iron5 => 170.0,
            Club::Iron7 => 150.0,
            Club::Iron9 => 125.0,
            Club::PitchingWedge => 110.0,
            Club::SandWedge => 80.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_pin_distance_is_not_a_putt() {
        let shot = Shot::new(GeoPoint::new(0.0, 0.0), None);
        assert_eq!(shot.pin_distance_or_default(), MISSING_PIN_DISTANCE_M);
        assert!(!shot.is_putt());
    }

    #[test]
    fn short_pin_distance_is_a_putt() {
        assert!(Shot::new(GeoPoint::new(0.0, 0.0), Some(4.2)).is_putt());
        assert!(Shot::new(GeoPoint::new(0.0, 0.0), Some(10.0)).is_putt());
        assert!(!Shot::new(GeoPoint::new(0.0, 0.0), Some(10.5)).is_putt());
    }

    #[test]
    fn course_from_json_rejects_empty_hole_list() {
        let err = Course::from_json(r#"{"name":"Leer","holes":[]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn course_lookup_by_number() {
        let json = r#"{
            "name": "Test",
            "holes": [
                {"number": 1, "par": 4,
                 "tee": {"latitude": -37.8402, "longitude": 145.0999},
                 "green": {"latitude": -37.8384, "longitude": 145.1001}}
            ]
        }"#;
        let course = Course::from_json(json).expect("Platz sollte parsen");
        assert_eq!(course.hole(1).map(|h| h.par), Some(4));
        assert!(course.hole(2).is_none());
    }

    #[test]
    fn hole_key_display() {
        assert_eq!(HoleKey::new("r1", 7).to_string(), "r1/7");
    }
}
