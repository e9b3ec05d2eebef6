//! Geteilter "aktueller Standort" mit genau einem Schreiber.
//!
//! Der Plattform-Standortdienst hält den `LocationPublisher`; alle Leser
//! (Gesten-Controller, Session, UI) bekommen einen klonbaren
//! `LocationReader`. Letzter Schreiber gewinnt, kein Locking über Frames.

use std::sync::{Arc, RwLock};

use super::GeoPoint;

#[derive(Debug, Default, Clone, Copy)]
struct LocationSnapshot {
    location: Option<GeoPoint>,
    tracking: bool,
}

/// Schreib-Seite des Standorts. Bewusst nicht `Clone`.
#[derive(Debug)]
pub struct LocationPublisher {
    shared: Arc<RwLock<LocationSnapshot>>,
}

/// Lese-Seite des Standorts.
#[derive(Debug, Clone)]
pub struct LocationReader {
    shared: Arc<RwLock<LocationSnapshot>>,
}

/// Erstellt ein verbundenes Schreiber/Leser-Paar (Tracking aus, kein Standort).
pub fn location_channel() -> (LocationPublisher, LocationReader) {
    let shared = Arc::new(RwLock::new(LocationSnapshot::default()));
    (
        LocationPublisher {
            shared: shared.clone(),
        },
        LocationReader { shared },
    )
}

impl LocationPublisher {
    /// Veröffentlicht einen neuen Standort (oder `None` bei Signalverlust).
    pub fn publish(&self, location: Option<GeoPoint>) {
        match self.shared.write() {
            Ok(mut snapshot) => snapshot.location = location,
            Err(_) => log::error!("Standort-Lock vergiftet, Update verworfen"),
        }
    }

    /// Schaltet das Tracking ein/aus. Beim Ausschalten wird der Standort verworfen.
    pub fn set_tracking(&self, enabled: bool) {
        match self.shared.write() {
            Ok(mut snapshot) => {
                snapshot.tracking = enabled;
                if !enabled {
                    snapshot.location = None;
                }
                log::info!("Standort-Tracking {}", if enabled { "an" } else { "aus" });
            }
            Err(_) => log::error!("Standort-Lock vergiftet, Tracking unverändert"),
        }
    }
}

impl LocationReader {
    fn snapshot(&self) -> LocationSnapshot {
        self.shared.read().map(|s| *s).unwrap_or_default()
    }

    /// Aktueller Standort, nur wenn Tracking aktiv ist.
    pub fn current(&self) -> Option<GeoPoint> {
        let snapshot = self.snapshot();
        if snapshot.tracking {
            snapshot.location
        } else {
            None
        }
    }

    /// True wenn Tracking eingeschaltet ist.
    pub fn is_tracking(&self) -> bool {
        self.snapshot().tracking
    }
}
