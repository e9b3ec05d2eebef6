//! Punkt-Annotationen auf der Karte (Schlag-Marker und Mess-Pins).

use super::GeoPoint;

/// Stabile ID einer Annotation innerhalb einer Loch-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnotationId(pub u64);

/// Art einer Punkt-Annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    /// Marker eines erfassten Schlags (Index in der Schlagliste)
    ShotMarker { index: usize },
    /// Per Long-Press gesetzter Mess-Pin
    MeasurementPin,
}

/// Punkt-Annotation (Pin/Marker), im Gegensatz zu gezeichneten Overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    pub id: AnnotationId,
    pub kind: AnnotationKind,
    pub location: GeoPoint,
}
