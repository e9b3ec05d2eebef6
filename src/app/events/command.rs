use crate::app::overlays::OverlayId;
use crate::app::state::InteractionMode;
use crate::core::{AnnotationId, GeoPoint};

/// Mutierende Commands auf einer Loch-Session (Geo-Koordinaten, keine Pixel).
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Mess-Pin an einer Position setzen (Long-Press)
    PlacePin { point: GeoPoint },
    /// Mess-Pin entfernen (Tap auf Pin)
    RemovePin { id: AnnotationId },
    /// Schlag auswählen → Schlagliste ab diesem Index kürzen
    SelectShot { index: usize },
    /// Neuen Schlag erfassen (Tap im Erfassungs-Modus)
    RecordShot { point: GeoPoint },
    /// Distanzmessung zum Punkt neu aufbauen (Tap im Mess-Modus)
    MeasureTo { point: GeoPoint },
    /// Projektions-Anker auf Position ziehen (Pan)
    DragProjection { overlay: OverlayId, point: GeoPoint },
    /// Schläger-Projektion mit Carry-Distanz starten
    ProjectClub { carry_m: f64 },
    /// Schläger-Projektion verwerfen (Sheet geschlossen)
    ClearProjection,
    /// Distanzmessung verwerfen
    ClearMeasurement,
    /// Interaktions-Modus wechseln
    SetMode { mode: InteractionMode },
}
