//! Core-Domänentypen: Geo-Punkte, Geodäsie, Loch-Kamera, Schläge, Spatial-Index.

pub mod annotation;
pub mod camera;
/// Geodäsie-Primitive (Distanz, Peilung, Zielpunkt, Bézier)
///
/// Reine Funktionen ohne Zustand; Grundlage für Overlays, Renderer und Gesten.
pub mod geodesy;
pub mod geo_point;
pub mod hole;
pub mod location;
pub mod shot_store;
pub mod spatial;

pub use annotation::{Annotation, AnnotationId, AnnotationKind};
pub use camera::{fit_region, set_camera, HoleCamera, MapRegion};
pub use geo_point::{GeoBounds, GeoPoint};
pub use geodesy::LocalFrame;
pub use hole::{Club, Course, Hole, HoleKey, Shot};
pub use location::{location_channel, LocationPublisher, LocationReader};
pub use shot_store::{JsonShotStore, MemoryShotStore, ShotStore};
pub use spatial::{AnnotationIndex, AnnotationMatch};
