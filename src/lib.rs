//! Golf Shot Tracker Library.
//! Geodäsie, Overlays, Gesten-Controller und Renderer als Library exportiert
//! für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    CommandEffect, GestureController, GestureEvent, GestureOutcome, GesturePhase, GestureState,
    HoleSession, InteractionMode, SessionCommand, ShotOverlay,
};
pub use core::{
    fit_region, set_camera, Course, GeoBounds, GeoPoint, Hole, HoleCamera, HoleKey, MapRegion,
    Shot,
};
pub use render::{LocalMapHost, MapHost, OverlayRenderer};
pub use shared::{OverlayScene, TrackerOptions};
