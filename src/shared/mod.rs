//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und dem Karten-Host
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::TrackerOptions;
pub use options::{DISPERSION_FACTOR, MAX_SHOTS_PER_HOLE};
pub use render_scene::{DrawPrimitive, OverlayScene};
