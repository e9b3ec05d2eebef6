//! Overlay-Rendering gegen einen abstrakten Karten-Host.
//!
//! Der Renderer erzeugt nur `DrawPrimitive`s in Screen-Koordinaten; wie sie
//! gezeichnet werden, entscheidet der Host (egui-Painter, Test, ...).

mod host;
mod local_host;
mod overlay_renderer;
mod scene;

pub use crate::shared::{DrawPrimitive, OverlayScene};
pub use host::MapHost;
pub use local_host::LocalMapHost;
pub use overlay_renderer::{hit_test, meters_to_pixels, OverlayRenderer};
pub use scene::build_scene;
