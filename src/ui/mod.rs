//! UI-Layer mit egui: Kartenansicht, Seitenpanel, Status-Bar.
//!
//! Die UI erzeugt nur Gesten und Panel-Aktionen; Mutationen laufen
//! über den Gesten-Controller bzw. die Anwendung in `main.rs`.

pub mod input;
pub mod paint;
pub mod panel;
pub mod status;

pub use input::{MapInput, ViewportEvent};
pub use paint::{paint_hole, paint_scene};
pub use panel::{render_side_panel, PanelAction, PanelState};
pub use status::render_status_bar;
