//! Gesten- und Command-Enums für den Gesten→Command-Datenfluss.

mod command;
mod gesture;

pub use command::SessionCommand;
pub use gesture::{GestureEvent, GestureOutcome, GesturePhase};
