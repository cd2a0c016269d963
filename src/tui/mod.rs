//! Terminal view for follow mode.
//!
//! Redraws the report full-screen each time the refresh controller
//! produces a new snapshot.

mod app;
mod event;
mod input;
mod render;

pub use app::{App, TerminalView};
pub use event::{Event, EventHandler};
pub use input::{KeyAction, handle_key};
pub use render::render;
