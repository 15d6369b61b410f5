//! UI-Layer mit egui: Input-Handling, Tastatur und Status-Bar.
//!
//! Die Zeichenfläche selbst wird vom Renderer bemalt; dieses Modul liefert
//! ausschließlich `AppIntent`s und die Status-Anzeige.

pub mod input;
mod keyboard;
pub mod status;

pub use input::InputState;
pub use status::render_status_bar;
