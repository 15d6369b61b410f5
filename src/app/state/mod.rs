//! Application State: zentrale Datenhaltung.
//!
//! Ein einziger, explizit besessener Zustand pro Editor-Sitzung;
//! kein globaler oder statischer Zustand.

mod app_state;
mod interaction;
mod view;

pub use app_state::AppState;
pub use interaction::{InteractionMode, InteractionState};
pub use view::ViewState;
