//! Handler für Selektions-Operationen.

use crate::app::AppState;

/// Selektiert den Punkt an `index`.
pub fn select(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    state.points.set_selected(Some(index))?;
    state.request_redraw();
    log::debug!("Punkt {} selektiert", index + 1);
    Ok(())
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    state.points.clear_selection();
    state.request_redraw();
}
