//! Handler für Drag-Flag und nicht zugeordnete Tasten.

use crate::app::AppState;

/// Setzt das Drag-Flag.
pub fn begin_drag(state: &mut AppState) {
    set_dragging(state, true);
}

/// Löscht das Drag-Flag; die Selektion bleibt erhalten.
pub fn end_drag(state: &mut AppState) {
    set_dragging(state, false);
}

// Der Modus steht in der Status-Bar, daher Redraw nur bei echter Änderung
fn set_dragging(state: &mut AppState, dragging: bool) {
    if state.interaction.dragging != dragging {
        state.interaction.dragging = dragging;
        state.request_redraw();
    }
}

/// Merkt sich eine nicht zugeordnete Taste (ohne Zustandsänderung am Modell).
pub fn report_unhandled_key(state: &mut AppState, key: &str) {
    log::debug!("Taste ohne Zuordnung: {key}");
    state.interaction.last_unhandled_key = Some(key.to_owned());
}
