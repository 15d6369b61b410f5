//! Handler für Viewport-Änderungen.

use crate::app::AppState;

/// Übernimmt die Größe der Zeichenfläche; Änderungen erzwingen einen Redraw.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    if state.view.viewport_size == size {
        return;
    }
    log::debug!("Viewport-Größe: {:.0}×{:.0}", size[0], size[1]);
    state.view.viewport_size = size;
    state.request_redraw();
}
