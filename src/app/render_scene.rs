//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        points: state.points.points().to_vec(),
        selected: state.points.selected(),
        viewport_size,
        options: state.options.clone(),
    }
}
