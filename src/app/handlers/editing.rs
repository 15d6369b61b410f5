//! Handler für das Anlegen, Verschieben und Löschen von Kontrollpunkten.

use crate::app::AppState;

/// Hängt einen neuen Kontrollpunkt an (ohne ihn zu selektieren).
pub fn add_point(state: &mut AppState, pos: glam::Vec2) {
    state.points.add(pos);
    state.request_redraw();
    log::info!(
        "Punkt {} an Position ({:.1}, {:.1}) hinzugefügt",
        state.points.len(),
        pos.x,
        pos.y
    );
}

/// Setzt den selektierten Punkt auf `pos`.
pub fn move_selected(state: &mut AppState, pos: glam::Vec2) -> anyhow::Result<()> {
    let Some(index) = state.points.selected() else {
        log::debug!("Verschieben ohne Selektion ignoriert");
        return Ok(());
    };

    state.points.update(index, pos)?;
    state.request_redraw();
    Ok(())
}

/// Entfernt den Punkt an `index`.
pub fn delete_point(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let removed = state.points.delete_at(index)?;
    state.request_redraw();
    log::info!(
        "Punkt {} bei ({:.1}, {:.1}) gelöscht, {} verbleibend",
        index + 1,
        removed.x,
        removed.y,
        state.points.len()
    );
    Ok(())
}
