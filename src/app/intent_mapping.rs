//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt die Interaktions-Zustandsmaschine: Treffertest und aktuelle
//! Selektion entscheiden, welche Commands ein Pointer- oder Tasten-Event erzeugt.

use super::{AppCommand, AppIntent, AppState, EditorKey, PointerButton};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerPressed { pos, button } => map_pointer_pressed(state, pos, button),
        AppIntent::PointerMoved { pos } => {
            if state.interaction.dragging && state.points.selected().is_some() {
                vec![AppCommand::MoveSelectedPoint { pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::KeyPressed { key } => map_key_pressed(state, key),
    }
}

fn map_pointer_pressed(state: &AppState, pos: glam::Vec2, button: PointerButton) -> Vec<AppCommand> {
    if button != PointerButton::Primary {
        return Vec::new();
    }

    let selected = state.points.selected();
    let hit = state.points.hit_test(pos, state.options.hit_radius_px);

    match (selected, hit) {
        // Klick ins Leere bei aktiver Selektion: nur abwählen
        (Some(_), None) => vec![AppCommand::ClearSelection],
        (_, Some(index)) => vec![AppCommand::SelectPoint { index }, AppCommand::BeginDrag],
        (None, None) => vec![
            AppCommand::ClearSelection,
            AppCommand::AddPoint { pos },
            AppCommand::BeginDrag,
        ],
    }
}

fn map_key_pressed(state: &AppState, key: EditorKey) -> Vec<AppCommand> {
    let selected = state.points.selected();

    match (key, selected) {
        (EditorKey::Backspace | EditorKey::Delete, Some(index)) => vec![
            AppCommand::DeletePoint { index },
            AppCommand::ClearSelection,
        ],
        (EditorKey::Escape, _) => vec![AppCommand::ClearSelection],
        (EditorKey::Tab, _) => {
            let count = state.points.len();
            if count == 0 {
                return Vec::new();
            }
            let index = selected.map_or(0, |current| (current + 1) % count);
            vec![AppCommand::SelectPoint { index }]
        }
        // Backspace/Delete ohne Selektion zählen ebenfalls als nicht zugeordnet
        (other, _) => vec![AppCommand::ReportUnhandledKey {
            key: other.name().to_owned(),
        }],
    }
}
