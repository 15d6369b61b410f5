//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet Tastendrücke und mappt sie auf `AppIntent`s.
//! Die Entscheidung, was eine Taste bewirkt, trifft erst das Intent-Mapping.

use crate::app::{AppIntent, EditorKey};

/// Verarbeitet Tastendrücke des aktuellen Frames und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    ui.input(|i| keyboard_intents(&i.events))
}

/// Bildet gedrückte Tasten (inkl. Auto-Repeat) in Reihenfolge auf Intents ab.
pub(crate) fn keyboard_intents(events: &[egui::Event]) -> Vec<AppIntent> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key, pressed: true, ..
            } => Some(AppIntent::KeyPressed {
                key: editor_key(*key),
            }),
            _ => None,
        })
        .collect()
}

fn editor_key(key: egui::Key) -> EditorKey {
    match key {
        egui::Key::Backspace => EditorKey::Backspace,
        egui::Key::Delete => EditorKey::Delete,
        egui::Key::Escape => EditorKey::Escape,
        egui::Key::Tab => EditorKey::Tab,
        other => EditorKey::Other(other.name().to_owned()),
    }
}
