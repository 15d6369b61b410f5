//! Maustasten und Zeigerbewegung → Pointer-Intents.

use super::InputState;
use crate::app::{AppIntent, PointerButton};

impl InputState {
    /// Übersetzt rohe egui-Events in Pointer-Intents mit Surface-lokalen Koordinaten.
    ///
    /// Nur Klicks innerhalb von `rect` starten eine Interaktion; das Loslassen
    /// der Primärtaste wird immer gemeldet, damit ein Drag sicher endet.
    pub(crate) fn pointer_intents(
        &mut self,
        raw_events: &[egui::Event],
        rect: egui::Rect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        for event in raw_events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } => {
                    if !rect.contains(*pos) {
                        continue;
                    }
                    let button = map_button(*button);
                    if button == PointerButton::Primary {
                        self.primary_down = true;
                    }
                    events.push(AppIntent::PointerPressed {
                        pos: to_local(*pos, rect),
                        button,
                    });
                }
                egui::Event::PointerButton {
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    ..
                } => {
                    self.primary_down = false;
                    events.push(AppIntent::PointerReleased);
                }
                egui::Event::PointerMoved(pos) if self.primary_down => {
                    events.push(AppIntent::PointerMoved {
                        pos: to_local(*pos, rect),
                    });
                }
                _ => {}
            }
        }

        events
    }
}

fn map_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Primary,
        egui::PointerButton::Secondary => PointerButton::Secondary,
        egui::PointerButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

fn to_local(pos: egui::Pos2, rect: egui::Rect) -> glam::Vec2 {
    let local = pos - rect.min;
    glam::Vec2::new(local.x, local.y)
}
