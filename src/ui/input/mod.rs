//! Viewport-Input-Handling: Pointer- und Tasten-Events → AppIntent.
//!
//! - `pointer`: Maustasten und Zeigerbewegung auf der Zeichenfläche
//! - Tastatur-Abbildung liegt in `ui::keyboard`

mod pointer;

use super::keyboard;
use crate::app::AppIntent;

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Default)]
pub struct InputState {
    /// Primärtaste wurde auf der Zeichenfläche gedrückt und noch nicht losgelassen
    pub(crate) primary_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_down: false,
        }
    }

    /// Sammelt die Events eines Frames und gibt AppIntents zurück.
    ///
    /// Reihenfolge: Viewport-Größe, Pointer-Events, Tasten-Events.
    /// Bei vorhandenen Punkten hält die Zeichenfläche den Tastaturfokus und
    /// sperrt Tab, damit egui den Fokus nicht weiterreicht.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        point_count: usize,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = vec![AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        }];

        if point_count > 0 {
            if !response.has_focus() {
                response.request_focus();
            }
            ui.memory_mut(|mem| {
                mem.set_focus_lock_filter(
                    response.id,
                    egui::EventFilter {
                        tab: true,
                        horizontal_arrows: false,
                        vertical_arrows: false,
                        escape: true,
                    },
                )
            });
        }

        let raw_events = ui.input(|i| i.events.clone());
        events.extend(self.pointer_intents(&raw_events, rect));
        events.extend(keyboard::collect_keyboard_intents(ui));

        events
    }
}
