use crate::app::CommandLog;
use crate::core::PointStore;
use crate::shared::EditorOptions;

use super::{InteractionMode, InteractionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte und Selektion
    pub points: PointStore,
    /// Drag-Flag und Diagnose-Daten
    pub interaction: InteractionState,
    /// View-State
    pub view: ViewState,
    /// Laufzeit-Optionen (Farben, Größen, Radien)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            points: PointStore::new(),
            interaction: InteractionState::new(),
            view: ViewState::new(),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Aktueller Modus der Interaktions-Zustandsmaschine.
    pub fn interaction_mode(&self) -> InteractionMode {
        match (self.points.selected(), self.interaction.dragging) {
            (None, _) => InteractionMode::Idle,
            (Some(index), false) => InteractionMode::Selected(index),
            (Some(index), true) => InteractionMode::Dragging(index),
        }
    }

    /// Markiert die Zeichenfläche als neu zu zeichnen.
    pub fn request_redraw(&mut self) {
        self.view.redraw_requested = true;
    }

    /// Liefert und löscht die Redraw-Anforderung.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.view.redraw_requested)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
