/// Mutierende Commands auf dem AppState.
///
/// Werden ausschließlich von der Intent-Abbildung erzeugt und vom
/// `AppController` in Reihenfolge ausgeführt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Viewport ===
    /// Größe der Zeichenfläche übernehmen
    SetViewportSize { size: [f32; 2] },

    // === Editing ===
    /// Kontrollpunkt anhängen (wird nicht selektiert)
    AddPoint { pos: glam::Vec2 },
    /// Selektierten Punkt an neue Position setzen
    MoveSelectedPoint { pos: glam::Vec2 },
    /// Punkt an Index entfernen
    DeletePoint { index: usize },

    // === Selektion ===
    /// Punkt an Index selektieren
    SelectPoint { index: usize },
    /// Selektion aufheben
    ClearSelection,

    // === Interaktion ===
    /// Drag-Flag setzen
    BeginDrag,
    /// Drag-Flag löschen
    EndDrag,
    /// Taste ohne Zuordnung an den Diagnose-Hook melden
    ReportUnhandledKey { key: String },
}
