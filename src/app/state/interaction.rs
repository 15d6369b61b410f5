/// Transienter Interaktionszustand zwischen Pointer-Down und Pointer-Up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// Drag-Flag: gesetzt beim Primär-Klick, gelöscht beim Loslassen
    pub dragging: bool,
    /// Name der zuletzt nicht zugeordneten Taste (Diagnose)
    pub last_unhandled_key: Option<String>,
}

impl InteractionState {
    /// Erstellt den Ruhezustand (kein Drag).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Aus Selektion und Drag-Flag abgeleiteter Modus der Zustandsmaschine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Keine Selektion
    Idle,
    /// Punkt selektiert, kein Drag
    Selected(usize),
    /// Punkt selektiert und Drag-Flag gesetzt
    Dragging(usize),
}
