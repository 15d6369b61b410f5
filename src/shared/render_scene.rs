//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in Reihenfolge (Label = Index + 1)
    pub points: Vec<Vec2>,
    /// Index des selektierten Punkts (invertierte Farben)
    pub selected: Option<usize>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob genug Punkte für eine Kurve vorhanden sind.
    pub fn has_curve(&self) -> bool {
        self.points.len() > 1
    }
}
