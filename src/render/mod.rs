//! Rendering der Kurve und Kontrollpunkte.
//!
//! Zweistufig: `commands` übersetzt eine `RenderScene` rein funktional in
//! `DrawCommand`s, `painter` gibt diese über egui aus.

mod commands;
mod painter;

pub use crate::shared::RenderScene;
pub use commands::{append_draw_commands, build_draw_commands, DrawCommand};

/// Haupt-Renderer für die Editor-Zeichenfläche.
///
/// Hält einen wiederverwendbaren Befehlspuffer, damit pro Frame keine
/// neue Allokation für die ~1000 Kurvenpunkte nötig ist.
#[derive(Default)]
pub struct Renderer {
    command_scratch: Vec<DrawCommand>,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self {
            command_scratch: Vec::new(),
        }
    }

    /// Rendert die komplette Szene in `rect`.
    pub fn render_scene(&mut self, painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
        self.command_scratch.clear();
        append_draw_commands(scene, &mut self.command_scratch);

        log::trace!(
            "Renderer.render_scene(): {} Punkte, {} Befehle",
            scene.points.len(),
            self.command_scratch.len()
        );

        painter::paint_commands(painter, rect, &self.command_scratch);
    }
}
