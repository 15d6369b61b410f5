//! Reine Übersetzung RenderScene → Zeichenbefehle (ohne Zeichenfläche testbar).

use crate::core::BezierCurve;
use crate::shared::RenderScene;
use glam::Vec2;

/// Ein einzelner Zeichenbefehl in Surface-lokalen Pixelkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Gesamte Fläche mit Farbe füllen
    Clear { color: [f32; 4] },
    /// Gefüllter Kreis
    FillCircle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Zentrierter Text
    Label {
        center: Vec2,
        text: String,
        font_size: f32,
        color: [f32; 4],
    },
}

/// Baut die vollständige Befehlsliste für einen Frame.
pub fn build_draw_commands(scene: &RenderScene) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    append_draw_commands(scene, &mut commands);
    commands
}

/// Hängt die Befehle eines Frames an `out` an (Scratch-Buffer-Variante).
///
/// Reihenfolge: Hintergrund, Kurve (nur ab zwei Punkten), Kontrollpunkte mit Labels.
pub fn append_draw_commands(scene: &RenderScene, out: &mut Vec<DrawCommand>) {
    let opts = &scene.options;

    out.push(DrawCommand::Clear {
        color: opts.background_color,
    });

    if scene.has_curve() {
        if let Some(curve) = BezierCurve::new(&scene.points) {
            let samples = curve.samples(opts.sample_step);
            out.reserve(samples.len() + scene.points.len() * 2);
            out.extend(samples.map(|center| DrawCommand::FillCircle {
                center,
                radius: opts.curve_dot_radius_px,
                color: opts.curve_color,
            }));
        }
    }

    for (index, &center) in scene.points.iter().enumerate() {
        let (fill, label) = if scene.selected == Some(index) {
            (opts.accent_color, opts.point_color)
        } else {
            (opts.point_color, opts.accent_color)
        };

        out.push(DrawCommand::FillCircle {
            center,
            radius: opts.point_radius_px,
            color: fill,
        });
        out.push(DrawCommand::Label {
            center,
            text: (index + 1).to_string(),
            font_size: opts.label_font_size_px,
            color: label,
        });
    }
}
