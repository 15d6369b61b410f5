//! Ausgabe der Zeichenbefehle über den egui-Painter.

use super::DrawCommand;

/// Zeichnet `commands` in `rect`; Koordinaten sind relativ zu `rect.min`.
pub(crate) fn paint_commands(painter: &egui::Painter, rect: egui::Rect, commands: &[DrawCommand]) {
    let to_screen = |p: glam::Vec2| rect.min + egui::vec2(p.x, p.y);

    for command in commands {
        match command {
            DrawCommand::Clear { color } => {
                painter.rect_filled(rect, 0.0, to_color32(*color));
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(to_screen(*center), *radius, to_color32(*color));
            }
            DrawCommand::Label {
                center,
                text,
                font_size,
                color,
            } => {
                painter.text(
                    to_screen(*center),
                    egui::Align2::CENTER_CENTER,
                    text,
                    egui::FontId::proportional(*font_size),
                    to_color32(*color),
                );
            }
        }
    }
}

fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]).into()
}
