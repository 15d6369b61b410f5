//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, InteractionMode};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Points: {}", state.point_count()));

            ui.separator();

            match state.points.degree() {
                Some(degree) => ui.label(format!("Degree: {}", degree)),
                None => ui.label("Degree: -"),
            };

            ui.separator();

            let mode = state.interaction_mode();
            match mode {
                InteractionMode::Selected(index) | InteractionMode::Dragging(index) => {
                    ui.label(format!("Selected: #{}", index + 1));
                }
                InteractionMode::Idle => {
                    ui.label("Selected: -");
                }
            }

            ui.separator();

            ui.label(format!("Mode: {}", mode_label(mode)));

            if let Some(ref key) = state.interaction.last_unhandled_key {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("Unhandled key: {}", key))
                        .color(egui::Color32::YELLOW),
                );
            }
        });
    });
}

fn mode_label(mode: InteractionMode) -> &'static str {
    match mode {
        InteractionMode::Idle => "Idle",
        InteractionMode::Selected(_) => "Selected",
        InteractionMode::Dragging(_) => "Dragging",
    }
}
