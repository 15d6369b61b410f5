//! Bézier Curve Editor.
//!
//! Interaktiver Editor für Bézier-Kurven beliebigen Grades:
//! Kontrollpunkte setzen, ziehen, durchschalten und löschen.

use bezier_curve_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren (RUST_LOG überschreibt den Standard)
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();

        log::info!("Bézier Curve Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Bézier Curve Editor"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier Curve Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new().with_unhandled_key_hook(|key| {
                log::debug!("Unbehandelte Taste: {}", key);
            }),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let events =
                    self.input
                        .collect_viewport_events(ui, &response, self.state.point_count());
                self.process_events(events);

                let scene = self
                    .controller
                    .build_render_scene(&self.state, [rect.width(), rect.height()]);
                self.renderer
                    .render_scene(&ui.painter_at(rect), rect, &scene);
            });

        self.maybe_request_repaint(ctx);
    }
}

impl EditorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context) {
        if self.state.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}
