//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Callback für Tasten ohne Zuordnung (erhält den Tastennamen).
pub type UnhandledKeyHook = Box<dyn FnMut(&str)>;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Reiner Reducer: derselbe Intent auf demselben Zustand erzeugt immer
/// dieselben Commands und damit denselben Folgezustand.
#[derive(Default)]
pub struct AppController {
    unhandled_key_hook: Option<UnhandledKeyHook>,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self {
            unhandled_key_hook: None,
        }
    }

    /// Registriert einen Diagnose-Hook für nicht zugeordnete Tasten.
    pub fn with_unhandled_key_hook(mut self, hook: impl FnMut(&str) + 'static) -> Self {
        self.unhandled_key_hook = Some(Box::new(hook));
        self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Editing ===
            AppCommand::AddPoint { pos } => handlers::editing::add_point(state, pos),
            AppCommand::MoveSelectedPoint { pos } => handlers::editing::move_selected(state, pos)?,
            AppCommand::DeletePoint { index } => handlers::editing::delete_point(state, index)?,

            // === Selektion ===
            AppCommand::SelectPoint { index } => handlers::selection::select(state, index)?,
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Interaktion ===
            AppCommand::BeginDrag => handlers::interaction::begin_drag(state),
            AppCommand::EndDrag => handlers::interaction::end_drag(state),
            AppCommand::ReportUnhandledKey { key } => {
                handlers::interaction::report_unhandled_key(state, &key);
                if let Some(hook) = self.unhandled_key_hook.as_mut() {
                    hook(key.as_str());
                }
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
