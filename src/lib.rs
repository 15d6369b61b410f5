//! Bézier Curve Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorKey, InteractionMode, PointerButton,
    ViewState,
};
pub use core::{binomial, evaluate, sample, BezierCurve, PointStore, PointStoreError};
pub use render::{build_draw_commands, DrawCommand, Renderer};
pub use shared::{EditorOptions, RenderScene};
