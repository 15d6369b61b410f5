use bezier_curve_editor::{
    build_draw_commands, AppCommand, AppController, AppIntent, AppState, DrawCommand, EditorKey,
    InteractionMode, PointerButton,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

fn press(pos: Vec2) -> AppIntent {
    AppIntent::PointerPressed {
        pos,
        button: PointerButton::Primary,
    }
}

fn key(key: EditorKey) -> AppIntent {
    AppIntent::KeyPressed { key }
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

/// Legt drei Punkte per Klick+Loslassen an; keiner ist danach selektiert.
fn state_with_three_points(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    for pos in [
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 200.0),
        Vec2::new(300.0, 300.0),
    ] {
        send(controller, &mut state, press(pos));
        send(controller, &mut state, AppIntent::PointerReleased);
    }
    state
}

#[test]
fn test_press_on_empty_canvas_adds_point_without_selecting_it() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, press(Vec2::new(50.0, 50.0)));

    assert_eq!(state.points.points(), &[Vec2::new(50.0, 50.0)]);
    assert_eq!(state.points.selected(), None);
    assert!(state.interaction.dragging);
    assert_eq!(state.interaction_mode(), InteractionMode::Idle);

    // Ohne Selektion verschiebt die Bewegung nichts
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(80.0, 80.0),
        },
    );
    assert_eq!(state.points.get(0), Some(Vec2::new(50.0, 50.0)));

    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert!(!state.interaction.dragging);
}

#[test]
fn test_press_into_void_with_selection_only_deselects() {
    let mut controller = AppController::new();
    let mut state = state_with_three_points(&mut controller);
    send(&mut controller, &mut state, key(EditorKey::Tab));
    assert_eq!(state.points.selected(), Some(0));

    send(&mut controller, &mut state, press(Vec2::new(600.0, 50.0)));

    assert_eq!(state.points.len(), 3);
    assert_eq!(state.points.selected(), None);
    assert!(!state.interaction.dragging);
}

#[test]
fn test_press_near_point_selects_instead_of_adding() {
    let mut controller = AppController::new();
    let mut state = state_with_three_points(&mut controller);

    send(&mut controller, &mut state, press(Vec2::new(210.0, 192.0)));

    assert_eq!(state.points.len(), 3);
    assert_eq!(state.interaction_mode(), InteractionMode::Dragging(1));
}

#[test]
fn test_tab_cycles_through_points_and_wraps() {
    let mut controller = AppController::new();
    let mut state = state_with_three_points(&mut controller);

    let mut visited = Vec::new();
    for _ in 0..5 {
        send(&mut controller, &mut state, key(EditorKey::Tab));
        visited.push(state.points.selected());
    }

    assert_eq!(
        visited,
        vec![Some(0), Some(1), Some(2), Some(0), Some(1)]
    );
}

#[test]
fn test_tab_on_empty_canvas_does_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, key(EditorKey::Tab));

    assert_eq!(state.points.selected(), None);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_drag_moves_selected_point_and_release_keeps_selection() {
    let mut controller = AppController::new();
    let mut state = state_with_three_points(&mut controller);

    send(&mut controller, &mut state, press(Vec2::new(205.0, 195.0)));
    for pos in [Vec2::new(220.0, 230.0), Vec2::new(250.0, 260.0)] {
        send(&mut controller, &mut state, AppIntent::PointerMoved { pos });
    }
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(state.points.get(1), Some(Vec2::new(250.0, 260.0)));
    assert_eq!(state.interaction_mode(), InteractionMode::Selected(1));

    // Nach dem Loslassen bewegt der Zeiger den Punkt nicht mehr
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(400.0, 400.0),
        },
    );
    assert_eq!(state.points.get(1), Some(Vec2::new(250.0, 260.0)));
}

#[test]
fn test_delete_removes_selected_point_and_clears_selection() {
    let mut controller = AppController::new();
    let mut state = state_with_three_points(&mut controller);
    send(&mut controller, &mut state, key(EditorKey::Tab));
    send(&mut controller, &mut state, key(EditorKey::Tab));

    send(&mut controller, &mut state, key(EditorKey::Delete));

    assert_eq!(
        state.points.points(),
        &[Vec2::new(100.0, 100.0), Vec2::new(300.0, 300.0)]
    );
    assert_eq!(state.points.selected(), None);
}

#[test]
fn test_backspace_behaves_like_delete() {
    let mut controller = AppController::new();
    let mut state = state_with_three_points(&mut controller);
    send(&mut controller, &mut state, key(EditorKey::Tab));

    send(&mut controller, &mut state, key(EditorKey::Backspace));

    assert_eq!(state.points.len(), 2);
    assert_eq!(state.points.get(0), Some(Vec2::new(200.0, 200.0)));
    assert_eq!(state.points.selected(), None);
}

#[test]
fn test_escape_clears_selection_and_keeps_points() {
    let mut controller = AppController::new();
    let mut state = state_with_three_points(&mut controller);
    send(&mut controller, &mut state, key(EditorKey::Tab));

    send(&mut controller, &mut state, key(EditorKey::Escape));

    assert_eq!(state.points.len(), 3);
    assert_eq!(state.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn test_unhandled_keys_reach_hook_and_command_log() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut controller =
        AppController::new().with_unhandled_key_hook(move |key| sink.borrow_mut().push(key.to_owned()));
    let mut state = state_with_three_points(&mut controller);

    send(&mut controller, &mut state, key(EditorKey::Other("A".to_owned())));
    // Delete ohne Selektion hat keine Wirkung und gilt als nicht zugeordnet
    send(&mut controller, &mut state, key(EditorKey::Delete));

    assert_eq!(*seen.borrow(), vec!["A".to_owned(), "Delete".to_owned()]);
    assert_eq!(state.points.len(), 3);
    assert_eq!(state.interaction.last_unhandled_key.as_deref(), Some("Delete"));

    match state.command_log.entries().last() {
        Some(AppCommand::ReportUnhandledKey { key }) => assert_eq!(key, "Delete"),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_select_out_of_range_fails_and_keeps_selection() {
    let mut controller = AppController::new();
    let mut state = state_with_three_points(&mut controller);
    send(&mut controller, &mut state, key(EditorKey::Tab));

    let result = controller.handle_command(&mut state, AppCommand::SelectPoint { index: 5 });

    assert!(result.is_err());
    assert_eq!(state.points.selected(), Some(0));
    assert_eq!(
        state.command_log.entries().last(),
        Some(&AppCommand::SelectPoint { index: 5 })
    );
}

#[test]
fn test_non_primary_press_changes_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for button in [
        PointerButton::Secondary,
        PointerButton::Middle,
        PointerButton::Other,
    ] {
        send(
            &mut controller,
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(50.0, 50.0),
                button,
            },
        );
    }

    assert!(state.points.is_empty());
    assert!(!state.interaction.dragging);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_redraw_requested_only_on_visible_changes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized {
            size: [800.0, 600.0],
        },
    );
    assert!(state.take_redraw_request());
    assert!(!state.take_redraw_request());

    // Gleiche Größe erneut: kein Redraw
    send(
        &mut controller,
        &mut state,
        AppIntent::ViewportResized {
            size: [800.0, 600.0],
        },
    );
    assert!(!state.take_redraw_request());
    assert_eq!(state.view.viewport_size, [800.0, 600.0]);

    send(&mut controller, &mut state, press(Vec2::new(10.0, 10.0)));
    assert!(state.take_redraw_request());

    // Ende des Drags ändert den angezeigten Modus
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert!(state.take_redraw_request());

    // Zweites Loslassen ändert nichts mehr
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert!(!state.take_redraw_request());
}

#[test]
fn test_drag_flag_change_requests_redraw_once() {
    let mut controller = AppController::new();
    let mut state = state_with_three_points(&mut controller);
    send(&mut controller, &mut state, key(EditorKey::Tab));
    let _ = state.take_redraw_request();

    controller
        .handle_command(&mut state, AppCommand::BeginDrag)
        .expect("BeginDrag sollte ohne Fehler durchlaufen");
    assert_eq!(state.interaction_mode(), InteractionMode::Dragging(0));
    assert!(state.take_redraw_request());

    controller
        .handle_command(&mut state, AppCommand::BeginDrag)
        .expect("BeginDrag sollte ohne Fehler durchlaufen");
    assert!(!state.take_redraw_request());
}
