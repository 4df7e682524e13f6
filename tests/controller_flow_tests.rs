use bspline_knot_editor::{
    AppCommand, AppController, AppIntent, AppState, CommandOutcome, LoggedCommand, StatusMessage,
};
use glam::Vec2;

fn handle(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent.clone())
        .unwrap_or_else(|e| panic!("{intent:?} sollte ohne Fehler durchlaufen: {e:#}"));
}

#[test]
fn test_primary_press_on_empty_space_appends_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::PrimaryPressed {
            pos: Vec2::new(0.8, 0.8),
        },
    );

    assert_eq!(state.point_count(), 5);
    assert_eq!(state.session.knots().len(), 8);
    assert_eq!(state.selection.selected_index, None);
    assert_eq!(
        state.status.entries(),
        &[StatusMessage::NewControlPoint(4)]
    );
}

#[test]
fn test_select_drag_release_moves_point_without_touching_knots() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let knots = state.session.knots().clone();

    handle(
        &mut controller,
        &mut state,
        AppIntent::PrimaryPressed {
            pos: Vec2::new(0.5, 0.25),
        },
    );
    assert_eq!(state.selection.selected_index, Some(3));
    assert!(state.selection.is_dragging);

    handle(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(0.6, 0.1),
        },
    );
    handle(&mut controller, &mut state, AppIntent::PointerReleased);

    assert_eq!(state.session.polygon().point_at(3), Some(Vec2::new(0.6, 0.1)));
    assert_eq!(state.session.knots(), &knots);
    assert_eq!(state.selection.selected_index, None);
    assert!(!state.selection.is_dragging);

    // Nach dem Loslassen folgt kein Punkt mehr dem Cursor
    handle(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(-0.9, -0.9),
        },
    );
    assert_eq!(state.session.polygon().point_at(3), Some(Vec2::new(0.6, 0.1)));
    assert_eq!(
        state.status.entries(),
        &[StatusMessage::SelectedControlPoint(3)]
    );
}

#[test]
fn test_middle_press_inserts_and_drags_new_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let hit = state.session.polygon().point_at(1).unwrap();

    handle(&mut controller, &mut state, AppIntent::MiddlePressed { pos: hit });
    assert_eq!(state.point_count(), 5);
    assert_eq!(state.selection.selected_index, Some(1));

    handle(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(-0.2, -0.6),
        },
    );

    let polygon = state.session.polygon();
    assert_eq!(polygon.point_at(1), Some(Vec2::new(-0.2, -0.6)));
    assert_eq!(polygon.point_at(2), Some(hit));
    assert_eq!(state.session.knots().len(), 8);
    assert_eq!(state.status.entries(), &[StatusMessage::NewControlPoint(1)]);
}

#[test]
fn test_middle_press_on_empty_space_does_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.session.clone();

    handle(
        &mut controller,
        &mut state,
        AppIntent::MiddlePressed {
            pos: Vec2::new(0.9, -0.9),
        },
    );

    assert_eq!(state.session, before);
    assert!(!state.selection.is_dragging);
}

#[test]
fn test_secondary_press_deletes_hit_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::SecondaryPressed {
            pos: Vec2::new(-0.5, -0.25),
        },
    );

    assert_eq!(state.point_count(), 3);
    assert_eq!(state.session.polygon().point_at(0), Some(Vec2::new(0.0, -0.25)));
    assert_eq!(state.session.knots().len(), 6);
    assert_eq!(
        state.status.entries(),
        &[StatusMessage::DeletedControlPoint(0)]
    );
}

#[test]
fn test_secondary_press_refused_below_minimum_reports_status() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    // 4 Punkte → Ordnung 5 erlaubt (4 >= 4), danach darf nicht mehr gelöscht werden
    handle(&mut controller, &mut state, AppIntent::IncreaseOrderRequested);
    handle(&mut controller, &mut state, AppIntent::IncreaseOrderRequested);
    handle(&mut controller, &mut state, AppIntent::IncreaseOrderRequested);
    assert_eq!(state.order(), 5);
    state.status.drain();

    handle(
        &mut controller,
        &mut state,
        AppIntent::SecondaryPressed {
            pos: Vec2::new(0.0, 0.25),
        },
    );

    assert_eq!(state.point_count(), 4);
    assert_eq!(
        state.status.entries(),
        &[StatusMessage::TooFewControlPoints]
    );
}

#[test]
fn test_order_refusals_are_reported_not_errors() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(&mut controller, &mut state, AppIntent::DecreaseOrderRequested);
    handle(&mut controller, &mut state, AppIntent::DecreaseOrderRequested);
    assert_eq!(state.order(), 1);
    assert_eq!(
        state.status.drain(),
        vec![StatusMessage::OrderMustBePositive]
    );

    for _ in 0..4 {
        handle(&mut controller, &mut state, AppIntent::IncreaseOrderRequested);
    }
    handle(&mut controller, &mut state, AppIntent::IncreaseOrderRequested);
    assert_eq!(state.order(), 5);
    assert_eq!(state.status.drain(), vec![StatusMessage::OrderTooBig]);
    assert!(state.session.knots().is_consistent(4, 5));
}

#[test]
fn test_state_query_reports_order_and_point_count() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(&mut controller, &mut state, AppIntent::IncreaseOrderRequested);
    handle(&mut controller, &mut state, AppIntent::StateQueryRequested);

    assert_eq!(
        state.status.last(),
        Some(&StatusMessage::StateReport {
            order: 3,
            points: 4
        })
    );
}

#[test]
fn test_move_with_invalid_index_is_an_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::MovePointRequested {
            index: 7,
            pos: Vec2::ZERO,
        },
    );

    assert!(result.is_err());
    assert!(state.status.is_empty());
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    handle(&mut controller, &mut state, AppIntent::ExitRequested);

    assert!(state.should_exit);

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        LoggedCommand {
            command: AppCommand::RequestExit,
            outcome: CommandOutcome::Applied,
        } => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_command_log_records_refusal_with_status() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(&mut controller, &mut state, AppIntent::DecreaseOrderRequested);
    handle(&mut controller, &mut state, AppIntent::DecreaseOrderRequested);

    let outcomes: Vec<_> = state
        .command_log
        .iter()
        .map(|entry| entry.outcome.clone())
        .collect();
    assert_eq!(
        outcomes,
        vec![
            CommandOutcome::Applied,
            CommandOutcome::Refused(StatusMessage::OrderMustBePositive),
        ]
    );
    assert_eq!(state.command_log.refusals().count(), 1);
}

#[test]
fn test_command_log_records_failed_move() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::MovePointRequested {
            index: 7,
            pos: Vec2::ZERO,
        },
    );
    assert!(result.is_err());

    match state.command_log.last() {
        Some(LoggedCommand {
            command: AppCommand::MovePoint { index: 7, .. },
            outcome: CommandOutcome::Failed(reason),
        }) => assert!(reason.contains("out of bounds"), "Grund: {reason}"),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_secondary_press_logs_select_then_refused_delete() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.session = bspline_knot_editor::EditSession::with_points(
        vec![Vec2::new(-0.5, 0.0), Vec2::ZERO, Vec2::new(0.5, 0.0)],
        4,
    )
    .expect("3 Punkte bei Ordnung 4 sind gültig");

    handle(
        &mut controller,
        &mut state,
        AppIntent::SecondaryPressed { pos: Vec2::ZERO },
    );

    let logged: Vec<_> = state.command_log.iter().collect();
    assert_eq!(logged.len(), 2);
    assert!(matches!(
        logged[0].command,
        AppCommand::SelectNearestPoint { report: false, .. }
    ));
    assert_eq!(
        logged[1],
        &LoggedCommand {
            command: AppCommand::DeleteSelectedPoint,
            outcome: CommandOutcome::Refused(StatusMessage::TooFewControlPoints),
        }
    );
    assert_eq!(state.point_count(), 3);
}

#[test]
fn test_render_scene_reflects_state_after_edits() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    handle(
        &mut controller,
        &mut state,
        AppIntent::AddPointRequested {
            pos: Vec2::new(0.9, 0.9),
        },
    );
    handle(
        &mut controller,
        &mut state,
        AppIntent::SelectPointRequested {
            pos: Vec2::new(0.9, 0.9),
        },
    );
    handle(&mut controller, &mut state, AppIntent::ParamStepForwardRequested);

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.points.len(), 5);
    assert_eq!(scene.knots, state.session.knots().as_slice());
    assert_eq!(scene.selected_index, Some(4));
    assert_eq!(scene.u_param, 1);
}
