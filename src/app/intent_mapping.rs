//! Mapping von Frontend-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let radius = state.options.pick_radius;

    match intent {
        AppIntent::PrimaryPressed { pos } => {
            // Treffer → greifen, sonst neuen Punkt anhängen (nicht greifen)
            if state.session.find_nearest(pos, radius).is_some() {
                vec![
                    AppCommand::SelectNearestPoint {
                        pos,
                        radius,
                        report: true,
                    },
                    AppCommand::BeginDrag,
                ]
            } else {
                vec![AppCommand::ClearSelection, AppCommand::AddPoint { pos }]
            }
        }
        AppIntent::SecondaryPressed { pos } => vec![
            AppCommand::SelectNearestPoint {
                pos,
                radius,
                report: false,
            },
            AppCommand::DeleteSelectedPoint,
        ],
        AppIntent::MiddlePressed { pos } => vec![
            AppCommand::SelectNearestPoint {
                pos,
                radius,
                report: false,
            },
            AppCommand::InsertPointAtSelected { pos },
            AppCommand::BeginDrag,
        ],
        AppIntent::PointerReleased => vec![AppCommand::EndDrag, AppCommand::ClearSelection],
        AppIntent::PointerMoved { pos } => {
            if state.selection.drag_target().is_some() {
                vec![AppCommand::DragSelectedTo { pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::AddPointRequested { pos } => vec![AppCommand::AddPoint { pos }],
        AppIntent::InsertPointAtSelectedRequested { pos } => {
            vec![AppCommand::InsertPointAtSelected { pos }]
        }
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedPoint],
        AppIntent::MovePointRequested { index, pos } => vec![AppCommand::MovePoint { index, pos }],
        AppIntent::SelectPointRequested { pos } => vec![AppCommand::SelectNearestPoint {
            pos,
            radius,
            report: true,
        }],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::IncreaseOrderRequested => vec![AppCommand::IncreaseOrder],
        AppIntent::DecreaseOrderRequested => vec![AppCommand::DecreaseOrder],
        AppIntent::ParamStepForwardRequested => vec![AppCommand::StepParamForward],
        AppIntent::ParamStepBackwardRequested => vec![AppCommand::StepParamBackward],
        AppIntent::StateQueryRequested => vec![AppCommand::ReportState],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
