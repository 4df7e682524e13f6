//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState, CommandOutcome};
use crate::shared::RenderScene;

/// Orchestriert Frontend-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
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

    /// Führt mutierende Commands auf dem AppState aus und hält das Ergebnis
    /// im Command-Log fest.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        let result = Self::dispatch(state, &command);
        let outcome = match &result {
            Ok(outcome) => outcome.clone(),
            Err(e) => CommandOutcome::Failed(format!("{e:#}")),
        };
        state.command_log.record(command, outcome);
        result.map(|_| ())
    }

    /// Dispatcht an Feature-Handler in `handlers/`.
    fn dispatch(state: &mut AppState, command: &AppCommand) -> anyhow::Result<CommandOutcome> {
        use super::handlers;

        let outcome = match *command {
            // === Selektion & Drag ===
            AppCommand::SelectNearestPoint {
                pos,
                radius,
                report,
            } => {
                handlers::selection::select_nearest_point(state, pos, radius, report);
                CommandOutcome::Applied
            }
            AppCommand::ClearSelection => {
                handlers::selection::clear(state);
                CommandOutcome::Applied
            }
            AppCommand::BeginDrag => {
                handlers::selection::begin_drag(state);
                CommandOutcome::Applied
            }
            AppCommand::EndDrag => {
                handlers::selection::end_drag(state);
                CommandOutcome::Applied
            }

            // === Editing ===
            AppCommand::AddPoint { pos } => handlers::editing::add_point(state, pos)?,
            AppCommand::InsertPointAtSelected { pos } => {
                handlers::editing::insert_at_selected(state, pos)?
            }
            AppCommand::DeleteSelectedPoint => handlers::editing::delete_selected(state)?,
            AppCommand::MovePoint { index, pos } => {
                handlers::editing::move_point(state, index, pos)?
            }
            AppCommand::DragSelectedTo { pos } => handlers::editing::drag_selected(state, pos)?,

            // === Kurve ===
            AppCommand::IncreaseOrder => handlers::curve::increase_order(state)?,
            AppCommand::DecreaseOrder => handlers::curve::decrease_order(state)?,
            AppCommand::StepParamForward => {
                handlers::curve::step_param_forward(state);
                CommandOutcome::Applied
            }
            AppCommand::StepParamBackward => {
                handlers::curve::step_param_backward(state);
                CommandOutcome::Applied
            }

            // === Session ===
            AppCommand::ReportState => {
                handlers::session::report_state(state);
                CommandOutcome::Applied
            }
            AppCommand::RequestExit => {
                handlers::session::request_exit(state);
                CommandOutcome::Applied
            }
        };

        Ok(outcome)
    }

    /// Baut die read-only Szene für das Frontend.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
