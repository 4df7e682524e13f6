//! Handler für Ordnung und Auswertungs-Parameter.

use super::report_refusal;
use crate::app::use_cases;
use crate::app::{AppState, CommandOutcome};

/// Erhöht die Ordnung oder meldet "order too big for point count".
pub fn increase_order(state: &mut AppState) -> anyhow::Result<CommandOutcome> {
    let result = use_cases::curve::increase_order(state);
    report_refusal(state, result)
}

/// Verringert die Ordnung oder meldet "order must be greater than zero".
pub fn decrease_order(state: &mut AppState) -> anyhow::Result<CommandOutcome> {
    let result = use_cases::curve::decrease_order(state);
    report_refusal(state, result)
}

/// Erhöht uParam.
pub fn step_param_forward(state: &mut AppState) {
    use_cases::curve::step_param_forward(state);
}

/// Verringert uParam.
pub fn step_param_backward(state: &mut AppState) {
    use_cases::curve::step_param_backward(state);
}
