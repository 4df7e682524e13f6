//! Use-Cases für Kurvenparameter: Ordnung, uParam und Zustandsabfrage.

use crate::app::status::StatusMessage;
use crate::app::AppState;
use crate::core::EditError;

/// Erhöht die Ordnung, sofern genügend Punkte vorhanden sind.
pub fn increase_order(state: &mut AppState) -> Result<(), EditError> {
    let order = state.session.increase_order()?;
    log::info!(
        "Ordnung erhöht auf {}, {} Knoten",
        order,
        state.session.knots().len()
    );
    Ok(())
}

/// Verringert die Ordnung, sofern sie größer als 1 ist.
pub fn decrease_order(state: &mut AppState) -> Result<(), EditError> {
    let order = state.session.decrease_order()?;
    log::info!(
        "Ordnung verringert auf {}, {} Knoten",
        order,
        state.session.knots().len()
    );
    Ok(())
}

/// Erhöht uParam bis zur konfigurierten Obergrenze.
pub fn step_param_forward(state: &mut AppState) {
    if state.u_param < state.options.u_param_max {
        state.u_param += 1;
        log::debug!("uParam = {}", state.u_param);
    }
}

/// Verringert uParam bis 0.
pub fn step_param_backward(state: &mut AppState) {
    if state.u_param > 0 {
        state.u_param -= 1;
        log::debug!("uParam = {}", state.u_param);
    }
}

/// Meldet Ordnung und Punktanzahl.
pub fn report_state(state: &mut AppState) {
    let order = state.order();
    let points = state.point_count();
    log::info!("Ordnung: {}, Punkte: {}", order, points);
    state.status.push(StatusMessage::StateReport { order, points });
}
