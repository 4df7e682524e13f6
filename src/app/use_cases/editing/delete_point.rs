//! Use-Case: Selektierten Kontrollpunkt löschen.

use crate::app::status::StatusMessage;
use crate::app::AppState;
use crate::core::EditError;

/// Löscht den selektierten Punkt.
///
/// Die Mindestanzahl für die aktuelle Ordnung wird zuerst geprüft, auch wenn
/// nichts selektiert ist. Ohne Selektion ist der Aufruf danach ein No-op.
/// Nach dem Löschen ist die Selektion aufgehoben.
pub fn delete_selected_point(state: &mut AppState) -> Result<(), EditError> {
    let polygon = state.session.polygon();
    if !polygon.can_delete() {
        return Err(EditError::TooFewPointsForOrder {
            points: polygon.len(),
            order: polygon.order(),
        });
    }

    let Some(index) = state.selection.selected_index else {
        log::debug!("Nichts zum Löschen selektiert");
        return Ok(());
    };

    state.session.delete_point(index)?;
    state.selection.reset();
    state.status.push(StatusMessage::DeletedControlPoint(index));
    log::info!(
        "Kontrollpunkt {} gelöscht, {} Punkte verbleiben",
        index,
        state.session.point_count()
    );
    Ok(())
}
