//! Use-Case: Neuen Kontrollpunkt vor dem selektierten einfügen.

use crate::app::status::StatusMessage;
use crate::app::AppState;
use crate::core::EditError;

/// Fügt einen Punkt an `pos` direkt vor dem selektierten Punkt ein.
///
/// Der neue Punkt übernimmt den selektierten Index und bleibt selektiert,
/// sodass ein laufender Drag ihn bewegt. Ohne Selektion passiert nichts.
pub fn insert_point_at_selected(state: &mut AppState, pos: glam::Vec2) -> Result<(), EditError> {
    let Some(index) = state.selection.selected_index else {
        log::debug!("Kein Punkt selektiert, nichts eingefügt");
        return Ok(());
    };

    state.session.insert_point(index, pos)?;
    state.status.push(StatusMessage::NewControlPoint(index));
    log::info!(
        "Kontrollpunkt {} an ({:.3}, {:.3}) eingefügt",
        index,
        pos.x,
        pos.y
    );
    Ok(())
}
