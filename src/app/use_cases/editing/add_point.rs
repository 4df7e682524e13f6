//! Use-Case: Neuen Kontrollpunkt am Ende anhängen.

use crate::app::status::StatusMessage;
use crate::app::AppState;
use crate::core::EditError;

/// Hängt einen Punkt an der gegebenen Position an.
///
/// Die Selektion bleibt unverändert; ein angehängter Punkt wird nicht gegriffen.
pub fn add_point_at_position(state: &mut AppState, pos: glam::Vec2) -> Result<(), EditError> {
    let index = state.session.add_point(pos)?;
    state.status.push(StatusMessage::NewControlPoint(index));
    log::info!(
        "Kontrollpunkt {} an ({:.3}, {:.3}) angehängt, {} Knoten",
        index,
        pos.x,
        pos.y,
        state.session.knots().len()
    );
    Ok(())
}
