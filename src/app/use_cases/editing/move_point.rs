//! Use-Case: Kontrollpunkt verschieben.

use crate::app::AppState;
use crate::core::EditError;

/// Verschiebt den Punkt an `index`. Der Knotenvektor bleibt unberührt.
pub fn move_point(state: &mut AppState, index: usize, pos: glam::Vec2) -> Result<(), EditError> {
    state.session.move_point(index, pos)
}

/// Zieht den selektierten Punkt mit, solange ein Drag läuft.
pub fn drag_selected_to(state: &mut AppState, pos: glam::Vec2) -> Result<(), EditError> {
    match state.selection.drag_target() {
        Some(index) => state.session.move_point(index, pos),
        None => Ok(()),
    }
}
