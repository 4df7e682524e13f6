//! Use-Case: Drag-Lifecycle des selektierten Punkts.

use crate::AppState;

/// Startet einen Drag, sofern ein Punkt selektiert ist.
pub fn begin_drag(state: &mut AppState) {
    if state.selection.selected_index.is_some() {
        state.selection.is_dragging = true;
    }
}

/// Beendet einen laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    state.selection.is_dragging = false;
}
