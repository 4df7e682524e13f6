//! Handler für Selektions- und Drag-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert den Punkt unter dem Klickpunkt.
pub fn select_nearest_point(state: &mut AppState, pos: glam::Vec2, radius: f32, report: bool) {
    use_cases::selection::select_nearest_point(state, pos, radius, report);
}

/// Hebt Selektion und Drag auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Startet den Drag des selektierten Punkts.
pub fn begin_drag(state: &mut AppState) {
    use_cases::selection::begin_drag(state);
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}
