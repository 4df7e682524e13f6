//! Use-Case: Punkt-Selektion per Klick.

use crate::app::status::StatusMessage;
use crate::AppState;

/// Setzt Selektion und Drag zurück und selektiert den Punkt unter `pos`.
///
/// Treffer werden per achsenparalleler Box mit Halbgröße `radius` bestimmt;
/// bei Überlappung gewinnt der höchste Index. Ohne Treffer bleibt die
/// Selektion leer.
pub fn select_nearest_point(state: &mut AppState, pos: glam::Vec2, radius: f32, report: bool) {
    state.selection.reset();
    state.selection.selected_index = state.session.find_nearest(pos, radius);

    if let Some(index) = state.selection.selected_index {
        if report {
            state.status.push(StatusMessage::SelectedControlPoint(index));
        }
        log::debug!("Kontrollpunkt {} selektiert", index);
    }
}

/// Hebt Selektion und Drag auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.reset();
}
