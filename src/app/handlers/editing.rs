//! Handler für strukturelle Änderungen und Verschieben von Kontrollpunkten.

use super::report_refusal;
use crate::app::use_cases;
use crate::app::{AppState, CommandOutcome};

/// Hängt einen Punkt an der übergebenen Position an.
pub fn add_point(state: &mut AppState, pos: glam::Vec2) -> anyhow::Result<CommandOutcome> {
    let result = use_cases::editing::add_point_at_position(state, pos);
    report_refusal(state, result)
}

/// Fügt einen Punkt vor dem selektierten ein.
pub fn insert_at_selected(state: &mut AppState, pos: glam::Vec2) -> anyhow::Result<CommandOutcome> {
    let result = use_cases::editing::insert_point_at_selected(state, pos);
    report_refusal(state, result)
}

/// Löscht den selektierten Punkt.
pub fn delete_selected(state: &mut AppState) -> anyhow::Result<CommandOutcome> {
    let result = use_cases::editing::delete_selected_point(state);
    report_refusal(state, result)
}

/// Verschiebt den Punkt an `index`.
pub fn move_point(
    state: &mut AppState,
    index: usize,
    pos: glam::Vec2,
) -> anyhow::Result<CommandOutcome> {
    let result = use_cases::editing::move_point(state, index, pos);
    report_refusal(state, result)
}

/// Zieht den selektierten Punkt während eines Drags mit.
pub fn drag_selected(state: &mut AppState, pos: glam::Vec2) -> anyhow::Result<CommandOutcome> {
    let result = use_cases::editing::drag_selected_to(state, pos);
    report_refusal(state, result)
}
