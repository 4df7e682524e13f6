//! Use-Case-Funktionen für Punkt-Selektion und Drag.
//!
//! Aufgeteilt nach Modus:
//! - `pick` — Einzelklick-Selektion per Box-Hit-Test
//! - `drag` — Drag-Lifecycle des selektierten Punkts
mod drag;
mod pick;

pub use drag::{begin_drag, end_drag};
pub use pick::{clear_selection, select_nearest_point};
