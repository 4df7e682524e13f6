//! Use-Case-Funktionen für strukturelle Änderungen am Kontrollpolygon.
//!
//! Aufgeteilt nach Operation:
//! - `add_point` — Punkt anhängen
//! - `insert_point` — Punkt vor dem selektierten einfügen
//! - `delete_point` — Selektierten Punkt löschen
//! - `move_point` — Punkt verschieben (direkt oder per Drag)
mod add_point;
mod delete_point;
mod insert_point;
mod move_point;

pub use add_point::add_point_at_position;
pub use delete_point::delete_selected_point;
pub use insert_point::insert_point_at_selected;
pub use move_point::{drag_selected_to, move_point};
