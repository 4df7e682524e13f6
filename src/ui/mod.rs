//! Konsolen-Frontend: Eingabezeilen → AppIntents, Szene und Status → Text.

mod console;
/// Status-Ausgabe
///
/// Schreibt Hinweis-Meldungen und die Render-Szene auf einen beliebigen Writer.
pub mod status;

pub use console::{parse_line, ConsoleInput, HELP};
pub use status::{render_scene, render_status};
