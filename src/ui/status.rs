//! Text-Ausgabe für Statusmeldungen und Render-Szene.

use crate::app::StatusMessage;
use crate::shared::RenderScene;
use std::io::Write;

/// Schreibt alle Meldungen zeilenweise.
pub fn render_status(out: &mut impl Write, messages: &[StatusMessage]) -> std::io::Result<()> {
    for message in messages {
        writeln!(out, "{message}")?;
    }
    Ok(())
}

/// Schreibt die komplette Szene (Punkte, Selektion, Knoten).
pub fn render_scene(out: &mut impl Write, scene: &RenderScene) -> std::io::Result<()> {
    writeln!(out, "{scene}")
}
