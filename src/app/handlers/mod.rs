//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod curve;
pub mod editing;
pub mod selection;
pub mod session;

use crate::app::status::StatusMessage;
use crate::app::{AppState, CommandOutcome};
use crate::core::EditError;

/// Wandelt abgelehnte Benutzer-Vorbedingungen in Statusmeldungen um.
///
/// Die Operation war ein No-op; nur Vertragsverletzungen (ungültiger Index,
/// degenerierter Knotenvektor) werden als Fehler weitergereicht.
fn report_refusal(
    state: &mut AppState,
    result: Result<(), EditError>,
) -> anyhow::Result<CommandOutcome> {
    let Err(error) = result else {
        return Ok(CommandOutcome::Applied);
    };
    match StatusMessage::from_refusal(&error) {
        Some(message) => {
            log::warn!("Abgelehnt: {}", error);
            state.status.push(message.clone());
            Ok(CommandOutcome::Refused(message))
        }
        None => Err(error.into()),
    }
}
