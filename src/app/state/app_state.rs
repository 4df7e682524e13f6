use crate::app::status::StatusLog;
use crate::app::CommandLog;
use crate::core::{EditError, EditSession};
use crate::shared::EditorOptions;

use super::SelectionState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpolygon und Knotenvektor
    pub session: EditSession,
    /// Selection-/Drag-State
    pub selection: SelectionState,
    /// Auswertungs-Parameter (0..=u_param_max), wird nicht ausgewertet
    pub u_param: u32,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Offene Hinweis-Meldungen für das Frontend
    pub status: StatusLog,
    /// Laufzeit-Optionen (Pick-Radius, Startwerte)
    pub options: EditorOptions,
    /// Signalisiert dem Frontend, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Startpolygon und Standardoptionen
    pub fn new() -> Self {
        Self::from_parts(EditSession::default(), EditorOptions::default())
    }

    /// Erstellt einen App-State mit Startpolygon aus den Optionen.
    pub fn with_options(options: EditorOptions) -> Result<Self, EditError> {
        let session = options.build_session()?;
        Ok(Self::from_parts(session, options))
    }

    fn from_parts(session: EditSession, options: EditorOptions) -> Self {
        Self {
            session,
            selection: SelectionState::new(),
            u_param: 0,
            command_log: CommandLog::new(),
            status: StatusLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.session.point_count()
    }

    /// Gibt die aktuelle Ordnung zurück (für UI-Anzeige)
    pub fn order(&self) -> usize {
        self.session.order()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
