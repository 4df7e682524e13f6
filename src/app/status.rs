//! Hinweis-Meldungen für das Frontend (kein Teil des Datenvertrags).

use crate::core::EditError;
use std::fmt;

/// Meldung, die das Frontend dem Benutzer anzeigen soll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Neuer Punkt wurde angehängt oder eingefügt
    NewControlPoint(usize),
    /// Punkt wurde per Klick selektiert
    SelectedControlPoint(usize),
    /// Punkt wurde gelöscht
    DeletedControlPoint(usize),
    /// Ordnungs-Erhöhung abgelehnt
    OrderTooBig,
    /// Ordnungs-Verringerung abgelehnt
    OrderMustBePositive,
    /// Löschen abgelehnt
    TooFewControlPoints,
    /// Antwort auf eine Zustandsabfrage
    StateReport { order: usize, points: usize },
}

impl StatusMessage {
    /// Übersetzt eine abgelehnte Vorbedingung in ihre Meldung.
    ///
    /// Gibt `None` für Fehler zurück, die keine Benutzer-Vorbedingung sind.
    pub fn from_refusal(error: &EditError) -> Option<Self> {
        match error {
            EditError::TooFewPointsForOrder { .. } => Some(Self::TooFewControlPoints),
            EditError::OrderTooLarge { .. } => Some(Self::OrderTooBig),
            EditError::OrderTooSmall => Some(Self::OrderMustBePositive),
            EditError::InvalidIndex { .. } | EditError::DegenerateKnotVector { .. } => None,
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewControlPoint(index) => write!(f, "new control point: {index}"),
            Self::SelectedControlPoint(index) => write!(f, "selected control point: {index}"),
            Self::DeletedControlPoint(index) => write!(f, "deleted control point: {index}"),
            Self::OrderTooBig => write!(f, "order too big for point count"),
            Self::OrderMustBePositive => write!(f, "order must be greater than zero"),
            Self::TooFewControlPoints => write!(f, "too few control points for current order"),
            Self::StateReport { order, points } => {
                write!(f, "order: {order}\nnumber of points: {points}")
            }
        }
    }
}

/// Sammelt Meldungen, bis das Frontend sie abholt.
#[derive(Debug, Default)]
pub struct StatusLog {
    entries: Vec<StatusMessage>,
}

impl StatusLog {
    const MAX_ENTRIES: usize = 100;

    /// Erstellt ein leeres Status-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt eine Meldung hinzu; bei vollem Log fällt die älteste weg.
    pub fn push(&mut self, message: StatusMessage) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push(message);
    }

    /// Entnimmt alle offenen Meldungen in Reihenfolge.
    pub fn drain(&mut self) -> Vec<StatusMessage> {
        std::mem::take(&mut self.entries)
    }

    /// Liefert eine read-only Sicht auf alle offenen Meldungen.
    pub fn entries(&self) -> &[StatusMessage] {
        &self.entries
    }

    /// Letzte offene Meldung.
    pub fn last(&self) -> Option<&StatusMessage> {
        self.entries.last()
    }

    /// Gibt `true` zurück, wenn keine Meldung offen ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
