//! Verlauf ausgeführter Commands samt Ergebnis.

use super::{AppCommand, StatusMessage};
use std::collections::VecDeque;

/// Ergebnis eines ausgeführten Commands.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Ausgeführt (auch No-ops ohne Selektion)
    Applied,
    /// Vorbedingung abgelehnt, Zustand unverändert
    Refused(StatusMessage),
    /// Vertragsverletzung, als Fehler an das Frontend weitergereicht
    Failed(String),
}

/// Ein Eintrag im Command-Log.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    pub command: AppCommand,
    pub outcome: CommandOutcome,
}

/// Ringpuffer der zuletzt ausgeführten Commands.
///
/// Bei voller Kapazität fällt jeweils der älteste Eintrag heraus.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
}

impl CommandLog {
    /// Maximale Anzahl gehaltener Einträge.
    pub const CAPACITY: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hält einen Command mit seinem Ergebnis fest.
    pub fn record(&mut self, command: AppCommand, outcome: CommandOutcome) {
        if self.entries.len() >= Self::CAPACITY {
            self.entries.pop_front();
        }
        if let CommandOutcome::Failed(reason) = &outcome {
            log::debug!("Command {:?} fehlgeschlagen: {}", command, reason);
        }
        self.entries.push_back(LoggedCommand { command, outcome });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&LoggedCommand> {
        self.entries.back()
    }

    /// Einträge vom ältesten zum neuesten.
    pub fn iter(&self) -> impl Iterator<Item = &LoggedCommand> {
        self.entries.iter()
    }

    /// Alle abgelehnten Commands in Reihenfolge.
    pub fn refusals(&self) -> impl Iterator<Item = &LoggedCommand> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, CommandOutcome::Refused(_)))
    }
}
