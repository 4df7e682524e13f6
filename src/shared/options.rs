//! Zentrale Konfiguration für den B-Spline-Editor.
//!
//! `EditorOptions` enthält alle beim Start änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{ControlPolygon, EditError, EditSession};
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Selektion ───────────────────────────────────────────────────────

/// Halbe Kantenlänge der Hit-Box (NDC) und Radius der gezeichneten Punkte.
pub const PICK_RADIUS: f32 = 0.01;

// ── Kurve ───────────────────────────────────────────────────────────

/// Ordnung beim Start.
pub const INITIAL_ORDER: usize = ControlPolygon::DEFAULT_ORDER;
/// Obergrenze für den Auswertungs-Parameter uParam.
pub const U_PARAM_MAX: u32 = 1;

// ── Fenster ─────────────────────────────────────────────────────────

/// Fenstergröße in Pixeln für die Pixel→NDC-Umrechnung.
pub const WINDOW_SIZE: [f32; 2] = [640.0, 640.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle Editor-Optionen.
/// Wird als `bspline_knot_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    /// Hit-Box-Halbgröße für die Punktauswahl (NDC)
    pub pick_radius: f32,
    /// Startordnung der Kurve
    pub initial_order: usize,
    /// Startpunkte des Kontrollpolygons
    #[serde(default = "default_seed_points")]
    pub seed_points: Vec<[f32; 2]>,
    /// Fenstergröße [Breite, Höhe] in Pixeln
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
    /// Maximaler Wert für uParam
    #[serde(default = "default_u_param_max")]
    pub u_param_max: u32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS,
            initial_order: INITIAL_ORDER,
            seed_points: default_seed_points(),
            window_size: WINDOW_SIZE,
            u_param_max: U_PARAM_MAX,
        }
    }
}

/// Serde-Default für `seed_points` (die vier Standard-Startpunkte).
fn default_seed_points() -> Vec<[f32; 2]> {
    ControlPolygon::seed_points()
        .into_iter()
        .map(|p| p.to_array())
        .collect()
}

/// Serde-Default für `window_size`.
fn default_window_size() -> [f32; 2] {
    WINDOW_SIZE
}

/// Serde-Default für `u_param_max`.
fn default_u_param_max() -> u32 {
    U_PARAM_MAX
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    ///
    /// Auch eine lesbare Datei, aus der sich keine Start-Session bauen lässt
    /// (z.B. Startordnung zu groß für die Seed-Punkte), fällt auf die
    /// Standardwerte zurück.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.build_session() {
                    Ok(_) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!(
                            "Optionen in {} ungültig, verwende Standardwerte: {}",
                            path.display(),
                            e
                        );
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bspline_knot_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bspline_knot_editor.toml")
    }

    /// Übernimmt Punkte und Ordnung der Session als neue Startwerte.
    pub fn with_session(&self, session: &EditSession) -> Self {
        Self {
            initial_order: session.order(),
            seed_points: session
                .polygon()
                .points()
                .iter()
                .map(|p| p.to_array())
                .collect(),
            ..self.clone()
        }
    }

    /// Startpunkte als `Vec2`.
    pub fn seed_positions(&self) -> Vec<Vec2> {
        self.seed_points.iter().copied().map(Vec2::from).collect()
    }

    /// Baut die Start-Session aus Seed-Punkten und Startordnung.
    pub fn build_session(&self) -> Result<EditSession, EditError> {
        EditSession::with_points(self.seed_positions(), self.initial_order)
    }

    /// Fenstergröße als `Vec2`.
    pub fn window_size_vec(&self) -> Vec2 {
        Vec2::from(self.window_size)
    }
}
