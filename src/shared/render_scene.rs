//! Render-Szene als expliziter Übergabevertrag zwischen App und Frontend.
//!
//! Lebt im shared-Modul, da `app` sie baut und das Frontend sie konsumiert.

use glam::Vec2;
use std::fmt;

/// Read-only Daten für einen Frame des Frontends.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Kontrollpunkte in Polygon-Reihenfolge
    pub points: Vec<Vec2>,
    /// Aktueller Knotenvektor
    pub knots: Vec<f32>,
    /// Aktuelle B-Spline-Ordnung
    pub order: usize,
    /// Index des selektierten Punkts
    pub selected_index: Option<usize>,
    /// Ob der selektierte Punkt gerade gezogen wird
    pub is_dragging: bool,
    /// Auswertungs-Parameter (Platzhalter, wird nicht ausgewertet)
    pub u_param: u32,
    /// Radius der gezeichneten Punkte
    pub point_radius: f32,
}

impl RenderScene {
    /// Gibt zurück, ob der Punkt an `index` hervorgehoben werden soll.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }
}

impl fmt::Display for RenderScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "order: {}  points: {}  u: {}", self.order, self.points.len(), self.u_param)?;
        for (index, p) in self.points.iter().enumerate() {
            let marker = if self.is_selected(index) { '*' } else { ' ' };
            writeln!(f, "{marker}{index:>3}: ({:.3}, {:.3})", p.x, p.y)?;
        }
        let knots: Vec<String> = self.knots.iter().map(|k| format!("{k:.4}")).collect();
        write!(f, "knots: [{}]", knots.join(", "))
    }
}
