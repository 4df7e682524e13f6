//! Geklemmter, offen-uniformer Knotenvektor mit inkrementellem Neuaufbau.
//!
//! Der Vektor wird nie frisch berechnet, sondern in zwei Phasen gepflegt:
//! 1. Klemmen anpassen (nur bei Ordnungswechsel): je ein `0.0`/`1.0` an den
//!    Enden hinzufügen bzw. entfernen.
//! 2. Innere Knoten einfügen und überzählige Einträge am hinteren Ende löschen.
//!
//! Die eingefügten Werte hängen vom jeweils aktuellen Zustand des Vektors ab;
//! die Reihenfolge der Schritte bestimmt daher die exakten Werte.

use super::EditError;

/// Nicht-fallende Knotenfolge der Länge `point_count + order + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector {
    knots: Vec<f32>,
}

impl KnotVector {
    /// Toleranz für den Abstand benachbarter innerer Knoten.
    const STEP_EPSILON: f32 = 1e-5;

    /// Nur die Klemmen: `order` Nullen gefolgt von `order` Einsen.
    pub fn clamped(order: usize) -> Self {
        let mut knots = vec![0.0; order];
        knots.resize(2 * order, 1.0);
        Self { knots }
    }

    /// Klemmen für `order` plus Neuaufbau für `point_count` Punkte.
    pub fn open_uniform(point_count: usize, order: usize) -> Result<Self, EditError> {
        let mut knots = Self::clamped(order);
        knots.rebuild(point_count, order)?;
        Ok(knots)
    }

    /// Erwartete Länge nach einem Neuaufbau.
    pub fn expected_len(point_count: usize, order: usize) -> usize {
        point_count + order + 1
    }

    /// Read-only Sicht auf alle Knoten.
    pub fn as_slice(&self) -> &[f32] {
        &self.knots
    }

    /// Anzahl der Knoten.
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Gibt `true` zurück, wenn keine Knoten vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Iteriert die Knoten in Reihenfolge.
    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.knots.iter()
    }

    /// Phase 1 bei Ordnungs-Erhöhung: `0.0` vorne, `1.0` hinten anfügen.
    pub fn widen_clamps(&mut self) {
        self.knots.insert(0, 0.0);
        self.knots.push(1.0);
    }

    /// Phase 1 bei Ordnungs-Verringerung: je einen Eintrag vorne und hinten entfernen.
    pub fn narrow_clamps(&mut self) {
        if self.knots.len() >= 2 {
            self.knots.remove(0);
            self.knots.pop();
        }
    }

    /// Phase 2: innere Knoten für `point_count` Punkte bei `order` neu aufbauen.
    ///
    /// Für jede Position `p` in `order..=point_count` wird `knots[p - 1] + step`
    /// an Index `p` eingefügt, danach wird an Index `point_count + 1` gelöscht,
    /// bis die Länge `point_count + order + 1` erreicht ist.
    ///
    /// Schlägt ohne Mutation fehl, wenn die Schrittweite
    /// `1 / (point_count - order + 2)` nicht positiv wäre oder die bisherigen
    /// Klemmen nicht zu `order` passen (Ergebnis wäre kein gültiger Vektor).
    pub fn rebuild(&mut self, point_count: usize, order: usize) -> Result<(), EditError> {
        let degenerate = EditError::DegenerateKnotVector { point_count, order };
        if order == 0 || point_count + 2 <= order || self.knots.len() < order {
            return Err(degenerate);
        }

        let mut knots = self.knots.clone();
        let step = 1.0 / (point_count + 2 - order) as f32;
        for p in order..=point_count {
            let value = knots[p - 1] + step;
            knots.insert(p, value);
        }

        let target = Self::expected_len(point_count, order);
        while knots.len() > target {
            knots.remove(point_count + 1);
        }

        if !Self::check(&knots, point_count, order) {
            return Err(degenerate);
        }
        self.knots = knots;
        Ok(())
    }

    /// Zweiphasiger Neuaufbau nach Ordnungs-Erhöhung auf `new_order`.
    pub fn raise_order(&mut self, point_count: usize, new_order: usize) -> Result<(), EditError> {
        self.widen_clamps();
        self.rebuild(point_count, new_order)
    }

    /// Zweiphasiger Neuaufbau nach Ordnungs-Verringerung auf `new_order`.
    pub fn lower_order(&mut self, point_count: usize, new_order: usize) -> Result<(), EditError> {
        self.narrow_clamps();
        self.rebuild(point_count, new_order)
    }

    /// Prüft Länge, Klemmen und den uniformen Abstand der inneren Knoten
    /// gegen `point_count`/`order`.
    pub fn is_consistent(&self, point_count: usize, order: usize) -> bool {
        Self::check(&self.knots, point_count, order)
    }

    fn check(k: &[f32], point_count: usize, order: usize) -> bool {
        if order == 0 || point_count + 2 <= order {
            return false;
        }
        if k.len() != Self::expected_len(point_count, order) {
            return false;
        }

        // Innere Knoten: konstante Schrittweite ab der letzten 0-Klemme.
        // Der Sprung auf die erste 1-Klemme sammelt die Rundungsfehler aller
        // Additionen und bekommt eine mit `point_count` wachsende Toleranz.
        let step = 1.0 / (point_count + 2 - order) as f32;
        let last_gap_tolerance = Self::STEP_EPSILON + (point_count + 1) as f32 * f32::EPSILON;
        let last_gap = k[point_count + 1] - k[point_count];
        k[..order].iter().all(|&v| v == 0.0)
            && k[k.len() - order..].iter().all(|&v| v == 1.0)
            && k[order - 1..=point_count]
                .windows(2)
                .all(|w| (w[1] - w[0] - step).abs() <= Self::STEP_EPSILON)
            && (last_gap - step).abs() <= last_gap_tolerance
    }
}

impl Default for KnotVector {
    fn default() -> Self {
        Self::clamped(2)
    }
}
