//! Kontrollpolygon eines B-Splines: geordnete Kontrollpunkte plus Ordnung.

use super::EditError;
use glam::Vec2;

/// Ein Kontrollpunkt in normalisierten Gerätekoordinaten (konzeptionell [-1, 1]).
pub type ControlPoint = Vec2;

/// Geordnete Kontrollpunkte und die B-Spline-Ordnung (Grad + 1).
///
/// Invariante nach jeder strukturellen Mutation: `len() >= order() - 1`.
/// Einfügen kann die Invariante nicht verletzen; Löschen und Ordnungs-Erhöhung
/// werden vor der Mutation geprüft.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPolygon {
    /// Punkte in Polygon-Reihenfolge (Duplikate erlaubt)
    points: Vec<ControlPoint>,
    /// B-Spline-Ordnung, immer >= 1
    order: usize,
}

impl ControlPolygon {
    /// Standard-Ordnung beim Start.
    pub const DEFAULT_ORDER: usize = 2;

    /// Die vier Startpunkte eines neuen Polygons.
    pub fn seed_points() -> Vec<ControlPoint> {
        vec![
            Vec2::new(-0.5, -0.25),
            Vec2::new(0.0, -0.25),
            Vec2::new(0.0, 0.25),
            Vec2::new(0.5, 0.25),
        ]
    }

    /// Erstellt ein Polygon aus Punkten und Ordnung.
    ///
    /// Schlägt fehl, wenn `order == 0` oder weniger als `order - 1` Punkte vorliegen.
    pub fn new(points: Vec<ControlPoint>, order: usize) -> Result<Self, EditError> {
        if order == 0 {
            return Err(EditError::OrderTooSmall);
        }
        if points.len() + 1 < order {
            return Err(EditError::TooFewPointsForOrder {
                points: points.len(),
                order,
            });
        }
        Ok(Self { points, order })
    }

    /// Startpolygon mit den vier Seed-Punkten bei Ordnung 2.
    pub fn seeded() -> Self {
        Self {
            points: Self::seed_points(),
            order: Self::DEFAULT_ORDER,
        }
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind (nur bei Ordnung 1 möglich).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Aktuelle B-Spline-Ordnung.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Position des Punkts an `index`.
    pub fn point_at(&self, index: usize) -> Option<ControlPoint> {
        self.points.get(index).copied()
    }

    /// Hängt einen Punkt an und gibt seinen Index zurück.
    pub fn add_point(&mut self, position: ControlPoint) -> usize {
        self.points.push(position);
        self.points.len() - 1
    }

    /// Fügt einen Punkt direkt vor `index` ein; der bisherige Inhaber rückt nach rechts.
    pub fn insert_point(&mut self, index: usize, position: ControlPoint) -> Result<(), EditError> {
        self.check_index(index)?;
        self.points.insert(index, position);
        Ok(())
    }

    /// Prüft die Lösch-Vorbedingung `len - 1 > order - 2`.
    pub fn can_delete(&self) -> bool {
        self.points.len() >= self.order
    }

    /// Entfernt den Punkt an `index`.
    ///
    /// Die Mindestanzahl wird vor dem Index geprüft; bei Ablehnung bleibt das Polygon unverändert.
    pub fn delete_point(&mut self, index: usize) -> Result<ControlPoint, EditError> {
        if !self.can_delete() {
            return Err(EditError::TooFewPointsForOrder {
                points: self.points.len(),
                order: self.order,
            });
        }
        self.check_index(index)?;
        Ok(self.points.remove(index))
    }

    /// Überschreibt die Position eines bestehenden Punkts.
    pub fn move_point(&mut self, index: usize, position: ControlPoint) -> Result<(), EditError> {
        self.check_index(index)?;
        self.points[index] = position;
        Ok(())
    }

    /// Sucht den Punkt unter `position` per achsenparalleler Box mit Halbgröße `radius`.
    ///
    /// Liegen mehrere Punkte in der Box, gewinnt der höchste Index.
    pub fn find_nearest(&self, position: ControlPoint, radius: f32) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                (p.x - position.x).abs() <= radius && (p.y - position.y).abs() <= radius
            })
            .map(|(index, _)| index)
            .last()
    }

    /// Prüft die Vorbedingung für `increase_order` (`len > (order - 2) + 1`).
    pub fn can_increase_order(&self) -> bool {
        self.points.len() >= self.order
    }

    /// Erhöht die Ordnung um 1 und gibt die neue Ordnung zurück.
    pub fn increase_order(&mut self) -> Result<usize, EditError> {
        if !self.can_increase_order() {
            return Err(EditError::OrderTooLarge {
                points: self.points.len(),
                order: self.order,
            });
        }
        self.order += 1;
        Ok(self.order)
    }

    /// Verringert die Ordnung um 1. Nur durch die Untergrenze 1 begrenzt, nie durch die Punktanzahl.
    pub fn decrease_order(&mut self) -> Result<usize, EditError> {
        if self.order <= 1 {
            return Err(EditError::OrderTooSmall);
        }
        self.order -= 1;
        Ok(self.order)
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(EditError::InvalidIndex {
                index,
                len: self.points.len(),
            })
        }
    }
}

impl Default for ControlPolygon {
    fn default() -> Self {
        Self::seeded()
    }
}
