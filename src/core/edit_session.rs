//! Edit-Session: besitzt Kontrollpolygon und Knotenvektor und hält beide synchron.

use super::{ControlPoint, ControlPolygon, EditError, KnotVector};

/// Exklusiver Besitzer von Polygon und Knotenvektor.
///
/// Jede strukturelle Mutation (Hinzufügen, Einfügen, Löschen, Ordnungswechsel)
/// baut den Knotenvektor anschließend neu auf. Verschieben ändert nur Positionen
/// und lässt die Knoten unberührt.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    polygon: ControlPolygon,
    knots: KnotVector,
}

impl EditSession {
    /// Erstellt eine Session aus einem Polygon und baut den passenden Knotenvektor.
    pub fn from_polygon(polygon: ControlPolygon) -> Result<Self, EditError> {
        let knots = KnotVector::open_uniform(polygon.len(), polygon.order())?;
        Ok(Self { polygon, knots })
    }

    /// Erstellt eine Session aus Punkten und Startordnung.
    pub fn with_points(points: Vec<ControlPoint>, order: usize) -> Result<Self, EditError> {
        Self::from_polygon(ControlPolygon::new(points, order)?)
    }

    /// Das Kontrollpolygon (read-only).
    pub fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    /// Der aktuelle Knotenvektor (read-only).
    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    /// Aktuelle Ordnung.
    pub fn order(&self) -> usize {
        self.polygon.order()
    }

    /// Anzahl der Kontrollpunkte.
    pub fn point_count(&self) -> usize {
        self.polygon.len()
    }

    /// Hängt einen Punkt an und gibt seinen Index zurück.
    pub fn add_point(&mut self, position: ControlPoint) -> Result<usize, EditError> {
        self.transact(|s| {
            let index = s.polygon.add_point(position);
            s.resync_knots()?;
            Ok(index)
        })
    }

    /// Fügt einen Punkt vor `index` ein.
    pub fn insert_point(&mut self, index: usize, position: ControlPoint) -> Result<(), EditError> {
        self.transact(|s| {
            s.polygon.insert_point(index, position)?;
            s.resync_knots()
        })
    }

    /// Löscht den Punkt an `index` und gibt seine Position zurück.
    pub fn delete_point(&mut self, index: usize) -> Result<ControlPoint, EditError> {
        self.transact(|s| {
            let removed = s.polygon.delete_point(index)?;
            s.resync_knots()?;
            Ok(removed)
        })
    }

    /// Verschiebt einen Punkt. Kein Knoten-Neuaufbau.
    pub fn move_point(&mut self, index: usize, position: ControlPoint) -> Result<(), EditError> {
        self.polygon.move_point(index, position)
    }

    /// Hit-Test per achsenparalleler Box (höchster Index gewinnt).
    pub fn find_nearest(&self, position: ControlPoint, radius: f32) -> Option<usize> {
        self.polygon.find_nearest(position, radius)
    }

    /// Erhöht die Ordnung; Klemmen werden vor dem Neuaufbau erweitert.
    pub fn increase_order(&mut self) -> Result<usize, EditError> {
        self.transact(|s| {
            let order = s.polygon.increase_order()?;
            Self::assert_rebuilt(s.knots.raise_order(s.polygon.len(), order))?;
            Ok(order)
        })
    }

    /// Verringert die Ordnung; Klemmen werden vor dem Neuaufbau verkürzt.
    pub fn decrease_order(&mut self) -> Result<usize, EditError> {
        self.transact(|s| {
            let order = s.polygon.decrease_order()?;
            Self::assert_rebuilt(s.knots.lower_order(s.polygon.len(), order))?;
            Ok(order)
        })
    }

    /// Führt eine strukturelle Mutation aus; bei `Err` wird der vorherige
    /// Zustand von Polygon und Knoten wiederhergestellt.
    fn transact<T>(
        &mut self,
        edit: impl FnOnce(&mut Self) -> Result<T, EditError>,
    ) -> Result<T, EditError> {
        let snapshot = self.clone();
        let result = edit(self);
        if result.is_err() {
            *self = snapshot;
        }
        result
    }

    fn resync_knots(&mut self) -> Result<(), EditError> {
        let result = self.knots.rebuild(self.polygon.len(), self.polygon.order());
        Self::assert_rebuilt(result)
    }

    /// Die Polygon-Guards schließen einen degenerierten Knotenvektor aus.
    /// Debug-Builds brechen hart ab, Release-Builds geben den Fehler weiter.
    fn assert_rebuilt(result: Result<(), EditError>) -> Result<(), EditError> {
        debug_assert!(result.is_ok(), "Knotenvektor-Neuaufbau fehlgeschlagen: {result:?}");
        if let Err(e) = &result {
            log::error!("Knotenvektor inkonsistent: {e}");
        }
        result
    }
}

impl Default for EditSession {
    fn default() -> Self {
        let polygon = ControlPolygon::seeded();
        let mut knots = KnotVector::clamped(polygon.order());
        if let Err(e) = knots.rebuild(polygon.len(), polygon.order()) {
            log::error!("Start-Knotenvektor konnte nicht aufgebaut werden: {e}");
        }
        Self { polygon, knots }
    }
}
