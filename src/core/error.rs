//! Fehlertypen der Kern-Domäne (Kontrollpolygon und Knotenvektor).

use thiserror::Error;

/// Abgelehnte Edit-Operationen und Konsistenzverletzungen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Index liegt außerhalb des aktuellen Polygons.
    #[error("control point index {index} out of bounds (len {len})")]
    InvalidIndex { index: usize, len: usize },

    /// Löschen würde die Mindestanzahl für die aktuelle Ordnung unterschreiten.
    #[error("too few control points for current order ({points} points, order {order})")]
    TooFewPointsForOrder { points: usize, order: usize },

    /// Ordnung kann bei dieser Punktanzahl nicht erhöht werden.
    #[error("order too big for point count ({points} points, order {order})")]
    OrderTooLarge { points: usize, order: usize },

    /// Ordnung ist bereits minimal (1).
    #[error("order must be greater than zero")]
    OrderTooSmall,

    /// Schrittweite des Knotenvektors wäre null oder negativ.
    #[error("degenerate knot vector: {point_count} points at order {order}")]
    DegenerateKnotVector { point_count: usize, order: usize },
}
