use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Selektion und Drag-Zustand zurücksetzen, dann Punkt unter `pos` selektieren
    SelectNearestPoint {
        pos: Vec2,
        radius: f32,
        /// Treffer als Statusmeldung ausgeben
        report: bool,
    },
    /// Selektion und Drag-Zustand zurücksetzen
    ClearSelection,
    /// Drag des selektierten Punkts beginnen
    BeginDrag,
    /// Drag beenden
    EndDrag,
    /// Punkt anhängen
    AddPoint { pos: Vec2 },
    /// Punkt vor dem selektierten einfügen
    InsertPointAtSelected { pos: Vec2 },
    /// Selektierten Punkt löschen
    DeleteSelectedPoint,
    /// Punkt an Index verschieben
    MovePoint { index: usize, pos: Vec2 },
    /// Selektierten Punkt während eines Drags verschieben
    DragSelectedTo { pos: Vec2 },
    /// Ordnung erhöhen
    IncreaseOrder,
    /// Ordnung verringern
    DecreaseOrder,
    /// uParam erhöhen (bis `u_param_max`)
    StepParamForward,
    /// uParam verringern (bis 0)
    StepParamBackward,
    /// Ordnung und Punktanzahl als Status melden
    ReportState,
    /// Anwendung beenden
    RequestExit,
}
