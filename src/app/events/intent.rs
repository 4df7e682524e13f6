use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus dem Frontend ohne direkte Mutationslogik.
/// Alle Positionen sind normalisierte Gerätekoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primärtaste gedrückt: Punkt greifen oder neuen Punkt anhängen
    PrimaryPressed { pos: Vec2 },
    /// Sekundärtaste gedrückt: Punkt unter dem Cursor löschen
    SecondaryPressed { pos: Vec2 },
    /// Mittlere Taste gedrückt: neuen Punkt vor dem getroffenen einfügen und ziehen
    MiddlePressed { pos: Vec2 },
    /// Taste losgelassen: Drag beenden, Selektion aufheben
    PointerReleased,
    /// Cursor bewegt: zieht den selektierten Punkt mit
    PointerMoved { pos: Vec2 },

    /// Neuen Punkt am Ende anhängen
    AddPointRequested { pos: Vec2 },
    /// Neuen Punkt vor dem selektierten einfügen
    InsertPointAtSelectedRequested { pos: Vec2 },
    /// Selektierten Punkt löschen
    DeleteSelectedRequested,
    /// Punkt an `index` verschieben
    MovePointRequested { index: usize, pos: Vec2 },
    /// Punkt unter `pos` selektieren (Box-Hit-Test)
    SelectPointRequested { pos: Vec2 },
    /// Selektion aufheben
    ClearSelectionRequested,

    /// Ordnung um 1 erhöhen
    IncreaseOrderRequested,
    /// Ordnung um 1 verringern
    DecreaseOrderRequested,
    /// uParam einen Schritt vorwärts
    ParamStepForwardRequested,
    /// uParam einen Schritt zurück
    ParamStepBackwardRequested,
    /// Ordnung und Punktanzahl melden
    StateQueryRequested,
    /// Anwendung beenden
    ExitRequested,
}
