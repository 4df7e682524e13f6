/// Auswahlbezogener Anwendungszustand
///
/// Wird bei jeder neuen Drück-Interaktion zurückgesetzt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Index des selektierten Kontrollpunkts
    pub selected_index: Option<usize>,
    /// Ob der selektierte Punkt dem Cursor folgt
    pub is_dragging: bool,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt Selektion und Drag auf.
    pub fn reset(&mut self) {
        self.selected_index = None;
        self.is_dragging = false;
    }

    /// Index des gezogenen Punkts, falls gerade ein Drag läuft.
    pub fn drag_target(&self) -> Option<usize> {
        self.selected_index.filter(|_| self.is_dragging)
    }
}
