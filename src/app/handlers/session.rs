//! Handler für Zustandsabfrage und Beenden.

use crate::app::use_cases;
use crate::app::AppState;

/// Meldet Ordnung und Punktanzahl als Status.
pub fn report_state(state: &mut AppState) {
    use_cases::curve::report_state(state);
}

/// Signalisiert dem Frontend das Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
