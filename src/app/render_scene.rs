//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        points: state.session.polygon().points().to_vec(),
        knots: state.session.knots().as_slice().to_vec(),
        order: state.order(),
        selected_index: state.selection.selected_index,
        is_dragging: state.selection.is_dragging,
        u_param: state.u_param,
        point_radius: state.options.pick_radius,
    }
}
