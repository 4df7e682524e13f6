//! Core-Domänentypen: Kontrollpolygon, Knotenvektor, Edit-Session.

pub mod control_polygon;
pub mod edit_session;
pub mod error;
pub mod knot_vector;
pub mod viewport;

pub use control_polygon::{ControlPoint, ControlPolygon};
pub use edit_session::EditSession;
pub use error::EditError;
pub use knot_vector::KnotVector;
pub use viewport::screen_to_ndc;
