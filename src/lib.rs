//! B-Spline Knot Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandOutcome, LoggedCommand, SelectionState,
    StatusLog, StatusMessage,
};
pub use core::{screen_to_ndc, ControlPoint, ControlPolygon, EditError, EditSession, KnotVector};
pub use shared::{EditorOptions, RenderScene};
