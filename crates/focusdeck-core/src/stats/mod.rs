//! Focus session statistics.
//!
//! The session log records one increment per completed focus session,
//! keyed by local calendar day; the heatmap is a derived read-side view
//! over it.

mod heatmap;
mod session_log;

pub use heatmap::{window_view, DayCell, Intensity, WINDOW_DAYS};
pub use session_log::SessionLog;
