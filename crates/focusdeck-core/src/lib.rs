//! # Focusdeck Core Library
//!
//! Core logic for the Focusdeck productivity widget: a pomodoro-style
//! countdown timer with a breathing warm-up, an ambient sound mixer, a
//! quick to-do list, and a 12-week heatmap of completed focus sessions.
//! The embedding UI is a thin rendering layer over this crate.
//!
//! ## Architecture
//!
//! - **Session Timer**: a caller-driven state machine; the host invokes
//!   `tick()` once per second and owns the one-shot warm-up delay
//! - **Store**: best-effort per-key JSON persistence with silent
//!   fallback to in-memory defaults
//! - **Stats**: append-only per-day session log plus the derived
//!   heatmap window
//! - **Mixer / Audio**: level-triggered ambient playback state behind
//!   an infallible sink trait
//!
//! ## Key Components
//!
//! - [`SessionTimer`]: countdown state machine
//! - [`App`]: host session wiring timer events to stats and sounds
//! - [`StateCell`]: typed persistent state cell
//! - [`window_view`]: heatmap projection over the [`SessionLog`]

pub mod app;
pub mod audio;
pub mod error;
pub mod events;
pub mod mixer;
pub mod stats;
pub mod store;
pub mod theme;
pub mod timer;
pub mod todo;

pub use app::App;
pub use audio::{AmbientTrack, AudioSink, NullSink, SoundId};
pub use error::StoreError;
pub use events::Event;
pub use mixer::{AmbientMixer, Playback};
pub use stats::{window_view, DayCell, Intensity, SessionLog, WINDOW_DAYS};
pub use store::{FileStore, MemStore, StateCell, Store};
pub use theme::Theme;
pub use timer::{SessionTimer, TimerMode, TimerSettings, TimerSnapshot, WarmupToken, WARMUP_DELAY_SECS};
pub use todo::{TodoItem, TodoList};
