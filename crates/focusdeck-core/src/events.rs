use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerMode;

/// Every timer state change produces an Event.
/// The embedding UI polls commands for events and reacts (sounds, stats).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Start was accepted; the breathing warm-up is counting down.
    WarmupStarted {
        mode: TimerMode,
        delay_secs: u64,
        at: DateTime<Utc>,
    },
    /// Warm-up elapsed; the countdown is now running.
    TimerStarted {
        mode: TimerMode,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        seconds_remaining: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    ModeChanged {
        mode: TimerMode,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// Natural zero-crossing. Emitted at most once per run; the host is
    /// responsible for recording the completion in the session log.
    SessionCompleted {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
}
