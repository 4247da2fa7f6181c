//! Session timer implementation.
//!
//! The timer is a caller-driven state machine. It owns no threads and no
//! clocks: the host calls `tick()` once per second while the countdown is
//! running, and owns the one-shot warm-up delay via [`WarmupToken`].
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> WarmingUp -> Running -> Idle (pause / reset / natural zero)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut timer = SessionTimer::new(TimerSettings::default(), TimerMode::Focus);
//! timer.start();                       // enters WarmingUp
//! let token = timer.pending_warmup().unwrap();
//! // ...5 seconds later:
//! timer.warmup_elapsed(token);         // enters Running
//! timer.tick();                        // Some(Event::SessionCompleted) at zero
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::settings::TimerSettings;
use crate::events::Event;

/// Fixed breathing warm-up before each countdown, in seconds.
pub const WARMUP_DELAY_SECS: u64 = 5;

/// Which configured duration governs the current countdown.
///
/// Serialized form matches the persisted `pomodoro_mode` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerMode {
    #[serde(rename = "focus")]
    Focus,
    #[serde(rename = "short")]
    ShortBreak,
    #[serde(rename = "long")]
    LongBreak,
}

impl TimerMode {
    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Focus => "Focus",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }
}

/// Handle for a pending warm-up delay.
///
/// Generation-stamped: any reset or mode switch invalidates outstanding
/// tokens, so an already-scheduled delay that fires late is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarmupToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    WarmingUp,
    Running,
}

/// Serializable view of the timer for hosts and widgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub mode: TimerMode,
    pub seconds_remaining: u32,
    pub running: bool,
    pub warming_up: bool,
    pub percent_complete: u32,
}

/// Core countdown state machine.
///
/// `Running` and `WarmingUp` are mutually exclusive by construction:
/// both are projections of a single internal phase.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    settings: TimerSettings,
    mode: TimerMode,
    seconds_remaining: u32,
    phase: Phase,
    /// Current warm-up handle (only while `WarmingUp`).
    warmup: Option<WarmupToken>,
    next_token: u64,
}

impl SessionTimer {
    /// Create an idle timer with a full countdown for `mode`.
    pub fn new(settings: TimerSettings, mode: TimerMode) -> Self {
        let settings = settings.sanitized();
        let seconds_remaining = duration_secs(&settings, mode);
        Self {
            settings,
            mode,
            seconds_remaining,
            phase: Phase::Idle,
            warmup: None,
            next_token: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_warming_up(&self) -> bool {
        self.phase == Phase::WarmingUp
    }

    /// Full countdown length for the current mode, in seconds.
    pub fn total_secs(&self) -> u32 {
        duration_secs(&self.settings, self.mode)
    }

    /// 0..=100 progress through the current countdown. Display-only.
    ///
    /// Durations are floored to one minute at the boundary, so the
    /// denominator is never zero.
    pub fn percent_complete(&self) -> u32 {
        let total = u64::from(self.total_secs());
        let remaining = u64::from(self.seconds_remaining);
        100 - ((remaining * 100 + total / 2) / total) as u32
    }

    /// `MM:SS` text for the remaining time.
    pub fn clock_text(&self) -> String {
        let m = self.seconds_remaining / 60;
        let s = self.seconds_remaining % 60;
        format!("{m:02}:{s:02}")
    }

    /// The token the host must hand back to `warmup_elapsed`, if a
    /// warm-up is pending.
    pub fn pending_warmup(&self) -> Option<WarmupToken> {
        self.warmup
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            seconds_remaining: self.seconds_remaining,
            running: self.is_running(),
            warming_up: self.is_warming_up(),
            percent_complete: self.percent_complete(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin the warm-up. No-op unless idle.
    ///
    /// The host schedules a [`WARMUP_DELAY_SECS`] delay and then calls
    /// [`Self::warmup_elapsed`] with the pending token.
    pub fn start(&mut self) -> Option<Event> {
        if self.phase != Phase::Idle {
            return None;
        }
        self.phase = Phase::WarmingUp;
        self.warmup = Some(self.issue_token());
        Some(Event::WarmupStarted {
            mode: self.mode,
            delay_secs: WARMUP_DELAY_SECS,
            at: Utc::now(),
        })
    }

    /// The warm-up delay for `token` expired. Transitions to `Running`
    /// only if that warm-up is still the current one; a stale token
    /// (cancelled by reset or mode switch) never mutates state.
    pub fn warmup_elapsed(&mut self, token: WarmupToken) -> Option<Event> {
        if self.phase != Phase::WarmingUp || self.warmup != Some(token) {
            return None;
        }
        self.phase = Phase::Running;
        self.warmup = None;
        Some(Event::TimerStarted {
            mode: self.mode,
            duration_secs: self.total_secs(),
            at: Utc::now(),
        })
    }

    /// Stop the countdown, preserving the remaining time.
    pub fn pause(&mut self) -> Option<Event> {
        if self.phase != Phase::Running {
            return None;
        }
        self.phase = Phase::Idle;
        Some(Event::TimerPaused {
            seconds_remaining: self.seconds_remaining,
            at: Utc::now(),
        })
    }

    /// Call once per second while running. Decrements by exactly one;
    /// returns the completion event at the natural zero-crossing, at
    /// most once per run. No-op in any other phase.
    pub fn tick(&mut self) -> Option<Event> {
        if self.phase != Phase::Running {
            return None;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.phase = Phase::Idle;
            return Some(Event::SessionCompleted {
                mode: self.mode,
                at: Utc::now(),
            });
        }
        None
    }

    /// Cancel any warm-up or run and restore the full countdown.
    pub fn reset(&mut self) -> Option<Event> {
        self.phase = Phase::Idle;
        self.warmup = None;
        self.seconds_remaining = self.total_secs();
        Some(Event::TimerReset {
            mode: self.mode,
            at: Utc::now(),
        })
    }

    /// Switch mode, cancelling any warm-up or run. The countdown resets
    /// to the new mode's full duration.
    pub fn set_mode(&mut self, mode: TimerMode) -> Option<Event> {
        self.mode = mode;
        self.phase = Phase::Idle;
        self.warmup = None;
        self.seconds_remaining = self.total_secs();
        Some(Event::ModeChanged {
            mode,
            duration_secs: self.total_secs(),
            at: Utc::now(),
        })
    }

    /// Replace the settings. The countdown snaps to the current mode's
    /// new full duration regardless of phase: an edit while running
    /// restarts the remaining time at the new total. The phase itself
    /// (including a pending warm-up) is untouched.
    pub fn set_settings(&mut self, settings: TimerSettings) {
        self.settings = settings.sanitized();
        self.seconds_remaining = self.total_secs();
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn issue_token(&mut self) -> WarmupToken {
        self.next_token += 1;
        WarmupToken(self.next_token)
    }
}

fn duration_secs(settings: &TimerSettings, mode: TimerMode) -> u32 {
    let minutes = match mode {
        TimerMode::Focus => settings.focus_minutes,
        TimerMode::ShortBreak => settings.short_break_minutes,
        TimerMode::LongBreak => settings.long_break_minutes,
    };
    minutes.saturating_mul(60)
}
