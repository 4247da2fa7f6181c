use serde::{Deserialize, Serialize};

use crate::audio::SoundId;

/// User-editable countdown durations plus the completion sound choice.
///
/// Field names match the persisted `pomodoro_settings` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Focus duration in minutes.
    #[serde(rename = "focus", default = "default_focus")]
    pub focus_minutes: u32,
    /// Short break duration in minutes.
    #[serde(rename = "short", default = "default_short")]
    pub short_break_minutes: u32,
    /// Long break duration in minutes.
    #[serde(rename = "long", default = "default_long")]
    pub long_break_minutes: u32,
    #[serde(rename = "sound", default)]
    pub sound: SoundId,
}

fn default_focus() -> u32 {
    25
}
fn default_short() -> u32 {
    5
}
fn default_long() -> u32 {
    15
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus(),
            short_break_minutes: default_short(),
            long_break_minutes: default_long(),
            sound: SoundId::default(),
        }
    }
}

impl TimerSettings {
    /// Floor every duration to 1 minute. A zero duration would make the
    /// progress percentage divide by zero, so it is never accepted.
    pub fn sanitized(mut self) -> Self {
        self.focus_minutes = self.focus_minutes.max(1);
        self.short_break_minutes = self.short_break_minutes.max(1);
        self.long_break_minutes = self.long_break_minutes.max(1);
        self
    }
}
