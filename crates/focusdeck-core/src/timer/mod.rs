mod engine;
mod settings;

pub use engine::{SessionTimer, TimerMode, TimerSnapshot, WarmupToken, WARMUP_DELAY_SECS};
pub use settings::TimerSettings;
