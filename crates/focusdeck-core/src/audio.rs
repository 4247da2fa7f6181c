//! Audio asset boundary.
//!
//! The core never touches an audio device. It names remote assets and
//! pushes desired playback through [`AudioSink`]; implementations own
//! the actual player and must swallow load/play failures so the state
//! machine proceeds regardless of whether anything was heard.

use serde::{Deserialize, Serialize};

/// Completion sound choice, persisted inside the timer settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundId {
    #[default]
    Chime,
    Bell,
    Soft,
}

impl SoundId {
    pub fn url(&self) -> &'static str {
        match self {
            SoundId::Chime => "https://cdn.pixabay.com/audio/2022/03/15/audio_3fd7ef2f3d.mp3",
            SoundId::Bell => "https://cdn.pixabay.com/audio/2021/09/07/audio_3f8470ca42.mp3",
            SoundId::Soft => "https://cdn.pixabay.com/audio/2022/10/30/audio_31a86c46c5.mp3",
        }
    }
}

/// Fixed ambient track catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbientTrack {
    Rain,
    Cafe,
    Fire,
    Forest,
    Keys,
}

impl AmbientTrack {
    pub const ALL: [AmbientTrack; 5] = [
        AmbientTrack::Rain,
        AmbientTrack::Cafe,
        AmbientTrack::Fire,
        AmbientTrack::Forest,
        AmbientTrack::Keys,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AmbientTrack::Rain => "Rain",
            AmbientTrack::Cafe => "Café",
            AmbientTrack::Fire => "Fire",
            AmbientTrack::Forest => "Forest",
            AmbientTrack::Keys => "ASMR Keys",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            AmbientTrack::Rain => "https://cdn.pixabay.com/audio/2022/03/15/audio_19a2a97156.mp3",
            AmbientTrack::Cafe => "https://cdn.pixabay.com/audio/2022/03/09/audio_0f2a62eb82.mp3",
            AmbientTrack::Fire => {
                "https://cdn.pixabay.com/download/audio/2021/09/16/audio_f2f7b0c9f6.mp3"
            }
            AmbientTrack::Forest => "https://cdn.pixabay.com/audio/2021/08/04/audio_10aee66bd0.mp3",
            AmbientTrack::Keys => "https://cdn.pixabay.com/audio/2022/10/12/audio_1c29a987a1.mp3",
        }
    }
}

/// Playback surface the host implements.
///
/// Infallible on purpose: a blocked asset or dead player is a display
/// problem, not a state problem.
pub trait AudioSink {
    /// Play a one-shot sound (session completion).
    fn play_once(&mut self, url: &str);

    /// Loop `track` continuously at `volume` (1..=100), starting it if
    /// stopped and adjusting the level if already looping.
    fn play_loop(&mut self, track: AmbientTrack, volume: u8);

    /// Stop looping `track`. Idempotent.
    fn stop(&mut self, track: AmbientTrack);
}

/// Sink that plays nothing. Default for headless hosts and tests.
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play_once(&mut self, _url: &str) {}
    fn play_loop(&mut self, _track: AmbientTrack, _volume: u8) {}
    fn stop(&mut self, _track: AmbientTrack) {}
}
