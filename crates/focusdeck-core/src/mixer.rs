//! Ambient mixer state.
//!
//! A track-to-volume mapping with an independent lifecycle from the
//! timer. Playback is a level-triggered function of volume: any track
//! above zero should be looping at that level, anything at zero should
//! be stopped. The rule is re-derived in full on every change rather
//! than issuing edge-triggered play/stop commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::audio::{AmbientTrack, AudioSink};

/// Desired playback for one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Stopped,
    Looping { volume: u8 },
}

/// Volume levels (0..=100) for the fixed track catalog.
///
/// Serializes to the persisted `ambient_volumes` record
/// (`{"rain": 0, "cafe": 40, ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmbientMixer {
    volumes: BTreeMap<AmbientTrack, u8>,
}

impl Default for AmbientMixer {
    fn default() -> Self {
        Self {
            volumes: AmbientTrack::ALL.iter().map(|&t| (t, 0)).collect(),
        }
    }
}

impl AmbientMixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn volume(&self, track: AmbientTrack) -> u8 {
        self.volumes.get(&track).copied().unwrap_or(0)
    }

    /// Set a track's volume, clamped into 0..=100. No failure path.
    pub fn set_volume(&mut self, track: AmbientTrack, volume: u8) {
        self.volumes.insert(track, volume.min(100));
    }

    /// Zero every track.
    pub fn mute_all(&mut self) {
        for level in self.volumes.values_mut() {
            *level = 0;
        }
    }

    /// Level-triggered playback rule for one track.
    pub fn playback(&self, track: AmbientTrack) -> Playback {
        match self.volume(track) {
            0 => Playback::Stopped,
            volume => Playback::Looping { volume },
        }
    }

    /// Push the desired state of every track to the sink.
    pub fn apply(&self, sink: &mut dyn AudioSink) {
        for track in AmbientTrack::ALL {
            match self.playback(track) {
                Playback::Looping { volume } => sink.play_loop(track, volume),
                Playback::Stopped => sink.stop(track),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_silent() {
        let mixer = AmbientMixer::new();
        for track in AmbientTrack::ALL {
            assert_eq!(mixer.playback(track), Playback::Stopped);
        }
    }

    #[test]
    fn volume_is_clamped_to_100() {
        let mut mixer = AmbientMixer::new();
        mixer.set_volume(AmbientTrack::Rain, 250);
        assert_eq!(mixer.volume(AmbientTrack::Rain), 100);
    }

    #[test]
    fn nonzero_volume_means_looping() {
        let mut mixer = AmbientMixer::new();
        mixer.set_volume(AmbientTrack::Cafe, 35);
        assert_eq!(
            mixer.playback(AmbientTrack::Cafe),
            Playback::Looping { volume: 35 }
        );
        mixer.set_volume(AmbientTrack::Cafe, 0);
        assert_eq!(mixer.playback(AmbientTrack::Cafe), Playback::Stopped);
    }

    #[test]
    fn mute_all_stops_everything() {
        let mut mixer = AmbientMixer::new();
        mixer.set_volume(AmbientTrack::Rain, 60);
        mixer.set_volume(AmbientTrack::Fire, 90);
        mixer.mute_all();
        for track in AmbientTrack::ALL {
            assert_eq!(mixer.volume(track), 0);
        }
    }

    #[test]
    fn apply_pushes_level_triggered_state() {
        #[derive(Default)]
        struct Recorder {
            looping: Vec<(AmbientTrack, u8)>,
            stopped: Vec<AmbientTrack>,
        }
        impl AudioSink for Recorder {
            fn play_once(&mut self, _url: &str) {}
            fn play_loop(&mut self, track: AmbientTrack, volume: u8) {
                self.looping.push((track, volume));
            }
            fn stop(&mut self, track: AmbientTrack) {
                self.stopped.push(track);
            }
        }

        let mut mixer = AmbientMixer::new();
        mixer.set_volume(AmbientTrack::Forest, 55);
        let mut sink = Recorder::default();
        mixer.apply(&mut sink);
        assert_eq!(sink.looping, vec![(AmbientTrack::Forest, 55)]);
        assert_eq!(sink.stopped.len(), 4);
    }

    #[test]
    fn volumes_wire_format() {
        let mut mixer = AmbientMixer::new();
        mixer.set_volume(AmbientTrack::Rain, 40);
        let json = serde_json::to_value(&mixer).unwrap();
        assert_eq!(json["rain"], 40);
        assert_eq!(json["keys"], 0);
    }
}
