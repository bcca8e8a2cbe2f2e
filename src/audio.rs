//! Audio cue sink
//!
//! The simulation never synthesizes sound. It notifies an injected sink of
//! fire-and-forget cues; the sink decides how (or whether) to play them.

use serde::{Deserialize, Serialize};

/// Sound effect cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Ball hits paddle
    PaddleBounce,
    /// Ball breaks a brick
    BrickBreak,
    /// Ball hits a side or top wall
    WallBounce,
    /// Ball fell past the paddle
    BallLost,
}

/// Receives cue notifications. Implementations must not block.
pub trait AudioSink {
    /// Play a sound effect
    fn play(&mut self, cue: SoundCue);

    /// Start background music (no-op if already playing)
    fn start_music(&mut self) {}

    /// Stop background music
    fn stop_music(&mut self) {}
}

/// Sink that records cues and music state
#[derive(Debug, Clone, Default)]
pub struct CueLog {
    pub cues: Vec<SoundCue>,
    pub music_playing: bool,
    /// Number of times music was (re)started
    pub music_starts: u32,
    muted: bool,
}

impl CueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute; muted cues are dropped
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn count(&self, cue: SoundCue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }
}

impl AudioSink for CueLog {
    fn play(&mut self, cue: SoundCue) {
        if self.muted {
            return;
        }
        log::trace!("Audio cue: {:?}", cue);
        self.cues.push(cue);
    }

    fn start_music(&mut self) {
        if self.music_playing {
            return;
        }
        log::trace!("Music started");
        self.music_playing = true;
        self.music_starts += 1;
    }

    fn stop_music(&mut self) {
        if self.music_playing {
            log::trace!("Music stopped");
        }
        self.music_playing = false;
    }
}
