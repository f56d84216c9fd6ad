//! Audio dispatch
//!
//! Turns [`GameEvent`]s into sound effect and loop commands for an
//! [`AudioBackend`]. The crate ships no playback device; the headless binary
//! uses [`LogBackend`].

use crate::settings::Settings;
use crate::sim::GameEvent;

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Jump started
    Jump,
    /// Coin picked up
    CoinCollect,
    /// Reached the flag
    Win,
    /// Hit an enemy or fell out
    Lose,
}

impl SoundEffect {
    /// Asset name of the sound file
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::CoinCollect => "coincollect",
            SoundEffect::Win => "winsound",
            SoundEffect::Lose => "losesound",
        }
    }
}

/// Sounds that repeat until stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopTrack {
    /// Footsteps while the player walks
    Walking,
    BackgroundMusic,
}

impl LoopTrack {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoopTrack::Walking => "walking",
            LoopTrack::BackgroundMusic => "background_music",
        }
    }
}

/// Something that can actually make noise
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
    fn start_loop(&mut self, track: LoopTrack, volume: f32);
    fn stop_loop(&mut self, track: LoopTrack);
}

/// Backend that only logs what it would play
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("play {} at {volume:.2}", effect.as_str());
    }

    fn start_loop(&mut self, track: LoopTrack, volume: f32) {
        log::debug!("start loop {} at {volume:.2}", track.as_str());
    }

    fn stop_loop(&mut self, track: LoopTrack) {
        log::debug!("stop loop {}", track.as_str());
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend = LogBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    music_enabled: bool,
    walking: bool,
    music_playing: bool,
}

impl Default for AudioManager<LogBackend> {
    fn default() -> Self {
        Self::new(LogBackend)
    }
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self::with_settings(backend, &Settings::default())
    }

    pub fn with_settings(backend: B, settings: &Settings) -> Self {
        Self {
            backend,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: settings.muted,
            music_enabled: settings.music_on,
            walking: false,
            music_playing: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Follow the menu music toggle; turning it off stops the music
    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.music_enabled = enabled;
        if !enabled && self.music_playing {
            self.backend.stop_loop(LoopTrack::BackgroundMusic);
            self.music_playing = false;
        }
    }

    pub fn is_walking_loop_active(&self) -> bool {
        self.walking
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    fn effective_volume(&self, channel: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * channel
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume(self.sfx_volume);
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// React to one simulation event
    pub fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Jump => self.play(SoundEffect::Jump),
            GameEvent::CoinCollected { .. } => self.play(SoundEffect::CoinCollect),
            GameEvent::Win => self.play(SoundEffect::Win),
            GameEvent::Lose => self.play(SoundEffect::Lose),
            GameEvent::WalkingStarted => {
                if !self.walking {
                    self.walking = true;
                    let vol = self.effective_volume(self.sfx_volume);
                    self.backend.start_loop(LoopTrack::Walking, vol);
                }
            }
            GameEvent::WalkingStopped => {
                if self.walking {
                    self.walking = false;
                    self.backend.stop_loop(LoopTrack::Walking);
                }
            }
            GameEvent::MusicStarted => {
                // Music keeps playing across rounds; only start it once
                if self.music_enabled && !self.music_playing {
                    self.music_playing = true;
                    let vol = self.effective_volume(self.music_volume);
                    self.backend.start_loop(LoopTrack::BackgroundMusic, vol);
                }
            }
            GameEvent::MusicToggled { on } => self.set_music_enabled(*on),
            GameEvent::PhaseChanged { .. } => {}
        }
    }

    pub fn handle_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.handle(event);
        }
    }
}
