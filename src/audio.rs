//! Audio cue playback
//!
//! The gameplay core only fires named cues. [`AudioManager`] maps them to
//! sound effects, applies volume settings and hands them to a backend.
//! Playback is fire-and-forget: nothing is reported back.

use crate::settings::Settings;
use crate::sim::Cue;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits brick
    HitBrick,
    /// Ball hits wall or ceiling
    HitBounds,
    /// Ball hits paddle
    HitPaddle,
    /// Ball fell past the paddle
    LostLife,
    /// Last ball lost
    GameOver,
}

impl SoundEffect {
    /// Sound asset played for this effect
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::HitBrick => "assets/HitBrick.mp3",
            SoundEffect::HitBounds => "assets/HitBounds.mp3",
            SoundEffect::HitPaddle => "assets/HitPaddle.mp3",
            SoundEffect::LostLife => "assets/LostLife.mp3",
            SoundEffect::GameOver => "assets/GameOver.mp3",
        }
    }
}

impl From<Cue> for SoundEffect {
    fn from(cue: Cue) -> Self {
        match cue {
            Cue::BrickHit => SoundEffect::HitBrick,
            Cue::BoundsHit => SoundEffect::HitBounds,
            Cue::PaddleHit => SoundEffect::HitPaddle,
            Cue::LostLife => SoundEffect::LostLife,
            Cue::GameOver => SoundEffect::GameOver,
        }
    }
}

/// Something that can play a sound at a volume
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend for headless runs: logs each cue instead of playing it
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("Play {} at volume {:.2}", effect.asset(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend = LogBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager<LogBackend> {
    fn default() -> Self {
        Self::new(LogBackend)
    }
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Take volume and mute preferences from settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// Play every cue in order
    pub fn play_cues<I: IntoIterator<Item = Cue>>(&mut self, cues: I) {
        for cue in cues {
            self.play(cue.into());
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(SoundEffect, f32)>);

    impl AudioBackend for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push((effect, volume));
        }
    }

    #[test]
    fn test_cues_map_to_effects() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.play_cues([Cue::BrickHit, Cue::BoundsHit, Cue::PaddleHit, Cue::LostLife, Cue::GameOver]);
        let played: Vec<SoundEffect> = audio.backend().0.iter().map(|(e, _)| *e).collect();
        assert_eq!(
            played,
            vec![
                SoundEffect::HitBrick,
                SoundEffect::HitBounds,
                SoundEffect::HitPaddle,
                SoundEffect::LostLife,
                SoundEffect::GameOver,
            ]
        );
        assert_eq!(SoundEffect::HitPaddle.asset(), "assets/HitPaddle.mp3");
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.apply_settings(&Settings {
            muted: true,
            ..Settings::default()
        });
        audio.play(SoundEffect::HitBrick);
        assert!(audio.backend().0.is_empty());
    }

    #[test]
    fn test_volume_scaling() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(2.0);
        audio.play(SoundEffect::HitBounds);
        assert_eq!(audio.backend().0, vec![(SoundEffect::HitBounds, 0.5)]);
    }
}
