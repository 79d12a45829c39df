//! Background music channel
//!
//! The game only asks three things of audio: start the music after the first
//! user gesture, duck it while a bonus scene plays, and mute it on request.
//! Every call is fire-and-forget from the game's point of view.

use crate::error::Result;

/// Audio collaborator driven by `Game`
pub trait AudioChannel {
    /// Start (or resume) the music; browsers only allow this after a gesture
    fn resume(&mut self) -> Result<()>;
    /// Lower the music under a bonus scene
    fn duck(&mut self) -> Result<()>;
    /// Back to normal volume
    fn restore(&mut self) -> Result<()>;
    fn set_muted(&mut self, muted: bool) -> Result<()>;
}

/// Normal and ducked volume (0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixLevels {
    pub music: f64,
    pub ducked: f64,
}

/// Volume bookkeeping shared by every channel implementation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixState {
    pub levels: MixLevels,
    pub muted: bool,
    pub ducked: bool,
    pub started: bool,
}

impl MixState {
    pub fn new(levels: MixLevels, muted: bool) -> Self {
        Self {
            levels,
            muted,
            ducked: false,
            started: false,
        }
    }

    /// Effective output volume
    pub fn volume(&self) -> f64 {
        if self.muted {
            0.0
        } else if self.ducked {
            self.levels.ducked
        } else {
            self.levels.music
        }
    }

    /// Music should be audible right now
    pub fn should_play(&self) -> bool {
        self.started && !self.muted
    }

    pub fn start(&mut self) {
        self.started = true;
    }

    /// Ducking only applies to audible music
    pub fn duck(&mut self) {
        if !self.muted {
            self.ducked = true;
        }
    }

    /// Always clears the duck, so unmuting later plays at full volume
    pub fn restore(&mut self) {
        self.ducked = false;
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

/// Channel with no output device (native builds, headless runs)
#[derive(Debug, Clone)]
pub struct NullAudio {
    pub mix: MixState,
}

impl NullAudio {
    pub fn new(levels: MixLevels, muted: bool) -> Self {
        Self {
            mix: MixState::new(levels, muted),
        }
    }
}

impl AudioChannel for NullAudio {
    fn resume(&mut self) -> Result<()> {
        self.mix.start();
        log::debug!("audio: resume (volume {:.2})", self.mix.volume());
        Ok(())
    }

    fn duck(&mut self) -> Result<()> {
        self.mix.duck();
        log::debug!("audio: duck (volume {:.2})", self.mix.volume());
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.mix.restore();
        log::debug!("audio: restore (volume {:.2})", self.mix.volume());
        Ok(())
    }

    fn set_muted(&mut self, muted: bool) -> Result<()> {
        self.mix.set_muted(muted);
        log::debug!("audio: muted={}", muted);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::HtmlAudioElement;

    use super::{AudioChannel, MixLevels, MixState};
    use crate::error::{PlatformError, Result};

    /// Looping `<audio>` element for the background track
    pub struct WebAudio {
        element: Option<HtmlAudioElement>,
        mix: MixState,
    }

    impl WebAudio {
        pub fn new(src: &str, levels: MixLevels, muted: bool) -> Self {
            let mix = MixState::new(levels, muted);
            let element = HtmlAudioElement::new_with_src(src).ok();
            match &element {
                Some(el) => {
                    el.set_loop(true);
                    el.set_volume(mix.volume());
                }
                None => log::warn!("Failed to create audio element - music disabled"),
            }
            Self { element, mix }
        }

        /// Push the mix state to the element
        fn apply(&self) -> Result<()> {
            let Some(el) = &self.element else {
                return Err(PlatformError::Unavailable);
            };
            el.set_volume(self.mix.volume());
            if self.mix.should_play() {
                // Autoplay rejections surface through the promise; nothing to wait on
                el.play()
                    .map(|_| ())
                    .map_err(|e| PlatformError::Backend(format!("play: {:?}", e)))
            } else {
                el.pause()
                    .map_err(|e| PlatformError::Backend(format!("pause: {:?}", e)))
            }
        }
    }

    impl AudioChannel for WebAudio {
        fn resume(&mut self) -> Result<()> {
            self.mix.start();
            self.apply()
        }

        fn duck(&mut self) -> Result<()> {
            self.mix.duck();
            self.apply()
        }

        fn restore(&mut self) -> Result<()> {
            self.mix.restore();
            self.apply()
        }

        fn set_muted(&mut self, muted: bool) -> Result<()> {
            self.mix.set_muted(muted);
            self.apply()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: MixLevels = MixLevels {
        music: 0.5,
        ducked: 0.2,
    };

    #[test]
    fn test_duck_and_restore() {
        let mut mix = MixState::new(LEVELS, false);
        mix.start();
        assert_eq!(mix.volume(), 0.5);
        mix.duck();
        assert_eq!(mix.volume(), 0.2);
        mix.restore();
        assert_eq!(mix.volume(), 0.5);
    }

    #[test]
    fn test_muted_ignores_duck() {
        let mut mix = MixState::new(LEVELS, true);
        mix.start();
        mix.duck();
        assert!(!mix.ducked);
        assert_eq!(mix.volume(), 0.0);
        assert!(!mix.should_play());

        mix.set_muted(false);
        assert_eq!(mix.volume(), 0.5);
        assert!(mix.should_play());
    }

    #[test]
    fn test_restore_while_muted_clears_duck() {
        let mut mix = MixState::new(LEVELS, false);
        mix.start();
        mix.duck();
        mix.set_muted(true);
        mix.restore();
        assert_eq!(mix.volume(), 0.0);

        mix.set_muted(false);
        assert!(!mix.ducked);
        assert_eq!(mix.volume(), 0.5);
    }

    #[test]
    fn test_music_waits_for_start() {
        let mix = MixState::new(LEVELS, false);
        assert!(!mix.should_play());
    }

    #[test]
    fn test_null_audio_tracks_mix() {
        let mut audio = NullAudio::new(LEVELS, false);
        audio.resume().unwrap();
        audio.duck().unwrap();
        assert_eq!(audio.mix.volume(), 0.2);
        audio.restore().unwrap();
        audio.set_muted(true).unwrap();
        assert_eq!(audio.mix.volume(), 0.0);
    }
}
