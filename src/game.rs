//! Game instance: the state machine wired to its collaborators
//!
//! `sim` decides what happens; `Game` turns the resulting events into audio,
//! storage and log side effects. Collaborator failures are logged and dropped
//! so they can never wedge the state machine.

use crate::audio::AudioChannel;
use crate::locale::{FrameText, Language, Locale};
use crate::persistence::ScoreStore;
use crate::settings::Settings;
use crate::sim::{Action, FrameContext, GameEvent, GameState, Snapshot, dispatch, tick};

/// Game instance holding all state
pub struct Game {
    state: GameState,
    settings: Settings,
    locale: Locale,
    store: Box<dyn ScoreStore>,
    audio: Box<dyn AudioChannel>,
}

impl Game {
    /// Create a game, loading the stored best score
    pub fn new(
        seed: u64,
        settings: Settings,
        store: Box<dyn ScoreStore>,
        mut audio: Box<dyn AudioChannel>,
    ) -> Self {
        let best = match store.load_best() {
            Ok(best) => {
                log::info!("Loaded best score: {}m", best);
                best
            }
            Err(e) => {
                log::warn!("Could not load best score, starting fresh: {}", e);
                0
            }
        };

        if let Err(e) = audio.set_muted(settings.muted) {
            log::warn!("Audio mute failed: {}", e);
        }

        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed, best),
            locale: Locale::new(settings.language),
            settings,
            store,
            audio,
        }
    }

    /// Advance one frame and return what to draw
    pub fn tick(&mut self, frame: &FrameContext) -> Snapshot {
        let events = tick(&mut self.state, frame, &self.locale);
        self.handle_events(events);
        self.snapshot()
    }

    /// Apply a player action; actions the current phase ignores are no-ops
    pub fn dispatch(&mut self, action: Action) {
        let events = dispatch(&mut self.state, action);
        if events.is_empty() {
            log::debug!("Ignored {:?} during {}", action, self.state.phase.as_str());
            return;
        }
        self.handle_events(events);
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Localized text to draw alongside the snapshot
    pub fn text(&self) -> FrameText {
        self.locale.frame_text(&self.snapshot())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Flip mute; returns the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.settings.muted = !self.settings.muted;
        if let Err(e) = self.audio.set_muted(self.settings.muted) {
            log::warn!("Audio mute failed: {}", e);
        }
        log::info!("Muted: {}", self.settings.muted);
        self.settings.muted
    }

    /// Switch between English and Japanese; returns the new language
    pub fn toggle_language(&mut self) -> Language {
        self.settings.language = self.settings.language.toggled();
        self.locale = Locale::new(self.settings.language);
        log::info!("Language: {}", self.settings.language.as_str());
        self.settings.language
    }

    fn handle_events(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::Started => {
                    log::info!("Charging started");
                    if let Err(e) = self.audio.resume() {
                        log::warn!("Audio resume failed: {}", e);
                    }
                }
                GameEvent::Launched {
                    overlap_area,
                    power,
                } => {
                    log::info!("Launched: overlap {:.0}px², power {:.3}", overlap_area, power);
                }
                GameEvent::Landed { distance, outcome } => {
                    log::info!("Landed at {}m ({:?})", distance, outcome);
                }
                GameEvent::NewBest { distance, previous } => {
                    log::info!("New best: {}m (was {}m)", distance, previous);
                    if let Err(e) = self.store.save_best(distance) {
                        log::warn!("Could not save best score: {}", e);
                    }
                }
                GameEvent::BonusEntered { kind } => {
                    log::info!("Bonus scene: {}", kind.as_str());
                    if let Err(e) = self.audio.duck() {
                        log::warn!("Audio duck failed: {}", e);
                    }
                }
                GameEvent::BonusExited { kind, skipped } => {
                    log::debug!("Bonus scene {} ended (skipped: {})", kind.as_str(), skipped);
                    if let Err(e) = self.audio.restore() {
                        log::warn!("Audio restore failed: {}", e);
                    }
                }
                GameEvent::Reset => {
                    log::debug!("Back to title");
                }
            }
        }
    }
}
