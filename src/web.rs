//! Browser entry point
//!
//! A JavaScript renderer owns the canvas and the animation loop; it calls
//! `tick` once per `requestAnimationFrame` and draws the returned JSON
//! snapshot, with `text` supplying the localized strings. Input events
//! become `start`/`launch`/`skip`/`reset` calls.

use wasm_bindgen::prelude::*;

use crate::audio::WebAudio;
use crate::game::Game;
use crate::persistence::LocalStorageStore;
use crate::settings::Settings;
use crate::sim::{Action, FrameContext, Viewport};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Poop Launcher starting...");
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    /// `settings_json` is optional; bad JSON falls back to defaults
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> WebGame {
        let settings = match settings_json.as_deref().map(Settings::from_json) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                log::warn!("Invalid settings, using defaults: {}", e);
                Settings::default()
            }
            None => Settings::default(),
        };

        let audio = WebAudio::new(&settings.bgm_src, settings.mix_levels(), settings.muted);
        let seed = js_sys::Date::now() as u64;
        WebGame {
            game: Game::new(seed, settings, Box::new(LocalStorageStore), Box::new(audio)),
        }
    }

    /// Advance one frame; returns the snapshot as JSON
    pub fn tick(&mut self, dt_ms: f64, width: f64, height: f64) -> String {
        let frame = FrameContext::new(dt_ms, Viewport::new(width, height));
        let snapshot = self.game.tick(&frame);
        to_json(&snapshot)
    }

    pub fn snapshot(&self) -> String {
        to_json(&self.game.snapshot())
    }

    /// Localized UI strings, scene title and result banner as JSON
    pub fn text(&self) -> String {
        to_json(&self.game.text())
    }

    pub fn start(&mut self) {
        self.game.dispatch(Action::Start);
    }

    pub fn launch(&mut self) {
        self.game.dispatch(Action::Launch);
    }

    pub fn skip(&mut self) {
        self.game.dispatch(Action::Skip);
    }

    pub fn reset(&mut self) {
        self.game.dispatch(Action::Reset);
    }

    /// Returns the new muted state
    pub fn toggle_mute(&mut self) -> bool {
        self.game.toggle_mute()
    }

    /// Returns the new language code ("en"/"ja")
    pub fn toggle_language(&mut self) -> String {
        self.game.toggle_language().as_str().to_string()
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("JSON serialization failed: {}", e);
        "null".to_string()
    })
}
