//! Poop Launcher entry point
//!
//! Native builds have no window; they play one headless session so the
//! simulation can be exercised from a terminal. The web build is driven from
//! JavaScript through `poop_launcher::web::WebGame`.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use poop_launcher::audio::NullAudio;
    use poop_launcher::persistence::FileStore;
    use poop_launcher::sim::{Action, FrameContext, GamePhase, Viewport};
    use poop_launcher::{Game, Settings};

    /// Frame time of a 60 Hz display
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Flight + longest bonus scene fit comfortably in this many frames
    const MAX_FRAMES: u32 = 10_000;

    fn load_settings() -> Settings {
        let Ok(path) = std::env::var("POOP_LAUNCHER_SETTINGS") else {
            return Settings::default();
        };
        match std::fs::read_to_string(&path).map(|json| Settings::from_json(&json)) {
            Ok(Ok(settings)) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Ok(Err(e)) => {
                log::warn!("Invalid settings in {}, using defaults: {}", path, e);
                Settings::default()
            }
            Err(e) => {
                log::warn!("Could not read {}, using defaults: {}", path, e);
                Settings::default()
            }
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Poop Launcher (headless) starting...");

        let seed: u64 = std::env::args()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(12345);
        let settings = load_settings();
        let audio = NullAudio::new(settings.mix_levels(), settings.muted);
        let store = FileStore::new("poop_launcher_best.json");
        log::info!("Best score file: {}", store.path().display());
        let mut game = Game::new(seed, settings, Box::new(store), Box::new(audio));

        let frame = FrameContext::new(FRAME_MS, Viewport::default());

        // Hold the charge for a seeded number of frames, like a player would
        let mut rng = Pcg32::seed_from_u64(seed);
        let charge_frames = rng.random_range(30..240);

        game.dispatch(Action::Start);
        for _ in 0..charge_frames {
            game.tick(&frame);
        }
        game.dispatch(Action::Launch);

        let mut snapshot = game.snapshot();
        for _ in 0..MAX_FRAMES {
            snapshot = game.tick(&frame);
            if snapshot.phase == GamePhase::Result {
                break;
            }
        }

        if let GamePhase::Result = snapshot.phase {
            log::info!(
                "Session over after {} charge frames: {}m (best {}m)",
                charge_frames,
                snapshot.score.last_distance,
                snapshot.score.best_distance
            );
            if let Some(banner) = game.text().banner {
                log::info!("{}", banner.text);
            }
        } else {
            log::warn!("Session did not finish within {} frames", MAX_FRAMES);
        }

        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Snapshot serialization failed: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry point is `web::wasm_start`
}
