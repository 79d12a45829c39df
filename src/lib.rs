//! Poop Launcher - overlap two pulsing circles, launch, see how far it flies
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, launch curve, ballistics, phases)
//! - `game`: State machine entry point wired to its collaborators
//! - `persistence`: Best-score storage (memory, file, LocalStorage)
//! - `audio`: Background music ducking/muting
//! - `locale`: English/Japanese strings and flavor-line pools
//! - `settings`: Runtime configuration

pub mod audio;
pub mod error;
pub mod game;
pub mod locale;
pub mod persistence;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::PlatformError;
pub use game::Game;
pub use locale::{Language, Locale};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Oscillating circles ("charge" input)
    pub const CIRCLE_BASE_RADIUS: f64 = 80.0;
    pub const CIRCLE_AMPLITUDE: f64 = 40.0;
    /// Fixed angular speeds (radians per tick), pinned for reproducible difficulty
    pub const CIRCLE_A_SPEED: f64 = 0.08;
    pub const CIRCLE_B_SPEED: f64 = 0.06;
    /// Horizontal offset of each circle centre from the screen centre
    pub const CIRCLE_CENTER_OFFSET: f64 = 75.0;

    /// Launch curve: sqrt(area) / AREA_POWER_DIVISOR, clamped
    pub const AREA_POWER_DIVISOR: f64 = 90.0;
    pub const MIN_LAUNCH_POWER: f64 = 0.3;
    pub const MAX_LAUNCH_POWER: f64 = 2.1;
    /// Diminishing-returns corrections (threshold, slope), ascending
    pub const POWER_CORRECTIONS: [(f64, f64); 4] =
        [(1.3, 0.28), (1.65, 0.15), (1.9, 0.08), (2.05, 0.02)];

    /// Velocity mapping: vx = power * VX_SCALE + VX_BASE (likewise vy)
    pub const VX_SCALE: f64 = 18.0;
    pub const VX_BASE: f64 = 14.0;
    /// Negative is upward in screen space
    pub const VY_SCALE: f64 = -11.0;
    pub const VY_BASE: f64 = -6.0;
    /// Per-tick gravity (pixels/tick²)
    pub const GRAVITY: f64 = 0.19;

    /// Projectile lands once y >= viewport height - GROUND_MARGIN
    pub const GROUND_MARGIN: f64 = 100.0;
    pub const PIXELS_PER_METER: f64 = 10.0;
    /// Sprite is drawn no higher than this (display only)
    pub const DISPLAY_MIN_Y: f64 = 50.0;
    /// Camera keeps the projectile at this fraction of the viewport width
    pub const SCROLL_LEAD_FRACTION: f64 = 1.0 / 3.0;
    /// Trajectory trail points kept for rendering
    pub const TRAIL_LENGTH: usize = 40;

    /// Bonus scene durations
    pub const SHORT_SCENE_MS: f64 = 5000.0;
    pub const LONG_SCENE_MS: f64 = 6000.0;

    /// Viewport used until the first tick reports the real one
    pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;
}

/// Convert a horizontal pixel position to whole metres
#[inline]
pub fn pixels_to_meters(x: f64) -> u32 {
    (x / consts::PIXELS_PER_METER).round().max(0.0) as u32
}
