//! Game state and core simulation types
//!
//! Everything the state machine mutates lives in one `GameState` aggregate.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::oscillator::OscillatorPair;
use super::projectile::Projectile;
use super::tier::{BonusKind, ResultOutcome};
use crate::consts::*;

/// Screen size reported by the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Landing threshold in screen y
    #[inline]
    pub fn ground_y(&self) -> f64 {
        self.height - GROUND_MARGIN
    }
}

/// Current phase of gameplay
///
/// Per-phase data rides on the variant, so e.g. `Flying` can never carry a
/// bonus kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum GamePhase {
    /// Title screen, waiting for start
    Ready,
    /// Circles pulsing, waiting for launch
    Charging,
    /// Projectile in the air
    Flying,
    /// Timed bonus interlude
    BonusScene {
        kind: BonusKind,
        elapsed_ms: f64,
        /// Flavor text chosen once on entry
        line: String,
    },
    /// Distance and best score shown
    Result,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Ready => "ready",
            GamePhase::Charging => "charging",
            GamePhase::Flying => "flying",
            GamePhase::BonusScene { .. } => "bonus_scene",
            GamePhase::Result => "result",
        }
    }

    pub fn bonus_kind(&self) -> Option<BonusKind> {
        match self {
            GamePhase::BonusScene { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Last and best landing distance (metres)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub last_distance: u32,
    /// Never decreases within a process
    pub best_distance: u32,
}

impl Score {
    pub fn new(best_distance: u32) -> Self {
        Self {
            last_distance: 0,
            best_distance,
        }
    }

    /// Record a landing; returns true on a new best
    pub fn record(&mut self, distance: u32) -> bool {
        self.last_distance = distance;
        if distance > self.best_distance {
            self.best_distance = distance;
            true
        } else {
            false
        }
    }
}

/// Things that happened during a tick or dispatch
///
/// The pure core reports these; the caller turns them into audio, storage
/// and log side effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Launched { overlap_area: f64, power: f64 },
    Landed { distance: u32, outcome: ResultOutcome },
    NewBest { distance: u32, previous: u32 },
    BonusEntered { kind: BonusKind },
    BonusExited { kind: BonusKind, skipped: bool },
    Reset,
}

/// Complete game state, owned exclusively by the state machine
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for the flavor-line RNG
    pub seed: u64,
    /// Flavor-line selection is the only random draw in the core
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub oscillators: OscillatorPair,
    /// Present only while `Flying`
    pub projectile: Option<Projectile>,
    pub score: Score,
    /// Camera x offset while following the projectile
    pub scroll_offset: f64,
    /// Viewport from the most recent tick (launch position depends on it)
    pub viewport: Viewport,
    /// Frames simulated since creation
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed and stored best score
    pub fn new(seed: u64, best_distance: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Ready,
            oscillators: OscillatorPair::default(),
            projectile: None,
            score: Score::new(best_distance),
            scroll_offset: 0.0,
            viewport: Viewport::default(),
            time_ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_ready() {
        let state = GameState::new(1, 420);
        assert_eq!(state.phase, GamePhase::Ready);
        assert!(state.projectile.is_none());
        assert_eq!(state.score, Score::new(420));
    }

    #[test]
    fn test_score_best_never_decreases() {
        let mut score = Score::new(500);
        assert!(!score.record(300));
        assert_eq!(score.best_distance, 500);
        assert_eq!(score.last_distance, 300);
        assert!(!score.record(500));
        assert!(score.record(501));
        assert_eq!(score.best_distance, 501);
    }

    #[test]
    fn test_viewport_ground() {
        let viewport = Viewport::new(1000.0, 700.0);
        assert_eq!(viewport.ground_y(), 600.0);
        assert_eq!(viewport.center(), DVec2::new(500.0, 350.0));
    }

    #[test]
    fn test_phase_serializes_tagged() {
        let phase = GamePhase::BonusScene {
            kind: BonusKind::Ruby,
            elapsed_ms: 0.0,
            line: "hi".into(),
        };
        let json = serde_json::to_value(&phase).unwrap();
        assert_eq!(json["name"], "bonus_scene");
        assert_eq!(json["kind"], "ruby");
        assert_eq!(
            serde_json::to_value(&GamePhase::Flying).unwrap()["name"],
            "flying"
        );
    }
}
