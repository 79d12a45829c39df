//! Read-only view of the game for renderers
//!
//! Renderers get an owned copy, never a reference into `GameState`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::Circle;
use super::state::{GamePhase, GameState, Score};
use super::tier::{Achievement, ScoreRank, achievement, rank};

/// Charge circles as drawn while charging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargeView {
    pub circle_a: Circle,
    pub circle_b: Circle,
    pub overlap_area: f64,
}

/// Projectile as drawn while flying
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub x: f64,
    /// Clamped sprite y
    pub display_y: f64,
    /// Physics y
    pub y: f64,
    pub trail: Vec<DVec2>,
    /// Live distance indicator (metres)
    pub distance: u32,
}

/// Bonus scene playback progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneClock {
    pub elapsed_ms: f64,
    pub duration_ms: f64,
    /// 0..=1
    pub progress: f64,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Replaying the same inputs with this seed reproduces the session
    pub seed: u64,
    /// Frames simulated so far (drives idle animations)
    pub ticks: u64,
    pub phase: GamePhase,
    pub score: Score,
    pub charge: Option<ChargeView>,
    pub projectile: Option<ProjectileView>,
    pub scene: Option<SceneClock>,
    pub scroll_offset: f64,
    /// Result headline and banner for the last landing
    pub rank: Option<ScoreRank>,
    pub achievement: Option<Achievement>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let charge = matches!(state.phase, GamePhase::Charging).then(|| {
            let (circle_a, circle_b) = state.oscillators.circles(&state.viewport);
            ChargeView {
                circle_a,
                circle_b,
                overlap_area: circle_a.overlap_area(&circle_b),
            }
        });

        let projectile = state.projectile.as_ref().map(|p| ProjectileView {
            x: p.pos.x,
            display_y: p.display_y(),
            y: p.pos.y,
            trail: p.trail.clone(),
            distance: p.distance(),
        });

        let scene = match &state.phase {
            GamePhase::BonusScene {
                kind, elapsed_ms, ..
            } => {
                let duration_ms = kind.duration_ms();
                Some(SceneClock {
                    elapsed_ms: *elapsed_ms,
                    duration_ms,
                    progress: (elapsed_ms / duration_ms).clamp(0.0, 1.0),
                })
            }
            _ => None,
        };

        let last = state.score.last_distance;
        Self {
            seed: state.seed,
            ticks: state.time_ticks,
            phase: state.phase.clone(),
            score: state.score,
            charge,
            projectile,
            scene,
            scroll_offset: state.scroll_offset,
            rank: rank(last),
            achievement: achievement(last),
        }
    }
}
