//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock reads
//! - Seeded RNG only (flavor-line choice)
//! - No rendering, audio, storage or logging

pub mod geometry;
pub mod launch;
pub mod oscillator;
pub mod projectile;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod tier;

pub use geometry::{Circle, overlap_area, overlap_area_xy};
pub use launch::{LaunchVector, area_power, compute_launch, launch_power};
pub use oscillator::{OscillatorPair, OscillatorState};
pub use projectile::{Projectile, StepResult};
pub use snapshot::{ChargeView, ProjectileView, SceneClock, Snapshot};
pub use state::{GameEvent, GamePhase, GameState, Score, Viewport};
pub use tick::{Action, FrameContext, dispatch, tick};
pub use tier::{
    Achievement, BonusKind, LinePool, ResultOutcome, ScoreRank, achievement, classify, rank,
};
