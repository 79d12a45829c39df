//! Ballistic flight
//!
//! One explicit Euler step per frame. `pos.y` is the authoritative physics
//! value; `display_y` is only where the sprite gets drawn.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::launch::LaunchVector;
use super::state::Viewport;
use crate::consts::*;
use crate::pixels_to_meters;

/// The launched projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Stored per projectile so future launches may vary it
    pub gravity: f64,
    /// Recent positions for rendering (newest first)
    #[serde(default)]
    pub trail: Vec<DVec2>,
}

/// Outcome of a single flight step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Airborne,
    Landed { distance: u32 },
}

impl Projectile {
    pub fn new(pos: DVec2, launch: &LaunchVector) -> Self {
        Self {
            pos,
            vel: DVec2::new(launch.vx, launch.vy),
            gravity: launch.gravity,
            trail: Vec::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Launch from the viewport centre
    pub fn launch(viewport: &Viewport, launch: &LaunchVector) -> Self {
        Self::new(viewport.center(), launch)
    }

    /// Advance one frame and test for landing
    pub fn step(&mut self, viewport: &Viewport) -> StepResult {
        self.record_trail();

        self.pos.x += self.vel.x;
        self.pos.y += self.vel.y;
        self.vel.y += self.gravity;

        if self.has_landed(viewport) {
            StepResult::Landed {
                distance: self.distance(),
            }
        } else {
            StepResult::Airborne
        }
    }

    /// Near-ground threshold reached
    #[inline]
    pub fn has_landed(&self, viewport: &Viewport) -> bool {
        self.pos.y >= viewport.ground_y()
    }

    /// Horizontal distance in metres
    #[inline]
    pub fn distance(&self) -> u32 {
        pixels_to_meters(self.pos.x)
    }

    /// Sprite y, held below the top edge. Never used for physics.
    #[inline]
    pub fn display_y(&self) -> f64 {
        self.pos.y.max(DISPLAY_MIN_Y)
    }

    /// Camera offset that keeps the projectile a third of the way in
    pub fn scroll_offset(&self, viewport: &Viewport) -> f64 {
        (self.pos.x - viewport.width * SCROLL_LEAD_FRACTION).max(0.0)
    }

    fn record_trail(&mut self) {
        self.trail.insert(0, self.pos);
        self.trail.truncate(TRAIL_LENGTH);
    }
}
