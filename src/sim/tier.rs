//! Distance tiers
//!
//! Three independent ladders keyed on landing distance:
//! - bonus scene bands (`classify`), which route into a timed scene
//! - the achievement banner on the result screen (`achievement`)
//! - the result headline (`rank`)
//!
//! The ladders overlap on purpose (830 m is a Diamond scene, a legendary banner
//! and a Diamond headline); each drives a different piece of UI.

use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{LONG_SCENE_MS, SHORT_SCENE_MS};

/// Bonus scene categories, in increasing distance order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    Wine,
    Sapphire,
    Ruby,
    Golden,
    Diamond,
}

impl BonusKind {
    pub const ALL: [BonusKind; 5] = [
        BonusKind::Wine,
        BonusKind::Sapphire,
        BonusKind::Ruby,
        BonusKind::Golden,
        BonusKind::Diamond,
    ];

    /// How long the scene plays before falling back to the result screen
    pub fn duration_ms(&self) -> f64 {
        match self {
            BonusKind::Wine | BonusKind::Sapphire | BonusKind::Ruby => SHORT_SCENE_MS,
            BonusKind::Golden | BonusKind::Diamond => LONG_SCENE_MS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BonusKind::Wine => "wine",
            BonusKind::Sapphire => "sapphire",
            BonusKind::Ruby => "ruby",
            BonusKind::Golden => "golden",
            BonusKind::Diamond => "diamond",
        }
    }
}

/// Where a landing sends the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultOutcome {
    Plain,
    Bonus(BonusKind),
}

/// Map a landing distance (metres) to its outcome
///
/// Bands are inclusive and checked in order.
pub fn classify(distance: u32) -> ResultOutcome {
    let kind = match distance {
        250..=400 => BonusKind::Wine,
        700..=749 => BonusKind::Sapphire,
        750..=819 => BonusKind::Ruby,
        820..=829 => BonusKind::Golden,
        830.. => BonusKind::Diamond,
        _ => return ResultOutcome::Plain,
    };
    ResultOutcome::Bonus(kind)
}

/// Result-screen banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    /// 1000m and beyond
    LegendaryPerfect,
    /// 950m rung
    LegendaryElite,
    /// 830m rung
    Legendary,
    Amazing,
    Excellent,
    Great,
    Good,
}

impl Achievement {
    /// Banner colour (CSS hex)
    pub fn color(&self) -> &'static str {
        match self {
            Achievement::LegendaryPerfect => "#FF1493",
            Achievement::LegendaryElite | Achievement::Legendary => "#9932CC",
            Achievement::Amazing => "#FFD700",
            Achievement::Excellent => "#FF6347",
            Achievement::Great => "#FFD700",
            Achievement::Good => "#32CD32",
        }
    }
}

/// Banner ladder. The three legendary rungs share a text but not a colour.
pub fn achievement(distance: u32) -> Option<Achievement> {
    if distance >= 1000 {
        Some(Achievement::LegendaryPerfect)
    } else if distance >= 950 {
        Some(Achievement::LegendaryElite)
    } else if distance >= 830 {
        Some(Achievement::Legendary)
    } else if distance >= 820 {
        Some(Achievement::Amazing)
    } else if distance >= 800 {
        Some(Achievement::Excellent)
    } else if distance >= 700 {
        Some(Achievement::Great)
    } else if distance >= 600 {
        Some(Achievement::Good)
    } else {
        None
    }
}

/// Result-screen headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRank {
    Perfect,
    Legendary,
    Diamond,
    Golden,
    Excellent,
    Great,
    Good,
}

pub fn rank(distance: u32) -> Option<ScoreRank> {
    match distance {
        1000.. => Some(ScoreRank::Perfect),
        950.. => Some(ScoreRank::Legendary),
        830.. => Some(ScoreRank::Diamond),
        820.. => Some(ScoreRank::Golden),
        800.. => Some(ScoreRank::Excellent),
        700.. => Some(ScoreRank::Great),
        600.. => Some(ScoreRank::Good),
        _ => None,
    }
}

/// Fixed flavor-line pools, one per bonus kind
///
/// The simulation treats pools as opaque; the locale layer owns the text.
pub trait LinePool {
    fn lines(&self, kind: BonusKind) -> &[&'static str];

    /// Uniformly random line from the kind's pool (empty if the pool is empty)
    fn pick_line(&self, kind: BonusKind, rng: &mut Pcg32) -> String {
        self.lines(kind)
            .choose(rng)
            .map(|line| (*line).to_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_classify_examples() {
        assert_eq!(classify(300), ResultOutcome::Bonus(BonusKind::Wine));
        assert_eq!(classify(725), ResultOutcome::Bonus(BonusKind::Sapphire));
        assert_eq!(classify(800), ResultOutcome::Bonus(BonusKind::Ruby));
        assert_eq!(classify(825), ResultOutcome::Bonus(BonusKind::Golden));
        assert_eq!(classify(900), ResultOutcome::Bonus(BonusKind::Diamond));
        assert_eq!(classify(500), ResultOutcome::Plain);
    }

    #[test]
    fn test_classify_band_edges() {
        assert_eq!(classify(249), ResultOutcome::Plain);
        assert_eq!(classify(250), ResultOutcome::Bonus(BonusKind::Wine));
        assert_eq!(classify(400), ResultOutcome::Bonus(BonusKind::Wine));
        assert_eq!(classify(401), ResultOutcome::Plain);
        assert_eq!(classify(699), ResultOutcome::Plain);
        assert_eq!(classify(700), ResultOutcome::Bonus(BonusKind::Sapphire));
        assert_eq!(classify(749), ResultOutcome::Bonus(BonusKind::Sapphire));
        assert_eq!(classify(750), ResultOutcome::Bonus(BonusKind::Ruby));
        assert_eq!(classify(819), ResultOutcome::Bonus(BonusKind::Ruby));
        assert_eq!(classify(820), ResultOutcome::Bonus(BonusKind::Golden));
        assert_eq!(classify(829), ResultOutcome::Bonus(BonusKind::Golden));
        assert_eq!(classify(830), ResultOutcome::Bonus(BonusKind::Diamond));
        assert_eq!(classify(u32::MAX), ResultOutcome::Bonus(BonusKind::Diamond));
    }

    #[test]
    fn test_scene_durations() {
        assert_eq!(BonusKind::Wine.duration_ms(), 5000.0);
        assert_eq!(BonusKind::Sapphire.duration_ms(), 5000.0);
        assert_eq!(BonusKind::Ruby.duration_ms(), 5000.0);
        assert_eq!(BonusKind::Golden.duration_ms(), 6000.0);
        assert_eq!(BonusKind::Diamond.duration_ms(), 6000.0);
    }

    #[test]
    fn test_achievement_ladder() {
        assert_eq!(achievement(1200), Some(Achievement::LegendaryPerfect));
        assert_eq!(achievement(1000), Some(Achievement::LegendaryPerfect));
        assert_eq!(achievement(999), Some(Achievement::LegendaryElite));
        assert_eq!(achievement(960), Some(Achievement::LegendaryElite));
        assert_eq!(achievement(949), Some(Achievement::Legendary));
        assert_eq!(achievement(830), Some(Achievement::Legendary));
        assert_eq!(achievement(825), Some(Achievement::Amazing));
        assert_eq!(achievement(800), Some(Achievement::Excellent));
        assert_eq!(achievement(725), Some(Achievement::Great));
        assert_eq!(achievement(600), Some(Achievement::Good));
        assert_eq!(achievement(599), None);
        // Wine band gets a scene but no banner
        assert_eq!(achievement(300), None);
    }

    #[test]
    fn test_legendary_rungs_stay_distinct() {
        let perfect = achievement(1000).map(|a| a.color());
        let elite = achievement(950).map(|a| a.color());
        let diamond = achievement(830).map(|a| a.color());
        assert_eq!(perfect, Some("#FF1493"));
        assert_eq!(elite, Some("#9932CC"));
        assert_eq!(diamond, elite);
        assert_ne!(achievement(950), achievement(830));
    }

    #[test]
    fn test_rank_ladder() {
        assert_eq!(rank(1000), Some(ScoreRank::Perfect));
        assert_eq!(rank(999), Some(ScoreRank::Legendary));
        assert_eq!(rank(830), Some(ScoreRank::Diamond));
        assert_eq!(rank(820), Some(ScoreRank::Golden));
        assert_eq!(rank(810), Some(ScoreRank::Excellent));
        assert_eq!(rank(700), Some(ScoreRank::Great));
        assert_eq!(rank(650), Some(ScoreRank::Good));
        assert_eq!(rank(10), None);
    }

    struct Pools;

    const WINE_POOL: &[&str] = &["a", "b", "c"];

    impl LinePool for Pools {
        fn lines(&self, kind: BonusKind) -> &[&'static str] {
            match kind {
                BonusKind::Wine => WINE_POOL,
                _ => &[],
            }
        }
    }

    #[test]
    fn test_pick_line_draws_from_pool() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..20 {
            let line = Pools.pick_line(BonusKind::Wine, &mut rng);
            assert!(["a", "b", "c"].contains(&line.as_str()));
        }
        assert_eq!(Pools.pick_line(BonusKind::Ruby, &mut rng), "");
    }

    #[test]
    fn test_pick_line_is_seeded() {
        let mut rng1 = Pcg32::seed_from_u64(42);
        let mut rng2 = Pcg32::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                Pools.pick_line(BonusKind::Wine, &mut rng1),
                Pools.pick_line(BonusKind::Wine, &mut rng2)
            );
        }
    }
}
