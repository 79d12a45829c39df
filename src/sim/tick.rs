//! Per-frame simulation tick and discrete actions
//!
//! `tick` advances time-dependent state once per animation frame; `dispatch`
//! applies one input action. Both are total: an action a phase does not handle
//! is a no-op that returns no events.

use serde::{Deserialize, Serialize};

use super::launch::compute_launch;
use super::projectile::{Projectile, StepResult};
use super::state::{GameEvent, GamePhase, GameState, Viewport};
use super::tier::{BonusKind, LinePool, ResultOutcome, classify};

/// Ambient data for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameContext {
    /// Wall-clock time since the previous frame
    pub dt_ms: f64,
    pub viewport: Viewport,
}

impl FrameContext {
    pub fn new(dt_ms: f64, viewport: Viewport) -> Self {
        Self { dt_ms, viewport }
    }
}

/// Discrete player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Ready -> Charging
    Start,
    /// Charging -> Flying
    Launch,
    /// BonusScene -> Result
    Skip,
    /// Result -> Ready
    Reset,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, frame: &FrameContext, lines: &dyn LinePool) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.viewport = frame.viewport;
    state.time_ticks += 1;

    match &mut state.phase {
        GamePhase::Ready | GamePhase::Result => {}

        GamePhase::Charging => {
            state.oscillators.advance(1.0);
        }

        GamePhase::Flying => {
            let Some(projectile) = state.projectile.as_mut() else {
                // Flying always carries a projectile; recover rather than stall
                state.phase = GamePhase::Result;
                return events;
            };

            let step = projectile.step(&frame.viewport);
            state.scroll_offset = projectile.scroll_offset(&frame.viewport);

            if let StepResult::Landed { distance } = step {
                land(state, distance, lines, &mut events);
            }
        }

        GamePhase::BonusScene {
            kind, elapsed_ms, ..
        } => {
            *elapsed_ms += frame.dt_ms.max(0.0);
            if *elapsed_ms >= kind.duration_ms() {
                let kind = *kind;
                exit_bonus(state, kind, false, &mut events);
            }
        }
    }

    events
}

/// Apply one action to the game state
pub fn dispatch(state: &mut GameState, action: Action) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match (&state.phase, action) {
        (GamePhase::Ready, Action::Start) => {
            state.oscillators.reset();
            state.projectile = None;
            state.scroll_offset = 0.0;
            state.phase = GamePhase::Charging;
            events.push(GameEvent::Started);
        }

        (GamePhase::Charging, Action::Launch) => {
            let overlap_area = state.oscillators.overlap_area(&state.viewport);
            let launch = compute_launch(overlap_area);
            state.projectile = Some(Projectile::launch(&state.viewport, &launch));
            state.phase = GamePhase::Flying;
            events.push(GameEvent::Launched {
                overlap_area,
                power: launch.power,
            });
        }

        (GamePhase::BonusScene { kind, .. }, Action::Skip) => {
            let kind = *kind;
            exit_bonus(state, kind, true, &mut events);
        }

        (GamePhase::Result, Action::Reset) => {
            state.projectile = None;
            state.scroll_offset = 0.0;
            state.phase = GamePhase::Ready;
            events.push(GameEvent::Reset);
        }

        // Everything else (e.g. a tap while flying) is ignored
        _ => {}
    }

    events
}

/// Projectile touched down: score it and pick the next phase
fn land(state: &mut GameState, distance: u32, lines: &dyn LinePool, events: &mut Vec<GameEvent>) {
    state.projectile = None;

    let previous = state.score.best_distance;
    if state.score.record(distance) {
        events.push(GameEvent::NewBest { distance, previous });
    }

    let outcome = classify(distance);
    events.push(GameEvent::Landed { distance, outcome });

    match outcome {
        ResultOutcome::Plain => state.phase = GamePhase::Result,
        ResultOutcome::Bonus(kind) => {
            let line = lines.pick_line(kind, &mut state.rng);
            state.phase = GamePhase::BonusScene {
                kind,
                elapsed_ms: 0.0,
                line,
            };
            events.push(GameEvent::BonusEntered { kind });
        }
    }
}

/// Leave a bonus scene by timeout or skip; the line goes with the phase
fn exit_bonus(
    state: &mut GameState,
    kind: BonusKind,
    skipped: bool,
    events: &mut Vec<GameEvent>,
) {
    state.phase = GamePhase::Result;
    events.push(GameEvent::BonusExited { kind, skipped });
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    struct TestLines;

    const WINE: &[&str] = &["Amusing, but hardly transcendent."];
    const OTHER: &[&str] = &["one", "two"];

    impl LinePool for TestLines {
        fn lines(&self, kind: BonusKind) -> &[&'static str] {
            match kind {
                BonusKind::Wine => WINE,
                _ => OTHER,
            }
        }
    }

    fn frame() -> FrameContext {
        FrameContext::new(1000.0 / 60.0, Viewport::new(800.0, 800.0))
    }

    /// Put the state mid-flight just above the ground at a chosen x
    fn about_to_land(state: &mut GameState, x: f64) {
        state.phase = GamePhase::Flying;
        let mut projectile = Projectile::launch(&Viewport::new(800.0, 800.0), &compute_launch(0.0));
        projectile.pos = DVec2::new(x, 690.0);
        projectile.vel = DVec2::new(0.0, 20.0);
        state.projectile = Some(projectile);
    }

    #[test]
    fn test_start_resets_oscillators() {
        let mut state = GameState::new(1, 0);
        state.oscillators.advance(12.0);
        state.scroll_offset = 55.0;

        let events = dispatch(&mut state, Action::Start);
        assert_eq!(events, vec![GameEvent::Started]);
        assert_eq!(state.phase, GamePhase::Charging);
        assert_eq!(state.oscillators.a.angle, 0.0);
        assert_eq!(state.oscillators.b.angle, 0.0);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_charging_advances_and_launch_snapshots_overlap() {
        let mut state = GameState::new(1, 0);
        dispatch(&mut state, Action::Start);
        for _ in 0..25 {
            tick(&mut state, &frame(), &TestLines);
        }
        let expected_area = state.oscillators.overlap_area(&state.viewport);
        let expected = compute_launch(expected_area);

        let events = dispatch(&mut state, Action::Launch);
        assert_eq!(state.phase, GamePhase::Flying);
        assert!(matches!(events[0], GameEvent::Launched { .. }));

        let projectile = state.projectile.as_ref().unwrap();
        assert_eq!(projectile.vel, DVec2::new(expected.vx, expected.vy));
        assert_eq!(projectile.pos, DVec2::new(400.0, 400.0));

        // Oscillators freeze once flying
        let angle = state.oscillators.a.angle;
        tick(&mut state, &frame(), &TestLines);
        assert_eq!(state.oscillators.a.angle, angle);
    }

    #[test]
    fn test_plain_landing_goes_to_result() {
        let mut state = GameState::new(1, 0);
        about_to_land(&mut state, 5000.0);
        let events = tick(&mut state, &frame(), &TestLines);

        assert_eq!(state.phase, GamePhase::Result);
        assert!(state.projectile.is_none());
        assert_eq!(state.score.last_distance, 500);
        assert!(events.contains(&GameEvent::Landed {
            distance: 500,
            outcome: ResultOutcome::Plain
        }));
        assert!(events.contains(&GameEvent::NewBest {
            distance: 500,
            previous: 0
        }));
    }

    #[test]
    fn test_wine_landing_enters_bonus_and_times_out() {
        let mut state = GameState::new(1, 900);
        about_to_land(&mut state, 3000.0);
        let events = tick(&mut state, &frame(), &TestLines);

        assert!(events.contains(&GameEvent::BonusEntered {
            kind: BonusKind::Wine
        }));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::NewBest { .. })));
        match &state.phase {
            GamePhase::BonusScene { kind, line, .. } => {
                assert_eq!(*kind, BonusKind::Wine);
                assert_eq!(line, WINE[0]);
            }
            other => panic!("expected bonus scene, got {:?}", other),
        }

        let step = FrameContext::new(100.0, Viewport::new(800.0, 800.0));
        for _ in 0..49 {
            assert!(tick(&mut state, &step, &TestLines).is_empty());
        }
        assert!(state.phase.bonus_kind().is_some());

        let events = tick(&mut state, &step, &TestLines);
        assert_eq!(
            events,
            vec![GameEvent::BonusExited {
                kind: BonusKind::Wine,
                skipped: false
            }]
        );
        assert_eq!(state.phase, GamePhase::Result);
    }

    #[test]
    fn test_golden_and_diamond_scenes_last_six_seconds() {
        for (x, kind) in [(8250.0, BonusKind::Golden), (9000.0, BonusKind::Diamond)] {
            let mut state = GameState::new(2, 0);
            about_to_land(&mut state, x);
            tick(&mut state, &frame(), &TestLines);
            assert_eq!(state.phase.bonus_kind(), Some(kind));

            let almost = FrameContext::new(5999.0, Viewport::new(800.0, 800.0));
            assert!(tick(&mut state, &almost, &TestLines).is_empty());
            assert_eq!(state.phase.bonus_kind(), Some(kind));

            let last_ms = FrameContext::new(1.0, Viewport::new(800.0, 800.0));
            let events = tick(&mut state, &last_ms, &TestLines);
            assert_eq!(events, vec![GameEvent::BonusExited { kind, skipped: false }]);
            assert_eq!(state.phase, GamePhase::Result);
        }
    }

    #[test]
    fn test_skip_leaves_bonus_early() {
        let mut state = GameState::new(3, 0);
        about_to_land(&mut state, 8250.0);
        tick(&mut state, &frame(), &TestLines);
        assert_eq!(state.phase.bonus_kind(), Some(BonusKind::Golden));

        let events = dispatch(&mut state, Action::Skip);
        assert_eq!(
            events,
            vec![GameEvent::BonusExited {
                kind: BonusKind::Golden,
                skipped: true
            }]
        );
        assert_eq!(state.phase, GamePhase::Result);

        // Timer no longer runs: a long frame leaves Result untouched
        let long = FrameContext::new(60_000.0, Viewport::new(800.0, 800.0));
        assert!(tick(&mut state, &long, &TestLines).is_empty());
        assert_eq!(state.phase, GamePhase::Result);
    }

    #[test]
    fn test_unhandled_actions_are_noops() {
        let mut state = GameState::new(1, 0);
        for action in [Action::Launch, Action::Skip, Action::Reset] {
            assert!(dispatch(&mut state, action).is_empty());
            assert_eq!(state.phase, GamePhase::Ready);
        }

        about_to_land(&mut state, 100.0);
        for action in [Action::Start, Action::Launch, Action::Skip, Action::Reset] {
            assert!(dispatch(&mut state, action).is_empty());
            assert_eq!(state.phase, GamePhase::Flying);
        }
    }

    #[test]
    fn test_reset_returns_to_ready() {
        let mut state = GameState::new(1, 0);
        about_to_land(&mut state, 5000.0);
        tick(&mut state, &frame(), &TestLines);
        assert_eq!(dispatch(&mut state, Action::Reset), vec![GameEvent::Reset]);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_full_session_from_ready_lands() {
        let mut state = GameState::new(9, 0);
        dispatch(&mut state, Action::Start);
        for _ in 0..40 {
            tick(&mut state, &frame(), &TestLines);
        }
        dispatch(&mut state, Action::Launch);

        let mut landed = None;
        for _ in 0..5_000 {
            for event in tick(&mut state, &frame(), &TestLines) {
                if let GameEvent::Landed { distance, .. } = event {
                    landed = Some(distance);
                }
            }
            if landed.is_some() {
                break;
            }
        }
        let distance = landed.expect("projectile should land");
        assert_eq!(state.score.last_distance, distance);
        assert!(state.score.best_distance >= distance);
        match classify(distance) {
            ResultOutcome::Plain => assert_eq!(state.phase, GamePhase::Result),
            ResultOutcome::Bonus(kind) => assert_eq!(state.phase.bonus_kind(), Some(kind)),
        }
    }

    #[test]
    fn test_same_seed_same_lines() {
        let mut s1 = GameState::new(77, 0);
        let mut s2 = GameState::new(77, 0);
        about_to_land(&mut s1, 7250.0);
        about_to_land(&mut s2, 7250.0);
        tick(&mut s1, &frame(), &TestLines);
        tick(&mut s2, &frame(), &TestLines);
        assert_eq!(s1.phase, s2.phase);
    }
}
