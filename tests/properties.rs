use proptest::prelude::*;

use tron_rider::consts::*;
use tron_rider::sim::{
    Axis, Direction, GamePhase, GameSession, MoveIntent, Nitro, TickInput, spawn_interval_ms, tick,
};
use tron_rider::{MemoryHighScoreStore, Tuning};

fn move_strategy() -> impl Strategy<Value = MoveIntent> {
    prop_oneof![
        Just(MoveIntent::Press(Direction::Up)),
        Just(MoveIntent::Press(Direction::Down)),
        Just(MoveIntent::Press(Direction::Left)),
        Just(MoveIntent::Press(Direction::Right)),
        Just(MoveIntent::Release(Axis::Vertical)),
        Just(MoveIntent::Release(Axis::Horizontal)),
    ]
}

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (
        prop::collection::vec(move_strategy(), 0..3),
        any::<bool>(),
        prop::bool::weighted(0.02),
        prop::bool::weighted(0.05),
    )
        .prop_map(|(moves, boost, pause, start)| TickInput {
            moves,
            boost,
            pause,
            start,
            autopilot: false,
        })
}

proptest! {
    #[test]
    fn fuel_stays_in_tank(requests in prop::collection::vec(any::<bool>(), 0..500)) {
        let mut nitro = Nitro::new(100.0, 1.0, 0.25);
        for wanted in requests {
            let active = nitro.request(wanted);
            prop_assert!(!active || wanted);
            prop_assert!(nitro.fuel() >= 0.0);
            prop_assert!(nitro.fuel() <= 100.0);
        }
    }

    #[test]
    fn spawn_interval_shrinks_with_speed(a in 0.0f32..100.0, b in 0.0f32..100.0, boost: bool) {
        let t = Tuning::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let slow = spawn_interval_ms(lo, boost, &t);
        let fast = spawn_interval_ms(hi, boost, &t);
        prop_assert!(fast <= slow);
        prop_assert!(fast >= t.min_spawn_interval_ms);
    }

    #[test]
    fn session_invariants_hold(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut state = GameSession::new(seed, Tuning::default(), 0);
        let mut store = MemoryHighScoreStore::default();
        let mut last_life: Vec<f32> = Vec::new();

        for input in &inputs {
            let was_dying = state.phase == GamePhase::Dying;
            tick(&mut state, input, SIM_DT_MS, &mut store);

            let fuel = state.nitro.fuel();
            prop_assert!((0.0..=state.nitro.max_fuel()).contains(&fuel));
            prop_assert!(state.base_speed <= state.tuning.max_speed);

            if state.phase == GamePhase::Playing {
                let r = state.player.rect;
                prop_assert!(r.top() >= ROAD_TOP && r.bottom() <= ROAD_BOTTOM);
                prop_assert!(r.left() >= 0.0 && r.right() <= SCREEN_WIDTH);
            }

            for p in &state.particles {
                prop_assert!((0.0..=1.0).contains(&p.life));
            }
            if was_dying && last_life.len() == state.particles.len() {
                for (before, p) in last_life.iter().zip(&state.particles) {
                    prop_assert!(p.life <= *before);
                }
            }
            if state.phase == GamePhase::GameOver {
                prop_assert!(state.particles.iter().all(|p| p.life <= 0.0));
            }
            prop_assert!(state.snapshot().particles.iter().all(|p| p.life > 0.0));
            if matches!(state.phase, GamePhase::Dying | GamePhase::GameOver) {
                prop_assert!(store.score >= state.score);
            }

            last_life = state.particles.iter().map(|p| p.life).collect();
        }
    }

    #[test]
    fn reset_twice_matches(seed in any::<u64>(), ticks in 0usize..300) {
        let mut state = GameSession::new(seed, Tuning::default(), 0);
        let mut store = MemoryHighScoreStore::default();
        tick(&mut state, &TickInput { start: true, ..Default::default() }, SIM_DT_MS, &mut store);
        let ride = TickInput { boost: true, ..Default::default() };
        for _ in 0..ticks {
            tick(&mut state, &ride, SIM_DT_MS, &mut store);
        }

        state.reset();
        let first = state.snapshot();
        state.reset();
        prop_assert_eq!(&first, &state.snapshot());
        prop_assert_eq!(first.score, 0);
        prop_assert_eq!(first.fuel, 1.0);
        prop_assert_eq!(first.base_speed, 5.0);
        prop_assert!(first.obstacles.is_empty());
        prop_assert!(first.particles.is_empty());
    }
}
