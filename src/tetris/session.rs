/// Falling-block game-loop owner: state, RNG and the gravity timer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::compute;
use super::entities::{TetrisState, TetrisStatus};
use crate::config::TetrisRules;
use crate::timer::FixedTimer;

pub struct TetrisLoop<R: Rng = StdRng> {
    state: TetrisState,
    rules: TetrisRules,
    rng: R,
    now_ms: u64,
    gravity: FixedTimer,
}

impl TetrisLoop<StdRng> {
    pub fn seeded(rules: TetrisRules, seed: u64) -> Self {
        Self::new(rules, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(rules: TetrisRules) -> Self {
        Self::new(rules, StdRng::from_entropy())
    }
}

impl<R: Rng> TetrisLoop<R> {
    pub fn new(rules: TetrisRules, mut rng: R) -> Self {
        let state = compute::init_state(&mut rng);
        Self::with_state(rules, state, rng)
    }

    pub fn with_state(rules: TetrisRules, state: TetrisState, rng: R) -> Self {
        let mut gravity = FixedTimer::armed(rules.gravity_interval_ms, 0);
        if state.status == TetrisStatus::GameOver {
            gravity.disarm();
        }
        Self {
            state,
            rules,
            rng,
            now_ms: 0,
            gravity,
        }
    }

    pub fn state(&self) -> &TetrisState {
        &self.state
    }

    pub fn status(&self) -> TetrisStatus {
        self.state.status
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn timer_armed(&self) -> bool {
        self.gravity.is_armed()
    }

    pub fn tick(&mut self, dt_ms: u64) {
        self.now_ms += dt_ms;
        let mut steps = 0u32;
        while self.state.status == TetrisStatus::Playing && self.gravity.is_due(self.now_ms) {
            if steps >= self.rules.max_catch_up {
                let skipped = self.gravity.skip_to(self.now_ms);
                log::warn!("gravity timer fell behind, skipped {} steps", skipped);
                break;
            }
            self.state = compute::gravity_tick(&self.state, &mut self.rng);
            self.gravity.advance();
            steps += 1;
        }
        self.stop_if_over();
    }

    pub fn move_left(&mut self) {
        self.state = compute::move_left(&self.state);
    }

    pub fn move_right(&mut self) {
        self.state = compute::move_right(&self.state);
    }

    pub fn rotate(&mut self) {
        self.state = compute::rotate(&self.state);
    }

    pub fn soft_drop(&mut self) {
        self.state = compute::move_down(&self.state, &mut self.rng);
        self.stop_if_over();
    }

    pub fn hard_drop(&mut self) {
        self.state = compute::hard_drop(&self.state, &mut self.rng);
        self.stop_if_over();
    }

    pub fn reset(&mut self) {
        self.state = compute::reset(&self.state, &mut self.rng);
        self.gravity.rearm(self.now_ms);
        log::debug!("tetris reset at t={}ms", self.now_ms);
    }

    fn stop_if_over(&mut self) {
        if self.state.status == TetrisStatus::GameOver && self.gravity.is_armed() {
            self.gravity.disarm();
        }
    }
}
