/// Shooter game-loop owner.
///
/// Owns the session state, the RNG and the two fixed-rate timers (spawn and
/// physics).  The host calls `tick` with the elapsed milliseconds since the
/// previous call; every due event is replayed in time order.  Once the game
/// is won both timers are disarmed, so nothing touches the state until
/// `reset`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::compute;
use crate::config::ShooterRules;
use crate::entities::{GameState, GameStatus};
use crate::timer::FixedTimer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Event {
    Spawn,
    Physics,
}

pub struct ArcadeLoop<R: Rng = StdRng> {
    state: GameState,
    rules: ShooterRules,
    rng: R,
    now_ms: u64,
    spawn: FixedTimer,
    physics: FixedTimer,
}

impl ArcadeLoop<StdRng> {
    /// Loop with a deterministic RNG.
    pub fn seeded(rules: ShooterRules, seed: u64) -> Self {
        Self::new(rules, StdRng::seed_from_u64(seed))
    }

    /// Loop seeded from the OS.
    pub fn from_entropy(rules: ShooterRules) -> Self {
        Self::new(rules, StdRng::from_entropy())
    }
}

impl<R: Rng> ArcadeLoop<R> {
    pub fn new(rules: ShooterRules, rng: R) -> Self {
        Self::with_state(rules, compute::init_state(), rng)
    }

    /// Start from an arbitrary state.  Timers are armed unless the state is
    /// already won.
    pub fn with_state(rules: ShooterRules, state: GameState, rng: R) -> Self {
        let mut spawn = FixedTimer::armed(rules.spawn_interval_ms, 0);
        let mut physics = FixedTimer::armed(rules.physics_interval_ms, 0);
        if state.over {
            spawn.disarm();
            physics.disarm();
        }
        Self {
            state,
            rules,
            rng,
            now_ms: 0,
            spawn,
            physics,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Virtual clock, in milliseconds since construction.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Whether any timer is still live.
    pub fn timers_armed(&self) -> bool {
        self.spawn.is_armed() || self.physics.is_armed()
    }

    /// Advance the virtual clock by `dt_ms` and run every event that fell due.
    pub fn tick(&mut self, dt_ms: u64) {
        self.now_ms += dt_ms;
        let now = self.now_ms;
        let cap = self.rules.max_catch_up;
        let mut spawned = 0u32;
        let mut stepped = 0u32;

        while !self.state.over {
            let event = match (self.spawn.is_due(now), self.physics.is_due(now)) {
                (false, false) => break,
                (true, false) => Event::Spawn,
                (false, true) => Event::Physics,
                // Earliest first; spawn wins a tie
                (true, true) => {
                    if self.spawn.next_due() <= self.physics.next_due() {
                        Event::Spawn
                    } else {
                        Event::Physics
                    }
                }
            };

            match event {
                Event::Spawn if spawned >= cap => {
                    let skipped = self.spawn.skip_to(now);
                    log::warn!("spawn timer fell behind, skipped {} events", skipped);
                }
                Event::Spawn => {
                    self.state = compute::spawn_tick(&self.state, &self.rules, &mut self.rng);
                    self.spawn.advance();
                    spawned += 1;
                }
                Event::Physics if stepped >= cap => {
                    let skipped = self.physics.skip_to(now);
                    log::warn!("physics timer fell behind, skipped {} steps", skipped);
                }
                Event::Physics => {
                    self.state = compute::physics_tick(&self.state, &self.rules);
                    self.physics.advance();
                    stepped += 1;
                }
            }
        }

        if self.state.over && self.timers_armed() {
            log::debug!("game won at t={}ms, stopping timers", now);
            self.spawn.disarm();
            self.physics.disarm();
        }
    }

    /// Player pressed shoot.
    pub fn fire(&mut self) {
        self.state = compute::fire(&self.state, &self.rules);
    }

    /// Back to a fresh session; timers restart from the current clock.
    pub fn reset(&mut self) {
        self.state = compute::reset(&self.state);
        self.spawn.rearm(self.now_ms);
        self.physics.rearm(self.now_ms);
        log::debug!("shooter reset at t={}ms", self.now_ms);
    }
}
