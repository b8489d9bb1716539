/// Pure shooter logic.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (plus the rules and, where needed, an RNG handle) and returns a
/// brand-new `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::config::ShooterRules;
use crate::entities::{
    Bullet, GameState, Target, ARENA_HEIGHT, ARENA_WIDTH, BULLET_HEIGHT, BULLET_SPAWN_Y,
    BULLET_WIDTH, BULLET_X_OFFSET, TARGET_HEIGHT, TARGET_SPAWN_Y, TARGET_WIDTH,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh session: player centred, empty field.
pub fn init_state() -> GameState {
    GameState::default()
}

/// Throw the session away and start over.  Same as `init_state`, whatever
/// `state` held.
pub fn reset(_state: &GameState) -> GameState {
    init_state()
}

// ── Collision ────────────────────────────────────────────────────────────────

/// Axis-aligned box test between a target and a bullet's hit box.
pub fn overlaps(target: &Target, bullet: &Bullet) -> bool {
    target.x < bullet.x + BULLET_WIDTH
        && target.x + TARGET_WIDTH > bullet.x
        && target.y < bullet.y + BULLET_HEIGHT
        && target.y + TARGET_HEIGHT > bullet.y
}

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Launch a bullet from the gun.  No cooldown.  After a win this is a no-op
/// unless `rules.fire_after_win` is set.
pub fn fire(state: &GameState, rules: &ShooterRules) -> GameState {
    if state.over && !rules.fire_after_win {
        return state.clone();
    }
    let mut bullets = state.bullets.clone();
    bullets.push(Bullet {
        id: state.next_id,
        x: state.player_x - BULLET_X_OFFSET,
        y: BULLET_SPAWN_Y,
    });
    GameState {
        bullets,
        next_id: state.next_id + 1,
        ..state.clone()
    }
}

// ── Timer-driven transitions (nearly pure — RNG is injected) ─────────────────

/// Drop one target in at a random column above the arena.
pub fn spawn_tick(state: &GameState, rules: &ShooterRules, rng: &mut impl Rng) -> GameState {
    if state.over {
        return state.clone();
    }
    let x = rng.gen_range(0.0..ARENA_WIDTH);
    let mut targets = state.targets.clone();
    targets.push(Target {
        id: state.next_id,
        x,
        y: TARGET_SPAWN_Y,
    });

    // Keep the newest `max_targets`
    if targets.len() > rules.max_targets {
        let excess = targets.len() - rules.max_targets;
        targets.drain(..excess);
    }

    log::debug!("spawned target #{} at x={:.1}", state.next_id, x);
    GameState {
        targets,
        next_id: state.next_id + 1,
        ..state.clone()
    }
}

/// Advance bullets (and falling targets) one step, then test for a hit.
/// Collision is checked against post-move positions.
pub fn physics_tick(state: &GameState, rules: &ShooterRules) -> GameState {
    if state.over {
        return state.clone();
    }

    // ── 1. Move bullets, discard those past the top ──────────────────────────
    let bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .filter_map(|b| {
            let y = b.y - rules.bullet_speed;
            if y <= 0.0 {
                None
            } else {
                Some(Bullet { y, ..b.clone() })
            }
        })
        .collect();

    // ── 2. Move targets, discard those below the floor ───────────────────────
    let targets: Vec<Target> = if rules.target_fall_speed > 0.0 {
        state
            .targets
            .iter()
            .map(|t| Target {
                y: t.y + rules.target_fall_speed,
                ..t.clone()
            })
            .filter(|t| t.y < ARENA_HEIGHT)
            .collect()
    } else {
        state.targets.clone()
    };

    // ── 3. Collision ─────────────────────────────────────────────────────────
    let hit = targets
        .iter()
        .any(|t| bullets.iter().any(|b| overlaps(t, b)));
    if hit {
        log::debug!("target hit, game won");
    }

    GameState {
        targets,
        bullets,
        over: hit,
        ..state.clone()
    }
}
