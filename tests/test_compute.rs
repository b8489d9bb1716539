use portfolio_arcade::compute::*;
use portfolio_arcade::config::ShooterRules;
use portfolio_arcade::entities::*;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rules() -> ShooterRules {
    ShooterRules::default()
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn target(x: f32, y: f32) -> Target {
    Target { id: 100, x, y }
}

fn bullet(x: f32, y: f32) -> Bullet {
    Bullet { id: 200, x, y }
}

fn won_state() -> GameState {
    GameState {
        targets: vec![target(10.0, 580.0)],
        bullets: vec![bullet(20.0, 300.0)],
        over: true,
        next_id: 2,
        ..GameState::default()
    }
}

// ── spawn_tick ────────────────────────────────────────────────────────────────

#[test]
fn spawn_appends_one_target_above_arena() {
    let s = init_state();
    let s2 = spawn_tick(&s, &rules(), &mut seeded_rng());
    assert_eq!(s2.targets.len(), 1);
    let t = &s2.targets[0];
    assert_eq!(t.y, -20.0);
    assert!(t.x >= 0.0 && t.x < 800.0);
}

#[test]
fn spawn_ids_are_unique() {
    let mut rng = seeded_rng();
    let mut s = init_state();
    for _ in 0..5 {
        s = spawn_tick(&s, &rules(), &mut rng);
        s = fire(&s, &rules());
    }
    let mut ids: Vec<u64> = s.targets.iter().map(|t| t.id).collect();
    ids.extend(s.bullets.iter().map(|b| b.id));
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

#[test]
fn spawn_keeps_newest_when_over_cap() {
    let r = ShooterRules {
        max_targets: 3,
        ..rules()
    };
    let mut rng = seeded_rng();
    let mut s = init_state();
    for _ in 0..5 {
        s = spawn_tick(&s, &r, &mut rng);
    }
    let ids: Vec<u64> = s.targets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn spawn_is_noop_after_win() {
    let s = won_state();
    let s2 = spawn_tick(&s, &rules(), &mut seeded_rng());
    assert_eq!(s2, s);
}

#[test]
fn spawn_does_not_mutate_original() {
    let s = init_state();
    let _ = spawn_tick(&s, &rules(), &mut seeded_rng());
    assert!(s.targets.is_empty());
}

// ── fire ──────────────────────────────────────────────────────────────────────

#[test]
fn fire_adds_bullet_at_gun() {
    let s = init_state();
    let s2 = fire(&s, &rules());
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].x, 375.0);
    assert_eq!(s2.bullets[0].y, 600.0);
}

#[test]
fn fire_has_no_cooldown() {
    let mut s = init_state();
    for _ in 0..10 {
        s = fire(&s, &rules());
    }
    assert_eq!(s.bullets.len(), 10);
}

#[test]
fn fire_is_gated_after_win() {
    let s = won_state();
    let s2 = fire(&s, &rules());
    assert_eq!(s2.bullets.len(), 1);
}

#[test]
fn fire_after_win_when_allowed() {
    let r = ShooterRules {
        fire_after_win: true,
        ..rules()
    };
    let s2 = fire(&won_state(), &r);
    assert_eq!(s2.bullets.len(), 2);
    assert!(s2.over);
}

// ── physics_tick — bullets ────────────────────────────────────────────────────

#[test]
fn physics_bullet_climbs_ten() {
    let s = GameState {
        bullets: vec![bullet(100.0, 15.0)],
        ..GameState::default()
    };
    let s2 = physics_tick(&s, &rules());
    assert_eq!(s2.bullets.len(), 1);
    assert_eq!(s2.bullets[0].y, 5.0);
}

#[test]
fn physics_bullet_removed_at_top() {
    let s = GameState {
        bullets: vec![bullet(100.0, 5.0), bullet(100.0, 10.0)],
        ..GameState::default()
    };
    let s2 = physics_tick(&s, &rules());
    // 5 → -5 and 10 → 0 are both gone
    assert!(s2.bullets.is_empty());
}

#[test]
fn physics_keeps_order() {
    let s = GameState {
        bullets: vec![
            Bullet { id: 1, x: 0.0, y: 300.0 },
            Bullet { id: 2, x: 0.0, y: 5.0 },
            Bullet { id: 3, x: 0.0, y: 200.0 },
        ],
        ..GameState::default()
    };
    let s2 = physics_tick(&s, &rules());
    let ids: Vec<u64> = s2.bullets.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

// ── physics_tick — targets ────────────────────────────────────────────────────

#[test]
fn physics_targets_parked_by_default() {
    let s = GameState {
        targets: vec![target(100.0, -20.0)],
        ..GameState::default()
    };
    let s2 = physics_tick(&s, &rules());
    assert_eq!(s2.targets[0].y, -20.0);
}

#[test]
fn physics_targets_fall_and_prune() {
    let r = ShooterRules {
        target_fall_speed: 5.0,
        ..rules()
    };
    let s = GameState {
        targets: vec![target(100.0, -20.0), target(200.0, 596.0)],
        ..GameState::default()
    };
    let s2 = physics_tick(&s, &r);
    assert_eq!(s2.targets.len(), 1);
    assert_eq!(s2.targets[0].y, -15.0);
}

// ── collision ─────────────────────────────────────────────────────────────────

#[test]
fn overlap_example_hits() {
    assert!(overlaps(&target(10.0, 580.0), &bullet(20.0, 590.0)));
}

#[test]
fn overlap_example_misses() {
    assert!(!overlaps(&target(0.0, -20.0), &bullet(375.0, 600.0)));
}

#[test]
fn overlap_edges_touching_do_not_count() {
    // Target's right edge exactly at bullet's left edge
    assert!(!overlaps(&target(0.0, 100.0), &bullet(40.0, 100.0)));
    // Bullet's bottom edge exactly at target's top edge
    assert!(!overlaps(&target(0.0, 130.0), &bullet(0.0, 100.0)));
}

#[test]
fn physics_overlap_sets_over() {
    let s = GameState {
        targets: vec![target(10.0, 580.0)],
        bullets: vec![bullet(20.0, 590.0)],
        ..GameState::default()
    };
    let s2 = physics_tick(&s, &rules());
    assert!(s2.over);
    // Hits leave both entities in place
    assert_eq!(s2.targets.len(), 1);
    assert_eq!(s2.bullets.len(), 1);
}

#[test]
fn physics_no_overlap_keeps_playing() {
    let s = GameState {
        targets: vec![target(0.0, -20.0)],
        bullets: vec![bullet(375.0, 600.0)],
        ..GameState::default()
    };
    let s2 = physics_tick(&s, &rules());
    assert!(!s2.over);
}

#[test]
fn physics_collision_uses_post_move_position() {
    // Before the move the boxes are apart (bullet top 640 vs target bottom 610);
    // after it the bullet sits at 600 and overlaps.
    let s = GameState {
        targets: vec![target(10.0, 580.0)],
        bullets: vec![bullet(20.0, 610.0)],
        ..GameState::default()
    };
    assert!(!overlaps(&s.targets[0], &s.bullets[0]));
    let s2 = physics_tick(&s, &rules());
    assert!(s2.over);

    // A bullet that leaves the arena this step cannot score
    let s = GameState {
        targets: vec![target(0.0, -20.0)],
        bullets: vec![bullet(0.0, 5.0)],
        ..GameState::default()
    };
    assert!(overlaps(&s.targets[0], &s.bullets[0]));
    assert!(!physics_tick(&s, &rules()).over);
}

#[test]
fn physics_is_noop_after_win() {
    let s = won_state();
    let s2 = physics_tick(&s, &rules());
    assert_eq!(s2, s);
}

// ── reset ─────────────────────────────────────────────────────────────────────

#[test]
fn reset_restores_initial_state() {
    let s = won_state();
    let s2 = reset(&s);
    assert_eq!(s2, init_state());
}

#[test]
fn reset_is_idempotent() {
    let once = reset(&won_state());
    let twice = reset(&once);
    assert_eq!(once, twice);
}

// ── properties ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn spawn_always_in_range(seed in any::<u64>(), existing in 0usize..20) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = init_state();
        for _ in 0..existing {
            s = spawn_tick(&s, &rules(), &mut rng);
        }
        let s2 = spawn_tick(&s, &rules(), &mut rng);
        prop_assert_eq!(s2.targets.len(), s.targets.len() + 1);
        let t = s2.targets.last().unwrap();
        prop_assert_eq!(t.y, -20.0);
        prop_assert!(t.x >= 0.0 && t.x < 800.0);
    }

    #[test]
    fn bullets_climb_exactly_ten(ys in proptest::collection::vec(1i32..=600, 0..16)) {
        let s = GameState {
            bullets: ys.iter().enumerate()
                .map(|(i, &y)| Bullet { id: i as u64, x: 375.0, y: y as f32 })
                .collect(),
            ..GameState::default()
        };
        let s2 = physics_tick(&s, &rules());
        let expected: Vec<f32> = ys.iter()
            .map(|&y| y as f32 - 10.0)
            .filter(|&y| y > 0.0)
            .collect();
        let got: Vec<f32> = s2.bullets.iter().map(|b| b.y).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn overlap_matches_swapped_rectangles(
        tx in -100.0f32..900.0, ty in -100.0f32..700.0,
        bx in -100.0f32..900.0, by in -100.0f32..700.0,
    ) {
        // Same four-inequality rule written from the bullet's side
        let swapped = bx < tx + TARGET_WIDTH
            && bx + BULLET_WIDTH > tx
            && by < ty + TARGET_HEIGHT
            && by + BULLET_HEIGHT > ty;
        prop_assert_eq!(overlaps(&target(tx, ty), &bullet(bx, by)), swapped);
    }
}
