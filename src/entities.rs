/// Shooter entity types — pure data, no logic.

// ── Arena geometry ───────────────────────────────────────────────────────────

pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 600.0;

pub const TARGET_WIDTH: f32 = 40.0;
pub const TARGET_HEIGHT: f32 = 30.0;

/// Logical hit box of a bullet. Drawn as a point, collides as a 50×30 box.
pub const BULLET_WIDTH: f32 = 50.0;
pub const BULLET_HEIGHT: f32 = 30.0;

/// Row at which targets appear (just above the visible arena).
pub const TARGET_SPAWN_Y: f32 = -20.0;
/// Row at which bullets leave the gun.
pub const BULLET_SPAWN_Y: f32 = 600.0;
/// Horizontal offset from the player's x to the bullet's left edge.
pub const BULLET_X_OFFSET: f32 = 25.0;

pub const PLAYER_START_X: f32 = 400.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
}

// ── Entities ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl Target {
    pub fn width(&self) -> f32 {
        TARGET_WIDTH
    }

    pub fn height(&self) -> f32 {
        TARGET_HEIGHT
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl Bullet {
    pub fn width(&self) -> f32 {
        BULLET_WIDTH
    }

    pub fn height(&self) -> f32 {
        BULLET_HEIGHT
    }
}

// ── Master game state ────────────────────────────────────────────────────────

/// One shooter session.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player_x: f32,
    /// Oldest first.
    pub targets: Vec<Target>,
    /// Oldest first.
    pub bullets: Vec<Bullet>,
    /// Set once any target/bullet pair overlaps.  Terminal until reset.
    pub over: bool,
    /// Next entity id handed out by spawn or fire.
    pub next_id: u64,
}

impl GameState {
    pub fn status(&self) -> GameStatus {
        if self.over {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            player_x: PLAYER_START_X,
            targets: Vec::new(),
            bullets: Vec::new(),
            over: false,
            next_id: 0,
        }
    }
}
