//! Game state and core simulation types
//!
//! Everything needed for determinism lives here, including the RNG.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::starfield::Star;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Title,
    /// Active gameplay
    Playing,
    /// Run ended by a collision
    GameOver,
}

/// Falling-object behavior profiles
///
/// Replaces the raw 0..=4 type integers of the sprite sheet; the discriminant
/// order still matches the sheet rows, so `index`/`from_index` round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Constant low speed
    Drone,
    /// Constant medium speed
    Raider,
    /// Constant high speed
    Striker,
    /// Starts very slow, gains speed every frame
    Creeper,
    /// Constant, very slow
    Drifter,
}

impl EnemyKind {
    pub const COUNT: u32 = 5;

    /// Initial fall speed, units per frame
    pub fn base_speed(&self) -> f32 {
        match self {
            EnemyKind::Drone => 2.0,
            EnemyKind::Raider => 3.0,
            EnemyKind::Striker => 4.0,
            EnemyKind::Creeper => 0.3,
            EnemyKind::Drifter => 0.5,
        }
    }

    /// Whether this kind gains [`CREEPER_ACCEL`] speed each frame
    pub fn accelerates(&self) -> bool {
        matches!(self, EnemyKind::Creeper)
    }

    /// Position in the spawn rotation and on the sprite sheet
    pub fn index(&self) -> u32 {
        match self {
            EnemyKind::Drone => 0,
            EnemyKind::Raider => 1,
            EnemyKind::Striker => 2,
            EnemyKind::Creeper => 3,
            EnemyKind::Drifter => 4,
        }
    }

    /// Kind at the given rotation index (wraps past [`Self::COUNT`])
    pub fn from_index(index: u32) -> Self {
        match index % Self::COUNT {
            0 => EnemyKind::Drone,
            1 => EnemyKind::Raider,
            2 => EnemyKind::Striker,
            3 => EnemyKind::Creeper,
            _ => EnemyKind::Drifter,
        }
    }

    /// Sprite sheet row (v coordinate) for this kind
    pub fn sprite_row(&self) -> u32 {
        self.index() * 8
    }
}

/// A falling adversary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub x: i32,
    pub y: f32,
    pub radius: f32,
    pub kind: EnemyKind,
    /// Current fall speed; mutated per frame only for accelerating kinds
    pub speed: f32,
}

impl Enemy {
    /// Spawn at the top of the viewport with the kind's base speed
    pub fn spawn(x: i32, kind: EnemyKind) -> Self {
        Self {
            x,
            y: 0.0,
            radius: ENEMY_RADIUS,
            kind,
            speed: kind.base_speed(),
        }
    }

    /// Advance one frame: accelerate (if applicable), then fall
    pub fn advance(&mut self) {
        if self.kind.accelerates() {
            self.speed += CREEPER_ACCEL;
        }
        self.y += self.speed;
    }

    /// True once the enemy has left the bottom of the viewport
    pub fn off_screen(&self) -> bool {
        self.y >= VIEW_HEIGHT as f32
    }
}

/// The player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Horizontal position, always within [0, PLAYER_MAX_X]
    pub x: i32,
    /// Fixed altitude
    pub y: i32,
    pub size: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_Y,
            size: PLAYER_SIZE,
        }
    }
}

impl Player {
    /// Shift by `dx` and clamp to the viewport
    pub fn shift(&mut self, dx: i32) {
        self.x = (self.x + dx).clamp(0, PLAYER_MAX_X);
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Owned RNG; every draw goes through here
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Frames survived this run
    pub score: u32,
    /// Frames since the last spawn
    pub spawn_timer: u32,
    /// Player ship; only meaningful while `phase == Playing`
    pub player: Player,
    /// Live adversaries, insertion order preserved for render stability
    pub enemies: Vec<Enemy>,
    /// Background stars, fixed pool created once and reused
    pub stars: Vec<Star>,
    /// Confirm level seen last frame, for edge detection
    pub confirm_held: bool,
}

impl GameState {
    /// Create a new session at the title screen with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = super::starfield::spawn_field(&mut rng);
        log::info!("session created, seed {seed}");
        Self {
            seed,
            rng,
            phase: GamePhase::Title,
            score: 0,
            spawn_timer: 0,
            player: Player::default(),
            enemies: Vec::new(),
            stars,
            confirm_held: false,
        }
    }

    /// Reset the run fields for a fresh Playing phase
    pub fn reset_session(&mut self) {
        self.score = 0;
        self.spawn_timer = 0;
        self.player = Player::default();
        self.enemies.clear();
    }
}
