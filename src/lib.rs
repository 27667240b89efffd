//! Space Battle - deterministic core of a fixed-viewport arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, spawning, collisions)
//!
//! Rendering, input polling, audio and the frame clock are external hosts:
//! the host calls [`sim::tick`] once per frame with discrete input signals
//! and receives a renderable [`sim::Snapshot`] back.

pub mod sim;

pub use sim::{FrameInput, GamePhase, GameState, Snapshot, tick};

/// Game configuration constants
pub mod consts {
    /// Logical viewport width
    pub const VIEW_WIDTH: i32 = 160;
    /// Logical viewport height
    pub const VIEW_HEIGHT: i32 = 120;

    /// Player hitbox edge length
    pub const PLAYER_SIZE: i32 = 8;
    /// Fixed player altitude
    pub const PLAYER_Y: i32 = 100;
    /// Horizontal start position on session reset
    pub const PLAYER_START_X: i32 = 80;
    /// Horizontal movement per frame
    pub const PLAYER_STEP: i32 = 2;
    /// Rightmost reachable player x
    pub const PLAYER_MAX_X: i32 = VIEW_WIDTH - PLAYER_SIZE;

    /// Enemy collision radius
    pub const ENEMY_RADIUS: f32 = 4.0;
    /// Per-frame speed gain of the accelerating enemy kind (uncapped)
    pub const CREEPER_ACCEL: f32 = 0.12;

    /// Spawn interval at score 0, in frames
    pub const BASE_SPAWN_INTERVAL: u32 = 30;
    /// Score step that tightens the interval and widens the kind pool
    pub const DIFFICULTY_SCORE_STEP: u32 = 100;

    /// Number of background stars (fixed pool, reused forever)
    pub const STAR_COUNT: usize = 50;
    /// Star scroll speed range, units per frame
    pub const STAR_MIN_SPEED: f32 = 0.2;
    pub const STAR_MAX_SPEED: f32 = 0.5;
}
