//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `tick` call, no wall-clock awareness
//! - Seeded RNG only
//! - Stable iteration order (enemy insertion order preserved)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod snapshot;
pub mod starfield;
pub mod state;
pub mod tick;

pub use collision::player_hit_by;
pub use difficulty::{kind_pool, spawn_interval};
pub use snapshot::{EnemyView, PlayerSprite, Scene, Snapshot, StarView};
pub use starfield::{Star, StarBrightness};
pub use state::{Enemy, EnemyKind, GamePhase, GameState, Player};
pub use tick::{FrameInput, tick};
