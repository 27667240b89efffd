//! Renderable snapshot
//!
//! Read-only projection of the current state handed to the rendering host
//! each frame. Cosmetic phases (text blink, enemy animation) are pure
//! functions of the host's frame counter and are never stored.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};

/// Player sprite sheet column, selected by the current frame's input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSprite {
    Neutral,
    Left,
    Right,
}

impl PlayerSprite {
    /// Sprite sheet u coordinate
    pub fn sprite_col(&self) -> u32 {
        match self {
            PlayerSprite::Neutral => 16,
            PlayerSprite::Left => 24,
            PlayerSprite::Right => 32,
        }
    }
}

/// A star ready to plot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StarView {
    pub x: i32,
    pub y: f32,
    /// Palette index
    pub color: u8,
}

/// An enemy ready to blit
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyView {
    pub x: i32,
    pub y: f32,
    /// Sprite sheet u coordinate (animation column)
    pub sprite_col: u32,
    /// Sprite sheet v coordinate (kind row)
    pub sprite_row: u32,
}

/// Scene-specific part of the snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Scene {
    Title {
        blink_on: bool,
    },
    Playing {
        player_x: i32,
        player_y: i32,
        player_sprite: PlayerSprite,
        enemies: Vec<EnemyView>,
        score: u32,
    },
    GameOver {
        score: u32,
        blink_on: bool,
    },
}

/// One frame's renderable output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub scene: Scene,
    pub stars: Vec<StarView>,
}

/// Press-start text blink cadence
pub fn blink_on(frame_count: u64) -> bool {
    (frame_count / 2) % 2 == 0
}

/// Enemy animation column: flips between 0 and 8 every five frames
pub fn enemy_anim_col(frame_count: u64) -> u32 {
    (frame_count / 5 % 2) as u32 * 8
}

impl Snapshot {
    /// Project the current state for rendering
    pub fn capture(state: &GameState, frame_count: u64, pose: PlayerSprite) -> Self {
        let stars = state
            .stars
            .iter()
            .map(|s| StarView {
                x: s.x,
                y: s.y,
                color: s.brightness.palette(),
            })
            .collect();

        let scene = match state.phase {
            GamePhase::Title => Scene::Title {
                blink_on: blink_on(frame_count),
            },
            GamePhase::Playing => {
                let anim_col = enemy_anim_col(frame_count);
                Scene::Playing {
                    player_x: state.player.x,
                    player_y: state.player.y,
                    player_sprite: pose,
                    enemies: state
                        .enemies
                        .iter()
                        .map(|e| EnemyView {
                            x: e.x,
                            y: e.y,
                            sprite_col: anim_col,
                            sprite_row: e.kind.sprite_row(),
                        })
                        .collect(),
                    score: state.score,
                }
            }
            GamePhase::GameOver => Scene::GameOver {
                score: state.score,
                blink_on: blink_on(frame_count),
            },
        };

        Self { scene, stars }
    }
}
