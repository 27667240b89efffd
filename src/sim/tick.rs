//! Per-frame simulation step
//!
//! The host calls [`tick`] exactly once per rendered frame. All speeds and
//! intervals are defined per call; the core never looks at wall-clock time.

use rand::Rng;

use super::collision::player_hit_by;
use super::difficulty;
use super::snapshot::{PlayerSprite, Snapshot};
use super::starfield;
use super::state::{Enemy, EnemyKind, GamePhase, GameState};
use crate::consts::*;

/// Input signals for a single frame (pre-validated by the host)
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Steer left; wins when both directions are held
    pub move_left: bool,
    /// Steer right
    pub move_right: bool,
    /// Start / restart signal; the core edge-detects it internally
    pub confirm: bool,
    /// Host's monotonic frame counter, cosmetic animation phase only
    pub frame_count: u64,
}

/// Advance the game by one frame and capture the renderable snapshot
pub fn tick(state: &mut GameState, input: &FrameInput) -> Snapshot {
    // The starfield scrolls in every phase
    starfield::scroll(&mut state.stars, &mut state.rng);

    // Fire confirm only on a false -> true transition; a held button must
    // not chain transitions across frames
    let confirm_pressed = input.confirm && !state.confirm_held;
    state.confirm_held = input.confirm;

    let mut pose = PlayerSprite::Neutral;
    let mut collided = false;

    match state.phase {
        GamePhase::Title => {
            if confirm_pressed {
                state.reset_session();
                state.phase = GamePhase::Playing;
                log::debug!("title -> playing");
            }
        }
        GamePhase::GameOver => {
            if confirm_pressed {
                state.phase = GamePhase::Title;
                log::debug!("game over -> title");
            }
        }
        GamePhase::Playing => {
            pose = steer(state, input);
            spawn_enemies(state);
            for enemy in &mut state.enemies {
                enemy.advance();
            }
            collided = state.enemies.iter().any(|e| player_hit_by(&state.player, e));
            state.enemies.retain(|e| !e.off_screen());
            state.score += 1;
        }
    }

    let snapshot = Snapshot::capture(state, input.frame_count, pose);

    // Applied after the capture: the collision frame still renders the
    // Playing scene at the moment of impact
    if collided {
        log::debug!("run ended at score {}", state.score);
        state.phase = GamePhase::GameOver;
    }

    snapshot
}

/// Apply movement input to the player, left taking precedence
fn steer(state: &mut GameState, input: &FrameInput) -> PlayerSprite {
    if input.move_left {
        state.player.shift(-PLAYER_STEP);
        PlayerSprite::Left
    } else if input.move_right {
        state.player.shift(PLAYER_STEP);
        PlayerSprite::Right
    } else {
        PlayerSprite::Neutral
    }
}

/// Count the spawn timer up and release at most one enemy per frame
///
/// The timer may overshoot the interval when the interval shrinks under it;
/// it still releases a single enemy and resets. That cadence is part of the
/// difficulty curve and is kept as-is.
fn spawn_enemies(state: &mut GameState) {
    state.spawn_timer += 1;
    if state.spawn_timer >= difficulty::spawn_interval(state.score) {
        let pool = difficulty::kind_pool(state.score);
        let kind = EnemyKind::from_index(state.rng.random_range(0..pool));
        let x = state.rng.random_range(0..VIEW_WIDTH);
        state.enemies.push(Enemy::spawn(x, kind));
        state.spawn_timer = 0;
    }
}
