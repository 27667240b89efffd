//! Player-enemy collision test
//!
//! Circle-vs-square-center approximation: the player's square hitbox is
//! treated as a circle of radius `size / 2` around its center. Deliberately
//! not a precise rectangle test; the looser shape is part of the gameplay
//! feel. Strict inequality, touching exactly is not a hit.

use glam::Vec2;

use super::state::{Enemy, Player};

/// True when the enemy overlaps the player
pub fn player_hit_by(player: &Player, enemy: &Enemy) -> bool {
    let half = player.size as f32 / 2.0;
    let center = Vec2::new(player.x as f32 + half, player.y as f32 + half);
    circles_overlap(center, half, Vec2::new(enemy.x as f32, enemy.y), enemy.radius)
}

/// Strict circle overlap test; symmetric in its two circles
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}
