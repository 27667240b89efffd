//! Scrolling background starfield
//!
//! Purely decorative: stars advance every frame in every phase and never
//! interact with gameplay. The pool is created once per session and reused
//! forever; a star that leaves the bottom wraps back to the top.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Palette slot of a star, dimmest to brightest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarBrightness {
    Dim,
    Medium,
    Bright,
}

impl StarBrightness {
    /// Fixed palette index for rendering
    pub fn palette(&self) -> u8 {
        match self {
            StarBrightness::Dim => 5,
            StarBrightness::Medium => 6,
            StarBrightness::Bright => 7,
        }
    }

    fn draw(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..3) {
            0 => StarBrightness::Dim,
            1 => StarBrightness::Medium,
            _ => StarBrightness::Bright,
        }
    }
}

/// A single background star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub x: i32,
    pub y: f32,
    /// Scroll speed, units per frame
    pub speed: f32,
    pub brightness: StarBrightness,
}

impl Star {
    fn draw(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random_range(0..VIEW_WIDTH),
            y: rng.random_range(0.0..VIEW_HEIGHT as f32),
            speed: rng.random_range(STAR_MIN_SPEED..STAR_MAX_SPEED),
            brightness: StarBrightness::draw(rng),
        }
    }
}

/// Create the session's star pool
pub fn spawn_field(rng: &mut impl Rng) -> Vec<Star> {
    (0..STAR_COUNT).map(|_| Star::draw(rng)).collect()
}

/// Scroll every star one frame; wrapped stars get a fresh random x
pub fn scroll(stars: &mut [Star], rng: &mut impl Rng) {
    for star in stars {
        star.y += star.speed;
        if star.y > VIEW_HEIGHT as f32 {
            star.y = 0.0;
            star.x = rng.random_range(0..VIEW_WIDTH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_field_shape() {
        let mut rng = Pcg32::seed_from_u64(7);
        let stars = spawn_field(&mut rng);
        assert_eq!(stars.len(), STAR_COUNT);
        for star in &stars {
            assert!((0..VIEW_WIDTH).contains(&star.x));
            assert!(star.y >= 0.0 && star.y < VIEW_HEIGHT as f32);
            assert!(star.speed >= STAR_MIN_SPEED && star.speed < STAR_MAX_SPEED);
        }
    }

    #[test]
    fn test_scroll_advances_by_own_speed() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut stars = spawn_field(&mut rng);
        let before: Vec<f32> = stars.iter().map(|s| s.y).collect();
        scroll(&mut stars, &mut rng);
        for (star, y0) in stars.iter().zip(before) {
            if star.y != 0.0 {
                assert!((star.y - (y0 + star.speed)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_wrap_resets_to_top_with_new_x() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut stars = vec![Star {
            x: 10,
            y: 120.4,
            speed: 0.3,
            brightness: StarBrightness::Bright,
        }];
        scroll(&mut stars, &mut rng);
        assert_eq!(stars[0].y, 0.0);
        assert!((0..VIEW_WIDTH).contains(&stars[0].x));
    }

    #[test]
    fn test_star_is_never_destroyed() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut stars = spawn_field(&mut rng);
        for _ in 0..2000 {
            scroll(&mut stars, &mut rng);
        }
        assert_eq!(stars.len(), STAR_COUNT);
        for star in &stars {
            assert!(star.y <= VIEW_HEIGHT as f32 + STAR_MAX_SPEED);
        }
    }
}
