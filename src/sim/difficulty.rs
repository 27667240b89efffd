//! Score-driven difficulty curve
//!
//! Pure functions of the current score; no state, no RNG. Both curves step
//! once per [`DIFFICULTY_SCORE_STEP`] points: the spawn interval tightens
//! toward a floor of one frame while the kind rotation widens to all five.

use crate::consts::*;

use super::state::EnemyKind;

/// Frames between spawns at the given score, never below 1
pub fn spawn_interval(score: u32) -> u32 {
    BASE_SPAWN_INTERVAL
        .saturating_sub(score / DIFFICULTY_SCORE_STEP)
        .max(1)
}

/// Number of enemy kinds in rotation at the given score, within [1, 5]
pub fn kind_pool(score: u32) -> u32 {
    (score / DIFFICULTY_SCORE_STEP + 1).min(EnemyKind::COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_interval_curve() {
        assert_eq!(spawn_interval(0), 30);
        assert_eq!(spawn_interval(99), 30);
        assert_eq!(spawn_interval(100), 29);
        assert_eq!(spawn_interval(450), 26);
        assert_eq!(spawn_interval(2900), 1);
        assert_eq!(spawn_interval(10_000), 1);
    }

    #[test]
    fn test_kind_pool_curve() {
        assert_eq!(kind_pool(0), 1);
        assert_eq!(kind_pool(99), 1);
        assert_eq!(kind_pool(100), 2);
        assert_eq!(kind_pool(399), 4);
        assert_eq!(kind_pool(400), 5);
        assert_eq!(kind_pool(450), 5);
        assert_eq!(kind_pool(u32::MAX), 5);
    }

    #[test]
    fn test_speed_table() {
        assert_eq!(EnemyKind::Drone.base_speed(), 2.0);
        assert_eq!(EnemyKind::Raider.base_speed(), 3.0);
        assert_eq!(EnemyKind::Striker.base_speed(), 4.0);
        assert_eq!(EnemyKind::Creeper.base_speed(), 0.3);
        assert_eq!(EnemyKind::Drifter.base_speed(), 0.5);
        assert!(EnemyKind::Creeper.accelerates());
        assert!(!EnemyKind::Drone.accelerates());
        assert!(!EnemyKind::Drifter.accelerates());
    }

    proptest! {
        #[test]
        fn prop_interval_floor(score in 0u32..=u32::MAX) {
            prop_assert!(spawn_interval(score) >= 1);
            prop_assert!(spawn_interval(score) <= BASE_SPAWN_INTERVAL);
        }

        #[test]
        fn prop_kind_pool_bounded(score in 0u32..=u32::MAX) {
            let pool = kind_pool(score);
            prop_assert!((1..=5).contains(&pool));
        }

        #[test]
        fn prop_kind_pool_non_decreasing(score in 0u32..u32::MAX) {
            prop_assert!(kind_pool(score + 1) >= kind_pool(score));
        }

        #[test]
        fn prop_kind_index_round_trip(index in 0u32..5) {
            prop_assert_eq!(EnemyKind::from_index(index).index(), index);
        }
    }
}
