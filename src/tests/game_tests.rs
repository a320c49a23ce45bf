#[cfg(test)]
mod tests {
    use crate::game::*;

    #[test]
    fn test_session_constants() {
        assert_eq!(STARTING_LIVES, 3);
        assert!(INITIAL_SPEED > 0.0);
        assert!(SPEED_INCREMENT > 0.0);

        // Idle modes run slower than a fresh run
        assert!(AMBIENT_SPEED_FACTOR > 0.0 && AMBIENT_SPEED_FACTOR < 1.0);
    }

    #[test]
    fn test_spawn_distribution_thresholds() {
        // Thresholds are cumulative on one uniform roll, so they must be
        // strictly increasing and leave room for invalid blocks at the top
        assert!(VALID_THRESHOLD > 0.0);
        assert!(FREEZE_THRESHOLD > VALID_THRESHOLD);
        assert!(BONUS_THRESHOLD > FREEZE_THRESHOLD);
        assert!(BONUS_THRESHOLD < 1.0);
    }

    #[test]
    fn test_spawn_cadence_constants() {
        // The interval curve must actually reach its floor
        assert!(SPAWN_INTERVAL_MIN > 0.0);
        assert!(SPAWN_INTERVAL_MIN < SPAWN_INTERVAL_BASE);
        assert!(SPAWN_INTERVAL_SLOPE > 0.0);

        // Ambient mode spawns slower, never faster
        assert!(AMBIENT_SPAWN_STRETCH >= 1.0);
    }

    #[test]
    fn test_freeze_constants() {
        assert!(FREEZE_DURATION > 0.0);

        // Freeze slows blocks, it never stops or reverses them
        assert!(FREEZE_FACTOR > 0.0 && FREEZE_FACTOR < 1.0);
    }

    #[test]
    fn test_scoring_constants() {
        assert!(VALID_REWARD > 0.0);

        // The jackpot has to be worth chasing
        assert!(BONUS_REWARD > VALID_REWARD);
    }

    #[test]
    fn test_label_constants() {
        // The golden prefix must leave room for random hex digits
        assert!(GOLDEN_PREFIX.len() < HASH_LENGTH);
        assert!(GOLDEN_PREFIX.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_geometry_constants() {
        assert!(LANE_TARGET_WIDTH > 0);

        // Blocks spawn above the visible field and need clearance below the
        // spawn row before the lane accepts another
        assert!(SPAWN_Y < 0.0);
        assert!(LANE_CLEARANCE > 0.0);
        assert!(DESPAWN_MARGIN > 0.0);

        assert!(HIT_WIDTH > 0.0);
        assert!(HIT_HEIGHT > 0.0);
    }
}
