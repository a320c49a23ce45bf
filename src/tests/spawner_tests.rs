#[cfg(test)]
mod tests {
    use crate::components::{BlockKind, FallingBlock, Playfield, Position};
    use crate::game;
    use crate::spawner::{
        block_label, generate_hash, lane_is_clear, roll_kind, spawn_interval, try_spawn,
    };
    use crate::tests::test_utils::{block_count, create_test_world, spawn_block_at};
    use bevy_ecs::prelude::*;

    #[test]
    fn test_generate_hash() {
        let hash = generate_hash(16);

        assert_eq!(hash.len(), 16);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));

        assert_eq!(generate_hash(0).len(), 0);
    }

    #[test]
    fn test_roll_kind_thresholds() {
        // Each tier claims its slice of the unit interval
        assert_eq!(roll_kind(0.0), BlockKind::Valid);
        assert_eq!(roll_kind(game::VALID_THRESHOLD - 0.001), BlockKind::Valid);

        assert_eq!(roll_kind(game::VALID_THRESHOLD), BlockKind::FreezePowerup);
        assert_eq!(
            roll_kind(game::FREEZE_THRESHOLD - 0.001),
            BlockKind::FreezePowerup
        );

        assert_eq!(roll_kind(game::FREEZE_THRESHOLD), BlockKind::BonusPowerup);
        assert_eq!(
            roll_kind(game::BONUS_THRESHOLD - 0.001),
            BlockKind::BonusPowerup
        );

        // Everything past the last threshold is junk
        assert_eq!(roll_kind(game::BONUS_THRESHOLD), BlockKind::Invalid);
        assert_eq!(roll_kind(0.5), BlockKind::Invalid);
        assert_eq!(roll_kind(0.999), BlockKind::Invalid);
    }

    #[test]
    fn test_block_labels() {
        // Valid hashes carry the golden prefix, junk never does by length
        // alone, powerups use their fixed tags
        let valid = block_label(BlockKind::Valid);
        assert!(valid.starts_with(game::GOLDEN_PREFIX));
        assert_eq!(valid.len(), game::HASH_LENGTH);

        let invalid = block_label(BlockKind::Invalid);
        assert_eq!(invalid.len(), game::HASH_LENGTH);

        assert_eq!(block_label(BlockKind::FreezePowerup), game::FREEZE_LABEL);
        assert_eq!(block_label(BlockKind::BonusPowerup), game::BONUS_LABEL);
    }

    #[test]
    fn test_spawn_interval_shrinks_with_speed() {
        let slow = spawn_interval(game::INITIAL_SPEED);
        let fast = spawn_interval(game::INITIAL_SPEED * 4.0);

        assert!(fast < slow);

        // The curve is floored, an absurd speed never drives the interval
        // to zero
        assert_eq!(spawn_interval(10_000.0), game::SPAWN_INTERVAL_MIN);
    }

    #[test]
    fn test_lane_clearance() {
        let mut world = create_test_world();
        let x = world.resource::<Playfield>().lane_center(0);

        // Empty lanes accept spawns
        assert!(lane_is_clear(&mut world, 0));

        // A block still inside the spawn region blocks its own lane only
        spawn_block_at(&mut world, BlockKind::Invalid, x, game::SPAWN_Y);
        assert!(!lane_is_clear(&mut world, 0));
        assert!(lane_is_clear(&mut world, 1));
    }

    #[test]
    fn test_lane_clears_once_block_falls_past_threshold() {
        let mut world = create_test_world();
        let x = world.resource::<Playfield>().lane_center(0);

        // Sitting exactly on the threshold still counts as occupying the
        // spawn region
        let entity = spawn_block_at(
            &mut world,
            BlockKind::Invalid,
            x,
            game::SPAWN_Y + game::LANE_CLEARANCE,
        );
        assert!(!lane_is_clear(&mut world, 0));

        // Past it, the lane opens up again
        world.get_mut::<Position>(entity).unwrap().y = game::SPAWN_Y + game::LANE_CLEARANCE + 0.1;
        assert!(lane_is_clear(&mut world, 0));
    }

    #[test]
    fn test_try_spawn_creates_one_block_at_spawn_row() {
        let mut world = create_test_world();

        assert!(try_spawn(&mut world));
        assert_eq!(block_count(&mut world), 1);

        let (block, position) = world
            .query::<(&FallingBlock, &Position)>()
            .iter(&world)
            .next()
            .map(|(block, position)| (block.clone(), *position))
            .unwrap();

        assert_eq!(position.y, game::SPAWN_Y);
        assert!(!block.mined);
        assert_eq!(block.speed_multiplier, block.kind.speed_multiplier());

        // The block sits centered in its lane
        let expected_x = world.resource::<Playfield>().lane_center(block.lane);
        assert_eq!(position.x, expected_x);
    }

    #[test]
    fn test_spawn_suppressed_while_every_lane_occupied() {
        let mut world = create_test_world();
        let lanes = world.resource::<Playfield>().lanes;

        // Park a fresh block at the spawn row of every lane so whichever
        // lane the spawner rolls is still occupied
        for lane in 0..lanes {
            let x = world.resource::<Playfield>().lane_center(lane);
            let entity = spawn_block_at(&mut world, BlockKind::Invalid, x, game::SPAWN_Y);
            world.get_mut::<FallingBlock>(entity).unwrap().lane = lane;
        }

        assert!(!try_spawn(&mut world));
        assert_eq!(block_count(&mut world), lanes);
    }

    #[test]
    fn test_spawn_suppressed_without_geometry() {
        // No resize has landed yet, the spawner must not place anything
        let mut world = create_test_world();
        world.insert_resource(Playfield::default());

        assert!(!try_spawn(&mut world));
        assert_eq!(block_count(&mut world), 0);
    }

    #[test]
    fn test_spawned_ids_increase() {
        let mut world = create_test_world();

        // Spawn repeatedly, dropping each block out of its lane first
        let mut last_id = None;
        for _ in 0..8 {
            assert!(try_spawn(&mut world));

            let (entity, block) = world
                .query::<(Entity, &FallingBlock)>()
                .iter(&world)
                .next()
                .map(|(entity, block)| (entity, block.id))
                .unwrap();

            if let Some(previous) = last_id {
                assert!(block > previous);
            }
            last_id = Some(block);

            world.despawn(entity);
        }
    }
}
