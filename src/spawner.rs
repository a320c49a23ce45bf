#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::{debug, trace};

use crate::components::{BlockKind, FallingBlock, GameState, Playfield, Position};
use crate::game;

const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Random uppercase hex string of the given length.
#[must_use]
pub fn generate_hash(len: usize) -> String {
    (0..len)
        .map(|_| char::from(HEX_CHARS[fastrand::usize(0..HEX_CHARS.len())]))
        .collect()
}

/// Maps one uniform roll in [0, 1) onto a block kind. Thresholds are
/// cumulative, everything past the last one is junk.
#[must_use]
pub fn roll_kind(roll: f32) -> BlockKind {
    if roll < game::VALID_THRESHOLD {
        BlockKind::Valid
    } else if roll < game::FREEZE_THRESHOLD {
        BlockKind::FreezePowerup
    } else if roll < game::BONUS_THRESHOLD {
        BlockKind::BonusPowerup
    } else {
        BlockKind::Invalid
    }
}

#[must_use]
pub fn block_label(kind: BlockKind) -> String {
    match kind {
        BlockKind::Valid => format!(
            "{}{}",
            game::GOLDEN_PREFIX,
            generate_hash(game::HASH_LENGTH - game::GOLDEN_PREFIX.len())
        ),
        BlockKind::Invalid => generate_hash(game::HASH_LENGTH),
        BlockKind::FreezePowerup => game::FREEZE_LABEL.to_string(),
        BlockKind::BonusPowerup => game::BONUS_LABEL.to_string(),
    }
}

/// Seconds between spawn attempts at the given base speed.
#[must_use]
pub fn spawn_interval(speed: f32) -> f32 {
    (game::SPAWN_INTERVAL_BASE - speed / game::SPAWN_INTERVAL_SLOPE).max(game::SPAWN_INTERVAL_MIN)
}

/// A lane accepts a newcomer only once every block in it has fallen clear of
/// the spawn row. Blocks in other lanes don't matter.
pub fn lane_is_clear(world: &mut World, lane: usize) -> bool {
    let threshold = game::SPAWN_Y + game::LANE_CLEARANCE;
    !world
        .query::<(&FallingBlock, &Position)>()
        .iter(world)
        .any(|(block, position)| block.lane == lane && position.y <= threshold)
}

/// Attempts one spawn into a random lane. Returns false when the playfield
/// has no geometry yet or the chosen lane is still occupied near the top.
pub fn try_spawn(world: &mut World) -> bool {
    let lanes = {
        let playfield = world.resource::<Playfield>();
        if !playfield.is_sized() {
            return false;
        }
        playfield.lanes
    };

    let lane = fastrand::usize(0..lanes);
    if !lane_is_clear(world, lane) {
        trace!("Spawn suppressed, lane {lane} still occupied near the top");
        return false;
    }

    let kind = roll_kind(fastrand::f32());
    let label = block_label(kind);
    let x = world.resource::<Playfield>().lane_center(lane);
    let id = world.resource_mut::<GameState>().allocate_block_id();

    world.spawn((
        FallingBlock {
            id,
            kind,
            label,
            lane,
            speed_multiplier: kind.speed_multiplier(),
            mined: false,
        },
        Position {
            x,
            y: game::SPAWN_Y,
        },
    ));

    debug!("Spawned {kind:?} block {id} in lane {lane}");
    true
}
