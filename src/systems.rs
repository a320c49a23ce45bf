use bevy_ecs::prelude::*;
use log::{debug, info, trace};

use crate::components::{
    BlockKind, FallingBlock, GameState, Playfield, Position, SessionState,
};
use crate::game;
use crate::particles;
use crate::screenshake;
use crate::spawner;

/// Advances the whole simulation by one tick. Runs in every session state,
/// menu and game over just idle at ambient speed with a stretched spawn
/// cadence and no scoring.
pub fn game_tick_system(world: &mut World, delta_seconds: f32) {
    trace!("Game tick with delta: {}", delta_seconds);

    let session = *world.resource::<SessionState>();

    // No geometry yet, skip until the first resize lands
    let field_height = {
        let playfield = world.resource::<Playfield>();
        if !playfield.is_sized() {
            return;
        }
        playfield.height()
    };

    // Clock, difficulty ramp and background scroll
    {
        let mut game_state = world.resource_mut::<GameState>();
        game_state.global_time += delta_seconds;

        if session.is_playing() {
            if game_state.frozen {
                // Speed holds while frozen, the ramp resumes afterwards
                game_state.freeze_timer -= delta_seconds;
                if game_state.freeze_timer <= 0.0 {
                    game_state.frozen = false;
                    game_state.freeze_timer = 0.0;
                    debug!("Freeze expired");
                }
            } else {
                game_state.speed += game::SPEED_INCREMENT * delta_seconds;
            }
        } else {
            // Idle modes pin the speed, no ramp
            game_state.speed = game::INITIAL_SPEED * game::AMBIENT_SPEED_FACTOR;
        }

        game_state.background_offset = (game_state.background_offset
            + game_state.speed * game::BACKGROUND_SCROLL_FACTOR * delta_seconds)
            % field_height;

        game_state.spawn_timer += delta_seconds;
    }

    // Spawn cadence. The timer resets on every attempt, including attempts
    // the spawner suppresses because the chosen lane is still occupied.
    let should_spawn = {
        let game_state = world.resource::<GameState>();
        let mut interval = spawner::spawn_interval(game_state.speed);
        if !session.is_playing() {
            interval *= game::AMBIENT_SPAWN_STRETCH;
        }
        game_state.spawn_timer > interval
    };

    if should_spawn {
        spawner::try_spawn(world);
        world.resource_mut::<GameState>().spawn_timer = 0.0;
    }

    // Advance every block by the effective speed and its own multiplier
    let effective_speed = world.resource::<GameState>().effective_speed();
    for (block, mut position) in world
        .query::<(&FallingBlock, &mut Position)>()
        .iter_mut(world)
    {
        position.y += effective_speed * block.speed_multiplier * delta_seconds;
    }

    // Purge mined blocks and blocks past the bottom edge. Escaped blocks
    // leave silently, there is no penalty for letting one go.
    let drop_line = field_height + game::DESPAWN_MARGIN;
    let expired: Vec<Entity> = world
        .query::<(Entity, &FallingBlock, &Position)>()
        .iter(world)
        .filter(|(_, block, position)| block.mined || position.y > drop_line)
        .map(|(entity, _, _)| entity)
        .collect();

    for entity in expired {
        trace!("Despawning block past the field");
        world.despawn(entity);
    }

    particles::update_particles(world, delta_seconds);
    screenshake::update_screen_shake(world, delta_seconds);
}

/// Resolves a click at playfield-local coordinates against the falling
/// blocks. Newer blocks shadow older ones when hit boxes overlap. Returns
/// the kind of the block that was hit, if any.
pub fn resolve_click(world: &mut World, x: f32, y: f32) -> Option<BlockKind> {
    if !world.resource::<SessionState>().is_playing() {
        return None;
    }

    // Collect unmined blocks newest first
    let mut candidates: Vec<(Entity, u64, Position, BlockKind)> = world
        .query::<(Entity, &FallingBlock, &Position)>()
        .iter(world)
        .filter(|(_, block, _)| !block.mined)
        .map(|(entity, block, position)| (entity, block.id, *position, block.kind))
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    let (entity, id, position, kind) = candidates.into_iter().find(|(_, _, position, _)| {
        (x - position.x).abs() < game::HIT_WIDTH / 2.0
            && (y - position.y).abs() < game::HIT_HEIGHT / 2.0
    })?;

    debug!("Hit {kind:?} block {id} at ({:.1}, {:.1})", position.x, position.y);

    if let Some(mut block) = world.get_mut::<FallingBlock>(entity) {
        block.mined = true;
    }

    match kind {
        BlockKind::Valid => {
            world.resource_mut::<GameState>().score += game::VALID_REWARD;
            particles::spawn_hit_particle(
                world,
                position,
                format!("+{} ETH", game::VALID_REWARD),
                kind.color(),
            );
        }
        BlockKind::BonusPowerup => {
            world.resource_mut::<GameState>().score += game::BONUS_REWARD;
            info!("Bonus block mined");
            particles::spawn_hit_particle(world, position, "JACKPOT!", kind.color());
        }
        BlockKind::FreezePowerup => {
            {
                let mut game_state = world.resource_mut::<GameState>();
                game_state.frozen = true;
                game_state.freeze_timer = game::FREEZE_DURATION;
            }
            info!("Freeze engaged for {}s", game::FREEZE_DURATION);
            particles::spawn_hit_particle(world, position, "FREEZE!", kind.color());
        }
        BlockKind::Invalid => {
            let remaining = {
                let mut game_state = world.resource_mut::<GameState>();
                game_state.lives = game_state.lives.saturating_sub(1);
                game_state.lives
            };
            debug!("Invalid hash mined, {remaining} lives left");
            particles::spawn_hit_particle(world, position, "INVALID", ratatui::style::Color::Red);
            screenshake::trigger_misclick_shake(world);
        }
    }

    world.despawn(entity);
    Some(kind)
}
