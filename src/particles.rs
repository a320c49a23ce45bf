#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::trace;
use ratatui::style::Color;

use crate::components::{Particle, Position};
use crate::config::CONFIG;
use crate::game;

/// Spawns one floating reward text at a hit position. Skipped when the
/// particle budget from the effects config is exhausted.
pub fn spawn_hit_particle(
    world: &mut World,
    position: Position,
    text: impl Into<String>,
    color: Color,
) {
    let (velocity, max_count) = {
        let config = CONFIG.read().unwrap();
        (
            config.effects.particle_velocity,
            config.effects.particle_max_count,
        )
    };

    let active = world.query::<&Particle>().iter(world).count();
    if active >= max_count {
        trace!("Particle budget exhausted, skipping spawn");
        return;
    }

    world.spawn(Particle {
        position,
        text: text.into(),
        color,
        life: 1.0,
        velocity,
        rotation: (fastrand::f32() - 0.5) * 0.5, // initial tilt
        rotation_speed: (fastrand::f32() - 0.5) * 2.0,
        scale: 1.0,
    });
}

pub fn update_particles(world: &mut World, delta_seconds: f32) {
    // First update all particle lifetimes and collect entities to despawn
    let mut entities_to_despawn = Vec::new();

    for (entity, mut particle) in world.query::<(Entity, &mut Particle)>().iter_mut(world) {
        particle.life -= delta_seconds;

        if particle.life <= 0.0 {
            entities_to_despawn.push(entity);
        }
    }

    // Remove expired particles
    for entity in entities_to_despawn {
        world.despawn(entity);
    }

    // Update remaining particles: drift upward, wobble, grow
    for (_, mut particle) in world.query::<(Entity, &mut Particle)>().iter_mut(world) {
        particle.position.y -= particle.velocity * delta_seconds;
        particle.rotation += particle.rotation_speed * delta_seconds;
        particle.scale += game::PARTICLE_SCALE_GROWTH * delta_seconds;
    }
}
