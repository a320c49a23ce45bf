#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from f32 to i16 since shake offsets stay small
    clippy::cast_possible_truncation
)]

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::ScreenShake;
use crate::config::CONFIG;

/// Triggers a screen shake effect with the specified intensity and duration
pub fn trigger_screen_shake(world: &mut World, intensity: f32, duration: f32) {
    let mut screen_shake = world.resource_mut::<ScreenShake>();
    screen_shake.intensity = intensity;
    screen_shake.duration = duration;
    screen_shake.is_active = true;
    trace!("Screen shake triggered with intensity {intensity}");
}

/// Triggers the mistake shake for mining an invalid hash. Sideways only,
/// so the playfield judders without bouncing the HUD rows.
pub fn trigger_misclick_shake(world: &mut World) {
    let (intensity, duration) = {
        let config = CONFIG.read().unwrap();
        (config.effects.shake_intensity, config.effects.shake_duration)
    };

    let mut screen_shake = world.resource_mut::<ScreenShake>();
    screen_shake.intensity = intensity;
    screen_shake.duration = duration;
    screen_shake.is_active = true;
    screen_shake.horizontal_bias = true;

    trace!("Misclick screen shake triggered with intensity {intensity}");
}

/// Updates the screen shake state based on elapsed time
pub fn update_screen_shake(world: &mut World, delta_seconds: f32) {
    let mut screen_shake = world.resource_mut::<ScreenShake>();
    if screen_shake.duration > 0.0 {
        screen_shake.duration -= delta_seconds;

        if screen_shake.duration <= 0.0 {
            // Reset shake when duration expires
            screen_shake.intensity = 0.0;
            screen_shake.current_offset = (0, 0);
            screen_shake.is_active = false;
            screen_shake.horizontal_bias = false;
        } else {
            // Calculate random shake offset based on intensity
            let intensity = screen_shake.intensity * (screen_shake.duration / 0.3); // Fade out
            let max_offset = (intensity * 2.0) as i16;

            if screen_shake.horizontal_bias {
                // Misclick shake: sideways judder, barely any vertical
                screen_shake.current_offset = (
                    (fastrand::i16(0..=max_offset) - max_offset / 2),
                    (fastrand::i16(0..=(max_offset / 3)) - max_offset / 6),
                );
            } else {
                // Regular screen shake: equal in both directions
                screen_shake.current_offset = (
                    (fastrand::i16(0..=max_offset) - max_offset / 2),
                    (fastrand::i16(0..=max_offset) - max_offset / 2),
                );
            }
        }
    }
}
