#[cfg(test)]
mod tests {
    use crate::components::{Particle, Position};
    use crate::config::CONFIG;
    use crate::particles::{spawn_hit_particle, update_particles};
    use crate::tests::test_utils::{create_test_world, particle_count};
    use ratatui::style::Color;

    #[test]
    fn test_spawn_hit_particle() {
        let mut world = create_test_world();

        spawn_hit_particle(
            &mut world,
            Position { x: 10.0, y: 5.0 },
            "+0.001 ETH",
            Color::Yellow,
        );

        assert_eq!(particle_count(&mut world), 1);

        let particle = world
            .query::<&Particle>()
            .iter(&world)
            .next()
            .cloned()
            .unwrap();

        assert_eq!(particle.text, "+0.001 ETH");
        assert_eq!(particle.color, Color::Yellow);
        assert_eq!(particle.life, 1.0);
        assert_eq!(particle.scale, 1.0);
        assert_eq!(particle.position.x, 10.0);
        assert_eq!(particle.position.y, 5.0);
    }

    #[test]
    fn test_particle_budget() {
        let mut world = create_test_world();
        let max_count = CONFIG.read().unwrap().effects.particle_max_count;

        for _ in 0..max_count + 10 {
            spawn_hit_particle(
                &mut world,
                Position { x: 1.0, y: 1.0 },
                "INVALID",
                Color::Red,
            );
        }

        // Spawns past the budget are dropped, not queued
        assert_eq!(particle_count(&mut world), max_count);
    }

    #[test]
    fn test_particles_drift_and_age() {
        let mut world = create_test_world();
        spawn_hit_particle(
            &mut world,
            Position { x: 10.0, y: 5.0 },
            "FREEZE!",
            Color::Cyan,
        );

        let before = world
            .query::<&Particle>()
            .iter(&world)
            .next()
            .cloned()
            .unwrap();

        update_particles(&mut world, 0.25);

        let after = world
            .query::<&Particle>()
            .iter(&world)
            .next()
            .cloned()
            .unwrap();

        // Floating text drifts upward, ages toward zero and grows
        assert!(after.position.y < before.position.y);
        assert!(after.life < before.life);
        assert!(after.scale > before.scale);
        assert_ne!(after.rotation, before.rotation);
    }

    #[test]
    fn test_expired_particles_are_purged() {
        let mut world = create_test_world();
        spawn_hit_particle(
            &mut world,
            Position { x: 10.0, y: 5.0 },
            "JACKPOT!",
            Color::Magenta,
        );

        // One full lifetime in a single tick kills it
        update_particles(&mut world, 1.5);

        assert_eq!(particle_count(&mut world), 0);
    }

    #[test]
    fn test_zero_delta_changes_nothing() {
        let mut world = create_test_world();
        spawn_hit_particle(
            &mut world,
            Position { x: 10.0, y: 5.0 },
            "+0.001 ETH",
            Color::Yellow,
        );

        update_particles(&mut world, 0.0);

        let particle = world
            .query::<&Particle>()
            .iter(&world)
            .next()
            .cloned()
            .unwrap();
        assert_eq!(particle.life, 1.0);
        assert_eq!(particle.position.y, 5.0);
    }
}
