#![warn(clippy::all, clippy::pedantic)]

pub mod game_tests;
pub mod particles_tests;
pub mod spawner_tests;

// Import test utilities
#[cfg(test)]
pub mod test_utils {
    use crate::app::App;
    use crate::components::{
        BlockKind, FallingBlock, GameState, Particle, Playfield, Position, ScreenShake,
        SessionState,
    };
    use crate::spawner;
    use bevy_ecs::prelude::*;
    use ratatui::layout::Rect;

    // A 72x30 field gives four 18-cell lanes
    pub const TEST_FIELD: Rect = Rect {
        x: 0,
        y: 0,
        width: 72,
        height: 30,
    };

    // Helper function to create a test world mid-run
    #[must_use]
    pub fn create_test_world() -> World {
        let mut world = World::new();
        world.init_resource::<GameState>();
        world.insert_resource(SessionState::Playing);
        world.insert_resource(ScreenShake::default());
        world.insert_resource(crate::Time::new());

        let mut playfield = Playfield::default();
        playfield.resize(TEST_FIELD);
        world.insert_resource(playfield);

        world
    }

    // Helper function to create a test app with playfield geometry in place
    #[must_use]
    pub fn create_test_app() -> App {
        let mut app = App::new();
        app.handle_resize(Rect::new(0, 0, 80, 30));
        app
    }

    // Injects a block directly, bypassing the spawner's lane policy
    pub fn spawn_block_at(world: &mut World, kind: BlockKind, x: f32, y: f32) -> Entity {
        let id = world.resource_mut::<GameState>().allocate_block_id();
        world
            .spawn((
                FallingBlock {
                    id,
                    kind,
                    label: spawner::block_label(kind),
                    lane: 0,
                    speed_multiplier: kind.speed_multiplier(),
                    mined: false,
                },
                Position { x, y },
            ))
            .id()
    }

    #[must_use]
    pub fn block_count(world: &mut World) -> usize {
        world.query::<&FallingBlock>().iter(world).count()
    }

    #[must_use]
    pub fn particle_count(world: &mut World) -> usize {
        world.query::<&Particle>().iter(world).count()
    }
}
