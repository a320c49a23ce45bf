#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::info;
use ratatui::layout::Rect;

use crate::Time;
use crate::components::{
    FallingBlock, GameState, Playfield, Position, ScreenShake, SessionState,
};
use crate::game;
use crate::menu::MenuRenderer;
use crate::menu_types::Menu;
use crate::ui;

pub type AppResult<T> = anyhow::Result<T>;

pub struct App {
    pub world: World,
    pub should_quit: bool,
    pub menu: Menu,
    pub menu_renderer: MenuRenderer,
}

impl App {
    pub fn new() -> Self {
        let mut world = World::new();
        world.insert_resource(Time::new());
        world.insert_resource(GameState::default());
        world.insert_resource(ScreenShake::default());
        world.insert_resource(Playfield::default());
        world.insert_resource(SessionState::default());

        Self {
            world,
            should_quit: false,
            menu: Menu::new(),
            menu_renderer: MenuRenderer::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> SessionState {
        *self.world.resource::<SessionState>()
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.world.resource::<GameState>().score
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.world.resource::<GameState>().lives
    }

    /// True once an active run has burned its last life. The loop driver
    /// answers this with `finish_run`.
    #[must_use]
    pub fn run_over(&self) -> bool {
        self.session().is_playing() && self.lives() == 0
    }

    /// Terminal geometry changed, recompute the playfield's inner area.
    pub fn handle_resize(&mut self, area: Rect) {
        let inner = ui::playfield_area(area);
        self.world.resource_mut::<Playfield>().resize(inner);
    }

    /// Starts a fresh run: empty field, full lives, base speed.
    pub fn start_run(&mut self) {
        self.world.clear_entities();
        self.world.insert_resource(GameState::default());
        self.world.insert_resource(ScreenShake::default());
        self.world.insert_resource(SessionState::Playing);
        info!("Run started");
    }

    /// Drops back to the menu. Active-play entities are cleared and the
    /// speed pinned to ambient, the last score stays visible in the HUD.
    pub fn to_menu(&mut self) {
        self.world.clear_entities();
        {
            let mut game_state = self.world.resource_mut::<GameState>();
            game_state.frozen = false;
            game_state.freeze_timer = 0.0;
            game_state.spawn_timer = 0.0;
            game_state.speed = game::INITIAL_SPEED * game::AMBIENT_SPEED_FACTOR;
        }
        self.world.insert_resource(ScreenShake::default());
        self.world.insert_resource(SessionState::Menu);
        self.menu = Menu::new();
        info!("Back to menu");
    }

    /// Ends the active run. The simulation keeps idling behind the final
    /// score overlay until the player restarts or leaves.
    pub fn finish_run(&mut self) {
        self.world.insert_resource(SessionState::GameOver);
        info!("Run over, final score {:.4}", self.score());
    }

    /// Blocks sorted oldest first so the renderer paints newer blocks on
    /// top, consistent with hit resolution preferring the newest.
    pub fn blocks_for_render(&mut self) -> Vec<(Position, FallingBlock)> {
        let mut blocks: Vec<(Position, FallingBlock)> = self
            .world
            .query::<(&FallingBlock, &Position)>()
            .iter(&self.world)
            .map(|(block, position)| (*position, block.clone()))
            .collect();
        blocks.sort_by_key(|(_, block)| block.id);
        blocks
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
