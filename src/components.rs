#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting cell coordinates since playfields fit in u16
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since values are clamped first
    clippy::cast_sign_loss,
    // Allow precision loss when casting between numeric types since exact precision isn't critical in this game
    clippy::cast_precision_loss,
    // Allow potential wrapping when casting between types of same size as values are in range
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::*;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Golden-prefixed hash worth the base reward.
    Valid,
    /// Junk hash, mining it costs a life.
    Invalid,
    /// Slows the fall of every block for a few seconds.
    FreezePowerup,
    /// Large one-off payout.
    BonusPowerup,
}

impl BlockKind {
    #[must_use]
    pub fn speed_multiplier(self) -> f32 {
        match self {
            BlockKind::Valid | BlockKind::Invalid => 1.0,
            BlockKind::FreezePowerup => 1.2,
            BlockKind::BonusPowerup => 1.5,
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            BlockKind::Valid => Color::Yellow,
            BlockKind::Invalid => Color::Green,
            BlockKind::FreezePowerup => Color::Cyan,
            BlockKind::BonusPowerup => Color::Magenta,
        }
    }
}

/// Playfield-local position in cells. `y` grows downward and may sit above
/// the visible field (negative) right after spawn.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

#[derive(Component, Debug, Clone)]
pub struct FallingBlock {
    /// Monotonically increasing per session, higher ids are newer.
    pub id: u64,
    pub kind: BlockKind,
    pub label: String,
    pub lane: usize,
    pub speed_multiplier: f32,
    /// Set by a successful hit, purged on the same tick.
    pub mined: bool,
}

/// Which screen owns input. Only the loop driver writes this.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Menu,
    Playing,
    GameOver,
}

impl SessionState {
    #[must_use]
    pub fn is_playing(self) -> bool {
        self == SessionState::Playing
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameState {
    pub score: f64,
    pub lives: u32,
    /// Base fall speed in rows per second. Never decreases during a run.
    pub speed: f32,
    pub frozen: bool,
    pub freeze_timer: f32,
    pub spawn_timer: f32,
    pub global_time: f32,
    pub background_offset: f32,
    next_block_id: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0.0,
            lives: game::STARTING_LIVES,
            speed: game::INITIAL_SPEED,
            frozen: false,
            freeze_timer: 0.0,
            spawn_timer: 0.0,
            global_time: 0.0,
            background_offset: 0.0,
            next_block_id: 0,
        }
    }
}

impl GameState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fall speed after the freeze factor. The stored `speed` is untouched by
    /// freezes so the difficulty ramp resumes where it left off.
    #[must_use]
    pub fn effective_speed(&self) -> f32 {
        if self.frozen {
            self.speed * game::FREEZE_FACTOR
        } else {
            self.speed
        }
    }

    pub fn allocate_block_id(&mut self) -> u64 {
        let id = self.next_block_id;
        self.next_block_id += 1;
        id
    }
}

/// Cached geometry of the playfield's inner area. Updated on resize, read by
/// the spawner for lane placement and by the loop driver to translate mouse
/// cells into playfield coordinates.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct Playfield {
    pub area: Rect,
    pub lanes: usize,
    pub lane_width: f32,
}

impl Playfield {
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.lanes = usize::from((area.width / game::LANE_TARGET_WIDTH).max(1));
        self.lane_width = f32::from(area.width) / self.lanes as f32;
    }

    /// False until the first resize lands. Simulation steps that need
    /// geometry skip silently while unsized.
    #[must_use]
    pub fn is_sized(&self) -> bool {
        self.area.width > 0 && self.area.height > 0
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        f32::from(self.area.width)
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        f32::from(self.area.height)
    }

    #[must_use]
    pub fn lane_center(&self, lane: usize) -> f32 {
        (lane as f32 + 0.5) * self.lane_width
    }

    /// Maps an absolute terminal cell to playfield-local coordinates, or None
    /// when the cell falls outside the field.
    #[must_use]
    pub fn to_local(&self, column: u16, row: u16) -> Option<(f32, f32)> {
        if !self.is_sized() {
            return None;
        }
        let a = self.area;
        if column < a.x || row < a.y || column >= a.x + a.width || row >= a.y + a.height {
            return None;
        }
        Some((
            f32::from(column - a.x) + 0.5,
            f32::from(row - a.y) + 0.5,
        ))
    }
}

// Floating reward text spawned by hits
#[derive(Debug, Clone, Component)]
pub struct Particle {
    pub position: Position,
    pub text: String,
    pub color: Color,
    pub life: f32,
    pub velocity: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub scale: f32,
}

// Screen shake effect
#[derive(Debug, Clone, Resource, Default)]
pub struct ScreenShake {
    pub intensity: f32,
    pub duration: f32,
    pub current_offset: (i16, i16),
    pub is_active: bool,
    pub horizontal_bias: bool, // When true, shake will prioritize horizontal movement
}
