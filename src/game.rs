#![warn(clippy::all, clippy::pedantic)]

// Session
pub const STARTING_LIVES: u32 = 3;

// Fall speed, in playfield rows per second
pub const INITIAL_SPEED: f32 = 5.0;
pub const SPEED_INCREMENT: f32 = 0.25; // per second of active play
pub const AMBIENT_SPEED_FACTOR: f32 = 0.5; // menu and game-over idle speed

// Freeze powerup
pub const FREEZE_DURATION: f32 = 3.0; // seconds
pub const FREEZE_FACTOR: f32 = 0.2; // effective speed multiplier while frozen

// Spawn kind distribution, cumulative thresholds on one uniform roll
pub const VALID_THRESHOLD: f32 = 0.15;
pub const FREEZE_THRESHOLD: f32 = 0.17;
pub const BONUS_THRESHOLD: f32 = 0.18;

// Spawn cadence: interval shrinks as speed grows, floored at the minimum
pub const SPAWN_INTERVAL_BASE: f32 = 0.8;
pub const SPAWN_INTERVAL_SLOPE: f32 = 50.0; // interval loses speed / slope seconds
pub const SPAWN_INTERVAL_MIN: f32 = 0.1;
pub const AMBIENT_SPAWN_STRETCH: f32 = 1.5; // idle modes spawn slower

// Playfield geometry, in terminal cells
pub const LANE_TARGET_WIDTH: u16 = 18;
pub const SPAWN_Y: f32 = -2.0; // blocks enter above the visible field
pub const LANE_CLEARANCE: f32 = 4.0; // rows a newcomer needs below the spawn row
pub const DESPAWN_MARGIN: f32 = 2.0; // rows past the bottom edge before despawn
pub const HIT_WIDTH: f32 = 18.0; // hit box is fixed, independent of label width
pub const HIT_HEIGHT: f32 = 3.0;

// Scoring
pub const VALID_REWARD: f64 = 0.001;
pub const BONUS_REWARD: f64 = 0.05;

// Block labels
pub const HASH_LENGTH: usize = 16;
pub const GOLDEN_PREFIX: &str = "0000";
pub const FREEZE_LABEL: &str = "TIME_FREEZE_INIT";
pub const BONUS_LABEL: &str = "ETH_BONUS_BLOCK";

// Visual motion
pub const BACKGROUND_SCROLL_FACTOR: f32 = 0.5; // grid scrolls at half fall speed
pub const PULSE_RATE: f32 = 5.0; // valid-block pulse, radians per second
pub const PARTICLE_SCALE_GROWTH: f32 = 0.5; // per second
