use ratatui::style::Color;
use serde::{Deserialize, Serialize};

// Configuration for playfield and HUD visuals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_grid: bool,
    pub grid_spacing: u16,
    pub sidebar_width: u16,
    pub show_freeze_banner: bool,

    // Color cycling for the menu title
    pub title_color_cycle_interval_ms: u64,
    pub title_colors: Vec<TitleColor>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            grid_spacing: 4,
            sidebar_width: 24,
            show_freeze_banner: true,

            title_color_cycle_interval_ms: 100,
            title_colors: vec![
                TitleColor::Yellow,
                TitleColor::LightYellow,
                TitleColor::Green,
                TitleColor::Cyan,
                TitleColor::Magenta,
            ],
        }
    }
}

// Configuration for hit feedback effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub particle_velocity: f32,
    pub particle_max_count: usize,
    pub shake_intensity: f32,
    pub shake_duration: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_velocity: 3.0,
            particle_max_count: 64,
            shake_intensity: 2.0,
            shake_duration: 0.5,
        }
    }
}

// Supported colors for serialization/deserialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Black,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    Gray,
    Custom(u8, u8, u8),
}

impl TitleColor {
    #[must_use]
    pub fn to_color(&self) -> Color {
        match self {
            TitleColor::Red => Color::Red,
            TitleColor::Green => Color::Green,
            TitleColor::Yellow => Color::Yellow,
            TitleColor::Blue => Color::Blue,
            TitleColor::Magenta => Color::Magenta,
            TitleColor::Cyan => Color::Cyan,
            TitleColor::White => Color::White,
            TitleColor::Black => Color::Black,
            TitleColor::DarkGray => Color::DarkGray,
            TitleColor::LightRed => Color::LightRed,
            TitleColor::LightGreen => Color::LightGreen,
            TitleColor::LightYellow => Color::LightYellow,
            TitleColor::LightBlue => Color::LightBlue,
            TitleColor::LightMagenta => Color::LightMagenta,
            TitleColor::LightCyan => Color::LightCyan,
            TitleColor::Gray => Color::Gray,
            TitleColor::Custom(r, g, b) => Color::Rgb(*r, *g, *b),
        }
    }
}
