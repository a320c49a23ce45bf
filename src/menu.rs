use crate::app::App;
use crate::components::GameState;
use crate::config::CONFIG;
use crate::menu_types::{Menu, MenuOption, MenuScreen, OptionsOption};
use crate::ui::centered_rect;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::{Duration, Instant};

/// What the loop driver should do after a menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    StartRun,
    Quit,
}

pub struct MenuRenderer {
    pub title_colors: Vec<Color>,
    pub color_change_time: Instant,
    color_cycle_interval: Duration,
}

impl Default for MenuRenderer {
    fn default() -> Self {
        let (colors, interval_ms) = {
            let config = CONFIG.read().unwrap();
            (
                config
                    .display
                    .title_colors
                    .iter()
                    .map(crate::config::display::TitleColor::to_color)
                    .collect::<Vec<_>>(),
                config.display.title_color_cycle_interval_ms,
            )
        };
        Self {
            title_colors: if colors.is_empty() {
                vec![Color::Yellow]
            } else {
                colors
            },
            color_change_time: Instant::now(),
            color_cycle_interval: Duration::from_millis(interval_ms),
        }
    }
}

impl MenuRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self) {
        // Update title colors
        if self.color_change_time.elapsed() > self.color_cycle_interval {
            self.color_change_time = Instant::now();
            let first_color = self.title_colors.remove(0);
            self.title_colors.push(first_color);
        }
    }

    pub fn next_option(&mut self, menu: &mut Menu) {
        match menu.screen {
            MenuScreen::Main => {
                menu.selected_option = match menu.selected_option {
                    MenuOption::StartRun => MenuOption::Options,
                    MenuOption::Options => MenuOption::Quit,
                    MenuOption::Quit => MenuOption::StartRun,
                };
            }
            MenuScreen::Options => {
                menu.options_selected = match menu.options_selected {
                    OptionsOption::GridToggle => OptionsOption::FreezeBannerToggle,
                    OptionsOption::FreezeBannerToggle => OptionsOption::Back,
                    OptionsOption::Back => OptionsOption::GridToggle,
                };
            }
        }
    }

    pub fn prev_option(&mut self, menu: &mut Menu) {
        match menu.screen {
            MenuScreen::Main => {
                menu.selected_option = match menu.selected_option {
                    MenuOption::StartRun => MenuOption::Quit,
                    MenuOption::Options => MenuOption::StartRun,
                    MenuOption::Quit => MenuOption::Options,
                };
            }
            MenuScreen::Options => {
                menu.options_selected = match menu.options_selected {
                    OptionsOption::GridToggle => OptionsOption::Back,
                    OptionsOption::FreezeBannerToggle => OptionsOption::GridToggle,
                    OptionsOption::Back => OptionsOption::FreezeBannerToggle,
                };
            }
        }
    }

    pub fn select(&mut self, menu: &mut Menu) -> MenuAction {
        match menu.screen {
            MenuScreen::Main => match menu.selected_option {
                MenuOption::StartRun => MenuAction::StartRun,
                MenuOption::Options => {
                    menu.screen = MenuScreen::Options;
                    MenuAction::None
                }
                MenuOption::Quit => MenuAction::Quit,
            },
            MenuScreen::Options => match menu.options_selected {
                OptionsOption::GridToggle => {
                    let mut config = CONFIG.write().unwrap();
                    config.display.show_grid = !config.display.show_grid;
                    MenuAction::None
                }
                OptionsOption::FreezeBannerToggle => {
                    let mut config = CONFIG.write().unwrap();
                    config.display.show_freeze_banner = !config.display.show_freeze_banner;
                    MenuAction::None
                }
                OptionsOption::Back => {
                    menu.screen = MenuScreen::Main;
                    MenuAction::None
                }
            },
        }
    }

    /// Escape backs out of the options page. On the main page it does nothing.
    pub fn back(&mut self, menu: &mut Menu) {
        if menu.screen == MenuScreen::Options {
            menu.screen = MenuScreen::Main;
        }
    }
}

pub fn render_menu_overlay(f: &mut Frame, app: &mut App, area: Rect) {
    let panel = centered_rect(50, 60, area);
    f.render_widget(Clear, panel);

    let title_color = app
        .menu_renderer
        .title_colors
        .first()
        .copied()
        .unwrap_or(Color::Yellow);

    let panel_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color))
        .title(Line::from(Span::styled(
            " HASHFALL ",
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )));
    let inner = panel_block.inner(panel);
    f.render_widget(panel_block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and subtitle
            Constraint::Min(4),    // Options
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "H A S H F A L L",
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "hunt the valid hash",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    match app.menu.screen {
        MenuScreen::Main => render_main_options(f, chunks[1], &app.menu),
        MenuScreen::Options => render_options_page(f, chunks[1], &app.menu),
    }

    let hint = Paragraph::new("↑/↓ select   Enter confirm")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, chunks[2]);
}

pub fn render_game_over_overlay(f: &mut Frame, app: &mut App, area: Rect) {
    let panel = centered_rect(50, 40, area);
    f.render_widget(Clear, panel);

    let panel_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Line::from(Span::styled(
            " CHAIN HALTED ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    let inner = panel_block.inner(panel);
    f.render_widget(panel_block, panel);

    let score = app.world.resource::<GameState>().score;
    let summary = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "ALL NODES DOWN",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Final score  "),
            Span::styled(
                format!("Ξ {score:.4}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: mine again   Esc: menu",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(summary, inner);
}

fn render_main_options(f: &mut Frame, area: Rect, menu: &Menu) {
    let options = ["Start Mining", "Options", "Quit"];
    let selected = match menu.selected_option {
        MenuOption::StartRun => 0,
        MenuOption::Options => 1,
        MenuOption::Quit => 2,
    };
    render_option_list(f, area, &options, selected);
}

fn render_options_page(f: &mut Frame, area: Rect, menu: &Menu) {
    let (show_grid, show_freeze_banner) = {
        let config = CONFIG.read().unwrap();
        (config.display.show_grid, config.display.show_freeze_banner)
    };

    let options = [
        format!("Grid lines: {}", if show_grid { "ON" } else { "OFF" }),
        format!(
            "Freeze banner: {}",
            if show_freeze_banner { "ON" } else { "OFF" }
        ),
        "Back".to_string(),
    ];
    let selected = match menu.options_selected {
        OptionsOption::GridToggle => 0,
        OptionsOption::FreezeBannerToggle => 1,
        OptionsOption::Back => 2,
    };

    let refs: Vec<&str> = options.iter().map(String::as_str).collect();
    render_option_list(f, area, &refs, selected);
}

fn render_option_list(f: &mut Frame, area: Rect, options: &[&str], selected: usize) {
    let mut lines = Vec::new();
    for (i, option) in options.iter().enumerate() {
        let style = if i == selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![Span::styled((*option).to_string(), style)]));
    }
    let text = Text::from(lines);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
