use crate::app::App;
use crate::components::{BlockKind, GameState, Particle, Playfield, ScreenShake, SessionState};
use crate::config::CONFIG;
use crate::game;
use crate::menu;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

// Minimum terminal size: one full lane plus the sidebar
const MIN_WIDTH: u16 = 44;
const MIN_HEIGHT: u16 = 16;

pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Check if the terminal is too small to render the game properly
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning_text = Paragraph::new(
            "Terminal too small!\nPlease resize your terminal\nto continue playing.",
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("hashfall"));

        let warning_area = centered_rect(80, 40, area);
        f.render_widget(warning_text, warning_area);
        return;
    }

    // Apply screen shake to the entire frame
    let (shake_x, shake_y) = {
        let screen_shake = app.world.resource::<ScreenShake>();
        screen_shake.current_offset
    };
    let shake_area = displaced(area, shake_x, shake_y);

    let (board_area, sidebar_area) = layout(shake_area);

    render_playfield(f, app, board_area);
    render_sidebar(f, app, sidebar_area);

    // Overlays own the idle states, the simulation keeps idling underneath
    match app.session() {
        SessionState::Playing => {}
        SessionState::Menu => menu::render_menu_overlay(f, app, shake_area),
        SessionState::GameOver => menu::render_game_over_overlay(f, app, shake_area),
    }
}

/// Splits the frame into the playfield and the status sidebar.
pub fn layout(area: Rect) -> (Rect, Rect) {
    let sidebar_width = CONFIG.read().unwrap().display.sidebar_width;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(sidebar_width)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Inner playfield area for a given frame area. The resize handler feeds
/// this to the simulation so mouse cells and block cells agree.
pub fn playfield_area(area: Rect) -> Rect {
    let (board_area, _) = layout(area);
    Block::default().borders(Borders::ALL).inner(board_area)
}

fn render_playfield(f: &mut Frame, app: &mut App, area: Rect) {
    let game_state = app.world.resource::<GameState>().clone();
    let session = app.session();
    let (show_grid, grid_spacing, show_freeze_banner) = {
        let config = CONFIG.read().unwrap();
        (
            config.display.show_grid,
            config.display.grid_spacing,
            config.display.show_freeze_banner,
        )
    };

    let border_style = if game_state.frozen {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Green)
    };
    let frame_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" HASHFALL ");
    let inner = frame_block.inner(area);
    f.render_widget(frame_block, area);

    // Everything behind an overlay renders dimmed
    let dim = !session.is_playing();

    if show_grid {
        render_grid(f, inner, game_state.background_offset, grid_spacing);
    }
    render_lane_guides(f, app, inner);
    render_blocks(f, app, inner, game_state.global_time, dim);
    render_particles(f, app, inner);

    if game_state.frozen && show_freeze_banner {
        let banner = format!("SYSTEM FROZEN: {:.1}s", game_state.freeze_timer.max(0.0));
        let start = i32::from(inner.width / 2) - banner.len() as i32 / 2;
        draw_text(
            f,
            inner,
            start,
            0,
            &banner,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    }
}

// Horizontal guide lines scroll with the background offset
fn render_grid(f: &mut Frame, inner: Rect, offset: f32, spacing: u16) {
    let spacing = spacing.max(2);
    let mut y = inner.top() + offset as u16 % spacing;
    while y < inner.bottom() {
        for x in inner.left()..inner.right() {
            if let Some(cell) = f.buffer_mut().cell_mut((x, y)) {
                cell.set_char('╌');
                cell.set_fg(Color::DarkGray);
            }
        }
        y += spacing;
    }
}

fn render_lane_guides(f: &mut Frame, app: &mut App, inner: Rect) {
    let playfield = *app.world.resource::<Playfield>();
    if playfield.lanes <= 1 {
        return;
    }
    for lane in 1..playfield.lanes {
        let boundary = (lane as f32 * playfield.lane_width) as u16;
        let x = inner.left() + boundary;
        if x >= inner.right() {
            continue;
        }
        for y in inner.top()..inner.bottom() {
            if let Some(cell) = f.buffer_mut().cell_mut((x, y)) {
                cell.set_char('·');
                cell.set_fg(Color::DarkGray);
            }
        }
    }
}

fn render_blocks(f: &mut Frame, app: &mut App, inner: Rect, global_time: f32, dim: bool) {
    let blocks = app.blocks_for_render();
    let pulse_on = (global_time * game::PULSE_RATE).sin() > 0.0;

    // Oldest first so newer blocks draw on top, matching hit resolution
    for (position, block) in blocks {
        if position.y < 0.0 {
            continue;
        }
        let row = position.y as u16;
        if row >= inner.height {
            continue;
        }

        let mut style = match block.kind {
            BlockKind::Valid => {
                let fg = if pulse_on {
                    Color::LightYellow
                } else {
                    Color::Yellow
                };
                Style::default().fg(fg).add_modifier(Modifier::BOLD)
            }
            BlockKind::Invalid => Style::default().fg(Color::Green).add_modifier(Modifier::DIM),
            BlockKind::FreezePowerup => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            BlockKind::BonusPowerup => Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        };
        if dim {
            style = style.add_modifier(Modifier::DIM);
        }

        let start = position.x as i32 - block.label.len() as i32 / 2;
        draw_text(f, inner, start, row, &block.label, style);
    }
}

// Render all particles
fn render_particles(f: &mut Frame, app: &mut App, inner: Rect) {
    let particles_data: Vec<Particle> = app
        .world
        .query::<&Particle>()
        .iter(&app.world)
        .cloned()
        .collect();

    for particle in particles_data {
        if particle.position.y < 0.0 {
            continue;
        }
        let row = particle.position.y as u16;
        if row >= inner.height {
            continue;
        }

        let mut style = Style::default().fg(particle.color);
        if particle.life < 0.35 {
            style = style.add_modifier(Modifier::DIM);
        } else if particle.scale > 1.25 {
            style = style.add_modifier(Modifier::BOLD);
        }

        // Rotation shows as a sideways wobble
        let wobble = particle.rotation.sin() * 1.5;
        let start = (particle.position.x + wobble) as i32 - particle.text.len() as i32 / 2;
        draw_text(f, inner, start, row, &particle.text, style);
    }
}

fn render_sidebar(f: &mut Frame, app: &mut App, area: Rect) {
    let game_state = app.world.resource::<GameState>().clone();
    let session = app.session();

    let sidebar_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(6), // Stats
            Constraint::Min(5),    // Controls
        ])
        .split(area);

    let info_title = Paragraph::new("STATUS")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(info_title, sidebar_layout[0]);

    let hearts: String = (0..game::STARTING_LIVES)
        .map(|i| if i < game_state.lives { "♥ " } else { "· " })
        .collect();

    let status_line = match session {
        SessionState::Playing => Span::styled("MINING", Style::default().fg(Color::Green)),
        SessionState::Menu => Span::styled("STANDBY", Style::default().fg(Color::DarkGray)),
        SessionState::GameOver => Span::styled(
            "CHAIN HALTED",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let stats = vec![
        Line::from(vec![
            Span::raw("Score  "),
            Span::styled(
                format!("Ξ {:.4}", game_state.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Lives  "),
            Span::styled(hearts, Style::default().fg(Color::Red)),
        ]),
        Line::from(format!("Speed  {:.1} rows/s", game_state.effective_speed())),
        Line::from(status_line),
    ];

    let stats_info = Paragraph::new(stats)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: true });
    f.render_widget(stats_info, sidebar_layout[1]);

    // Render controls with updated key bindings
    let controls = Paragraph::new(
        "Controls:\n\
        Click: mine a hash\n\
        Gold pays, green costs a life\n\
        Esc: menu\n\
        Q: quit\n\
        ",
    )
    .block(Block::default().borders(Borders::TOP))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, sidebar_layout[2]);
}

/// Writes a string into the playfield buffer with clipping on both edges.
/// `start_x` is playfield-local and may be negative.
fn draw_text(f: &mut Frame, inner: Rect, start_x: i32, row: u16, text: &str, style: Style) {
    let y = inner.top() + row;
    if y >= inner.bottom() {
        return;
    }
    for (i, ch) in text.chars().enumerate() {
        let local_x = start_x + i as i32;
        if local_x < 0 {
            continue;
        }
        let offset = local_x as u16;
        if offset >= inner.width {
            break;
        }
        if let Some(cell) = f.buffer_mut().cell_mut((inner.left() + offset, y)) {
            cell.set_char(ch);
            cell.set_style(style);
        }
    }
}

// Shake displacement, clamped so the frame never leaves the terminal origin
fn displaced(area: Rect, dx: i16, dy: i16) -> Rect {
    Rect {
        x: (i32::from(area.x) + i32::from(dx)).max(0) as u16,
        y: (i32::from(area.y) + i32::from(dy)).max(0) as u16,
        width: area.width,
        height: area.height,
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
