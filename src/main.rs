#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use hashfall::app::{App, AppResult};
use hashfall::components::{Playfield, SessionState};
use hashfall::menu::MenuAction;
use hashfall::config::Config;
use hashfall::{Ticker, Time, systems, ui};
use log::{debug, error, info};
use ratatui::{Terminal, prelude::*};

fn main() -> AppResult<()> {
    // Create log file and redirect stderr to it
    let log_path = "hashfall.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .expect("Failed to create log file");

    // Redirect stderr to the log file
    let stderr_handle = std::io::stderr();
    let stderr_fd = stderr_handle.as_raw_fd();
    let log_file_fd = log_file.as_raw_fd();

    // Safety: We're redirecting stderr to our log file using standard POSIX operations
    unsafe {
        libc::dup2(log_file_fd, stderr_fd);
    }

    // Set RUST_BACKTRACE environment variable for detailed panic messages
    unsafe {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    // Configure the logger to use stderr (which is now redirected to our file)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting hashfall");

    // Initialize configuration system
    if Config::force_reload() {
        info!("Configuration loaded successfully");
    } else {
        // Continue with default configuration
        error!("Failed to load configuration, using defaults");
    }

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let render_rate = Duration::from_millis(33); // ~30 FPS
    let sim_rate = Duration::from_millis(50); // Simulation updates less often

    let app = App::new();
    let res = run_app(&mut terminal, app, render_rate, sim_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    render_rate: Duration,
    sim_rate: Duration,
) -> AppResult<()> {
    let mut render_ticker = Ticker::new(render_rate);
    let mut sim_ticker = Ticker::new(sim_rate);
    render_ticker.start();
    sim_ticker.start();

    // Seed playfield geometry before the first frame
    let size = terminal.size()?;
    app.handle_resize(Rect::new(0, 0, size.width, size.height));

    // Flush any pending input events left over from terminal setup
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    debug!("Resources initialized");

    loop {
        // Both cadences stop with the loop so nothing fires into a torn-down
        // terminal
        if app.should_quit {
            render_ticker.stop();
            sim_ticker.stop();
            return Ok(());
        }

        if sim_ticker.tick().is_some() {
            let delta_seconds = {
                let mut time = app.world.resource_mut::<Time>();
                time.update();
                time.delta_seconds()
            };

            systems::game_tick_system(&mut app.world, delta_seconds);

            if app.run_over() {
                app.finish_run();
            }
        }

        if render_ticker.tick().is_some() {
            app.menu_renderer.update();
            terminal.draw(|f| ui::render(f, &mut app))?;
        }

        if event::poll(Duration::from_millis(5))? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                Event::Resize(width, height) => {
                    debug!("Terminal resized to {width}x{height}");
                    app.handle_resize(Rect::new(0, 0, width, height));
                }
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    debug!("Key event: {key:?}");

    // Allow quitting with 'q' regardless of session state
    if key.code == KeyCode::Char('q') {
        app.should_quit = true;
        return;
    }

    match app.session() {
        SessionState::Menu => match key.code {
            KeyCode::Up | KeyCode::Char('w') => app.menu_renderer.prev_option(&mut app.menu),
            KeyCode::Down | KeyCode::Char('s') => app.menu_renderer.next_option(&mut app.menu),
            KeyCode::Enter | KeyCode::Char(' ') => {
                match app.menu_renderer.select(&mut app.menu) {
                    MenuAction::StartRun => app.start_run(),
                    MenuAction::Quit => app.should_quit = true,
                    MenuAction::None => {}
                }
            }
            KeyCode::Esc => app.menu_renderer.back(&mut app.menu),
            _ => {}
        },
        SessionState::Playing => {
            if key.code == KeyCode::Esc {
                app.to_menu();
            }
        }
        SessionState::GameOver => match key.code {
            KeyCode::Enter => app.start_run(),
            KeyCode::Esc => app.to_menu(),
            _ => {}
        },
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if !app.session().is_playing() {
            return;
        }
        // Clicks outside the playfield are ignored
        let playfield = *app.world.resource::<Playfield>();
        if let Some((x, y)) = playfield.to_local(mouse.column, mouse.row) {
            systems::resolve_click(&mut app.world, x, y);
        }
    }
}
