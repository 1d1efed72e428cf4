//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::engine::Dashboard;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Where the records came from, shown in the header
    pub dataset: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, dataset: String) -> Self {
        Self {
            with_background_color,
            dataset,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The seller dashboard.
    Dashboard,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state, live behind the splash screen as well.
    state: Box<DashboardState>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(dashboard: Dashboard, ui_config: UIConfig) -> Self {
        Self {
            current_screen: Screen::Splash,
            state: Box::new(DashboardState::new(dashboard, Instant::now(), ui_config)),
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        let now = Instant::now();
        app.state.update(now);

        let frame = terminal.draw(|f| render(f, app.current_screen, &app.state))?;
        app.state.frame_area = frame.area;
        if app.current_screen == Screen::Dashboard {
            // The modal content is on screen now, so its controls may respond.
            app.state.dashboard.attach_modal();
        }

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for input; the timeout keeps animations and expiry ticking
        let timeout = match app.current_screen {
            Screen::Splash => Duration::from_millis(50),
            Screen::Dashboard => app.state.poll_timeout(Instant::now()),
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Skip events that are not KeyEventKind::Press
                    if key.kind == event::KeyEventKind::Release {
                        continue;
                    }

                    match app.current_screen {
                        Screen::Splash => {
                            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                                return Ok(());
                            }
                            // Any other key skips the splash screen
                            app.current_screen = Screen::Dashboard;
                        }
                        Screen::Dashboard => {
                            if app.state.handle_key(key, Instant::now()) {
                                return Ok(());
                            }
                        }
                    }
                }
                Event::Mouse(mouse) if app.current_screen == Screen::Dashboard => {
                    app.state.handle_mouse(mouse, Instant::now());
                }
                _ => {}
            }
        }
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, state: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, state),
    }
}
