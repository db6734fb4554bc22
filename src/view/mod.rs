//! TUI rendering and terminal management (impure shell)

pub mod layout;
pub mod pagination;
pub mod post_list;
pub mod styles;
pub mod tabs;

pub use layout::render_app;
pub use pagination::{render_pagination, strip_text};
pub use post_list::render_post_list;
pub use styles::{ColorConfig, Styles};
pub use tabs::render_tab_bar;

use crate::config::{KeyBindings, LocationStore};
use crate::model::KeyAction;
use crate::source::PageSource;
use crate::state::{
    handle_nav_action, handle_page_action, handle_scroll_action, handle_tab_action, AppState,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// How long the loop waits for input before polling fetches again.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// page source so tests can run without threads.
pub struct TuiApp<B, S>
where
    B: ratatui::backend::Backend,
    S: PageSource,
{
    terminal: Terminal<B>,
    app_state: AppState<S>,
    key_bindings: KeyBindings,
    styles: Styles,
    location_store: Option<LocationStore>,
}

impl<S: PageSource> TuiApp<CrosstermBackend<Stdout>, S> {
    /// Create the application on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState<S>,
        styles: Styles,
        location_store: Option<LocationStore>,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            styles,
            location_store,
        ))
    }
}

impl<B, S> TuiApp<B, S>
where
    B: ratatui::backend::Backend,
    S: PageSource,
{
    /// Create the application on any backend.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState<S>,
        key_bindings: KeyBindings,
        styles: Styles,
        location_store: Option<LocationStore>,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles,
            location_store,
        }
    }

    /// Application state.
    pub fn app_state(&self) -> &AppState<S> {
        &self.app_state
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Run the main event loop
    ///
    /// Mounts the starting screen, then alternates between input and
    /// collecting finished fetches. Returns when the user quits; the
    /// current location is saved on the way out.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.app_state.mount();
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            break;
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.tick() {
                self.draw()?;
            }
        }

        self.save_location();
        Ok(())
    }

    /// Collect finished fetches. Returns `true` if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.app_state.poll()
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if rebound
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        self.dispatch(action)
    }

    /// Apply an action. Returns true for `Quit`.
    pub fn dispatch(&mut self, action: KeyAction) -> bool {
        debug!(?action, "dispatching key action");
        match action {
            KeyAction::Quit => return true,
            KeyAction::ScrollUp | KeyAction::ScrollDown => {
                handle_scroll_action(&mut self.app_state, action)
            }
            KeyAction::NextTab | KeyAction::PrevTab | KeyAction::CycleSort => {
                handle_tab_action(&mut self.app_state, action)
            }
            KeyAction::GoHome | KeyAction::GoMyPage | KeyAction::Back | KeyAction::Forward => {
                handle_nav_action(&mut self.app_state, action)
            }
            KeyAction::Refresh => handle_page_action(&mut self.app_state, action),
            _ if action.is_page_action() => handle_page_action(&mut self.app_state, action),
            _ => {}
        }
        false
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| render_app(frame, state, styles))?;
        Ok(())
    }

    fn save_location(&self) {
        let Some(store) = &self.location_store else {
            return;
        };
        let route = self.app_state.route();
        match store.save(route) {
            Ok(()) => info!(location = %route, "saved location"),
            Err(e) => warn!(path = %store.path().display(), error = %e, "failed to save location"),
        }
    }
}

/// Run the application on the real terminal until the user quits.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_state<S: PageSource>(
    app_state: AppState<S>,
    styles: Styles,
    location_store: Option<LocationStore>,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, styles, location_store)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
