//! Application state for the TUI.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use feelone_core::screen::{EditKey, Screen};
use feelone_core::{Controller, Intent, View};
use rand::rngs::StdRng;

/// Longest the event loop waits for a key before re-checking timers.
pub const MAX_POLL: Duration = Duration::from_millis(100);

/// Main application state.
pub struct App {
    /// Session controller
    pub controller: Controller<StdRng>,
    /// When the controller clock started
    started: Instant,
    /// Whether the app should exit
    pub should_quit: bool,
}

impl App {
    /// Create a new App around a controller whose clock starts now.
    pub fn new(controller: Controller<StdRng>) -> Self {
        Self {
            controller,
            started: Instant::now(),
            should_quit: false,
        }
    }

    /// Fire any screen timers that are due.
    pub fn tick(&mut self) {
        self.controller.advance(self.started.elapsed());
    }

    /// How long to wait for input before the next timer needs attention.
    pub fn poll_timeout(&self) -> Duration {
        let elapsed = self.started.elapsed();
        let behind = elapsed.saturating_sub(self.controller.now());
        self.controller
            .time_until_next_timer()
            .map(|wait| wait.saturating_sub(behind))
            .unwrap_or(MAX_POLL)
            .min(MAX_POLL)
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Catch the clock up so timers started by this key count from now
        self.tick();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('l') => {
                    self.controller.dispatch(Intent::Logout);
                    return;
                }
                _ => {}
            }
        }

        match self.controller.view() {
            View::Auth => self.handle_auth_key(key),
            View::DevNotice => self.handle_dev_notice_key(key),
            View::Input => self.handle_input_key(key),
            View::Analyzing => self.handle_analyzing_key(key),
            View::Results => self.handle_results_key(key),
            View::Profile => self.handle_profile_key(key),
        }
    }

    fn handle_auth_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.controller.dispatch(Intent::Login),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.dispatch(Intent::ToggleAuthMode);
            }
            _ => self.dispatch_edit(key),
        }
    }

    fn handle_dev_notice_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.dispatch(Intent::ProceedFromDevNotice);
            }
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            // Alt+Enter inserts a line break; plain Enter continues
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                self.controller.dispatch(Intent::Edit(EditKey::Newline));
            }
            KeyCode::Enter => self.controller.dispatch(Intent::SubmitInput),
            _ => self.dispatch_edit(key),
        }
    }

    fn handle_analyzing_key(&mut self, key: KeyEvent) {
        if let KeyCode::Esc | KeyCode::Char('q') = key.code {
            self.should_quit = true;
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        // The mock-data notice swallows the first key, like a modal sheet
        if let Screen::Results(results) = self.controller.screen() {
            if results.notice_visible {
                self.controller.dispatch(Intent::DismissNotice);
                return;
            }
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => self.controller.dispatch(Intent::ExploreAnother),
            KeyCode::Esc | KeyCode::Char('c') => self.controller.dispatch(Intent::Close),
            KeyCode::Char('p') => self.controller.dispatch(Intent::OpenProfile),
            KeyCode::Char('l') => self.controller.dispatch(Intent::Logout),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) {
        let editing = matches!(self.controller.screen(), Screen::Profile(form) if form.editing);

        if editing {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    self.controller.dispatch(Intent::ToggleProfileEdit);
                }
                _ => self.dispatch_edit(key),
            }
            return;
        }

        match key.code {
            KeyCode::Char('e') | KeyCode::Enter => {
                self.controller.dispatch(Intent::ToggleProfileEdit);
            }
            KeyCode::Esc | KeyCode::Char('b') => self.controller.dispatch(Intent::LeaveProfile),
            KeyCode::Char('l') => self.controller.dispatch(Intent::Logout),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Route text-editing keys to the active form.
    fn dispatch_edit(&mut self, key: KeyEvent) {
        let edit = match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                EditKey::Char(c)
            }
            KeyCode::Backspace => EditKey::Backspace,
            KeyCode::Tab | KeyCode::Down => EditKey::NextField,
            KeyCode::BackTab | KeyCode::Up => EditKey::PrevField,
            _ => return,
        };
        self.controller.dispatch(Intent::Edit(edit));
    }
}
