//! Session state machine.
//!
//! A [`Session`] says which screen is showing and carries the data that
//! outlives any single screen. It only changes through [`Session::transition`],
//! a pure function of the current session and an [`Event`]. Events that do not
//! apply to the current view leave the session untouched.
//!
//! ```text
//! Auth ──login──▶ DevNotice ──proceed──▶ Input ──submit──▶ Analyzing
//!   │                                     ▲                    │
//!   └──────────────(notices off)──────────┘                 complete
//!                                         │                    ▼
//!                  explore another / close ◀───────────── Results
//!                                         ▲                    │
//!                                         └──leave── Profile ◀─┘
//! ```
//!
//! `logout` returns to `Auth` from anywhere.

use crate::content::{prompt_for, EmotionRecord};
use crate::validation::can_proceed;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Sign in / sign up
    #[default]
    Auth,
    /// "Still in development" notice shown after login
    DevNotice,
    /// Prompt and feelings entry box
    Input,
    /// Scripted delay before results
    Analyzing,
    /// Canned analysis
    Results,
    /// Account details
    Profile,
}

impl View {
    /// Short name used in logs and headers.
    pub fn name(&self) -> &'static str {
        match self {
            View::Auth => "auth",
            View::DevNotice => "dev-notice",
            View::Input => "input",
            View::Analyzing => "analyzing",
            View::Results => "results",
            View::Profile => "profile",
        }
    }
}

/// Mock account details. Accepted unconditionally at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub email: String,
}

/// Something that happened which may move the session to another view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Login(Identity),
    ProceedFromDevNotice,
    SubmitInput(String),
    /// Carries the record to show; the caller samples it.
    CompleteAnalysis(EmotionRecord),
    ExploreAnother,
    Close,
    OpenProfile,
    LeaveProfile,
    Logout,
}

impl Event {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Login(_) => "login",
            Event::ProceedFromDevNotice => "proceed-from-dev-notice",
            Event::SubmitInput(_) => "submit-input",
            Event::CompleteAnalysis(_) => "complete-analysis",
            Event::ExploreAnother => "explore-another",
            Event::Close => "close",
            Event::OpenProfile => "open-profile",
            Event::LeaveProfile => "leave-profile",
            Event::Logout => "logout",
        }
    }
}

/// Session-scoped state.
///
/// `analysis` is set exactly when `view` is [`View::Results`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    /// Active screen
    pub view: View,
    /// How many times the user chose to explore another feeling since the
    /// last close or logout
    pub session_count: usize,
    /// Result being shown
    pub analysis: Option<EmotionRecord>,
    /// Logged-in account
    pub user: Option<Identity>,
}

impl Session {
    /// A fresh session on the auth screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompt for the current session count.
    pub fn prompt(&self) -> &'static str {
        prompt_for(self.session_count)
    }

    /// Apply `event`, returning the next session.
    ///
    /// `show_notices` decides whether login goes through the dev notice.
    pub fn transition(&self, event: Event, show_notices: bool) -> Session {
        match (self.view, event) {
            (View::Auth, Event::Login(identity)) => Session {
                view: if show_notices {
                    View::DevNotice
                } else {
                    View::Input
                },
                user: Some(identity),
                ..self.clone()
            },
            (View::DevNotice, Event::ProceedFromDevNotice) => Session {
                view: View::Input,
                ..self.clone()
            },
            (View::Input, Event::SubmitInput(text)) if can_proceed(&text) => Session {
                view: View::Analyzing,
                ..self.clone()
            },
            (View::Analyzing, Event::CompleteAnalysis(record)) => Session {
                view: View::Results,
                analysis: Some(record),
                ..self.clone()
            },
            (View::Results, Event::ExploreAnother) => Session {
                view: View::Input,
                analysis: None,
                session_count: self.session_count.saturating_add(1),
                ..self.clone()
            },
            (View::Results, Event::Close) => Session {
                view: View::Input,
                analysis: None,
                session_count: 0,
                ..self.clone()
            },
            (View::Results, Event::OpenProfile) if self.user.is_some() => Session {
                view: View::Profile,
                analysis: None,
                ..self.clone()
            },
            (View::Profile, Event::LeaveProfile) => Session {
                view: View::Input,
                ..self.clone()
            },
            (_, Event::Logout) => Session::new(),
            _ => self.clone(),
        }
    }

    /// Apply `event` in place. Returns true if anything changed.
    pub fn apply(&mut self, event: Event, show_notices: bool) -> bool {
        let next = self.transition(event, show_notices);
        let changed = next != *self;
        *self = next;
        changed
    }
}
