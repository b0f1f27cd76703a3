//! Controller: owns the session, the mounted screen, and its timers.
//!
//! The front end reads [`Controller::session`] and [`Controller::screen`],
//! sends user intents to [`Controller::dispatch`], and moves time forward
//! with [`Controller::advance`]. Whenever a transition changes the view, the
//! old screen's timers are cancelled before the new screen is mounted.

use std::time::Duration;

use rand::Rng;

use crate::config::TimingConfig;
use crate::content::select_random;
use crate::screen::{EditKey, Screen};
use crate::session::{Event, Session, View};
use crate::timer::{Fired, MountToken, Scheduler, TimerId};

/// What a user asked for. Intents that make no sense on the current screen
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Typing into the active form
    Edit(EditKey),
    /// Switch the auth form between sign-in and sign-up
    ToggleAuthMode,
    /// Submit the auth form
    Login,
    ProceedFromDevNotice,
    /// Submit the feelings entry
    SubmitInput,
    ExploreAnother,
    Close,
    /// Hide the mock-data overlay on results
    DismissNotice,
    OpenProfile,
    /// Edit or save profile details
    ToggleProfileEdit,
    LeaveProfile,
    Logout,
}

/// Timers a screen can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Reveal the next prompt character
    TypingTick,
    /// Pause after the prompt is fully typed
    RevealPause,
    /// Focus the entry box
    FocusInput,
    /// Advance the analyzing dots
    DotsTick,
    /// Finish analyzing
    AnalysisComplete,
    /// Open the mock-data overlay
    DemoNotice,
}

/// Drives a [`Session`] through its screens.
pub struct Controller<R> {
    session: Session,
    screen: Screen,
    scheduler: Scheduler<TimerKind>,
    mount: MountToken,
    typing_timer: Option<TimerId>,
    show_notices: bool,
    timing: TimingConfig,
    rng: R,
}

impl<R: Rng> Controller<R> {
    /// Start on the auth screen.
    pub fn new(show_notices: bool, timing: TimingConfig, rng: R) -> Self {
        let session = Session::new();
        let screen = Screen::mount(session.view, session.prompt());
        let mut controller = Self {
            session,
            screen,
            scheduler: Scheduler::new(),
            mount: MountToken::default(),
            typing_timer: None,
            show_notices,
            timing,
            rng,
        };
        controller.schedule_mount_timers();
        controller
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn view(&self) -> View {
        self.session.view
    }

    pub fn show_notices(&self) -> bool {
        self.show_notices
    }

    /// Current controller time.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Time until the next timer is due, if any is pending.
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        self.scheduler
            .next_deadline()
            .map(|due| due.saturating_sub(self.scheduler.now()))
    }

    /// Timers still pending (all owned by the current mount).
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Handle a user intent.
    pub fn dispatch(&mut self, intent: Intent) {
        match (intent, &mut self.screen) {
            (Intent::Edit(key), Screen::Auth(form)) => form.edit(key),
            (Intent::Edit(key), Screen::Input(input)) => input.edit(key),
            (Intent::Edit(key), Screen::Profile(form)) => form.edit(key),
            (Intent::ToggleAuthMode, Screen::Auth(form)) => form.toggle_mode(),
            (Intent::Login, Screen::Auth(form)) => {
                let identity = form.identity();
                self.apply(Event::Login(identity));
            }
            (Intent::ProceedFromDevNotice, Screen::DevNotice) => {
                self.apply(Event::ProceedFromDevNotice);
            }
            (Intent::SubmitInput, Screen::Input(input)) => {
                let text = input.text().to_string();
                self.apply(Event::SubmitInput(text));
            }
            (Intent::DismissNotice, Screen::Results(results)) => results.notice_visible = false,
            (Intent::ExploreAnother, Screen::Results(_)) => self.apply(Event::ExploreAnother),
            (Intent::Close, Screen::Results(_)) => self.apply(Event::Close),
            (Intent::OpenProfile, Screen::Results(_)) => self.apply(Event::OpenProfile),
            (Intent::ToggleProfileEdit, Screen::Profile(form)) => form.toggle_edit(),
            (Intent::LeaveProfile, Screen::Profile(_)) => self.apply(Event::LeaveProfile),
            (Intent::Logout, _) => self.apply(Event::Logout),
            (intent, screen) => {
                tracing::debug!(?intent, view = screen.view().name(), "Ignoring intent");
            }
        }
    }

    /// Fire every timer due at or before `now`, in deadline order.
    pub fn advance(&mut self, now: Duration) {
        while let Some(fired) = self.scheduler.pop_due(now) {
            self.on_timer(fired);
        }
    }

    /// Advance by `delta` from the current controller time.
    pub fn advance_by(&mut self, delta: Duration) {
        let now = self.scheduler.now() + delta;
        self.advance(now);
    }

    fn apply(&mut self, event: Event) {
        let from = self.session.view;
        let name = event.name();
        if !self.session.apply(event, self.show_notices) {
            tracing::debug!(event = name, view = from.name(), "Transition was a no-op");
            return;
        }

        let to = self.session.view;
        tracing::info!(
            event = name,
            from = from.name(),
            to = to.name(),
            session_count = self.session.session_count,
            "Session transition"
        );

        if from != to {
            self.remount();
        }
    }

    /// Tear down the mounted screen and mount the one for the current view.
    fn remount(&mut self) {
        let cancelled = self.scheduler.cancel_owner(self.mount);
        if cancelled > 0 {
            tracing::debug!(cancelled, "Cancelled timers from previous screen");
        }
        self.typing_timer = None;
        self.mount = self.mount.next();
        self.screen = Screen::mount(self.session.view, self.session.prompt());
        self.schedule_mount_timers();
    }

    fn schedule_mount_timers(&mut self) {
        let owner = self.mount;
        match self.session.view {
            View::Input => {
                let id = self.scheduler.schedule_repeating(
                    owner,
                    self.timing.typing_interval(),
                    TimerKind::TypingTick,
                );
                self.typing_timer = Some(id);
            }
            View::Analyzing => {
                self.scheduler
                    .schedule_repeating(owner, self.timing.dots_interval(), TimerKind::DotsTick);
                self.scheduler.schedule_once(
                    owner,
                    self.timing.analysis_delay(),
                    TimerKind::AnalysisComplete,
                );
            }
            View::Results if self.show_notices => {
                self.scheduler.schedule_once(
                    owner,
                    self.timing.demo_notice_delay(),
                    TimerKind::DemoNotice,
                );
            }
            _ => {}
        }
    }

    fn on_timer(&mut self, fired: Fired<TimerKind>) {
        tracing::debug!(
            kind = ?fired.kind,
            at_ms = self.scheduler.now().as_millis() as u64,
            "Timer fired"
        );
        let owner = self.mount;

        match (fired.kind, &mut self.screen) {
            (TimerKind::TypingTick, Screen::Input(input)) => {
                if input.typewriter.tick() {
                    if let Some(id) = self.typing_timer.take() {
                        self.scheduler.cancel(id);
                    }
                    self.scheduler.schedule_once(
                        owner,
                        self.timing.reveal_pause(),
                        TimerKind::RevealPause,
                    );
                }
            }
            (TimerKind::RevealPause, Screen::Input(input)) => {
                input.typewriter.finish_pause();
                self.scheduler
                    .schedule_once(owner, self.timing.focus_delay(), TimerKind::FocusInput);
            }
            (TimerKind::FocusInput, Screen::Input(input)) => input.typewriter.focus(),
            (TimerKind::DotsTick, Screen::Analyzing(dots)) => dots.tick(),
            (TimerKind::AnalysisComplete, Screen::Analyzing(_)) => {
                let record = select_random(&mut self.rng);
                self.apply(Event::CompleteAnalysis(record));
            }
            (TimerKind::DemoNotice, Screen::Results(results)) => results.notice_visible = true,
            (kind, screen) => {
                tracing::warn!(?kind, view = screen.view().name(), "Timer fired for wrong screen");
            }
        }
    }
}
