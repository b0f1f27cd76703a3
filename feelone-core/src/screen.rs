//! Screen-local state.
//!
//! Each mount of a view gets a fresh [`Screen`]. Nothing here outlives the
//! mount: leaving a view and coming back starts over. The session itself is
//! never touched from this module.

use crate::session::{Identity, View};
use crate::validation::can_proceed;

/// Domain used when an account is created without an email.
pub const DEFAULT_EMAIL_DOMAIN: &str = "feelone.com";

/// A key press routed to whichever form the active screen has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Char(char),
    Backspace,
    Newline,
    NextField,
    PrevField,
}

// ============================================
// Typewriter
// ============================================

/// Where the prompt reveal is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    /// Characters are still being revealed
    Typing,
    /// Prompt fully shown, waiting before the entry box appears
    Pausing,
    /// Entry box visible and accepting input
    Ready,
}

/// Character-by-character reveal of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    prompt: &'static str,
    shown: usize,
    total: usize,
    phase: TypingPhase,
    focused: bool,
}

impl Typewriter {
    pub fn new(prompt: &'static str) -> Self {
        Self {
            prompt,
            shown: 0,
            total: prompt.chars().count(),
            phase: TypingPhase::Typing,
            focused: false,
        }
    }

    /// Reveal one more character.
    ///
    /// Returns true once the whole prompt is showing, at which point the
    /// typewriter moves to [`TypingPhase::Pausing`].
    pub fn tick(&mut self) -> bool {
        if self.phase != TypingPhase::Typing {
            return true;
        }
        if self.shown < self.total {
            self.shown += 1;
        }
        if self.shown == self.total {
            self.phase = TypingPhase::Pausing;
            return true;
        }
        false
    }

    /// The pause after typing is over.
    pub fn finish_pause(&mut self) {
        if self.phase == TypingPhase::Pausing {
            self.phase = TypingPhase::Ready;
        }
    }

    /// Focus the entry box. Only meaningful once ready.
    pub fn focus(&mut self) {
        if self.phase == TypingPhase::Ready {
            self.focused = true;
        }
    }

    /// The revealed prefix of the prompt.
    pub fn visible(&self) -> &'static str {
        match self.prompt.char_indices().nth(self.shown) {
            Some((byte_idx, _)) => &self.prompt[..byte_idx],
            None => self.prompt,
        }
    }

    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == TypingPhase::Ready
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

// ============================================
// Input
// ============================================

/// Prompt reveal plus the feelings entry box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputScreen {
    pub typewriter: Typewriter,
    text: String,
    proceed_enabled: bool,
}

impl InputScreen {
    pub fn new(prompt: &'static str) -> Self {
        Self {
            typewriter: Typewriter::new(prompt),
            text: String::new(),
            proceed_enabled: false,
        }
    }

    /// Apply an edit. Ignored until the entry box is showing.
    pub fn edit(&mut self, key: EditKey) {
        if !self.typewriter.is_ready() {
            return;
        }
        match key {
            EditKey::Char(c) => self.text.push(c),
            EditKey::Newline => self.text.push('\n'),
            EditKey::Backspace => {
                self.text.pop();
            }
            EditKey::NextField | EditKey::PrevField => {}
        }
        self.proceed_enabled = can_proceed(&self.text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the Continue action is offered.
    pub fn proceed_enabled(&self) -> bool {
        self.proceed_enabled
    }
}

// ============================================
// Analyzing
// ============================================

/// Cosmetic dot cycle: 0, 1, 2, 3, 0, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyzingDots {
    count: u8,
}

impl AnalyzingDots {
    pub fn tick(&mut self) {
        self.count = (self.count + 1) % 4;
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn dots(&self) -> &'static str {
        &"..."[..self.count as usize]
    }
}

// ============================================
// Results
// ============================================

/// Results screen state. The record itself lives on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultsScreen {
    /// Whether the "mock data" overlay is open
    pub notice_visible: bool,
}

// ============================================
// Auth
// ============================================

/// Sign in or create an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

/// Form fields on the auth screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Username,
    Password,
}

/// Mock sign-in form. Every submission succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub username: String,
    pub password: String,
    focus_index: usize,
}

impl AuthForm {
    /// Fields visible in the current mode, top to bottom.
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::SignIn => &[AuthField::Username, AuthField::Password],
            AuthMode::SignUp => &[AuthField::Email, AuthField::Username, AuthField::Password],
        }
    }

    pub fn focus(&self) -> AuthField {
        let fields = self.fields();
        fields[self.focus_index.min(fields.len() - 1)]
    }

    /// Switch between sign-in and sign-up. Focus returns to the first field.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        self.focus_index = 0;
    }

    pub fn edit(&mut self, key: EditKey) {
        let len = self.fields().len();
        match key {
            EditKey::NextField => self.focus_index = (self.focus_index + 1) % len,
            EditKey::PrevField => self.focus_index = (self.focus_index + len - 1) % len,
            EditKey::Char(c) => self.field_mut().push(c),
            EditKey::Backspace => {
                self.field_mut().pop();
            }
            EditKey::Newline => {}
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus() {
            AuthField::Email => &mut self.email,
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
        }
    }

    /// Identity to log in with.
    ///
    /// A missing username falls back to the local part of the email, and a
    /// missing email is made up from the username.
    pub fn identity(&self) -> Identity {
        let username = if self.username.is_empty() {
            self.email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string()
        } else {
            self.username.clone()
        };
        let email = if self.email.is_empty() {
            format!("{}@{}", self.username, DEFAULT_EMAIL_DOMAIN)
        } else {
            self.email.clone()
        };
        Identity { username, email }
    }
}

// ============================================
// Profile
// ============================================

/// Editable personal details on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Age,
    Gender,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [
        ProfileField::Name,
        ProfileField::Age,
        ProfileField::Gender,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Age => "Age",
            ProfileField::Gender => "Gender",
        }
    }
}

/// Profile details form. Saving only leaves edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileForm {
    pub editing: bool,
    pub name: String,
    pub age: String,
    pub gender: String,
    focus_index: usize,
}

impl ProfileForm {
    pub fn focus(&self) -> ProfileField {
        ProfileField::ALL[self.focus_index]
    }

    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Age => &self.age,
            ProfileField::Gender => &self.gender,
        }
    }

    /// Enter edit mode, or save and leave it.
    pub fn toggle_edit(&mut self) {
        if self.editing {
            self.save();
        } else {
            self.editing = true;
            self.focus_index = 0;
        }
    }

    fn save(&mut self) {
        self.editing = false;
        tracing::info!("Profile details saved (not persisted)");
    }

    /// Apply an edit. Ignored outside edit mode.
    pub fn edit(&mut self, key: EditKey) {
        if !self.editing {
            return;
        }
        let len = ProfileField::ALL.len();
        match key {
            EditKey::NextField => self.focus_index = (self.focus_index + 1) % len,
            EditKey::PrevField => self.focus_index = (self.focus_index + len - 1) % len,
            EditKey::Char(c) => {
                let field = self.focus();
                if field == ProfileField::Age && !c.is_ascii_digit() {
                    return;
                }
                self.field_mut(field).push(c);
            }
            EditKey::Backspace => {
                let field = self.focus();
                self.field_mut(field).pop();
            }
            EditKey::Newline => {}
        }
    }

    fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Age => &mut self.age,
            ProfileField::Gender => &mut self.gender,
        }
    }
}

// ============================================
// Screen
// ============================================

/// Local state of the mounted screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Auth(AuthForm),
    DevNotice,
    Input(InputScreen),
    Analyzing(AnalyzingDots),
    Results(ResultsScreen),
    Profile(ProfileForm),
}

impl Screen {
    /// Fresh state for a mount of `view`.
    pub fn mount(view: View, prompt: &'static str) -> Self {
        match view {
            View::Auth => Screen::Auth(AuthForm::default()),
            View::DevNotice => Screen::DevNotice,
            View::Input => Screen::Input(InputScreen::new(prompt)),
            View::Analyzing => Screen::Analyzing(AnalyzingDots::default()),
            View::Results => Screen::Results(ResultsScreen::default()),
            View::Profile => Screen::Profile(ProfileForm::default()),
        }
    }

    /// The view this state belongs to.
    pub fn view(&self) -> View {
        match self {
            Screen::Auth(_) => View::Auth,
            Screen::DevNotice => View::DevNotice,
            Screen::Input(_) => View::Input,
            Screen::Analyzing(_) => View::Analyzing,
            Screen::Results(_) => View::Results,
            Screen::Profile(_) => View::Profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_input(prompt: &'static str) -> InputScreen {
        let mut screen = InputScreen::new(prompt);
        while !screen.typewriter.tick() {}
        screen.typewriter.finish_pause();
        screen
    }

    #[test]
    fn test_typewriter_reveals_prefixes() {
        let mut tw = Typewriter::new("Hey");
        assert_eq!(tw.visible(), "");
        assert!(!tw.tick());
        assert_eq!(tw.visible(), "H");
        assert!(!tw.tick());
        assert_eq!(tw.visible(), "He");
        assert!(tw.tick());
        assert_eq!(tw.visible(), "Hey");
        assert_eq!(tw.phase(), TypingPhase::Pausing);
        assert!(!tw.is_ready());
    }

    #[test]
    fn test_typewriter_multibyte_prompt() {
        let mut tw = Typewriter::new("héé");
        tw.tick();
        tw.tick();
        assert_eq!(tw.visible(), "hé");
    }

    #[test]
    fn test_typewriter_ready_then_focus() {
        let mut tw = Typewriter::new("ok");
        tw.focus();
        tw.finish_pause();
        assert!(!tw.is_focused());
        assert_eq!(tw.phase(), TypingPhase::Typing);

        while !tw.tick() {}
        tw.finish_pause();
        assert!(tw.is_ready());
        tw.focus();
        assert!(tw.is_focused());
    }

    #[test]
    fn test_typewriter_empty_prompt_finishes_on_first_tick() {
        let mut tw = Typewriter::new("");
        assert!(tw.tick());
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn test_input_ignored_before_ready() {
        let mut screen = InputScreen::new("Hi?");
        screen.edit(EditKey::Char('x'));
        assert_eq!(screen.text(), "");
    }

    #[test]
    fn test_input_toggles_proceed() {
        let mut screen = ready_input("Hi?");
        for c in "0123456789".chars() {
            screen.edit(EditKey::Char(c));
        }
        assert!(!screen.proceed_enabled());

        screen.edit(EditKey::Char('!'));
        assert!(screen.proceed_enabled());

        screen.edit(EditKey::Backspace);
        assert!(!screen.proceed_enabled());

        screen.edit(EditKey::Newline);
        assert_eq!(screen.text(), "0123456789\n");
        assert!(!screen.proceed_enabled());
    }

    #[test]
    fn test_dots_cycle() {
        let mut dots = AnalyzingDots::default();
        let mut seen = Vec::new();
        for _ in 0..5 {
            dots.tick();
            seen.push(dots.dots());
        }
        assert_eq!(seen, vec![".", "..", "...", "", "."]);
    }

    #[test]
    fn test_auth_identity_from_username() {
        let form = AuthForm {
            username: "sam".into(),
            ..Default::default()
        };
        let identity = form.identity();
        assert_eq!(identity.username, "sam");
        assert_eq!(identity.email, "sam@feelone.com");
    }

    #[test]
    fn test_auth_identity_from_email() {
        let form = AuthForm {
            mode: AuthMode::SignUp,
            email: "river@example.org".into(),
            ..Default::default()
        };
        let identity = form.identity();
        assert_eq!(identity.username, "river");
        assert_eq!(identity.email, "river@example.org");
    }

    #[test]
    fn test_auth_field_navigation() {
        let mut form = AuthForm::default();
        assert_eq!(form.focus(), AuthField::Username);
        form.edit(EditKey::Char('a'));
        form.edit(EditKey::NextField);
        assert_eq!(form.focus(), AuthField::Password);
        form.edit(EditKey::Char('p'));
        form.edit(EditKey::NextField);
        assert_eq!(form.focus(), AuthField::Username);
        form.edit(EditKey::PrevField);
        assert_eq!(form.focus(), AuthField::Password);

        assert_eq!(form.username, "a");
        assert_eq!(form.password, "p");

        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::SignUp);
        assert_eq!(form.focus(), AuthField::Email);
        form.edit(EditKey::Char('e'));
        assert_eq!(form.email, "e");
    }

    #[test]
    fn test_profile_editing() {
        let mut form = ProfileForm::default();
        form.edit(EditKey::Char('x'));
        assert_eq!(form.name, "");

        form.toggle_edit();
        assert!(form.editing);
        form.edit(EditKey::Char('J'));
        form.edit(EditKey::NextField);
        form.edit(EditKey::Char('3'));
        form.edit(EditKey::Char('a'));
        form.edit(EditKey::Char('0'));
        form.edit(EditKey::NextField);
        form.edit(EditKey::Char('f'));

        assert_eq!(form.name, "J");
        assert_eq!(form.age, "30");
        assert_eq!(form.gender, "f");

        form.toggle_edit();
        assert!(!form.editing);
        assert_eq!(form.value(ProfileField::Age), "30");
    }

    #[test]
    fn test_mount_matches_view() {
        for view in [
            View::Auth,
            View::DevNotice,
            View::Input,
            View::Analyzing,
            View::Results,
            View::Profile,
        ] {
            assert_eq!(Screen::mount(view, "prompt").view(), view);
        }
    }
}
