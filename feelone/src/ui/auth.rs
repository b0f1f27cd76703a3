use super::*;

use feelone_core::screen::{AuthField, AuthMode};

pub(super) fn render_auth_view(frame: &mut Frame, form: &AuthForm) {
    let (column, footer) = column_layout(frame.area());

    let (title, subtitle, submit) = match form.mode {
        AuthMode::SignIn => ("Sign in", "Welcome back", "Sign In"),
        AuthMode::SignUp => ("Create account", "Start your journey", "Sign Up"),
    };

    let fields = form.fields();
    let mut constraints = vec![
        Constraint::Length(3), // Header
        Constraint::Length(3), // Title
    ];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(2)); // Submit hint
    constraints.push(Constraint::Min(0));
    let chunks = Layout::vertical(constraints).split(column);

    render_header(frame, "", chunks[0]);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(title, Style::default().fg(TEXT).bold())),
        Line::from(Span::styled(subtitle, Style::default().fg(TEXT_DIM))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[1]);

    for (i, field) in fields.iter().enumerate() {
        let area = chunks[2 + i];
        let focused = form.focus() == *field;
        let (label, value) = match field {
            AuthField::Email => ("Email", form.email.clone()),
            AuthField::Username => (
                match form.mode {
                    AuthMode::SignIn => "Username or Email",
                    AuthMode::SignUp => "Username",
                },
                form.username.clone(),
            ),
            AuthField::Password => ("Password", "•".repeat(form.password.chars().count())),
        };

        let widget = Paragraph::new(Span::styled(value.clone(), Style::default().fg(TEXT)))
            .block(card(label, focused));
        frame.render_widget(widget, area);

        if focused && area.width > 2 && area.height > 2 {
            let offset = (value.chars().count() as u16).min(area.width.saturating_sub(3));
            frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
        }
    }

    let submit_line = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(KEY_HINT)),
        Span::styled(format!(" {}", submit), Style::default().fg(ACCENT).bold()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(submit_line, chunks[2 + fields.len()]);

    let toggle = match form.mode {
        AuthMode::SignIn => "create account",
        AuthMode::SignUp => "have an account? sign in",
    };
    render_footer(
        frame,
        &[
            ("Tab", "next field"),
            ("Enter", "submit"),
            ("Ctrl-T", toggle),
            ("Esc", "quit"),
        ],
        footer,
    );
}
