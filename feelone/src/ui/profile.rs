use super::*;

use feelone_core::screen::ProfileField;

pub(super) fn render_profile_view(frame: &mut Frame, user: &Identity, form: &ProfileForm) {
    let (column, footer) = column_layout(frame.area());

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(4), // Account
        Constraint::Min(5),    // Personal details
    ])
    .split(column);

    render_header(frame, "Profile", chunks[0]);

    let account = Paragraph::new(vec![
        Line::from(Span::styled(
            user.username.as_str(),
            Style::default().fg(TEXT).bold(),
        )),
        Line::from(Span::styled(user.email.as_str(), Style::default().fg(TEXT_DIM))),
    ])
    .block(card("Account", false));
    frame.render_widget(account, chunks[1]);

    let action = if form.editing { "Save" } else { "Edit" };
    let mut lines = Vec::new();
    for field in ProfileField::ALL {
        let focused = form.editing && form.focus() == field;
        let value = form.value(field);
        let value_span = if value.is_empty() {
            Span::styled("—", Style::default().fg(TEXT_DIM))
        } else {
            Span::styled(value, Style::default().fg(TEXT))
        };
        let marker = if focused { "› " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT_STRONG)),
            Span::styled(format!("{:<8}", field.label()), Style::default().fg(TEXT_DIM)),
            value_span,
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Username ", Style::default().fg(TEXT_DIM)),
        Span::styled(user.username.as_str(), Style::default().fg(TEXT)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Email    ", Style::default().fg(TEXT_DIM)),
        Span::styled(user.email.as_str(), Style::default().fg(TEXT)),
    ]));

    let details = Paragraph::new(lines).block(
        card("Personal Details", form.editing).title_bottom(
            Line::from(Span::styled(
                format!(" {} ", action),
                Style::default().fg(KEY_HINT),
            ))
            .right_aligned(),
        ),
    );
    frame.render_widget(details, chunks[2]);

    let hints: &[(&str, &str)] = if form.editing {
        &[("Tab", "next field"), ("Enter", "save")]
    } else {
        &[("e", "edit"), ("Esc", "back"), ("l", "log out"), ("q", "quit")]
    };
    render_footer(frame, hints, footer);
}
