use super::*;

/// Render the "still in development" screen shown after login.
pub(super) fn render_dev_notice_view(frame: &mut Frame) {
    let (column, footer) = column_layout(frame.area());

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(1),    // Message
    ])
    .split(column);

    render_header(frame, "", chunks[0]);

    let body = vec![
        Line::from(Span::styled("(!)", Style::default().fg(ACCENT).bold())),
        Line::from(""),
        Line::from(Span::styled(
            "This feature is still in development",
            Style::default().fg(TEXT).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Want to see a mock demo?",
            Style::default().fg(TEXT_DIM),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(KEY_HINT)),
            Span::styled(" Proceed →", Style::default().fg(ACCENT).bold()),
        ]),
    ];
    let height = body.len() as u16 + 2;
    let message = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(card("", false));
    frame.render_widget(message, centered_rect(chunks[1].width, height, chunks[1]));

    render_footer(frame, &[("Enter", "proceed"), ("q", "quit")], footer);
}

/// Render the "mock data" sheet over the bottom of the results screen.
pub(super) fn render_demo_notice(frame: &mut Frame, area: Rect) {
    let height = 9.min(area.height);
    let sheet = Rect {
        y: area.y + area.height - height,
        height,
        ..area
    };

    let body = vec![
        Line::from(vec![
            Span::raw("This is "),
            Span::styled(
                "mock data for demo purposes",
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" only."),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "The actual feature will use AI to provide personalized emotional insights based on your unique feelings and experiences.",
            Style::default().fg(TEXT_DIM),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("any key", Style::default().fg(KEY_HINT)),
            Span::styled(" Got it", Style::default().fg(ACCENT).bold()),
        ]),
    ];

    frame.render_widget(Clear, sheet);
    let paragraph = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(card("Demo Notice", true));
    frame.render_widget(paragraph, sheet);
}
