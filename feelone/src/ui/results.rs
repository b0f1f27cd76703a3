use super::*;

pub(super) fn render_results_view(
    frame: &mut Frame,
    record: &EmotionRecord,
    results: &ResultsScreen,
) {
    let area = frame.area();
    let (column, footer) = column_layout(area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(3),    // Analysis
    ])
    .split(column);

    render_header(frame, "Your Emotion", chunks[0]);

    let mut lines = vec![
        Line::from(Span::styled(
            "Emotion Identified",
            Style::default().fg(TEXT_DIM),
        )),
        Line::from(Span::styled(
            record.label,
            Style::default().fg(ACCENT_STRONG).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(record.understanding, Style::default().fg(TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            "Steps to Feel Better",
            Style::default().fg(TEXT_DIM),
        )),
    ];
    for (i, step) in record.steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), Style::default().fg(ACCENT).bold()),
            Span::styled(*step, Style::default().fg(TEXT)),
        ]));
    }

    let analysis = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(card("", false));
    frame.render_widget(analysis, chunks[1]);

    render_footer(
        frame,
        &[
            ("Enter", "explore another feeling"),
            ("c", "close"),
            ("p", "profile"),
            ("l", "log out"),
        ],
        footer,
    );

    if results.notice_visible {
        render_demo_notice(frame, column);
    }
}
