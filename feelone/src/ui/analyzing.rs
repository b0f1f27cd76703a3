use super::*;

pub(super) fn render_analyzing_view(frame: &mut Frame, dots: &AnalyzingDots) {
    let (column, footer) = column_layout(frame.area());

    // Pad to a fixed width so the word doesn't shift as dots come and go
    let text = format!("Analysing{:<3}", dots.dots());
    let message = Paragraph::new(Span::styled(text, Style::default().fg(TEXT).bold()))
        .alignment(Alignment::Center);
    frame.render_widget(message, centered_rect(column.width, 1, column));

    render_footer(frame, &[("Ctrl-L", "log out"), ("q", "quit")], footer);
}
