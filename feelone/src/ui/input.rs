use super::*;

pub(super) fn render_input_view(frame: &mut Frame, input: &InputScreen) {
    let (column, footer) = column_layout(frame.area());
    let typewriter = &input.typewriter;

    // Entry box grows with the wrapped text, up to a third of the screen
    let rows = wrap_entry(input.text(), column.width.saturating_sub(2));
    let entry_height = u16::try_from(rows.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .clamp(3, (column.height / 3).max(3));

    let chunks = Layout::vertical([
        Constraint::Length(3),            // Header
        Constraint::Length(1),            // Spacer
        Constraint::Length(4),            // Prompt
        Constraint::Length(entry_height), // Entry box
        Constraint::Min(0),
        Constraint::Length(2), // Continue
    ])
    .split(column);

    render_header(frame, "", chunks[0]);

    // Prompt with a trailing caret while it is being typed
    let mut prompt = vec![Span::styled(
        typewriter.visible(),
        Style::default().fg(TEXT).bold(),
    )];
    if !typewriter.is_ready() {
        prompt.push(Span::styled("▌", Style::default().fg(ACCENT)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(prompt)).wrap(Wrap { trim: false }),
        chunks[2],
    );

    if typewriter.is_ready() {
        let area = chunks[3];
        let visible_rows = usize::from(area.height.saturating_sub(2));
        // Keep the last row, where the cursor sits, in view
        let scroll = rows.len().saturating_sub(visible_rows);
        let cursor_row = rows.len().saturating_sub(1).saturating_sub(scroll);
        let cursor_col = rows.last().map_or(0, |row| row.chars().count());

        let lines: Vec<Line> = rows
            .into_iter()
            .skip(scroll)
            .map(|row| Line::from(Span::styled(row, Style::default().fg(TEXT))))
            .collect();
        let entry = Paragraph::new(lines).block(card("", typewriter.is_focused()));
        frame.render_widget(entry, area);

        if typewriter.is_focused() && area.width > 2 && area.height > 2 {
            let col = u16::try_from(cursor_col)
                .unwrap_or(u16::MAX)
                .min(area.width.saturating_sub(3));
            let row = u16::try_from(cursor_row)
                .unwrap_or(u16::MAX)
                .min(area.height.saturating_sub(3));
            frame.set_cursor_position((area.x + 1 + col, area.y + 1 + row));
        }
    }

    if input.proceed_enabled() {
        let proceed = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(KEY_HINT)),
            Span::styled(" Continue →", Style::default().fg(ACCENT).bold()),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(proceed, chunks[5]);
    }

    let hints: &[(&str, &str)] = if typewriter.is_ready() {
        &[
            ("Enter", "continue"),
            ("Alt-Enter", "new line"),
            ("Ctrl-L", "log out"),
            ("Esc", "quit"),
        ]
    } else {
        &[("Ctrl-L", "log out"), ("Esc", "quit")]
    };
    render_footer(frame, hints, footer);
}

/// Break the entry into rows of at most `width` characters.
///
/// A row that ends exactly at the edge gets an empty row after it so the
/// cursor has somewhere to go.
fn wrap_entry(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    if rows.last().is_some_and(|row| row.chars().count() == width) {
        rows.push(String::new());
    }
    rows
}
