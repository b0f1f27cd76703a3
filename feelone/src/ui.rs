//! UI rendering for the TUI.

mod analyzing;
mod auth;
mod input;
mod notice;
mod profile;
mod results;

use feelone_core::screen::{AnalyzingDots, AuthForm, InputScreen, ProfileForm, ResultsScreen};
use feelone_core::{EmotionRecord, Identity, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use analyzing::render_analyzing_view;
use auth::render_auth_view;
use input::render_input_view;
use notice::{render_demo_notice, render_dev_notice_view};
use profile::render_profile_view;
use results::render_results_view;

// ========== Palette ==========

/// Soft blue used for accents and borders
const ACCENT: Color = Color::Rgb(147, 197, 253);
/// Brighter blue for focused elements
const ACCENT_STRONG: Color = Color::Rgb(96, 165, 250);
/// Primary text
const TEXT: Color = Color::Rgb(240, 240, 240);
/// Secondary text
const TEXT_DIM: Color = Color::Rgb(140, 140, 140);
/// Footer key hints
const KEY_HINT: Color = Color::Yellow;

/// Widest the content column gets, mimicking a phone screen.
const COLUMN_WIDTH: u16 = 64;

/// Render the application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let controller = &app.controller;
    let session = controller.session();

    match controller.screen() {
        Screen::Auth(form) => render_auth_view(frame, form),
        Screen::DevNotice => render_dev_notice_view(frame),
        Screen::Input(input) => render_input_view(frame, input),
        Screen::Analyzing(dots) => render_analyzing_view(frame, dots),
        Screen::Results(results) => {
            if let Some(record) = &session.analysis {
                render_results_view(frame, record, results);
            }
        }
        Screen::Profile(form) => {
            if let Some(user) = &session.user {
                render_profile_view(frame, user, form);
            }
        }
    }
}

/// Centered content column and a one-line footer below it.
fn column_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
    let width = rows[0].width.min(COLUMN_WIDTH);
    let x = rows[0].x + (rows[0].width - width) / 2;
    (Rect { x, width, ..rows[0] }, rows[1])
}

/// A rectangle of the given size centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the app title bar.
fn render_header(frame: &mut Frame, title: &str, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" FeelOne", Style::default().fg(ACCENT).bold()),
        Span::styled(format!("  {}", title), Style::default().fg(TEXT_DIM)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(ACCENT)),
    );
    frame.render_widget(header, area);
}

/// Render a footer of `(key, label)` hints.
fn render_footer(frame: &mut Frame, hints: &[(&str, &str)], area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(*key, Style::default().fg(KEY_HINT)));
        spans.push(Span::raw(format!(" {}  ", label)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Rounded block used for cards.
fn card(title: &str, focused: bool) -> Block<'static> {
    let color = if focused { ACCENT_STRONG } else { ACCENT };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    if title.is_empty() {
        block
    } else {
        block
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(color).bold())
    }
}
