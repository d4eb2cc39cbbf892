//! Status bar rendering with keybindings and playback indicators

use crate::session::{Notice, Severity};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Playback keys, shown for every visualizer
const PLAYBACK_KEYS: [(&str, &str); 4] = [
    ("←/→", "step"),
    ("⎵", "auto"),
    ("↵/⌫", "end/start"),
    ("q", "quit"),
];

/// Render the status bar at the bottom.
///
/// `cursor` is `None` when no sequence is installed.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    notice: Option<&Notice>,
    cursor: Option<usize>,
    total_steps: usize,
    is_playing: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let is_error = notice.is_some_and(|notice| notice.severity == Severity::Error);
    let step_text = match cursor {
        Some(cursor) => format!(" Step {}/{} ", cursor + 1, total_steps),
        None => " Step -/- ".to_string(),
    };
    let text = notice.map_or(message, |notice| notice.text.as_str());

    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", text),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Playback keys, then the state badge
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in PLAYBACK_KEYS.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    let badge = |text: &'static str, bg: Color| {
        Span::styled(
            text,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };

    if let Some(cursor) = cursor {
        let is_at_end = cursor + 1 >= total_steps;
        if is_playing {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(badge(" ▶ PLAYING ", DEFAULT_THEME.secondary));
        } else if is_at_end {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(badge(" END ", DEFAULT_THEME.error));
        } else if cursor == 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(badge(" START ", DEFAULT_THEME.success));
        }
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
