//! Input line: the active prompt, or the visualizer's operation keys

use crate::session::VisualizerKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Key hints for the operations a visualizer supports
pub fn operation_keys(kind: VisualizerKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        VisualizerKind::Stack => &[
            ("i", "push"),
            ("o", "pop"),
            ("p", "peek"),
            ("c", "clear"),
            ("r", "random"),
        ],
        VisualizerKind::Queue => &[
            ("i", "enqueue"),
            ("o", "dequeue"),
            ("p", "front"),
            ("c", "clear"),
            ("r", "random"),
        ],
        VisualizerKind::LinkedList => &[
            ("i", "append"),
            ("a", "insert at"),
            ("d", "delete at"),
            ("o", "delete head"),
            ("t", "delete tail"),
            ("c", "clear"),
            ("r", "random"),
        ],
        VisualizerKind::Bst => &[
            ("i", "insert"),
            ("d", "delete"),
            ("s", "search"),
            ("r", "random tree"),
        ],
        VisualizerKind::MergeSort => &[("s", "sort"), ("r", "random array")],
        VisualizerKind::BinarySearch | VisualizerKind::LinearSearch => {
            &[("s", "search"), ("r", "random array")]
        }
    }
}

/// Render the input line
///
/// `prompt` is `Some` while a value is being typed.
pub fn render_input_line(
    frame: &mut Frame,
    area: Rect,
    kind: VisualizerKind,
    prompt: Option<(&str, &str)>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if prompt.is_some() {
            DEFAULT_THEME.border_focused
        } else {
            DEFAULT_THEME.border_normal
        }));

    let line = match prompt {
        Some((label, buffer)) => Line::from(vec![
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("█", Style::default().fg(DEFAULT_THEME.comment)),
        ]),
        None => {
            let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
            let desc_style = Style::default().fg(DEFAULT_THEME.fg);
            let mut spans = Vec::new();
            for (key, desc) in operation_keys(kind) {
                spans.push(Span::styled(format!(" {} ", key), key_style));
                spans.push(Span::styled(format!(" {}  ", desc), desc_style));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
