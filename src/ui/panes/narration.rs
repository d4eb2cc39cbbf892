//! Narration pane: every message of the current sequence, current step marked

use crate::snapshot::StepSequence;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the narration pane
///
/// Steps after the cursor are dimmed, and the list scrolls so the current step
/// stays visible.
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    sequence: Option<&StepSequence>,
    cursor: usize,
    scroll_offset: &mut usize,
) {
    let title = match sequence {
        Some(sequence) => format!(" {} ", sequence.operation()),
        None => " Steps ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let Some(sequence) = sequence else {
        let paragraph = Paragraph::new("(no operation yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if cursor < *scroll_offset {
        *scroll_offset = cursor;
    } else if cursor >= *scroll_offset + visible_height {
        *scroll_offset = cursor + 1 - visible_height;
    }

    let items: Vec<ListItem> = sequence
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, step)| {
            let (marker, style) = if i == cursor {
                (
                    "▶ ",
                    Style::default()
                        .fg(DEFAULT_THEME.border_focused)
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else if i < cursor {
                ("  ", Style::default().fg(DEFAULT_THEME.fg))
            } else {
                ("  ", Style::default().fg(DEFAULT_THEME.comment))
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3} ", i + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(marker, style),
                Span::styled(step.message.clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
