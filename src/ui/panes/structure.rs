//! Structure pane rendering
//!
//! Draws the projected snapshot on a ratatui [`Canvas`]. Edges are canvas lines,
//! nodes are text labels centred on their projected position. Layout y grows
//! downward, canvas y grows upward, so every y is negated here.

use crate::config::constants::CELL_WIDTH;
use crate::layout::{project, Point, PositionedNode, Projection};
use crate::model::sequence::ContainerKind;
use crate::snapshot::{ArrayView, ContainerView, Highlight, SortNode, Structure, Target};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Line as CanvasLine},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Vertical padding around the drawing, in layout units
const PAD_Y: f64 = 60.0;

/// Offset of pointer labels below array cells
const POINTER_ROW: f64 = 35.0;

/// Render the structure pane
pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    structure: &Structure,
    highlight: &Highlight,
    is_playing: bool,
) {
    let border_style = if is_playing {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let projection = project(structure);
    let Some((min, max)) = projection.bounds() else {
        let paragraph = Paragraph::new("(empty) press r for random values")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let x_bounds = [min.x - CELL_WIDTH * 2.0, max.x + CELL_WIDTH * 2.0];
    let y_bounds = [-max.y - PAD_Y, -min.y + PAD_Y];
    let inner_width = area.width.saturating_sub(2).max(1) as f64;
    let char_width = (x_bounds[1] - x_bounds[0]) / inner_width;

    let labels: Vec<(Point, Line<'static>)> = projection
        .nodes
        .iter()
        .map(|node| (node.position, node_line(node, structure, highlight)))
        .collect();
    let pointers = pointer_labels(structure, &projection);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for edge in &projection.edges {
                let color = edge
                    .target
                    .and_then(|target| highlight.role_of(target))
                    .map_or(DEFAULT_THEME.comment, |role| DEFAULT_THEME.role(role));
                ctx.draw(&CanvasLine::new(
                    edge.from.x,
                    -edge.from.y,
                    edge.to.x,
                    -edge.to.y,
                    color,
                ));
            }
            for (position, line) in &labels {
                let half = line.width() as f64 * char_width / 2.0;
                ctx.print(position.x - half, -position.y, line.clone());
            }
            for (position, text) in &pointers {
                let half = text.chars().count() as f64 * char_width / 2.0;
                ctx.print(
                    position.x - half,
                    -position.y - POINTER_ROW,
                    Line::styled(text.clone(), Style::default().fg(DEFAULT_THEME.pointer)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn role_style(highlight: &Highlight, target: Target) -> Style {
    match highlight.role_of(target) {
        Some(role) => Style::default()
            .fg(DEFAULT_THEME.role(role))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(DEFAULT_THEME.node),
    }
}

fn node_line(node: &PositionedNode, structure: &Structure, highlight: &Highlight) -> Line<'static> {
    match (node.target, structure) {
        (Target::SortNode(id), Structure::SortForest(forest)) => forest
            .iter()
            .find(|sort_node| sort_node.id == id)
            .map_or_else(Line::default, |sort_node| sort_line(sort_node, highlight)),
        (Target::Index(i), Structure::Array(view)) if view.is_discarded(i) => Line::styled(
            format!("[{}]", node.label),
            Style::default().fg(DEFAULT_THEME.discarded),
        ),
        (Target::Node(_), _) => Line::styled(
            format!("({})", node.label),
            role_style(highlight, node.target),
        ),
        _ => Line::styled(
            format!("[{}]", node.label),
            role_style(highlight, node.target),
        ),
    }
}

/// One span per cell so each cell can carry its own role
fn sort_line(node: &SortNode, highlight: &Highlight) -> Line<'static> {
    let frame_style = role_style(highlight, Target::SortNode(node.id));
    let mut spans = vec![Span::styled("[", frame_style)];
    for (index, value) in node.values.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" ", frame_style));
        }
        let cell = Target::SortCell {
            node: node.id,
            index,
        };
        let style = if highlight.role_of(cell).is_some() {
            role_style(highlight, cell)
        } else {
            frame_style
        };
        spans.push(Span::styled(value.to_string(), style));
    }
    spans.push(Span::styled("]", frame_style));
    Line::from(spans)
}

/// Text shown under individual cells (search pointers, stack top, list head)
fn pointer_labels(structure: &Structure, projection: &Projection) -> Vec<(Point, String)> {
    let labels = match structure {
        Structure::Array(view) => array_pointers(view),
        Structure::Container(view) => container_pointers(view),
        _ => Vec::new(),
    };
    labels
        .into_iter()
        .filter_map(|(index, text)| Some((projection.position(Target::Index(index))?, text)))
        .collect()
}

fn array_pointers(view: &ArrayView) -> Vec<(usize, String)> {
    let mut labels: Vec<(usize, Vec<&str>)> = Vec::new();
    let mut add = |index: Option<usize>, name| {
        if let Some(index) = index.filter(|i| *i < view.values.len()) {
            match labels.iter_mut().find(|(i, _)| *i == index) {
                Some((_, names)) => names.push(name),
                None => labels.push((index, vec![name])),
            }
        }
    };
    let in_range = |pointer: Option<isize>| pointer.and_then(|p| usize::try_from(p).ok());
    add(in_range(view.low), "L");
    add(view.mid, "M");
    add(in_range(view.high), "H");
    add(view.current, "^");
    labels
        .into_iter()
        .map(|(index, names)| (index, names.join(" ")))
        .collect()
}

fn container_pointers(view: &ContainerView) -> Vec<(usize, String)> {
    let Some(last) = view.items.len().checked_sub(1) else {
        return Vec::new();
    };
    match view.kind {
        ContainerKind::Stack => vec![(last, "top".to_string())],
        ContainerKind::Queue if last == 0 => vec![(0, "rear front".to_string())],
        ContainerKind::Queue => vec![(0, "rear".to_string()), (last, "front".to_string())],
        ContainerKind::LinkedList => vec![(0, "head".to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_pointers_share_cells() {
        let view = ArrayView {
            low: Some(2),
            high: Some(2),
            mid: Some(2),
            ..ArrayView::plain(vec![1, 2, 3])
        };
        assert_eq!(array_pointers(&view), vec![(2, "L M H".to_string())]);
    }

    #[test]
    fn test_array_pointers_skip_out_of_range() {
        let view = ArrayView {
            low: Some(3),
            high: Some(-1),
            ..ArrayView::plain(vec![1, 2, 3])
        };
        assert!(array_pointers(&view).is_empty());
    }

    #[test]
    fn test_queue_pointers() {
        let view = ContainerView {
            kind: ContainerKind::Queue,
            items: vec![3, 2, 1],
            capacity: 5,
        };
        assert_eq!(
            container_pointers(&view),
            vec![(0, "rear".to_string()), (2, "front".to_string())]
        );
    }
}
