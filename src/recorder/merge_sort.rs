//! Step recording for merge sort
//!
//! The visible structure is a forest of sub-arrays. Splits add child nodes under
//! their parent; a merge empties the parent, refills it one write at a time while
//! the children stay visible for comparison, then drops the children.

use super::{format_values, Recorded, SequenceBuilder};
use crate::errors::VizError;
use crate::model::sort::{merge_sort, SortEvent, SortNodeId};
use crate::model::{Element, Side};
use crate::snapshot::{Highlight, Role, SortNode, SortNodeState, Structure, Target};

fn node_mut(forest: &mut [SortNode], id: SortNodeId) -> Option<&mut SortNode> {
    forest.iter_mut().find(|node| node.id == id)
}

fn split_message(forest: &[SortNode], parent: Option<SortNodeId>, values: &[Element]) -> String {
    let message = match parent.and_then(|p| forest.iter().find(|node| node.id == p)) {
        None => format!("Starting with the full array {}", format_values(values)),
        Some(parent_node) => {
            let side = if forest.iter().any(|node| node.parent == Some(parent_node.id)) {
                "Right"
            } else {
                "Left"
            };
            format!(
                "{} half of {}: {}",
                side,
                format_values(&parent_node.values),
                format_values(values)
            )
        }
    };
    if values.len() <= 1 {
        format!("{} (single element, already sorted)", message)
    } else {
        message
    }
}

/// Sort `values`, recording the split forest at every sub-action
pub fn record_merge_sort(values: &[Element]) -> Result<Recorded<Vec<Element>>, VizError> {
    if values.is_empty() {
        return Err(VizError::EmptyStructure);
    }

    let trace = merge_sort(values);
    let mut forest: Vec<SortNode> = Vec::new();
    let mut builder = SequenceBuilder::new("Merge sort");
    builder.intro(
        Structure::SortForest(forest.clone()),
        format!("Sorting {} with merge sort", format_values(values)),
    );

    for event in &trace.events {
        match event {
            SortEvent::Split {
                id,
                parent,
                values,
                depth,
                mid,
            } => {
                let message = split_message(&forest, *parent, values);
                forest.push(SortNode {
                    id: *id,
                    parent: *parent,
                    values: values.clone(),
                    depth: *depth,
                    mid: *mid,
                    state: SortNodeState::Split,
                });
                builder.action(
                    Structure::SortForest(forest.clone()),
                    Highlight::none().with(Target::SortNode(*id), Role::New),
                    message,
                );
            }
            SortEvent::Merge {
                id,
                left,
                right,
                left_values,
                right_values,
                writes,
            } => {
                let id = *id;
                if let Some(node) = node_mut(&mut forest, id) {
                    node.values.clear();
                    node.state = SortNodeState::Merging;
                }
                builder.action(
                    Structure::SortForest(forest.clone()),
                    Highlight::none()
                        .with(Target::SortNode(id), Role::Current)
                        .with(Target::SortNode(*left), Role::Compared)
                        .with(Target::SortNode(*right), Role::Compared),
                    format!(
                        "Merging {} and {}",
                        format_values(left_values),
                        format_values(right_values)
                    ),
                );

                let (mut i, mut j) = (0, 0);
                for (k, write) in writes.iter().enumerate() {
                    if let Some(node) = node_mut(&mut forest, id) {
                        node.values.push(write.value);
                    }
                    let mut highlight = Highlight::none()
                        .with(Target::SortNode(id), Role::Current)
                        .with(Target::SortCell { node: id, index: k }, Role::New);

                    let message = match write.against {
                        Some(_) => {
                            let (l, r) = (left_values[i], right_values[j]);
                            highlight = highlight
                                .with(Target::SortCell { node: *left, index: i }, Role::Compared)
                                .with(Target::SortCell { node: *right, index: j }, Role::Compared);
                            if l == r {
                                format!(
                                    "Comparing {} with {}: equal, taking {} from the right half",
                                    l, r, r
                                )
                            } else {
                                format!(
                                    "Comparing {} with {}: taking {} from the {} half",
                                    l,
                                    r,
                                    write.value,
                                    write.from.name()
                                )
                            }
                        }
                        None => {
                            let cell = match write.from {
                                Side::Left => Target::SortCell { node: *left, index: i },
                                Side::Right => Target::SortCell { node: *right, index: j },
                            };
                            highlight = highlight.with(cell, Role::Current);
                            format!(
                                "Copying remaining {} from the {} half",
                                write.value,
                                write.from.name()
                            )
                        }
                    };
                    match write.from {
                        Side::Left => i += 1,
                        Side::Right => j += 1,
                    }
                    builder.action(Structure::SortForest(forest.clone()), highlight, message);
                }

                forest.retain(|node| node.id != *left && node.id != *right);
                let mut merged = Vec::new();
                if let Some(node) = node_mut(&mut forest, id) {
                    node.state = SortNodeState::Merged;
                    merged = node.values.clone();
                }
                builder.action(
                    Structure::SortForest(forest.clone()),
                    Highlight::none().with(Target::SortNode(id), Role::Matched),
                    format!("Merged into {}", format_values(&merged)),
                );
            }
        }
    }

    if let Some(root) = forest.first_mut() {
        root.state = SortNodeState::Merged;
    }
    let root_id = forest.first().map_or(0, |root| root.id);
    builder.terminal(
        Structure::SortForest(forest),
        Highlight::none().with(Target::SortNode(root_id), Role::Matched),
        format!("Merge sort complete: {}", format_values(&trace.sorted)),
    );

    Ok(Recorded {
        structure: trace.sorted,
        steps: builder.finish(),
    })
}
