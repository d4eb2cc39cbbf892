//! Step recording for binary search tree operations
//!
//! Highlights accumulate along the comparison path: every node compared so far
//! (and the edge leading into it) stays marked as [`Role::Current`], matching the
//! way the walk is narrated.

use super::{Recorded, SequenceBuilder};
use crate::model::tree::{Bst, DeleteCase, TreeOutcome, TreeTrace, Visit};
use crate::model::Element;
use crate::snapshot::{Highlight, Role, Structure, Target};

/// Which narration prefix to use while walking
#[derive(Debug, Clone, Copy)]
enum Walk {
    Insert,
    Search,
}

fn path_highlight(path: &[Visit], role: Role) -> Highlight {
    path.iter().fold(Highlight::none(), |highlight, visit| {
        let highlight = highlight.with(Target::Node(visit.value), role);
        match visit.parent {
            Some(parent) => highlight.with(
                Target::Edge {
                    from: parent,
                    to: visit.value,
                },
                role,
            ),
            None => highlight,
        }
    })
}

fn record_walk(builder: &mut SequenceBuilder, tree: &Bst, trace: &TreeTrace, walk: Walk) {
    for (i, visit) in trace.path.iter().enumerate() {
        let message = match (walk, visit.parent) {
            (Walk::Insert, None) => format!("Inserting: Starting at the root node {}", visit.value),
            (Walk::Insert, Some(_)) => {
                format!("Inserting: Comparing {} with {}", trace.value, visit.value)
            }
            (Walk::Search, None) => format!(
                "Searching: Starting search at the root node {}",
                visit.value
            ),
            (Walk::Search, Some(_)) => {
                format!("Searching: Comparing {} with {}", trace.value, visit.value)
            }
        };
        builder.action(
            Structure::Tree(tree.clone()),
            path_highlight(&trace.path[..=i], Role::Current),
            message,
        );
    }
}

/// Insert `value` into a copy of `tree`
pub fn record_insert(tree: &Bst, value: Element) -> Recorded<Bst> {
    let mut next = tree.clone();
    let trace = next.insert(value);

    let mut builder = SequenceBuilder::new(format!("Insert {}", value));
    builder.intro(
        Structure::Tree(tree.clone()),
        format!("Inserting {} into the current tree", value),
    );
    record_walk(&mut builder, tree, &trace, Walk::Insert);

    match trace.outcome {
        TreeOutcome::Inserted { parent, side } => {
            let mut highlight =
                path_highlight(&trace.path, Role::Current).with(Target::Node(value), Role::New);
            let message = match (parent, side) {
                (Some(parent), Some(side)) => {
                    highlight = highlight.with(
                        Target::Edge {
                            from: parent,
                            to: value,
                        },
                        Role::New,
                    );
                    format!("Inserting {} as {} child of {}", value, side.name(), parent)
                }
                _ => format!("Inserting {} as the root node", value),
            };
            builder.action(Structure::Tree(next.clone()), highlight, message);
            builder.terminal(
                Structure::Tree(next.clone()),
                Highlight::none().with(Target::Node(value), Role::New),
                "Insertion complete",
            );
        }
        _ => {
            let highlight =
                path_highlight(&trace.path, Role::Current).with(Target::Node(value), Role::Matched);
            builder.terminal(
                Structure::Tree(next.clone()),
                highlight,
                format!("Input value {} already exists in the tree", value),
            );
        }
    }

    Recorded {
        structure: next,
        steps: builder.finish(),
    }
}

/// Search for `value`; the tree is returned unchanged
pub fn record_search(tree: &Bst, value: Element) -> Recorded<Bst> {
    let trace = tree.search(value);

    let mut builder = SequenceBuilder::new(format!("Search {}", value));
    builder.intro(
        Structure::Tree(tree.clone()),
        format!("Searching for {} in the current tree", value),
    );
    record_walk(&mut builder, tree, &trace, Walk::Search);

    if trace.outcome == TreeOutcome::Found {
        builder.terminal(
            Structure::Tree(tree.clone()),
            path_highlight(&trace.path, Role::Current).with(Target::Node(value), Role::Matched),
            format!("Value {} found in the tree", value),
        );
    } else {
        builder.terminal(
            Structure::Tree(tree.clone()),
            path_highlight(&trace.path, Role::Current),
            format!("Value {} not found in the tree", value),
        );
    }

    Recorded {
        structure: tree.clone(),
        steps: builder.finish(),
    }
}

/// Delete `value` from a copy of `tree` using the in-order successor policy
pub fn record_delete(tree: &Bst, value: Element) -> Recorded<Bst> {
    let mut next = tree.clone();
    let trace = next.delete(value);
    let before = || Structure::Tree(tree.clone());

    let mut builder = SequenceBuilder::new(format!("Delete {}", value));
    builder.intro(before(), "Starting deletion process");

    let TreeOutcome::Deleted { parent, case } = trace.outcome else {
        for i in 0..trace.path.len() {
            builder.action(
                before(),
                path_highlight(&trace.path[..=i], Role::Current),
                format!(
                    "Deleting: Searching for {}: Comparing with {}",
                    value, trace.path[i].value
                ),
            );
        }
        builder.terminal(
            before(),
            path_highlight(&trace.path, Role::Current),
            format!("Value {} not found in the tree", value),
        );
        return Recorded {
            structure: next,
            steps: builder.finish(),
        };
    };

    // The last visit is the node being deleted
    let search_path = &trace.path[..trace.path.len().saturating_sub(1)];
    for i in 0..search_path.len() {
        builder.action(
            before(),
            path_highlight(&search_path[..=i], Role::Current),
            format!(
                "Deleting: Searching for {}: Comparing with {}",
                value, search_path[i].value
            ),
        );
    }

    let mut found =
        path_highlight(search_path, Role::Current).with(Target::Node(value), Role::Removed);
    if let Some(parent) = parent {
        found = found.with(
            Target::Edge {
                from: parent,
                to: value,
            },
            Role::Removed,
        );
    }
    builder.action(before(), found.clone(), format!("Found node to delete: {}", value));

    match case {
        DeleteCase::Leaf => {
            builder.action(before(), found, format!("Deleting leaf node {}", value));
        }
        DeleteCase::OneChild { child } => {
            builder.action(
                before(),
                found
                    .with(Target::Node(child), Role::New)
                    .with(
                        Target::Edge {
                            from: value,
                            to: child,
                        },
                        Role::New,
                    ),
                format!("Replacing {} with its child {}", value, child),
            );
        }
        DeleteCase::TwoChildren {
            successor,
            successor_parent,
        } => {
            let with_successor = found
                .with(Target::Node(successor), Role::Matched)
                .with(
                    Target::Edge {
                        from: successor_parent,
                        to: successor,
                    },
                    Role::Matched,
                );
            builder.action(
                before(),
                with_successor.clone(),
                format!("Found inorder successor: {}", successor),
            );
            builder.action(
                before(),
                with_successor,
                format!("Replacing {} with inorder successor {}", value, successor),
            );
        }
    }

    let after_highlight = match case {
        DeleteCase::Leaf => Highlight::none(),
        DeleteCase::OneChild { child } => Highlight::none().with(Target::Node(child), Role::New),
        DeleteCase::TwoChildren { successor, .. } => {
            Highlight::none().with(Target::Node(successor), Role::New)
        }
    };
    builder.terminal(
        Structure::Tree(next.clone()),
        after_highlight,
        format!("Node {} deleted from the tree", value),
    );

    Recorded {
        structure: next,
        steps: builder.finish(),
    }
}
