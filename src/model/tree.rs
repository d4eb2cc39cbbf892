//! Binary search tree
//!
//! Nodes are boxed and owned by exactly one parent slot (or the root), so a
//! `clone()` of a [`Bst`] is a full structural copy. Steps rely on that: each
//! step owns its own tree and later mutations never leak into it.
//!
//! # Invariants
//!
//! - all left-subtree values < node value < all right-subtree values
//! - duplicates are rejected on insert (reported as [`TreeOutcome::Duplicate`])
//!
//! # Deletion policy
//!
//! A node with two children takes the value of its in-order successor (the
//! leftmost node of its right subtree), and the successor is then deleted from
//! the right subtree. The successor has no left child, so that second deletion
//! is always a leaf or one-child splice.

use super::{Element, Side};
use std::cmp::Ordering;

/// A single tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: Element,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(value: Element) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    /// Number of nodes in this subtree
    pub fn width(&self) -> usize {
        subtree_width(self.left.as_deref()) + 1 + subtree_width(self.right.as_deref())
    }

    fn child(&self, side: Side) -> Option<&TreeNode> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }
}

/// Node count of an optional subtree
pub fn subtree_width(node: Option<&TreeNode>) -> usize {
    node.map_or(0, TreeNode::width)
}

/// One node compared on the way down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub value: Element,
    pub parent: Option<Element>,
}

/// How a found node is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteCase {
    Leaf,
    OneChild {
        child: Element,
    },
    TwoChildren {
        successor: Element,
        successor_parent: Element,
    },
}

/// Terminal outcome of a tree operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeOutcome {
    /// New leaf attached; `parent` is `None` when the tree was empty
    Inserted {
        parent: Option<Element>,
        side: Option<Side>,
    },
    Duplicate,
    Found,
    NotFound,
    Deleted {
        parent: Option<Element>,
        case: DeleteCase,
    },
}

/// Comparison path and outcome of one tree operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeTrace {
    pub value: Element,
    /// Every node compared, root first. Includes the matching node, if any.
    pub path: Vec<Visit>,
    pub outcome: TreeOutcome,
}

/// Binary search tree over [`Element`]s
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bst {
    root: Option<Box<TreeNode>>,
}

impl Bst {
    pub fn new() -> Self {
        Bst { root: None }
    }

    /// Build a tree by inserting `values` in order, dropping duplicates
    pub fn from_values(values: &[Element]) -> Self {
        let mut tree = Bst::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        subtree_width(self.root())
    }

    pub fn height(&self) -> usize {
        fn height_of(node: Option<&TreeNode>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + height_of(n.left.as_deref()).max(height_of(n.right.as_deref())),
            }
        }
        height_of(self.root())
    }

    pub fn contains(&self, value: Element) -> bool {
        matches!(self.search(value).outcome, TreeOutcome::Found)
    }

    /// Values in sorted (in-order) order
    pub fn in_order(&self) -> Vec<Element> {
        fn walk(node: Option<&TreeNode>, out: &mut Vec<Element>) {
            if let Some(n) = node {
                walk(n.left.as_deref(), out);
                out.push(n.value);
                walk(n.right.as_deref(), out);
            }
        }
        let mut out = Vec::with_capacity(self.len());
        walk(self.root(), &mut out);
        out
    }

    /// Walk down comparing values until a free slot is found, then attach a leaf
    pub fn insert(&mut self, value: Element) -> TreeTrace {
        let mut path = Vec::new();
        let outcome = insert_into(&mut self.root, value, None, None, &mut path);
        TreeTrace {
            value,
            path,
            outcome,
        }
    }

    pub fn search(&self, value: Element) -> TreeTrace {
        let (path, found) = self.locate(value);
        TreeTrace {
            value,
            path,
            outcome: if found {
                TreeOutcome::Found
            } else {
                TreeOutcome::NotFound
            },
        }
    }

    pub fn delete(&mut self, value: Element) -> TreeTrace {
        let (path, found) = self.locate(value);
        if !found {
            return TreeTrace {
                value,
                path,
                outcome: TreeOutcome::NotFound,
            };
        }

        let parent = path.last().and_then(|visit| visit.parent);
        let case = self.delete_case(value);
        let removed = remove_from(&mut self.root, value);
        debug_assert!(removed, "located value {} was not removed", value);

        TreeTrace {
            value,
            path,
            outcome: TreeOutcome::Deleted { parent, case },
        }
    }

    /// Comparison path towards `value` and whether it ended on a match
    fn locate(&self, value: Element) -> (Vec<Visit>, bool) {
        let mut path = Vec::new();
        let mut parent = None;
        let mut current = self.root();

        while let Some(node) = current {
            path.push(Visit {
                value: node.value,
                parent,
            });
            let side = match value.cmp(&node.value) {
                Ordering::Equal => return (path, true),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            parent = Some(node.value);
            current = node.child(side);
        }

        (path, false)
    }

    fn find(&self, value: Element) -> Option<&TreeNode> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    fn delete_case(&self, value: Element) -> DeleteCase {
        let Some(node) = self.find(value) else {
            return DeleteCase::Leaf;
        };
        match (node.left.as_deref(), node.right.as_deref()) {
            (None, None) => DeleteCase::Leaf,
            (Some(child), None) | (None, Some(child)) => DeleteCase::OneChild {
                child: child.value,
            },
            (Some(_), Some(right)) => {
                let mut successor_parent = node;
                let mut successor = right;
                while let Some(next) = successor.left.as_deref() {
                    successor_parent = successor;
                    successor = next;
                }
                DeleteCase::TwoChildren {
                    successor: successor.value,
                    successor_parent: successor_parent.value,
                }
            }
        }
    }
}

fn insert_into(
    slot: &mut Option<Box<TreeNode>>,
    value: Element,
    parent: Option<Element>,
    side: Option<Side>,
    path: &mut Vec<Visit>,
) -> TreeOutcome {
    match slot {
        None => {
            *slot = Some(Box::new(TreeNode::leaf(value)));
            TreeOutcome::Inserted { parent, side }
        }
        Some(node) => {
            path.push(Visit {
                value: node.value,
                parent,
            });
            let here = node.value;
            match value.cmp(&here) {
                Ordering::Less => {
                    insert_into(&mut node.left, value, Some(here), Some(Side::Left), path)
                }
                Ordering::Greater => {
                    insert_into(&mut node.right, value, Some(here), Some(Side::Right), path)
                }
                Ordering::Equal => TreeOutcome::Duplicate,
            }
        }
    }
}

/// Remove `value` from the subtree at `slot`; returns whether a node was removed
fn remove_from(slot: &mut Option<Box<TreeNode>>, value: Element) -> bool {
    let Some(node) = slot.as_mut() else {
        return false;
    };
    match value.cmp(&node.value) {
        Ordering::Less => return remove_from(&mut node.left, value),
        Ordering::Greater => return remove_from(&mut node.right, value),
        Ordering::Equal => {}
    }

    let successor = match (node.left.as_deref(), node.right.as_deref()) {
        (Some(_), Some(right)) => Some(leftmost(right).value),
        _ => None,
    };
    if let Some(successor) = successor {
        node.value = successor;
        return remove_from(&mut node.right, successor);
    }

    if let Some(removed) = slot.take() {
        let TreeNode { left, right, .. } = *removed;
        *slot = left.or(right);
    }
    true
}

fn leftmost(mut node: &TreeNode) -> &TreeNode {
    while let Some(next) = node.left.as_deref() {
        node = next;
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bst {
        Bst::from_values(&[50, 20, 60, 10, 30, 55, 70, 25])
    }

    #[test]
    fn test_insert_path_and_side() {
        let mut tree = sample();
        let trace = tree.insert(27);

        let visited: Vec<Element> = trace.path.iter().map(|v| v.value).collect();
        assert_eq!(visited, vec![50, 20, 30, 25]);
        assert_eq!(trace.path[0].parent, None);
        assert_eq!(trace.path[2].parent, Some(20));
        assert_eq!(
            trace.outcome,
            TreeOutcome::Inserted {
                parent: Some(25),
                side: Some(Side::Right)
            }
        );
        assert!(tree.contains(27));
    }

    #[test]
    fn test_insert_into_empty_tree() {
        let mut tree = Bst::new();
        let trace = tree.insert(5);
        assert!(trace.path.is_empty());
        assert_eq!(
            trace.outcome,
            TreeOutcome::Inserted {
                parent: None,
                side: None
            }
        );
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut tree = sample();
        let before = tree.clone();
        let trace = tree.insert(30);
        assert_eq!(trace.outcome, TreeOutcome::Duplicate);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_search() {
        let tree = sample();
        assert_eq!(tree.search(55).outcome, TreeOutcome::Found);
        let miss = tree.search(65);
        assert_eq!(miss.outcome, TreeOutcome::NotFound);
        let visited: Vec<Element> = miss.path.iter().map(|v| v.value).collect();
        assert_eq!(visited, vec![50, 60, 70]);
    }

    #[test]
    fn test_delete_leaf() {
        let mut tree = sample();
        let trace = tree.delete(25);
        assert_eq!(
            trace.outcome,
            TreeOutcome::Deleted {
                parent: Some(30),
                case: DeleteCase::Leaf
            }
        );
        assert_eq!(tree.in_order(), vec![10, 20, 30, 50, 55, 60, 70]);
    }

    #[test]
    fn test_delete_one_child() {
        let mut tree = sample();
        let trace = tree.delete(30);
        assert_eq!(
            trace.outcome,
            TreeOutcome::Deleted {
                parent: Some(20),
                case: DeleteCase::OneChild { child: 25 }
            }
        );
        let twenty = tree.find(20).unwrap();
        assert_eq!(twenty.right.as_ref().map(|n| n.value), Some(25));
    }

    #[test]
    fn test_delete_two_children_uses_successor() {
        let mut tree = sample();
        let trace = tree.delete(50);
        assert_eq!(
            trace.outcome,
            TreeOutcome::Deleted {
                parent: None,
                case: DeleteCase::TwoChildren {
                    successor: 55,
                    successor_parent: 60
                }
            }
        );
        // Successor value copied into the root slot
        assert_eq!(tree.root().map(|n| n.value), Some(55));
        assert_eq!(tree.in_order(), vec![10, 20, 25, 30, 55, 60, 70]);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_delete_successor_with_right_child() {
        // 20's successor is 25 which has a right child 27
        let mut tree = Bst::from_values(&[20, 10, 30, 25, 27]);
        tree.delete(20);
        assert_eq!(tree.root().map(|n| n.value), Some(25));
        let thirty = tree.find(30).unwrap();
        assert_eq!(thirty.left.as_ref().map(|n| n.value), Some(27));
    }

    #[test]
    fn test_delete_missing() {
        let mut tree = sample();
        let before = tree.clone();
        assert_eq!(tree.delete(99).outcome, TreeOutcome::NotFound);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_width_and_height() {
        let tree = sample();
        assert_eq!(tree.len(), 8);
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.root().unwrap().width(), 8);
    }

    #[test]
    fn test_remove_from_reports_removal() {
        let mut tree = sample();
        assert!(!remove_from(&mut tree.root, 99));
        assert_eq!(tree.len(), 8);

        assert!(remove_from(&mut tree.root, 20));
        assert_eq!(tree.in_order(), vec![10, 25, 30, 50, 55, 60, 70]);
    }
}
