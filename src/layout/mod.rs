//! Layout projector
//!
//! [`project`] turns a structure snapshot into positioned nodes and edges in an
//! abstract coordinate space (x grows right, y grows down). It depends only on
//! the shape of the structure, never on highlights or the step cursor, so the
//! same snapshot always projects to the same picture.
//!
//! # Trees
//!
//! Each node splits the width it inherited from its parent between its two
//! subtrees, weighted by their node counts:
//!
//! ```text
//! unit    = inherited / (left_width + 1 + right_width)
//! left.x  = x - unit * (right_width + 0.7) * NODE_SIZE
//! right.x = x + unit * (left_width + 0.7) * NODE_SIZE
//! child.y = y + VERTICAL_SPACING
//! ```
//!
//! A left child's offset depends on the width of its right sibling, so adding a
//! node on one side moves the other subtree too. Positions are only repeatable
//! for an identical shape.
//!
//! # Merge sort
//!
//! A sub-array split at `mid` places its halves at `x ∓ mid * SORT_WIDTH / 2`,
//! one `LEVEL_HEIGHT` below, so sibling sub-arrays never overlap.

use crate::config::constants::{
    CELL_GAP, CELL_WIDTH, LEVEL_HEIGHT, NODE_SIZE, SORT_WIDTH, VERTICAL_SPACING,
};
use crate::model::sequence::ContainerKind;
use crate::model::tree::{subtree_width, Bst, TreeNode};
use crate::model::Element;
use crate::snapshot::{SortNode, Structure, Target};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    /// Highlight target this node answers to
    pub target: Target,
    pub label: String,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
    /// Set for tree edges, which can be highlighted
    pub target: Option<Target>,
}

/// Positioned view of one snapshot
#[derive(Debug, Clone, Default)]
pub struct Projection {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
    index: FxHashMap<Target, usize>,
}

impl Projection {
    fn add_node(&mut self, target: Target, label: String, position: Point) {
        self.index.insert(target, self.nodes.len());
        self.nodes.push(PositionedNode {
            target,
            label,
            position,
        });
    }

    fn add_edge(&mut self, from: Point, to: Point, target: Option<Target>) {
        self.edges.push(Edge { from, to, target });
    }

    pub fn position(&self, target: Target) -> Option<Point> {
        self.index
            .get(&target)
            .map(|&i| self.nodes[i].position)
    }

    /// Bounding box of all node positions as `(min, max)`
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = self.nodes.first()?.position;
        Some(self.nodes.iter().fold((first, first), |(min, max), node| {
            let p = node.position;
            (
                Point {
                    x: min.x.min(p.x),
                    y: min.y.min(p.y),
                },
                Point {
                    x: max.x.max(p.x),
                    y: max.y.max(p.y),
                },
            )
        }))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Project a snapshot into positioned nodes and edges
pub fn project(structure: &Structure) -> Projection {
    let mut projection = Projection::default();
    match structure {
        Structure::Tree(tree) => project_tree(tree, &mut projection),
        Structure::Container(view) => {
            project_linear(&view.items, &mut projection);
            if view.kind == ContainerKind::LinkedList {
                link_cells(view.items.len(), &mut projection);
            }
        }
        Structure::Array(view) => project_linear(&view.values, &mut projection),
        Structure::SortForest(forest) => project_forest(forest, &mut projection),
    }
    projection
}

/// Horizontal position of cell `index` in a linear layout
pub fn cell_x(index: usize) -> f64 {
    index as f64 * (CELL_WIDTH + CELL_GAP)
}

fn project_linear(values: &[Element], projection: &mut Projection) {
    for (i, value) in values.iter().enumerate() {
        projection.add_node(
            Target::Index(i),
            value.to_string(),
            Point {
                x: cell_x(i),
                y: 0.0,
            },
        );
    }
}

fn link_cells(len: usize, projection: &mut Projection) {
    for i in 1..len {
        let from = projection.nodes[i - 1].position;
        let to = projection.nodes[i].position;
        projection.add_edge(from, to, None);
    }
}

fn project_tree(tree: &Bst, projection: &mut Projection) {
    if let Some(root) = tree.root() {
        place_subtree(root, Point::ORIGIN, root.width() as f64, None, projection);
    }
}

fn place_subtree(
    node: &TreeNode,
    at: Point,
    inherited: f64,
    parent: Option<(Element, Point)>,
    projection: &mut Projection,
) {
    projection.add_node(Target::Node(node.value), node.value.to_string(), at);
    if let Some((parent_value, parent_at)) = parent {
        projection.add_edge(
            parent_at,
            at,
            Some(Target::Edge {
                from: parent_value,
                to: node.value,
            }),
        );
    }

    let left_width = subtree_width(node.left.as_deref()) as f64;
    let right_width = subtree_width(node.right.as_deref()) as f64;
    let unit = inherited / (left_width + 1.0 + right_width);
    let y = at.y + VERTICAL_SPACING;

    if let Some(left) = node.left.as_deref() {
        let x = at.x - unit * (right_width + 0.7) * NODE_SIZE;
        place_subtree(
            left,
            Point { x, y },
            left_width + unit,
            Some((node.value, at)),
            projection,
        );
    }
    if let Some(right) = node.right.as_deref() {
        let x = at.x + unit * (left_width + 0.7) * NODE_SIZE;
        place_subtree(
            right,
            Point { x, y },
            right_width + unit,
            Some((node.value, at)),
            projection,
        );
    }
}

fn project_forest(forest: &[SortNode], projection: &mut Projection) {
    // Parents always precede their children in the forest
    let mut placed: FxHashMap<usize, (Point, Option<usize>)> = FxHashMap::default();

    for node in forest {
        let position = match node.parent.and_then(|p| placed.get(&p).map(|v| (p, *v))) {
            None => Point::ORIGIN,
            Some((parent_id, (parent_at, mid))) => {
                let offset = mid.unwrap_or(0) as f64 * SORT_WIDTH / 2.0;
                // Left halves are numbered straight after their parent
                let x = if node.id == parent_id + 1 {
                    parent_at.x - offset
                } else {
                    parent_at.x + offset
                };
                let at = Point {
                    x,
                    y: parent_at.y + LEVEL_HEIGHT,
                };
                projection.add_edge(parent_at, at, None);
                at
            }
        };
        placed.insert(node.id, (position, node.mid));
        projection.add_node(Target::SortNode(node.id), format_cells(&node.values), position);
    }
}

fn format_cells(values: &[Element]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{ArrayView, ContainerView, SortNodeState};

    fn tree_projection(values: &[Element]) -> Projection {
        project(&Structure::Tree(Bst::from_values(values)))
    }

    #[test]
    fn test_tree_root_at_origin() {
        let projection = tree_projection(&[50, 30, 70]);
        assert_eq!(projection.position(Target::Node(50)), Some(Point::ORIGIN));
        assert_eq!(projection.nodes.len(), 3);
        assert_eq!(projection.edges.len(), 2);
    }

    #[test]
    fn test_tree_children_weighted_by_width() {
        let projection = tree_projection(&[50, 30, 70]);
        // width 3, unit 1: children at ∓1.7 node sizes
        let left = projection.position(Target::Node(30)).unwrap();
        let right = projection.position(Target::Node(70)).unwrap();
        assert!((left.x + 1.7 * NODE_SIZE).abs() < 1e-9);
        assert!((right.x - 1.7 * NODE_SIZE).abs() < 1e-9);
        assert_eq!(left.y, VERTICAL_SPACING);
    }

    #[test]
    fn test_right_insert_moves_left_subtree() {
        let before = tree_projection(&[50, 30]);
        let after = tree_projection(&[50, 30, 70]);
        let left_before = before.position(Target::Node(30)).unwrap();
        let left_after = after.position(Target::Node(30)).unwrap();
        assert!((left_before.x + 0.7 * NODE_SIZE).abs() < 1e-9);
        assert!((left_after.x + 1.7 * NODE_SIZE).abs() < 1e-9);
        assert_eq!(left_before.y, left_after.y);
    }

    #[test]
    fn test_tree_projection_is_deterministic() {
        let values = [40, 20, 60, 10, 30, 50, 70, 65];
        let first = tree_projection(&values);
        let second = tree_projection(&values);
        assert_eq!(first.nodes, second.nodes);
        assert_eq!(first.edges, second.edges);
    }

    #[test]
    fn test_tree_preserves_in_order_left_to_right() {
        let values = [40, 20, 60, 10, 30, 50, 70, 65, 5];
        let projection = tree_projection(&values);
        let mut sorted = values.to_vec();
        sorted.sort();
        let xs: Vec<f64> = sorted
            .iter()
            .map(|v| projection.position(Target::Node(*v)).unwrap().x)
            .collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tree_edges_are_highlightable() {
        let projection = tree_projection(&[50, 30]);
        assert_eq!(
            projection.edges[0].target,
            Some(Target::Edge { from: 50, to: 30 })
        );
    }

    #[test]
    fn test_linked_list_has_edges() {
        let view = ContainerView {
            kind: ContainerKind::LinkedList,
            items: vec![1, 2, 3],
            capacity: 5,
        };
        let projection = project(&Structure::Container(view.clone()));
        assert_eq!(projection.edges.len(), 2);
        assert_eq!(projection.position(Target::Index(2)).unwrap().x, cell_x(2));

        let stack = project(&Structure::Container(ContainerView {
            kind: ContainerKind::Stack,
            ..view
        }));
        assert!(stack.edges.is_empty());
    }

    #[test]
    fn test_array_is_linear() {
        let projection = project(&Structure::Array(ArrayView::plain(vec![7, 8])));
        let (min, max) = projection.bounds().unwrap();
        assert_eq!(min, Point::ORIGIN);
        assert_eq!(max.x, CELL_WIDTH + CELL_GAP);
    }

    #[test]
    fn test_sort_children_offset_by_mid() {
        let node = |id, parent, values: Vec<Element>, mid| SortNode {
            id,
            parent,
            values,
            depth: 0,
            mid,
            state: SortNodeState::Split,
        };
        let forest = vec![
            node(0, None, vec![5, 4, 3], Some(1)),
            node(1, Some(0), vec![5], None),
            node(2, Some(0), vec![4, 3], Some(1)),
        ];
        let projection = project(&Structure::SortForest(forest));
        let left = projection.position(Target::SortNode(1)).unwrap();
        let right = projection.position(Target::SortNode(2)).unwrap();
        assert_eq!(left, Point { x: -SORT_WIDTH / 2.0, y: LEVEL_HEIGHT });
        assert_eq!(right, Point { x: SORT_WIDTH / 2.0, y: LEVEL_HEIGHT });
        assert_eq!(projection.edges.len(), 2);
        assert_eq!(projection.nodes[0].label, "5 | 4 | 3");
    }

    #[test]
    fn test_empty_structures() {
        assert!(project(&Structure::Tree(Bst::new())).is_empty());
        assert!(project(&Structure::SortForest(Vec::new())).bounds().is_none());
    }
}
