//! Structural model for the visualizer
//!
//! This module provides the in-memory data structures being animated. Every
//! operation is pure with respect to presentation: it mutates an owned value and
//! returns a trace of what it touched, but never builds steps itself.
//!
//! - [`sequence`]: bounded ordered containers (stack, queue, linked list)
//! - [`tree`]: binary search tree with successor-based deletion
//! - [`sort`]: merge sort with a recorded split/merge trace
//! - [`search`]: linear and binary search traces
//! - [`random`]: seeded random input generation
//!
//! # Elements
//!
//! Elements are plain integers. They carry no identity beyond their value and
//! their position in a structure, which is why tree nodes are addressed by value
//! (duplicates are rejected on insert).

pub mod random;
pub mod search;
pub mod sequence;
pub mod sort;
pub mod tree;

/// Value stored in every structure
pub type Element = i64;

/// Which child slot of a tree node, or which half of a split array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}
