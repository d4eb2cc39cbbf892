// Constants for the visualizer engine

use std::time::Duration;

/// Hard upper bound on container capacity and random array sizes
pub const MAX_ELEMENTS: usize = 20;

/// Default container capacity
pub const DEFAULT_CAPACITY: usize = 20;

/// Node count for a freshly generated random tree
pub const TREE_RANDOM_SIZE: usize = 15;

/// Length of a freshly generated random array
pub const ARRAY_RANDOM_SIZE: usize = 10;

/// Random values are drawn from `0..DEFAULT_MAX_VALUE`
pub const DEFAULT_MAX_VALUE: i64 = 100;

/// Delay between auto-play ticks
pub const AUTO_INTERVAL: Duration = Duration::from_millis(1000);

/// How long an error notice stays visible
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Event loop poll timeout
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

// Layout units. Coordinates are abstract; the renderer scales them to the pane.

/// Horizontal unit for tree nodes
pub const NODE_SIZE: f64 = 40.0;

/// Distance between tree levels
pub const VERTICAL_SPACING: f64 = 120.0;

/// Width of one array/container cell
pub const CELL_WIDTH: f64 = 50.0;

/// Gap between neighbouring cells
pub const CELL_GAP: f64 = 10.0;

/// Horizontal spread factor for merge-sort sub-arrays
pub const SORT_WIDTH: f64 = 200.0;

/// Distance between merge-sort levels
pub const LEVEL_HEIGHT: f64 = 150.0;
