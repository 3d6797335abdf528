//! Generation constants
//!
//! Defaults for the cave generator. Every value here can be overridden
//! through [`GeneratorConfig`](crate::GeneratorConfig).

/// Default map dimensions (before the one-cell border is added)
pub const DEFAULT_WIDTH: u32 = 80;
pub const DEFAULT_HEIGHT: u32 = 60;

/// Largest accepted width or height
pub const MAX_DIMENSION: u32 = 1024;

/// Default chance (percent) that an interior cell starts as wall
pub const DEFAULT_FILL_PERCENT: u32 = 42;

/// Cellular automaton passes run after the random fill
pub const SMOOTHING_PASSES: u32 = 10;

/// Most smoothing passes a config may ask for
pub const MAX_SMOOTHING_PASSES: u32 = 100;

/// Neighbour wall count at which a cell keeps its state (above: wall, below: floor)
pub const SMOOTHING_PIVOT: u32 = 4;

/// Wall regions smaller than this are turned into floor
pub const WALL_THRESHOLD: usize = 20;

/// Floor regions smaller than this are filled in with wall
pub const ROOM_THRESHOLD: usize = 20;

/// Radius of the brush used to carve passages between rooms
pub const PASSAGE_RADIUS: i32 = 5;

/// Largest accepted passage radius. A wider brush already covers the whole map.
pub const MAX_PASSAGE_RADIUS: i32 = MAX_DIMENSION as i32;

/// Width of the wall frame added around the finished map
pub const BORDER_SIZE: usize = 1;

/// Number of spawn points reported with a map
pub const DEFAULT_SPAWN_POINTS: usize = 8;
