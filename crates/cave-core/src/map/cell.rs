//! Map cell states

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// State of one grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Floor = 0,
    Wall = 1,
}

impl Tile {
    /// Check if this is a wall
    pub const fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Value used on the wire (0 floor, 1 wall)
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// The other state
    pub const fn opposite(&self) -> Tile {
        match self {
            Tile::Floor => Tile::Wall,
            Tile::Wall => Tile::Floor,
        }
    }

    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
        }
    }
}
