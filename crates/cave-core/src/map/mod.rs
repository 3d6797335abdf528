//! Map system
//!
//! Contains the cell grid, flood-fill regions, rooms and their passage
//! graph, and the cellular automaton generator that ties them together.

mod cell;
mod connectivity;
mod coord;
mod generation;
mod grid;
mod passage;
mod region;
mod room;

pub use cell::Tile;
pub use connectivity::{Connection, closest_connection, connect_rooms};
pub use coord::Coord;
pub use generation::{GeneratedMap, MapGenerator, prune_regions, smooth};
pub use grid::Grid;
pub use passage::{carve_passage, draw_circle, line};
pub use region::{Region, find_regions, region_tiles};
pub use room::{Room, RoomGraph, RoomId};
