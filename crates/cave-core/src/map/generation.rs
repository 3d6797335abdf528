//! Cave map generation
//!
//! Random fill, cellular automaton smoothing, region pruning, room
//! connectivity and a final wall border, in that order.

use serde::{Deserialize, Serialize};

use super::connectivity::connect_rooms;
use super::{Grid, Room, RoomGraph, RoomId, Tile, find_regions};
use crate::config::GeneratorConfig;
use crate::consts::{BORDER_SIZE, SMOOTHING_PIVOT};
use crate::error::MapError;
use crate::rng::RandomSource;

/// Result of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMap {
    /// Final grid, including the wall border
    pub grid: Grid,
    /// Surviving rooms, with coordinates in the bordered grid
    pub rooms: RoomGraph,
    /// Number of passages carved to connect the rooms
    pub passages: usize,
}

/// Cellular automaton cave generator
#[derive(Debug, Clone)]
pub struct MapGenerator {
    config: GeneratorConfig,
}

impl MapGenerator {
    /// Create a generator. The config is validated up front.
    pub fn new(config: GeneratorConfig) -> Result<Self, MapError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the full pipeline
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Result<GeneratedMap, MapError> {
        let mut grid = self.random_fill(rng);
        log::debug!(
            "random fill {}x{} at {}%: {} walls",
            grid.width(),
            grid.height(),
            self.config.fill_percent,
            grid.count(Tile::Wall)
        );

        for _ in 0..self.config.smoothing_passes {
            grid = smooth(&grid);
        }
        log::debug!(
            "after {} smoothing passes: {} walls",
            self.config.smoothing_passes,
            grid.count(Tile::Wall)
        );

        let (mut rooms, passages) = self.process_map(&mut grid)?;

        let grid = grid.bordered(BORDER_SIZE);
        rooms.translate(BORDER_SIZE as i32, BORDER_SIZE as i32);

        Ok(GeneratedMap {
            grid,
            rooms,
            passages,
        })
    }

    /// Border cells are walls, interior cells are walls with `fill_percent` chance
    pub fn random_fill<R: RandomSource>(&self, rng: &mut R) -> Grid {
        let width = self.config.width as usize;
        let height = self.config.height as usize;
        let mut grid = Grid::new(width, height, Tile::Floor);

        for x in 0..width {
            for y in 0..height {
                let tile = if grid.is_border(x, y) || rng.percent(self.config.fill_percent) {
                    Tile::Wall
                } else {
                    Tile::Floor
                };
                grid.set(x, y, tile);
            }
        }

        grid
    }

    /// Prune small regions, pick the main room and connect every room to it
    fn process_map(&self, grid: &mut Grid) -> Result<(RoomGraph, usize), MapError> {
        let pruned_walls = prune_regions(grid, Tile::Wall, self.config.wall_threshold);

        let mut rooms = Vec::new();
        let mut pruned_rooms = 0;
        for region in find_regions(grid, Tile::Floor) {
            if region.len() < self.config.room_threshold {
                for &tile in &region {
                    grid.set_coord(tile, Tile::Wall);
                }
                pruned_rooms += 1;
            } else {
                rooms.push(region);
            }
        }
        // Edge tiles are taken against the grid with small pockets filled in
        let mut rooms: Vec<Room> = rooms
            .into_iter()
            .map(|region| Room::new(region, grid))
            .collect();

        log::debug!(
            "pruned {pruned_walls} wall regions and {pruned_rooms} floor regions, {} rooms left",
            rooms.len()
        );

        if rooms.is_empty() {
            return Err(MapError::DegenerateMap {
                width: self.config.width,
                height: self.config.height,
                fill_percent: self.config.fill_percent,
            });
        }

        // Largest room first; the stable sort keeps discovery order on ties
        rooms.sort_by(|a, b| b.size().cmp(&a.size()));
        let mut graph = RoomGraph::new(rooms);
        graph.set_main_room(RoomId(0));
        log::debug!("main room has {} tiles", graph.get(RoomId(0)).size());

        let passages = connect_rooms(grid, &mut graph, self.config.passage_radius)?;
        Ok((graph, passages))
    }
}

/// One cellular automaton pass, computed from an untouched snapshot
pub fn smooth(snapshot: &Grid) -> Grid {
    let mut next = snapshot.clone();
    for (x, y) in snapshot.coords() {
        let walls = snapshot.surrounding_wall_count(x, y);
        if walls > SMOOTHING_PIVOT {
            next.set(x, y, Tile::Wall);
        } else if walls < SMOOTHING_PIVOT {
            next.set(x, y, Tile::Floor);
        }
    }
    next
}

/// Flip every region of `tile` smaller than `threshold` to the other state.
/// Returns how many regions were flipped.
pub fn prune_regions(grid: &mut Grid, tile: Tile, threshold: usize) -> usize {
    let mut pruned = 0;
    for region in find_regions(grid, tile) {
        if region.len() < threshold {
            for coord in region {
                grid.set_coord(coord, tile.opposite());
            }
            pruned += 1;
        }
    }
    pruned
}
