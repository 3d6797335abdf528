//! Connected regions (flood fill)
//!
//! Regions are 4-connected: only orthogonal neighbours join a region,
//! diagonal contact does not.

use std::collections::VecDeque;

use super::{Coord, Grid, Tile};

/// One connected component of same-state cells, in discovery order
pub type Region = Vec<Coord>;

/// Find all regions of `tile`, in scan order of their first cell.
pub fn find_regions(grid: &Grid, tile: Tile) -> Vec<Region> {
    let mut regions = Vec::new();
    let mut visited = vec![vec![false; grid.height()]; grid.width()];

    for (x, y) in grid.coords() {
        if visited[x][y] || grid.tile(x, y) != tile {
            continue;
        }
        let region = flood(grid, Coord::new(x as i32, y as i32), &mut visited);
        regions.push(region);
    }

    regions
}

/// Collect the region containing `start`, using its tile as the fill state.
pub fn region_tiles(grid: &Grid, start: Coord) -> Region {
    let mut visited = vec![vec![false; grid.height()]; grid.width()];
    flood(grid, start, &mut visited)
}

/// BFS from `start` over cells sharing its state. Marks `visited` as it goes.
fn flood(grid: &Grid, start: Coord, visited: &mut [Vec<bool>]) -> Region {
    let Some(tile) = grid.get(start) else {
        return Vec::new();
    };

    let mut tiles = Vec::new();
    let mut queue = VecDeque::new();
    visited[start.x as usize][start.y as usize] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        tiles.push(current);

        for next in current.orthogonal() {
            if grid.get(next) != Some(tile) {
                continue;
            }
            let seen = &mut visited[next.x as usize][next.y as usize];
            if !*seen {
                *seen = true;
                queue.push_back(next);
            }
        }
    }

    tiles
}
