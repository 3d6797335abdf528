//! Binary cell grid
//!
//! Cells are stored column-major as `cells[x][y]`, which is also the order
//! every scan in the generator walks them (x outer, y inner).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Coord, Tile};
use crate::error::MapError;

/// Width x height array of wall/floor cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Tile>>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`
    pub fn new(width: usize, height: usize, fill: Tile) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![fill; height]; width],
        }
    }

    /// Parse an ASCII picture: one line per row (line index is `y`),
    /// `#` for wall and `.` for floor. Blank lines are skipped.
    pub fn from_ascii(text: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(MapError::invalid("ASCII grid is empty"));
        }

        let mut grid = Grid::new(width, height, Tile::Floor);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(MapError::invalid(format!(
                    "ASCII grid row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    other => {
                        return Err(MapError::invalid(format!(
                            "unexpected character '{other}' in ASCII grid"
                        )));
                    }
                };
                grid.cells[x][y] = tile;
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a signed position is on the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Tile at an in-bounds position. Panics when out of range.
    pub fn tile(&self, x: usize, y: usize) -> Tile {
        self.cells[x][y]
    }

    /// Tile at a coordinate, `None` when off-grid
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        if self.in_bounds(coord.x, coord.y) {
            Some(self.cells[coord.x as usize][coord.y as usize])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        self.cells[x][y] = tile;
    }

    /// Set a tile if the coordinate is on the grid. Returns whether it was.
    pub fn set_coord(&mut self, coord: Coord, tile: Tile) -> bool {
        if self.in_bounds(coord.x, coord.y) {
            self.cells[coord.x as usize][coord.y as usize] = tile;
            true
        } else {
            false
        }
    }

    /// Check if a position lies on the outermost ring
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    /// Count walls among the 8 neighbours; off-grid neighbours count as walls.
    pub fn surrounding_wall_count(&self, x: usize, y: usize) -> u32 {
        let mut count = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                match self.get(Coord::new(nx, ny)) {
                    Some(Tile::Floor) => {}
                    Some(Tile::Wall) | None => count += 1,
                }
            }
        }
        count
    }

    /// Check if any in-bounds orthogonal neighbour is a wall
    pub fn has_orthogonal_wall(&self, coord: Coord) -> bool {
        coord
            .orthogonal()
            .iter()
            .any(|&n| self.get(n) == Some(Tile::Wall))
    }

    /// Check if all 8 neighbours exist and are floor
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        for dx in -1..=1 {
            for dy in -1..=1 {
                let coord = Coord::new(x as i32 + dx, y as i32 + dy);
                if self.get(coord) != Some(Tile::Floor) {
                    return false;
                }
            }
        }
        true
    }

    /// Copy of this grid framed by `size` cells of wall on every side
    pub fn bordered(&self, size: usize) -> Grid {
        let mut out = Grid::new(self.width + size * 2, self.height + size * 2, Tile::Wall);
        for (x, column) in self.cells.iter().enumerate() {
            out.cells[x + size][size..size + self.height].copy_from_slice(column);
        }
        out
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.cells
            .iter()
            .flat_map(|col| col.iter())
            .filter(|&&t| t == tile)
            .count()
    }

    /// All positions in scan order (x outer, y inner)
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| (x, y)))
    }

    /// Check that the outermost ring is entirely wall
    pub fn border_is_closed(&self) -> bool {
        self.coords()
            .filter(|&(x, y)| self.is_border(x, y))
            .all(|(x, y)| self.cells[x][y] == Tile::Wall)
    }

    /// Wire form: `width` columns of `height` values, 1 for wall, 0 for floor
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|col| col.iter().map(Tile::value).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row: String = (0..self.width).map(|x| self.cells[x][y].symbol()).collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrounding_wall_count_counts_off_grid() {
        let grid = Grid::new(5, 5, Tile::Floor);
        // Corner: 5 neighbours are off-grid
        assert_eq!(grid.surrounding_wall_count(0, 0), 5);
        // Edge: 3 off-grid
        assert_eq!(grid.surrounding_wall_count(2, 0), 3);
        // Interior: none
        assert_eq!(grid.surrounding_wall_count(2, 2), 0);
    }

    #[test]
    fn test_surrounding_wall_count_ignores_self() {
        let mut grid = Grid::new(3, 3, Tile::Floor);
        grid.set(1, 1, Tile::Wall);
        assert_eq!(grid.surrounding_wall_count(1, 1), 0);
        assert_eq!(grid.surrounding_wall_count(0, 1), 4);
    }

    #[test]
    fn test_bordered_frames_with_wall() {
        let grid = Grid::new(4, 3, Tile::Floor);
        let framed = grid.bordered(1);
        assert_eq!(framed.width(), 6);
        assert_eq!(framed.height(), 5);
        assert!(framed.border_is_closed());
        assert_eq!(framed.count(Tile::Floor), 12);
        assert_eq!(framed.tile(1, 1), Tile::Floor);
    }

    #[test]
    fn test_ascii_roundtrip() {
        let text = "####\n#..#\n####\n";
        let grid = Grid::from_ascii(text).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.tile(1, 1), Tile::Floor);
        assert_eq!(grid.tile(0, 1), Tile::Wall);
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_ascii_rejects_ragged_rows() {
        assert!(Grid::from_ascii("###\n##\n").is_err());
        assert!(Grid::from_ascii("#x#\n").is_err());
        assert!(Grid::from_ascii("\n\n").is_err());
    }

    #[test]
    fn test_to_rows_is_x_major() {
        let grid = Grid::from_ascii("#.\n..\n").unwrap();
        assert_eq!(grid.to_rows(), vec![vec![1, 0], vec![0, 0]]);
    }

    #[test]
    fn test_is_open() {
        let grid = Grid::from_ascii("#####\n#...#\n#...#\n#...#\n#####\n").unwrap();
        assert!(grid.is_open(2, 2));
        assert!(!grid.is_open(1, 1));
        assert!(!grid.is_open(0, 0));
    }
}
