//! Marching squares cells
//!
//! Positions are kept on an integer half-cell lattice: the control node of
//! cell `(x, y)` sits at `(2x, 2y)`, its `right` midpoint at `(2x + 1, 2y)`
//! and its `above` midpoint at `(2x, 2y + 1)`. Neighbouring squares that
//! share an edge midpoint therefore share the exact same key.

use serde::{Deserialize, Serialize};

use crate::map::Grid;

/// Exact vertex position in half-cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LatticePoint {
    pub x: i32,
    pub y: i32,
}

impl LatticePoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Control point at a cell centre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub position: LatticePoint,
    /// True for wall cells
    pub active: bool,
    /// Midpoint towards the cell at `y + 1`
    pub above: LatticePoint,
    /// Midpoint towards the cell at `x + 1`
    pub right: LatticePoint,
}

impl Node {
    pub fn new(x: usize, y: usize, active: bool) -> Self {
        let (lx, ly) = (2 * x as i32, 2 * y as i32);
        Self {
            position: LatticePoint::new(lx, ly),
            active,
            above: LatticePoint::new(lx, ly + 1),
            right: LatticePoint::new(lx + 1, ly),
        }
    }
}

/// One marching squares cell spanning four control nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub top_left: LatticePoint,
    pub top_right: LatticePoint,
    pub bottom_right: LatticePoint,
    pub bottom_left: LatticePoint,
    pub centre_top: LatticePoint,
    pub centre_right: LatticePoint,
    pub centre_bottom: LatticePoint,
    pub centre_left: LatticePoint,
    /// Active corners: top-left 8, top-right 4, bottom-right 2, bottom-left 1
    pub configuration: u8,
}

impl Square {
    pub fn new(top_left: &Node, top_right: &Node, bottom_right: &Node, bottom_left: &Node) -> Self {
        let mut configuration = 0;
        if top_left.active {
            configuration += 8;
        }
        if top_right.active {
            configuration += 4;
        }
        if bottom_right.active {
            configuration += 2;
        }
        if bottom_left.active {
            configuration += 1;
        }

        Self {
            top_left: top_left.position,
            top_right: top_right.position,
            bottom_right: bottom_right.position,
            bottom_left: bottom_left.position,
            centre_top: top_left.right,
            centre_right: bottom_right.above,
            centre_bottom: bottom_left.right,
            centre_left: bottom_left.above,
            configuration,
        }
    }

    /// Wall polygon of this square, as a fan around its first point.
    ///
    /// Cases 5 and 10 (opposite corners active) always join through the
    /// centre, so two walls touching at a corner merge into one shape.
    pub fn polygon(&self) -> Vec<LatticePoint> {
        match self.configuration {
            // 1 point
            1 => vec![self.centre_left, self.centre_bottom, self.bottom_left],
            2 => vec![self.bottom_right, self.centre_bottom, self.centre_right],
            4 => vec![self.top_right, self.centre_right, self.centre_top],
            8 => vec![self.top_left, self.centre_top, self.centre_left],

            // 2 points
            3 => vec![
                self.centre_right,
                self.bottom_right,
                self.bottom_left,
                self.centre_left,
            ],
            6 => vec![
                self.centre_top,
                self.top_right,
                self.bottom_right,
                self.centre_bottom,
            ],
            9 => vec![
                self.top_left,
                self.centre_top,
                self.centre_bottom,
                self.bottom_left,
            ],
            12 => vec![
                self.top_left,
                self.top_right,
                self.centre_right,
                self.centre_left,
            ],
            5 => vec![
                self.centre_top,
                self.top_right,
                self.centre_right,
                self.centre_bottom,
                self.bottom_left,
                self.centre_left,
            ],
            10 => vec![
                self.top_left,
                self.centre_top,
                self.centre_right,
                self.bottom_right,
                self.centre_bottom,
                self.centre_left,
            ],

            // 3 points
            7 => vec![
                self.centre_top,
                self.top_right,
                self.bottom_right,
                self.bottom_left,
                self.centre_left,
            ],
            11 => vec![
                self.top_left,
                self.centre_top,
                self.centre_right,
                self.bottom_right,
                self.bottom_left,
            ],
            13 => vec![
                self.top_left,
                self.top_right,
                self.centre_right,
                self.centre_bottom,
                self.bottom_left,
            ],
            14 => vec![
                self.top_left,
                self.top_right,
                self.bottom_right,
                self.centre_bottom,
                self.centre_left,
            ],

            // 4 points
            15 => vec![
                self.top_left,
                self.top_right,
                self.bottom_right,
                self.bottom_left,
            ],

            _ => Vec::new(),
        }
    }
}

/// All squares of a grid, in scan order (x outer, y inner)
pub fn square_grid(grid: &Grid) -> Vec<Square> {
    let (width, height) = (grid.width(), grid.height());
    if width < 2 || height < 2 {
        return Vec::new();
    }

    let nodes: Vec<Vec<Node>> = (0..width)
        .map(|x| {
            (0..height)
                .map(|y| Node::new(x, y, grid.tile(x, y).is_wall()))
                .collect()
        })
        .collect();

    let mut squares = Vec::with_capacity((width - 1) * (height - 1));
    for x in 0..width - 1 {
        for y in 0..height - 1 {
            squares.push(Square::new(
                &nodes[x][y + 1],
                &nodes[x + 1][y + 1],
                &nodes[x + 1][y],
                &nodes[x][y],
            ));
        }
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Tile;

    #[test]
    fn test_configuration_bits() {
        let on = |x, y| Node::new(x, y, true);
        let off = |x, y| Node::new(x, y, false);

        let sq = Square::new(&on(0, 1), &off(1, 1), &off(1, 0), &off(0, 0));
        assert_eq!(sq.configuration, 8);
        let sq = Square::new(&off(0, 1), &on(1, 1), &off(1, 0), &on(0, 0));
        assert_eq!(sq.configuration, 5);
        let sq = Square::new(&on(0, 1), &on(1, 1), &on(1, 0), &on(0, 0));
        assert_eq!(sq.configuration, 15);
    }

    #[test]
    fn test_shared_midpoints() {
        let a = Node::new(0, 0, true);
        let b = Node::new(1, 0, true);
        let c = Node::new(0, 1, true);
        let d = Node::new(1, 1, true);
        let sq = Square::new(&c, &d, &b, &a);
        // Bottom midpoint of this square is the right midpoint of its origin
        assert_eq!(sq.centre_bottom, LatticePoint::new(1, 0));
        assert_eq!(sq.centre_left, LatticePoint::new(0, 1));
        assert_eq!(sq.centre_right, LatticePoint::new(2, 1));
        assert_eq!(sq.centre_top, LatticePoint::new(1, 2));
    }

    #[test]
    fn test_polygon_sizes_per_case() {
        let expected = [0, 3, 3, 4, 3, 6, 4, 5, 3, 4, 6, 5, 4, 5, 5, 4];
        for (config, &len) in expected.iter().enumerate() {
            let bit = |b: u8| (config as u8 & b) != 0;
            let sq = Square::new(
                &Node::new(0, 1, bit(8)),
                &Node::new(1, 1, bit(4)),
                &Node::new(1, 0, bit(2)),
                &Node::new(0, 0, bit(1)),
            );
            assert_eq!(sq.configuration as usize, config);
            assert_eq!(sq.polygon().len(), len, "case {config}");
        }
    }

    #[test]
    fn test_square_grid_size() {
        let grid = Grid::new(4, 3, Tile::Wall);
        let squares = square_grid(&grid);
        assert_eq!(squares.len(), 3 * 2);
        assert!(squares.iter().all(|s| s.configuration == 15));
        assert!(square_grid(&Grid::new(1, 5, Tile::Wall)).is_empty());
    }
}
