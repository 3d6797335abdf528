//! Passage carving between rooms
//!
//! A passage is an integer line between two tiles, widened by stamping a
//! floor disk at every point of the line.

use super::{Coord, Grid, Tile};

/// Integer line from `from` towards `to`.
///
/// Steps along the longer axis and accumulates error on the shorter one.
/// The start tile is included, the end tile is not, so a line between
/// two equal points is empty.
pub fn line(from: Coord, to: Coord) -> Vec<Coord> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let mut inverted = false;
    let mut step = dx.signum();
    let mut gradient_step = dy.signum();
    let mut longest = dx.abs();
    let mut shortest = dy.abs();

    if longest < shortest {
        inverted = true;
        longest = dy.abs();
        shortest = dx.abs();
        step = dy.signum();
        gradient_step = dx.signum();
    }

    // Doubled so the half-step starting offset stays exact
    let mut accumulation = longest;
    let mut x = from.x;
    let mut y = from.y;
    let mut points = Vec::with_capacity(longest as usize);

    for _ in 0..longest {
        points.push(Coord::new(x, y));

        if inverted {
            y += step;
        } else {
            x += step;
        }

        accumulation += 2 * shortest;
        if accumulation >= 2 * longest {
            if inverted {
                x += gradient_step;
            } else {
                y += gradient_step;
            }
            accumulation -= 2 * longest;
        }
    }

    points
}

/// Set every in-bounds cell within `radius` of `center` to floor
pub fn draw_circle(grid: &mut Grid, center: Coord, radius: i32) {
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                grid.set_coord(center.offset(dx, dy), Tile::Floor);
            }
        }
    }
}

/// Carve a corridor of the given radius from `from` to `to`
pub fn carve_passage(grid: &mut Grid, from: Coord, to: Coord, radius: i32) {
    let points = line(from, to);
    log::trace!(
        "carving passage ({}, {}) -> ({}, {}): {} points, radius {radius}",
        from.x,
        from.y,
        to.x,
        to.y,
        points.len()
    );
    for point in points {
        draw_circle(grid, point, radius);
    }
}
