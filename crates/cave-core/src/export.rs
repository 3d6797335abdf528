//! Map output for the game service
//!
//! Coordinate convention: the mesh is built with `cell_size = 1 / width` of
//! the bordered grid, then every y is multiplied by `width / height`. Both
//! axes therefore span `[0, 1]`, and cell `(x, y)` has its centre at
//! `((x + 0.5) / width, (y + 0.5) / height)`. Spawn points use the same
//! mapping.

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::MapError;
use crate::map::{Grid, MapGenerator};
use crate::mesh::{Mesh, MeshGenerator, Point};
use crate::rng::RandomSource;

/// A normalized spawn position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f64,
    pub y: f64,
}

/// Response body shared with the game backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOutput {
    /// `width` columns of `height` cells, 1 for wall
    pub map: Vec<Vec<u8>>,
    /// One flat `[x0, y0, x1, y1, ...]` list per closed outline
    pub walls: Vec<Vec<f64>>,
    pub spawn_points: Vec<SpawnPoint>,
    /// Triangle positions, three vertices per triangle, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triangles: Option<Vec<f64>>,
    pub error: Option<String>,
}

impl MapOutput {
    /// Error-shaped response: empty map, message in `error`
    pub fn failure(err: &MapError) -> Self {
        Self::error_message(err.to_string())
    }

    pub fn error_message(message: impl Into<String>) -> Self {
        Self {
            map: Vec::new(),
            walls: Vec::new(),
            spawn_points: Vec::new(),
            triangles: None,
            error: Some(message.into()),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Scale factors mapping mesh output onto the unit square
fn normalization(grid: &Grid) -> (f64, f64) {
    let width = grid.width() as f64;
    let height = grid.height() as f64;
    (1.0 / width, width / height)
}

/// Mesh a finished grid with the normalized cell size
pub fn build_mesh(grid: &Grid) -> Mesh {
    let (cell_size, _) = normalization(grid);
    MeshGenerator::build(grid, cell_size)
}

fn flatten(points: &[Point], y_scale: f64) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y * y_scale]).collect()
}

/// Floor cells whose eight neighbours are all floor
pub fn spawn_candidates(grid: &Grid) -> Vec<(usize, usize)> {
    grid.coords().filter(|&(x, y)| grid.is_open(x, y)).collect()
}

/// Up to `count` distinct spawn points, drawn from the open floor cells
pub fn spawn_points<R: RandomSource>(grid: &Grid, count: usize, rng: &mut R) -> Vec<SpawnPoint> {
    let mut candidates = spawn_candidates(grid);
    rng.shuffle(&mut candidates);
    let width = grid.width() as f64;
    let height = grid.height() as f64;
    candidates
        .into_iter()
        .take(count)
        .map(|(x, y)| SpawnPoint {
            x: (x as f64 + 0.5) / width,
            y: (y as f64 + 0.5) / height,
        })
        .collect()
}

/// Assemble the output for a finished grid
pub fn map_output<R: RandomSource>(
    grid: &Grid,
    spawn_count: usize,
    include_triangles: bool,
    rng: &mut R,
) -> MapOutput {
    let (_, y_scale) = normalization(grid);
    let mesh = build_mesh(grid);

    let walls = mesh
        .outline_points()
        .iter()
        .map(|outline| flatten(outline, y_scale))
        .collect();
    let triangles = include_triangles.then(|| {
        mesh.triangle_positions()
            .chunks(2)
            .flat_map(|xy| [xy[0], xy[1] * y_scale])
            .collect()
    });

    MapOutput {
        map: grid.to_rows(),
        walls,
        spawn_points: spawn_points(grid, spawn_count, rng),
        triangles,
        error: None,
    }
}

/// Generate a map and its output in one go
pub fn generate_output<R: RandomSource>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<MapOutput, MapError> {
    let generator = MapGenerator::new(config.clone())?;
    let map = generator.generate(rng)?;
    Ok(map_output(
        &map.grid,
        config.spawn_points,
        config.include_triangles,
        rng,
    ))
}
