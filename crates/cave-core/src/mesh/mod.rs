//! Wall mesh extraction
//!
//! Marching squares turns the finished grid into a triangle mesh of the
//! wall area; outline tracing then walks the mesh boundary into closed
//! polygons.

mod outline;
mod square;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::map::Grid;

pub use square::{LatticePoint, Node, Square, square_grid};

/// A vertex position in output units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Three indices into the mesh vertex table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [usize; 3],
}

impl Triangle {
    pub fn contains(&self, vertex: usize) -> bool {
        self.vertices.contains(&vertex)
    }
}

/// Triangulated wall area plus its traced outlines
#[derive(Debug, Clone)]
pub struct Mesh {
    cell_size: f64,
    vertices: Vec<LatticePoint>,
    triangles: Vec<Triangle>,
    /// For each vertex, the triangles that use it
    vertex_triangles: Vec<Vec<usize>>,
    /// Closed vertex-index loops, first index repeated at the end
    outlines: Vec<Vec<usize>>,
}

/// Builds a [`Mesh`] from a grid
#[derive(Debug, Default)]
pub struct MeshGenerator {
    vertices: Vec<LatticePoint>,
    vertex_indices: HashMap<LatticePoint, usize>,
    triangles: Vec<Triangle>,
    vertex_triangles: Vec<Vec<usize>>,
}

impl MeshGenerator {
    /// Triangulate every square of `grid` and trace the wall outlines.
    /// Cell centres land at `(x + 0.5) * cell_size`.
    pub fn build(grid: &Grid, cell_size: f64) -> Mesh {
        let mut generator = MeshGenerator::default();
        for square in square_grid(grid) {
            generator.mesh_from_points(&square.polygon());
        }

        let mut mesh = Mesh {
            cell_size,
            vertices: generator.vertices,
            triangles: generator.triangles,
            vertex_triangles: generator.vertex_triangles,
            outlines: Vec::new(),
        };
        mesh.outlines = mesh.calculate_outlines();

        log::debug!(
            "mesh: {} vertices, {} triangles, {} outlines",
            mesh.vertices.len(),
            mesh.triangles.len(),
            mesh.outlines.len()
        );
        mesh
    }

    /// Fan-triangulate a convex polygon around its first point
    fn mesh_from_points(&mut self, points: &[LatticePoint]) {
        if points.len() < 3 {
            return;
        }
        let indices: Vec<usize> = points.iter().map(|&p| self.vertex_index(p)).collect();
        for i in 1..indices.len() - 1 {
            self.create_triangle(indices[0], indices[i], indices[i + 1]);
        }
    }

    /// Index of a position, assigned the first time it is seen
    fn vertex_index(&mut self, point: LatticePoint) -> usize {
        if let Some(&index) = self.vertex_indices.get(&point) {
            return index;
        }
        let index = self.vertices.len();
        self.vertices.push(point);
        self.vertex_triangles.push(Vec::new());
        self.vertex_indices.insert(point, index);
        index
    }

    fn create_triangle(&mut self, a: usize, b: usize, c: usize) {
        let index = self.triangles.len();
        self.triangles.push(Triangle {
            vertices: [a, b, c],
        });
        for vertex in [a, b, c] {
            self.vertex_triangles[vertex].push(index);
        }
    }
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Outlines as vertex-index loops
    pub fn outlines(&self) -> &[Vec<usize>] {
        &self.outlines
    }

    /// Exact lattice position of a vertex
    pub fn lattice_point(&self, vertex: usize) -> LatticePoint {
        self.vertices[vertex]
    }

    /// Position of a vertex in output units
    pub fn position(&self, vertex: usize) -> Point {
        let half = self.cell_size / 2.0;
        let p = self.vertices[vertex];
        Point {
            x: p.x as f64 * half + half,
            y: p.y as f64 * half + half,
        }
    }

    /// Outlines mapped back to positions
    pub fn outline_points(&self) -> Vec<Vec<Point>> {
        self.outlines
            .iter()
            .map(|outline| outline.iter().map(|&v| self.position(v)).collect())
            .collect()
    }

    /// Flat `[x0, y0, x1, y1, ...]` list, three vertices per triangle
    pub fn triangle_positions(&self) -> Vec<f64> {
        self.triangles
            .iter()
            .flat_map(|t| t.vertices)
            .flat_map(|v| {
                let p = self.position(v);
                [p.x, p.y]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Tile;

    #[test]
    fn test_open_grid_has_no_mesh() {
        let mesh = MeshGenerator::build(&Grid::new(5, 5, Tile::Floor), 1.0);
        assert_eq!(mesh.vertex_count(), 0);
        assert!(mesh.triangles().is_empty());
        assert!(mesh.outlines().is_empty());
    }

    #[test]
    fn test_solid_grid_mesh_counts() {
        let mesh = MeshGenerator::build(&Grid::new(3, 3, Tile::Wall), 1.0);
        // 4 squares, all case 15, 2 triangles each, sharing the 9 nodes
        assert_eq!(mesh.triangles().len(), 8);
        assert_eq!(mesh.vertex_count(), 9);
    }

    #[test]
    fn test_vertices_are_shared_between_squares() {
        let grid = Grid::from_ascii(
            "
            ###
            #.#
            ###
            ",
        )
        .unwrap();
        let mesh = MeshGenerator::build(&grid, 1.0);
        // Every triangle index is valid and each lattice point appears once
        let mut seen = std::collections::HashSet::new();
        for v in 0..mesh.vertex_count() {
            assert!(seen.insert(mesh.lattice_point(v)));
        }
        assert!(
            mesh.triangles()
                .iter()
                .all(|t| t.vertices.iter().all(|&v| v < mesh.vertex_count()))
        );
    }

    #[test]
    fn test_position_scaling() {
        let mesh = MeshGenerator::build(&Grid::new(2, 2, Tile::Wall), 0.5);
        let positions: Vec<Point> = (0..mesh.vertex_count()).map(|v| mesh.position(v)).collect();
        assert!(positions.contains(&Point { x: 0.25, y: 0.25 }));
        assert!(positions.contains(&Point { x: 0.75, y: 0.75 }));
        assert_eq!(mesh.triangle_positions().len(), 2 * 3 * 2);
    }
}
