//! Outline tracing over the wall mesh
//!
//! An edge is on the outline when exactly one triangle uses it. Outlines
//! are traced by walking from vertex to vertex along such edges.

use super::Mesh;

impl Mesh {
    /// Check if the edge `a`-`b` belongs to exactly one triangle
    pub fn is_outline_edge(&self, a: usize, b: usize) -> bool {
        let shared = self.vertex_triangles[a]
            .iter()
            .filter(|&&t| self.triangles[t].contains(b))
            .take(2)
            .count();
        shared == 1
    }

    /// First unchecked vertex joined to `vertex` by an outline edge
    fn connected_outline_vertex(&self, vertex: usize, checked: &[bool]) -> Option<usize> {
        for &t in &self.vertex_triangles[vertex] {
            for &other in &self.triangles[t].vertices {
                if other != vertex && !checked[other] && self.is_outline_edge(vertex, other) {
                    return Some(other);
                }
            }
        }
        None
    }

    /// Trace every outline, starting vertices taken in index order.
    pub(super) fn calculate_outlines(&self) -> Vec<Vec<usize>> {
        let mut checked = vec![false; self.vertices.len()];
        let mut outlines = Vec::new();

        for start in 0..self.vertices.len() {
            if checked[start] {
                continue;
            }
            let Some(mut current) = self.connected_outline_vertex(start, &checked) else {
                continue;
            };

            checked[start] = true;
            let mut outline = vec![start];
            loop {
                outline.push(current);
                checked[current] = true;
                match self.connected_outline_vertex(current, &checked) {
                    Some(next) => current = next,
                    None => break,
                }
            }
            outline.push(start);
            outlines.push(outline);
        }

        outlines
    }

    /// Every outline edge of the mesh, each as `(low, high)` vertex indices
    pub fn boundary_edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .triangles
            .iter()
            .flat_map(|t| {
                let [a, b, c] = t.vertices;
                [(a, b), (b, c), (c, a)]
            })
            .map(|(a, b)| (a.min(b), a.max(b)))
            .filter(|&(a, b)| self.is_outline_edge(a, b))
            .collect();
        edges.sort_unstable();
        edges.dedup();
        edges
    }
}

#[cfg(test)]
mod tests {
    use crate::map::{Grid, Tile};
    use crate::mesh::MeshGenerator;

    #[test]
    fn test_single_block_outline() {
        // 2x2 wall block: one case 15 square, outline is its 4 corners
        let mesh = MeshGenerator::build(&Grid::new(2, 2, Tile::Wall), 1.0);
        let outlines = mesh.outlines();
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].len(), 5);
        assert_eq!(outlines[0].first(), outlines[0].last());
        assert_eq!(mesh.boundary_edges().len(), 4);
    }

    #[test]
    fn test_diagonal_is_interior() {
        let mesh = MeshGenerator::build(&Grid::new(2, 2, Tile::Wall), 1.0);
        // Triangles (0,1,2) and (0,2,3): the 0-2 diagonal is shared
        assert!(!mesh.is_outline_edge(0, 2));
        assert!(mesh.is_outline_edge(0, 1));
    }

    #[test]
    fn test_ring_has_outer_and_inner_outlines() {
        let grid = Grid::from_ascii(
            "
            ######
            #....#
            #....#
            #....#
            ######
            ",
        )
        .unwrap();
        let mesh = MeshGenerator::build(&grid, 1.0);
        assert_eq!(mesh.outlines().len(), 2);
        for outline in mesh.outlines() {
            assert_eq!(outline.first(), outline.last());
        }
    }

    #[test]
    fn test_outlines_cover_boundary_edges_once() {
        let grid = Grid::from_ascii(
            "
            ##########
            #...######
            #...#...##
            ###.#.#..#
            #.....#..#
            ##########
            ",
        )
        .unwrap();
        let mesh = MeshGenerator::build(&grid, 1.0);

        let mut traced: Vec<(usize, usize)> = mesh
            .outlines()
            .iter()
            .flat_map(|o| o.windows(2).map(|w| (w[0].min(w[1]), w[0].max(w[1]))))
            .collect();
        let before = traced.len();
        traced.sort_unstable();
        traced.dedup();
        assert_eq!(traced.len(), before, "an edge was traced twice");
        assert_eq!(traced, mesh.boundary_edges());
    }
}
