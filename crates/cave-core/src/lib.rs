//! cave-core: Cave map generation for top-down arena games
//!
//! Produces a cave map by cellular automaton smoothing, removes small
//! regions, carves passages so every room is reachable from the main room,
//! then extracts the wall area as a triangle mesh with closed outlines.
//!
//! All randomness goes through [`RandomSource`], so a seeded [`MapRng`]
//! always reproduces the same map.

mod config;
mod consts;
mod error;
mod rng;

pub mod export;
pub mod map;
pub mod mesh;

pub use config::GeneratorConfig;
pub use consts::*;
pub use error::MapError;
pub use export::{MapOutput, SpawnPoint, generate_output};
pub use map::{GeneratedMap, Grid, MapGenerator, Tile};
pub use mesh::{Mesh, MeshGenerator};
pub use rng::{MapRng, RandomSource};

/// Seed for a run: the configured one, or a fresh one from entropy
pub fn rng_for(config: &GeneratorConfig) -> MapRng {
    match config.seed {
        Some(seed) => MapRng::new(seed),
        None => MapRng::from_entropy(),
    }
}
