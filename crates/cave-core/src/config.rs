//! Generator configuration
//!
//! A [`GeneratorConfig`] can be built in code, or read from a TOML document
//! where every key is optional:
//!
//! ```toml
//! width = 96
//! height = 54
//! fill_percent = 45
//! seed = 1234
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_FILL_PERCENT, DEFAULT_HEIGHT, DEFAULT_SPAWN_POINTS, DEFAULT_WIDTH, MAX_DIMENSION,
    MAX_PASSAGE_RADIUS, MAX_SMOOTHING_PASSES, PASSAGE_RADIUS, ROOM_THRESHOLD, SMOOTHING_PASSES,
    WALL_THRESHOLD,
};
use crate::error::MapError;

/// Parameters for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Map width in cells, before the border is added
    pub width: u32,
    /// Map height in cells, before the border is added
    pub height: u32,
    /// Chance in percent that an interior cell starts as wall (0..=100)
    pub fill_percent: u32,
    /// Seed for the map RNG; `None` draws one from entropy
    pub seed: Option<u64>,
    /// Number of cellular automaton passes
    pub smoothing_passes: u32,
    /// Wall regions below this size become floor
    pub wall_threshold: usize,
    /// Floor regions below this size become wall
    pub room_threshold: usize,
    /// Radius of the passage brush
    pub passage_radius: i32,
    /// How many spawn points to report
    pub spawn_points: usize,
    /// Add the raw triangle list to the output
    pub include_triangles: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill_percent: DEFAULT_FILL_PERCENT,
            seed: None,
            smoothing_passes: SMOOTHING_PASSES,
            wall_threshold: WALL_THRESHOLD,
            room_threshold: ROOM_THRESHOLD,
            passage_radius: PASSAGE_RADIUS,
            spawn_points: DEFAULT_SPAWN_POINTS,
            include_triangles: false,
        }
    }
}

impl GeneratorConfig {
    /// Config with the given size and fill, defaults for everything else
    pub fn new(width: u32, height: u32, fill_percent: u32) -> Self {
        Self {
            width,
            height,
            fill_percent,
            ..Self::default()
        }
    }

    /// Builder-style seed setter
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a TOML document. Missing keys take their default value.
    pub fn from_toml_str(text: &str) -> Result<Self, MapError> {
        let config: GeneratorConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter range before generation starts
    pub fn validate(&self) -> Result<(), MapError> {
        if self.width == 0 || self.height == 0 {
            return Err(MapError::invalid(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(MapError::invalid(format!(
                "width and height must not exceed {MAX_DIMENSION}, got {}x{}",
                self.width, self.height
            )));
        }
        if self.fill_percent > 100 {
            return Err(MapError::invalid(format!(
                "fill_percent must be within 0..=100, got {}",
                self.fill_percent
            )));
        }
        if !(0..=MAX_PASSAGE_RADIUS).contains(&self.passage_radius) {
            return Err(MapError::invalid(format!(
                "passage_radius must be within 0..={MAX_PASSAGE_RADIUS}, got {}",
                self.passage_radius
            )));
        }
        if self.smoothing_passes > MAX_SMOOTHING_PASSES {
            return Err(MapError::invalid(format!(
                "smoothing_passes must not exceed {MAX_SMOOTHING_PASSES}, got {}",
                self.smoothing_passes
            )));
        }
        Ok(())
    }
}
