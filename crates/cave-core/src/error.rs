//! Generation errors

use thiserror::Error;

/// Errors surfaced by map generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Width, height or fill percentage out of range, or a bad config value
    #[error("Invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    /// No floor region survived smoothing and pruning, so there is no main room
    #[error("Degenerate map: no rooms survived on a {width}x{height} map at {fill_percent}% fill")]
    DegenerateMap {
        width: u32,
        height: u32,
        fill_percent: u32,
    },

    /// A room is still cut off after connectivity resolution
    #[error("Internal error: room {room} is not reachable from the main room")]
    UnreachableRoom { room: usize },

    /// A configuration document could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl MapError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        MapError::InvalidParameters {
            reason: reason.into(),
        }
    }

    /// True for invariant violations inside the generator, as opposed to
    /// problems with the caller's input.
    pub fn is_internal(&self) -> bool {
        matches!(self, MapError::UnreachableRoom { .. })
    }
}

impl From<toml::de::Error> for MapError {
    fn from(err: toml::de::Error) -> Self {
        MapError::Config(err.to_string())
    }
}
