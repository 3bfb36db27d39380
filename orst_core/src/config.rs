//! The settings a [`Visualizer`](crate::Visualizer) is built from.
//!
//! Nothing in here is ever fatal: sizes and speeds outside their ranges are clamped with a
//! warning. Only a config file that does not parse is an error.
//!
//! ```
//! use orst_core::{AlgorithmId, Config};
//!
//! let config = Config::from_toml_str(
//!     r#"
//!     size = 500
//!     speed = 80
//!     algorithms = ["bubble", "quick-3way"]
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.size, 100);
//! assert_eq!(config.speed, 80);
//! assert_eq!(config.algorithms, [AlgorithmId::Bubble, AlgorithmId::Quick3Way]);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OrstError, Result};
use crate::pacing::{clamp_speed, DEFAULT_SPEED};
use crate::sorters::AlgorithmId;

pub const MIN_SIZE: usize = 5;
pub const MAX_SIZE: usize = 100;
pub const DEFAULT_SIZE: usize = 50;

/// Clamps a dataset size into `[MIN_SIZE, MAX_SIZE]`.
pub fn clamp_size(size: usize) -> usize {
    let clamped = size.clamp(MIN_SIZE, MAX_SIZE);
    if clamped != size {
        tracing::warn!(size, clamped, "dataset size out of range, clamping");
    }
    clamped
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of bars in a generated dataset.
    pub size: usize,

    /// Speed on the `1..=100` scale, see [`pacing`](crate::pacing).
    pub speed: u32,

    /// Whether runs play tones.
    pub sound: bool,

    /// Algorithms raced by [`Visualizer::start_selected`](crate::Visualizer::start_selected).
    pub algorithms: Vec<AlgorithmId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            speed: DEFAULT_SPEED,
            sound: false,
            algorithms: vec![AlgorithmId::Bubble, AlgorithmId::Quick],
        }
    }
}

impl Config {
    /// Returns the config with size and speed pulled into range.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.size = clamp_size(self.size);

        let speed = clamp_speed(self.speed);
        if speed != self.speed {
            tracing::warn!(speed = self.speed, clamped = speed, "speed out of range, clamping");
        }
        self.speed = speed;

        self
    }

    /// Parses a TOML document. Missing keys fall back to [`Config::default`].
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml)?;
        Ok(config.clamped())
    }

    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let toml = std::fs::read_to_string(path).map_err(|source| OrstError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&toml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_range() {
        let config = Config::default();
        assert_eq!(config.clone().clamped(), config);
    }

    #[test]
    fn clamps_instead_of_failing() {
        let config = Config {
            size: 1,
            speed: 0,
            ..Config::default()
        }
        .clamped();

        assert_eq!(config.size, MIN_SIZE);
        assert_eq!(config.speed, 1);
        assert_eq!(clamp_size(1000), MAX_SIZE);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let config = Config::from_toml_str("sound = true").unwrap();
        assert!(config.sound);
        assert_eq!(config.size, DEFAULT_SIZE);
        assert_eq!(config.algorithms, Config::default().algorithms);
    }

    #[test]
    fn rejects_unknown_algorithms_and_keys() {
        assert!(matches!(
            Config::from_toml_str(r#"algorithms = ["quantum"]"#),
            Err(OrstError::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str("colour = \"red\""),
            Err(OrstError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        assert!(matches!(
            Config::load("/definitely/not/here.toml"),
            Err(OrstError::Read { .. })
        ));
    }
}
