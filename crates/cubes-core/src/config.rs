//! Runtime configuration for a mounted view.
//!
//! Defaults come straight from [`crate::constants`]; frontends may override the
//! initial cube count and the RNG seed.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cube count {0} outside the 10..=200 slider range")]
    CountOutOfRange(u32),
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Number of cubes selected on the slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CubeCount(u32);

impl CubeCount {
    pub const MIN: CubeCount = CubeCount(CUBE_COUNT_MIN);
    pub const MAX: CubeCount = CubeCount(CUBE_COUNT_MAX);

    /// Clamp an arbitrary value into the slider range.
    pub fn clamped(n: i64) -> Self {
        Self(n.clamp(CUBE_COUNT_MIN as i64, CUBE_COUNT_MAX as i64) as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Move by `delta` steps, staying inside the slider range.
    pub fn step(self, delta: i64) -> Self {
        Self::clamped(self.0 as i64 + delta)
    }
}

impl Default for CubeCount {
    fn default() -> Self {
        Self(CUBE_COUNT_DEFAULT)
    }
}

impl TryFrom<u32> for CubeCount {
    type Error = ConfigError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        if (CUBE_COUNT_MIN..=CUBE_COUNT_MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(ConfigError::CountOutOfRange(n))
        }
    }
}

impl std::str::FromStr for CubeCount {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s.trim().parse().map_err(|_| ConfigError::Invalid {
            key: "cube count",
            value: s.to_string(),
        })?;
        Self::try_from(n)
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub cube_count: CubeCount,
    /// Fixed seed for reproducible batches; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub fov_degrees: f32,
    pub camera_z: f32,
    pub damping: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cube_count: CubeCount::default(),
            seed: None,
            fov_degrees: CAMERA_FOV_DEG,
            camera_z: CAMERA_Z,
            damping: ORBIT_DAMPING,
        }
    }
}

impl SceneConfig {
    /// Apply `key=value` style overrides (used for environment variables on native).
    pub fn with_override(mut self, key: &'static str, value: &str) -> Result<Self, ConfigError> {
        match key {
            "count" => self.cube_count = value.parse()?,
            "seed" => {
                self.seed = Some(value.trim().parse().map_err(|_| ConfigError::Invalid {
                    key,
                    value: value.to_string(),
                })?)
            }
            _ => {
                return Err(ConfigError::Invalid {
                    key,
                    value: value.to_string(),
                })
            }
        }
        Ok(self)
    }
}
