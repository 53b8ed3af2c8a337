//! Clustering configuration

use crate::error::{ClusterError, Result};

/// Default clustering radius in screen pixels
pub const DEFAULT_RADIUS_PX: f64 = 100.0;

/// Default map tile edge in pixels
pub const DEFAULT_TILE_SIZE: f64 = 256.0;

/// Settings for the grid clustering pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterConfig {
    /// Items closer than this (in projected pixels) are grouped; also the grid cell edge
    pub radius_px: f64,
    /// Edge of one map tile in pixels; world width at zoom `z` is `tile_size * 2^z`
    pub tile_size: f64,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            radius_px: DEFAULT_RADIUS_PX,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl ClusterConfig {
    /// Creates a config, rejecting non-positive or non-finite values
    pub fn new(radius_px: f64, tile_size: f64) -> Result<Self> {
        let config = Self {
            radius_px,
            tile_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that both sizes are finite and strictly positive
    pub fn validate(&self) -> Result<()> {
        if !self.radius_px.is_finite() || self.radius_px <= 0.0 {
            return Err(ClusterError::InvalidArgument(format!(
                "Clustering radius must be a positive number of pixels, got: {}",
                self.radius_px
            )));
        }
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(ClusterError::InvalidArgument(format!(
                "Tile size must be a positive number of pixels, got: {}",
                self.tile_size
            )));
        }
        Ok(())
    }
}
