//! Synthetic logarithmic spiral of points around a center
//!
//! Point `i` sits at angle `t = i * angle_step` and distance
//! `r = radius_base * e^(radius_growth * t)` degrees from the center.

use std::f64::consts::PI;

use super::point::GeoPoint;
use crate::error::{ClusterError, Result};

/// Shape of the spiral
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParams {
    /// Angle between consecutive points in radians
    pub angle_step: f64,
    /// Distance of the first point from the center, in degrees
    pub radius_base: f64,
    /// Exponential growth rate of the distance per radian
    pub radius_growth: f64,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            angle_step: 0.33 * PI,
            radius_base: 0.005,
            radius_growth: 0.1,
        }
    }
}

/// Generates `count` points on a logarithmic spiral around `center`
///
/// The latitude offset is `r * cos(t)` and the longitude offset `r * sin(t)`.
/// Results are not clamped: a center close to a pole or the antimeridian can
/// produce coordinates outside the valid range.
pub fn generate(center: GeoPoint, count: usize, params: &SpiralParams) -> Vec<GeoPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64 * params.angle_step;
            let r = params.radius_base * (params.radius_growth * t).exp();
            GeoPoint::new(center.lat() + r * t.cos(), center.lng() + r * t.sin())
        })
        .collect()
}

/// Converts a signed point count into a `usize`, rejecting negative values
pub fn checked_count(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| {
        log::warn!("Rejecting negative point count {}", count);
        ClusterError::InvalidArgument(format!("Point count must not be negative, got: {}", count))
    })
}
