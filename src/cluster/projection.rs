use std::f64::consts::PI;

use super::point::GeoPoint;

/// Coefficient to translate from degrees to radians
pub const DEGREE_RAD: f64 = PI / 180.0;

/// Largest |sin(lat)| fed to the Mercator formula, keeps poles finite
const MAX_SIN_LAT: f64 = 0.9999;

/// Point in world pixel space at a given zoom
///
/// `x` grows eastwards and `y` grows southwards, both in `[0, world_size]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    /// Returns squared (without sqrt) distance between two pixel points
    pub fn sq_dist(&self, other: &PixelPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn dist(&self, other: &PixelPoint) -> f64 {
        self.sq_dist(other).sqrt()
    }
}

/// Width (and height) of the whole world in pixels at `zoom`
pub fn world_size(zoom: f64, tile_size: f64) -> f64 {
    tile_size * 2f64.powf(zoom)
}

/// Projects a point with spherical Mercator into world pixels at `zoom`
pub fn project(point: &GeoPoint, zoom: f64, tile_size: f64) -> PixelPoint {
    let world = world_size(zoom, tile_size);
    let x = (point.lng() / 360.0 + 0.5) * world;

    let sin_lat = (point.lat() * DEGREE_RAD).sin().clamp(-MAX_SIN_LAT, MAX_SIN_LAT);
    let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI)) * world;

    PixelPoint { x, y }
}

/// Distance in pixels between two points once projected at `zoom`
pub fn pixel_distance(a: &GeoPoint, b: &GeoPoint, zoom: f64, tile_size: f64) -> f64 {
    project(a, zoom, tile_size).dist(&project(b, zoom, tile_size))
}
