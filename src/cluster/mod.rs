//! Package cluster groups (lat, lng) markers on a pixel grid per zoom level
pub mod grid;
pub mod index;
pub mod point;
pub mod projection;
pub mod render;
pub mod spiral;
pub mod sync;

#[cfg(test)]
mod point_test;
#[cfg(test)]
mod render_test;
#[cfg(test)]
mod sync_test;

pub use grid::{CellIndex, PixelGrid, cluster_items};
pub use index::{ClusterIndex, DEFAULT_ZOOM};
pub use point::{Cluster, GeoPoint, Item};
pub use projection::{DEGREE_RAD, PixelPoint, pixel_distance, project, world_size};
pub use render::{ClickDispatcher, Marker, markers};
pub use spiral::{SpiralParams, checked_count, generate};
pub use sync::SyncClusterIndex;
