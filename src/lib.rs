//! Zoom-aware marker clustering for map views
//!
//! Generates a logarithmic spiral of synthetic points around a center and
//! groups nearby points into clusters with a uniform pixel grid over a
//! spherical Mercator projection.
//!
//! ```rust
//! use marker_cluster::{ClusterIndex, GeoPoint, Item, SpiralParams, generate};
//!
//! let center = GeoPoint::new(47.59978, -122.3346);
//! let points = generate(center, 20, &SpiralParams::default());
//!
//! let mut index = ClusterIndex::new();
//! index.insert(points.into_iter().enumerate().map(|(i, p)| Item::new(i, p)))?;
//! index.set_zoom(12.0)?;
//! assert_eq!(index.clusters().iter().map(|c| c.size()).sum::<usize>(), 20);
//! # Ok::<(), marker_cluster::ClusterError>(())
//! ```

pub mod cluster;
pub mod config;
pub mod error;

pub use cluster::{
    ClickDispatcher, Cluster, ClusterIndex, GeoPoint, Item, Marker, SpiralParams,
    SyncClusterIndex, checked_count, generate, markers,
};
pub use config::ClusterConfig;
pub use error::{ClusterError, Result};
