//! Geographic points, caller-owned items and the clusters built from them

use crate::error::{ClusterError, Result};

/// GeoPoint is an immutable (latitude, longitude) pair in degrees
///
/// Construction does not validate the range so generated points near a pole
/// or the antimeridian can still be represented; call [`GeoPoint::validate`]
/// (or insert into a [`ClusterIndex`](super::ClusterIndex)) to check it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Checks latitude is within [-90, 90] and longitude within [-180, 180]
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(ClusterError::InvalidArgument(format!(
                "Latitude out of range [-90.0, 90.0]: {}",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(ClusterError::InvalidArgument(format!(
                "Longitude out of range [-180.0, 180.0]: {}",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Item is a position plus the caller's identifier for it
#[derive(Debug, Clone, PartialEq)]
pub struct Item<K> {
    id: K,
    position: GeoPoint,
}

impl<K> Item<K> {
    pub fn new(id: K, position: GeoPoint) -> Self {
        Self { id, position }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }
}

/// Cluster is a group of items that are close together at some zoom level
///
/// Clusters are rebuilt from scratch on every change and never edited.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<K> {
    items: Vec<Item<K>>,
    centroid: GeoPoint,
}

impl<K> Cluster<K> {
    /// Builds a cluster and computes its centroid
    ///
    /// The centroid is the plain mean of member coordinates, which is wrong
    /// for clusters straddling the antimeridian.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty
    pub fn from_items(items: Vec<Item<K>>) -> Self {
        if items.is_empty() {
            panic!("empty cluster");
        }

        let mut lat = 0.0;
        let mut lng = 0.0;
        for item in &items {
            lat += item.position.lat;
            lng += item.position.lng;
        }
        let n = items.len() as f64;

        Self {
            centroid: GeoPoint::new(lat / n, lng / n),
            items,
        }
    }

    pub fn items(&self) -> &[Item<K>] {
        &self.items
    }

    pub fn centroid(&self) -> GeoPoint {
        self.centroid
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_singleton(&self) -> bool {
        self.items.len() == 1
    }

    /// Returns `(min, max)` corners of the box around all members
    pub fn bounds(&self) -> (GeoPoint, GeoPoint) {
        let mut min = GeoPoint::new(90.0, 180.0);
        let mut max = GeoPoint::new(-90.0, -180.0);

        for item in &self.items {
            let p = item.position;
            min.lat = min.lat.min(p.lat);
            min.lng = min.lng.min(p.lng);
            max.lat = max.lat.max(p.lat);
            max.lng = max.lng.max(p.lng);
        }

        (min, max)
    }
}

impl<K: PartialEq> Cluster<K> {
    pub fn contains(&self, id: &K) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }
}
