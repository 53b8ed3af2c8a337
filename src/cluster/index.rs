//! ClusterIndex keeps the item set and the partition derived from it

use std::collections::BTreeMap;
use std::fmt;

use super::grid::cluster_items;
use super::point::{Cluster, GeoPoint, Item};
use crate::config::ClusterConfig;
use crate::error::{ClusterError, Result};

/// Zoom level a new index starts at
pub const DEFAULT_ZOOM: f64 = 0.0;

type ChangeListener<K> = Box<dyn FnMut(&[Cluster<K>]) + Send + Sync>;

/// Set of items clustered at the current zoom level
///
/// Items are keyed by identifier. The partition is recomputed in full after
/// every change (`insert`, `remove`, `clear`, `set_zoom`) and never patched,
/// so it only ever depends on the item set and the zoom.
pub struct ClusterIndex<K> {
    config: ClusterConfig,
    zoom: f64,
    items: BTreeMap<K, GeoPoint>,
    clusters: Vec<Cluster<K>>,
    listeners: Vec<ChangeListener<K>>,
}

impl<K: Ord + Clone + fmt::Debug> ClusterIndex<K> {
    pub fn new() -> Self {
        Self::with_config(ClusterConfig::default())
    }

    pub fn with_config(config: ClusterConfig) -> Self {
        Self {
            config,
            zoom: DEFAULT_ZOOM,
            items: BTreeMap::new(),
            clusters: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns all items ordered by identifier
    pub fn items(&self) -> Vec<Item<K>> {
        self.items
            .iter()
            .map(|(id, &p)| Item::new(id.clone(), p))
            .collect()
    }

    /// Adds items and recomputes the partition
    ///
    /// An item whose identifier is already present replaces the old position.
    /// If any position is out of range nothing is inserted.
    pub fn insert<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = Item<K>>,
    {
        let items: Vec<Item<K>> = items.into_iter().collect();
        for item in &items {
            if let Err(e) = item.position().validate() {
                log::warn!("Rejecting item {:?}: {}", item.id(), e);
                return Err(e);
            }
        }

        for item in items {
            let position = item.position();
            self.items.insert(item.id().clone(), position);
        }
        self.recompute();
        Ok(())
    }

    /// Removes an item by identifier, recomputing the partition if it existed
    pub fn remove(&mut self, id: &K) -> Option<Item<K>> {
        let position = self.items.remove(id)?;
        self.recompute();
        Some(Item::new(id.clone(), position))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    /// Sets the zoom level and recomputes the partition
    pub fn set_zoom(&mut self, level: f64) -> Result<()> {
        validate_zoom(level)?;
        self.recompute_at(level);
        Ok(())
    }

    /// Computes the partition at `level` without touching the stored zoom
    pub fn clusters_at(&self, level: f64) -> Result<Vec<Cluster<K>>> {
        validate_zoom(level)?;
        Ok(cluster_items(&self.items(), level, &self.config))
    }

    /// Returns the partition at the stored zoom level
    pub fn clusters(&self) -> &[Cluster<K>] {
        &self.clusters
    }

    /// Registers a callback run with the new partition after every change
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&[Cluster<K>]) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn recompute(&mut self) {
        self.recompute_at(self.zoom);
    }

    /// Stores `zoom` only together with the partition computed for it
    fn recompute_at(&mut self, zoom: f64) {
        self.clusters = cluster_items(&self.items(), zoom, &self.config);
        self.zoom = zoom;
        log::debug!(
            "Clustered {} items into {} clusters at zoom {}",
            self.items.len(),
            self.clusters.len(),
            self.zoom
        );

        for listener in &mut self.listeners {
            listener(&self.clusters);
        }
    }
}

impl<K: Ord + Clone + fmt::Debug> Default for ClusterIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for ClusterIndex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterIndex")
            .field("config", &self.config)
            .field("zoom", &self.zoom)
            .field("items", &self.items.len())
            .field("clusters", &self.clusters.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn validate_zoom(level: f64) -> Result<()> {
    if !level.is_finite() || level < 0.0 {
        log::warn!("Rejecting zoom level {}", level);
        return Err(ClusterError::InvalidArgument(format!(
            "Zoom level must be a finite non-negative number, got: {}",
            level
        )));
    }
    Ok(())
}
