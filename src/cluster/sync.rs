//! Thread-safe wrapper for sharing one index between threads.
//!
//! `SyncClusterIndex` wraps a [`ClusterIndex`] in `Arc<RwLock<_>>`. Writers
//! (`insert`, `remove`, `clear`, `set_zoom`) take the lock exclusively and
//! finish recomputing before releasing it; readers share it.
//!
//! ```rust
//! use marker_cluster::{GeoPoint, Item, SyncClusterIndex};
//! use std::thread;
//!
//! let index = SyncClusterIndex::new();
//! let writer = index.clone();
//!
//! thread::spawn(move || {
//!     writer.insert([Item::new(1u32, GeoPoint::new(47.6, -122.33))]).unwrap();
//! })
//! .join()
//! .unwrap();
//!
//! assert_eq!(index.clusters().len(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::index::ClusterIndex;
use super::point::{Cluster, Item};
use crate::config::ClusterConfig;
use crate::error::Result;

/// Thread-safe handle to a [`ClusterIndex`]
///
/// Cloning is cheap and every clone sees the same index.
pub struct SyncClusterIndex<K> {
    inner: Arc<RwLock<ClusterIndex<K>>>,
}

impl<K> Clone for SyncClusterIndex<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Ord + Clone + fmt::Debug> SyncClusterIndex<K> {
    pub fn new() -> Self {
        Self::from_index(ClusterIndex::new())
    }

    pub fn with_config(config: ClusterConfig) -> Self {
        Self::from_index(ClusterIndex::with_config(config))
    }

    pub fn from_index(index: ClusterIndex<K>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }

    pub fn insert<I>(&self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = Item<K>>,
    {
        self.inner.write().insert(items)
    }

    pub fn remove(&self, id: &K) -> Option<Item<K>> {
        self.inner.write().remove(id)
    }

    pub fn clear(&self) {
        self.inner.write().clear()
    }

    pub fn set_zoom(&self, level: f64) -> Result<()> {
        self.inner.write().set_zoom(level)
    }

    pub fn zoom(&self) -> f64 {
        self.inner.read().zoom()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns a copy of the partition at the stored zoom
    pub fn clusters(&self) -> Vec<Cluster<K>> {
        self.inner.read().clusters().to_vec()
    }

    pub fn clusters_at(&self, level: f64) -> Result<Vec<Cluster<K>>> {
        self.inner.read().clusters_at(level)
    }

    pub fn on_change<F>(&self, listener: F)
    where
        F: FnMut(&[Cluster<K>]) + Send + Sync + 'static,
    {
        self.inner.write().on_change(listener)
    }

    /// Runs `f` with shared access to the underlying index
    pub fn read<R>(&self, f: impl FnOnce(&ClusterIndex<K>) -> R) -> R {
        f(&self.inner.read())
    }
}

impl<K: Ord + Clone + fmt::Debug> Default for SyncClusterIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}
