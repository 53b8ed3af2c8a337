//! Markers for a map surface and routing of marker clicks

use super::point::{Cluster, GeoPoint, Item};

/// Something to draw on the map
#[derive(Debug, Clone, PartialEq)]
pub enum Marker<K> {
    /// Aggregate marker drawn at the centroid with a badge showing `count`
    Cluster {
        position: GeoPoint,
        count: usize,
        members: Vec<K>,
    },
    /// A lone item drawn at its exact position
    Item { position: GeoPoint, id: K },
}

impl<K> Marker<K> {
    pub fn position(&self) -> GeoPoint {
        match self {
            Marker::Cluster { position, .. } | Marker::Item { position, .. } => *position,
        }
    }

    /// Badge text for cluster markers, `None` for single items
    pub fn badge(&self) -> Option<String> {
        match self {
            Marker::Cluster { count, .. } => Some(count.to_string()),
            Marker::Item { .. } => None,
        }
    }
}

/// Turns a partition into markers, one per cluster
pub fn markers<K: Clone>(clusters: &[Cluster<K>]) -> Vec<Marker<K>> {
    clusters
        .iter()
        .map(|cluster| match cluster.items() {
            [item] => Marker::Item {
                position: item.position(),
                id: item.id().clone(),
            },
            items => Marker::Cluster {
                position: cluster.centroid(),
                count: items.len(),
                members: items.iter().map(|i: &Item<K>| i.id().clone()).collect(),
            },
        })
        .collect()
}

type ClusterClick<K> = Box<dyn FnMut(GeoPoint, &[K]) -> bool + Send>;
type ItemClick<K> = Box<dyn FnMut(GeoPoint, &K) -> bool + Send>;

/// Routes a clicked marker to the matching callback
///
/// Callbacks return `true` when they consumed the event; with no callback
/// registered the event is left unconsumed.
pub struct ClickDispatcher<K> {
    on_cluster: Option<ClusterClick<K>>,
    on_item: Option<ItemClick<K>>,
}

impl<K> Default for ClickDispatcher<K> {
    fn default() -> Self {
        Self {
            on_cluster: None,
            on_item: None,
        }
    }
}

impl<K> ClickDispatcher<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_cluster_click<F>(mut self, f: F) -> Self
    where
        F: FnMut(GeoPoint, &[K]) -> bool + Send + 'static,
    {
        self.on_cluster = Some(Box::new(f));
        self
    }

    pub fn on_item_click<F>(mut self, f: F) -> Self
    where
        F: FnMut(GeoPoint, &K) -> bool + Send + 'static,
    {
        self.on_item = Some(Box::new(f));
        self
    }

    pub fn dispatch(&mut self, marker: &Marker<K>) -> bool {
        match marker {
            Marker::Cluster {
                position, members, ..
            } => self.on_cluster.as_mut().is_some_and(|f| f(*position, members.as_slice())),
            Marker::Item { position, id } => self.on_item.as_mut().is_some_and(|f| f(*position, id)),
        }
    }
}
