#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::cluster::{ClickDispatcher, ClusterIndex, GeoPoint, Item, Marker, markers};
    use parking_lot::Mutex;

    fn sample_index() -> ClusterIndex<&'static str> {
        let mut index = ClusterIndex::new();
        index
            .insert([
                Item::new("a", GeoPoint::new(47.6, -122.34)),
                Item::new("b", GeoPoint::new(47.6, -122.339)),
                Item::new("far", GeoPoint::new(-33.8688, 151.2093)),
            ])
            .unwrap();
        index.set_zoom(12.0).unwrap();
        index
    }

    #[test]
    fn test_markers_from_partition() {
        let index = sample_index();
        let markers = markers(index.clusters());
        assert_eq!(markers.len(), 2);

        let cluster = markers
            .iter()
            .find(|m| matches!(m, Marker::Cluster { .. }))
            .unwrap();
        assert_eq!(cluster.badge().as_deref(), Some("2"));
        assert!((cluster.position().lng() - -122.3395).abs() < 1e-9);

        let single = markers
            .iter()
            .find(|m| matches!(m, Marker::Item { .. }))
            .unwrap();
        assert_eq!(single.badge(), None);
        assert_eq!(single.position(), GeoPoint::new(-33.8688, 151.2093));
    }

    #[test]
    fn test_click_dispatch() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let cluster_log = Arc::clone(&log);
        let item_log = Arc::clone(&log);

        let mut dispatcher = ClickDispatcher::<&'static str>::new()
            .on_cluster_click(move |_, members| {
                cluster_log.lock().push(format!("{} items in cluster", members.len()));
                false
            })
            .on_item_click(move |_, id| {
                item_log.lock().push(format!("clicked {}", id));
                true
            });

        let index = sample_index();
        let consumed: Vec<bool> = markers(index.clusters())
            .iter()
            .map(|m| dispatcher.dispatch(m))
            .collect();

        assert_eq!(consumed.iter().filter(|&&c| c).count(), 1);
        let mut log = log.lock().clone();
        log.sort();
        assert_eq!(log, vec!["2 items in cluster", "clicked far"]);
    }

    #[test]
    fn test_unhandled_click_is_not_consumed() {
        let mut dispatcher: ClickDispatcher<u8> = ClickDispatcher::new();
        let marker = Marker::Item {
            position: GeoPoint::new(0.0, 0.0),
            id: 1,
        };
        assert!(!dispatcher.dispatch(&marker));
    }
}
