#[cfg(test)]
mod tests {
    use std::thread;

    use crate::cluster::{GeoPoint, Item, SpiralParams, SyncClusterIndex, generate};

    #[test]
    fn test_concurrent_writers() {
        let index = SyncClusterIndex::new();
        index.set_zoom(20.0).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let index = index.clone();
                thread::spawn(move || {
                    let center = GeoPoint::new(10.0 * t as f64, 20.0);
                    let items = generate(center, 10, &SpiralParams::default())
                        .into_iter()
                        .enumerate()
                        .map(move |(i, p)| Item::new(t * 100 + i, p));
                    index.insert(items).unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(index.len(), 40);
        let total: usize = index.clusters().iter().map(|c| c.size()).sum();
        assert_eq!(total, 40);
        assert_eq!(index.read(|inner| inner.zoom()), 20.0);
    }

    #[test]
    fn test_clones_share_state() {
        let a = SyncClusterIndex::new();
        let b = a.clone();
        a.insert([Item::new("x", GeoPoint::new(1.0, 1.0))]).unwrap();
        assert_eq!(b.len(), 1);
        b.clear();
        assert!(a.is_empty());
        assert!(a.clusters_at(3.0).unwrap().is_empty());
    }
}
