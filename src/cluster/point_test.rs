#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_centroid_and_bounds() {
        let cluster = Cluster::from_items(vec![
            Item::new(0, GeoPoint::new(59.955982, 30.244759)),
            Item::new(1, GeoPoint::new(59.955975, 30.24472)),
            Item::new(2, GeoPoint::new(59.96698, 30.244358)),
        ]);

        let center = cluster.centroid();
        assert!((center.lat() - 59.95964566666667).abs() < 1e-12);
        assert!((center.lng() - 30.244612333333333).abs() < 1e-12);

        let (min, max) = cluster.bounds();
        assert_eq!(min.lat(), 59.955975);
        assert_eq!(min.lng(), 30.244358);
        assert_eq!(max.lat(), 59.96698);
        assert_eq!(max.lng(), 30.244759);

        assert_eq!(cluster.size(), 3);
        assert!(!cluster.is_singleton());
        assert!(cluster.contains(&2));
        assert!(!cluster.contains(&3));
    }

    #[test]
    fn test_singleton_centroid_is_item_position() {
        let p = GeoPoint::new(47.59978, -122.3346);
        let cluster = Cluster::from_items(vec![Item::new("a", p)]);
        assert!(cluster.is_singleton());
        assert_eq!(cluster.centroid(), p);
    }

    #[test]
    #[should_panic(expected = "empty cluster")]
    fn test_empty_cluster_panics() {
        let _ = Cluster::<u32>::from_items(Vec::new());
    }

    #[test]
    fn test_validate_ranges() {
        assert!(GeoPoint::new(90.0, 180.0).validate().is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).validate().is_ok());
        assert!(GeoPoint::new(90.0001, 0.0).validate().is_err());
        assert!(GeoPoint::new(0.0, -180.5).validate().is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).validate().is_err());
    }
}
