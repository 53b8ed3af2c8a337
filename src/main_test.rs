#[cfg(test)]
mod tests {
    use crate::{Args, read_points, run, write_markers};
    use marker_cluster::{ClusterIndex, GeoPoint, Item, markers};
    use std::fs;
    use tempfile::tempdir;

    fn args(input: Option<std::path::PathBuf>, output: Option<std::path::PathBuf>) -> Args {
        Args {
            input,
            output,
            lat: 47.59978,
            lng: -122.3346,
            count: 20,
            zoom: 12.0,
            radius: 100.0,
            debug: false,
        }
    }

    #[test]
    fn test_read_points_with_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(
            &path,
            "latitude,longitude,name
40.7128,-74.0060,a
40.7130,-74.0062,b
not,a number
41.0000,-74.0000,c",
        )
        .unwrap();

        let points = read_points(&path).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], GeoPoint::new(40.7128, -74.0060));
        assert_eq!(points[2], GeoPoint::new(41.0, -74.0));
    }

    #[test]
    fn test_read_points_without_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("points.csv");
        fs::write(&path, "1.5,2.5\n3.5,4.5\n").unwrap();

        let points = read_points(&path).unwrap();
        assert_eq!(points, vec![GeoPoint::new(1.5, 2.5), GeoPoint::new(3.5, 4.5)]);
    }

    #[test]
    fn test_write_markers() {
        let mut index = ClusterIndex::new();
        index
            .insert([
                Item::new(0, GeoPoint::new(40.7128, -74.0060)),
                Item::new(1, GeoPoint::new(40.7130, -74.0062)),
                Item::new(2, GeoPoint::new(41.5, -74.0)),
            ])
            .unwrap();
        index.set_zoom(12.0).unwrap();

        let mut out = Vec::new();
        write_markers(&mut out, &markers(index.clusters())).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "kind,latitude,longitude,size");
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().any(|l| l.starts_with("cluster,") && l.ends_with(",2")));
        assert!(lines.contains(&"item,41.5,-74,1"));
    }

    #[test]
    fn test_run_spiral_to_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("markers.csv");

        run(&args(None, Some(output.clone()))).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let total: usize = text
            .lines()
            .skip(1)
            .map(|l| l.rsplit(',').next().unwrap().parse::<usize>().unwrap())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_run_rejects_bad_arguments() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("markers.csv");

        let mut negative_count = args(None, Some(output.clone()));
        negative_count.count = -1;
        assert!(run(&negative_count).is_err());

        let mut negative_zoom = args(None, Some(output.clone()));
        negative_zoom.zoom = -2.0;
        assert!(run(&negative_zoom).is_err());

        let input = dir.path().join("bad.csv");
        fs::write(&input, "95.0,10.0\n").unwrap();
        assert!(run(&args(Some(input), Some(output))).is_err());
    }
}
