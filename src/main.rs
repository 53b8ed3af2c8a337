//! Marker clustering demo
//!
//! Clusters either the points of a CSV file or a synthetic spiral around a
//! center at one zoom level and writes one row per map marker.

use clap::Parser;
use csv::{ReaderBuilder, WriterBuilder};
use log::LevelFilter;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use marker_cluster::config::DEFAULT_RADIUS_PX;
use marker_cluster::{
    ClusterConfig, ClusterIndex, GeoPoint, Item, Marker, SpiralParams, checked_count, generate,
    markers,
};

#[cfg(test)]
mod main_test;

/// Center used when no location is given (downtown Seattle)
const DEFAULT_LAT: f64 = 47.59978;
const DEFAULT_LNG: f64 = -122.3346;

/// Zoom the map view starts at
const DEFAULT_VIEW_ZOOM: f64 = 12.0;

#[derive(Parser)]
#[command(name = "marker_cluster")]
#[command(about = "Zoom-aware geo marker clustering demo", long_about = None)]
struct Args {
    /// Input CSV file with latitude,longitude columns (default: generate a spiral)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output CSV file with one row per marker (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Latitude of the spiral center
    #[arg(long, default_value_t = DEFAULT_LAT, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude of the spiral center
    #[arg(long, default_value_t = DEFAULT_LNG, allow_hyphen_values = true)]
    lng: f64,

    /// Number of spiral points to generate
    #[arg(short, long, default_value_t = 20, allow_hyphen_values = true)]
    count: i64,

    /// Map zoom level to cluster at
    #[arg(short, long, default_value_t = DEFAULT_VIEW_ZOOM)]
    zoom: f64,

    /// Clustering radius in pixels
    #[arg(short, long, default_value_t = DEFAULT_RADIUS_PX)]
    radius: f64,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let points = match &args.input {
        Some(path) => {
            let points = read_points(path)?;
            log::debug!("Read {} points from {:?}", points.len(), path);
            points
        }
        None => {
            let center = GeoPoint::new(args.lat, args.lng);
            let count = checked_count(args.count)?;
            log::debug!(
                "Generating {} spiral points around ({}, {})",
                count,
                center.lat(),
                center.lng()
            );
            generate(center, count, &SpiralParams::default())
        }
    };

    let config = ClusterConfig::new(args.radius, ClusterConfig::default().tile_size)?;
    let mut index = ClusterIndex::with_config(config);
    index.set_zoom(args.zoom)?;
    index.insert(points.into_iter().enumerate().map(|(i, p)| Item::new(i, p)))?;

    let markers = markers(index.clusters());
    log::debug!(
        "{} items shown as {} markers at zoom {}",
        index.len(),
        markers.len(),
        index.zoom()
    );

    match &args.output {
        None => write_markers(io::stdout().lock(), &markers)?,
        Some(path) => {
            write_markers(File::create(path)?, &markers)?;
            log::debug!("Markers written to {:?}", path);
        }
    }

    Ok(())
}

/// Reads points from a CSV file
///
/// Expected format: `latitude,longitude` (header row is optional, extra
/// columns are ignored). Rows that don't parse are skipped.
fn read_points(filename: &PathBuf) -> Result<Vec<GeoPoint>, Box<dyn std::error::Error>> {
    let file = File::open(filename)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut points = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() < 2 {
            continue;
        }

        let lat = record[0].trim().parse::<f64>();
        let lng = record[1].trim().parse::<f64>();
        match (lat, lng) {
            (Ok(lat), Ok(lng)) => points.push(GeoPoint::new(lat, lng)),
            // First row that doesn't parse is a header
            _ if row == 0 => {}
            _ => log::warn!("Skipping unparsable row {}", row + 1),
        }
    }

    Ok(points)
}

/// Writes one CSV row per marker: `kind,latitude,longitude,size`
fn write_markers<W: Write, K>(
    out: W,
    markers: &[Marker<K>],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = WriterBuilder::new().from_writer(out);
    writer.write_record(["kind", "latitude", "longitude", "size"])?;

    for marker in markers {
        let (kind, size) = match marker {
            Marker::Cluster { count, .. } => ("cluster", *count),
            Marker::Item { .. } => ("item", 1),
        };
        let position = marker.position();
        writer.write_record([
            kind.to_string(),
            position.lat().to_string(),
            position.lng().to_string(),
            size.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
