use std::collections::BTreeMap;

use super::point::{Cluster, Item};
use super::projection::{PixelPoint, project};
use crate::config::ClusterConfig;
use bitvec::prelude::*;

// Grid clustering at one zoom level:
//
// cluster(items, zoom, radius)
//    project every item into world pixels at zoom 0
//    radius = radius_px / 2^zoom
//    bucket pixels into square cells of edge = radius
//    for each cell in (row, col) order
//       for each item P in the cell (ascending id)
//          if P already belongs to a cluster, skip it
//          C = new cluster seeded at P
//          for each item Q in the 3x3 cells around P
//             d = dist(P, Q)
//             if d > radius, skip Q
//             if Q belongs to a cluster whose seed is at distance <= d, skip Q
//             move Q into C
//
// A cell is as wide as the radius, so the 3x3 block holds every item within
// radius of the seed. Seeds never move (their own distance is 0), so no
// cluster ends up empty. Ties keep the earlier seed, i.e. the lowest (row, col).
//
// Positions are projected at zoom 0 and the radius is divided by 2^zoom
// instead, which keeps every coordinate finite however far the map zooms in.

/// Grid cell address as `(row, col)`
pub type CellIndex = (i64, i64);

/// Cell indices past 2^52 are no longer exact in f64, so neighbours blur
const MAX_EXACT_CELL: f64 = (1u64 << 52) as f64;

/// Uniform grid over world pixel space
///
/// Cells hold indices into the caller's pixel slice and iterate in
/// ascending `(row, col)` order.
pub struct PixelGrid {
    cell_size: f64,
    cells: BTreeMap<CellIndex, Vec<usize>>,
}

impl PixelGrid {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells: BTreeMap::new(),
        }
    }

    /// Creates a grid holding all of `pixels`, indexed by position in the slice
    ///
    /// When `cell_size` is too small for the pixel extent to be addressed by
    /// exact cell indices, everything goes into a single cell.
    pub fn from_pixels(cell_size: f64, pixels: &[PixelPoint]) -> Self {
        let extent = pixels
            .iter()
            .map(|p| p.x.abs().max(p.y.abs()))
            .fold(0.0, f64::max);
        let cell_size = if extent / cell_size <= MAX_EXACT_CELL {
            cell_size
        } else {
            f64::INFINITY
        };

        let mut grid = Self::new(cell_size);
        for (i, p) in pixels.iter().enumerate() {
            grid.insert(p, i);
        }
        grid
    }

    pub fn cell_of(&self, p: &PixelPoint) -> CellIndex {
        (
            (p.y / self.cell_size).floor() as i64,
            (p.x / self.cell_size).floor() as i64,
        )
    }

    pub fn insert(&mut self, p: &PixelPoint, index: usize) {
        let cell = self.cell_of(p);
        self.cells.entry(cell).or_default().push(index);
    }

    /// Collects indices stored in the 3x3 block of cells centered on `cell`
    ///
    /// To avoid allocation, `out` can be cleared and re-used across calls.
    pub fn neighbors(&self, cell: CellIndex, mut out: Vec<usize>) -> Vec<usize> {
        let (row, col) = cell;
        for r in row.saturating_sub(1)..=row.saturating_add(1) {
            for c in col.saturating_sub(1)..=col.saturating_add(1) {
                if let Some(ids) = self.cells.get(&(r, c)) {
                    out.extend_from_slice(ids);
                }
            }
        }
        out
    }

    pub fn cells(&self) -> impl Iterator<Item = (&CellIndex, &Vec<usize>)> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Partitions `items` into clusters at `zoom`
///
/// `items` must be sorted by identifier; that order breaks ties between
/// seeds sharing a cell, so the result never depends on insertion order.
/// Every item lands in exactly one cluster. Clusters come out in seed order
/// and members keep the order of `items`.
pub fn cluster_items<K: Clone>(
    items: &[Item<K>],
    zoom: f64,
    config: &ClusterConfig,
) -> Vec<Cluster<K>> {
    let pixels: Vec<PixelPoint> = items
        .iter()
        .map(|item| project(&item.position(), 0.0, config.tile_size))
        .collect();
    // radius in zoom 0 pixels, 0 once 2^zoom overflows
    let radius = config.radius_px / 2f64.powf(zoom);
    let grid = PixelGrid::from_pixels(radius, &pixels);
    let max_sq_dist = radius * radius;

    let mut assigned = bitvec![0; items.len()];
    // (cluster, squared distance to that cluster's seed) per item
    let mut owner = vec![(usize::MAX, f64::INFINITY); items.len()];
    let mut cluster_count = 0;
    let mut candidates = Vec::new();

    for (&cell, ids) in grid.cells() {
        for &seed in ids {
            if assigned[seed] {
                continue;
            }
            let c = cluster_count;
            cluster_count += 1;
            owner[seed] = (c, 0.0);
            assigned.set(seed, true);

            candidates.clear();
            candidates = grid.neighbors(cell, candidates);
            for &k in &candidates {
                if k == seed {
                    continue;
                }
                let d = pixels[seed].sq_dist(&pixels[k]);
                if d > max_sq_dist {
                    continue;
                }
                if assigned[k] && owner[k].1 <= d {
                    continue;
                }
                owner[k] = (c, d);
                assigned.set(k, true);
            }
        }
    }

    let mut members: Vec<Vec<Item<K>>> = vec![Vec::new(); cluster_count];
    for (i, &(c, _)) in owner.iter().enumerate() {
        members[c].push(items[i].clone());
    }

    members.into_iter().map(Cluster::from_items).collect()
}
