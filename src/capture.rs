use std::collections::{HashSet, VecDeque};

use crate::color::Color;
use crate::error::HexioError;
use crate::state::{CellCoord, HexGrid};
use crate::trail::TrailTracker;

/// Outcome of a trail-closure attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureResult {
    /// Whether some chunk's flood fill found an enclosed interior
    pub enclosed: bool,
    /// Cells newly owned by the color, interior plus boundary
    pub cells_captured: usize,
}

/// Close `color`'s trail into a filled area.
///
/// The candidate window is the bounding rectangle of the trail; it is sliced
/// into `chunk_size` runs and each chunk's centroid seeds a flood fill walled
/// by the trail color and bounded by the window size. The first fill that
/// stays under the bound is the enclosed interior. The trail is consumed on
/// every path, success or not; a trail that never closes leaves only the thin
/// strip of cells it already claimed.
pub fn close_trail(
    grid: &mut HexGrid,
    trails: &mut TrailTracker,
    color: Color,
    chunk_size: usize,
) -> CaptureResult {
    let trail: Vec<CellCoord> = trails.trail(color).to_vec();
    if trail.len() < 2 {
        trails.clear(color);
        return CaptureResult::default();
    }

    let owned_before = grid.count_owned_by(color);
    let window = trail_window(grid, &trail);
    let bound = window.len();

    for chunk in window.chunks(chunk_size.max(1)) {
        let seed = match chunk_centroid(chunk) {
            Ok(seed) => seed,
            Err(_) => continue,
        };

        match flood_fill(grid, seed, color, bound) {
            Ok(interior) => {
                for &coord in interior.iter().chain(trail.iter()) {
                    grid.claim(coord, color);
                }
                trails.clear(color);
                let cells_captured = grid.count_owned_by(color) - owned_before;
                tracing::info!(
                    "{} closed a {}-cell trail, capturing {} cells ({} interior)",
                    color,
                    trail.len(),
                    cells_captured,
                    interior.len(),
                );
                return CaptureResult {
                    enclosed: true,
                    cells_captured,
                };
            }
            Err(err) => {
                tracing::debug!("capture probe at ({}, {}) failed: {}", seed.x, seed.y, err);
            }
        }
    }

    trails.clear(color);
    tracing::debug!("{} trail of {} cells did not enclose an area", color, trail.len());
    CaptureResult::default()
}

/// The candidate window: every existing cell inside the trail's bounding
/// rectangle, in column-major scan order.
pub fn trail_window(grid: &HexGrid, trail: &[CellCoord]) -> Vec<CellCoord> {
    let Some(first) = trail.first() else {
        return Vec::new();
    };
    let (mut min_x, mut max_x) = (first.x, first.x);
    let (mut min_y, mut max_y) = (first.y, first.y);
    for coord in trail {
        min_x = min_x.min(coord.x);
        max_x = max_x.max(coord.x);
        min_y = min_y.min(coord.y);
        max_y = max_y.max(coord.y);
    }

    let mut window = Vec::new();
    for x in min_x..=max_x {
        for y in min_y..=max_y {
            let coord = CellCoord::new(x, y);
            if grid.in_bounds(coord) {
                window.push(coord);
            }
        }
    }
    window
}

/// Rounded average coordinate of a chunk, snapped to the nearest member cell
/// by Manhattan distance.
pub fn chunk_centroid(chunk: &[CellCoord]) -> Result<CellCoord, HexioError> {
    if chunk.is_empty() {
        return Err(HexioError::EmptyAreaQuery);
    }

    let sum_x: i32 = chunk.iter().map(|c| c.x).sum();
    let sum_y: i32 = chunk.iter().map(|c| c.y).sum();
    let avg = CellCoord::new(
        (sum_x as f32 / chunk.len() as f32).round() as i32,
        (sum_y as f32 / chunk.len() as f32).round() as i32,
    );

    let snapped = chunk
        .iter()
        .min_by_key(|c| c.distance(&avg))
        .copied()
        .ok_or(HexioError::EmptyAreaQuery)?;
    Ok(snapped)
}

/// Bounded flood fill from `seed`, treating `wall`-colored cells as
/// impassable boundary.
///
/// Returns the filled set, or `FloodFillBoundExceeded` the moment the set
/// would reach `bound` cells; an exceeded fill never yields a partial set.
/// Filled-set membership and an explicit pending set guarantee each cell is
/// visited and queued at most once.
pub fn flood_fill(
    grid: &HexGrid,
    seed: CellCoord,
    wall: Color,
    bound: usize,
) -> Result<Vec<CellCoord>, HexioError> {
    let mut filled: Vec<CellCoord> = Vec::new();
    let mut visited: HashSet<CellCoord> = HashSet::new();
    let mut pending: HashSet<CellCoord> = HashSet::new();
    let mut queue: VecDeque<CellCoord> = VecDeque::new();

    queue.push_back(seed);
    pending.insert(seed);

    while let Some(current) = queue.pop_front() {
        if filled.len() >= bound {
            return Err(HexioError::FloodFillBoundExceeded(bound));
        }

        filled.push(current);
        visited.insert(current);

        for neighbor in grid.neighbors(current) {
            if grid.owner(neighbor) == Some(wall) {
                continue;
            }
            if visited.contains(&neighbor) || pending.contains(&neighbor) {
                continue;
            }
            pending.insert(neighbor);
            queue.push_back(neighbor);
        }
    }

    Ok(filled)
}

/// Winding-angle probe: does the closed polygon traced by `trail` wind once
/// around `candidate`?
///
/// Sums the signed angles subtended at the candidate by each trail segment,
/// including the closing segment; a total of ±360° means inside. Diagnostic
/// only — the flood fill is authoritative, since it also handles concave and
/// self-touching trails this test misreads.
pub fn trail_encloses(trail: &[CellCoord], candidate: CellCoord) -> bool {
    if trail.len() < 3 || trail.contains(&candidate) {
        return false;
    }

    let mut total = 0.0f32;
    for i in 0..trail.len() {
        let a = trail[i] - candidate;
        let b = trail[(i + 1) % trail.len()] - candidate;
        total += signed_angle(a, b);
    }

    (total.abs() - 360.0).abs() < 1.0
}

/// Signed angle in degrees from `a` to `b`, in (-180, 180].
fn signed_angle(a: CellCoord, b: CellCoord) -> f32 {
    let cross = (a.x * b.y - a.y * b.x) as f32;
    let dot = (a.x * b.x + a.y * b.y) as f32;
    cross.atan2(dot).to_degrees()
}
