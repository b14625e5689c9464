//! Emblem clearance: opens a gap in the band for a bottom-center emblem

use crate::spec::{Emblem, EmblemPlacement};

use super::grid::Grid;
use super::types::Tile;

/// Clearance half-width in cells at emblem scale 1.0
pub const CLEARANCE_CELLS: f64 = 2.5;

/// Half-width of the cleared span in columns, measured from the middle column
pub fn clearance_radius(scale: f64) -> u32 {
    let radius = (scale.max(0.0) * CLEARANCE_CELLS).ceil();
    if radius.is_finite() {
        radius as u32
    } else {
        0
    }
}

/// Whether a tile sits inside the emblem's clearance
pub fn is_cleared(tile: &Tile, grid: &Grid, thickness: u32, emblem: &Emblem) -> bool {
    if emblem.placement != EmblemPlacement::BottomCenter {
        return false;
    }
    let in_bottom_band = grid.distances(tile.cell).bottom < thickness;
    in_bottom_band && tile.cell.x.abs_diff(grid.mid_col()) <= clearance_radius(emblem.scale)
}

/// Remove tiles covered by the emblem.
///
/// Only the bottom-center placement clears anything; every other placement
/// leaves the band untouched.
pub fn apply(tiles: Vec<Tile>, grid: &Grid, thickness: u32, emblem: Option<&Emblem>) -> Vec<Tile> {
    let Some(emblem) = emblem else {
        return tiles;
    };
    let before = tiles.len();
    let kept: Vec<Tile> = tiles
        .into_iter()
        .filter(|tile| !is_cleared(tile, grid, thickness, emblem))
        .collect();
    tracing::debug!(
        placement = ?emblem.placement,
        removed = before - kept.len(),
        "applied emblem clearance"
    );
    kept
}
