//! Border layout: grid solving, tile classification and emblem clearance
//!
//! This module takes a `BorderSpec` and computes which cells of the fitted
//! grid belong to the band, what archetype each one is and where it sits in
//! pixel space. Nothing here knows about SVG.

pub mod classify;
pub mod clearance;
pub mod grid;
pub mod types;

pub use classify::{classification_map, classify, classify_grid};
pub use grid::{EdgeDistances, Grid};
pub use types::*;

use std::collections::BTreeMap;

use crate::spec::BorderSpec;

/// The classified band for one render
#[derive(Debug, Clone, PartialEq)]
pub struct BorderLayout {
    /// Document width in pixels (never negative)
    pub width: f64,
    /// Document height in pixels (never negative)
    pub height: f64,
    /// `None` when the rectangle was degenerate or the border is disabled
    pub grid: Option<Grid>,
    /// Band tiles in row-major order, emblem clearance already applied
    pub tiles: Vec<Tile>,
}

impl BorderLayout {
    /// An empty layout sized to the rectangle
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            width: clamp_dimension(width),
            height: clamp_dimension(height),
            grid: None,
            tiles: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles of each archetype
    pub fn archetype_counts(&self) -> BTreeMap<Archetype, usize> {
        let mut counts = BTreeMap::new();
        for tile in &self.tiles {
            *counts.entry(tile.archetype).or_insert(0) += 1;
        }
        counts
    }

    /// Number of tiles matching a predicate
    pub fn count(&self, pred: impl Fn(Archetype) -> bool) -> usize {
        self.tiles.iter().filter(|t| pred(t.archetype)).count()
    }
}

fn clamp_dimension(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Compute the band layout for a spec.
///
/// Never fails: a non-positive rectangle, a non-positive cell size or a
/// disabled border yields an empty layout. Each call starts from scratch.
#[tracing::instrument(skip(spec), fields(width = spec.outer_width, height = spec.outer_height))]
pub fn compute(spec: &BorderSpec) -> BorderLayout {
    let mut layout = BorderLayout::empty(spec.outer_width, spec.outer_height);
    if !spec.enabled {
        tracing::debug!("border disabled");
        return layout;
    }

    let Some(grid) = Grid::solve(spec) else {
        tracing::debug!("degenerate rectangle, nothing to lay out");
        return layout;
    };
    tracing::debug!(
        cols = grid.cols,
        rows = grid.rows,
        x_offset = grid.x_offset,
        y_offset = grid.y_offset,
        "solved grid"
    );

    let thickness = spec.thickness_rows();
    let tiles = classify_grid(&grid, thickness, spec.pattern);
    layout.tiles = clearance::apply(tiles, &grid, thickness, spec.emblem.as_ref());
    layout.grid = Some(grid);
    layout
}
