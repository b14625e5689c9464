//! Tile classification
//!
//! Every cell of the grid is either part of the band or part of the interior
//! void. Band cells are classified by a single pure function over their edge
//! distances, the band thickness and the fill pattern. The rules are applied
//! in a fixed precedence, first match wins:
//!
//! 1. outer corner
//! 2. inner corner (thickness > 1)
//! 3. outer edge
//! 4. inner edge (thickness > 1)
//! 5. interior fill, chosen by the pattern and the cell's parity
//!
//! Fill selection alternates by parity, which is why the grid solver keeps
//! both extents odd: read from either end the sequence is identical, so the
//! weave closes at every corner.

use crate::spec::Pattern;

use super::grid::{EdgeDistances, Grid};
use super::types::{Archetype, Cell, Corner, Side, Tile};

/// Which edges a cell touches, on the outer ring and on the inner ring
#[derive(Debug, Clone, Copy, Default)]
struct EdgeFlags {
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
}

impl EdgeFlags {
    fn at_distance(d: &EdgeDistances, distance: u32) -> Self {
        Self {
            top: d.top == distance,
            bottom: d.bottom == distance,
            left: d.left == distance,
            right: d.right == distance,
        }
    }

    fn corner(&self) -> Option<Corner> {
        match (self.top, self.bottom, self.left, self.right) {
            (true, _, true, _) => Some(Corner::TopLeft),
            (true, _, _, true) => Some(Corner::TopRight),
            (_, true, true, _) => Some(Corner::BottomLeft),
            (_, true, _, true) => Some(Corner::BottomRight),
            _ => None,
        }
    }

    fn side(&self) -> Option<Side> {
        if self.top {
            Some(Side::Top)
        } else if self.bottom {
            Some(Side::Bottom)
        } else if self.left {
            Some(Side::Left)
        } else if self.right {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Classify one cell.
///
/// Returns `None` for void cells (at least `thickness` cells from every
/// edge). `thickness` must be at least 1.
pub fn classify(
    cell: Cell,
    distances: EdgeDistances,
    thickness: u32,
    pattern: Pattern,
) -> Option<Archetype> {
    debug_assert!(thickness >= 1);
    if distances.min() >= thickness {
        return None;
    }

    let outer = EdgeFlags::at_distance(&distances, 0);
    let inner = if thickness > 1 {
        EdgeFlags::at_distance(&distances, thickness - 1)
    } else {
        EdgeFlags::default()
    };

    if let Some(corner) = outer.corner() {
        return Some(Archetype::Corner(corner));
    }
    if let Some(corner) = inner.corner() {
        return Some(Archetype::InnerCorner(corner));
    }
    if let Some(side) = outer.side() {
        return Some(Archetype::Edge(side));
    }
    if let Some(side) = inner.side() {
        return Some(Archetype::InnerEdge(side));
    }

    Some(fill(cell, pattern))
}

/// Fill archetype for an interior band cell
fn fill(cell: Cell, pattern: Pattern) -> Archetype {
    let even_sum = (cell.x + cell.y) % 2 == 0;
    match pattern {
        Pattern::Box => {
            if even_sum {
                Archetype::BoxV
            } else {
                Archetype::BoxH
            }
        }
        Pattern::TwistX => {
            if cell.x % 2 == 0 {
                Archetype::CrossA
            } else {
                Archetype::BoxV
            }
        }
        Pattern::TwistY => {
            if cell.y % 2 == 0 {
                Archetype::CrossA
            } else {
                Archetype::BoxH
            }
        }
        Pattern::Braid => {
            if even_sum {
                Archetype::CrossA
            } else {
                Archetype::CrossB
            }
        }
    }
}

/// Classify every band cell of a grid into positioned tiles, row-major
pub fn classify_grid(grid: &Grid, thickness: u32, pattern: Pattern) -> Vec<Tile> {
    let thickness = thickness.max(1);
    grid.cells()
        .filter_map(|cell| {
            let archetype = classify(cell, grid.distances(cell), thickness, pattern)?;
            let (x, y) = grid.origin(cell);
            Some(Tile {
                cell,
                x,
                y,
                archetype,
            })
        })
        .collect()
}

/// Render a classification as a text map, one row per line.
///
/// Void cells show as `..`. Used for debugging and snapshot tests.
pub fn classification_map(grid: &Grid, thickness: u32, pattern: Pattern) -> String {
    let thickness = thickness.max(1);
    (0..grid.rows)
        .map(|y| {
            (0..grid.cols)
                .map(|x| {
                    let cell = Cell::new(x, y);
                    classify(cell, grid.distances(cell), thickness, pattern)
                        .map(Archetype::code)
                        .unwrap_or("..")
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
