//! Grid solver: fits whole cells onto an arbitrary rectangle

use crate::spec::{BorderSpec, Pattern};

use super::types::Cell;

/// The cell grid fitted into the usable area of the rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub cols: u32,
    pub rows: u32,
    /// Pixel x of the grid's left edge
    pub x_offset: f64,
    /// Pixel y of the grid's top edge
    pub y_offset: f64,
    pub cell_size: f64,
}

/// Distances from a cell to each outer edge of the grid, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDistances {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl EdgeDistances {
    pub fn min(&self) -> u32 {
        self.left.min(self.right).min(self.top).min(self.bottom)
    }
}

impl Grid {
    /// Solve the grid for a spec.
    ///
    /// Returns `None` when the rectangle or the cell size is not positive;
    /// the caller renders nothing in that case.
    pub fn solve(spec: &BorderSpec) -> Option<Grid> {
        solve(
            spec.outer_width,
            spec.outer_height,
            spec.cell_size,
            spec.inset,
            spec.pattern,
        )
    }

    /// Pixel origin of a cell
    pub fn origin(&self, cell: Cell) -> (f64, f64) {
        (
            f64::from(cell.x) * self.cell_size + self.x_offset,
            f64::from(cell.y) * self.cell_size + self.y_offset,
        )
    }

    pub fn distances(&self, cell: Cell) -> EdgeDistances {
        EdgeDistances {
            left: cell.x,
            right: self.cols - 1 - cell.x,
            top: cell.y,
            bottom: self.rows - 1 - cell.y,
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| Cell::new(x, y)))
    }

    /// Column index of the grid's horizontal midpoint
    pub fn mid_col(&self) -> u32 {
        self.cols / 2
    }
}

/// Solve cols/rows and centering offsets for one rectangle
pub fn solve(
    outer_width: f64,
    outer_height: f64,
    cell_size: f64,
    inset: f64,
    pattern: Pattern,
) -> Option<Grid> {
    // `!(x > 0.0)` also rejects NaN
    if !(outer_width > 0.0) || !(outer_height > 0.0) || !(cell_size > 0.0) {
        return None;
    }

    let usable_w = outer_width - 2.0 * inset;
    let usable_h = outer_height - 2.0 * inset;
    let odd = pattern.requires_odd_grid();

    let cols = fit_count(usable_w, cell_size, odd);
    let rows = fit_count(usable_h, cell_size, odd);

    Some(Grid {
        cols,
        rows,
        x_offset: inset + (usable_w - f64::from(cols) * cell_size) / 2.0,
        y_offset: inset + (usable_h - f64::from(rows) * cell_size) / 2.0,
        cell_size,
    })
}

/// Whole cells along one axis, never fewer than one
fn fit_count(usable: f64, cell_size: f64, odd: bool) -> u32 {
    let raw = (usable / cell_size).floor();
    let mut count = if raw.is_finite() && raw > 0.0 {
        raw.min(f64::from(u32::MAX)) as u32
    } else {
        0
    };
    if odd && count % 2 == 0 {
        count = count.saturating_sub(1);
    }
    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_grid() {
        let grid = solve(600.0, 800.0, 25.0, 15.0, Pattern::Braid).unwrap();
        assert_eq!(grid.cols, 21);
        assert_eq!(grid.rows, 29);
        // (570 - 525) / 2 + 15
        assert_eq!(grid.x_offset, 37.5);
        // (770 - 725) / 2 + 15
        assert_eq!(grid.y_offset, 37.5);
    }

    #[test]
    fn test_odd_count_for_every_width() {
        for cell in [7.0, 10.0, 20.0, 25.0, 33.0] {
            for w in 1..400 {
                let grid = solve(f64::from(w), 100.0, cell, 0.0, Pattern::Braid).unwrap();
                assert_eq!(grid.cols % 2, 1, "w={} cell={}", w, cell);
                assert!(grid.cols >= 1);
            }
        }
    }

    #[test]
    fn test_already_odd_is_kept() {
        let grid = solve(100.0, 60.0, 20.0, 0.0, Pattern::Braid).unwrap();
        assert_eq!(grid.cols, 5);
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.x_offset, 0.0);
    }

    #[test]
    fn test_cell_larger_than_rectangle_falls_back_to_one() {
        let grid = solve(50.0, 50.0, 80.0, 0.0, Pattern::Braid).unwrap();
        assert_eq!((grid.cols, grid.rows), (1, 1));
        // Centered even though it overflows
        assert_eq!(grid.x_offset, -15.0);
    }

    #[test]
    fn test_even_adjustment_to_zero_falls_back_to_one() {
        // floor(45 / 20) = 2 -> 1
        let grid = solve(45.0, 45.0, 20.0, 0.0, Pattern::Box).unwrap();
        assert_eq!(grid.cols, 1);
        // floor(39 / 20) = 1 stays 1
        let grid = solve(39.0, 39.0, 20.0, 0.0, Pattern::TwistX).unwrap();
        assert_eq!(grid.cols, 1);
    }

    #[test]
    fn test_inset_larger_than_rectangle() {
        let grid = solve(100.0, 100.0, 20.0, 80.0, Pattern::Braid).unwrap();
        assert_eq!((grid.cols, grid.rows), (1, 1));
    }

    #[test]
    fn test_non_positive_dimensions_yield_none() {
        assert!(solve(0.0, 100.0, 20.0, 0.0, Pattern::Braid).is_none());
        assert!(solve(100.0, -5.0, 20.0, 0.0, Pattern::Braid).is_none());
        assert!(solve(100.0, 100.0, 0.0, 0.0, Pattern::Braid).is_none());
        assert!(solve(f64::NAN, 100.0, 20.0, 0.0, Pattern::Braid).is_none());
    }

    #[test]
    fn test_distances() {
        let grid = solve(100.0, 60.0, 20.0, 0.0, Pattern::Braid).unwrap();
        let d = grid.distances(Cell::new(1, 2));
        assert_eq!(
            d,
            EdgeDistances {
                left: 1,
                right: 3,
                top: 2,
                bottom: 0
            }
        );
        assert_eq!(d.min(), 0);
    }

    #[test]
    fn test_origin_and_cells() {
        let grid = solve(600.0, 800.0, 25.0, 15.0, Pattern::Braid).unwrap();
        assert_eq!(grid.origin(Cell::new(0, 0)), (37.5, 37.5));
        assert_eq!(grid.origin(Cell::new(2, 1)), (87.5, 62.5));
        assert_eq!(grid.cells().count(), 21 * 29);
        assert_eq!(grid.mid_col(), 10);
    }
}
