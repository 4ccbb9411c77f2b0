//! Grid resampling for viewport changes.
//!
//! Both functions allocate a fresh all-dead grid of the new size and copy
//! live cells across. Cells that land outside the new bounds are dropped;
//! shrinking the grid losing cells is expected.

use super::{Cell, Grid};

/// Copy `old` into a `new_width` x `new_height` grid, centering it when the
/// grid grows. When it shrinks, the top-left region is kept in place.
pub fn recenter(old: &Grid, new_width: usize, new_height: usize) -> Grid {
    let (old_width, old_height) = old.dimensions();
    let mut next = Grid::new(new_width, new_height);

    let offset_x = new_width.saturating_sub(old_width) / 2;
    let offset_y = new_height.saturating_sub(old_height) / 2;

    let copy_width = old_width.min(new_width);
    let copy_height = old_height.min(new_height);

    old.live_cells()
        .filter(|&(x, y)| x < copy_width && y < copy_height)
        .for_each(|(x, y)| next.set(x + offset_x, y + offset_y, Cell::Alive));

    next
}

/// Result of mapping a grid onto a new cell size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomMapping {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: i64,
    pub offset_y: i64,
}

impl ZoomMapping {
    /// Scale factors and focal offsets for going from `old` to `new`
    /// dimensions with the focal point at `focal` (fractions of the grid).
    pub fn new(old: (usize, usize), new: (usize, usize), focal: (f64, f64)) -> Self {
        let ratio = |new: usize, old: usize| if old == 0 { 1.0 } else { new as f64 / old as f64 };
        let shift = |rel: f64, new: usize, old: usize| {
            (rel * new as f64).round() as i64 - (rel * old as f64).round() as i64
        };

        Self {
            scale_x: ratio(new.0, old.0),
            scale_y: ratio(new.1, old.1),
            offset_x: shift(focal.0, new.0, old.0),
            offset_y: shift(focal.1, new.1, old.1),
        }
    }

    /// Where an old cell lands on the new grid (may be out of bounds)
    pub fn map(&self, x: usize, y: usize) -> (i64, i64) {
        let nx = (x as f64 * self.scale_x).floor() as i64 - self.offset_x;
        let ny = (y as f64 * self.scale_y).floor() as i64 - self.offset_y;
        (nx, ny)
    }

    /// Upsampling onto a denser grid leaves gaps between mapped cells
    pub fn smooths(&self) -> bool {
        self.scale_x > 1.0 && self.scale_y > 1.0
    }
}

/// Resample `old` onto a `new_width` x `new_height` grid around `focal`.
///
/// When both scale factors exceed 1 every mapped cell also fills the 2x2
/// block to its lower right. That fill is lossy: zooming back does not
/// undo it, so a round trip returns a superset of the original cells.
pub fn rescale(old: &Grid, new_width: usize, new_height: usize, focal: (f64, f64)) -> Grid {
    let mapping = ZoomMapping::new(old.dimensions(), (new_width, new_height), focal);
    let mut next = Grid::new(new_width, new_height);

    for (x, y) in old.live_cells() {
        let (nx, ny) = mapping.map(x, y);
        if next.get_signed(nx, ny).is_none() {
            continue;
        }
        next.set_signed(nx, ny, Cell::Alive);

        if mapping.smooths() {
            for (dx, dy) in [(1, 0), (0, 1), (1, 1)] {
                next.set_signed(nx + dx, ny + dy, Cell::Alive);
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    const PATTERN: &[(usize, usize)] = &[(0, 0), (2, 3), (5, 5), (9, 9), (9, 0), (4, 7)];

    #[test]
    fn test_recenter_growing_preserves_all_cells() {
        let old = grid_with(10, 10, PATTERN);
        let next = recenter(&old, 20, 16);

        assert_eq!(next.dimensions(), (20, 16));
        assert_eq!(next.population(), PATTERN.len());
        // offsets: (20-10)/2 = 5, (16-10)/2 = 3
        for &(x, y) in PATTERN {
            assert!(next.is_alive(x + 5, y + 3), "missing ({}, {})", x, y);
        }
    }

    #[test]
    fn test_recenter_shrinking_drops_only_outside() {
        let old = grid_with(10, 10, PATTERN);
        let next = recenter(&old, 6, 8);

        let expected: Vec<_> = PATTERN
            .iter()
            .copied()
            .filter(|&(x, y)| x < 6 && y < 8)
            .collect();
        assert_eq!(next.population(), expected.len());
        for (x, y) in expected {
            assert!(next.is_alive(x, y));
        }
    }

    #[test]
    fn test_recenter_mixed_axes() {
        // wider but shorter: x shifts by 2, y is clipped in place
        let old = grid_with(10, 10, PATTERN);
        let next = recenter(&old, 14, 5);
        let cells: Vec<_> = next.live_cells().collect();
        assert_eq!(cells, vec![(2, 0), (11, 0), (4, 3)]);
    }

    #[test]
    fn test_recenter_same_size_is_identity() {
        let old = grid_with(10, 10, PATTERN);
        assert_eq!(recenter(&old, 10, 10), old);
    }

    #[test]
    fn test_mapping_offsets() {
        let mapping = ZoomMapping::new((80, 60), (40, 30), (0.5, 0.5));
        assert_eq!(mapping.scale_x, 0.5);
        assert_eq!(mapping.scale_y, 0.5);
        assert_eq!(mapping.offset_x, 20 - 40);
        assert_eq!(mapping.offset_y, 15 - 30);
        assert!(!mapping.smooths());

        let origin = ZoomMapping::new((80, 60), (160, 120), (0.0, 0.0));
        assert_eq!((origin.offset_x, origin.offset_y), (0, 0));
        assert_eq!(origin.map(3, 7), (6, 14));
        assert!(origin.smooths());
    }

    #[test]
    fn test_rescale_down_at_origin() {
        let old = grid_with(80, 60, &[(10, 10), (11, 10), (79, 59)]);
        let next = rescale(&old, 40, 30, (0.0, 0.0));
        let cells: Vec<_> = next.live_cells().collect();
        assert_eq!(cells, vec![(5, 5), (39, 29)]);
    }

    #[test]
    fn test_rescale_up_fills_two_by_two() {
        let old = grid_with(40, 30, &[(5, 5)]);
        let next = rescale(&old, 80, 60, (0.0, 0.0));
        let cells: Vec<_> = next.live_cells().collect();
        assert_eq!(cells, vec![(10, 10), (11, 10), (10, 11), (11, 11)]);
    }

    #[test]
    fn test_rescale_smoothing_is_bounds_checked() {
        let old = grid_with(40, 30, &[(39, 29)]);
        let next = rescale(&old, 79, 59, (0.0, 0.0));
        // floor(39 * 79/40) = 77, floor(29 * 59/30) = 57; block stays inside
        assert!(next.is_alive(77, 57));
        assert!(next.is_alive(78, 58));

        let edge = grid_with(40, 30, &[(39, 0)]);
        let next = rescale(&edge, 80, 60, (0.0, 0.0));
        // (78, 0) plus its block, all inside the right edge
        assert_eq!(next.population(), 4);
    }

    #[test]
    fn test_rescale_drops_out_of_bounds_targets() {
        let old = grid_with(80, 60, &[(40, 30), (70, 50)]);
        // focal at center: offset -20 pushes x = 35 + 20 out of a 40-wide grid
        let next = rescale(&old, 40, 30, (0.5, 0.5));
        assert_eq!(next.dimensions(), (40, 30));
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_round_trip_is_superset_within_smoothing_block() {
        let original = grid_with(80, 60, &[(10, 10), (11, 10), (12, 10), (33, 21), (50, 40)]);

        let zoomed_in = rescale(&original, 40, 30, (0.0, 0.0));
        let restored = rescale(&zoomed_in, 80, 60, (0.0, 0.0));

        // Every original cell survives the round trip
        for (x, y) in original.live_cells() {
            assert!(restored.is_alive(x, y), "lost ({}, {})", x, y);
        }
        // Extra cells come only from the documented 2x2 fill
        for (x, y) in restored.live_cells() {
            let near_original = original
                .live_cells()
                .any(|(ox, oy)| x.abs_diff(ox) <= 1 && y.abs_diff(oy) <= 1);
            assert!(near_original, "stray cell ({}, {})", x, y);
        }
    }
}
