use super::{Cell, Grid};

/// A named shape: relative offsets of its live cells.
/// Offsets need not start at zero; the bounding box is derived from them.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        cells: &'static [(i32, i32)],
    ) -> Self {
        Self { name, description, cells }
    }

    /// Bounding box as (min_x, min_y, width, height)
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        let xs = self.cells.iter().map(|&(x, _)| x);
        let ys = self.cells.iter().map(|&(_, y)| y);
        let (min_x, max_x) = (xs.clone().min().unwrap_or(0), xs.max().unwrap_or(0));
        let (min_y, max_y) = (ys.clone().min().unwrap_or(0), ys.max().unwrap_or(0));
        (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
    }

    /// Top-left grid position that centers this pattern on `grid`
    pub fn centered_origin(&self, grid: &Grid) -> (i64, i64) {
        let (_, _, width, height) = self.bounds();
        let center_x = (grid.width() / 2) as i64;
        let center_y = (grid.height() / 2) as i64;
        (center_x - i64::from(width / 2), center_y - i64::from(height / 2))
    }

    /// Clear `grid` and stamp this pattern at its center.
    /// Cells that overflow the grid are dropped.
    pub fn stamp_centered(&self, grid: &mut Grid) {
        let (origin_x, origin_y) = self.centered_origin(grid);
        grid.clear();
        self.place_on(grid, origin_x, origin_y);
    }

    /// Set the pattern's cells live with its bounding box at (x, y)
    pub fn place_on(&self, grid: &mut Grid, x: i64, y: i64) {
        let (min_x, min_y, _, _) = self.bounds();
        for &(dx, dy) in self.cells {
            grid.set_signed(
                x + i64::from(dx - min_x),
                y + i64::from(dy - min_y),
                Cell::Alive,
            );
        }
    }
}

/// Registry of classic Life patterns
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub const GLIDER: Pattern = Pattern::new(
        "Glider",
        "Spaceship (period 4)",
        &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    );

    /// Blinker - period 2 oscillator, vertical phase
    pub const BLINKER: Pattern = Pattern::new(
        "Blinker",
        "Oscillator (period 2)",
        &[(1, 0), (1, 1), (1, 2)],
    );

    pub const BLOCK: Pattern = Pattern::new(
        "Block",
        "Still life",
        &[(0, 0), (0, 1), (1, 0), (1, 1)],
    );

    pub const BEACON: Pattern = Pattern::new(
        "Beacon",
        "Oscillator (period 2)",
        &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)],
    );

    pub const TOAD: Pattern = Pattern::new(
        "Toad",
        "Oscillator (period 2)",
        &[(1, 1), (2, 1), (3, 1), (0, 2), (1, 2), (2, 2)],
    );

    /// Pulsar - period 3 oscillator
    pub const PULSAR: Pattern = Pattern::new(
        "Pulsar",
        "Oscillator (period 3)",
        &[
            // Top
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            // Upper middle
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            // Center
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            // Lower middle
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            // Bottom
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    );

    /// Lightweight Spaceship (LWSS)
    pub const LWSS: Pattern = Pattern::new(
        "LWSS",
        "Lightweight spaceship (period 4)",
        &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ],
    );

    /// R-pentomino - stabilizes after 1103 generations
    pub const R_PENTOMINO: Pattern = Pattern::new(
        "R-pentomino",
        "Methuselah (1103 gens)",
        &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    );

    /// Acorn - stabilizes after 5206 generations
    pub const ACORN: Pattern = Pattern::new(
        "Acorn",
        "Methuselah (5206 gens)",
        &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)],
    );

    /// All patterns in hotkey order (index 0 is key `1`)
    pub fn all_patterns() -> &'static [Pattern] {
        const ALL: &[Pattern] = &[
            GLIDER,
            BLINKER,
            BLOCK,
            BEACON,
            TOAD,
            PULSAR,
            LWSS,
            R_PENTOMINO,
            ACORN,
        ];
        ALL
    }

    /// Look a pattern up by name, ignoring case
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        all_patterns()
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}
