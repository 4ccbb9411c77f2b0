use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Grid is the bounded 2D Life board, stored row-major.
/// Anything outside `0..width` x `0..height` is permanently dead: reads
/// return dead and writes are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid from row-major cells. Caller guarantees the length.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position, `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Get cell at a signed position, `None` when out of bounds
    pub fn get_signed(&self, x: i64, y: i64) -> Option<Cell> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.get(x, y)
    }

    /// True if the cell exists and is alive
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Set cell at a signed position. Negative or overflowing coordinates
    /// are dropped silently; resampling arithmetic relies on this.
    pub fn set_signed(&mut self, x: i64, y: i64, cell: Cell) {
        if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) {
            self.set(x, y, cell);
        }
    }

    /// Flip one cell. Returns the new state, or `None` if out of bounds.
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<Cell> {
        let next = self.get(x, y)?.toggle();
        self.set(x, y, next);
        Some(next)
    }

    /// Count live neighbors in the Moore neighborhood.
    /// Bounded edges: neighbors that fall off the grid count as dead.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let x_range = x.saturating_sub(1)..=(x + 1).min(self.width.saturating_sub(1));
        let y_range = y.saturating_sub(1)..=(y + 1).min(self.height.saturating_sub(1));

        y_range
            .flat_map(|ny| x_range.clone().map(move |nx| (nx, ny)))
            .filter(|&(nx, ny)| (nx, ny) != (x, y))
            .filter(|&(nx, ny)| self.is_alive(nx, ny))
            .count() as u8
    }

    fn next_state(&self, x: usize, y: usize) -> Cell {
        let current = self.cells[self.get_index(x, y)];
        current.evolve(self.count_live_neighbors(x, y))
    }

    /// Compute the next generation. Reads only `self`, so every cell sees
    /// the previous generation's neighbors.
    pub fn step(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.next_state(x, y))
            .collect();

        Self::from_cells(self.width, self.height, cells)
    }

    /// Same as [`Grid::step`] with rows evaluated on the rayon pool.
    /// Worth it once the grid is a few hundred cells on a side.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|y| (0..self.width).map(move |x| self.next_state(x, y)))
            .collect();

        Self::from_cells(self.width, self.height, cells)
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill the grid randomly; each cell is alive with probability `density`
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over the coordinates of live cells in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx % self.width, idx / self.width))
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks(0) panics; a zero-width grid has no cells so yields nothing
        self.cells.chunks(self.width.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    fn live_set(grid: &Grid) -> Vec<(usize, usize)> {
        grid.live_cells().collect()
    }

    #[test]
    fn test_isolated_cell_dies() {
        let grid = grid_with(3, 3, &[(1, 1)]);
        let next = grid.step();
        assert_eq!(next.population(), 0);
        assert_eq!(next.dimensions(), (3, 3));
    }

    #[test]
    fn test_blinker_oscillates() {
        let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        let horizontal = vertical.step();
        assert_eq!(live_set(&horizontal), vec![(1, 2), (2, 2), (3, 2)]);

        let back = horizontal.step();
        assert_eq!(back, vertical);
    }

    #[test]
    fn test_blinker_from_pattern_offsets() {
        // (1,0),(1,1),(1,2) on the tightest grid that still oscillates
        let vertical = grid_with(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        let horizontal = vertical.step();
        assert_eq!(live_set(&horizontal), vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(horizontal.step(), vertical);
    }

    #[test]
    fn test_block_is_fixed_point() {
        let block = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        assert_eq!(block.step(), block);
    }

    #[test]
    fn test_corner_neighbors_do_not_wrap() {
        let mut grid = Grid::new(4, 4);
        // Fill everything but the corner; only 3 of those touch (0,0)
        for y in 0..4 {
            for x in 0..4 {
                if (x, y) != (0, 0) {
                    grid.set(x, y, Cell::Alive);
                }
            }
        }
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(3, 3), 3);
        assert_eq!(grid.count_live_neighbors(3, 0), 3);
    }

    #[test]
    fn test_corner_block_survives_without_wrap() {
        // A toroidal count would see the far-edge cells; bounded must not
        let grid = grid_with(4, 4, &[(0, 0), (1, 0), (0, 1), (1, 1), (3, 3)]);
        let next = grid.step();
        assert!(next.is_alive(0, 0));
        assert!(!next.is_alive(3, 3));
    }

    #[test]
    fn test_single_column_grid() {
        let grid = grid_with(1, 3, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(grid.count_live_neighbors(0, 1), 2);
        let next = grid.step();
        assert_eq!(live_set(&next), vec![(0, 1)]);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(10, 10);
        assert_eq!(grid.get(10, 0), None);
        assert!(!grid.is_alive(100, 100));

        grid.set(10, 10, Cell::Alive);
        grid.set_signed(-1, 3, Cell::Alive);
        grid.set_signed(3, 10, Cell::Alive);
        assert_eq!(grid.population(), 0);

        grid.set_signed(3, 4, Cell::Alive);
        assert!(grid.is_alive(3, 4));
    }

    #[test]
    fn test_toggle() {
        let mut grid = Grid::new(5, 5);
        assert_eq!(grid.toggle(2, 2), Some(Cell::Alive));
        assert_eq!(grid.toggle(2, 2), Some(Cell::Dead));
        assert_eq!(grid.toggle(5, 0), None);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut grid = Grid::new(64, 48);
        let mut rng = StdRng::seed_from_u64(7);
        grid.randomize(&mut rng, 0.35);

        let mut serial = grid.clone();
        let mut parallel = grid;
        for _ in 0..5 {
            serial = serial.step();
            parallel = parallel.step_parallel();
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_randomize_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(20, 20);

        grid.randomize(&mut rng, 1.0);
        assert_eq!(grid.population(), 400);

        grid.randomize(&mut rng, 0.0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_clear() {
        let mut grid = grid_with(10, 10, &[(0, 0), (5, 5)]);
        assert_eq!(grid.population(), 2);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_rows() {
        let grid = grid_with(3, 2, &[(2, 1)]);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[Cell::Dead, Cell::Dead, Cell::Alive]);

        assert_eq!(Grid::new(0, 4).rows().count(), 0);
    }
}
