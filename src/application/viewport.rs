/// Width of the control panel docked on the right edge, in pixels
pub const CONTROL_PANEL_WIDTH: u32 = 200;
pub const MIN_CELL_SIZE: u32 = 5;
pub const MAX_CELL_SIZE: u32 = 20;
pub const DEFAULT_CELL_SIZE: u32 = 10;
/// The game area never gets narrower than 200 px
pub const MIN_WINDOW_WIDTH: u32 = CONTROL_PANEL_WIDTH + 200;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// Viewport tracks window size, cell size (zoom) and the last pointer
/// position. Grid dimensions are always derived from these.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    window_width: u32,
    window_height: u32,
    cell_size: u32,
    pointer: (f32, f32),
}

impl Viewport {
    pub fn new(window_width: u32, window_height: u32, cell_size: u32) -> Self {
        let (window_width, window_height) = clamp_window_size(window_width, window_height);
        Self {
            window_width,
            window_height,
            cell_size: clamp_cell_size(i64::from(cell_size)),
            pointer: (0.0, 0.0),
        }
    }

    pub const fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub const fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    /// Width of the drawable grid area left of the panel
    pub const fn game_area_width(&self) -> u32 {
        self.window_width - CONTROL_PANEL_WIDTH
    }

    /// Grid (width, height) in cells for the current window and zoom
    pub const fn grid_dimensions(&self) -> (usize, usize) {
        (
            (self.game_area_width() / self.cell_size) as usize,
            (self.window_height / self.cell_size) as usize,
        )
    }

    /// Whether a pixel position lies in the game area (not the panel)
    pub fn in_game_area(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.game_area_width() as f32 && y < self.window_height as f32
    }

    /// Cell under a pixel position, if it maps onto the grid
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !self.in_game_area(x, y) {
            return None;
        }
        let size = self.cell_size as f32;
        let (cell_x, cell_y) = ((x / size) as usize, (y / size) as usize);
        let (width, height) = self.grid_dimensions();
        (cell_x < width && cell_y < height).then_some((cell_x, cell_y))
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, x: usize, y: usize) -> (f32, f32) {
        let size = self.cell_size as f32;
        (x as f32 * size, y as f32 * size)
    }

    /// Pointer position as a fraction of the grid's pixel extent.
    /// This is the focal point a zoom keeps in place.
    pub fn focal_point(&self) -> (f64, f64) {
        let (width, height) = self.grid_dimensions();
        let relative = |pixel: f32, cells: usize| {
            let extent = cells as f64 * f64::from(self.cell_size);
            if extent > 0.0 { f64::from(pixel) / extent } else { 0.0 }
        };
        (relative(self.pointer.0, width), relative(self.pointer.1, height))
    }

    /// Apply a new window size, clamped to the minimum
    pub fn resize_window(&mut self, width: u32, height: u32) {
        (self.window_width, self.window_height) = clamp_window_size(width, height);
    }

    /// Set cell size, clamped to `[MIN_CELL_SIZE, MAX_CELL_SIZE]`.
    /// Returns false when the clamped size equals the current one.
    pub fn set_cell_size(&mut self, requested: i64) -> bool {
        let size = clamp_cell_size(requested);
        if size == self.cell_size {
            return false;
        }
        self.cell_size = size;
        true
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1000, 600, DEFAULT_CELL_SIZE)
    }
}

/// Window size raised to the minimum the layout supports
pub fn clamp_window_size(width: u32, height: u32) -> (u32, u32) {
    (width.max(MIN_WINDOW_WIDTH), height.max(MIN_WINDOW_HEIGHT))
}

pub fn clamp_cell_size(requested: i64) -> u32 {
    requested.clamp(i64::from(MIN_CELL_SIZE), i64::from(MAX_CELL_SIZE)) as u32
}
