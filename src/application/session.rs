use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, error, info, warn};

use super::config::{Config, MAX_SPEED, MAX_ZOOM_STEP, MIN_SPEED, MIN_ZOOM_STEP};
use super::viewport::Viewport;
use crate::domain::{Grid, Pattern, SnapshotError, presets, resample, snapshot};

/// Whether the simulation auto-steps. Switching never touches the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Editing,
    Running,
}

/// Session owns the grid and the viewport and is the only place either
/// is mutated. Every user action arrives here as a method call.
pub struct Session {
    grid: Grid,
    viewport: Viewport,
    run_state: RunState,
    generation: u64,
    update_timer: f32,
    speed: u32,
    zoom_step: u32,
    random_density: f64,
    snapshot_path: PathBuf,
    parallel_threshold: usize,
}

impl Session {
    /// Create a session with an empty grid sized from the config's window
    pub fn new(config: &Config) -> Self {
        let config = config.clone().sanitized();
        let viewport = Viewport::new(config.window_width, config.window_height, config.cell_size);
        let (width, height) = viewport.grid_dimensions();

        Self {
            grid: Grid::new(width, height),
            viewport,
            run_state: RunState::Editing,
            generation: 0,
            update_timer: 0.0,
            speed: config.speed,
            zoom_step: config.zoom_step,
            random_density: config.random_density,
            snapshot_path: config.snapshot_path,
            parallel_threshold: config.parallel_threshold,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Generations per second while running
    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn zoom_step(&self) -> u32 {
        self.zoom_step
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Switch between Editing and Running
    pub fn toggle_running(&mut self) {
        self.run_state = match self.run_state {
            RunState::Editing => RunState::Running,
            RunState::Running => RunState::Editing,
        };
        self.update_timer = 0.0;
        debug!(state = ?self.run_state, "run state changed");
    }

    /// Advance one frame. Steps when enough time has accumulated for the
    /// current speed; returns whether a generation was produced.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if !self.is_running() {
            return false;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.speed as f32;
        if self.update_timer < update_interval {
            return false;
        }

        // Carry the remainder so frame jitter does not drop generations,
        // but never bank more than one interval after a stall
        self.update_timer = (self.update_timer - update_interval).min(update_interval);
        self.advance();
        true
    }

    /// Produce exactly one generation, whatever the run state
    pub fn step_once(&mut self) {
        self.advance();
    }

    fn advance(&mut self) {
        let (width, height) = self.grid.dimensions();
        let parallel = self.parallel_threshold > 0 && width * height >= self.parallel_threshold;
        self.grid = if parallel {
            self.grid.step_parallel()
        } else {
            self.grid.step()
        };
        self.generation += 1;
    }

    pub fn adjust_speed(&mut self, delta: i32) {
        self.speed = self.speed.saturating_add_signed(delta).clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn adjust_zoom_step(&mut self, delta: i32) {
        self.zoom_step = self
            .zoom_step
            .saturating_add_signed(delta)
            .clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP);
    }

    /// Flip the cell under a pixel position. Ignored outside the grid.
    pub fn toggle_cell_at(&mut self, x: f32, y: f32) -> bool {
        match self.viewport.cell_at(x, y) {
            Some((cell_x, cell_y)) => self.grid.toggle(cell_x, cell_y).is_some(),
            None => false,
        }
    }

    /// Kill every cell and restart the generation count
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        self.grid.randomize(rng, self.random_density);
        self.generation = 0;
        debug!(population = self.grid.population(), "randomized grid");
    }

    /// Clear the grid and stamp `pattern` at its center
    pub fn stamp_pattern(&mut self, pattern: &Pattern) {
        pattern.stamp_centered(&mut self.grid);
        self.generation = 0;
        info!(pattern = pattern.name, "stamped pattern");
    }

    /// Stamp a registry pattern by hotkey index; false if there is none
    pub fn stamp_pattern_index(&mut self, index: usize) -> bool {
        match presets::all_patterns().get(index) {
            Some(pattern) => {
                self.stamp_pattern(pattern);
                true
            }
            None => false,
        }
    }

    /// React to a new window size. Grows are centered, shrinks clip.
    pub fn resize_window(&mut self, width: u32, height: u32) {
        self.viewport.resize_window(width, height);
        let (new_width, new_height) = self.viewport.grid_dimensions();
        if (new_width, new_height) == self.grid.dimensions() {
            return;
        }

        debug!(
            from = ?self.grid.dimensions(),
            to = ?(new_width, new_height),
            "resizing grid for window"
        );
        self.grid = resample::recenter(&self.grid, new_width, new_height);
    }

    /// Zoom by wheel notches around `pointer`. Positive notches enlarge
    /// cells. Pointers over the control panel are ignored.
    pub fn zoom_at(&mut self, pointer: (f32, f32), notches: i32) -> bool {
        if notches == 0 || !self.viewport.in_game_area(pointer.0, pointer.1) {
            return false;
        }
        self.viewport.set_pointer(pointer.0, pointer.1);
        let requested =
            i64::from(self.viewport.cell_size()) + i64::from(notches) * i64::from(self.zoom_step);
        self.set_cell_size(requested)
    }

    /// Change the cell size, resampling the grid around the last pointer
    /// position. Returns false when the clamped size is unchanged.
    pub fn set_cell_size(&mut self, requested: i64) -> bool {
        let focal = self.viewport.focal_point();
        let old_size = self.viewport.cell_size();
        if !self.viewport.set_cell_size(requested) {
            return false;
        }

        let (new_width, new_height) = self.viewport.grid_dimensions();
        debug!(
            from = old_size,
            to = self.viewport.cell_size(),
            ?focal,
            "rescaling grid for zoom"
        );
        self.grid = resample::rescale(&self.grid, new_width, new_height, focal);
        true
    }

    /// Write the grid to the snapshot file
    pub fn save(&self) -> Result<(), SnapshotError> {
        snapshot::save(&self.grid, &self.snapshot_path)
            .inspect(|_| info!(path = %self.snapshot_path.display(), "saved grid"))
            .inspect_err(|err| error!(%err, path = %self.snapshot_path.display(), "save failed"))
    }

    /// Replace the grid from the snapshot file. A missing file leaves the
    /// grid untouched and returns `Ok(false)`; a malformed one is rejected
    /// whole. Snapshots of another size are fitted like a window resize.
    pub fn load(&mut self) -> Result<bool, SnapshotError> {
        let path = self.snapshot_path.clone();
        let loaded = match snapshot::load(&path) {
            Ok(Some(grid)) => grid,
            Ok(None) => {
                debug!(path = %path.display(), "no snapshot to load");
                return Ok(false);
            }
            Err(err) => {
                warn!(%err, path = %path.display(), "rejected snapshot, keeping current grid");
                return Err(err);
            }
        };

        let (width, height) = self.viewport.grid_dimensions();
        self.grid = if loaded.dimensions() == (width, height) {
            loaded
        } else {
            debug!(snapshot = ?loaded.dimensions(), grid = ?(width, height), "fitting snapshot");
            resample::recenter(&loaded, width, height)
        };
        self.generation = 0;
        info!(path = %path.display(), population = self.grid.population(), "loaded grid");
        Ok(true)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
