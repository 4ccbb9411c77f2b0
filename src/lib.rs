// Domain layer - Life rule, grid, patterns, resampling, snapshots
pub mod domain;

// Application layer - session state, viewport, configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets};
pub use application::{Config, RunState, Session, Viewport};
pub use ui::Appearance;
