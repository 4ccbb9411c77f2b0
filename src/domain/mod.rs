mod cell;
mod grid;
mod patterns;
pub mod resample;
pub mod snapshot;

pub use cell::Cell;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use resample::ZoomMapping;
pub use snapshot::SnapshotError;
