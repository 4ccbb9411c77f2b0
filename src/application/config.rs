use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::viewport::{DEFAULT_CELL_SIZE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, clamp_cell_size};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "LIFE_PANEL_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "life_panel.json";

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 60;
pub const MIN_ZOOM_STEP: u32 = 1;
pub const MAX_ZOOM_STEP: u32 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Startup settings. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    /// Generations per second while running
    pub speed: u32,
    /// Cell-size change per wheel notch
    pub zoom_step: u32,
    pub theme: String,
    pub show_grid: bool,
    /// Fraction of cells alive after randomize
    pub random_density: f64,
    pub snapshot_path: PathBuf,
    /// Grids with at least this many cells step on the rayon pool; 0 disables
    pub parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 600,
            cell_size: DEFAULT_CELL_SIZE,
            speed: 10,
            zoom_step: 1,
            theme: "classic".to_owned(),
            show_grid: true,
            random_density: 0.5,
            snapshot_path: PathBuf::from("saved_grid.txt"),
            parallel_threshold: 20_000,
        }
    }
}

impl Config {
    /// Config path from the environment, falling back to the default
    pub fn path_from_env() -> PathBuf {
        env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Read a config file. A missing file is `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io { path: path.to_owned(), source });
            }
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| ConfigError::Parse { path: path.to_owned(), source })
    }

    /// Load and sanitize, using defaults when the file is missing or bad
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(config)) => {
                debug!(path = %path.display(), "loaded config");
                config.sanitized()
            }
            Ok(None) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(err) => {
                warn!(%err, "falling back to default config");
                Self::default()
            }
        }
    }

    /// Clamp every numeric field into its legal range
    pub fn sanitized(mut self) -> Self {
        self.window_width = self.window_width.max(MIN_WINDOW_WIDTH);
        self.window_height = self.window_height.max(MIN_WINDOW_HEIGHT);
        self.cell_size = clamp_cell_size(i64::from(self.cell_size));
        self.speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
        self.zoom_step = self.zoom_step.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP);
        self.random_density = if self.random_density.is_finite() {
            self.random_density.clamp(0.0, 1.0)
        } else {
            Self::default().random_density
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "speed": 30, "theme": "ocean" }"#).unwrap();
        assert_eq!(config.speed, 30);
        assert_eq!(config.theme, "ocean");
        assert_eq!(config.cell_size, DEFAULT_CELL_SIZE);
        assert!(config.show_grid);
    }

    #[test]
    fn test_sanitized_clamps() {
        let config = Config {
            window_width: 10,
            window_height: 10,
            cell_size: 99,
            speed: 0,
            zoom_step: 9,
            random_density: f64::NAN,
            ..Config::default()
        }
        .sanitized();

        assert_eq!(config.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(config.window_height, MIN_WINDOW_HEIGHT);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.speed, MIN_SPEED);
        assert_eq!(config.zoom_step, MAX_ZOOM_STEP);
        assert_eq!(config.random_density, 0.5);
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(Config::load(&missing).unwrap().is_none());
        assert_eq!(Config::load_or_default(&missing), Config::default());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ speed: ").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
        assert_eq!(Config::load_or_default(&broken), Config::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("life.json");
        fs::write(&path, r#"{ "cell_size": 2, "speed": 100 }"#).unwrap();

        let config = Config::load_or_default(&path);
        assert_eq!(config.cell_size, 5);
        assert_eq!(config.speed, 60);
    }
}
