//! Compile-time rendering constants and the grid layout derived from them.
//!
//! Nothing here is read from the command line or the environment. The window
//! and grid are fixed for the lifetime of the process.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------
pub const WINDOW_TITLE: &str = "Fractal";
pub const WINDOW_WIDTH: u32 = 900; // physical pixels
pub const WINDOW_HEIGHT: u32 = 800;

// ---------------------------------------------------------------------------
// Grid / Escape-Time
// ---------------------------------------------------------------------------
pub const CELL_SIZE: u32 = 1; // pixels per grid cell edge
pub const MAX_ITER: u32 = 100; // count meaning "did not escape"
pub const ESCAPE_RADIUS: f64 = 2.0;

// ---------------------------------------------------------------------------
// Frame pacing
// ---------------------------------------------------------------------------
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667); // ~60 fps cap

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,
    #[error("max iteration count must be at least 1")]
    ZeroMaxIter,
    #[error("window {width}x{height} is not divisible by cell size {cell_size}")]
    UnevenCells {
        width: u32,
        height: u32,
        cell_size: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub max_iter: u32,
    pub frame_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            cell_size: CELL_SIZE,
            max_iter: MAX_ITER,
            frame_interval: FRAME_INTERVAL,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.max_iter == 0 {
            return Err(ConfigError::ZeroMaxIter);
        }
        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            return Err(ConfigError::UnevenCells {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }

    /// Validates the configuration and derives the fixed grid layout.
    pub fn layout(&self) -> Result<GridLayout, ConfigError> {
        self.validate()?;
        Ok(GridLayout {
            rows: (self.height / self.cell_size) as usize,
            cols: (self.width / self.cell_size) as usize,
            cell_size: self.cell_size,
            width: self.width,
            height: self.height,
        })
    }
}

/// Shape of the iteration grid and how it sits on the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: u32,
    pub width: u32,
    pub height: u32,
}

impl GridLayout {
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Top-left window pixel of a grid cell.
    pub fn cell_origin(&self, row: usize, col: usize) -> (u32, u32) {
        (col as u32 * self.cell_size, row as u32 * self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_one_cell_per_pixel() {
        let layout = Config::default().layout().unwrap();
        assert_eq!(layout.rows, 800);
        assert_eq!(layout.cols, 900);
        assert_eq!(layout.cell_count(), 720_000);
    }

    #[test]
    fn test_cell_size_two_halves_grid() {
        let config = Config {
            cell_size: 2,
            ..Config::default()
        };
        let layout = config.layout().unwrap();
        assert_eq!((layout.rows, layout.cols), (400, 450));
        assert_eq!(layout.cell_origin(3, 5), (10, 6));
    }

    #[test]
    fn test_rejects_zero_cell_size() {
        let config = Config {
            cell_size: 0,
            ..Config::default()
        };
        assert_eq!(config.layout(), Err(ConfigError::ZeroCellSize));
    }

    #[test]
    fn test_rejects_zero_max_iter() {
        let config = Config {
            max_iter: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxIter));
    }

    #[test]
    fn test_rejects_uneven_cells() {
        let config = Config {
            cell_size: 7,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnevenCells { cell_size: 7, .. })
        ));
    }
}
