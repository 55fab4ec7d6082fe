//! Blits a computed grid into an RGBA frame buffer.

use crate::color::{map_to_color, ColorError};
use crate::config::GridLayout;
use crate::mandelbrot::Grid;

/// Rendering error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("color mapping error: {0}")]
    Color(#[from] ColorError),
    #[error("frame buffer holds {actual} bytes, expected {expected}")]
    FrameSize { expected: usize, actual: usize },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Paints each grid cell as a `cell_size` square at its window position.
/// Every pixel of the frame is overwritten.
pub fn draw_grid(
    frame: &mut [u8],
    grid: &Grid,
    layout: &GridLayout,
    max_iter: u32,
) -> RenderResult<()> {
    let expected = (layout.width * layout.height * 4) as usize;
    if frame.len() != expected {
        return Err(RenderError::FrameSize {
            expected,
            actual: frame.len(),
        });
    }
    let stride = (layout.width * 4) as usize;
    let size = layout.cell_size as usize;
    for (row, col, n) in grid.iter_cells() {
        let rgba = map_to_color(n, max_iter)?.to_array();
        let (x0, y0) = layout.cell_origin(row, col);
        let (x0, y0) = (x0 as usize, y0 as usize);
        for y in y0..y0 + size {
            let start = y * stride + x0 * 4;
            for px in frame[start..start + size * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, MAX_ITER};

    fn small_layout(cell_size: u32) -> GridLayout {
        Config {
            width: 8,
            height: 4,
            cell_size,
            ..Config::default()
        }
        .layout()
        .unwrap()
    }

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * width + x) * 4) as usize;
        [frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]
    }

    #[test]
    fn test_draw_overwrites_whole_frame() {
        let layout = small_layout(1);
        let grid = Grid::compute(&layout, MAX_ITER);
        let mut frame = vec![7u8; 8 * 4 * 4];
        draw_grid(&mut frame, &grid, &layout, MAX_ITER).unwrap();
        assert!(frame.chunks_exact(4).all(|px| px[3] == 255));
        // center pixel is c = 0, inside the set
        assert_eq!(pixel(&frame, 8, 4, 2), [0, 0, 0, 255]);
        // corner escapes on the first step -> hue 3.6 -> red wedge
        assert_eq!(pixel(&frame, 8, 0, 0), [255, 12, 0, 255]);
    }

    #[test]
    fn test_cells_fill_squares() {
        let layout = small_layout(2);
        let grid = Grid::compute(&layout, MAX_ITER);
        let mut frame = vec![0u8; 8 * 4 * 4];
        draw_grid(&mut frame, &grid, &layout, MAX_ITER).unwrap();
        for (row, col, _) in grid.iter_cells() {
            let (x, y) = layout.cell_origin(row, col);
            let top_left = pixel(&frame, 8, x, y);
            assert_eq!(pixel(&frame, 8, x + 1, y), top_left);
            assert_eq!(pixel(&frame, 8, x, y + 1), top_left);
            assert_eq!(pixel(&frame, 8, x + 1, y + 1), top_left);
        }
    }

    #[test]
    fn test_rejects_wrong_frame_size() {
        let layout = small_layout(1);
        let grid = Grid::compute(&layout, MAX_ITER);
        let mut frame = vec![0u8; 10];
        assert_eq!(
            draw_grid(&mut frame, &grid, &layout, MAX_ITER),
            Err(RenderError::FrameSize {
                expected: 128,
                actual: 10
            })
        );
    }

    #[test]
    fn test_count_above_cap_is_an_error() {
        let layout = small_layout(1);
        let grid = Grid::compute(&layout, MAX_ITER);
        let mut frame = vec![0u8; 8 * 4 * 4];
        // drawing with a lower cap than the grid was computed with
        let err = draw_grid(&mut frame, &grid, &layout, 1).unwrap_err();
        assert!(matches!(err, RenderError::Color(_)));
    }
}
