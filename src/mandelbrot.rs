//! Escape-time evaluation of the Mandelbrot recurrence over the pixel grid.

use crate::config::{GridLayout, ESCAPE_RADIUS};
use num_complex::Complex64;

/// Number of iterations of z <- z^2 + c (from z = 0) until |z| exceeds the
/// escape radius, or `max_iter` if it never does.
pub fn escape_time(c: Complex64, max_iter: u32) -> u32 {
    let bound = ESCAPE_RADIUS * ESCAPE_RADIUS;
    let mut z = Complex64::new(0.0, 0.0);
    let mut iter = 0;
    while iter < max_iter {
        z = z * z + c;
        iter += 1;
        // strict: |z| == 2 has not escaped
        if z.norm_sqr() > bound {
            return iter;
        }
    }
    max_iter
}

/// Complex-plane sample for a grid cell. The window is centered on the
/// origin with a quarter of each window dimension per unit.
pub fn sample_at(row: usize, col: usize, layout: &GridLayout) -> Complex64 {
    let (x, y) = layout.cell_origin(row, col);
    let w = layout.width as f64;
    let h = layout.height as f64;
    let re = (x as f64 - w / 2.0) / (w / 4.0);
    let im = (y as f64 - h / 2.0) / (h / 4.0);
    Complex64::new(re, im)
}

/// Iteration counts for one frame, row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    counts: Vec<u32>,
}

impl Grid {
    /// Evaluates every cell of `layout` from scratch.
    pub fn compute(layout: &GridLayout, max_iter: u32) -> Self {
        let mut counts = Vec::with_capacity(layout.cell_count());
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                counts.push(escape_time(sample_at(row, col, layout), max_iter));
            }
        }
        Self {
            rows: layout.rows,
            cols: layout.cols,
            counts,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.counts.get(row * self.cols + col).copied()
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        let cols = self.cols;
        self.counts
            .iter()
            .enumerate()
            .map(move |(i, &n)| (i / cols, i % cols, n))
    }
}
