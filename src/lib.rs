//! Mandelbrot escape-time renderer: per-pixel iteration counts mapped to a
//! hue wheel and redrawn every frame.

pub mod app;
pub mod color;
pub mod config;
pub mod mandelbrot;
pub mod render;
