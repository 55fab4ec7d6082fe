//! Window, event loop and the per-frame compute/draw/present cycle.

use crate::config::{Config, GridLayout};
use crate::mandelbrot::Grid;
use crate::render::draw_grid;
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use std::time::{Duration, Instant};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

/// Frame pacing and FPS sampling.
pub struct FrameClock {
    interval: Duration,
    next_frame: Instant,
    frame_count: u32,
    last_fps_instant: Instant,
}

impl FrameClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_frame: now,
            frame_count: 0,
            last_fps_instant: now,
        }
    }

    /// True once the previous frame's slot has elapsed. Claims the next slot.
    pub fn frame_due(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }
        self.next_frame = now + self.interval;
        true
    }

    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Counts a presented frame; yields frames per second about once a second.
    pub fn record_frame(&mut self, now: Instant) -> Option<f32> {
        self.frame_count += 1;
        let elapsed = now.duration_since(self.last_fps_instant).as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.last_fps_instant = now;
            Some(fps)
        } else {
            None
        }
    }
}

pub fn is_quit_event(event: &WindowEvent) -> bool {
    match event {
        WindowEvent::CloseRequested => true,
        WindowEvent::KeyboardInput {
            input:
                KeyboardInput {
                    state: ElementState::Pressed,
                    virtual_keycode: Some(VirtualKeyCode::Escape),
                    ..
                },
            ..
        } => true,
        _ => false,
    }
}

fn center_on_monitor(window: &Window) {
    let Some(monitor) = window.current_monitor() else {
        return;
    };
    let screen = monitor.size();
    let origin = monitor.position();
    let outer = window.outer_size();
    let x = origin.x + (screen.width as i32 - outer.width as i32) / 2;
    let y = origin.y + (screen.height as i32 - outer.height as i32) / 2;
    window.set_outer_position(PhysicalPosition::new(x, y));
}

/// Computes, draws and presents one frame. The grid lives only for this call.
fn redraw(pixels: &mut Pixels, layout: &GridLayout, max_iter: u32) -> anyhow::Result<()> {
    let start = Instant::now();
    let grid = Grid::compute(layout, max_iter);
    let computed = start.elapsed();
    draw_grid(pixels.frame_mut(), &grid, layout, max_iter)?;
    debug!(
        "frame: compute {:.1} ms, blit {:.1} ms",
        computed.as_secs_f64() * 1e3,
        (start.elapsed() - computed).as_secs_f64() * 1e3
    );
    pixels.render()?;
    Ok(())
}

pub fn run(config: Config) -> anyhow::Result<()> {
    let layout = config.layout()?;
    info!(
        "window {}x{}, grid {} rows x {} cols, max {} iterations",
        layout.width, layout.height, layout.rows, layout.cols, config.max_iter
    );

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(PhysicalSize::new(layout.width, layout.height))
        .with_resizable(false)
        .build(&event_loop)?;
    center_on_monitor(&window);

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(layout.width, layout.height, surface_texture)?;

    let max_iter = config.max_iter;
    let mut clock = FrameClock::new(config.frame_interval, Instant::now());
    let mut quitting = false;

    event_loop.run(move |event, _, control_flow| {
        if quitting {
            return;
        }
        match event {
            Event::WindowEvent { event, .. } if is_quit_event(&event) => {
                info!("quit requested");
                quitting = true;
                *control_flow = ControlFlow::Exit;
            }
            Event::MainEventsCleared => {
                if clock.frame_due(Instant::now()) {
                    window.request_redraw();
                }
                *control_flow = ControlFlow::WaitUntil(clock.next_frame());
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = redraw(&mut pixels, &layout, max_iter) {
                    error!("redraw failed: {e}");
                    quitting = true;
                    *control_flow = ControlFlow::ExitWithCode(1);
                    return;
                }
                if let Some(fps) = clock.record_frame(Instant::now()) {
                    info!("FPS: {:.1}", fps);
                }
            }
            _ => {}
        }
    });
}
