// File: crates/chart-window/src/lib.rs
// Summary: Shows one chart per native window and blocks until the window is dismissed.
// Notes:
// - A single winit event loop is reused for every window via `run_return`, so
//   charts can be shown one after another from ordinary sequential code.
// - Pixels go through a CPU RGBA render blitted with softbuffer.

use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use chart_core::{Chart, RenderOptions};
use log::{debug, info};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{Window, WindowBuilder};

pub struct Viewer {
    event_loop: EventLoop<()>,
}

impl Viewer {
    /// Connect to the platform display. Panics inside winit if no display is available.
    pub fn new() -> Self {
        Self { event_loop: EventLoop::new() }
    }

    /// Open a window for `chart` and block until it is closed.
    /// Escape, Enter, Space or Right arrow also dismiss it.
    pub fn show_blocking(&mut self, chart: &Chart, base: &RenderOptions) -> Result<()> {
        let title = if chart.title.is_empty() { "Chart" } else { chart.title.as_str() };
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(base.width as f64, base.height as f64))
            .build(&self.event_loop)?;

        let context = unsafe { softbuffer::Context::new(&window) }
            .map_err(|e| anyhow!("softbuffer context: {e}"))?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
            .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

        info!("showing \"{title}\"; close the window to continue");
        window.request_redraw();

        let mut failure: Option<anyhow::Error> = None;
        let window_id = window.id();
        self.event_loop.run_return(|event, _, cf| {
            *cf = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, window_id: id } if id == window_id => match event {
                    WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                    WindowEvent::KeyboardInput {
                        input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                        ..
                    } if is_dismiss_key(key) => *cf = ControlFlow::Exit,
                    WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => window.request_redraw(),
                    _ => {}
                },
                Event::RedrawRequested(id) if id == window_id => {
                    if let Err(e) = draw(&window, &mut surface, chart, base) {
                        failure = Some(e);
                        *cf = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });
        debug!("window \"{title}\" closed");

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Viewer {
    fn default() -> Self { Self::new() }
}

fn is_dismiss_key(key: VirtualKeyCode) -> bool {
    matches!(key, VirtualKeyCode::Escape | VirtualKeyCode::Return | VirtualKeyCode::Space | VirtualKeyCode::Right)
}

/// Render at the current window size and blit into the softbuffer frame.
fn draw(window: &Window, surface: &mut softbuffer::Surface, chart: &Chart, base: &RenderOptions) -> Result<()> {
    let size = window.inner_size();
    let (w, h) = (size.width.max(1), size.height.max(1));
    let (nw, nh) = match (NonZeroU32::new(w), NonZeroU32::new(h)) {
        (Some(nw), Some(nh)) => (nw, nh),
        _ => return Ok(()),
    };
    surface.resize(nw, nh).map_err(|e| anyhow!("resize surface: {e}"))?;

    let mut opts = *base;
    opts.width = w as i32;
    opts.height = h as i32;
    let (rgba, _, _, _) = chart.render_to_rgba8(&opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        // softbuffer expects 0RGB
        *dst = (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| anyhow!("present frame: {e}"))?;
    Ok(())
}
