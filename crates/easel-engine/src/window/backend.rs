use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::Fullscreen;

use crate::coords::{Vec2, Viewport};
use crate::core::{Backend, WindowConfig};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::input::{InputPoll, Key, MouseButton};
use crate::paint::Color;
use crate::render::{MeshBuilder, MeshRenderer, MeshVertex, RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, Rasterizer};
use crate::time::{FrameClock, FramePacer, FrameTime};

use super::host::Host;

/// How long `init` waits for the platform to hand out a window.
const WINDOW_TIMEOUT: Duration = Duration::from_secs(5);

/// Desktop backend: a winit window with a wgpu surface, driven by pumping the
/// event loop once per frame from the sketch's own loop.
///
/// Must be created and used on the main thread.
pub struct WinitBackend {
    event_loop: Option<EventLoop<()>>,
    host: Host,

    draw_list: DrawList,
    mesh: MeshBuilder,
    renderer: MeshRenderer,

    clock: FrameClock,
    pacer: FramePacer,
    last_frame: Option<FrameTime>,
}

impl WinitBackend {
    pub fn new(gpu_init: GpuInit) -> Self {
        Self {
            event_loop: None,
            host: Host::new(gpu_init),
            draw_list: DrawList::new(),
            mesh: MeshBuilder::new(),
            renderer: MeshRenderer::new(),
            clock: FrameClock::new(),
            pacer: FramePacer::new(None),
            last_frame: None,
        }
    }

    /// Dispatches pending window events to the host without blocking.
    fn pump(&mut self, timeout: Duration) {
        let Some(event_loop) = self.event_loop.as_mut() else { return };
        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(timeout), &mut self.host) {
            log::debug!("event loop exited with code {code}");
            self.host.close_requested = true;
        }
    }

    fn render(&mut self) -> Result<()> {
        self.mesh.build(self.draw_list.items());
        let vertices = self.mesh.vertices();
        let clear = self.mesh.clear_color();
        let renderer = &mut self.renderer;

        let Some(surface) = self.host.surface.as_mut() else { return Ok(()) };
        let scale = surface.with_window(|w| w.scale_factor());
        surface.with_gpu_mut(|gpu| present(gpu, renderer, scale, vertices, clear))
    }
}

fn present(
    gpu: &mut Gpu<'_>,
    renderer: &mut MeshRenderer,
    scale_factor: f64,
    vertices: &[MeshVertex],
    clear: Color,
) -> Result<()> {
    if !gpu.is_drawable() {
        return Ok(());
    }

    let mut frame = match gpu.begin_frame() {
        Ok(frame) => frame,
        Err(err) => {
            return match gpu.handle_surface_error(err) {
                SurfaceErrorAction::Fatal => Err(anyhow::anyhow!("GPU surface out of memory")),
                SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => Ok(()),
            };
        }
    };

    let size = gpu.size();
    let viewport = Viewport::from_physical(size.width, size.height, scale_factor);
    {
        let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), viewport);
        let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
        renderer.render(&ctx, &mut target, vertices, clear);
    }

    gpu.present(frame);
    Ok(())
}

impl Backend for WinitBackend {
    fn init(&mut self, config: &WindowConfig) -> Result<()> {
        if self.event_loop.is_none() {
            self.event_loop = Some(EventLoop::new().context("failed to create winit EventLoop")?);
        }
        self.host.config = Some(config.clone());
        self.host.close_requested = false;

        let deadline = Instant::now() + WINDOW_TIMEOUT;
        while self.host.surface.is_none() {
            self.pump(Duration::from_millis(10));

            if let Some(err) = self.host.create_error.take() {
                return Err(err);
            }
            anyhow::ensure!(
                !self.host.close_requested,
                "event loop closed before the window was created"
            );
            anyhow::ensure!(
                Instant::now() < deadline,
                "timed out after {WINDOW_TIMEOUT:?} waiting for a window"
            );
        }

        self.host.input.begin_poll();
        self.clock.reset();
        self.last_frame = None;
        log::info!(
            "window ready: {}x{} @ {:.2}x",
            config.width,
            config.height,
            self.host.with_window(|w| w.scale_factor()).unwrap_or(1.0)
        );
        Ok(())
    }

    fn should_close(&mut self) -> bool {
        self.host.close_requested
    }

    fn close(&mut self) {
        self.host.close_requested = true;
        if self.host.surface.take().is_some() {
            log::debug!("window closed");
            // Let the platform process the destroy.
            self.pump(Duration::ZERO);
        }
    }

    fn toggle_fullscreen(&mut self) {
        self.host.with_window(|w| {
            let next = match w.fullscreen() {
                Some(_) => None,
                None => Some(Fullscreen::Borderless(None)),
            };
            w.set_fullscreen(next);
        });
    }

    fn screen_size(&self) -> Viewport {
        match self.host.surface.as_ref() {
            Some(s) => {
                let scale = s.with_window(|w| w.scale_factor());
                let size = s.with_gpu(|gpu| gpu.size());
                Viewport::from_physical(size.width, size.height, scale)
            }
            None => self
                .host
                .config
                .as_ref()
                .map(|c| Viewport::new(c.width as f32, c.height as f32))
                .unwrap_or_default(),
        }
    }

    fn begin_frame(&mut self) {
        self.draw_list.clear();
    }

    fn end_frame(&mut self) -> Result<()> {
        self.render().context("failed to present frame")?;

        self.pacer.wait();
        let time = self.clock.tick();
        log::trace!("frame {} took {:.2} ms", time.frame_index, time.dt * 1000.0);
        self.last_frame = Some(time);

        self.host.input.begin_poll();
        self.pump(Duration::ZERO);
        Ok(())
    }

    fn set_target_frame_rate(&mut self, fps: u32) {
        log::debug!("target frame rate {fps}");
        self.pacer.set_target(fps);
    }

    fn frame_rate(&self) -> f32 {
        self.clock.fps()
    }

    fn delta_time(&self) -> f32 {
        self.last_frame.map_or(0.0, |t| t.dt)
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.host.with_window(|w| w.set_cursor_visible(visible));
    }

    fn pointer_position(&self) -> Vec2 {
        self.host.input.pointer()
    }
}

impl InputPoll for WinitBackend {
    fn pop_pressed_key(&mut self) -> Option<Key> {
        self.host.input.pop_pressed_key()
    }

    fn is_key_up(&self, key: Key) -> bool {
        !self.host.input.is_key_held(key)
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.host.input.is_button_pressed(button)
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        self.host.input.is_button_down(button)
    }

    fn pointer_delta(&self) -> Vec2 {
        self.host.input.pointer_delta()
    }

    fn wheel_delta(&self) -> Vec2 {
        self.host.input.wheel_delta()
    }
}

impl Rasterizer for WinitBackend {
    fn submit(&mut self, cmd: DrawCmd) {
        self.draw_list.push(cmd);
    }
}
