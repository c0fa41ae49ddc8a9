use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowId};

use crate::coords::Vec2;
use crate::core::WindowConfig;
use crate::device::{Gpu, GpuInit};

use super::device_input::DeviceInput;
use super::keymap::{map_key, map_mouse_button};

/// A window and the GPU surface that borrows it.
#[self_referencing]
pub(crate) struct WindowSurface {
    pub(crate) window: Window,

    #[borrows(window)]
    #[covariant]
    pub(crate) gpu: Gpu<'this>,
}

/// Receives winit callbacks while the backend pumps the event loop.
///
/// Everything the callbacks touch lives here so the backend can lend the host to
/// the event loop while keeping its own renderer state separate.
pub(crate) struct Host {
    gpu_init: GpuInit,
    /// Set by `init`; the window is created on the first `resumed` after that.
    pub(crate) config: Option<WindowConfig>,
    pub(crate) surface: Option<WindowSurface>,
    pub(crate) input: DeviceInput,
    pub(crate) close_requested: bool,
    pub(crate) create_error: Option<anyhow::Error>,
}

impl Host {
    pub(crate) fn new(gpu_init: GpuInit) -> Self {
        Self {
            gpu_init,
            config: None,
            surface: None,
            input: DeviceInput::default(),
            close_requested: false,
            create_error: None,
        }
    }

    pub(crate) fn with_window<R>(&self, f: impl FnOnce(&Window) -> R) -> Option<R> {
        self.surface.as_ref().map(|s| s.with_window(|w| f(w)))
    }

    fn create_surface(&self, event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<WindowSurface> {
        let mut attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));
        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        WindowSurfaceTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")
    }

    fn scale_factor(&self) -> f64 {
        self.with_window(|w| w.scale_factor()).unwrap_or(1.0)
    }

    fn logical(&self, p: PhysicalPosition<f64>) -> Vec2 {
        let l = p.to_logical::<f64>(self.scale_factor());
        Vec2::new(l.x as f32, l.y as f32)
    }

    fn is_exit_key(&self, key: crate::input::Key) -> bool {
        self.config.as_ref().and_then(|c| c.exit_key) == Some(key)
    }
}

impl ApplicationHandler for Host {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }
        let Some(config) = self.config.clone() else { return };

        match self.create_surface(event_loop, &config) {
            Ok(surface) => {
                log::debug!("window '{}' created", config.title);
                self.surface = Some(surface);
            }
            Err(e) => self.create_error = Some(e),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::debug!("window close requested");
                self.close_requested = true;
            }

            WindowEvent::Resized(size) => {
                if let Some(s) = self.surface.as_mut() {
                    s.with_gpu_mut(|gpu| gpu.resize(size));
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(s) = self.surface.as_mut() {
                    let size = s.with_window(|w| w.inner_size());
                    s.with_gpu_mut(|gpu| gpu.resize(size));
                }
            }

            WindowEvent::Focused(false) => self.input.focus_lost(),

            WindowEvent::CursorMoved { position, .. } => {
                let at = self.logical(position);
                self.input.pointer_moved(at);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(b) = map_mouse_button(button) {
                    self.input.button(b, state == ElementState::Pressed);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(x, y) => self.input.wheel_lines(Vec2::new(x, y)),
                MouseScrollDelta::PixelDelta(p) => {
                    let px = self.logical(p);
                    self.input.wheel_pixels(px);
                }
            },

            WindowEvent::KeyboardInput { event, .. } => {
                let source = event.physical_key;
                let key = map_key(source);
                let pressed = event.state == ElementState::Pressed;
                if pressed && self.is_exit_key(key) {
                    log::debug!("exit key {key} pressed");
                    self.close_requested = true;
                }
                self.input.key(key, source, pressed);
            }

            _ => {}
        }
    }
}
