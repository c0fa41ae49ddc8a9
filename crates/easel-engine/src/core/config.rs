use crate::device::GpuInit;
use crate::input::Key;
use crate::logging::LoggingConfig;

/// Window parameters handed to [`Backend::init`](super::Backend::init).
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Logical pixels.
    pub width: u32,
    pub height: u32,
    /// Start in borderless fullscreen on the current monitor.
    pub fullscreen: bool,
    /// Key that requests exit, `None` to only close through the window.
    pub exit_key: Option<Key>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "easel".to_string(),
            width: 640,
            height: 480,
            fullscreen: false,
            exit_key: Some(Key::Escape),
        }
    }
}

/// Top-level configuration for [`run`](crate::run).
///
/// ```rust,ignore
/// let config = SketchConfig::new().title("circles").size(800, 600).frame_rate(60);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SketchConfig {
    pub window: WindowConfig,
    /// Frame rate cap applied before `setup`. `None` leaves pacing to vsync.
    pub target_frame_rate: Option<u32>,
    /// Seed for the sketch's random source. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub logging: LoggingConfig,
    pub gpu: GpuInit,
}

impl SketchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn fullscreen(mut self, fullscreen: bool) -> Self {
        self.window.fullscreen = fullscreen;
        self
    }

    pub fn exit_key(mut self, key: Option<Key>) -> Self {
        self.window.exit_key = key;
        self
    }

    pub fn frame_rate(mut self, fps: u32) -> Self {
        self.target_frame_rate = Some(fps);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    pub fn gpu(mut self, gpu: GpuInit) -> Self {
        self.gpu = gpu;
        self
    }
}
