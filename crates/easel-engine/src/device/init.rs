/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// With an sRGB target the mesh shader linearizes sketch colors before blending.
    pub prefer_srgb: bool,

    /// Requested present mode. Falls back to `Fifo` when the surface lacks it.
    ///
    /// `Fifo` paces frames to the display; sketches that set a frame rate above the
    /// refresh rate need `Immediate` or `Mailbox`.
    pub present_mode: wgpu::PresentMode,

    /// Alpha mode preference; unsupported values fall back to the first supported one.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub power_preference: wgpu::PowerPreference,

    /// Hint; support depends on platform and backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            power_preference: wgpu::PowerPreference::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
