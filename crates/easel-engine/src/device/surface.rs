use wgpu::{CompositeAlphaMode, PresentMode, SurfaceError, TextureFormat};

use super::SurfaceErrorAction;

/// Picks the swapchain format: an 8-bit sRGB format when preferred and offered,
/// otherwise the surface's first format.
pub(crate) fn choose_format(formats: &[TextureFormat], prefer_srgb: bool) -> Option<TextureFormat> {
    if prefer_srgb {
        let srgb = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Rgba8UnormSrgb];
        if let Some(f) = srgb.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }
    formats.first().copied()
}

pub(crate) fn choose_present_mode(modes: &[PresentMode], requested: PresentMode) -> PresentMode {
    if modes.contains(&requested) {
        requested
    } else {
        log::warn!("present mode {requested:?} unsupported, using Fifo");
        PresentMode::Fifo
    }
}

pub(crate) fn choose_alpha_mode(
    modes: &[CompositeAlphaMode],
    requested: Option<CompositeAlphaMode>,
) -> CompositeAlphaMode {
    requested
        .filter(|m| modes.contains(m))
        .or_else(|| modes.first().copied())
        .unwrap_or(CompositeAlphaMode::Auto)
}

/// Classifies a surface acquisition error. `Lost` and `Outdated` need a reconfigure
/// by the caller before the next acquire.
pub(crate) fn classify_error(err: &SurfaceError) -> SurfaceErrorAction {
    match err {
        SurfaceError::Lost | SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}
