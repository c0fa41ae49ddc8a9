use bytemuck::{Pod, Zeroable};

use crate::coords::{Affine2, Vec2};
use crate::paint::Color;
use crate::scene::DrawCmd;

/// Fan segment bounds for circles and ellipses.
const MIN_SEGMENTS: u32 = 12;
const MAX_SEGMENTS: u32 = 128;

/// Vertex fed to the mesh pipeline.
///
/// `pos` is in logical pixels after the transform stack; `color` is straight
/// (non-premultiplied) sRGB in 0..1. The shader linearizes and premultiplies.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Turns a frame's command stream into a triangle list.
///
/// Keeps the clear color and vertex storage between frames; [`build`](Self::build)
/// starts each frame with an empty mesh and an identity transform stack.
#[derive(Debug)]
pub struct MeshBuilder {
    vertices: Vec<MeshVertex>,
    clear: Color,
    current: Affine2,
    stack: Vec<Affine2>,
    warned_underflow: bool,
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            clear: Color::BLACK,
            current: Affine2::IDENTITY,
            stack: Vec::new(),
            warned_underflow: false,
        }
    }
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color the frame's render pass clears to. Persists until the next `Clear`.
    pub fn clear_color(&self) -> Color {
        self.clear
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Tessellates `cmds` in order, replacing the previous frame's mesh.
    pub fn build<'c>(&mut self, cmds: impl IntoIterator<Item = &'c DrawCmd>) -> &[MeshVertex] {
        self.vertices.clear();
        self.stack.clear();
        self.current = Affine2::IDENTITY;

        for cmd in cmds {
            self.push_cmd(cmd);
        }

        if !self.stack.is_empty() {
            log::debug!("{} push_matrix without pop at end of frame", self.stack.len());
        }
        &self.vertices
    }

    fn push_cmd(&mut self, cmd: &DrawCmd) {
        match *cmd {
            DrawCmd::Clear(color) => {
                self.vertices.clear();
                self.clear = color;
            }
            DrawCmd::Circle { center, radius, color } => {
                self.ellipse(center, radius, radius, color);
            }
            DrawCmd::Ellipse { center, radius_h, radius_v, color } => {
                self.ellipse(center, radius_h, radius_v, color);
            }
            DrawCmd::Rect { top_left, width, height, color } => {
                self.rect(top_left, width, height, color);
            }
            DrawCmd::Triangle { a, b, c, color } => {
                self.tri(a, b, c, color);
            }
            DrawCmd::Pixel { at, color } => {
                self.rect(at, 1.0, 1.0, color);
            }
            DrawCmd::Line { from, to, thickness, color } => {
                self.line(from, to, thickness, color);
            }
            DrawCmd::PushMatrix => self.stack.push(self.current),
            DrawCmd::PopMatrix => match self.stack.pop() {
                Some(m) => self.current = m,
                None => {
                    if !self.warned_underflow {
                        log::warn!("pop_matrix without matching push_matrix; resetting transform");
                        self.warned_underflow = true;
                    }
                    self.current = Affine2::IDENTITY;
                }
            },
            DrawCmd::Translate(v) => self.current = self.current.then_local(Affine2::translation(v)),
            DrawCmd::Rotate(r) => self.current = self.current.then_local(Affine2::rotation(r)),
            DrawCmd::Scale(v) => self.current = self.current.then_local(Affine2::scaling(v)),
        }
    }

    // ── primitives ─────────────────────────────────────────────────────────

    fn tri(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        let color = color.to_straight_f32();
        for p in [a, b, c] {
            let p = self.current.apply(p);
            self.vertices.push(MeshVertex { pos: [p.x, p.y], color });
        }
    }

    fn rect(&mut self, top_left: Vec2, width: f32, height: f32, color: Color) {
        if width == 0.0 || height == 0.0 {
            return;
        }
        let tl = top_left;
        let tr = top_left + Vec2::new(width, 0.0);
        let br = top_left + Vec2::new(width, height);
        let bl = top_left + Vec2::new(0.0, height);
        self.tri(tl, tr, br, color);
        self.tri(tl, br, bl, color);
    }

    /// Negative radii still draw (the fan is mirrored); zero draws nothing.
    fn ellipse(&mut self, center: Vec2, rh: f32, rv: f32, color: Color) {
        if rh == 0.0 || rv == 0.0 || !(rh.is_finite() && rv.is_finite()) {
            return;
        }
        let n = segments_for(rh.abs().max(rv.abs()));
        let step = std::f32::consts::TAU / n as f32;
        let at = |i: u32| {
            let (s, c) = (step * i as f32).sin_cos();
            center + Vec2::new(c * rh, s * rv)
        };
        for i in 0..n {
            self.tri(center, at(i), at(i + 1), color);
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        let dir = to - from;
        let len = dir.length();
        if len == 0.0 || thickness <= 0.0 {
            return;
        }
        let n = dir.perp() * (thickness * 0.5 / len);
        let (a, b, c, d) = (from + n, to + n, to - n, from - n);
        self.tri(a, b, c, color);
        self.tri(a, c, d, color);
    }
}

/// Fan segments for a radius in logical pixels: about one segment per 4 px of
/// circumference, clamped to `MIN_SEGMENTS..=MAX_SEGMENTS`.
pub(crate) fn segments_for(radius: f32) -> u32 {
    let circumference = std::f32::consts::TAU * radius;
    ((circumference / 4.0).ceil() as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}
