use std::time::{Duration, Instant};

use chrono::{Datelike, Local, Timelike};

use crate::coords::Vec2;
use crate::input::{InputSynth, Key, MouseButton};
use crate::math::{Noise, Random};
use crate::paint::Color;
use crate::scene::{DrawCmd, ShapeRenderer};
use crate::style::StyleState;

use super::backend::Backend;

/// State the runtime keeps for a sketch between frames.
///
/// Owned by [`Runtime`](super::Runtime) and lent to [`Graphics`] and the input
/// synthesizer; nothing here is global.
#[derive(Debug)]
pub struct SketchState {
    pub style: StyleState,
    pub input: InputSynth,
    /// Frames started so far; `0` during `setup`.
    pub frame_count: u64,
    pub started: Instant,
    pub random: Random,
    pub noise: Noise,
}

impl SketchState {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            style: StyleState::default(),
            input: InputSynth::new(),
            frame_count: 0,
            started: Instant::now(),
            random: seed.map_or_else(Random::from_entropy, Random::seeded),
            noise: seed.map_or_else(Noise::default, Noise::seeded),
        }
    }
}

/// Per-call drawing context passed to `Sketch::setup` and `Sketch::draw`.
///
/// Style setters change state that persists across frames. Shape calls read that
/// state at the moment they are made.
pub struct Graphics<'a> {
    backend: &'a mut dyn Backend,
    state: &'a mut SketchState,
}

impl<'a> Graphics<'a> {
    pub fn new(backend: &'a mut dyn Backend, state: &'a mut SketchState) -> Self {
        Self { backend, state }
    }

    fn shapes(&mut self) -> ShapeRenderer<'_, dyn Backend + 'a> {
        ShapeRenderer::new(&self.state.style, &mut *self.backend)
    }

    // ── style ─────────────────────────────────────────────────────────────

    pub fn fill(&mut self, color: impl Into<Color>) {
        self.state.style.set_fill(color);
    }

    pub fn no_fill(&mut self) {
        self.state.style.no_fill();
    }

    pub fn stroke(&mut self, color: impl Into<Color>) {
        self.state.style.set_stroke(color);
    }

    pub fn no_stroke(&mut self) {
        self.state.style.no_stroke();
    }

    pub fn stroke_weight(&mut self, weight: u32) {
        self.state.style.set_stroke_weight(weight);
    }

    pub fn style(&self) -> &StyleState {
        &self.state.style
    }

    // ── shapes ────────────────────────────────────────────────────────────

    /// Fills the whole canvas, discarding what was drawn earlier this frame.
    pub fn background(&mut self, color: impl Into<Color>) {
        self.backend.submit(DrawCmd::Clear(color.into()));
    }

    pub fn circle(&mut self, x: f32, y: f32, radius: f32) {
        self.shapes().circle(Vec2::new(x, y), radius);
    }

    pub fn ellipse(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.shapes().ellipse(Vec2::new(x, y), width, height);
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.shapes().rect(Vec2::new(x, y), width, height);
    }

    pub fn square(&mut self, x: f32, y: f32, extent: f32) {
        self.shapes().square(Vec2::new(x, y), extent);
    }

    pub fn triangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.shapes()
            .triangle(Vec2::new(x1, y1), Vec2::new(x2, y2), Vec2::new(x3, y3));
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.shapes().line(Vec2::new(x1, y1), Vec2::new(x2, y2));
    }

    pub fn point(&mut self, x: f32, y: f32) {
        self.shapes().point(Vec2::new(x, y));
    }

    // ── transform ─────────────────────────────────────────────────────────

    pub fn push_matrix(&mut self) {
        self.backend.submit(DrawCmd::PushMatrix);
    }

    pub fn pop_matrix(&mut self) {
        self.backend.submit(DrawCmd::PopMatrix);
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.backend.submit(DrawCmd::Translate(Vec2::new(dx, dy)));
    }

    /// Clockwise on screen for positive angles.
    pub fn rotate(&mut self, radians: f32) {
        self.backend.submit(DrawCmd::Rotate(radians));
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.backend.submit(DrawCmd::Scale(Vec2::new(sx, sy)));
    }

    // ── input ─────────────────────────────────────────────────────────────

    pub fn mouse_x(&self) -> f32 {
        self.backend.pointer_position().x
    }

    pub fn mouse_y(&self) -> f32 {
        self.backend.pointer_position().y
    }

    /// Pointer x at the previous frame.
    pub fn pmouse_x(&self) -> f32 {
        self.backend.pointer_position().x - self.backend.pointer_delta().x
    }

    pub fn pmouse_y(&self) -> f32 {
        self.backend.pointer_position().y - self.backend.pointer_delta().y
    }

    /// True between `key_pressed` and `key_released` for `key`.
    pub fn is_key_down(&self, key: Key) -> bool {
        self.state.input.is_key_down(key)
    }

    /// Device-level query, independent of the synthesized events.
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.backend.is_button_down(button)
    }

    // ── environment ───────────────────────────────────────────────────────

    pub fn width(&self) -> f32 {
        self.backend.screen_size().width
    }

    pub fn height(&self) -> f32 {
        self.backend.screen_size().height
    }

    pub fn frame_count(&self) -> u64 {
        self.state.frame_count
    }

    /// Milliseconds since the sketch started.
    pub fn millis(&self) -> u64 {
        self.state.started.elapsed().as_millis() as u64
    }

    pub fn frame_rate(&self) -> f32 {
        self.backend.frame_rate()
    }

    /// Seconds the previous frame took.
    pub fn delta_time(&self) -> f32 {
        self.backend.delta_time()
    }

    pub fn set_frame_rate(&mut self, fps: u32) {
        self.backend.set_target_frame_rate(fps);
    }

    pub fn cursor(&mut self) {
        self.backend.set_cursor_visible(true);
    }

    pub fn no_cursor(&mut self) {
        self.backend.set_cursor_visible(false);
    }

    pub fn toggle_fullscreen(&mut self) {
        self.backend.toggle_fullscreen();
    }

    /// Blocks the loop thread. Stalls the whole sketch, input included.
    pub fn delay(&self, millis: u64) {
        std::thread::sleep(Duration::from_millis(millis));
    }

    // ── calendar ──────────────────────────────────────────────────────────
    // Local wall-clock time, read fresh on every call.

    pub fn year(&self) -> i32 {
        Local::now().year()
    }

    /// `1..=12`.
    pub fn month(&self) -> u32 {
        Local::now().month()
    }

    pub fn day(&self) -> u32 {
        Local::now().day()
    }

    /// `0..=23`.
    pub fn hour(&self) -> u32 {
        Local::now().hour()
    }

    pub fn minute(&self) -> u32 {
        Local::now().minute()
    }

    pub fn second(&self) -> u32 {
        Local::now().second()
    }

    // ── random ────────────────────────────────────────────────────────────

    /// Uniform in `[0, 1)`.
    pub fn random_unit(&mut self) -> f32 {
        self.state.random.unit()
    }

    /// Uniform in `[0, high)`.
    pub fn random(&mut self, high: f32) -> f32 {
        self.state.random.below(high)
    }

    /// Uniform in `[low, high)`.
    pub fn random_range(&mut self, low: f32, high: f32) -> f32 {
        self.state.random.range(low, high)
    }

    pub fn random_gaussian(&mut self) -> f32 {
        self.state.random.gaussian()
    }

    pub fn random_seed(&mut self, seed: u64) {
        self.state.random.reseed(seed);
    }

    /// Simplex noise at `(x, y)`, in `[-1, 1]`. Nearby inputs give nearby values.
    pub fn noise(&self, x: f32, y: f32) -> f32 {
        self.state.noise.sample(x, y)
    }

    pub fn noise_seed(&mut self, seed: u64) {
        self.state.noise.reseed(seed);
    }
}
