use anyhow::{Context, Result};

use super::app::Sketch;
use super::backend::Backend;
use super::config::SketchConfig;
use super::ctx::{Graphics, SketchState};

/// Lifecycle of a [`Runtime`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Uninitialized,
    Running,
    Terminated,
}

/// Frame loop driver.
///
/// Owns the backend and the sketch state. One `run` per runtime:
///
/// ```text
/// init backend → setup → loop { input → begin → draw → end → should_close? } → close
/// ```
pub struct Runtime<B: Backend> {
    backend: B,
    config: SketchConfig,
    state: SketchState,
    phase: Phase,
}

impl<B: Backend> Runtime<B> {
    pub fn new(backend: B, config: SketchConfig) -> Self {
        let state = SketchState::new(config.seed);
        Self {
            backend,
            config,
            state,
            phase: Phase::Uninitialized,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> &SketchState {
        &self.state
    }

    /// Runs `sketch` until the backend reports it should close.
    ///
    /// Backend initialization failures abort before `setup`. Errors from the sketch or
    /// from presenting a frame end the loop; the backend is closed either way and the
    /// error is returned.
    pub fn run<S: Sketch>(&mut self, sketch: &mut S) -> Result<()> {
        anyhow::ensure!(
            self.phase == Phase::Uninitialized,
            "sketch runtime already used (phase: {:?})",
            self.phase
        );

        if let Err(e) = self.backend.init(&self.config.window) {
            self.phase = Phase::Terminated;
            log::error!("backend initialization failed: {e:#}");
            return Err(e.context("failed to initialize sketch backend"));
        }

        self.phase = Phase::Running;
        log::info!(
            "sketch '{}' running ({}x{})",
            self.config.window.title,
            self.config.window.width,
            self.config.window.height
        );

        let result = self.drive(sketch);

        self.backend.close();
        self.phase = Phase::Terminated;

        match &result {
            Ok(()) => log::info!("sketch closed after {} frames", self.state.frame_count),
            Err(e) => log::error!("sketch stopped at frame {}: {e:#}", self.state.frame_count),
        }

        result
    }

    fn drive<S: Sketch>(&mut self, sketch: &mut S) -> Result<()> {
        if let Some(fps) = self.config.target_frame_rate {
            self.backend.set_target_frame_rate(fps);
        }

        self.state.started = std::time::Instant::now();
        sketch
            .setup(&mut Graphics::new(&mut self.backend, &mut self.state))
            .context("sketch setup failed")?;
        log::debug!("setup complete");

        loop {
            self.state.frame_count += 1;
            let frame = self.state.frame_count;

            self.state.input.synthesize(&mut self.backend, sketch);

            self.backend.begin_frame();
            sketch
                .draw(&mut Graphics::new(&mut self.backend, &mut self.state))
                .with_context(|| format!("sketch draw failed at frame {frame}"))?;
            self.backend.end_frame()?;

            if self.backend.should_close() {
                log::debug!("exit requested at frame {frame}");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use anyhow::bail;

    use super::*;
    use crate::coords::{Vec2, Viewport};
    use crate::core::WindowConfig;
    use crate::input::{InputHandler, InputPoll, Key, MouseButton};
    use crate::paint::Color;
    use crate::scene::{DrawCmd, DrawList, Rasterizer};

    // ── scripted backend ──────────────────────────────────────────────────

    /// Raw input for one frame, applied at the end of the previous frame's poll.
    #[derive(Default, Clone)]
    struct FrameInput {
        keys: Vec<Key>,
        release_keys: Vec<Key>,
        press_buttons: Vec<MouseButton>,
        release_buttons: Vec<MouseButton>,
        delta: Vec2,
    }

    #[derive(Default)]
    struct ScriptedBackend {
        log: Vec<String>,
        /// Frames to run before `should_close` returns true.
        frames_left: u32,
        fail_init: bool,
        script: VecDeque<FrameInput>,

        key_queue: VecDeque<Key>,
        keys_held: BTreeSet<Key>,
        buttons_held: BTreeSet<MouseButton>,
        button_edges: BTreeSet<MouseButton>,
        delta: Vec2,
        pointer: Vec2,

        current: DrawList,
        frames: Vec<Vec<DrawCmd>>,
        target_fps: Option<u32>,
    }

    impl ScriptedBackend {
        fn frames(n: u32) -> Self {
            Self { frames_left: n, ..Self::default() }
        }

        fn poll(&mut self) {
            self.key_queue.clear();
            self.button_edges.clear();
            self.delta = Vec2::zero();

            let Some(input) = self.script.pop_front() else { return };
            for k in input.keys {
                self.key_queue.push_back(k);
                self.keys_held.insert(k);
            }
            for k in input.release_keys {
                self.keys_held.remove(&k);
            }
            for b in input.press_buttons {
                self.button_edges.insert(b);
                self.buttons_held.insert(b);
            }
            for b in input.release_buttons {
                self.buttons_held.remove(&b);
            }
            self.delta = input.delta;
            self.pointer = self.pointer + input.delta;
        }
    }

    impl InputPoll for ScriptedBackend {
        fn pop_pressed_key(&mut self) -> Option<Key> {
            self.key_queue.pop_front()
        }
        fn is_key_up(&self, key: Key) -> bool {
            !self.keys_held.contains(&key)
        }
        fn is_button_pressed(&self, b: MouseButton) -> bool {
            self.button_edges.contains(&b)
        }
        fn is_button_down(&self, b: MouseButton) -> bool {
            self.buttons_held.contains(&b)
        }
        fn pointer_delta(&self) -> Vec2 {
            self.delta
        }
        fn wheel_delta(&self) -> Vec2 {
            Vec2::zero()
        }
    }

    impl Rasterizer for ScriptedBackend {
        fn submit(&mut self, cmd: DrawCmd) {
            self.current.push(cmd);
        }
    }

    impl Backend for ScriptedBackend {
        fn init(&mut self, _config: &WindowConfig) -> Result<()> {
            self.log.push("init".into());
            if self.fail_init {
                bail!("no display");
            }
            self.poll();
            Ok(())
        }
        fn should_close(&mut self) -> bool {
            self.frames_left == 0
        }
        fn close(&mut self) {
            self.log.push("close".into());
        }
        fn toggle_fullscreen(&mut self) {}
        fn screen_size(&self) -> Viewport {
            Viewport::new(640.0, 480.0)
        }
        fn begin_frame(&mut self) {
            self.log.push("begin".into());
        }
        fn end_frame(&mut self) -> Result<()> {
            self.log.push("end".into());
            self.frames.push(self.current.take());
            self.frames_left = self.frames_left.saturating_sub(1);
            self.poll();
            Ok(())
        }
        fn set_target_frame_rate(&mut self, fps: u32) {
            self.target_fps = Some(fps);
        }
        fn frame_rate(&self) -> f32 {
            60.0
        }
        fn delta_time(&self) -> f32 {
            if self.frames.is_empty() { 0.0 } else { 1.0 / 60.0 }
        }
        fn set_cursor_visible(&mut self, _visible: bool) {}
        fn pointer_position(&self) -> Vec2 {
            self.pointer
        }
    }

    // ── sketches ──────────────────────────────────────────────────────────

    #[derive(Default)]
    struct Tracer {
        calls: Vec<String>,
        fail_at: Option<u64>,
    }

    impl InputHandler for Tracer {
        fn key_pressed(&mut self, key: Key) {
            self.calls.push(format!("key_pressed {key}"));
        }
        fn key_released(&mut self, key: Key) {
            self.calls.push(format!("key_released {key}"));
        }
        fn mouse_clicked(&mut self, b: MouseButton) {
            self.calls.push(format!("clicked {b}"));
        }
        fn mouse_pressed(&mut self, b: MouseButton) {
            self.calls.push(format!("pressed {b}"));
        }
        fn mouse_released(&mut self, b: MouseButton) {
            self.calls.push(format!("released {b}"));
        }
        fn mouse_moved(&mut self, d: Vec2) {
            self.calls.push(format!("moved {} {}", d.x, d.y));
        }
    }

    impl Sketch for Tracer {
        fn setup(&mut self, g: &mut Graphics<'_>) -> Result<()> {
            self.calls.push(format!("setup {}", g.frame_count()));
            g.set_frame_rate(30);
            Ok(())
        }

        fn draw(&mut self, g: &mut Graphics<'_>) -> Result<()> {
            self.calls.push(format!("draw {}", g.frame_count()));
            if self.fail_at == Some(g.frame_count()) {
                bail!("boom");
            }
            Ok(())
        }
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn setup_once_then_bracketed_draws() {
        let mut rt = Runtime::new(ScriptedBackend::frames(3), SketchConfig::default());
        let mut sketch = Tracer::default();

        assert_eq!(rt.phase(), Phase::Uninitialized);
        rt.run(&mut sketch).unwrap();
        assert_eq!(rt.phase(), Phase::Terminated);

        assert_eq!(sketch.calls, vec!["setup 0", "draw 1", "draw 2", "draw 3"]);
        assert_eq!(
            rt.backend().log,
            vec!["init", "begin", "end", "begin", "end", "begin", "end", "close"]
        );
        assert_eq!(rt.state().frame_count, 3);
    }

    #[test]
    fn configured_frame_rate_applies_before_setup() {
        let config = SketchConfig::new().frame_rate(24);
        let mut rt = Runtime::new(ScriptedBackend::frames(1), config);

        struct Check;
        impl InputHandler for Check {}
        impl Sketch for Check {
            fn setup(&mut self, _g: &mut Graphics<'_>) -> Result<()> {
                Ok(())
            }
        }

        rt.run(&mut Check).unwrap();
        assert_eq!(rt.backend().target_fps, Some(24));
    }

    #[test]
    fn init_failure_skips_setup() {
        let backend = ScriptedBackend { fail_init: true, ..ScriptedBackend::frames(3) };
        let mut rt = Runtime::new(backend, SketchConfig::default());
        let mut sketch = Tracer::default();

        let err = rt.run(&mut sketch).unwrap_err();
        assert!(format!("{err:#}").contains("no display"));
        assert!(sketch.calls.is_empty());
        assert_eq!(rt.backend().log, vec!["init"]);
        assert_eq!(rt.phase(), Phase::Terminated);
    }

    #[test]
    fn draw_error_closes_backend_and_surfaces() {
        let mut rt = Runtime::new(ScriptedBackend::frames(10), SketchConfig::default());
        let mut sketch = Tracer { fail_at: Some(2), ..Tracer::default() };

        let err = rt.run(&mut sketch).unwrap_err();
        assert_eq!(err.root_cause().to_string(), "boom");
        assert_eq!(sketch.calls.last().map(String::as_str), Some("draw 2"));
        assert_eq!(rt.backend().log.last().map(String::as_str), Some("close"));
        assert_eq!(rt.phase(), Phase::Terminated);
    }

    #[test]
    fn second_run_is_rejected_without_callbacks() {
        let mut rt = Runtime::new(ScriptedBackend::frames(1), SketchConfig::default());
        let mut sketch = Tracer::default();
        rt.run(&mut sketch).unwrap();
        let before = sketch.calls.len();

        assert!(rt.run(&mut sketch).is_err());
        assert_eq!(sketch.calls.len(), before);
    }

    // ── input ordering ────────────────────────────────────────────────────

    #[test]
    fn input_events_precede_draw_each_frame() {
        let mut backend = ScriptedBackend::frames(4);
        backend.script = VecDeque::from(vec![
            // Polled during init: visible to frame 1.
            FrameInput {
                keys: vec![Key::X],
                press_buttons: vec![MouseButton::Left],
                ..FrameInput::default()
            },
            FrameInput { release_keys: vec![Key::X], ..FrameInput::default() },
            FrameInput { release_buttons: vec![MouseButton::Left], ..FrameInput::default() },
            FrameInput { delta: Vec2::new(2.0, 0.0), ..FrameInput::default() },
        ]);
        let mut rt = Runtime::new(backend, SketchConfig::default());
        let mut sketch = Tracer::default();
        rt.run(&mut sketch).unwrap();

        assert_eq!(
            sketch.calls,
            vec![
                "setup 0",
                "key_pressed X",
                "clicked Left",
                "pressed Left",
                "draw 1",
                "key_released X",
                "pressed Left",
                "draw 2",
                "released Left",
                "draw 3",
                "moved 2 0",
                "draw 4",
            ]
        );
    }

    #[test]
    fn is_key_down_reflects_synthesized_state_during_draw() {
        struct Watch(Vec<bool>);
        impl InputHandler for Watch {}
        impl Sketch for Watch {
            fn draw(&mut self, g: &mut Graphics<'_>) -> Result<()> {
                self.0.push(g.is_key_down(Key::Space));
                Ok(())
            }
        }

        let mut backend = ScriptedBackend::frames(3);
        backend.script = VecDeque::from(vec![
            FrameInput { keys: vec![Key::Space], ..FrameInput::default() },
            FrameInput::default(),
            FrameInput { release_keys: vec![Key::Space], ..FrameInput::default() },
        ]);
        let mut rt = Runtime::new(backend, SketchConfig::default());
        let mut sketch = Watch(Vec::new());
        rt.run(&mut sketch).unwrap();

        assert_eq!(sketch.0, vec![true, true, false]);
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn style_persists_across_frames_and_applies_in_order() {
        struct Painter;
        impl InputHandler for Painter {}
        impl Sketch for Painter {
            fn setup(&mut self, g: &mut Graphics<'_>) -> Result<()> {
                g.fill(200);
                g.stroke(10);
                g.stroke_weight(3);
                Ok(())
            }

            fn draw(&mut self, g: &mut Graphics<'_>) -> Result<()> {
                g.background(42);
                g.rect(0.0, 0.0, 20.0, 20.0);
                g.no_stroke();
                g.circle(5.0, 5.0, 4.0);
                g.stroke_weight(3);
                Ok(())
            }
        }

        let mut rt = Runtime::new(ScriptedBackend::frames(2), SketchConfig::default());
        rt.run(&mut Painter).unwrap();

        let expected = vec![
            DrawCmd::Clear(Color::gray(42)),
            DrawCmd::Rect {
                top_left: Vec2::zero(),
                width: 20.0,
                height: 20.0,
                color: Color::gray(10),
            },
            DrawCmd::Rect {
                top_left: Vec2::new(3.0, 3.0),
                width: 14.0,
                height: 14.0,
                color: Color::gray(200),
            },
            DrawCmd::Circle { center: Vec2::new(5.0, 5.0), radius: 4.0, color: Color::gray(200) },
        ];
        assert_eq!(rt.backend().frames, vec![expected.clone(), expected]);
    }

    #[test]
    fn pmouse_is_position_minus_delta() {
        struct Mouse(Vec<(f32, f32)>);
        impl InputHandler for Mouse {}
        impl Sketch for Mouse {
            fn draw(&mut self, g: &mut Graphics<'_>) -> Result<()> {
                self.0.push((g.mouse_x(), g.pmouse_x()));
                Ok(())
            }
        }

        let mut backend = ScriptedBackend::frames(2);
        backend.script = VecDeque::from(vec![
            FrameInput { delta: Vec2::new(10.0, 0.0), ..FrameInput::default() },
            FrameInput { delta: Vec2::new(5.0, 0.0), ..FrameInput::default() },
        ]);
        let mut rt = Runtime::new(backend, SketchConfig::default());
        let mut sketch = Mouse(Vec::new());
        rt.run(&mut sketch).unwrap();

        assert_eq!(sketch.0, vec![(10.0, 0.0), (15.0, 10.0)]);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        struct Dice(Vec<f32>);
        impl InputHandler for Dice {}
        impl Sketch for Dice {
            fn draw(&mut self, g: &mut Graphics<'_>) -> Result<()> {
                self.0.push(g.random(6.0));
                Ok(())
            }
        }

        let run = || {
            let mut rt = Runtime::new(ScriptedBackend::frames(5), SketchConfig::new().seed(11));
            let mut d = Dice(Vec::new());
            rt.run(&mut d).unwrap();
            d.0
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn random_unit_is_seeded_and_in_range() {
        struct Unit(Vec<f32>);
        impl InputHandler for Unit {}
        impl Sketch for Unit {
            fn setup(&mut self, g: &mut Graphics<'_>) -> Result<()> {
                g.random_seed(4);
                Ok(())
            }
            fn draw(&mut self, g: &mut Graphics<'_>) -> Result<()> {
                for _ in 0..50 {
                    self.0.push(g.random_unit());
                }
                Ok(())
            }
        }

        let run = || {
            let mut rt = Runtime::new(ScriptedBackend::frames(2), SketchConfig::default());
            let mut u = Unit(Vec::new());
            rt.run(&mut u).unwrap();
            u.0
        };
        let first = run();
        assert_eq!(first.len(), 100);
        assert!(first.iter().all(|v| (0.0..1.0).contains(v)));
        assert_eq!(first, run());
    }

    #[test]
    fn noise_follows_config_seed_and_noise_seed() {
        #[derive(Default)]
        struct Field {
            samples: Vec<f32>,
            reseed: Option<u64>,
        }
        impl InputHandler for Field {}
        impl Sketch for Field {
            fn setup(&mut self, g: &mut Graphics<'_>) -> Result<()> {
                if let Some(seed) = self.reseed {
                    g.noise_seed(seed);
                }
                Ok(())
            }
            fn draw(&mut self, g: &mut Graphics<'_>) -> Result<()> {
                let t = g.frame_count() as f32 * 0.3;
                self.samples.push(g.noise(t, 1.7));
                Ok(())
            }
        }

        let run = |config: SketchConfig, reseed: Option<u64>| {
            let mut rt = Runtime::new(ScriptedBackend::frames(6), config);
            let mut f = Field { reseed, ..Field::default() };
            rt.run(&mut f).unwrap();
            f.samples
        };

        let seeded = run(SketchConfig::new().seed(21), None);
        assert!(seeded.iter().all(|v| (-1.0..=1.0).contains(v)));
        assert_eq!(seeded, run(SketchConfig::new().seed(21), None));
        assert_eq!(seeded, run(SketchConfig::default(), Some(21)));
        assert_ne!(seeded, run(SketchConfig::new().seed(22), None));
    }

    #[test]
    fn delta_time_and_calendar_reach_the_sketch() {
        #[derive(Default)]
        struct Clock {
            deltas: Vec<f32>,
            months: Vec<u32>,
            hours: Vec<u32>,
        }
        impl InputHandler for Clock {}
        impl Sketch for Clock {
            fn draw(&mut self, g: &mut Graphics<'_>) -> Result<()> {
                self.deltas.push(g.delta_time());
                self.months.push(g.month());
                self.hours.push(g.hour());
                assert!(g.year() >= 2024);
                assert!((1..=31).contains(&g.day()));
                assert!(g.minute() < 60 && g.second() < 61);
                Ok(())
            }
        }

        let mut rt = Runtime::new(ScriptedBackend::frames(2), SketchConfig::default());
        let mut c = Clock::default();
        rt.run(&mut c).unwrap();

        assert_eq!(c.deltas, vec![0.0, 1.0 / 60.0]);
        assert!(c.months.iter().all(|m| (1..=12).contains(m)));
        assert!(c.hours.iter().all(|h| *h < 24));
    }
}
