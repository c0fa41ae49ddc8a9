use anyhow::Result;
use easel_engine::prelude::*;

/// Follows the pointer with a stroked circle and logs every input callback.
#[derive(Default)]
struct Follow {
    fullscreen_requested: bool,
}

impl Sketch for Follow {
    fn setup(&mut self, g: &mut Graphics<'_>) -> Result<()> {
        g.set_frame_rate(60);
        Ok(())
    }

    fn draw(&mut self, g: &mut Graphics<'_>) -> Result<()> {
        if std::mem::take(&mut self.fullscreen_requested) {
            g.toggle_fullscreen();
        }

        g.background(42);

        g.fill(255);
        g.stroke((255, 0, 0));
        g.stroke_weight(2);
        let (x, y) = (g.mouse_x(), g.mouse_y());
        g.circle(x, y, 10.0);
        Ok(())
    }
}

impl InputHandler for Follow {
    fn key_pressed(&mut self, key: Key) {
        log::info!("{key} was pressed");
        if key == Key::F11 {
            self.fullscreen_requested = true;
        }
    }

    fn key_released(&mut self, key: Key) {
        log::info!("{key} was released");
    }

    fn mouse_clicked(&mut self, button: MouseButton) {
        log::info!("{button} was clicked");
    }

    fn mouse_dragged(&mut self, button: MouseButton, delta: Vec2) {
        log::info!("{button} dragged by ({}, {})", delta.x, delta.y);
    }

    fn mouse_moved(&mut self, delta: Vec2) {
        log::info!("mouse moved by ({}, {})", delta.x, delta.y);
    }

    fn mouse_pressed(&mut self, button: MouseButton) {
        log::debug!("{button} is pressed");
    }

    fn mouse_released(&mut self, button: MouseButton) {
        log::info!("{button} was released");
    }

    fn mouse_wheel(&mut self, delta: Vec2) {
        log::info!("mouse wheel ({}, {})", delta.x, delta.y);
    }
}

fn main() -> Result<()> {
    let config = SketchConfig::new().title("easel sketch").size(640, 480);
    easel_engine::run(config, Follow::default())
}
