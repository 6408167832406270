//! Headless walk-cycle driver.
//!
//! Steps the scene at a fixed cadence with scripted camera input and
//! hands every batch to a renderer that only logs. Useful for watching
//! the simulation side of the frame without a window.

extern crate env_logger;
#[macro_use]
extern crate log;
extern crate strider;

use strider::{Batch, Input, Renderer, Scene};

const FRAMES: u32 = 600;
const DT: f32 = 1.0 / 60.0;

struct LogRenderer {
    frames: u32,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, batch: &Batch) {
        self.frames += 1;
        debug!(
            "frame {}: {} line vertices, {} triangle vertices",
            self.frames,
            batch.lines.len(),
            batch.triangles.len()
        );
    }
}

fn main() {
    env_logger::init();

    let mut scene = match Scene::new() {
        Ok(scene) => scene,
        Err(err) => {
            error!("failed to build the figure: {}", err);
            std::process::exit(1);
        }
    };
    let mut input = Input::new();
    let mut renderer = LogRenderer { frames: 0 };

    for frame in 0..FRAMES {
        // lazy orbit while the figure walks, with an occasional zoom
        input.set_trigger(true);
        input.pointer_moved([1.5, 0.0]);
        if frame % 120 == 0 {
            input.wheel_scrolled(-1.0);
        }

        let batch = scene.advance(frame as f32 * DT, &input, 1280.0 / 720.0);
        renderer.draw(&batch);
        input.reset();
    }

    info!(
        "walked {} frames at {:.0} fps cadence, final yaw {:.1} deg",
        FRAMES,
        1.0 / DT,
        scene.orbit.yaw()
    );
}
