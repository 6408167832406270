//! Per-frame orchestration.
//!
//! [`Scene`](struct.Scene.html) owns the only mutable state in the
//! crate and runs the frame sequence: apply input to the camera, pose
//! the skeleton, propagate transforms, rebuild geometry, derive the
//! matrices. Single-threaded by construction; the caller's frame loop
//! is the sole owner.

use animation::Gait;
use camera::{Orbit, Perspective, Projection};
use geometry;
use input::Input;
use render::Batch;
use rig::Rig;
use skeleton::{Error, Skeleton};

/// Latitude bands of the head sphere.
const HEAD_STACKS: usize = 16;
/// Longitude divisions of the head sphere.
const HEAD_SLICES: usize = 24;
/// Aspect used when the viewport reports a degenerate size.
const FALLBACK_ASPECT: f32 = 1.6;

/// A walking figure with its camera. One instance per simulated
/// character.
pub struct Scene {
    skeleton: Skeleton,
    /// Gait parameters; tweak `speed` to change cadence.
    pub gait: Gait,
    /// Orbit camera fed from per-frame input.
    pub orbit: Orbit,
    projection: Perspective,
}

impl Scene {
    /// Build the default walker.
    pub fn new() -> Result<Self, Error> {
        Ok(Scene {
            skeleton: Rig::new().build()?,
            gait: Gait::default(),
            orbit: Orbit::builder().build(),
            projection: Perspective::default(),
        })
    }

    /// The figure in its current pose.
    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// Run one frame at `t` seconds of elapsed time.
    ///
    /// `aspect` is viewport width over height; a degenerate value falls
    /// back to 16:10.
    pub fn advance(
        &mut self,
        t: f32,
        input: &Input,
        aspect: f32,
    ) -> Batch {
        self.orbit.update(input);
        self.gait.pose(&mut self.skeleton, t);

        let mut lines = geometry::skeleton_lines(&self.skeleton);
        lines.extend(geometry::ground_grid());
        let triangles = geometry::head_sphere(&self.skeleton, HEAD_STACKS, HEAD_SLICES);

        let aspect = if aspect > 0.0 {
            aspect
        } else {
            warn!("degenerate viewport aspect, using {}", FALLBACK_ASPECT);
            FALLBACK_ASPECT
        };

        Batch {
            lines,
            triangles,
            view: self.orbit.view(),
            projection: self.projection.matrix(aspect),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_batch_sizes() {
        let mut scene = Scene::new().unwrap();
        let input = Input::new();
        let batch = scene.advance(0.5, &input, 16.0 / 9.0);
        // 14 bone segments plus 82 grid lines
        assert_eq!(batch.lines.len(), 28 + 164);
        assert_eq!(batch.triangles.len(), HEAD_STACKS * HEAD_SLICES * 6);
        assert_eq!(batch.vertex_count(), 192 + 2304);
    }

    #[test]
    fn frames_are_deterministic_with_idle_input() {
        let input = Input::new();
        let mut a = Scene::new().unwrap();
        let mut b = Scene::new().unwrap();
        let x = a.advance(1.0, &input, 1.6);
        let y = b.advance(1.0, &input, 1.6);
        assert_eq!(x.lines, y.lines);
        assert_eq!(x.triangles, y.triangles);
    }

    #[test]
    fn degenerate_aspect_falls_back() {
        let input = Input::new();
        let mut scene = Scene::new().unwrap();
        let squashed = scene.advance(0.0, &input, 0.0);
        let fallback = scene.advance(0.0, &input, FALLBACK_ASPECT);
        let a: [[f32; 4]; 4] = squashed.projection.into();
        let b: [[f32; 4]; 4] = fallback.projection.into();
        assert_eq!(a, b);
    }

    #[test]
    fn input_steers_the_camera_between_frames() {
        let mut scene = Scene::new().unwrap();
        let mut input = Input::new();
        input.set_trigger(true);
        input.pointer_moved([10.0, 0.0]);
        scene.advance(0.0, &input, 1.6);
        assert!((scene.orbit.yaw() - 33.0).abs() < 1e-6);
    }
}
