//! Projection and orbit camera.

use cgmath::{perspective, Deg, Matrix4, Point3, Vector3};
use mint;

use input::Input;

/// Pitch stays clear of the poles.
const PITCH_LIMIT: f32 = 85.0;
/// Closest allowed orbit distance.
const DISTANCE_MIN: f32 = 1.2;
/// Farthest allowed orbit distance.
const DISTANCE_MAX: f32 = 8.0;

/// Generic trait for graphics projections.
pub trait Projection {
    /// Represents the projection as a projection matrix.
    fn matrix(&self, aspect: f32) -> mint::ColumnMatrix4<f32>;
}

/// Perspective projection parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Perspective {
    /// Vertical field of view in degrees.
    /// Note: the horizontal FOV is computed based on the aspect.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Perspective {
            fov_y: 60.0,
            near: 0.05,
            far: 50.0,
        }
    }
}

impl Projection for Perspective {
    fn matrix(&self, aspect: f32) -> mint::ColumnMatrix4<f32> {
        let m: [[f32; 4]; 4] = perspective(Deg(self.fov_y), aspect, self.near, self.far).into();
        m.into()
    }
}

/// Simple controls for an orbital camera.
///
/// The camera circles a fixed target. Hold the drag trigger to rotate,
/// scroll to adjust distance; pitch and distance are clamped so the
/// figure never leaves view.
#[derive(Clone, Debug)]
pub struct Orbit {
    yaw: f32,
    pitch: f32,
    distance: f32,
    target: Point3<f32>,
    rotate_speed: f32,
    zoom_speed: f32,
}

/// Helper struct to construct [`Orbit`](struct.Orbit.html) with desired
/// settings.
#[derive(Clone, Debug)]
pub struct Builder {
    yaw: f32,
    pitch: f32,
    distance: f32,
    target: mint::Point3<f32>,
    rotate_speed: f32,
    zoom_speed: f32,
}

impl Builder {
    /// Create a new `Builder` with default values.
    pub fn new() -> Self {
        Builder {
            yaw: 30.0,
            pitch: -15.0,
            distance: 3.0,
            target: [0.0, 1.0, 0.0].into(),
            rotate_speed: 0.3,
            zoom_speed: 0.2,
        }
    }

    /// Set the initial yaw in degrees. Defaults to 30.
    pub fn yaw(
        &mut self,
        deg: f32,
    ) -> &mut Self {
        self.yaw = deg;
        self
    }

    /// Set the initial pitch in degrees, clamped to ±85. Defaults to -15.
    pub fn pitch(
        &mut self,
        deg: f32,
    ) -> &mut Self {
        self.pitch = deg.min(PITCH_LIMIT).max(-PITCH_LIMIT);
        self
    }

    /// Set the initial orbit distance, clamped to [1.2, 8.0]. Defaults
    /// to 3.
    pub fn distance(
        &mut self,
        distance: f32,
    ) -> &mut Self {
        self.distance = distance.min(DISTANCE_MAX).max(DISTANCE_MIN);
        self
    }

    /// Set the look-at target. Defaults to `(0, 1, 0)`.
    pub fn target<P>(
        &mut self,
        target: P,
    ) -> &mut Self
    where
        P: Into<mint::Point3<f32>>,
    {
        self.target = target.into();
        self
    }

    /// Degrees of rotation per pixel of pointer motion. Defaults to 0.3.
    pub fn rotate_speed(
        &mut self,
        speed: f32,
    ) -> &mut Self {
        self.rotate_speed = speed;
        self
    }

    /// Distance change per wheel line. Defaults to 0.2.
    pub fn zoom_speed(
        &mut self,
        speed: f32,
    ) -> &mut Self {
        self.zoom_speed = speed;
        self
    }

    /// Finalize the builder and create a new `Orbit`.
    pub fn build(&mut self) -> Orbit {
        Orbit {
            yaw: self.yaw,
            pitch: self.pitch,
            distance: self.distance,
            target: self.target.into(),
            rotate_speed: self.rotate_speed,
            zoom_speed: self.zoom_speed,
        }
    }
}

impl Orbit {
    /// Create a new `Builder` with default values.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Current yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current orbit distance.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Apply one frame of input: pointer motion rotates while the
    /// trigger is held, the wheel zooms regardless.
    pub fn update(
        &mut self,
        input: &Input,
    ) {
        if input.trigger() {
            let delta = input.pointer_delta();
            self.yaw += self.rotate_speed * delta.x;
            self.pitch = (self.pitch + self.rotate_speed * delta.y)
                .min(PITCH_LIMIT)
                .max(-PITCH_LIMIT);
        }
        let wheel = input.wheel();
        if wheel.abs() > 1e-6 {
            self.distance = (self.distance - self.zoom_speed * wheel)
                .min(DISTANCE_MAX)
                .max(DISTANCE_MIN);
        }
    }

    /// Right-handed view matrix looking at the target, +Y up.
    pub fn view(&self) -> mint::ColumnMatrix4<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        let dir = Vector3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch);
        let eye = self.target - dir * self.distance;
        let m: [[f32; 4]; 4] = Matrix4::look_at_rh(eye, self.target, Vector3::unit_y()).into();
        m.into()
    }
}

impl Default for Orbit {
    fn default() -> Self {
        Builder::new().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Transform;

    fn to_cgmath(m: mint::ColumnMatrix4<f32>) -> Matrix4<f32> {
        let m: [[f32; 4]; 4] = m.into();
        Matrix4::from(m)
    }

    fn assert_close(p: Point3<f32>, expected: [f32; 3]) {
        let eps = 1e-5;
        assert!(
            (p.x - expected[0]).abs() < eps
                && (p.y - expected[1]).abs() < eps
                && (p.z - expected[2]).abs() < eps,
            "{:?} != {:?}",
            p,
            expected
        );
    }

    #[test]
    fn view_maps_eye_to_origin_and_target_down_negative_z() {
        let orbit = Orbit::builder()
            .yaw(0.0)
            .pitch(0.0)
            .distance(3.0)
            .target([0.0, 1.0, 0.0])
            .build();
        let view = to_cgmath(orbit.view());
        assert_close(view.transform_point(Point3::new(-3.0, 1.0, 0.0)), [0.0, 0.0, 0.0]);
        assert_close(view.transform_point(Point3::new(0.0, 1.0, 0.0)), [0.0, 0.0, -3.0]);
    }

    #[test]
    fn update_clamps_pitch_and_distance() {
        let mut orbit = Orbit::builder().build();
        let mut input = Input::new();
        input.set_trigger(true);
        input.pointer_moved([0.0, 1000.0]);
        input.wheel_scrolled(500.0);
        orbit.update(&input);
        assert_eq!(orbit.pitch(), 85.0);
        assert_eq!(orbit.distance(), 1.2);

        input.reset();
        input.pointer_moved([0.0, -10000.0]);
        input.wheel_scrolled(-500.0);
        orbit.update(&input);
        assert_eq!(orbit.pitch(), -85.0);
        assert_eq!(orbit.distance(), 8.0);
    }

    #[test]
    fn released_trigger_ignores_pointer_motion() {
        let mut orbit = Orbit::builder().build();
        let mut input = Input::new();
        input.pointer_moved([40.0, 25.0]);
        orbit.update(&input);
        assert_eq!(orbit.yaw(), 30.0);
        assert_eq!(orbit.pitch(), -15.0);

        // the wheel still zooms
        input.wheel_scrolled(1.0);
        orbit.update(&input);
        assert!((orbit.distance() - 2.8).abs() < 1e-6);
    }

    #[test]
    fn pointer_motion_rotates_while_held() {
        let mut orbit = Orbit::builder().build();
        let mut input = Input::new();
        input.set_trigger(true);
        input.pointer_moved([10.0, -20.0]);
        orbit.update(&input);
        assert!((orbit.yaw() - 33.0).abs() < 1e-6);
        assert!((orbit.pitch() + 21.0).abs() < 1e-6);
    }

    #[test]
    fn perspective_matrix_follows_the_aspect() {
        let aspect = 1.5;
        let m: [[f32; 4]; 4] = Perspective::default().matrix(aspect).into();
        let f = 1.0 / (30.0_f32.to_radians().tan());
        assert!((m[0][0] - f / aspect).abs() < 1e-5);
        assert!((m[1][1] - f).abs() < 1e-5);
    }
}
