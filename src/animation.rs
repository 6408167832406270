//! Procedural walk-cycle animation.
//!
//! A [`Gait`](struct.Gait.html) is a pure function of elapsed time: every
//! joint angle is a sinusoid of one shared phase, so re-evaluating at the
//! same `t` always reproduces the same pose. There is no state machine
//! and no blending; restarting the clock restarts the walk.
//!
//! ```rust
//! # let mut skeleton = strider::Rig::new().build().unwrap();
//! let gait = strider::Gait::default();
//! gait.pose(&mut skeleton, 0.25);
//! ```

use std::f32::consts::PI;

use skeleton::Skeleton;

/// Pelvis roll around Z, degrees.
const PELVIS_ROLL: f32 = 3.0;
/// Spine counter-tilt around X, degrees.
const SPINE_TILT: f32 = 5.0;
/// Neck counter-tilt around X, degrees.
const NECK_TILT: f32 = -3.0;
/// Head counter-tilt around X, degrees.
const HEAD_TILT: f32 = 2.0;
/// Hip swing amplitude, degrees.
const HIP_SWING: f32 = 30.0;
/// Knee flexion amplitude, degrees; knees only bend forward.
const KNEE_FLEX: f32 = 25.0;
/// Ankle wobble amplitude, degrees.
const ANKLE_WOBBLE: f32 = 5.0;
/// Ankle wobble phase lead, radians.
const ANKLE_LEAD: f32 = 0.4;
/// Shoulder swing amplitude, degrees.
const SHOULDER_SWING: f32 = 35.0;
/// Elbow flexion amplitude, degrees; elbows only bend forward.
const ELBOW_FLEX: f32 = 10.0;
/// Wrist wobble amplitude, degrees.
const WRIST_WOBBLE: f32 = 5.0;
/// Wrist wobble phase lead, radians.
const WRIST_LEAD: f32 = 1.0;

/// Half-rectified sine; flexion is one-directional and never passes
/// straight.
fn half_wave(x: f32) -> f32 {
    x.sin().max(0.0)
}

/// Repeating gait generator.
///
/// Legs swing in anti-phase, arms swing opposite the legs, and the
/// torso counter-tilts at half rate. Knee and elbow flexion use a
/// half-rectified sine so those joints never hyperextend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gait {
    /// Walk cadence in cycles per second.
    pub speed: f32,
}

impl Default for Gait {
    fn default() -> Self {
        Gait { speed: 1.6 }
    }
}

impl Gait {
    /// Cyclic gait parameter at `t` seconds.
    pub fn phase(&self, t: f32) -> f32 {
        t * self.speed * 2.0 * PI
    }

    /// Seconds until the full pose repeats. The torso tilts run at half
    /// rate, so one repeat spans two leg cycles.
    pub fn period(&self) -> f32 {
        2.0 / self.speed
    }

    /// Pose the skeleton for time `t` and propagate world transforms.
    pub fn pose(
        &self,
        skeleton: &mut Skeleton,
        t: f32,
    ) {
        use skeleton::BoneName::*;

        let phase = self.phase(t);
        let sway = (0.5 * phase).sin();

        skeleton.set_rotation(Pelvis, [0.0, 0.0, PELVIS_ROLL * sway]);
        skeleton.set_rotation(Spine, [SPINE_TILT * sway, 0.0, 0.0]);
        skeleton.set_rotation(Neck, [NECK_TILT * sway, 0.0, 0.0]);
        skeleton.set_rotation(Head, [HEAD_TILT * sway, 0.0, 0.0]);

        let hip = HIP_SWING * phase.sin();
        skeleton.set_rotation(HipLeft, [hip, 0.0, 0.0]);
        skeleton.set_rotation(KneeLeft, [-KNEE_FLEX * half_wave(phase), 0.0, 0.0]);
        skeleton.set_rotation(
            AnkleLeft,
            [ANKLE_WOBBLE * (phase + ANKLE_LEAD).sin(), 0.0, 0.0],
        );

        skeleton.set_rotation(HipRight, [-hip, 0.0, 0.0]);
        skeleton.set_rotation(KneeRight, [-KNEE_FLEX * half_wave(phase + PI), 0.0, 0.0]);
        skeleton.set_rotation(
            AnkleRight,
            [ANKLE_WOBBLE * (phase + PI + ANKLE_LEAD).sin(), 0.0, 0.0],
        );

        let arm = SHOULDER_SWING * (phase + PI).sin();
        skeleton.set_rotation(ShoulderLeft, [arm, 0.0, 0.0]);
        skeleton.set_rotation(ElbowLeft, [-ELBOW_FLEX * half_wave(phase + PI), 0.0, 0.0]);
        skeleton.set_rotation(
            WristLeft,
            [WRIST_WOBBLE * (phase + WRIST_LEAD).sin(), 0.0, 0.0],
        );

        skeleton.set_rotation(ShoulderRight, [-arm, 0.0, 0.0]);
        skeleton.set_rotation(ElbowRight, [-ELBOW_FLEX * half_wave(phase), 0.0, 0.0]);
        skeleton.set_rotation(
            WristRight,
            [WRIST_WOBBLE * (phase + PI + WRIST_LEAD).sin(), 0.0, 0.0],
        );

        skeleton.update_world();
    }
}
