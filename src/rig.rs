//! Fixed human rig factory.
//!
//! Builds the 16-bone stick figure in one canonical order: pelvis root,
//! torso chain, left leg, right leg, left arm, right arm. Left is +X,
//! right is -X, Y is up.

use skeleton::{Error, Skeleton};

/// Hips attach below the raised pelvis root.
const HIP_DROP: f32 = -0.3;

/// Limb dimensions of the figure, in world units.
///
/// The defaults describe the canonical walker: a roughly head-to-toe
/// two-unit figure with the pelvis root at 1.3.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Proportions {
    /// Pelvis root height above the origin.
    pub pelvis_height: f32,
    /// Spine length, pelvis to neck base.
    pub spine: f32,
    /// Neck length.
    pub neck: f32,
    /// Head bone length; also sets the head sphere radius.
    pub head: f32,
    /// Hip to knee.
    pub upper_leg: f32,
    /// Knee to ankle.
    pub lower_leg: f32,
    /// Ankle to toe.
    pub foot: f32,
    /// Shoulder to elbow.
    pub upper_arm: f32,
    /// Elbow to wrist.
    pub lower_arm: f32,
    /// Wrist to fingertip.
    pub hand: f32,
    /// Left-to-right spacing between the hip joints.
    pub hip_width: f32,
    /// Left-to-right spacing between the shoulder joints.
    pub shoulder_width: f32,
}

impl Default for Proportions {
    fn default() -> Self {
        Proportions {
            pelvis_height: 1.3,
            spine: 0.4,
            neck: 0.1,
            head: 0.22,
            upper_leg: 0.45,
            lower_leg: 0.45,
            foot: 0.18,
            upper_arm: 0.30,
            lower_arm: 0.30,
            hand: 0.12,
            hip_width: 0.18,
            shoulder_width: 0.28,
        }
    }
}

/// Helper struct to construct the figure with desired proportions.
#[derive(Clone, Debug)]
pub struct Rig {
    proportions: Proportions,
}

impl Rig {
    /// Create a new `Rig` with default proportions.
    pub fn new() -> Self {
        Rig {
            proportions: Proportions::default(),
        }
    }

    /// Override the limb dimensions.
    pub fn proportions(
        &mut self,
        proportions: Proportions,
    ) -> &mut Self {
        self.proportions = proportions;
        self
    }

    /// Assemble the figure.
    ///
    /// The construction order is a contract: the animator and the
    /// geometry emitters address bones by [`BoneName`], and the names
    /// resolve against exactly this sequence.
    ///
    /// [`BoneName`]: ../skeleton/enum.BoneName.html
    pub fn build(&self) -> Result<Skeleton, Error> {
        use skeleton::BoneName::*;

        let p = self.proportions;
        let hip_x = 0.5 * p.hip_width;
        let shoulder_x = 0.5 * p.shoulder_width;

        let mut builder = Skeleton::build();
        builder
            .bone(Pelvis, None, [0.0, p.pelvis_height, 0.0], 0.0)?
            .bone(Spine, Some(Pelvis), [0.0, 0.0, 0.0], p.spine)?
            .bone(Neck, Some(Spine), [0.0, p.spine, 0.0], p.neck)?
            .bone(Head, Some(Neck), [0.0, p.neck, 0.0], p.head)?
            .bone(HipLeft, Some(Pelvis), [hip_x, HIP_DROP, 0.0], p.upper_leg)?
            .bone(KneeLeft, Some(HipLeft), [0.0, -p.upper_leg, 0.0], p.lower_leg)?
            .bone(AnkleLeft, Some(KneeLeft), [0.0, -p.lower_leg, 0.0], p.foot)?
            .bone(HipRight, Some(Pelvis), [-hip_x, HIP_DROP, 0.0], p.upper_leg)?
            .bone(KneeRight, Some(HipRight), [0.0, -p.upper_leg, 0.0], p.lower_leg)?
            .bone(AnkleRight, Some(KneeRight), [0.0, -p.lower_leg, 0.0], p.foot)?
            .bone(ShoulderLeft, Some(Spine), [shoulder_x, p.spine, 0.0], p.upper_arm)?
            .bone(ElbowLeft, Some(ShoulderLeft), [0.0, -p.upper_arm, 0.0], p.lower_arm)?
            .bone(WristLeft, Some(ElbowLeft), [0.0, -p.lower_arm, 0.0], p.hand)?
            .bone(ShoulderRight, Some(Spine), [-shoulder_x, p.spine, 0.0], p.upper_arm)?
            .bone(ElbowRight, Some(ShoulderRight), [0.0, -p.upper_arm, 0.0], p.lower_arm)?
            .bone(WristRight, Some(ElbowRight), [0.0, -p.lower_arm, 0.0], p.hand)?;
        let skeleton = builder.finish()?;

        info!("built human rig: {} bones", skeleton.bones().len());
        Ok(skeleton)
    }
}

impl Default for Rig {
    fn default() -> Self {
        Rig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skeleton::{BoneName, BONE_COUNT};

    #[test]
    fn builds_complete_figure() {
        let s = Rig::new().build().unwrap();
        assert_eq!(s.bones().len(), BONE_COUNT);
    }

    #[test]
    fn construction_order_is_stable() {
        let s = Rig::new().build().unwrap();
        let order: Vec<BoneName> = s.bones().iter().map(|b| b.name()).collect();
        assert_eq!(&order[..], &BoneName::ALL[..]);
    }

    #[test]
    fn root_is_zero_length() {
        let s = Rig::new().build().unwrap();
        assert_eq!(s.bones()[0].name(), BoneName::Pelvis);
        assert_eq!(s.bones()[0].length(), 0.0);
    }

    #[test]
    fn custom_proportions_flow_through() {
        let mut proportions = Proportions::default();
        proportions.upper_leg = 0.6;
        let s = Rig::new().proportions(proportions).build().unwrap();
        let hip = s.bone(BoneName::HipLeft);
        let knee = s.bone(BoneName::KneeLeft);
        assert_eq!(hip.length(), 0.6);
        assert!((hip.joint().y - knee.joint().y - 0.6).abs() < 1e-5);
    }

    #[test]
    fn left_and_right_mirror_across_x() {
        let s = Rig::new().build().unwrap();
        let left = s.bone(BoneName::ShoulderLeft).joint();
        let right = s.bone(BoneName::ShoulderRight).joint();
        assert_eq!(left.x, -right.x);
        assert_eq!(left.y, right.y);
    }
}
