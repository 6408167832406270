//! Bone hierarchy and world-transform propagation.
//!
//! A [`Skeleton`](struct.Skeleton.html) is a forest stored as a flat
//! ordered sequence: every bone's parent precedes it, so recomputing
//! world transforms is a single forward pass. Topology is fixed at
//! construction; only local rotations change afterwards.

use cgmath::{Deg, Matrix4, Point3, SquareMatrix, Vector3, Zero};
use cgmath::Transform as Transform_;
use mint;

/// Number of bones in a complete figure.
pub const BONE_COUNT: usize = 16;

/// Identifier for every bone of the figure.
///
/// Animation and geometry code addresses bones through these names; the
/// name-to-index resolution happens once, inside [`Builder::finish`].
///
/// [`Builder::finish`]: struct.Builder.html#method.finish
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BoneName {
    Pelvis,
    Spine,
    Neck,
    Head,
    HipLeft,
    KneeLeft,
    AnkleLeft,
    HipRight,
    KneeRight,
    AnkleRight,
    ShoulderLeft,
    ElbowLeft,
    WristLeft,
    ShoulderRight,
    ElbowRight,
    WristRight,
}

impl BoneName {
    /// Every bone name, in canonical rig construction order.
    pub const ALL: [BoneName; BONE_COUNT] = [
        BoneName::Pelvis,
        BoneName::Spine,
        BoneName::Neck,
        BoneName::Head,
        BoneName::HipLeft,
        BoneName::KneeLeft,
        BoneName::AnkleLeft,
        BoneName::HipRight,
        BoneName::KneeRight,
        BoneName::AnkleRight,
        BoneName::ShoulderLeft,
        BoneName::ElbowLeft,
        BoneName::WristLeft,
        BoneName::ShoulderRight,
        BoneName::ElbowRight,
        BoneName::WristRight,
    ];

    fn slot(&self) -> usize {
        *self as usize
    }
}

quick_error! {
    /// Errors raised while assembling a skeleton.
    #[derive(Debug, PartialEq)]
    pub enum Error {
        /// A bone referenced a parent that has not been added yet.
        Orphan(child: BoneName, parent: BoneName) {
            description("bone added before its parent")
            display("bone {:?} added before its parent {:?}", child, parent)
        }
        /// The same bone name was registered twice.
        Duplicate(name: BoneName) {
            description("bone name registered twice")
            display("bone {:?} registered twice", name)
        }
        /// The builder finished without registering every bone.
        Missing(name: BoneName) {
            description("figure is missing a bone")
            display("figure is missing bone {:?}", name)
        }
    }
}

/// A single rigid segment of the figure.
///
/// Bones extend along their own local negative-Y axis. A child's bind
/// offset decides where it attaches, independently of the parent's
/// endpoint, so [`endpoint`](#method.endpoint) and the child joint
/// usually differ.
#[derive(Clone, Debug)]
pub struct Bone {
    pub(crate) name: BoneName,
    pub(crate) parent: Option<usize>,
    pub(crate) offset: Vector3<f32>,
    /// Local rotation, Euler XYZ in degrees.
    pub(crate) rotation: Vector3<f32>,
    pub(crate) length: f32,
    pub(crate) world: Matrix4<f32>,
}

impl Bone {
    /// This bone's identifier.
    pub fn name(&self) -> BoneName {
        self.name
    }

    /// Visual length along the bone's local negative-Y axis.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Current local rotation (Euler XYZ, degrees).
    pub fn rotation(&self) -> mint::Vector3<f32> {
        let v: [f32; 3] = self.rotation.into();
        v.into()
    }

    /// World-space joint position: the translation column of the world
    /// transform.
    pub fn joint(&self) -> mint::Point3<f32> {
        let p: [f32; 3] = self.world.w.truncate().into();
        p.into()
    }

    /// World-space endpoint: the world transform applied to the local
    /// point `(0, -length, 0)`.
    pub fn endpoint(&self) -> mint::Point3<f32> {
        let p = self.world.transform_point(Point3::new(0.0, -self.length, 0.0));
        let p: [f32; 3] = p.into();
        p.into()
    }

    /// World transform of this bone's joint frame.
    pub fn world(&self) -> mint::ColumnMatrix4<f32> {
        let m: [[f32; 4]; 4] = self.world.into();
        m.into()
    }
}

/// `Rz * Ry * Rx`: intrinsic rotation of the local frame around X, then
/// Y, then Z. Every rotation in the crate goes through this one
/// composition; the pose depends on the exact order.
fn euler_xyz(deg: Vector3<f32>) -> Matrix4<f32> {
    let rx = Matrix4::from_angle_x(Deg(deg.x));
    let ry = Matrix4::from_angle_y(Deg(deg.y));
    let rz = Matrix4::from_angle_z(Deg(deg.z));
    rz * ry * rx
}

/// An ordered bone forest with name lookups resolved at build time.
///
/// One skeleton per simulated character. Construct through
/// [`Skeleton::build`](#method.build) or the rig factory in
/// [`rig`](../rig/index.html).
#[derive(Clone, Debug)]
pub struct Skeleton {
    bones: Vec<Bone>,
    lookup: [usize; BONE_COUNT],
}

impl Skeleton {
    /// Start assembling a skeleton.
    pub fn build() -> Builder {
        Builder {
            bones: Vec::with_capacity(BONE_COUNT),
            slots: [None; BONE_COUNT],
        }
    }

    /// All bones, in storage (construction) order.
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    fn index(&self, name: BoneName) -> usize {
        self.lookup[name.slot()]
    }

    /// Look up a bone by name.
    pub fn bone(&self, name: BoneName) -> &Bone {
        &self.bones[self.index(name)]
    }

    /// Overwrite a bone's local rotation (Euler XYZ, degrees). Takes
    /// effect on the next [`update_world`](#method.update_world).
    pub fn set_rotation<V>(
        &mut self,
        name: BoneName,
        euler_deg: V,
    ) where
        V: Into<mint::Vector3<f32>>,
    {
        let index = self.index(name);
        self.bones[index].rotation = Vector3::from(euler_deg.into());
    }

    /// Recompute every world transform, root to leaf.
    ///
    /// Storage order guarantees a parent is processed before its
    /// children, so one forward pass suffices. No caching: every
    /// rotation may change every frame.
    pub fn update_world(&mut self) {
        for i in 0..self.bones.len() {
            let local = Matrix4::from_translation(self.bones[i].offset)
                * euler_xyz(self.bones[i].rotation);
            let world = match self.bones[i].parent {
                Some(p) => self.bones[p].world * local,
                None => local,
            };
            self.bones[i].world = world;
        }
    }
}

/// Assembles a [`Skeleton`](struct.Skeleton.html).
///
/// Parents are referenced by name and must already be present, which
/// pins every parent index below its child's and keeps the forward
/// propagation pass valid.
#[derive(Clone, Debug)]
pub struct Builder {
    bones: Vec<Bone>,
    slots: [Option<usize>; BONE_COUNT],
}

impl Builder {
    /// Append a bone.
    pub fn bone<V>(
        &mut self,
        name: BoneName,
        parent: Option<BoneName>,
        offset: V,
        length: f32,
    ) -> Result<&mut Self, Error>
    where
        V: Into<mint::Vector3<f32>>,
    {
        if self.slots[name.slot()].is_some() {
            return Err(Error::Duplicate(name));
        }
        let parent = match parent {
            Some(p) => match self.slots[p.slot()] {
                Some(index) => Some(index),
                None => return Err(Error::Orphan(name, p)),
            },
            None => None,
        };
        self.slots[name.slot()] = Some(self.bones.len());
        self.bones.push(Bone {
            name,
            parent,
            offset: Vector3::from(offset.into()),
            rotation: Vector3::zero(),
            length,
            world: Matrix4::identity(),
        });
        Ok(self)
    }

    /// Check that every [`BoneName`](enum.BoneName.html) is present and
    /// produce the skeleton, posed at the bind position.
    pub fn finish(&mut self) -> Result<Skeleton, Error> {
        let mut lookup = [0; BONE_COUNT];
        for name in &BoneName::ALL {
            match self.slots[name.slot()] {
                Some(index) => lookup[name.slot()] = index,
                None => return Err(Error::Missing(*name)),
            }
        }
        let mut skeleton = Skeleton {
            bones: self.bones.clone(),
            lookup,
        };
        skeleton.update_world();
        debug!("skeleton assembled: {} bones", skeleton.bones.len());
        Ok(skeleton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig::Rig;

    fn figure() -> Skeleton {
        Rig::new().build().unwrap()
    }

    fn assert_close(p: mint::Point3<f32>, expected: [f32; 3]) {
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
    fn bind_pose_accumulates_offsets() {
        let s = figure();
        assert_close(s.bone(BoneName::Pelvis).joint(), [0.0, 1.3, 0.0]);
        assert_close(s.bone(BoneName::Spine).joint(), [0.0, 1.3, 0.0]);
        assert_close(s.bone(BoneName::Neck).joint(), [0.0, 1.7, 0.0]);
        assert_close(s.bone(BoneName::Head).joint(), [0.0, 1.8, 0.0]);
        assert_close(s.bone(BoneName::HipLeft).joint(), [0.09, 1.0, 0.0]);
        assert_close(s.bone(BoneName::KneeLeft).joint(), [0.09, 0.55, 0.0]);
        assert_close(s.bone(BoneName::AnkleRight).joint(), [-0.09, 0.1, 0.0]);
        assert_close(s.bone(BoneName::ShoulderRight).joint(), [-0.14, 1.7, 0.0]);
    }

    #[test]
    fn endpoint_runs_down_local_y() {
        let s = figure();
        // spine endpoint hangs below its joint while the neck attaches above
        assert_close(s.bone(BoneName::Spine).endpoint(), [0.0, 0.9, 0.0]);
        assert_close(s.bone(BoneName::Neck).joint(), [0.0, 1.7, 0.0]);
    }

    #[test]
    fn euler_axes_do_not_commute() {
        let mut a = figure();
        a.set_rotation(BoneName::Spine, [90.0, 0.0, 0.0]);
        a.update_world();

        let mut b = figure();
        b.set_rotation(BoneName::Spine, [0.0, 90.0, 0.0]);
        b.update_world();

        assert_close(a.bone(BoneName::Neck).joint(), [0.0, 1.3, 0.4]);
        assert_close(b.bone(BoneName::Neck).joint(), [0.0, 1.7, 0.0]);
    }

    #[test]
    fn rotation_composes_z_then_y_then_x() {
        // X then Y applied to the local -Y endpoint lands on -X;
        // the reverse order would leave it on -Z.
        let mut s = figure();
        s.set_rotation(BoneName::Spine, [90.0, 90.0, 0.0]);
        s.update_world();
        assert_close(s.bone(BoneName::Spine).endpoint(), [-0.4, 1.3, 0.0]);
    }

    #[test]
    fn builder_rejects_orphans() {
        let err = Skeleton::build()
            .bone(BoneName::Spine, Some(BoneName::Pelvis), [0.0, 0.0, 0.0], 0.4)
            .unwrap_err();
        assert_eq!(err, Error::Orphan(BoneName::Spine, BoneName::Pelvis));
    }

    #[test]
    fn builder_rejects_duplicates() {
        let mut builder = Skeleton::build();
        builder
            .bone(BoneName::Pelvis, None, [0.0, 1.3, 0.0], 0.0)
            .unwrap();
        let err = builder
            .bone(BoneName::Pelvis, None, [0.0, 0.0, 0.0], 0.0)
            .unwrap_err();
        assert_eq!(err, Error::Duplicate(BoneName::Pelvis));
    }

    #[test]
    fn builder_rejects_incomplete_figures() {
        let mut builder = Skeleton::build();
        builder
            .bone(BoneName::Pelvis, None, [0.0, 1.3, 0.0], 0.0)
            .unwrap();
        let err = builder.finish().unwrap_err();
        assert_eq!(err, Error::Missing(BoneName::Spine));
    }
}
