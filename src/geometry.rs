//! Immediate-mode geometry emitters.
//!
//! Pure functions over a posed [`Skeleton`](../skeleton/struct.Skeleton.html):
//! bone segments and a ground grid as line lists, the head as a solid
//! UV-sphere triangle list. Everything is rebuilt from scratch each
//! frame; with a fixed bone count there is nothing worth caching.

use std::f32::consts::PI;

use cgmath::{EuclideanSpace, Point3};

use render::{Color, Vertex};
use skeleton::{BoneName, Skeleton};

/// Stick color for the bone segments.
pub const BONE_COLOR: Color = [1.0, 0.9, 0.4];
/// Tint of the head sphere.
pub const HEAD_COLOR: Color = [1.0, 0.85, 0.55];
/// Every fifth grid line.
pub const GRID_BRIGHT: Color = [0.2, 0.2, 0.2];
/// The remaining grid lines.
pub const GRID_DIM: Color = [0.08, 0.08, 0.08];

/// Grid half-extent in world units.
const GRID_EXTENT: f32 = 2.0;
/// Spacing between grid lines.
const GRID_STEP: f32 = 0.1;
/// Integer grid steps on either side of the origin.
const GRID_HALF_LINES: i32 = 20;

/// Head sphere radius as a fraction of the head bone length.
const HEAD_RADIUS_SCALE: f32 = 0.6;

fn push_line(
    out: &mut Vec<Vertex>,
    a: Point3<f32>,
    b: Point3<f32>,
    color: Color,
) {
    out.push(Vertex { pos: a.into(), color });
    out.push(Vertex { pos: b.into(), color });
}

/// One segment per bone, joint to endpoint.
///
/// The zero-length pelvis root draws nothing and the head is left to
/// [`head_sphere`](fn.head_sphere.html), so an N-bone figure yields
/// `2 * (N - 2)` vertices.
pub fn skeleton_lines(skeleton: &Skeleton) -> Vec<Vertex> {
    let mut out = Vec::with_capacity((skeleton.bones().len() - 2) * 2);
    for bone in skeleton.bones() {
        match bone.name() {
            BoneName::Pelvis | BoneName::Head => continue,
            _ => {}
        }
        push_line(
            &mut out,
            Point3::from(bone.joint()),
            Point3::from(bone.endpoint()),
            BONE_COLOR,
        );
    }
    out
}

/// Static reference grid on the XZ plane.
///
/// Lines sit at 0.1-unit offsets across a ±2.0 square, one X-parallel
/// and one Z-parallel line per step; steps divisible by five are drawn
/// brighter.
pub fn ground_grid() -> Vec<Vertex> {
    let steps = (2 * GRID_HALF_LINES + 1) as usize;
    let mut out = Vec::with_capacity(steps * 4);
    for i in -GRID_HALF_LINES..=GRID_HALF_LINES {
        let color = if i % 5 == 0 { GRID_BRIGHT } else { GRID_DIM };
        let d = i as f32 * GRID_STEP;
        push_line(
            &mut out,
            Point3::new(d, 0.0, -GRID_EXTENT),
            Point3::new(d, 0.0, GRID_EXTENT),
            color,
        );
        push_line(
            &mut out,
            Point3::new(-GRID_EXTENT, 0.0, d),
            Point3::new(GRID_EXTENT, 0.0, d),
            color,
        );
    }
    out
}

/// Solid UV-sphere for the head.
///
/// The sphere is generated in the head bone's own orthonormal basis
/// (the rotation columns of its world transform), so it tilts rigidly
/// with the bone. Its center sits one radius along the bone's local up
/// axis from the joint; the bottom of the sphere touches the joint.
/// Each latitude quad splits into two triangles with consistent
/// winding, for exactly `stacks * slices * 2` triangles.
pub fn head_sphere(
    skeleton: &Skeleton,
    stacks: usize,
    slices: usize,
) -> Vec<Vertex> {
    let head = skeleton.bone(BoneName::Head);
    let radius = HEAD_RADIUS_SCALE * head.length;
    let bx = head.world.x.truncate();
    let by = head.world.y.truncate();
    let bz = head.world.z.truncate();
    let center = head.world.w.truncate() + by * radius;

    let point = |stack: usize, slice: usize| -> Point3<f32> {
        let lat = -0.5 * PI + PI * stack as f32 / stacks as f32;
        let lon = 2.0 * PI * slice as f32 / slices as f32;
        let dir = bx * (lat.cos() * lon.cos()) + by * lat.sin() + bz * (lat.cos() * lon.sin());
        Point3::from_vec(center + dir * radius)
    };

    let mut out = Vec::with_capacity(stacks * slices * 6);
    for stack in 0..stacks {
        for slice in 0..slices {
            let a = point(stack, slice);
            let b = point(stack + 1, slice);
            let c = point(stack + 1, slice + 1);
            let d = point(stack, slice + 1);
            for &p in &[a, b, c, a, c, d] {
                out.push(Vertex {
                    pos: p.into(),
                    color: HEAD_COLOR,
                });
            }
        }
    }
    out
}
