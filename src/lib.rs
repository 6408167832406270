//! Procedural stick-figure walker.
//!
//! `strider` animates a small human skeleton with a sinusoidal walk cycle
//! and turns it into colored line and triangle streams for an external
//! renderer. The crate owns the simulation side of the frame: the bone
//! hierarchy, the gait generator, the geometry emitters and the orbit
//! camera. Window creation, shader plumbing and buffer upload stay on the
//! other side of the [`Renderer`](render/trait.Renderer.html) seam.
//!
//! A frame looks like this:
//!
//! ```rust
//! let mut scene = strider::Scene::new().unwrap();
//! let input = strider::Input::new();
//! let batch = scene.advance(0.016, &input, 16.0 / 9.0);
//! assert!(!batch.lines.is_empty());
//! ```
//!
//! The embedding layer feeds pointer and wheel events into [`Input`],
//! calls [`Scene::advance`](scene/struct.Scene.html#method.advance) once
//! per frame and hands the resulting [`Batch`] to its renderer.

extern crate cgmath;
#[macro_use]
extern crate log;
extern crate mint;
#[macro_use]
extern crate quick_error;

pub mod animation;
pub mod camera;
pub mod geometry;
pub mod input;
pub mod render;
pub mod rig;
pub mod scene;
pub mod skeleton;

pub use animation::Gait;
pub use camera::{Orbit, Perspective, Projection};
pub use input::Input;
pub use render::{Batch, Color, Renderer, Vertex};
pub use rig::{Proportions, Rig};
pub use scene::Scene;
pub use skeleton::{Bone, BoneName, Error, Skeleton};
