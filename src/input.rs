//! Frame input boundary.
//!
//! The embedding layer owns the window and its callbacks; this type is
//! how pointer and wheel motion cross into the simulation. Events
//! accumulate between frames and the frame loop drains them with
//! [`reset`](struct.Input.html#method.reset). Camera state is the only
//! thing input ever drives; the skeleton never sees it.

use cgmath::Vector2;
use mint;

/// Pointer and wheel motion accumulated since the last frame.
#[derive(Clone, Debug, Default)]
pub struct Input {
    trigger: bool,
    pointer_moves: Vec<mint::Vector2<f32>>,
    wheel_moves: Vec<f32>,
}

impl Input {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Input::default()
    }

    /// Report pointer motion in pixels.
    pub fn pointer_moved<V>(
        &mut self,
        delta: V,
    ) where
        V: Into<mint::Vector2<f32>>,
    {
        self.pointer_moves.push(delta.into());
    }

    /// Report wheel motion in lines.
    pub fn wheel_scrolled(
        &mut self,
        delta: f32,
    ) {
        self.wheel_moves.push(delta);
    }

    /// Press or release the camera drag trigger.
    pub fn set_trigger(
        &mut self,
        held: bool,
    ) {
        self.trigger = held;
    }

    /// Whether the camera drag trigger is held.
    pub fn trigger(&self) -> bool {
        self.trigger
    }

    /// Every pointer motion since the last reset.
    pub fn pointer_movements(&self) -> &[mint::Vector2<f32>] {
        &self.pointer_moves[..]
    }

    /// Summed pointer motion since the last reset.
    pub fn pointer_delta(&self) -> mint::Vector2<f32> {
        self.pointer_moves
            .iter()
            .cloned()
            .map(Vector2::from)
            .sum::<Vector2<f32>>()
            .into()
    }

    /// Summed wheel motion since the last reset.
    pub fn wheel(&self) -> f32 {
        self.wheel_moves.iter().sum()
    }

    /// Discard the per-frame movements. The trigger state persists:
    /// a held button stays held across frames.
    pub fn reset(&mut self) {
        self.pointer_moves.clear();
        self.wheel_moves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_sum_over_the_frame() {
        let mut input = Input::new();
        input.pointer_moved([2.0, -1.0]);
        input.pointer_moved([3.0, 4.0]);
        input.wheel_scrolled(1.0);
        input.wheel_scrolled(-0.25);
        let delta = input.pointer_delta();
        assert_eq!((delta.x, delta.y), (5.0, 3.0));
        assert_eq!(input.wheel(), 0.75);
        assert_eq!(input.pointer_movements().len(), 2);
    }

    #[test]
    fn reset_clears_motion_but_keeps_the_trigger() {
        let mut input = Input::new();
        input.set_trigger(true);
        input.pointer_moved([9.0, 9.0]);
        input.wheel_scrolled(2.0);
        input.reset();
        assert!(input.trigger());
        let delta = input.pointer_delta();
        assert_eq!((delta.x, delta.y), (0.0, 0.0));
        assert_eq!(input.wheel(), 0.0);
    }
}
