//! Host-side view/voice anchor adapter.
//!
//! The host avatar component stores view and voice positions the engine must
//! not know the concrete type of. Callers implement [`ViewAnchor`] over it
//! and rescale by the realized [`crate::ScaleReport::height_scale`].

use glam::Vec3;

/// Narrow get/set interface over a host-side positional anchor.
pub trait ViewAnchor {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
}

/// Rescales an anchor proportionally to the realized height-scale ratio.
pub fn rescale_anchor(anchor: &mut dyn ViewAnchor, height_scale: f32) {
    if height_scale.is_finite() && height_scale > 0.0 {
        anchor.set_position(anchor.position() * height_scale);
    }
}
