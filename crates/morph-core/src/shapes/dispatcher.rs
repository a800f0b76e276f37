//! Shape dispatch: select the sampler for a [`ShapeKind`] and fill target
//! buffers.

use glam::Vec3;

use crate::rng::UnitRng;
use crate::shapes::generators::{
    sample_buddha, sample_fireworks, sample_flower, sample_heart, sample_saturn, sample_sun,
};
use crate::shapes::ShapeKind;

/// Draw the target position for one point.
///
/// `slot` is the point's index fraction `i / count`, used by shapes that
/// partition their budget into regions by index.
pub fn target_for(kind: ShapeKind, slot: f32, rng: &mut dyn UnitRng) -> Vec3 {
    match kind {
        ShapeKind::Heart => sample_heart(rng),
        ShapeKind::Flower => sample_flower(rng),
        ShapeKind::Saturn => sample_saturn(slot, rng),
        ShapeKind::Sun => sample_sun(slot, rng),
        ShapeKind::Buddha => sample_buddha(rng),
        ShapeKind::Fireworks => sample_fireworks(rng),
    }
}

/// Fill `out` with freshly drawn targets for `kind`.
pub fn generate_into(kind: ShapeKind, out: &mut [Vec3], rng: &mut dyn UnitRng) {
    let count = out.len();
    for (i, target) in out.iter_mut().enumerate() {
        *target = target_for(kind, i as f32 / count as f32, rng);
    }
}

/// Allocate and fill a target buffer of `count` points.
pub fn generate(kind: ShapeKind, count: usize, rng: &mut dyn UnitRng) -> Vec<Vec3> {
    let mut out = vec![Vec3::ZERO; count];
    generate_into(kind, &mut out, rng);
    out
}
