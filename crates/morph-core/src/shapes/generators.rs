//! Per-point shape samplers.
//!
//! Each function draws one target position from its shape's distribution
//! using the supplied uniform source. `saturn` and `sun` split their point
//! budget into regions by index, so they additionally take the point's
//! index fraction `slot` in `[0, 1)`.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::rng::UnitRng;

/// Fraction of `saturn` points on the planet body; the rest form the ring.
pub const SATURN_BODY_FRACTION: f32 = 0.7;
/// Fraction of `sun` points in the core sphere; the rest form the flare halo.
pub const SUN_CORE_FRACTION: f32 = 0.9;
/// Ring tilt about the x-axis.
pub const SATURN_RING_TILT: f32 = PI / 6.0;

/// Uniform point on a sphere of radius `r`.
fn sphere_surface(r: f32, rng: &mut dyn UnitRng) -> Vec3 {
    let theta = rng.next_unit() * TAU;
    let phi = (2.0 * rng.next_unit() - 1.0).acos();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Planar heart curve extruded over a thin depth slab.
///
/// The radial factor in `[0.5, 1)` fills the interior instead of tracing
/// the outline.
pub fn sample_heart(rng: &mut dyn UnitRng) -> Vec3 {
    let angle = rng.next_unit() * TAU;
    let hx = 16.0 * angle.sin().powi(3);
    let hy = 13.0 * angle.cos()
        - 5.0 * (2.0 * angle).cos()
        - 2.0 * (3.0 * angle).cos()
        - (4.0 * angle).cos();
    let hz = (rng.next_unit() - 0.5) * 4.0;
    let scale = 0.2 * (0.5 + 0.5 * rng.next_unit());
    Vec3::new(hx * scale, hy * scale, hz)
}

/// Five-petal rose modulation over a randomized radius.
pub fn sample_flower(rng: &mut dyn UnitRng) -> Vec3 {
    let theta = rng.next_unit() * TAU;
    let petal = 2.0 * (5.0 * theta).sin();
    let radius = 3.0 * (0.5 + 0.5 * rng.next_unit());
    Vec3::new(
        radius * theta.sin() * petal.cos(),
        radius * theta.cos() * petal.cos(),
        (rng.next_unit() - 0.5) * 2.0,
    )
}

/// Planet body plus a thin ring tilted by [`SATURN_RING_TILT`].
pub fn sample_saturn(slot: f32, rng: &mut dyn UnitRng) -> Vec3 {
    if slot < SATURN_BODY_FRACTION {
        sphere_surface(2.0, rng)
    } else {
        let angle = rng.next_unit() * TAU;
        let dist = 3.0 + rng.next_unit() * 2.0;
        let x = dist * angle.cos();
        let y = (rng.next_unit() - 0.5) * 0.2;
        let z = dist * angle.sin();
        let (sin_t, cos_t) = SATURN_RING_TILT.sin_cos();
        Vec3::new(x, y * cos_t - z * sin_t, y * sin_t + z * cos_t)
    }
}

/// Core sphere with a sparse flare halo.
pub fn sample_sun(slot: f32, rng: &mut dyn UnitRng) -> Vec3 {
    let r = if slot < SUN_CORE_FRACTION {
        2.5 + rng.next_unit() * 0.4
    } else {
        3.5 + rng.next_unit() * 1.2
    };
    sphere_surface(r, rng)
}

/// Seated figure: head and torso spheres over a flat base slab.
///
/// The base region is a plain box standing in for folded legs.
pub fn sample_buddha(rng: &mut dyn UnitRng) -> Vec3 {
    let section = rng.next_unit();
    if section < 0.2 {
        // Head
        sphere_surface(0.8, rng) + Vec3::new(0.0, 2.5, 0.0)
    } else if section < 0.6 {
        // Torso, stretched tall and flattened front-to-back
        let p = sphere_surface(1.2, rng);
        Vec3::new(p.x, p.y * 1.5 + 0.5, p.z * 0.8)
    } else {
        // Base slab
        Vec3::new(
            (rng.next_unit() - 0.5) * 4.0,
            (rng.next_unit() - 0.5) * 1.0 - 1.5,
            (rng.next_unit() - 0.5) * 2.0,
        )
    }
}

/// Compact seed cluster; radial expansion happens at animation time.
pub fn sample_fireworks(rng: &mut dyn UnitRng) -> Vec3 {
    sphere_surface(0.2, rng)
}
