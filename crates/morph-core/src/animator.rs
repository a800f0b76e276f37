//! Per-frame point cloud animation.

use std::f32::consts::TAU;

use glam::Vec3;
use log::debug;

use crate::color::Rgb;
use crate::config::CloudConfig;
use crate::error::CloudError;
use crate::rng::{ThreadRandom, UnitRng};
use crate::shapes::dispatcher::generate_into;
use crate::shapes::ShapeKind;

/// Owns the cloud's current and target positions and advances the former
/// toward a tension-adjusted version of the latter once per frame.
///
/// Single-threaded by contract: one `tick` (and at most one `set_shape`) in
/// flight at a time, driven by an external frame loop. Instances share no
/// state, so several animators can run side by side.
pub struct CloudAnimator {
    /// Current positions, mutated in place every tick. Same length as
    /// `targets`; index `i` chases target `i`.
    positions: Vec<Vec3>,
    targets: Vec<Vec3>,
    shape: ShapeKind,
    color: Rgb,
    config: CloudConfig,
    rng: Box<dyn UnitRng>,
    spin: f32,
    last_tension: f32,
    dirty: bool,
}

impl CloudAnimator {
    /// Build an animator with the default thread-local random source.
    pub fn new(config: CloudConfig) -> Self {
        Self::with_rng(config, Box::new(ThreadRandom::new()))
    }

    /// Build an animator drawing all randomness from `rng`.
    ///
    /// Points start as a uniform scatter over the configured cube, and the
    /// initial heart target is generated immediately, so the cloud converges
    /// toward a shape from the first frame.
    pub fn with_rng(config: CloudConfig, mut rng: Box<dyn UnitRng>) -> Self {
        let extent = config.scatter_extent;
        let mut positions = vec![Vec3::ZERO; config.point_count];
        for p in positions.iter_mut() {
            *p = Vec3::new(
                (rng.next_unit() - 0.5) * extent,
                (rng.next_unit() - 0.5) * extent,
                (rng.next_unit() - 0.5) * extent,
            );
        }
        let targets = positions.clone();

        let mut animator = Self {
            positions,
            targets,
            shape: ShapeKind::Heart,
            color: Rgb::default(),
            config,
            rng,
            spin: 0.0,
            last_tension: 0.0,
            dirty: false,
        };
        animator.set_shape(ShapeKind::Heart);
        animator
    }

    /// Regenerate the target buffer for `kind` and make it the current shape.
    ///
    /// Current positions are left alone; the visible cloud re-chases the new
    /// targets from wherever it sits.
    pub fn set_shape(&mut self, kind: ShapeKind) {
        generate_into(kind, &mut self.targets, self.rng.as_mut());
        self.shape = kind;
        debug!("cloud target set to {kind}");
    }

    /// [`set_shape`](Self::set_shape) addressed by the UI's string
    /// identifier. An unknown name is rejected and the current shape and
    /// targets are left untouched.
    pub fn set_shape_by_name(&mut self, name: &str) -> Result<(), CloudError> {
        let kind = name.parse::<ShapeKind>()?;
        self.set_shape(kind);
        Ok(())
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Advance every point one smoothing step toward its tension-adjusted
    /// target, then spin the cloud.
    ///
    /// `tension` is nominally in `[0, 1]`; values outside that range over-
    /// or under-scale the target (clamping is the producer's job, not ours).
    /// NaN and infinite values are replaced with the last well-formed
    /// tension, since they are absorbing under the smoothing update.
    pub fn tick(&mut self, tension: f32) {
        let tension = if tension.is_finite() {
            tension
        } else {
            self.last_tension
        };
        self.last_tension = tension;

        let lerp = self.config.lerp_rate;
        if self.shape == ShapeKind::Fireworks {
            // Tension acts as explosion progress: near-zero separation at
            // rest, large radial expansion fully tensed. No jitter here.
            let expansion = 1.0 + tension * self.config.fireworks_gain;
            for (p, &t) in self.positions.iter_mut().zip(&self.targets) {
                *p += (t * expansion - *p) * lerp;
            }
        } else {
            let expansion = 1.0 + tension * self.config.expansion_gain;
            let jitter = tension * self.config.jitter_scale;
            for (p, &t) in self.positions.iter_mut().zip(&self.targets) {
                let effective = t * expansion
                    + Vec3::new(
                        (self.rng.next_unit() - 0.5) * jitter,
                        (self.rng.next_unit() - 0.5) * jitter,
                        (self.rng.next_unit() - 0.5) * jitter,
                    );
                *p += (effective - *p) * lerp;
            }
        }

        // Wrapped so the angle stays well-conditioned over long runtimes
        self.spin = (self.spin + self.config.spin_rate) % TAU;
        self.dirty = true;
    }

    /// Current positions, one `Vec3` per point.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Current positions as a flat `[x0, y0, z0, x1, ...]` buffer of length
    /// `3 * len()`, ready for a renderer upload.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Targets currently being chased.
    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    /// Accumulated rotation about the vertical axis, wrapped to `[0, 2π)`.
    /// The renderer applies this to the whole cloud; it is never baked into
    /// the position buffer.
    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True when positions changed since the last
    /// [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Renderer acknowledges the upload.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }
}
