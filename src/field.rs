//! Flame signed distance field (Deep Fried Edition)
//!
//! Sphere "bulb" smoothly unioned with a vertical capsule "body", then
//! perturbed by drifting gradient noise. The capsule is sampled at
//! `p.y - 0.4 * capsule_height`, so its center sits `0.4 * capsule_height`
//! above the sphere's.
//!
//! # Deep Fried Optimizations
//! - **Per-Frame Constants**: Offsets, `1/k` and the noise drift are folded
//!   once in [`FlameField::new`], not per cell.
//! - **Division Exorcism**: Smooth union uses the precomputed reciprocal.
//!
//! Author: Moroya Sakamoto

use crate::config::ParameterSet;
use crate::noise::NoiseGenerator;
use crate::operations::sdf_smooth_union_rk;
use crate::primitives::{sdf_capsule, sdf_sphere};
use glam::Vec3;

/// Fraction of the capsule height its center sits above the origin
pub const CAPSULE_LIFT: f32 = 0.4;

/// Noise Z drift relative to the (negated) Y drift
pub const NOISE_Z_DRIFT: f32 = 0.5;

/// Frame-constant view of the flame field.
///
/// Cheap to copy; every worker thread can hold its own.
#[derive(Debug, Clone, Copy)]
pub struct FlameField<'a> {
    noise: &'a NoiseGenerator,
    sphere_radius: f32,
    capsule_offset: Vec3,
    capsule_height: f32,
    capsule_radius: f32,
    blend: f32,
    blend_rcp: f32,
    noise_scale: f32,
    noise_strength: f32,
    drift: Vec3,
}

impl<'a> FlameField<'a> {
    /// Bind `params` and the (already gated) noise `time` for one frame.
    ///
    /// `params.blend` must be strictly positive; validate the set first.
    pub fn new(params: &ParameterSet, noise: &'a NoiseGenerator, time: f32) -> Self {
        let travel = time * params.noise_speed;
        Self {
            noise,
            sphere_radius: params.sphere_radius,
            capsule_offset: Vec3::new(0.0, params.capsule_height * CAPSULE_LIFT, 0.0),
            capsule_height: params.capsule_height,
            capsule_radius: params.capsule_radius,
            blend: params.blend,
            blend_rcp: 1.0 / params.blend,
            noise_scale: params.noise_scale,
            noise_strength: params.noise_strength,
            drift: Vec3::new(0.0, -travel, travel * NOISE_Z_DRIFT),
        }
    }

    /// Smooth union of sphere and capsule, without noise
    #[inline]
    pub fn base_distance(&self, point: Vec3) -> f32 {
        let d_sphere = sdf_sphere(point, self.sphere_radius);
        let d_capsule = sdf_capsule(
            point - self.capsule_offset,
            self.capsule_height,
            self.capsule_radius,
        );
        sdf_smooth_union_rk(d_sphere, d_capsule, self.blend, self.blend_rcp)
    }

    /// Noise displacement at `point` (zero when strength is zero)
    #[inline]
    pub fn displacement(&self, point: Vec3) -> f32 {
        if self.noise_strength > 0.0 {
            let q = point * self.noise_scale + self.drift;
            self.noise.noise_3d(q.x, q.y, q.z) * self.noise_strength
        } else {
            0.0
        }
    }

    /// Final signed distance at `point`
    #[inline]
    pub fn distance(&self, point: Vec3) -> f32 {
        self.base_distance(point) + self.displacement(point)
    }
}
