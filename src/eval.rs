//! SDF tree evaluation (Deep Fried Edition)
//!
//! Recursive interpreter for [`SdfNode`]. The grid sampler uses the flat
//! [`FlameField`](crate::field::FlameField) path; this one exists for
//! scenes built from nodes.
//!
//! Author: Moroya Sakamoto

use crate::config::ConfigError;
use crate::field::NOISE_Z_DRIFT;
use crate::noise::NoiseGenerator;
use crate::operations::sdf_smooth_union;
use crate::primitives::{sdf_capsule, sdf_sphere};
use crate::types::SdfNode;
use glam::Vec3;

/// Validate `node`, then evaluate it at a single point
///
/// Use for trees assembled by hand; [`eval`] itself assumes a valid tree.
pub fn eval_checked(
    node: &SdfNode,
    point: Vec3,
    time: f32,
    noise: &NoiseGenerator,
) -> Result<f32, ConfigError> {
    node.validate()?;
    if !time.is_finite() {
        return Err(ConfigError::NonFinite { field: "time" });
    }
    Ok(eval(node, point, time, noise))
}

/// Evaluate an SDF tree at a single point
///
/// `node` must pass [`SdfNode::validate`]: smooth-union `k = 0` divides by
/// zero.
///
/// # Arguments
/// * `node` - The SDF tree root
/// * `point` - Point to evaluate
/// * `time` - Noise time (already gated by the animate flag)
/// * `noise` - Shared noise generator
///
/// # Returns
/// Signed distance to the surface
#[inline]
pub fn eval(node: &SdfNode, point: Vec3, time: f32, noise: &NoiseGenerator) -> f32 {
    match node {
        SdfNode::Sphere { radius } => sdf_sphere(point, *radius),
        SdfNode::Capsule { height, radius } => sdf_capsule(point, *height, *radius),

        SdfNode::Translate { child, offset } => eval(child, point - *offset, time, noise),

        SdfNode::SmoothUnion { a, b, k } => {
            let d1 = eval(a, point, time, noise);
            let d2 = eval(b, point, time, noise);
            sdf_smooth_union(d1, d2, *k)
        }

        SdfNode::Noise {
            child,
            scale,
            speed,
            strength,
        } => {
            let d = eval(child, point, time, noise);
            if *strength > 0.0 {
                let travel = time * speed;
                let n = noise.noise_3d(
                    point.x * scale,
                    point.y * scale - travel,
                    point.z * scale + travel * NOISE_Z_DRIFT,
                );
                d + n * strength
            } else {
                d
            }
        }
    }
}
