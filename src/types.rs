//! Core types for the flame voxelizer
//!
//! Defines the per-frame instance record handed to renderers and the small
//! SDF node tree that describes the flame scene.
//!
//! Author: Moroya Sakamoto

use crate::config::{ConfigError, ParameterSet};
use crate::field::CAPSULE_LIFT;
use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ── Instances ────────────────────────────────────────────────

/// One surviving grid cell, drawn as a uniformly scaled cube
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstanceRecord {
    /// World-space cell center
    pub position: Vec3,
    /// Edge length of the cube
    pub scale: f32,
    /// Linear RGB in `[0, 1]`, also drives the emissive strength
    pub color: Vec3,
}

impl InstanceRecord {
    /// Model matrix: uniform scale, no rotation, translation to `position`
    #[inline]
    pub fn transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), Quat::IDENTITY, self.position)
    }
}

/// Summary of one frame's instance list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Number of surviving cells
    pub count: usize,
    /// Component-wise minimum position (`Vec3::ZERO` when empty)
    pub min: Vec3,
    /// Component-wise maximum position (`Vec3::ZERO` when empty)
    pub max: Vec3,
    /// Mean cube scale (0 when empty)
    pub mean_scale: f32,
}

impl FrameStats {
    /// Gather stats over an instance list
    pub fn from_instances(instances: &[InstanceRecord]) -> Self {
        if instances.is_empty() {
            return Self {
                count: 0,
                min: Vec3::ZERO,
                max: Vec3::ZERO,
                mean_scale: 0.0,
            };
        }

        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        let mut scale_sum = 0.0f64;
        for inst in instances {
            min = min.min(inst.position);
            max = max.max(inst.position);
            scale_sum += inst.scale as f64;
        }

        Self {
            count: instances.len(),
            min,
            max,
            mean_scale: (scale_sum / instances.len() as f64) as f32,
        }
    }
}

// ── Scene tree ───────────────────────────────────────────────

/// Signed Distance Function Node
///
/// A closed set of nodes that can express the flame scene and simple
/// variations of it. Smooth-union `k` must be strictly positive; run
/// [`SdfNode::validate`] on hand-built trees before evaluating them.
#[derive(Debug, Clone)]
pub enum SdfNode {
    /// Sphere at the origin
    Sphere {
        /// Sphere radius
        radius: f32,
    },

    /// Vertical capsule centered at the origin
    Capsule {
        /// Straight-segment length
        height: f32,
        /// Capsule radius
        radius: f32,
    },

    /// Child translated by `offset`
    Translate {
        /// Child node
        child: Arc<SdfNode>,
        /// Translation
        offset: Vec3,
    },

    /// Polynomial smooth union
    SmoothUnion {
        /// First child
        a: Arc<SdfNode>,
        /// Second child
        b: Arc<SdfNode>,
        /// Blend radius
        k: f32,
    },

    /// Child displaced by time-drifting gradient noise
    Noise {
        /// Child node
        child: Arc<SdfNode>,
        /// Spatial frequency
        scale: f32,
        /// Drift rate
        speed: f32,
        /// Amplitude
        strength: f32,
    },
}

impl SdfNode {
    /// Sphere primitive
    #[inline]
    pub fn sphere(radius: f32) -> Self {
        SdfNode::Sphere { radius }
    }

    /// Vertical capsule primitive
    #[inline]
    pub fn capsule(height: f32, radius: f32) -> Self {
        SdfNode::Capsule { height, radius }
    }

    /// Translate this node
    #[inline]
    pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
        SdfNode::Translate {
            child: Arc::new(self),
            offset: Vec3::new(x, y, z),
        }
    }

    /// Smooth union with another node
    #[inline]
    pub fn smooth_union(self, other: SdfNode, k: f32) -> Self {
        SdfNode::SmoothUnion {
            a: Arc::new(self),
            b: Arc::new(other),
            k,
        }
    }

    /// Displace this node with drifting noise
    #[inline]
    pub fn noise(self, scale: f32, speed: f32, strength: f32) -> Self {
        SdfNode::Noise {
            child: Arc::new(self),
            scale,
            speed,
            strength,
        }
    }

    /// The fixed flame scene for `params`
    pub fn flame(params: &ParameterSet) -> Self {
        let body = SdfNode::capsule(params.capsule_height, params.capsule_radius).translate(
            0.0,
            params.capsule_height * CAPSULE_LIFT,
            0.0,
        );
        let shape = SdfNode::sphere(params.sphere_radius).smooth_union(body, params.blend);
        if params.noise_strength > 0.0 {
            shape.noise(params.noise_scale, params.noise_speed, params.noise_strength)
        } else {
            shape
        }
    }

    /// Count total nodes in this subtree
    pub fn node_count(&self) -> u32 {
        match self {
            SdfNode::Sphere { .. } | SdfNode::Capsule { .. } => 1,
            SdfNode::Translate { child, .. } | SdfNode::Noise { child, .. } => {
                1 + child.node_count()
            }
            SdfNode::SmoothUnion { a, b, .. } => 1 + a.node_count() + b.node_count(),
        }
    }

    /// Check every node parameter: all finite, smooth-union `k > 0`,
    /// radii, heights, noise scale and strength `>= 0`
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            SdfNode::Sphere { radius } => check_non_negative("radius", *radius),
            SdfNode::Capsule { height, radius } => {
                check_non_negative("height", *height)?;
                check_non_negative("radius", *radius)
            }
            SdfNode::Translate { child, offset } => {
                if !offset.is_finite() {
                    return Err(ConfigError::NonFinite { field: "offset" });
                }
                child.validate()
            }
            SdfNode::SmoothUnion { a, b, k } => {
                if !k.is_finite() {
                    return Err(ConfigError::NonFinite { field: "k" });
                }
                if *k <= 0.0 {
                    return Err(ConfigError::NonPositiveBlend(*k));
                }
                a.validate()?;
                b.validate()
            }
            SdfNode::Noise {
                child,
                scale,
                speed,
                strength,
            } => {
                check_non_negative("scale", *scale)?;
                check_non_negative("strength", *strength)?;
                if !speed.is_finite() {
                    return Err(ConfigError::NonFinite { field: "speed" });
                }
                child.validate()
            }
        }
    }
}

#[inline]
fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::NegativeValue { field, value });
    }
    Ok(())
}
