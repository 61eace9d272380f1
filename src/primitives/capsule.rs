//! Capsule primitive SDF (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Axis-Aligned**: The flame body is always vertical, so the segment
//!   projection collapses to a single clamp on Y.
//! - **Forced Inlining**: Zero call overhead.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance to a vertical capsule centered at origin
///
/// The axis is the segment from `(0, -height/2, 0)` to `(0, height/2, 0)`.
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `height` - Length of the straight segment (excluding caps)
/// * `radius` - Capsule radius
#[inline(always)]
pub fn sdf_capsule(point: Vec3, height: f32, radius: f32) -> f32 {
    let half_height = height * 0.5;
    // Offset from the nearest point on the axis segment
    let p_y = point.y - point.y.clamp(-half_height, half_height);
    (point.x * point.x + p_y * p_y + point.z * point.z).sqrt() - radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capsule_on_axis() {
        let (h, r) = (2.5, 0.6);
        for i in 0..=10 {
            let y = -h * 0.5 + h * i as f32 / 10.0;
            let d = sdf_capsule(Vec3::new(0.0, y, 0.0), h, r);
            assert!((d + r).abs() < 0.0001, "y={} d={}", y, d);
        }
    }

    #[test]
    fn test_capsule_side_surface() {
        let d = sdf_capsule(Vec3::new(0.6, 0.3, 0.0), 2.5, 0.6);
        assert!(d.abs() < 0.0001);
    }

    #[test]
    fn test_capsule_caps() {
        // Top cap surface
        let d = sdf_capsule(Vec3::new(0.0, 1.25 + 0.6, 0.0), 2.5, 0.6);
        assert!(d.abs() < 0.0001);

        // Below the bottom cap
        let d = sdf_capsule(Vec3::new(0.0, -3.0, 0.0), 2.0, 0.5);
        assert!((d - 1.5).abs() < 0.0001);
    }

    #[test]
    fn test_capsule_zero_height_is_sphere() {
        let p = Vec3::new(0.3, -0.7, 0.2);
        let d = sdf_capsule(p, 0.0, 0.4);
        assert!((d - (p.length() - 0.4)).abs() < 0.0001);
    }
}
