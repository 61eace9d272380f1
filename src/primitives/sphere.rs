//! Sphere primitive SDF (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: Zero call overhead inside the grid scan.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance to a sphere centered at origin
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `radius` - Sphere radius
///
/// # Returns
/// Signed distance (negative inside, zero on the surface, positive outside)
#[inline(always)]
pub fn sdf_sphere(point: Vec3, radius: f32) -> f32 {
    point.length() - radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_origin() {
        assert!((sdf_sphere(Vec3::ZERO, 1.2) + 1.2).abs() < 0.0001);
    }

    #[test]
    fn test_sphere_surface() {
        let r = 1.5;
        assert!(sdf_sphere(Vec3::new(r, 0.0, 0.0), r).abs() < 0.0001);
        assert!(sdf_sphere(Vec3::new(0.0, -r, 0.0), r).abs() < 0.0001);
        let diag = Vec3::splat(1.0).normalize() * r;
        assert!(sdf_sphere(diag, r).abs() < 0.0001);
    }

    #[test]
    fn test_sphere_sign() {
        // Inside
        assert!(sdf_sphere(Vec3::new(0.5, 0.2, 0.0), 1.0) < 0.0);
        // Outside
        let d = sdf_sphere(Vec3::new(0.0, 0.0, 3.0), 1.0);
        assert!((d - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_sphere_zero_radius() {
        // Degenerates to plain distance from origin
        let d = sdf_sphere(Vec3::new(3.0, 4.0, 0.0), 0.0);
        assert!((d - 5.0).abs() < 0.0001);
    }
}
