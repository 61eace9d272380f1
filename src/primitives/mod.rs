//! SDF primitives used by the flame field (Deep Fried Edition)
//!
//! All primitives are centered at the origin; callers translate the
//! sample point instead of the shape.
//!
//! Author: Moroya Sakamoto

mod capsule;
mod sphere;

pub use capsule::sdf_capsule;
pub use sphere::sdf_sphere;
