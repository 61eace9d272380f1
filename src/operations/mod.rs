//! CSG operations for combining SDFs (Deep Fried Edition)
//!
//! Author: Moroya Sakamoto

mod smooth;

pub use smooth::{sdf_smooth_union, sdf_smooth_union_rk, smooth_min, smooth_min_rk};
