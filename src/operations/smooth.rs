//! Smooth CSG operations for SDFs (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Branchless**: No `if k <= 0.0` check in the hot path. `k > 0` is
//!   enforced when the parameter set is validated.
//! - **Forced Inlining**: `#[inline(always)]` guarantees no call overhead.
//!
//! Author: Moroya Sakamoto

/// Polynomial smooth minimum (Deep Fried)
///
/// `h = max(k - |a - b|, 0) / k`, result `min(a, b) - h² · k / 4`.
/// Within `k` of the crease the two surfaces are blended; outside it the
/// result is exactly `min(a, b)`.
#[inline(always)]
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
    let h = (k - (a - b).abs()).max(0.0) / k;
    a.min(b) - h * h * k * 0.25
}

/// Polynomial smooth minimum with precomputed `rk = 1.0 / k`.
///
/// Used by the grid scan, where `k` is constant for the whole frame.
#[inline(always)]
pub fn smooth_min_rk(a: f32, b: f32, k: f32, rk: f32) -> f32 {
    let h = (1.0 - (a - b).abs() * rk).max(0.0);
    a.min(b) - h * h * k * 0.25
}

/// Smooth union of two SDFs
#[inline(always)]
pub fn sdf_smooth_union(d1: f32, d2: f32, k: f32) -> f32 {
    smooth_min(d1, d2, k)
}

/// Smooth union with precomputed `rk = 1.0 / k`.
#[inline(always)]
pub fn sdf_smooth_union_rk(d1: f32, d2: f32, k: f32, rk: f32) -> f32 {
    smooth_min_rk(d1, d2, k, rk)
}
