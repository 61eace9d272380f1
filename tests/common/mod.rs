//! Common test helpers for Voxel Flame integration tests
//!
//! Author: Moroya Sakamoto

#![allow(dead_code)]

use voxel_flame::prelude::*;

// ============================================================================
// Standard parameter sets
// ============================================================================

/// Standard preset with noise switched off
pub fn quiet_params() -> ParameterSet {
    ParameterSet {
        noise_strength: 0.0,
        ..Preset::Standard.params()
    }
}

/// Tiny grid entirely inside a huge sphere
pub fn saturated_params() -> ParameterSet {
    ParameterSet {
        resolution: 2,
        sphere_radius: 100.0,
        capsule_height: 0.0,
        capsule_radius: 0.0,
        blend: 0.01,
        threshold: 1000.0,
        noise_strength: 0.0,
        heat_height_influence: 0.6,
        heat_depth_influence: 2.0,
        ..ParameterSet::default()
    }
}

/// Degenerate scene with a threshold nothing can reach
pub fn empty_params() -> ParameterSet {
    ParameterSet {
        sphere_radius: 0.0,
        capsule_height: 0.0,
        capsule_radius: 0.0,
        blend: 0.5,
        threshold: -1000.0,
        ..ParameterSet::default()
    }
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two f32 values are close within tolerance
pub fn assert_close(a: f32, b: f32, tol: f32, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}

/// Assert two instance lists are identical, element by element
pub fn assert_same_instances(a: &[InstanceRecord], b: &[InstanceRecord], msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert_eq!(x, y, "{}: instance {} differs", msg, i);
    }
}

/// Temp file path unique to this test process
pub fn temp_path(name: &str) -> std::path::PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("voxel_flame_it_{}_{}", std::process::id(), name));
    path
}
