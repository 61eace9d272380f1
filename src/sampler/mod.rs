//! Grid sampler / sparsifier (Deep Fried Edition)
//!
//! Scans the full `resolution³` grid, whose cell centers span `[-4, 4)`
//! on each axis (`WORLD_BOUND / resolution` apart), evaluates the flame
//! field per cell and keeps the cells below the threshold as
//! [`InstanceRecord`]s. Every frame is a fresh, stateless
//! resample; nothing survives between calls except the noise table owned by
//! the [`Voxelizer`].
//!
//! Emission order is the scan order: x outer, y middle, z inner.
//!
//! # Deep Fried Optimizations
//! - **Pre-calculated Step**: Cell step and half-resolution folded once per frame.
//! - **Buffer Reuse**: `evaluate_into` keeps the caller's allocation across frames.
//!
//! Author: Moroya Sakamoto

pub mod parallel;

use crate::config::{ConfigError, ParameterSet};
use crate::field::FlameField;
use crate::noise::NoiseGenerator;
use crate::palette::{compute_heat, heat_to_color};
use crate::types::InstanceRecord;
use glam::Vec3;
use tracing::{debug, warn};

/// Total world extent covered by the grid along each axis
pub const WORLD_BOUND: f32 = 8.0;

/// Depth multiplier before the scale clamp
pub const SCALE_DEPTH_GAIN: f32 = 1.5;

/// Number of cells in a `resolution³` grid
#[inline]
pub fn grid_capacity(resolution: u32) -> usize {
    let r = resolution as usize;
    r * r * r
}

/// Distance between neighbouring cell centers
#[inline]
pub fn cell_step(resolution: u32) -> f32 {
    WORLD_BOUND / resolution as f32
}

/// World coordinate of grid index `index` along one axis
#[inline]
pub fn cell_position(index: u32, resolution: u32) -> f32 {
    (index as f32 - resolution as f32 / 2.0) * cell_step(resolution)
}

/// Frame evaluator.
///
/// Owns the noise generator, whose permutation table is built once here and
/// never rebuilt. `Voxelizer` is `Sync`; one instance can serve any number
/// of threads.
#[derive(Debug, Clone, Default)]
pub struct Voxelizer {
    noise: NoiseGenerator,
}

impl Voxelizer {
    /// Voxelizer with the default noise seed
    pub fn new() -> Self {
        Self::default()
    }

    /// Voxelizer with a custom noise seed
    pub fn with_seed(seed: u32) -> Self {
        Self {
            noise: NoiseGenerator::new(seed),
        }
    }

    /// The shared noise generator
    #[inline]
    pub fn noise(&self) -> &NoiseGenerator {
        &self.noise
    }

    /// Evaluate one frame into a fresh instance list
    ///
    /// # Arguments
    /// * `params` - Parameter snapshot for this frame
    /// * `elapsed` - Monotonic elapsed time in seconds
    ///
    /// # Returns
    /// Surviving cells in scan order, or the configuration error that
    /// prevented evaluation
    pub fn evaluate(
        &self,
        params: &ParameterSet,
        elapsed: f32,
    ) -> Result<Vec<InstanceRecord>, ConfigError> {
        let mut out = Vec::new();
        self.evaluate_into(params, elapsed, &mut out)?;
        Ok(out)
    }

    /// Evaluate one frame into `out`, replacing its contents
    ///
    /// # Returns
    /// Number of surviving cells (`out.len()`), never above `resolution³`
    pub fn evaluate_into(
        &self,
        params: &ParameterSet,
        elapsed: f32,
        out: &mut Vec<InstanceRecord>,
    ) -> Result<usize, ConfigError> {
        let sampler = self.prepare(params, elapsed)?;

        out.clear();
        for x in 0..params.resolution {
            sampler.sample_slice(x, out);
        }

        debug!(
            resolution = params.resolution,
            survivors = out.len(),
            "evaluated frame"
        );
        Ok(out.len())
    }

    /// Validate `params` and bind the frame constants
    pub(crate) fn prepare<'a>(
        &'a self,
        params: &ParameterSet,
        elapsed: f32,
    ) -> Result<FrameSampler<'a>, ConfigError> {
        if let Err(e) = params.validate() {
            warn!(error = %e, "rejected frame parameters");
            return Err(e);
        }
        if !elapsed.is_finite() {
            let e = ConfigError::NonFinite { field: "elapsed" };
            warn!(error = %e, "rejected frame time");
            return Err(e);
        }
        Ok(FrameSampler::new(params, &self.noise, elapsed))
    }
}

/// Per-frame constants for the cell loop
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrameSampler<'a> {
    field: FlameField<'a>,
    resolution: u32,
    step: f32,
    half_res: f32,
    threshold: f32,
    cube_base_size: f32,
    heat_height_influence: f32,
    heat_depth_influence: f32,
}

impl<'a> FrameSampler<'a> {
    fn new(params: &ParameterSet, noise: &'a NoiseGenerator, elapsed: f32) -> Self {
        let time = params.effective_time(elapsed);
        Self {
            field: FlameField::new(params, noise, time),
            resolution: params.resolution,
            step: cell_step(params.resolution),
            half_res: params.resolution as f32 / 2.0,
            threshold: params.threshold,
            cube_base_size: params.cube_base_size,
            heat_height_influence: params.heat_height_influence,
            heat_depth_influence: params.heat_depth_influence,
        }
    }

    #[inline(always)]
    fn coord(&self, index: u32) -> f32 {
        (index as f32 - self.half_res) * self.step
    }

    /// Sample every cell with grid index `x`, appending survivors in (y, z) order
    #[inline]
    pub(crate) fn sample_slice(&self, x: u32, out: &mut Vec<InstanceRecord>) {
        let px = self.coord(x);
        for y in 0..self.resolution {
            let py = self.coord(y);
            for z in 0..self.resolution {
                let point = Vec3::new(px, py, self.coord(z));
                if let Some(instance) = self.sample_cell(point) {
                    out.push(instance);
                }
            }
        }
    }

    /// Threshold test plus scale and color for one cell
    #[inline(always)]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn sample_cell(&self, point: Vec3) -> Option<InstanceRecord> {
        let dist = self.field.distance(point);
        // NaN distances must fail the test, so no `>=` shortcut
        if !(dist < self.threshold) {
            return None;
        }

        let depth = self.threshold - dist;
        let scale_factor = (depth * SCALE_DEPTH_GAIN).clamp(0.0, 1.0).sqrt();
        let heat = compute_heat(
            point.y,
            depth,
            self.heat_height_influence,
            self.heat_depth_influence,
        );

        Some(InstanceRecord {
            position: point,
            scale: scale_factor * self.step * self.cube_base_size,
            color: heat_to_color(heat),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::palette::WHITE;

    #[test]
    fn test_cell_positions() {
        assert_eq!(cell_step(40), 0.2);
        assert_eq!(cell_position(0, 40), -4.0);
        assert_eq!(cell_position(20, 40), 0.0);
        // Odd resolutions are offset by half a cell
        assert!((cell_position(0, 5) - (-2.5 * 1.6)).abs() < 1e-6);
    }

    #[test]
    fn test_grid_capacity() {
        assert_eq!(grid_capacity(1), 1);
        assert_eq!(grid_capacity(40), 64_000);
        assert_eq!(grid_capacity(80), 512_000);
    }

    #[test]
    fn test_huge_sphere_fills_grid() {
        let voxelizer = Voxelizer::new();
        let params = ParameterSet {
            resolution: 2,
            sphere_radius: 100.0,
            capsule_height: 0.0,
            capsule_radius: 0.0,
            blend: 0.01,
            threshold: 1000.0,
            noise_strength: 0.0,
            heat_depth_influence: 2.0,
            ..Default::default()
        };
        let instances = voxelizer.evaluate(&params, 0.0).unwrap();
        assert_eq!(instances.len(), 8);

        let full = cell_step(2) * params.cube_base_size;
        for inst in &instances {
            assert_eq!(inst.scale, full);
            assert_eq!(inst.color, WHITE);
        }
    }

    #[test]
    fn test_impossible_threshold_is_empty() {
        let voxelizer = Voxelizer::new();
        let params = ParameterSet {
            sphere_radius: 0.0,
            capsule_height: 0.0,
            capsule_radius: 0.0,
            blend: 0.3,
            threshold: -1000.0,
            ..Default::default()
        };
        assert!(voxelizer.evaluate(&params, 1.0).unwrap().is_empty());
    }

    #[test]
    fn test_scan_order() {
        let voxelizer = Voxelizer::new();
        let params = ParameterSet {
            resolution: 3,
            sphere_radius: 100.0,
            threshold: 1000.0,
            noise_strength: 0.0,
            ..Default::default()
        };
        let instances = voxelizer.evaluate(&params, 0.0).unwrap();
        assert_eq!(instances.len(), 27);

        let mut i = 0;
        for x in 0..3 {
            for y in 0..3 {
                for z in 0..3 {
                    let expected = Vec3::new(
                        cell_position(x, 3),
                        cell_position(y, 3),
                        cell_position(z, 3),
                    );
                    assert_eq!(instances[i].position, expected);
                    i += 1;
                }
            }
        }
    }

    #[test]
    fn test_survivors_below_threshold() {
        let voxelizer = Voxelizer::new();
        let params = Preset::Standard.params();
        let time = 2.0;
        let field = FlameField::new(&params, voxelizer.noise(), time);
        let instances = voxelizer.evaluate(&params, time).unwrap();

        assert!(!instances.is_empty());
        assert!(instances.len() < grid_capacity(params.resolution));
        for inst in &instances {
            assert!(field.distance(inst.position) < params.threshold);
            assert!(inst.scale > 0.0 && inst.scale <= cell_step(40) * params.cube_base_size);
        }
    }

    #[test]
    fn test_evaluate_into_reuses_buffer() {
        let voxelizer = Voxelizer::new();
        let mut buffer = Vec::new();

        let big = Preset::Inferno.params();
        let n_big = voxelizer.evaluate_into(&big, 0.5, &mut buffer).unwrap();
        assert_eq!(n_big, buffer.len());
        let cap = buffer.capacity();

        let small = ParameterSet {
            resolution: 10,
            ..big
        };
        let n_small = voxelizer.evaluate_into(&small, 0.5, &mut buffer).unwrap();
        assert_eq!(n_small, buffer.len());
        assert!(n_small <= grid_capacity(10));
        assert_eq!(buffer.capacity(), cap);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let voxelizer = Voxelizer::new();
        let mut buffer = vec![InstanceRecord {
            position: Vec3::ZERO,
            scale: 1.0,
            color: Vec3::ONE,
        }];
        let params = ParameterSet {
            blend: 0.0,
            ..Default::default()
        };
        let result = voxelizer.evaluate_into(&params, 0.0, &mut buffer);
        assert!(matches!(result, Err(ConfigError::NonPositiveBlend(_))));
        // Rejected before touching the buffer
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_non_finite_time_rejected() {
        let voxelizer = Voxelizer::new();
        let params = ParameterSet {
            resolution: 4,
            ..Default::default()
        };
        for t in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(matches!(
                voxelizer.evaluate(&params, t),
                Err(ConfigError::NonFinite { field: "elapsed" })
            ));
            assert!(matches!(
                voxelizer.evaluate_parallel(&params, t),
                Err(ConfigError::NonFinite { field: "elapsed" })
            ));
        }
    }

    #[test]
    fn test_nan_distance_never_survives() {
        // A NaN time bypassing validation turns every distance into NaN
        let noise = NoiseGenerator::default();
        let params = ParameterSet {
            resolution: 4,
            ..Default::default()
        };
        let sampler = FrameSampler::new(&params, &noise, f32::NAN);
        assert!(sampler.field.distance(Vec3::ZERO).is_nan());

        let mut out = Vec::new();
        for x in 0..params.resolution {
            sampler.sample_slice(x, &mut out);
        }
        assert!(out.is_empty(), "{} NaN cells survived", out.len());
    }

    #[test]
    fn test_animate_flag_freezes_noise() {
        let voxelizer = Voxelizer::new();
        let params = ParameterSet {
            animate: false,
            ..Preset::Embers.params()
        };
        let a = voxelizer.evaluate(&params, 0.0).unwrap();
        let b = voxelizer.evaluate(&params, 9.0).unwrap();
        assert_eq!(a, b);
    }
}
