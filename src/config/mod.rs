//! Frame parameters for the flame voxelizer
//!
//! A [`ParameterSet`] is a plain `Copy` snapshot. The sampler reads one
//! value for the whole frame; edits made by the host apply from the next
//! frame on.
//!
//! Author: Moroya Sakamoto

mod json;
mod presets;

pub use json::{load_params, params_from_json_str, params_to_json_string, save_params};
pub use presets::Preset;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted grid resolution (samples per axis)
pub const MAX_RESOLUTION: u32 = 256;

/// Configuration errors, raised before any grid cell is evaluated
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Resolution is zero or above [`MAX_RESOLUTION`]
    #[error("Invalid resolution {0}: must be in 1..={}", MAX_RESOLUTION)]
    InvalidResolution(u32),

    /// Smooth-blend factor must be strictly positive (it divides)
    #[error("Smooth blend factor must be > 0, got {0}")]
    NonPositiveBlend(f32),

    /// A field that must be non-negative was negative
    #[error("Parameter `{field}` must be >= 0, got {value}")]
    NegativeValue {
        /// Parameter name
        field: &'static str,
        /// Rejected value
        value: f32,
    },

    /// A field was NaN or infinite
    #[error("Parameter `{field}` must be finite")]
    NonFinite {
        /// Parameter name
        field: &'static str,
    },

    /// Preset name did not match any known preset
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Full parameter set for one frame.
///
/// Missing fields in JSON fall back to the Standard preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Samples per axis; the grid has `resolution³` cells
    pub resolution: u32,
    /// Cube size relative to one grid cell
    pub cube_base_size: f32,
    /// Radius of the "bulb" sphere
    pub sphere_radius: f32,
    /// Straight-segment length of the body capsule
    pub capsule_height: f32,
    /// Radius of the body capsule
    pub capsule_radius: f32,
    /// Smooth-union factor `k`
    pub blend: f32,
    /// Cells with `distance < threshold` survive
    pub threshold: f32,
    /// When false the noise is frozen at time zero
    pub animate: bool,
    /// Spatial frequency of the noise
    pub noise_scale: f32,
    /// Time drift rate of the noise
    pub noise_speed: f32,
    /// Noise amplitude added to the distance; zero disables noise
    pub noise_strength: f32,
    /// Glow multiplier, passed through to the renderer
    pub emissive_intensity: f32,
    /// Weight of normalized height in the heat value
    pub heat_height_influence: f32,
    /// Weight of depth-inside-surface in the heat value
    pub heat_depth_influence: f32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Preset::Standard.params()
    }
}

impl ParameterSet {
    /// Check every invariant the sampler relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution == 0 || self.resolution > MAX_RESOLUTION {
            return Err(ConfigError::InvalidResolution(self.resolution));
        }

        let floats = [
            ("cube_base_size", self.cube_base_size),
            ("sphere_radius", self.sphere_radius),
            ("capsule_height", self.capsule_height),
            ("capsule_radius", self.capsule_radius),
            ("blend", self.blend),
            ("threshold", self.threshold),
            ("noise_scale", self.noise_scale),
            ("noise_speed", self.noise_speed),
            ("noise_strength", self.noise_strength),
            ("emissive_intensity", self.emissive_intensity),
            ("heat_height_influence", self.heat_height_influence),
            ("heat_depth_influence", self.heat_depth_influence),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }

        if self.blend <= 0.0 {
            return Err(ConfigError::NonPositiveBlend(self.blend));
        }

        let non_negative = [
            ("cube_base_size", self.cube_base_size),
            ("sphere_radius", self.sphere_radius),
            ("capsule_height", self.capsule_height),
            ("capsule_radius", self.capsule_radius),
            ("noise_scale", self.noise_scale),
            ("noise_strength", self.noise_strength),
            ("emissive_intensity", self.emissive_intensity),
            ("heat_height_influence", self.heat_height_influence),
            ("heat_depth_influence", self.heat_depth_influence),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::NegativeValue { field, value });
            }
        }

        Ok(())
    }

    /// Noise time for a frame: `elapsed` when animating, otherwise zero
    #[inline]
    pub fn effective_time(&self, elapsed: f32) -> f32 {
        if self.animate {
            elapsed
        } else {
            0.0
        }
    }

    /// Number of grid cells (upper bound on surviving instances)
    #[inline]
    pub fn cell_count(&self) -> usize {
        crate::sampler::grid_capacity(self.resolution)
    }
}
