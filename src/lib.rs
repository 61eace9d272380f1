//! # Voxel Flame
//!
//! Real-time volumetric voxelizer for a signed distance field flame.
//!
//! Each frame, a sphere "bulb" smoothly unioned with a capsule "body" and
//! perturbed by drifting gradient noise is sampled over a dense
//! `resolution³` grid. Cells inside the iso-threshold become instanced
//! cubes with a depth-driven size and a fire-gradient color.
//!
//! ## Features
//!
//! - **Primitives**: Sphere, vertical Capsule
//! - **Operations**: Polynomial smooth union
//! - **Noise**: Seeded improved-Perlin gradient noise
//! - **Sampling**: Sequential and rayon-parallel grid scans with identical output
//! - **Color**: Six-stop fire gradient driven by height and depth "heat"
//! - **Presets**: Eight named looks, JSON parameter files
//!
//! ## Example
//!
//! ```rust
//! use voxel_flame::prelude::*;
//!
//! // Build once per session: owns the noise permutation table
//! let voxelizer = Voxelizer::new();
//!
//! // Evaluate a frame 1.5 seconds in
//! let params = Preset::Candle.params();
//! let instances = voxelizer.evaluate(&params, 1.5).unwrap();
//!
//! assert!(instances.len() <= grid_capacity(params.resolution));
//! for inst in &instances {
//!     let _model: Mat4 = inst.transform();
//! }
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod config;
pub mod eval;
pub mod field;
pub mod noise;
pub mod operations;
pub mod palette;
pub mod primitives;
pub mod sampler;
pub mod types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::config::{
        load_params, save_params, ConfigError, ParameterSet, Preset, MAX_RESOLUTION,
    };
    pub use crate::eval::{eval, eval_checked};
    pub use crate::field::FlameField;
    pub use crate::noise::{NoiseGenerator, PermutationTable, DEFAULT_SEED};
    pub use crate::operations::*;
    pub use crate::palette::{compute_heat, heat_to_color};
    pub use crate::primitives::*;
    pub use crate::sampler::{cell_position, cell_step, grid_capacity, Voxelizer, WORLD_BOUND};
    pub use crate::types::{FrameStats, InstanceRecord, SdfNode};
    pub use glam::{Mat4, Vec3};
}

// Re-exports for convenience
pub use config::{ConfigError, ParameterSet, Preset};
pub use sampler::Voxelizer;
pub use types::InstanceRecord;
