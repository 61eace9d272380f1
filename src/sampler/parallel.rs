//! Parallel frame evaluation (Deep Fried Edition)
//!
//! Splits the scan into X-slices evaluated with rayon. Each slice fills its
//! own buffer; buffers are concatenated in slice order, so the output is
//! identical to the sequential scan, order included.
//!
//! Author: Moroya Sakamoto

use super::Voxelizer;
use crate::config::{ConfigError, ParameterSet};
use crate::types::InstanceRecord;
use rayon::prelude::*;
use tracing::debug;

impl Voxelizer {
    /// Evaluate one frame on the rayon pool into a fresh instance list
    pub fn evaluate_parallel(
        &self,
        params: &ParameterSet,
        elapsed: f32,
    ) -> Result<Vec<InstanceRecord>, ConfigError> {
        let mut out = Vec::new();
        self.evaluate_into_parallel(params, elapsed, &mut out)?;
        Ok(out)
    }

    /// Evaluate one frame on the rayon pool into `out`, replacing its contents
    pub fn evaluate_into_parallel(
        &self,
        params: &ParameterSet,
        elapsed: f32,
        out: &mut Vec<InstanceRecord>,
    ) -> Result<usize, ConfigError> {
        let sampler = self.prepare(params, elapsed)?;

        let slices: Vec<Vec<InstanceRecord>> = (0..params.resolution)
            .into_par_iter()
            .map(|x| {
                let mut slice = Vec::new();
                sampler.sample_slice(x, &mut slice);
                slice
            })
            .collect();

        out.clear();
        out.reserve(slices.iter().map(Vec::len).sum());
        for slice in slices {
            out.extend(slice);
        }

        debug!(
            resolution = params.resolution,
            survivors = out.len(),
            "evaluated frame (parallel)"
        );
        Ok(out.len())
    }
}
