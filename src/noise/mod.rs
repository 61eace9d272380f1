//! Gradient noise for the flame field (Deep Fried Edition)
//!
//! Classic improved-Perlin noise over a seeded [`PermutationTable`].
//! Output lies in roughly `[-1, 1]`, is zero on integer lattice points and
//! repeats every 256 units along each axis.
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: `fade`, `lerp` and `grad3d` inline into the
//!   lattice walk.
//! - **No Modulo**: Corner hashes index the 512-entry table directly.
//!
//! Author: Moroya Sakamoto

mod permutation;

pub use permutation::{PermutationTable, SineRng, DEFAULT_SEED, TABLE_LEN};

/// Seeded 3D gradient noise sampler.
///
/// Holds its permutation table by value; build it once per session and
/// share it by reference (it is `Sync`) across every evaluator.
#[derive(Debug, Clone, Default)]
pub struct NoiseGenerator {
    table: PermutationTable,
}

impl NoiseGenerator {
    /// Create a generator with the table for `seed`
    pub fn new(seed: u32) -> Self {
        Self::from_table(PermutationTable::new(seed))
    }

    /// Create a generator around an existing table
    pub fn from_table(table: PermutationTable) -> Self {
        Self { table }
    }

    /// The underlying permutation table
    #[inline]
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Sample 3D gradient noise at `(x, y, z)`
    #[inline]
    pub fn noise_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let fx = x.floor();
        let fy = y.floor();
        let fz = z.floor();

        let xi = (fx as i32 & 255) as usize;
        let yi = (fy as i32 & 255) as usize;
        let zi = (fz as i32 & 255) as usize;

        let x = x - fx;
        let y = y - fy;
        let z = z - fz;

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let perm = &self.table;
        let a = perm.get(xi) + yi;
        let aa = perm.get(a) + zi;
        let ab = perm.get(a + 1) + zi;
        let b = perm.get(xi + 1) + yi;
        let ba = perm.get(b) + zi;
        let bb = perm.get(b + 1) + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(
                    u,
                    grad3d(perm.get(aa), x, y, z),
                    grad3d(perm.get(ba), x - 1.0, y, z),
                ),
                lerp(
                    u,
                    grad3d(perm.get(ab), x, y - 1.0, z),
                    grad3d(perm.get(bb), x - 1.0, y - 1.0, z),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad3d(perm.get(aa + 1), x, y, z - 1.0),
                    grad3d(perm.get(ba + 1), x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad3d(perm.get(ab + 1), x, y - 1.0, z - 1.0),
                    grad3d(perm.get(bb + 1), x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }
}

// Helper functions - all forced inline

/// Quintic fade `6t⁵ - 15t⁴ + 10t³`
#[inline(always)]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline(always)]
fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

/// Dot product with one of 12 edge gradients, selected by the low 4 hash bits
#[inline(always)]
fn grad3d(hash: usize, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };

    let g1 = if (h & 1) == 0 { u } else { -u };
    let g2 = if (h & 2) == 0 { v } else { -v };
    g1 + g2
}
