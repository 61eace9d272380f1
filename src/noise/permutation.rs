//! Seeded permutation table for gradient noise
//!
//! The table is a Fisher-Yates shuffle of `0..=255` driven by a sine-hash
//! pseudo-random generator, duplicated to 512 entries so lattice lookups of
//! the form `perm[perm[x] + y + 1]` never need a modulo.
//!
//! Author: Moroya Sakamoto

/// Seed used by the flame noise unless the host asks for another one
pub const DEFAULT_SEED: u32 = 42;

/// Length of the duplicated table
pub const TABLE_LEN: usize = 512;

/// Sine-hash pseudo-random generator.
///
/// `next = fract(sin(seed) * 10000)`, with the seed incremented after every
/// draw. Evaluated in `f64` so the sequence (and therefore the shuffle) is
/// stable for a given seed.
#[derive(Debug, Clone)]
pub struct SineRng {
    seed: f64,
}

impl SineRng {
    /// Create a generator starting at `seed`
    pub fn new(seed: u32) -> Self {
        Self { seed: seed as f64 }
    }

    /// Next value in `[0, 1)`
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        let x = self.seed.sin() * 10000.0;
        self.seed += 1.0;
        x - x.floor()
    }
}

/// Immutable 512-entry permutation table
#[derive(Clone)]
pub struct PermutationTable {
    perm: [u8; TABLE_LEN],
    seed: u32,
}

impl PermutationTable {
    /// Build the table for `seed`. Same seed, same table.
    pub fn new(seed: u32) -> Self {
        let mut p = [0u8; 256];
        for (i, v) in p.iter_mut().enumerate() {
            *v = i as u8;
        }

        let mut rng = SineRng::new(seed);
        for i in (1..256usize).rev() {
            let r = ((rng.next_f64() * (i + 1) as f64).floor() as usize).min(i);
            p.swap(i, r);
        }

        let mut perm = [0u8; TABLE_LEN];
        for (i, v) in perm.iter_mut().enumerate() {
            *v = p[i & 255];
        }

        Self { perm, seed }
    }

    /// Seed the table was built from
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Table lookup. `index` must be below [`TABLE_LEN`].
    #[inline(always)]
    pub fn get(&self, index: usize) -> usize {
        self.perm[index] as usize
    }

    /// Raw table contents
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("seed", &self.seed)
            .field("head", &&self.perm[..8])
            .finish()
    }
}
