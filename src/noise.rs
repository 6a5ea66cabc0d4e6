//! Noise generation for the small-scale water chop.
//!
//! Classic 3D gradient (Perlin) noise: continuous, deterministic for a given
//! seed, and exactly zero on the integer lattice.

use noise::{NoiseFn, Perlin};

/// Seeded 3D noise source
#[derive(Clone)]
pub struct NoiseGenerator {
    perlin: Perlin,
    seed: u32,
}

impl NoiseGenerator {
    /// Create new noise generator with seed
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            seed,
        }
    }

    /// Sample 3D noise at position
    ///
    /// Returns value in range [-1, 1]
    pub fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        self.perlin.get([x as f64, y as f64, z as f64]) as f32
    }
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl std::fmt::Debug for NoiseGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseGenerator")
            .field("seed", &self.seed)
            .finish()
    }
}
