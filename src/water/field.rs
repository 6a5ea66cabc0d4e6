//! Wave field evaluator: height and color of the water surface at a point.
//!
//! Height is a product of two sines (the large swell) minus a sum of
//! noise-octave magnitudes (the chop). Taking the magnitude before
//! subtracting turns every octave into troughs, which reads as sharp
//! crests between rounded hollows. Color is a clamped linear gradient from
//! the depth color to the surface color driven by that height.
//!
//! Everything here is pure: same inputs, same outputs, no state.

use crate::noise::NoiseGenerator;
use crate::params::{Rgb, WaveParameters};

/// Height and color of one surface point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub height: f32,
    pub color: Rgb,
}

/// Stateless evaluator over a fixed noise source
#[derive(Debug, Clone, Default)]
pub struct WaveField {
    noise: NoiseGenerator,
}

impl WaveField {
    pub fn new(noise: NoiseGenerator) -> Self {
        Self { noise }
    }

    /// Large-scale swell at `(x, z)` and time `t`
    pub fn big_wave(&self, x: f32, z: f32, t: f32, p: &WaveParameters) -> f32 {
        let phase = t * p.big_wave_speed;
        (x * p.big_wave_frequency.x + phase).sin()
            * (z * p.big_wave_frequency.y + phase).sin()
            * p.big_wave_elevation
    }

    /// Small-scale chop at `(x, z)` and time `t`; never positive
    ///
    /// Octave `i` (1-based) samples at `i` times the base frequency and is
    /// weighted by `1/i`.
    pub fn small_waves(&self, x: f32, z: f32, t: f32, p: &WaveParameters) -> f32 {
        let time = t * p.small_wave_speed;
        let mut chop = 0.0;
        for i in 1..=p.small_wave_iterations {
            let scale = p.small_wave_frequency * i as f32;
            let n = self.noise.sample_3d(x * scale, z * scale, time);
            chop -= n.abs() * p.small_wave_elevation / i as f32;
        }
        chop
    }

    /// Final displacement at `(x, z)` and time `t`
    pub fn height(&self, x: f32, z: f32, t: f32, p: &WaveParameters) -> f32 {
        self.big_wave(x, z, t, p) + self.small_waves(x, z, t, p)
    }

    /// Surface color for a given height
    pub fn color(&self, height: f32, p: &WaveParameters) -> Rgb {
        p.depth_color.lerp(p.surface_color, mix_factor(height, p))
    }

    /// Height and color together
    pub fn sample(&self, x: f32, z: f32, t: f32, p: &WaveParameters) -> SurfaceSample {
        let height = self.height(x, z, t, p);
        SurfaceSample {
            height,
            color: self.color(height, p),
        }
    }
}

/// Gradient weight for a height, clamped to [0, 1]
pub fn mix_factor(height: f32, p: &WaveParameters) -> f32 {
    ((height + p.color_offset) * p.color_multiplier).clamp(0.0, 1.0)
}
