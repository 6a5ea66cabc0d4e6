//! Wave and color parameters for the water surface, plus the live/default pair.

use glam::Vec2;
use serde::{Deserialize, Deserializer, Serialize};

use super::color::Rgb;

/// Tunable parameters of the wave field
///
/// Units are world units on the (scaled) water plane and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParameters {
    // === Large-scale wave (product of two sines) ===
    /// Peak height of the large wave
    pub big_wave_elevation: f32,

    /// Angular frequency along X (`x`) and Z (`y`)
    pub big_wave_frequency: Vec2,

    /// Phase speed of the large wave (radians per second)
    pub big_wave_speed: f32,

    // === Small-scale chop (octave-summed gradient noise) ===
    /// Height of the first noise octave; octave `i` is scaled by `1/i`
    pub small_wave_elevation: f32,

    /// Spatial frequency of the first octave; octave `i` samples at `i` times this
    pub small_wave_frequency: f32,

    /// Scroll speed of the noise along its time axis
    pub small_wave_speed: f32,

    /// Number of noise octaves (0 disables the chop)
    #[serde(deserialize_with = "deserialize_iterations")]
    pub small_wave_iterations: u32,

    // === Color gradient ===
    /// Added to the height before scaling into the mix factor
    pub color_offset: f32,

    /// Scales the offset height into the mix factor
    pub color_multiplier: f32,

    /// Color of troughs (mix factor 0)
    pub depth_color: Rgb,

    /// Color of crests (mix factor 1)
    pub surface_color: Rgb,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            big_wave_elevation: 0.121,
            big_wave_frequency: Vec2::new(5.0, 2.5),
            big_wave_speed: 0.6,

            small_wave_elevation: 0.04,
            small_wave_frequency: 7.5,
            small_wave_speed: 1.0,
            small_wave_iterations: 9,

            color_offset: 0.15,
            color_multiplier: 6.5,
            depth_color: Rgb::from_u8(0x22, 0x74, 0xa0),
            surface_color: Rgb::from_u8(0x82, 0xa7, 0xc0),
        }
    }
}

/// Largest octave count a preset or control surface may set
pub const MAX_SMALL_WAVE_ITERATIONS: u32 = 10;

/// Floor and clamp an octave count coming from an untyped source
///
/// Negative and NaN values become 0.
pub fn octaves_from_f64(value: f64) -> u32 {
    // `as` saturates: NaN -> 0, negatives -> 0, huge -> u32::MAX
    value.floor() as u32
}

/// Presets are floored and capped at [`MAX_SMALL_WAVE_ITERATIONS`]; every
/// octave is evaluated at every vertex each frame
fn deserialize_iterations<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer)
        .map(|v| octaves_from_f64(v).min(MAX_SMALL_WAVE_ITERATIONS))
}

/// Live parameters together with the snapshot they reset to
///
/// The snapshot is captured once at construction and never handed out
/// mutably, so edits to the live set cannot leak into it.
#[derive(Debug, Clone)]
pub struct WaveControls {
    live: WaveParameters,
    defaults: WaveParameters,
}

impl WaveControls {
    /// Start from `defaults`, which also become the reset snapshot
    pub fn new(defaults: WaveParameters) -> Self {
        Self {
            live: defaults,
            defaults,
        }
    }

    /// Parameters the next frame will be evaluated with
    pub fn live(&self) -> &WaveParameters {
        &self.live
    }

    pub fn live_mut(&mut self) -> &mut WaveParameters {
        &mut self.live
    }

    /// Snapshot that `reset` restores
    pub fn defaults(&self) -> &WaveParameters {
        &self.defaults
    }

    /// Restore every live field from the snapshot
    pub fn reset(&mut self) {
        self.live = self.defaults;
    }

    /// True when the live parameters differ from the snapshot
    pub fn is_modified(&self) -> bool {
        self.live != self.defaults
    }
}

impl Default for WaveControls {
    fn default() -> Self {
        Self::new(WaveParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_values() {
        let p = WaveParameters::default();
        assert_eq!(p.big_wave_elevation, 0.121);
        assert_eq!(p.big_wave_frequency, Vec2::new(5.0, 2.5));
        assert_eq!(p.small_wave_iterations, 9);
        assert_eq!(p.depth_color.to_hex(), "#2274a0");
        assert_eq!(p.surface_color.to_hex(), "#82a7c0");
    }

    #[test]
    fn test_reset_restores_every_field() {
        let mut controls = WaveControls::default();
        {
            let live = controls.live_mut();
            live.big_wave_elevation = -0.5;
            live.big_wave_frequency = Vec2::new(99.0, 0.0);
            live.big_wave_speed = 4.0;
            live.small_wave_elevation = 0.3;
            live.small_wave_frequency = 1.0;
            live.small_wave_speed = 3.0;
            live.small_wave_iterations = 2;
            live.color_offset = 0.9;
            live.color_multiplier = 1.0;
            live.depth_color = Rgb::new(1.0, 0.0, 0.0);
            live.surface_color = Rgb::new(0.0, 1.0, 0.0);
        }
        assert!(controls.is_modified());

        controls.reset();
        assert_eq!(*controls.live(), WaveParameters::default());
        assert!(!controls.is_modified());
    }

    #[test]
    fn test_live_edits_do_not_touch_snapshot() {
        let mut controls = WaveControls::default();
        controls.reset();

        controls.live_mut().big_wave_frequency.x = 42.0;
        controls.live_mut().depth_color.r = 0.0;
        controls.live_mut().surface_color = Rgb::WHITE;

        assert_eq!(*controls.defaults(), WaveParameters::default());

        // And a second reset still yields the original values
        controls.reset();
        assert_eq!(controls.live().big_wave_frequency, Vec2::new(5.0, 2.5));
        assert_eq!(controls.live().depth_color.to_hex(), "#2274a0");
    }

    #[test]
    fn test_custom_snapshot() {
        let mut custom = WaveParameters::default();
        custom.small_wave_iterations = 0;
        let mut controls = WaveControls::new(custom);
        controls.live_mut().small_wave_iterations = 7;
        controls.reset();
        assert_eq!(controls.live().small_wave_iterations, 0);
    }

    #[test]
    fn test_octaves_from_f64_floors_and_clamps() {
        assert_eq!(octaves_from_f64(9.0), 9);
        assert_eq!(octaves_from_f64(3.7), 3);
        assert_eq!(octaves_from_f64(-2.0), 0);
        assert_eq!(octaves_from_f64(f64::NAN), 0);
    }
}
