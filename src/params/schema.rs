//! Typed control schema for the wave parameters.
//!
//! Any control surface (keyboard panel, a future GUI, scripted tweaks) works
//! against this table instead of binding to struct fields directly. Ranges
//! are presentation policy: the evaluator accepts any finite value.

use super::color::Rgb;
use super::water::{octaves_from_f64, WaveParameters, MAX_SMALL_WAVE_ITERATIONS};

/// Every tunable field, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    BigWaveElevation,
    BigWaveFrequencyX,
    BigWaveFrequencyZ,
    BigWaveSpeed,
    ColorOffset,
    ColorMultiplier,
    SmallWaveElevation,
    SmallWaveFrequency,
    SmallWaveSpeed,
    SmallWaveIterations,
    DepthColor,
    SurfaceColor,
}

/// Value type and valid range of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    Scalar { min: f32, max: f32, step: f32 },
    Integer { min: u32, max: u32 },
    Color,
}

/// A field's current value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Scalar(f32),
    Integer(u32),
    Color(Rgb),
}

/// Schema entry: field, display label and kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub field: ParamField,
    pub label: &'static str,
    pub kind: ParamKind,
}

const fn scalar(
    field: ParamField,
    label: &'static str,
    min: f32,
    max: f32,
    step: f32,
) -> ParamSpec {
    ParamSpec {
        field,
        label,
        kind: ParamKind::Scalar { min, max, step },
    }
}

/// The full schema, in display order
pub const WAVE_SCHEMA: [ParamSpec; 12] = [
    scalar(ParamField::BigWaveElevation, "big wave elevation", 0.0, 0.2, 0.001),
    scalar(ParamField::BigWaveFrequencyX, "big wave frequency X", 0.0, 100.0, 0.1),
    scalar(ParamField::BigWaveFrequencyZ, "big wave frequency Z", 0.0, 100.0, 0.1),
    scalar(ParamField::BigWaveSpeed, "big wave speed", 0.0, 5.0, 0.001),
    scalar(ParamField::ColorOffset, "color offset", 0.0, 1.0, 0.001),
    scalar(ParamField::ColorMultiplier, "color multiplier", 0.0, 10.0, 0.001),
    scalar(ParamField::SmallWaveElevation, "small wave elevation", 0.0, 0.5, 0.001),
    scalar(ParamField::SmallWaveFrequency, "small wave frequency", 0.0, 10.0, 0.001),
    scalar(ParamField::SmallWaveSpeed, "small wave speed", 0.0, 4.0, 0.001),
    ParamSpec {
        field: ParamField::SmallWaveIterations,
        label: "small wave iterations",
        kind: ParamKind::Integer {
            min: 0,
            max: MAX_SMALL_WAVE_ITERATIONS,
        },
    },
    ParamSpec {
        field: ParamField::DepthColor,
        label: "depth color",
        kind: ParamKind::Color,
    },
    ParamSpec {
        field: ParamField::SurfaceColor,
        label: "surface color",
        kind: ParamKind::Color,
    },
];

impl ParamField {
    /// Schema entry for this field
    pub fn spec(self) -> &'static ParamSpec {
        // WAVE_SCHEMA lists every variant exactly once, in declaration order
        &WAVE_SCHEMA[self as usize]
    }
}

impl ParamSpec {
    /// Clamp into the field's range and snap scalars to the step grid
    ///
    /// Values of the wrong kind are converted where it makes sense
    /// (scalar -> integer floors, integer -> scalar widens).
    pub fn clamp(&self, value: ParamValue) -> ParamValue {
        match (self.kind, value) {
            (ParamKind::Scalar { min, max, step }, v) => {
                let raw = match v {
                    ParamValue::Scalar(s) => s,
                    ParamValue::Integer(i) => i as f32,
                    ParamValue::Color(_) => min,
                };
                let snapped = if step > 0.0 {
                    ((raw - min) / step).round() * step + min
                } else {
                    raw
                };
                ParamValue::Scalar(snapped.clamp(min, max))
            }
            (ParamKind::Integer { min, max }, v) => {
                let raw = match v {
                    ParamValue::Scalar(s) => octaves_from_f64(s as f64),
                    ParamValue::Integer(i) => i,
                    ParamValue::Color(_) => min,
                };
                ParamValue::Integer(raw.clamp(min, max))
            }
            (ParamKind::Color, ParamValue::Color(c)) => ParamValue::Color(Rgb::new(
                c.r.clamp(0.0, 1.0),
                c.g.clamp(0.0, 1.0),
                c.b.clamp(0.0, 1.0),
            )),
            (ParamKind::Color, other) => other,
        }
    }
}

impl WaveParameters {
    /// Read a field through the schema
    pub fn value(&self, field: ParamField) -> ParamValue {
        use ParamField::*;
        match field {
            BigWaveElevation => ParamValue::Scalar(self.big_wave_elevation),
            BigWaveFrequencyX => ParamValue::Scalar(self.big_wave_frequency.x),
            BigWaveFrequencyZ => ParamValue::Scalar(self.big_wave_frequency.y),
            BigWaveSpeed => ParamValue::Scalar(self.big_wave_speed),
            ColorOffset => ParamValue::Scalar(self.color_offset),
            ColorMultiplier => ParamValue::Scalar(self.color_multiplier),
            SmallWaveElevation => ParamValue::Scalar(self.small_wave_elevation),
            SmallWaveFrequency => ParamValue::Scalar(self.small_wave_frequency),
            SmallWaveSpeed => ParamValue::Scalar(self.small_wave_speed),
            SmallWaveIterations => ParamValue::Integer(self.small_wave_iterations),
            DepthColor => ParamValue::Color(self.depth_color),
            SurfaceColor => ParamValue::Color(self.surface_color),
        }
    }

    /// Write a field through the schema
    ///
    /// No range clamping happens here (see [`ParamSpec::clamp`]); only kind
    /// conversion. Scalars written to the octave count are floored and
    /// clamped to zero. A value of the wrong kind for a color field is
    /// ignored and `false` is returned.
    pub fn set_value(&mut self, field: ParamField, value: ParamValue) -> bool {
        use ParamField::*;

        match (field, value) {
            (DepthColor, ParamValue::Color(c)) => self.depth_color = c,
            (SurfaceColor, ParamValue::Color(c)) => self.surface_color = c,
            (_, ParamValue::Color(_)) | (DepthColor | SurfaceColor, _) => return false,
            (SmallWaveIterations, ParamValue::Integer(i)) => self.small_wave_iterations = i,
            (SmallWaveIterations, ParamValue::Scalar(s)) => {
                self.small_wave_iterations = octaves_from_f64(s as f64)
            }
            (_, ParamValue::Scalar(s)) => return self.set_scalar(field, s),
            (_, ParamValue::Integer(i)) => return self.set_scalar(field, i as f32),
        }
        true
    }

    fn set_scalar(&mut self, field: ParamField, s: f32) -> bool {
        use ParamField::*;
        match field {
            BigWaveElevation => self.big_wave_elevation = s,
            BigWaveFrequencyX => self.big_wave_frequency.x = s,
            BigWaveFrequencyZ => self.big_wave_frequency.y = s,
            BigWaveSpeed => self.big_wave_speed = s,
            ColorOffset => self.color_offset = s,
            ColorMultiplier => self.color_multiplier = s,
            SmallWaveElevation => self.small_wave_elevation = s,
            SmallWaveFrequency => self.small_wave_frequency = s,
            SmallWaveSpeed => self.small_wave_speed = s,
            SmallWaveIterations | DepthColor | SurfaceColor => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_order_matches_enum() {
        for (index, spec) in WAVE_SCHEMA.iter().enumerate() {
            assert_eq!(spec.field as usize, index, "{} out of order", spec.label);
            assert_eq!(spec.field.spec(), spec);
        }
    }

    #[test]
    fn test_reference_ranges() {
        assert_eq!(
            ParamField::BigWaveElevation.spec().kind,
            ParamKind::Scalar {
                min: 0.0,
                max: 0.2,
                step: 0.001
            }
        );
        assert_eq!(
            ParamField::SmallWaveIterations.spec().kind,
            ParamKind::Integer { min: 0, max: 10 }
        );
    }

    #[test]
    fn test_defaults_lie_within_ranges() {
        let params = WaveParameters::default();
        for spec in &WAVE_SCHEMA {
            let value = params.value(spec.field);
            match (spec.kind, value) {
                (ParamKind::Scalar { min, max, .. }, ParamValue::Scalar(v)) => {
                    assert!(v >= min && v <= max, "{} = {} out of range", spec.label, v)
                }
                (ParamKind::Integer { min, max }, ParamValue::Integer(v)) => {
                    assert!(v >= min && v <= max, "{} = {} out of range", spec.label, v)
                }
                (ParamKind::Color, ParamValue::Color(_)) => {}
                other => panic!("kind mismatch for {}: {:?}", spec.label, other),
            }
        }
    }

    #[test]
    fn test_set_then_get_every_scalar() {
        let mut params = WaveParameters::default();
        for spec in &WAVE_SCHEMA {
            if let ParamKind::Scalar { .. } = spec.kind {
                assert!(params.set_value(spec.field, ParamValue::Scalar(0.125)));
                assert_eq!(params.value(spec.field), ParamValue::Scalar(0.125));
            }
        }
        assert_eq!(params.big_wave_frequency.x, 0.125);
        assert_eq!(params.big_wave_frequency.y, 0.125);
    }

    #[test]
    fn test_iterations_from_scalar_are_floored() {
        let mut params = WaveParameters::default();
        params.set_value(ParamField::SmallWaveIterations, ParamValue::Scalar(4.9));
        assert_eq!(params.small_wave_iterations, 4);
        params.set_value(ParamField::SmallWaveIterations, ParamValue::Scalar(-3.0));
        assert_eq!(params.small_wave_iterations, 0);
    }

    #[test]
    fn test_color_field_rejects_scalar() {
        let mut params = WaveParameters::default();
        assert!(!params.set_value(ParamField::DepthColor, ParamValue::Scalar(1.0)));
        assert_eq!(params, WaveParameters::default());

        assert!(params.set_value(ParamField::DepthColor, ParamValue::Color(Rgb::WHITE)));
        assert_eq!(params.depth_color, Rgb::WHITE);
    }

    #[test]
    fn test_clamp_snaps_and_bounds() {
        let spec = ParamField::BigWaveElevation.spec();
        assert_eq!(spec.clamp(ParamValue::Scalar(0.5)), ParamValue::Scalar(0.2));
        assert_eq!(spec.clamp(ParamValue::Scalar(-1.0)), ParamValue::Scalar(0.0));

        let ParamValue::Scalar(snapped) = spec.clamp(ParamValue::Scalar(0.12345)) else {
            panic!("expected scalar");
        };
        assert!((snapped - 0.123).abs() < 1e-6);

        let iterations = ParamField::SmallWaveIterations.spec();
        assert_eq!(iterations.clamp(ParamValue::Integer(40)), ParamValue::Integer(10));
        assert_eq!(iterations.clamp(ParamValue::Scalar(2.5)), ParamValue::Integer(2));
    }
}
