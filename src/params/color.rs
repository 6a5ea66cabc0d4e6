//! sRGB color triples with hex parsing, as used by the water gradient.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Error returned when a hex color string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("expected 3 or 6 hex digits, got {0:?}")]
    BadLength(String),

    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}

/// sRGB color with components in [0, 1]
///
/// Serialized as a `#rrggbb` string so presets stay hand-editable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from 8-bit channels
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(ColorParseError::BadLength(hex.to_string())),
        };

        let channel = |range: std::ops::Range<usize>| {
            expanded
                .get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| ColorParseError::BadDigit(hex.to_string()))
        };

        Ok(Self::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Quantize to 8-bit channels (clamped)
    pub fn to_u8(&self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Linear interpolation toward `other` (`t = 0` is `self`)
    ///
    /// Written as `a * (1 - t) + b * t` so both endpoints are exact.
    pub fn lerp(&self, other: Rgb, t: f32) -> Rgb {
        let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Convert sRGB-encoded components to linear light for GPU upload
    pub fn to_linear(&self) -> [f32; 3] {
        fn decode(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [decode(self.r), decode(self.g), decode(self.b)]
    }
}

impl From<Rgb> for Vec3 {
    fn from(c: Rgb) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl From<Vec3> for Rgb {
    fn from(v: Vec3) -> Self {
        Rgb::new(v.x, v.y, v.z)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        let depth = Rgb::from_hex("#2274a0").unwrap();
        assert_eq!(depth.to_u8(), [0x22, 0x74, 0xa0]);

        let short = Rgb::from_hex("fa0").unwrap();
        assert_eq!(short.to_u8(), [0xff, 0xaa, 0x00]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Rgb::from_hex("#12345"),
            Err(ColorParseError::BadLength("#12345".to_string()))
        );
        assert!(matches!(
            Rgb::from_hex("#zz0000"),
            Err(ColorParseError::BadDigit(_))
        ));
    }

    #[test]
    fn test_hex_display_matches_input() {
        let c: Rgb = "#82a7c0".parse().unwrap();
        assert_eq!(c.to_string(), "#82a7c0");
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb::new(0.0, 0.2, 0.4);
        let b = Rgb::new(1.0, 0.6, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);

        let mid = a.lerp(b, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.4).abs() < 1e-6);
        assert!((mid.b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_to_linear_keeps_black_and_white() {
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_linear(), [0.0, 0.0, 0.0]);
        let white = Rgb::WHITE.to_linear();
        for c in white {
            assert!((c - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Rgb::from_u8(0x22, 0x74, 0xa0)).unwrap();
        assert_eq!(json, "\"#2274a0\"");

        let back: Rgb = serde_json::from_str("\"#82A7C0\"").unwrap();
        assert_eq!(back.to_hex(), "#82a7c0");

        assert!(serde_json::from_str::<Rgb>("\"blue\"").is_err());
    }
}
