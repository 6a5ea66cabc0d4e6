//! Headless top-down snapshot of the water surface.
//!
//! Evaluates the wave field on a square pixel grid covering the water plane
//! and writes the shaded colors to a PNG. Useful for comparing presets
//! without opening a window.

use std::path::Path;

use image::{Rgb as Pixel, RgbImage};

use crate::params::{RenderConfig, WaveParameters};
use crate::water::WaveField;

/// Error writing a snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot size must be at least 1 pixel")]
    EmptyImage,

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Render the surface colors at `time_s` into a `size`×`size` image
///
/// Pixel centers map onto the scaled water plane; +X is right and +Z is
/// down, i.e. the view from above.
pub fn render_colors(
    field: &WaveField,
    params: &WaveParameters,
    config: &RenderConfig,
    time_s: f32,
    size: u32,
) -> Result<RgbImage, SnapshotError> {
    if size == 0 {
        return Err(SnapshotError::EmptyImage);
    }

    let side = config.grid_extent * config.mesh_scale;
    let half = side / 2.0;
    let to_world = |pixel: u32| (pixel as f32 + 0.5) / size as f32 * side - half;

    let mut img = RgbImage::new(size, size);
    for (px, pz, pixel) in img.enumerate_pixels_mut() {
        let sample = field.sample(to_world(px), to_world(pz), time_s, params);
        *pixel = Pixel(sample.color.to_u8());
    }
    Ok(img)
}

/// Render and save a PNG snapshot
pub fn save_png(
    path: &Path,
    field: &WaveField,
    params: &WaveParameters,
    config: &RenderConfig,
    time_s: f32,
    size: u32,
) -> Result<(), SnapshotError> {
    let img = render_colors(field, params, config, time_s, size)?;
    img.save(path)?;
    log::info!(
        "wrote {}x{} snapshot at t={:.2}s to {}",
        size,
        size,
        time_s,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Rgb;

    #[test]
    fn test_zero_size_is_rejected() {
        let result = render_colors(
            &WaveField::default(),
            &WaveParameters::default(),
            &RenderConfig::default(),
            0.0,
            0,
        );
        assert!(matches!(result, Err(SnapshotError::EmptyImage)));
    }

    #[test]
    fn test_flat_water_is_uniform() {
        let params = WaveParameters {
            big_wave_elevation: 0.0,
            small_wave_iterations: 0,
            color_offset: 0.0,
            depth_color: Rgb::from_u8(10, 20, 30),
            ..WaveParameters::default()
        };
        let img = render_colors(
            &WaveField::default(),
            &params,
            &RenderConfig::default(),
            2.0,
            16,
        )
        .unwrap();

        // Height 0 with zero offset gives mix factor 0: pure depth color
        assert!(img.pixels().all(|p| p.0 == [10, 20, 30]));
    }

    #[test]
    fn test_pixels_match_field_colors() {
        let field = WaveField::default();
        let params = WaveParameters::default();
        let config = RenderConfig::default();
        let img = render_colors(&field, &params, &config, 1.0, 8).unwrap();

        // Pixel (0, 0) center is at -3 + 6 * 0.5 / 8
        let corner = -3.0 + 6.0 * 0.5 / 8.0;
        let expected = field.sample(corner, corner, 1.0, &params).color.to_u8();
        assert_eq!(img.get_pixel(0, 0).0, expected);
    }

    #[test]
    fn test_save_png_writes_file() {
        let path = std::env::temp_dir()
            .join(format!("ragingsea-snapshot-{}.png", std::process::id()));
        save_png(
            &path,
            &WaveField::default(),
            &WaveParameters::default(),
            &RenderConfig::default(),
            0.5,
            4,
        )
        .unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
