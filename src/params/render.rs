//! Rendering and scene configuration.

use super::color::Rgb;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Initial camera position; the orbit target is the origin
    pub camera_position: [f32; 3],

    /// Clear color behind the water
    pub background: Rgb,

    /// Quads per side of the water plane
    pub grid_segments: usize,

    /// Side length of the unscaled water plane
    pub grid_extent: f32,

    /// Uniform scale applied to the plane before evaluation
    pub mesh_scale: f32,

    /// Start in wireframe mode
    pub wireframe: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 100.0,
            camera_position: [1.0, 1.0, 1.0],
            background: Rgb::from_u8(0x22, 0x74, 0xa0),
            grid_segments: 512,
            grid_extent: 2.0,
            mesh_scale: 3.0,
            wireframe: false,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}
