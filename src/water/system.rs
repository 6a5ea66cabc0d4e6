//! High-level water system: mesh, evaluator and live parameters.

use super::field::WaveField;
use super::mesh::WaterGrid;
use crate::noise::NoiseGenerator;
use crate::params::{RenderConfig, WaveControls, WaveParameters};

/// Owns the water mesh and the parameters it is evaluated with
pub struct WaterSystem {
    pub grid: WaterGrid,
    pub controls: WaveControls,
    field: WaveField,
}

impl WaterSystem {
    /// Create a water system; `defaults` become both the live parameters
    /// and the reset snapshot
    pub fn new(config: &RenderConfig, defaults: WaveParameters, noise_seed: u32) -> Self {
        let grid = WaterGrid::new(config.grid_segments, config.grid_extent, config.mesh_scale);
        log::debug!(
            "water grid: {} segments, {} vertices, {} indices",
            grid.segments(),
            grid.vertices.len(),
            grid.indices.len()
        );

        Self {
            grid,
            controls: WaveControls::new(defaults),
            field: WaveField::new(NoiseGenerator::new(noise_seed)),
        }
    }

    /// Re-evaluate the surface at `time_s` with the current live parameters
    pub fn update(&mut self, time_s: f32) {
        self.grid.update(&self.field, self.controls.live(), time_s);
    }
}
