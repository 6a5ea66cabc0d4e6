//! Water plane mesh: a subdivided XZ grid displaced by the wave field.
//!
//! Only heights live on the CPU side. The color gradient is applied per
//! fragment from the interpolated height (see `water.wgsl`).

use bytemuck::{Pod, Zeroable};
use rayon::prelude::*;

use super::field::WaveField;
use crate::params::WaveParameters;

/// Vertex data for the water mesh; `position[1]` is the wave height
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

/// Subdivided square plane centered on the origin
pub struct WaterGrid {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Undisplaced (x, z) of every vertex, in world units
    rest: Vec<[f32; 2]>,
    segments: usize,
}

impl WaterGrid {
    /// Build a `segments`×`segments` grid spanning `extent * scale` per side
    ///
    /// Coordinates are stored already scaled, so the wave field is
    /// evaluated in world units.
    pub fn new(segments: usize, extent: f32, scale: f32) -> Self {
        let segments = segments.max(1);
        let size = extent * scale;
        let half_size = size / 2.0;
        let spacing = size / segments as f32;

        let mut vertices = Vec::with_capacity((segments + 1).pow(2));
        let mut rest = Vec::with_capacity((segments + 1).pow(2));
        let mut indices = Vec::with_capacity(segments.pow(2) * 6);

        // Generate flat XZ plane grid
        for z in 0..=segments {
            for x in 0..=segments {
                let x_pos = x as f32 * spacing - half_size;
                let z_pos = z as f32 * spacing - half_size;

                vertices.push(Vertex {
                    position: [x_pos, 0.0, z_pos],
                });
                rest.push([x_pos, z_pos]);
            }
        }

        // Counter-clockwise when seen from +Y
        for z in 0..segments {
            for x in 0..segments {
                let top_left = (z * (segments + 1) + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * (segments + 1) + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self {
            vertices,
            indices,
            rest,
            segments,
        }
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Re-evaluate every vertex height for time `time_s`
    ///
    /// Vertices are independent, so the grid is split across the rayon pool.
    pub fn update(&mut self, field: &WaveField, params: &WaveParameters, time_s: f32) {
        self.vertices
            .par_iter_mut()
            .zip(self.rest.par_iter())
            .for_each(|(vertex, &[x, z])| {
                vertex.position[1] = field.height(x, z, time_s, params);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::NoiseGenerator;

    #[test]
    fn test_water_grid_creation() {
        let grid = WaterGrid::new(16, 2.0, 3.0);

        // Check vertex count: (segments + 1)^2
        assert_eq!(grid.vertices.len(), 17 * 17);

        // Check triangle count: segments^2 * 2 triangles * 3 indices
        assert_eq!(grid.indices.len(), 16 * 16 * 6);
        assert!(grid
            .indices
            .iter()
            .all(|&i| (i as usize) < grid.vertices.len()));
    }

    #[test]
    fn test_grid_spans_scaled_extent() {
        let grid = WaterGrid::new(8, 2.0, 3.0);
        let first = grid.vertices.first().unwrap().position;
        let last = grid.vertices.last().unwrap().position;
        assert_eq!(first, [-3.0, 0.0, -3.0]);
        assert_eq!(last, [3.0, 0.0, 3.0]);
    }

    #[test]
    fn test_triangles_face_up() {
        let grid = WaterGrid::new(4, 2.0, 1.0);
        for tri in grid.indices.chunks(3) {
            let p = |i: u32| glam::Vec3::from_array(grid.vertices[i as usize].position);
            let normal = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
            assert!(normal.y > 0.0);
        }
    }

    #[test]
    fn test_update_writes_field_heights() {
        let field = WaveField::default();
        let params = WaveParameters::default();
        let mut grid = WaterGrid::new(8, 2.0, 3.0);
        grid.update(&field, &params, 1.5);

        for vertex in &grid.vertices {
            let [x, y, z] = vertex.position;
            assert_eq!(y, field.height(x, z, 1.5, &params));
        }
    }

    #[test]
    fn test_update_does_not_drift_xz() {
        let field = WaveField::default();
        let params = WaveParameters::default();
        let mut grid = WaterGrid::new(4, 2.0, 3.0);
        let before: Vec<_> = grid.vertices.iter().map(|v| (v.position[0], v.position[2])).collect();

        grid.update(&field, &params, 0.5);
        grid.update(&field, &params, 9.0);

        let after: Vec<_> = grid.vertices.iter().map(|v| (v.position[0], v.position[2])).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_parallel_update_matches_serial_evaluation() {
        let field = WaveField::new(NoiseGenerator::new(11));
        let params = WaveParameters::default();
        let mut grid = WaterGrid::new(96, 2.0, 3.0);
        grid.update(&field, &params, 2.75);

        let expected: Vec<f32> = grid
            .rest
            .iter()
            .map(|&[x, z]| field.sample(x, z, 2.75, &params).height)
            .collect();
        let actual: Vec<f32> = grid.vertices.iter().map(|v| v.position[1]).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_update_tracks_time() {
        let field = WaveField::default();
        let params = WaveParameters::default();
        let mut grid = WaterGrid::new(8, 2.0, 3.0);

        grid.update(&field, &params, 0.0);
        let first: Vec<f32> = grid.vertices.iter().map(|v| v.position[1]).collect();
        grid.update(&field, &params, 1.0);
        let second: Vec<f32> = grid.vertices.iter().map(|v| v.position[1]).collect();
        assert_ne!(first, second);
    }
}
