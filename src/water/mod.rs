//! Water surface: wave field evaluator, grid mesh and per-frame system.

pub mod field;
mod mesh;
mod system;

// Re-export public types
pub use field::{mix_factor, SurfaceSample, WaveField};
pub use mesh::{Vertex, WaterGrid};
pub use system::WaterSystem;
