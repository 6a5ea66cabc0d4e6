//! Parameter definitions with documented units and ranges.
//!
//! All tunables live here:
//! - Wave and color parameters (live set plus reset snapshot)
//! - The typed control schema consumed by control surfaces
//! - Scene/render configuration
//! - JSON presets

mod color;
pub mod preset;
mod render;
mod schema;
mod water;

// Re-export all types
pub use color::{ColorParseError, Rgb};
pub use preset::PresetError;
pub use render::RenderConfig;
pub use schema::{ParamField, ParamKind, ParamSpec, ParamValue, WAVE_SCHEMA};
pub use water::{octaves_from_f64, WaveControls, WaveParameters, MAX_SMALL_WAVE_ITERATIONS};
