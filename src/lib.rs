//! Raging Sea library - procedural water surface with live-tunable waves

pub mod camera;
pub mod cli;
pub mod clock;
pub mod controls;
pub mod noise;
pub mod params;
pub mod rendering;
pub mod snapshot;
pub mod water;
