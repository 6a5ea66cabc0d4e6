//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{preset, PresetError, RenderConfig, Rgb, WaveParameters};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "ragingsea")]
#[command(about = "Animated procedural water surface with live-tunable waves", long_about = None)]
pub struct Args {
    /// JSON preset with wave parameters (also becomes the reset target)
    #[arg(long, value_name = "PATH")]
    pub preset: Option<PathBuf>,

    /// Quads per side of the water plane
    #[arg(long, value_name = "N", default_value_t = 512)]
    pub segments: usize,

    /// Seed for the small-wave noise
    #[arg(long, default_value_t = 0)]
    pub seed: u32,

    /// Start in wireframe mode
    #[arg(long)]
    pub wireframe: bool,

    /// Background color as hex
    #[arg(long, value_name = "HEX", default_value = "#2274a0")]
    pub background: Rgb,

    /// Window width (logical pixels)
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Window height (logical pixels)
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the effective wave parameters as JSON and exit
    #[arg(long)]
    pub print_defaults: bool,

    /// Write a top-down PNG of the surface instead of opening a window
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Time (seconds) at which the snapshot is evaluated
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub snapshot_time: f32,

    /// Snapshot width and height (pixels)
    #[arg(long, value_name = "PX", default_value_t = 512)]
    pub snapshot_size: u32,
}

impl Args {
    /// Build the render configuration from defaults plus overrides
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
            background: self.background,
            grid_segments: self.segments.max(1),
            wireframe: self.wireframe,
            ..RenderConfig::default()
        }
    }

    /// Wave parameters from the preset file, or the built-in defaults
    pub fn wave_parameters(&self) -> Result<WaveParameters, PresetError> {
        match &self.preset {
            Some(path) => preset::load(path),
            None => Ok(WaveParameters::default()),
        }
    }
}
