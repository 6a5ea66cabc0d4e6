//! Keyboard debug panel over the wave parameter schema.
//!
//! The panel only knows about [`WAVE_SCHEMA`]: it selects a field, nudges
//! it by the field's step, and clamps to the field's range. Key bindings
//! live in `main`; this module maps abstract commands to parameter edits.

use crate::params::{ParamKind, ParamSpec, ParamValue, Rgb, WaveControls, WAVE_SCHEMA};

/// Fraction of the way a color moves per nudge
const COLOR_NUDGE: f32 = 1.0 / 32.0;

/// Commands a control surface can issue
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlCommand {
    SelectNext,
    SelectPrevious,
    /// Move the selected field by this many steps (may be negative)
    Nudge(i32),
    Reset,
}

/// Cursor over the schema plus the edit rules
#[derive(Debug, Clone, Default)]
pub struct ControlPanel {
    selected: usize,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &'static ParamSpec {
        &WAVE_SCHEMA[self.selected]
    }

    /// Apply a command; returns a one-line description for logging
    pub fn apply(&mut self, command: ControlCommand, controls: &mut WaveControls) -> String {
        match command {
            ControlCommand::SelectNext => {
                self.selected = (self.selected + 1) % WAVE_SCHEMA.len();
                self.describe(controls)
            }
            ControlCommand::SelectPrevious => {
                self.selected = (self.selected + WAVE_SCHEMA.len() - 1) % WAVE_SCHEMA.len();
                self.describe(controls)
            }
            ControlCommand::Nudge(steps) => {
                let spec = self.selected();
                let live = controls.live_mut();
                let current = live.value(spec.field);
                let endpoints = (live.depth_color, live.surface_color);
                let next = spec.clamp(nudged(spec, current, steps, endpoints));
                live.set_value(spec.field, next);
                self.describe(controls)
            }
            ControlCommand::Reset => {
                controls.reset();
                "parameters reset to defaults".to_string()
            }
        }
    }

    /// `label = value` for the selected field
    pub fn describe(&self, controls: &WaveControls) -> String {
        let spec = self.selected();
        match controls.live().value(spec.field) {
            ParamValue::Scalar(v) => format!("{} = {:.3}", spec.label, v),
            ParamValue::Integer(v) => format!("{} = {}", spec.label, v),
            ParamValue::Color(c) => format!("{} = {}", spec.label, c),
        }
    }
}

/// Move `current` by `steps`; colors blend toward white (up) or toward the
/// opposite gradient endpoint (down)
fn nudged(
    spec: &ParamSpec,
    current: ParamValue,
    steps: i32,
    (depth, surface): (Rgb, Rgb),
) -> ParamValue {
    match (spec.kind, current) {
        (ParamKind::Scalar { step, .. }, ParamValue::Scalar(v)) => {
            ParamValue::Scalar(v + step * steps as f32)
        }
        (ParamKind::Integer { .. }, ParamValue::Integer(v)) => {
            ParamValue::Integer(v.saturating_add_signed(steps))
        }
        (ParamKind::Color, ParamValue::Color(c)) => {
            let toward = if steps >= 0 {
                Rgb::WHITE
            } else if c == depth {
                surface
            } else {
                depth
            };
            let amount = (COLOR_NUDGE * steps.unsigned_abs() as f32).min(1.0);
            ParamValue::Color(c.lerp(toward, amount))
        }
        (_, other) => other,
    }
}
