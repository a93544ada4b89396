//! Overlay configuration: one immutable value constructed before the frame
//! loop and passed explicitly into the render routine.
//!
//! Defaults mirror the production render setup; a JSON file with the same
//! shape can be loaded to override them.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::error::FramepostResult;
use crate::overlay::layout::Corner;

/// One corner's overlay: raw line templates plus font and placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelSpec {
    /// Raw line templates, top to bottom. Blank entries are dropped during
    /// normalization; an empty list disables the corner.
    #[serde(default)]
    pub lines: Vec<String>,
    /// TrueType font file for this corner.
    pub font_path: PathBuf,
    /// Base point size. Emphasis lines use `size * emphasis_scale`.
    pub size: f32,
    /// Text color, straight-alpha RGBA.
    pub color: [u8; 4],
    /// Distance from this corner's vertical edge (left or right).
    pub offset_x: u32,
    /// Distance from this corner's horizontal edge (top or bottom).
    pub offset_y: u32,
}

impl LabelSpec {
    fn empty(font_path: &str, size: f32, color: [u8; 4]) -> Self {
        Self {
            lines: Vec::new(),
            font_path: PathBuf::from(font_path),
            size,
            color,
            offset_x: 15,
            offset_y: 10,
        }
    }
}

/// The whole overlay setup: four corner specs plus the global constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Top-left corner block.
    pub top_left: LabelSpec,
    /// Top-right corner block.
    pub top_right: LabelSpec,
    /// Bottom-left corner block.
    pub bottom_left: LabelSpec,
    /// Bottom-right corner block.
    pub bottom_right: LabelSpec,
    /// Vertical gap between stacked lines, in pixels.
    pub line_spacing: f32,
    /// Point-size multiplier for lines carrying the `!` emphasis marker.
    pub emphasis_scale: f32,
    /// Simulated hours elapsed per rendered frame.
    pub hours_per_frame: f64,
    /// Elapsed-time label template; `X` is replaced with padded days, `Y`
    /// with padded hours.
    pub time_template: String,
    /// Re-render only these filenames; empty means every frame. Frame-index
    /// tokens and totals still come from the full folder listing, so a
    /// selective re-run produces byte-identical frames.
    #[serde(default)]
    pub filter: Vec<String>,
}

impl OverlayConfig {
    /// Load a config from a JSON file.
    pub fn from_path(path: &Path) -> FramepostResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read overlay config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse overlay config '{}'", path.display()))?;
        Ok(cfg)
    }

    /// The label spec anchored at `corner`.
    pub fn spec(&self, corner: Corner) -> &LabelSpec {
        match corner {
            Corner::TopLeft => &self.top_left,
            Corner::TopRight => &self.top_right,
            Corner::BottomLeft => &self.bottom_left,
            Corner::BottomRight => &self.bottom_right,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        const FONT: &str = "RobotoCondensed.ttf";
        const WHITE: [u8; 4] = [255, 255, 255, 255];
        const BLACK: [u8; 4] = [0, 0, 0, 255];
        let hours_per_frame = 0.98;

        let mut top_left = LabelSpec::empty(FONT, 50.0, WHITE);
        top_left.lines = vec![
            "!ECDOsim v11: S1 -> S2".into(),
            "Particle Velocity View".into(),
            "Pivots: (-20 S,130 E), (20 N,-50 W)".into(),
        ];

        let top_right = LabelSpec::empty(FONT, 64.0, BLACK);

        let mut bottom_left = LabelSpec::empty(FONT, 50.0, WHITE);
        bottom_left.lines = vec!["2500x2500 pixels".into(), "~138 million particles".into()];

        let bottom_right = LabelSpec::empty(FONT, 50.0, BLACK);

        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            line_spacing: 1.0,
            emphasis_scale: 1.5,
            hours_per_frame,
            time_template: format!("Time Estimate ({hours_per_frame:.1} hr/frame): X dd Y hr"),
            filter: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/config.rs"]
mod tests;
