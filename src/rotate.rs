//! Rotate each frame of a sequence by a per-frame angle from a curve file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::Rgba;
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};

use crate::curve::parse_frame_values;
use crate::foundation::error::{FramepostError, FramepostResult};
use crate::sequence::{FrameSequence, sibling_dir};

/// Parse a rotation curve file into a frame-number -> degrees map. Later
/// duplicates win, malformed lines are skipped.
pub fn parse_rotation_map(text: &str) -> BTreeMap<u32, f64> {
    parse_frame_values(text).into_iter().collect()
}

/// Rotate every frame about its center by the angle mapped to its 1-based
/// sorted index, keeping the canvas size (corners rotating out are cropped,
/// uncovered corners become transparent). Positive degrees rotate
/// counter-clockwise. Frames without an entry pass through unrotated.
pub fn rotate_sequence(curve_path: &Path, dir: &Path) -> FramepostResult<(usize, PathBuf)> {
    if !curve_path.is_file() {
        return Err(FramepostError::usage(format!(
            "rotation file not found: {}",
            curve_path.display()
        )));
    }
    let text = std::fs::read_to_string(curve_path)
        .with_context(|| format!("read '{}'", curve_path.display()))?;
    let map = parse_rotation_map(&text);
    if map.is_empty() {
        tracing::warn!("no valid frame/degrees pairs parsed from rotation file");
    }

    let seq = FrameSequence::scan(dir)?;
    if seq.is_empty() {
        return Err(FramepostError::usage(format!(
            "no PNG files found in '{}'",
            dir.display()
        )));
    }

    let out_dir = sibling_dir(dir, "-rotated")?;
    for (idx, path) in seq.frames().iter().enumerate() {
        let frame_number = (idx + 1) as u32;
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        let degrees = map.get(&frame_number).copied().unwrap_or(0.0);

        let img = image::open(path)
            .with_context(|| format!("decode '{}'", path.display()))?
            .to_rgba8();
        let rotated = if degrees != 0.0 {
            // imageproc's positive theta is clockwise; flip to keep the
            // positive-is-counter-clockwise contract of the curve files.
            let theta = -(degrees.to_radians()) as f32;
            rotate_about_center(&img, theta, Interpolation::Bicubic, Rgba([0, 0, 0, 0]))
        } else {
            img
        };

        let dst = out_dir.join(name.as_ref());
        rotated
            .save(&dst)
            .with_context(|| format!("write '{}'", dst.display()))?;
        println!("Frame {frame_number:4} ({name}): rotated {degrees} degrees");
    }

    Ok((seq.total(), out_dir))
}

#[cfg(test)]
#[path = "../tests/unit/rotate.rs"]
mod tests;
