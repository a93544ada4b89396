//! Rotation-curve file tools.
//!
//! A curve file is whitespace-separated `frame value` lines; malformed or
//! non-numeric lines are silently skipped everywhere. Values written back
//! out use six decimal places, matching the render pipeline's convention.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{FramepostError, FramepostResult};
use crate::sequence::sibling_file;

/// Parse `frame value` pairs, keeping the first token verbatim so frame
/// labels round-trip unchanged. Malformed lines are dropped.
pub fn parse_pairs(text: &str) -> Vec<(String, f64)> {
    text.lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let first = parts.next()?.to_owned();
            let value: f64 = parts.next()?.parse().ok()?;
            Some((first, value))
        })
        .collect()
}

/// Parse `frame value` pairs with integer frame numbers, in file order.
pub fn parse_frame_values(text: &str) -> Vec<(u32, f64)> {
    text.lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let frame: u32 = parts.next()?.parse().ok()?;
            let value: f64 = parts.next()?.parse().ok()?;
            Some((frame, value))
        })
        .collect()
}

fn read_curve(path: &Path) -> FramepostResult<String> {
    if !path.is_file() {
        return Err(FramepostError::usage(format!(
            "input file not found: {}",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)
        .with_context(|| format!("read '{}'", path.display()))?)
}

fn write_curve(path: &Path, pairs: &[(String, f64)]) -> FramepostResult<()> {
    let mut out = String::new();
    for (frame, value) in pairs {
        out.push_str(&format!("{frame} {value:.6}\n"));
    }
    std::fs::write(path, out).with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

/// Scale every value so the smallest maps exactly to `target`, writing a
/// `<stem>-scaled` sibling. Returns the factor applied.
pub fn scale_to_min(path: &Path, target: f64) -> FramepostResult<(f64, PathBuf)> {
    let text = read_curve(path)?;
    let pairs = parse_pairs(&text);
    if pairs.is_empty() {
        return Err(FramepostError::curve(
            "no valid numeric second values found in file",
        ));
    }

    let min = pairs.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    if min == 0.0 {
        return Err(FramepostError::curve(format!(
            "smallest value is zero, cannot scale to {target}"
        )));
    }
    let factor = target / min;

    let scaled: Vec<_> = pairs
        .into_iter()
        .map(|(frame, v)| (frame, v * factor))
        .collect();
    let out_path = sibling_file(path, "-scaled");
    write_curve(&out_path, &scaled)?;
    Ok((factor, out_path))
}

/// Multiply every value by -1, writing a `<stem>-reversed` sibling.
pub fn negate(path: &Path) -> FramepostResult<PathBuf> {
    let text = read_curve(path)?;
    let negated: Vec<_> = parse_pairs(&text)
        .into_iter()
        .map(|(frame, v)| (frame, -v))
        .collect();
    let out_path = sibling_file(path, "-reversed");
    write_curve(&out_path, &negated)?;
    Ok(out_path)
}

/// Accumulate per-frame strengths into a total-rotation curve.
///
/// Walks the entries with frames in `[start, end]` in ascending frame order,
/// keeping a running sum of `strength * scale` and emitting the negated sum
/// per frame (subtractive convention: positive strengths rotate backward).
pub fn accumulate(points: &[(u32, f64)], scale: f64, start: u32, end: u32) -> Vec<(u32, f64)> {
    let start = start.max(1);
    let mut in_range: Vec<_> = points
        .iter()
        .copied()
        .filter(|(f, _)| (start..=end).contains(f))
        .collect();
    in_range.sort_by_key(|(f, _)| *f);

    let mut running = 0.0;
    in_range
        .into_iter()
        .map(|(frame, strength)| {
            running += strength * scale;
            (frame, -running)
        })
        .collect()
}

/// Read a strength curve and print the accumulated rotation curve, one
/// `frame degrees` line per frame.
pub fn accumulate_file(path: &Path, scale: f64, start: u32, end: u32) -> FramepostResult<()> {
    let text = read_curve(path)?;
    let points = parse_frame_values(&text);
    if points.is_empty() {
        return Err(FramepostError::curve(
            "no valid frame/strength pairs found in file",
        ));
    }
    for (frame, degrees) in accumulate(&points, scale, start, end) {
        println!("{frame} {degrees:.6}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/curve.rs"]
mod tests;
