//! Crop tools: non-black bounding-box scan, fixed-box crop, centered square.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbImage;

use crate::foundation::error::{FramepostError, FramepostResult};
use crate::sequence::{FrameSequence, sibling_dir};

/// An inclusive pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    /// Leftmost column.
    pub left: u32,
    /// Topmost row.
    pub top: u32,
    /// Rightmost column (inclusive for scans, exclusive for crops).
    pub right: u32,
    /// Bottommost row (inclusive for scans, exclusive for crops).
    pub bottom: u32,
}

/// Bounding box of the non-black (RGB != 0,0,0) pixels of one frame, or
/// `None` when the frame is entirely black. Rows and columns are walked in
/// from each edge, so mostly-black frames stay cheap.
pub fn frame_bbox(img: &RgbImage) -> Option<PixelBox> {
    let (width, height) = img.dimensions();
    let non_black = |x: u32, y: u32| img.get_pixel(x, y).0 != [0, 0, 0];

    let top = (0..height).find(|&y| (0..width).any(|x| non_black(x, y)))?;
    let bottom = (0..height).rev().find(|&y| (0..width).any(|x| non_black(x, y)))?;
    let left = (0..width).find(|&x| (0..height).any(|y| non_black(x, y)))?;
    let right = (0..width).rev().find(|&x| (0..height).any(|y| non_black(x, y)))?;

    Some(PixelBox { left, top, right, bottom })
}

/// Union of non-black bounding boxes across the first `max_frames` sorted
/// frames (all frames when `None`). All frames must share one resolution.
/// Returns `None` when every scanned frame is entirely black.
pub fn scan_bbox(dir: &Path, max_frames: Option<usize>) -> FramepostResult<Option<PixelBox>> {
    let seq = FrameSequence::scan(dir)?;
    if seq.is_empty() {
        return Err(FramepostError::usage(format!(
            "no PNG files found in '{}'",
            dir.display()
        )));
    }

    let frames = match max_frames {
        Some(n) if n > 0 => &seq.frames()[..n.min(seq.total())],
        _ => seq.frames(),
    };
    let total = frames.len();

    let mut global: Option<PixelBox> = None;
    let mut reference: Option<(u32, u32)> = None;

    for (idx, path) in frames.iter().enumerate() {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        print!("\rProcessing {}/{}: {}", idx + 1, total, name);
        use std::io::Write as _;
        let _ = std::io::stdout().flush();

        let img = image::open(path)
            .with_context(|| format!("decode '{}'", path.display()))?
            .to_rgb8();

        match reference {
            None => reference = Some(img.dimensions()),
            Some(dims) if dims != img.dimensions() => {
                println!();
                return Err(FramepostError::validation(format!(
                    "not all images have the same resolution (mismatch at {name})"
                )));
            }
            Some(_) => {}
        }

        let Some(bbox) = frame_bbox(&img) else {
            continue; // entirely black frame
        };

        global = Some(match global {
            None => bbox,
            Some(g) => PixelBox {
                left: g.left.min(bbox.left),
                top: g.top.min(bbox.top),
                right: g.right.max(bbox.right),
                bottom: g.bottom.max(bbox.bottom),
            },
        });
    }
    println!();

    Ok(global)
}

/// Crop every frame to `bbox` (exclusive right/bottom), writing to a
/// `<dir>-cropped` sibling. The box is validated against the first frame.
pub fn crop_sequence(dir: &Path, bbox: PixelBox) -> FramepostResult<(usize, PathBuf)> {
    let seq = FrameSequence::scan(dir)?;
    if seq.is_empty() {
        return Err(FramepostError::usage(format!(
            "no PNG files found in '{}'",
            dir.display()
        )));
    }

    let first = image::open(&seq.frames()[0])
        .with_context(|| format!("decode '{}'", seq.frames()[0].display()))?;
    let (w, h) = (first.width(), first.height());
    if !(bbox.left < bbox.right && bbox.right <= w && bbox.top < bbox.bottom && bbox.bottom <= h) {
        return Err(FramepostError::validation(format!(
            "crop box ({}, {}, {}, {}) is out of bounds for image size {w}x{h}",
            bbox.left, bbox.top, bbox.right, bbox.bottom
        )));
    }

    let out_dir = sibling_dir(dir, "-cropped")?;
    let total = seq.total();
    for (idx, path) in seq.frames().iter().enumerate() {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        print!("\rProcessing {}/{}: {}", idx + 1, total, name);
        use std::io::Write as _;
        let _ = std::io::stdout().flush();

        let img = image::open(path)
            .with_context(|| format!("decode '{}'", path.display()))?;
        let cropped = img.crop_imm(
            bbox.left,
            bbox.top,
            bbox.right - bbox.left,
            bbox.bottom - bbox.top,
        );
        let dst = out_dir.join(name.as_ref());
        cropped
            .save(&dst)
            .with_context(|| format!("write '{}'", dst.display()))?;
    }
    println!();

    Ok((total, out_dir))
}

/// The top-left origin and side of a centered square crop, with the side
/// clamped to fit the image.
pub fn square_box(width: u32, height: u32, side: u32) -> (u32, u32, u32) {
    let side = side.min(width).min(height);
    ((width - side) / 2, (height - side) / 2, side)
}

/// Crop a centered `side` x `side` square from every frame, writing to a
/// `<dir>-cropped` sibling. Per-frame failures are reported and skipped.
pub fn crop_square(dir: &Path, side: u32) -> FramepostResult<(usize, PathBuf)> {
    if side == 0 {
        return Err(FramepostError::validation("side length must be positive"));
    }

    let seq = FrameSequence::scan(dir)?;
    if seq.is_empty() {
        return Err(FramepostError::usage(format!(
            "no PNG files found in '{}'",
            dir.display()
        )));
    }

    let out_dir = sibling_dir(dir, "-cropped")?;
    let total = seq.total();
    println!(
        "Found {total} PNG file(s). Saving cropped images to: {}\n",
        out_dir.display()
    );

    let mut written = 0usize;
    for (idx, path) in seq.frames().iter().enumerate() {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        let result = (|| -> FramepostResult<()> {
            let img = image::open(path)
                .with_context(|| format!("decode '{}'", path.display()))?;
            let (x, y, s) = square_box(img.width(), img.height(), side);
            let dst = out_dir.join(name.as_ref());
            img.crop_imm(x, y, s, s)
                .save(&dst)
                .with_context(|| format!("write '{}'", dst.display()))?;
            Ok(())
        })();

        match result {
            Ok(()) => {
                written += 1;
                let progress = (idx + 1) as f64 / total as f64 * 100.0;
                print!("\rProcessing {}/{} ({progress:5.1}%) - {name}", idx + 1, total);
                use std::io::Write as _;
                let _ = std::io::stdout().flush();
            }
            Err(err) => eprintln!("\nError processing {}: {err:#}", path.display()),
        }
    }
    println!("\nDone.");

    Ok((written, out_dir))
}

#[cfg(test)]
#[path = "../tests/unit/crop.rs"]
mod tests;
