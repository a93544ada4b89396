//! Flatten transparent frames onto an opaque black background.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::{RgbImage, RgbaImage};

use crate::foundation::error::{FramepostError, FramepostResult};
use crate::foundation::math::mul_div255_u8;
use crate::sequence::{FrameSequence, sibling_dir};

/// Composite an RGBA image over opaque black and drop the alpha channel.
/// Over black, the blend reduces to scaling each channel by its alpha.
pub fn flatten_black(img: &RgbaImage) -> RgbImage {
    let (width, height) = img.dimensions();
    let mut out = RgbImage::new(width, height);
    for (src, dst) in img.pixels().zip(out.pixels_mut()) {
        let a = u16::from(src.0[3]);
        dst.0 = [
            mul_div255_u8(u16::from(src.0[0]), a),
            mul_div255_u8(u16::from(src.0[1]), a),
            mul_div255_u8(u16::from(src.0[2]), a),
        ];
    }
    out
}

/// Fill every frame in `dir` with a black background, writing RGB PNGs to a
/// `<dir>-filled` sibling. Per-frame failures are reported and skipped.
pub fn fill_sequence(dir: &Path) -> FramepostResult<(usize, PathBuf)> {
    let seq = FrameSequence::scan(dir)?;
    if seq.is_empty() {
        return Err(FramepostError::usage(format!(
            "no PNG files found in '{}'",
            dir.display()
        )));
    }

    let out_dir = sibling_dir(dir, "-filled")?;
    let total = seq.total();
    println!(
        "Found {total} PNG file(s). Writing filled images to: {}\n",
        out_dir.display()
    );

    let mut written = 0usize;
    for (idx, path) in seq.frames().iter().enumerate() {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        let result = (|| -> FramepostResult<()> {
            let rgba = image::open(path)
                .with_context(|| format!("decode '{}'", path.display()))?
                .to_rgba8();
            let dst = out_dir.join(name.as_ref());
            flatten_black(&rgba)
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
#[path = "../tests/unit/fill.rs"]
mod tests;
