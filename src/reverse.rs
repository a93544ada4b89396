//! Reverse a frame sequence by copying files in reverse order with fresh
//! sequential numbering. Pure byte copies, no re-encode.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{FramepostError, FramepostResult};
use crate::sequence::{FrameSequence, sibling_dir};

/// Zero-pad width for the renumbered output: the widest all-digit stem among
/// the inputs, falling back to 4 when no stem is purely numeric.
pub fn output_pad_width(frames: &[PathBuf]) -> usize {
    frames
        .iter()
        .filter_map(|p| p.file_stem().and_then(|s| s.to_str()))
        .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
        .map(str::len)
        .max()
        .unwrap_or(4)
}

/// Copy the frames of `dir` in reverse order into a `<dir>-reversed`
/// sibling, renumbered `0001.png`, `0002.png`, ...
pub fn reverse_sequence(dir: &Path) -> FramepostResult<(usize, PathBuf)> {
    let seq = FrameSequence::scan(dir)?;
    if seq.is_empty() {
        return Err(FramepostError::usage(format!(
            "no PNG files found in '{}'",
            dir.display()
        )));
    }

    let pad = output_pad_width(seq.frames());
    let out_dir = sibling_dir(dir, "-reversed")?;
    let total = seq.total();
    println!("Reversing {total} files...\n");

    for (idx, src) in seq.frames().iter().rev().enumerate() {
        let dst_name = format!("{:0pad$}.png", idx + 1);
        let dst = out_dir.join(&dst_name);
        std::fs::copy(src, &dst)
            .with_context(|| format!("copy '{}' -> '{}'", src.display(), dst.display()))?;
        print!(
            "\rCopied {} -> {dst_name}",
            src.file_name().unwrap_or_default().to_string_lossy()
        );
        use std::io::Write as _;
        let _ = std::io::stdout().flush();
    }
    println!("\n\nDone.");

    Ok((total, out_dir))
}

#[cfg(test)]
#[path = "../tests/unit/reverse.rs"]
mod tests;
