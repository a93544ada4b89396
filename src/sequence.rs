//! Frame-sequence plumbing shared by every directory-oriented tool.
//!
//! A sequence is just a directory of `.png` files; the lexicographic filename
//! order IS the 1-based frame index. All IO is front-loaded here so the
//! per-frame processing loops stay free of directory walking.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{FramepostError, FramepostResult};
use crate::foundation::math::digit_width;

/// A sorted listing of the PNG frames in one input directory.
#[derive(Debug, Clone)]
pub struct FrameSequence {
    dir: PathBuf,
    frames: Vec<PathBuf>,
}

impl FrameSequence {
    /// List the `.png` files (case-insensitive extension) in `dir`, sorted by
    /// filename. Fails if `dir` is missing or not a directory; an empty
    /// sequence is not an error here, callers decide that policy.
    pub fn scan(dir: &Path) -> FramepostResult<Self> {
        if !dir.is_dir() {
            return Err(FramepostError::usage(format!(
                "\"{}\" is not a directory",
                dir.display()
            )));
        }

        let mut frames = Vec::new();
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("read directory '{}'", dir.display()))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("read entry in '{}'", dir.display()))?;
            let path = entry.path();
            if path.is_file() && has_png_extension(&path) {
                frames.push(path);
            }
        }
        frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(Self {
            dir: dir.to_path_buf(),
            frames,
        })
    }

    /// The input directory this sequence was scanned from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Sorted frame paths.
    pub fn frames(&self) -> &[PathBuf] {
        &self.frames
    }

    /// Total frame count.
    pub fn total(&self) -> usize {
        self.frames.len()
    }

    /// Whether the directory held zero matching images.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Zero-pad width for frame-index tokens: the digit count of the total,
    /// so frame 7 of 120 renders as `007`.
    pub fn pad_width(&self) -> usize {
        digit_width(self.total())
    }
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// `<parent>/<name><suffix>` next to the input directory, created if absent.
pub fn sibling_dir(input: &Path, suffix: &str) -> FramepostResult<PathBuf> {
    let name = input
        .file_name()
        .ok_or_else(|| FramepostError::usage(format!("\"{}\" has no name", input.display())))?;
    let mut out_name = name.to_os_string();
    out_name.push(suffix);
    let out = input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(out_name);
    std::fs::create_dir_all(&out)
        .with_context(|| format!("create output dir '{}'", out.display()))?;
    Ok(out)
}

/// `<stem><suffix><ext>` next to a file input (`curve.txt` -> `curve-scaled.txt`).
pub fn sibling_file(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    input.with_file_name(name)
}

#[cfg(test)]
#[path = "../tests/unit/sequence.rs"]
mod tests;
