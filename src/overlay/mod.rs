//! Corner text overlay renderer.
//!
//! For a sequence of same-sized frames, draws up to four independent
//! multi-line text blocks, one anchored to each corner, with per-line
//! emphasis sizing, token substitution, and a derived elapsed-time label.
//! Output goes to a `<dir>-overlay` sibling directory, one image per input.

pub mod config;
pub mod layout;
pub mod line;
pub mod render;
pub mod time;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::error::FramepostResult;
use crate::sequence::{FrameSequence, sibling_dir};
use config::OverlayConfig;
use layout::{Corner, place_block};
use line::LineTemplate;
use render::CornerFont;
use time::TimeFormat;

/// What an overlay run did.
#[derive(Debug)]
pub enum OverlayOutcome {
    /// The directory held zero matching images; nothing was rendered.
    /// This is informational, not an error.
    NoFrames,
    /// Frames were processed.
    Done {
        /// Number of output files written.
        written: usize,
        /// The `-overlay` sibling directory.
        out_dir: PathBuf,
    },
}

struct PreparedCorner {
    corner: Corner,
    templates: Vec<LineTemplate>,
    font: CornerFont,
    color: [u8; 4],
    offset_x: u32,
    offset_y: u32,
}

/// 1-based full-folder indices of the frames selected by `filter`. An empty
/// filter selects everything; otherwise only exact filename matches, keeping
/// each file's position among all frames so frame tokens stay stable across
/// a selective re-run.
fn select_frames<'a>(frames: &'a [PathBuf], filter: &[String]) -> Vec<(usize, &'a PathBuf)> {
    frames
        .iter()
        .enumerate()
        .map(|(i, path)| (i + 1, path))
        .filter(|(_, path)| {
            filter.is_empty()
                || path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| filter.iter().any(|f| f == name))
        })
        .collect()
}

/// Run the overlay renderer over every PNG in `input` (or only the frames
/// named by the config's filter).
///
/// Per-frame failures are reported and skipped; only pre-flight problems
/// (bad directory, no usable font) abort the run.
pub fn run(input: &Path, config: &OverlayConfig) -> FramepostResult<OverlayOutcome> {
    let seq = FrameSequence::scan(input)?;
    let out_dir = sibling_dir(input, "-overlay")?;

    if seq.is_empty() {
        println!("[info] No PNG files found in {}", seq.dir().display());
        return Ok(OverlayOutcome::NoFrames);
    }

    let selected = select_frames(seq.frames(), &config.filter);
    if selected.is_empty() {
        println!(
            "[info] No matching PNG files to process in {}",
            seq.dir().display()
        );
        return Ok(OverlayOutcome::NoFrames);
    }

    let total = seq.total();
    let pad_width = seq.pad_width();
    let total_str = total.to_string();
    let time_format = TimeFormat::new(config.hours_per_frame, &config.time_template, total);

    // Read-only, established once before the frame loop.
    let mut corners = Vec::with_capacity(4);
    for corner in Corner::ALL {
        let spec = config.spec(corner);
        corners.push(PreparedCorner {
            corner,
            templates: line::normalize(&spec.lines),
            font: CornerFont::load(&spec.font_path, spec.size, config.emphasis_scale)?,
            color: spec.color,
            offset_x: spec.offset_x,
            offset_y: spec.offset_y,
        });
    }

    let mut written = 0usize;
    for (idx, src) in selected {
        let name = src
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dst = out_dir.join(&name);

        match render_frame(src, &dst, &corners, config, idx, pad_width, &total_str, &time_format) {
            Ok(()) => {
                written += 1;
                println!("[{idx}/{total}] {name} -> {}", dst.display());
            }
            Err(err) => {
                eprintln!("[error] Failed on {name}: {err:#}");
            }
        }
    }

    println!("[done] Wrote {written} file(s) to {}", out_dir.display());
    Ok(OverlayOutcome::Done { written, out_dir })
}

#[allow(clippy::too_many_arguments)]
fn render_frame(
    src: &Path,
    dst: &Path,
    corners: &[PreparedCorner],
    config: &OverlayConfig,
    frame_index: usize,
    pad_width: usize,
    total_str: &str,
    time_format: &TimeFormat,
) -> FramepostResult<()> {
    let decoded = image::open(src)
        .with_context(|| format!("decode '{}'", src.display()))?;
    let dims = render::read_pixel_dims(src);
    let mut base: RgbaImage = decoded.to_rgba8();
    let (width, height) = base.dimensions();

    let frame_str = format!("{frame_index:0pad_width$}");
    let time_label = time_format.label(frame_index);

    let mut layer = RgbaImage::from_pixel(width, height, image::Rgba([0, 0, 0, 0]));
    for prepared in corners {
        let lines = line::resolve(&prepared.templates, &frame_str, total_str, &time_label);
        let placed = place_block(
            prepared.corner,
            &lines,
            &prepared.font,
            width,
            height,
            prepared.offset_x,
            prepared.offset_y,
            config.line_spacing,
        );
        for l in &placed {
            render::draw_line(&mut layer, &prepared.font, l, prepared.color);
        }
    }

    render::composite_over(&mut base, &layer);
    render::save_png(dst, &base, dims)
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/select.rs"]
mod tests;
