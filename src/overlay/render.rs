//! Glyph rasterization and compositing for the overlay renderer.
//!
//! Text is drawn onto a transparent RGBA layer the size of the frame, then
//! alpha-composited over the source image. Glyph coverage produces
//! straight-alpha pixels, so the over-blend here works in straight alpha.

use std::io::BufWriter;
use std::path::Path;

use ab_glyph::{Font as _, FontArc, PxScale, ScaleFont as _, point};
use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::error::{FramepostError, FramepostResult};
use crate::foundation::math::over_straight;
use crate::overlay::layout::{Measure, PlacedLine};

/// Well-known font locations tried when a configured font fails to load.
const FALLBACK_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
];

/// One corner's font at its base and emphasis sizes.
#[derive(Debug, Clone)]
pub struct CornerFont {
    font: FontArc,
    base: PxScale,
    emphasis: PxScale,
}

impl CornerFont {
    /// Load `path` at `size`, with an emphasis variant at
    /// `round(size * emphasis_scale)`. Falls back to a well-known system
    /// font (warned once) when `path` cannot be loaded.
    pub fn load(path: &Path, size: f32, emphasis_scale: f32) -> FramepostResult<Self> {
        let font = match load_font_file(path) {
            Ok(font) => font,
            Err(err) => {
                tracing::warn!(
                    font = %path.display(),
                    error = %err,
                    "could not load configured font; using fallback"
                );
                load_fallback_font()?
            }
        };

        Ok(Self {
            font,
            base: PxScale::from(size),
            emphasis: PxScale::from((size * emphasis_scale).round()),
        })
    }

    fn scale(&self, emphasis: bool) -> PxScale {
        if emphasis { self.emphasis } else { self.base }
    }
}

impl Measure for CornerFont {
    fn line_height(&self, emphasis: bool) -> f32 {
        self.font.as_scaled(self.scale(emphasis)).height()
    }

    fn text_width(&self, text: &str, emphasis: bool) -> f32 {
        let scaled = self.font.as_scaled(self.scale(emphasis));
        let mut width = 0.0;
        let mut prev = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }
}

fn load_font_file(path: &Path) -> anyhow::Result<FontArc> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
    FontArc::try_from_vec(bytes).with_context(|| format!("parse font '{}'", path.display()))
}

fn load_fallback_font() -> FramepostResult<FontArc> {
    for candidate in FALLBACK_FONTS {
        if let Ok(font) = load_font_file(Path::new(candidate)) {
            return Ok(font);
        }
    }
    Err(FramepostError::usage(
        "no usable font: configured font failed to load and no fallback font was found",
    ))
}

/// Draw one placed line onto `layer`. Pixels outside the layer are clipped.
pub fn draw_line(layer: &mut RgbaImage, font: &CornerFont, line: &PlacedLine<'_>, color: [u8; 4]) {
    let scaled = font.font.as_scaled(font.scale(line.emphasis));
    let baseline = line.y + scaled.ascent();

    let mut cursor = line.x;
    let mut prev = None;
    for ch in line.text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = prev {
            cursor += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(font.scale(line.emphasis), point(cursor, baseline));
        cursor += scaled.h_advance(id);
        prev = Some(id);

        let Some(outlined) = font.font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let x = bounds.min.x as i64 + i64::from(gx);
            let y = bounds.min.y as i64 + i64::from(gy);
            if x < 0 || y < 0 || x >= i64::from(layer.width()) || y >= i64::from(layer.height()) {
                return;
            }
            let alpha = (coverage.clamp(0.0, 1.0) * f32::from(color[3])).round() as u8;
            if alpha == 0 {
                return;
            }
            let px = layer.get_pixel_mut(x as u32, y as u32);
            px.0 = over_straight(px.0, [color[0], color[1], color[2], alpha]);
        });
    }
}

/// Straight-alpha composite of `layer` over `base`, in place.
pub fn composite_over(base: &mut RgbaImage, layer: &RgbaImage) {
    debug_assert_eq!(base.dimensions(), layer.dimensions());
    for (dst, src) in base.pixels_mut().zip(layer.pixels()) {
        dst.0 = over_straight(dst.0, src.0);
    }
}

/// Read the pHYs (pixel density) chunk from a source PNG, if any.
pub fn read_pixel_dims(path: &Path) -> Option<png::PixelDimensions> {
    let file = std::fs::File::open(path).ok()?;
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let reader = decoder.read_info().ok()?;
    reader.info().pixel_dims
}

/// Save an RGBA8 image as PNG, carrying through pixel density when present.
/// The `image` crate's encoder cannot express pHYs, so this goes through the
/// `png` crate directly.
pub fn save_png(path: &Path, img: &RgbaImage, dims: Option<png::PixelDimensions>) -> FramepostResult<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create '{}'", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), img.width(), img.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    if let Some(dims) = dims {
        encoder.set_pixel_dims(Some(dims));
    }
    let mut writer = encoder
        .write_header()
        .with_context(|| format!("write png header '{}'", path.display()))?;
    writer
        .write_image_data(img.as_raw())
        .with_context(|| format!("write png data '{}'", path.display()))?;
    writer
        .finish()
        .with_context(|| format!("finish png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/render.rs"]
mod tests;
