//! GeoTIFF export tools: PNG conversion with a world-file sidecar, and a
//! metadata-stripping re-encode.
//!
//! Full geospatial raster semantics are out of scope; this covers the 1-4
//! band, 8/16-bit-or-scaled layouts the render pipeline actually produces.
//! Georeferencing is read from the ModelPixelScale / ModelTiepoint tags.

use std::io::{BufReader, BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use image::DynamicImage;
use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::colortype;
use tiff::encoder::compression::Deflate;
use tiff::encoder::{TiffEncoder, TiffValue};
use tiff::tags::Tag;

use crate::foundation::error::{FramepostError, FramepostResult};

const MODEL_PIXEL_SCALE: u16 = 33550;
const MODEL_TIEPOINT: u16 = 33922;

/// Georeferencing tags carried through a conversion.
#[derive(Debug, Clone, Default)]
pub struct GeoTags {
    /// ModelPixelScale: model units per pixel in x, y, z.
    pub pixel_scale: Option<Vec<f64>>,
    /// ModelTiepoint: raster (i, j, k) -> model (x, y, z) anchor points.
    pub tiepoint: Option<Vec<f64>>,
}

impl GeoTags {
    /// The six world-file lines (x-scale, rotations, negative y-scale,
    /// center coordinates of the top-left pixel), when both tags are usable.
    pub fn world_file_lines(&self) -> Option<[f64; 6]> {
        let scale = self.pixel_scale.as_ref().filter(|s| s.len() >= 2)?;
        let tie = self.tiepoint.as_ref().filter(|t| t.len() >= 6)?;
        let (sx, sy) = (scale[0], scale[1]);
        // Anchor the model coordinates back to raster (0, 0).
        let origin_x = tie[3] - tie[0] * sx;
        let origin_y = tie[4] + tie[1] * sy;
        Some([
            sx,
            0.0,
            0.0,
            -sy,
            origin_x + sx / 2.0,
            origin_y - sy / 2.0,
        ])
    }
}

struct Raster {
    width: u32,
    height: u32,
    color: ColorType,
    data: DecodingResult,
    geo: GeoTags,
}

fn open_raster(path: &Path) -> FramepostResult<Raster> {
    if !path.is_file() {
        return Err(FramepostError::usage(format!(
            "input file does not exist: {}",
            path.display()
        )));
    }
    let file = std::fs::File::open(path)
        .with_context(|| format!("open '{}'", path.display()))?;
    let mut decoder = Decoder::new(BufReader::new(file))
        .with_context(|| format!("open tiff '{}'", path.display()))?;

    let (width, height) = decoder
        .dimensions()
        .with_context(|| format!("read dimensions of '{}'", path.display()))?;
    let color = decoder
        .colortype()
        .with_context(|| format!("read color type of '{}'", path.display()))?;

    let geo = GeoTags {
        pixel_scale: read_f64_tag(&mut decoder, Tag::ModelPixelScaleTag),
        tiepoint: read_f64_tag(&mut decoder, Tag::ModelTiepointTag),
    };

    let data = decoder
        .read_image()
        .with_context(|| format!("decode '{}'", path.display()))?;

    Ok(Raster {
        width,
        height,
        color,
        data,
        geo,
    })
}

fn read_f64_tag<R: std::io::Read + Seek>(
    decoder: &mut Decoder<R>,
    tag: Tag,
) -> Option<Vec<f64>> {
    decoder
        .find_tag(tag)
        .ok()
        .flatten()
        .and_then(|v| v.into_f64_vec().ok())
}

fn band_count(color: ColorType) -> FramepostResult<u32> {
    match color {
        ColorType::Gray(_) => Ok(1),
        ColorType::GrayA(_) => Ok(2),
        ColorType::RGB(_) => Ok(3),
        ColorType::RGBA(_) => Ok(4),
        other => Err(FramepostError::raster(format!(
            "expected 1, 2, 3, or 4 bands; found {other:?}"
        ))),
    }
}

/// Convert a GeoTIFF to a PNG next to the input (`<stem>.png`), plus a
/// `.pgw` world file when the raster is georeferenced. 8- and 16-bit
/// samples pass through unchanged; other sample types are min-max scaled to
/// 8-bit per band (flat bands map to 0).
pub fn to_png(path: &Path) -> FramepostResult<(PathBuf, Option<PathBuf>)> {
    let raster = open_raster(path)?;
    let bands = band_count(raster.color)?;
    let (w, h) = (raster.width, raster.height);

    let img = match raster.data {
        DecodingResult::U8(data) => from_u8(bands, w, h, data)?,
        DecodingResult::U16(data) => from_u16(bands, w, h, data)?,
        other => {
            let samples = to_f64_samples(other);
            from_u8(bands, w, h, scale_to_u8(&samples, bands as usize))?
        }
    };

    let out_path = path.with_extension("png");
    img.save(&out_path)
        .with_context(|| format!("write '{}'", out_path.display()))?;

    let world_path = match raster.geo.world_file_lines() {
        Some(lines) => {
            let path = path.with_extension("pgw");
            let body: String = lines.map(|v| format!("{v:.10}\n")).concat();
            std::fs::write(&path, body)
                .with_context(|| format!("write '{}'", path.display()))?;
            Some(path)
        }
        None => None,
    };

    Ok((out_path, world_path))
}

fn from_u8(bands: u32, w: u32, h: u32, data: Vec<u8>) -> FramepostResult<DynamicImage> {
    let short = || FramepostError::raster("sample buffer shorter than expected");
    Ok(match bands {
        1 => DynamicImage::ImageLuma8(image::GrayImage::from_raw(w, h, data).ok_or_else(short)?),
        2 => DynamicImage::ImageLumaA8(
            image::ImageBuffer::from_raw(w, h, data).ok_or_else(short)?,
        ),
        3 => DynamicImage::ImageRgb8(image::RgbImage::from_raw(w, h, data).ok_or_else(short)?),
        _ => DynamicImage::ImageRgba8(image::RgbaImage::from_raw(w, h, data).ok_or_else(short)?),
    })
}

fn from_u16(bands: u32, w: u32, h: u32, data: Vec<u16>) -> FramepostResult<DynamicImage> {
    let short = || FramepostError::raster("sample buffer shorter than expected");
    Ok(match bands {
        1 => DynamicImage::ImageLuma16(image::ImageBuffer::from_raw(w, h, data).ok_or_else(short)?),
        2 => DynamicImage::ImageLumaA16(
            image::ImageBuffer::from_raw(w, h, data).ok_or_else(short)?,
        ),
        3 => DynamicImage::ImageRgb16(image::ImageBuffer::from_raw(w, h, data).ok_or_else(short)?),
        _ => DynamicImage::ImageRgba16(image::ImageBuffer::from_raw(w, h, data).ok_or_else(short)?),
    })
}

fn to_f64_samples(data: DecodingResult) -> Vec<f64> {
    match data {
        DecodingResult::U8(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::U16(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::U32(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::U64(v) => v.into_iter().map(|x| x as f64).collect(),
        DecodingResult::I8(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::I16(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::I32(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::I64(v) => v.into_iter().map(|x| x as f64).collect(),
        DecodingResult::F32(v) => v.into_iter().map(f64::from).collect(),
        DecodingResult::F64(v) => v,
    }
}

/// Min-max scale interleaved samples to `[0, 255]` independently per band.
/// A band with a single value maps to 0 rather than dividing by zero.
pub fn scale_to_u8(samples: &[f64], bands: usize) -> Vec<u8> {
    let mut mins = vec![f64::INFINITY; bands];
    let mut maxs = vec![f64::NEG_INFINITY; bands];
    for (i, &s) in samples.iter().enumerate() {
        let b = i % bands;
        mins[b] = mins[b].min(s);
        maxs[b] = maxs[b].max(s);
    }

    samples
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let b = i % bands;
            let range = maxs[b] - mins[b];
            if range <= 0.0 || !range.is_finite() {
                0
            } else {
                (((s - mins[b]) / range) * 255.0).round().clamp(0.0, 255.0) as u8
            }
        })
        .collect()
}

/// Re-encode a GeoTIFF keeping only pixels, dimensions, sample layout, and
/// the georeferencing tags; every other dataset or band tag is dropped.
/// Writes a `<stem>-clean.tif` sibling. Only 1- and 3-band 8/16-bit rasters
/// are supported, matching what the pipeline feeds it.
pub fn strip(path: &Path) -> FramepostResult<PathBuf> {
    let raster = open_raster(path)?;
    let out_path = {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.with_file_name(format!("{stem}-clean.tif"))
    };

    let file = std::fs::File::create(&out_path)
        .with_context(|| format!("create '{}'", out_path.display()))?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))
        .with_context(|| format!("start tiff '{}'", out_path.display()))?;

    let (w, h) = (raster.width, raster.height);
    match (raster.color, raster.data) {
        (ColorType::Gray(8), DecodingResult::U8(data)) => {
            write_clean::<colortype::Gray8, _>(&mut encoder, w, h, &data, &raster.geo)?
        }
        (ColorType::Gray(16), DecodingResult::U16(data)) => {
            write_clean::<colortype::Gray16, _>(&mut encoder, w, h, &data, &raster.geo)?
        }
        (ColorType::RGB(8), DecodingResult::U8(data)) => {
            write_clean::<colortype::RGB8, _>(&mut encoder, w, h, &data, &raster.geo)?
        }
        (ColorType::RGB(16), DecodingResult::U16(data)) => {
            write_clean::<colortype::RGB16, _>(&mut encoder, w, h, &data, &raster.geo)?
        }
        (color, _) => {
            return Err(FramepostError::raster(format!(
                "strip supports 1- or 3-band 8/16-bit rasters; found {color:?}"
            )));
        }
    }

    Ok(out_path)
}

fn write_clean<C, W>(
    encoder: &mut TiffEncoder<W>,
    width: u32,
    height: u32,
    data: &[C::Inner],
    geo: &GeoTags,
) -> FramepostResult<()>
where
    C: colortype::ColorType,
    W: Write + Seek,
    [C::Inner]: TiffValue,
{
    let mut img = encoder
        .new_image_with_compression::<C, Deflate>(width, height, Deflate::default())
        .context("start tiff image")?;
    if let Some(scale) = &geo.pixel_scale {
        img.encoder()
            .write_tag(Tag::Unknown(MODEL_PIXEL_SCALE), &scale[..])
            .context("write ModelPixelScale")?;
    }
    if let Some(tie) = &geo.tiepoint {
        img.encoder()
            .write_tag(Tag::Unknown(MODEL_TIEPOINT), &tie[..])
            .context("write ModelTiepoint")?;
    }
    img.write_data(data).context("write tiff data")?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/geotiff.rs"]
mod tests;
